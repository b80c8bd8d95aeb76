pub mod account_config;
pub mod bot_config;
pub mod position_config;
pub mod server_config;
pub mod utils_config;

pub use account_config::AccountConfig;
pub use bot_config::{BotConfig, ConfigError, ConfigLoadError};
pub use position_config::PositionConfig;
pub use server_config::ServerConfig;
pub use utils_config::{
    AntiAfkConfig, AutoAuthConfig, ChatMessagesConfig, CircleWalkConfig, HitConfig, UtilsConfig,
};
