use std::{fs, path::Path, path::PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::client::session::ConnectOptions;
use crate::config::{
    account_config::AccountConfig, position_config::PositionConfig, server_config::ServerConfig,
    utils_config::UtilsConfig,
};

#[derive(Debug)]
pub enum ConfigLoadError {
    NotFound(PathBuf),
    ParseError(String),
    IoError(String),
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigLoadError::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            ConfigLoadError::ParseError(msg) => write!(f, "Failed to parse config: {}", msg),
            ConfigLoadError::IoError(msg) => write!(f, "IO error reading config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigLoadError {}

/// A configuration that cannot produce a connection attempt.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    MissingUsername,
    MissingHost,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingUsername => write!(f, "account.username must not be empty"),
            ConfigError::MissingHost => write!(f, "server.host must not be empty"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// The whole bot configuration. Loaded once at startup and treated as an
/// immutable value from then on; reconnects reuse it without a reload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    pub account: AccountConfig,
    pub server: ServerConfig,
    pub utils: UtilsConfig,
    pub position: PositionConfig,
}

impl BotConfig {
    pub fn config_path() -> PathBuf {
        use directories::ProjectDirs;
        match ProjectDirs::from("", "", "lurk") {
            Some(proj_dirs) => proj_dirs.config_dir().join("config.toml"),
            None => PathBuf::from("config.toml"),
        }
    }

    /// Load from an explicit path, or the platform config path when `None`.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigLoadError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path(),
        };

        if !path.exists() {
            return Err(ConfigLoadError::NotFound(path));
        }

        let content =
            fs::read_to_string(&path).map_err(|e| ConfigLoadError::IoError(e.to_string()))?;
        let config: BotConfig =
            toml::from_str(&content).map_err(|e| ConfigLoadError::ParseError(e.to_string()))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// The only validation the bot performs: without a username and a host
    /// there is nothing to connect to.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.account.username.trim().is_empty() {
            return Err(ConfigError::MissingUsername);
        }
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::MissingHost);
        }
        Ok(())
    }

    pub fn connect_options(&self) -> ConnectOptions {
        ConnectOptions {
            username: self.account.username.clone(),
            password: self.account.password.clone(),
            auth: self.account.auth,
            host: self.server.host.clone(),
            port: self.server.port,
            version: self.server.version.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> BotConfig {
        let mut config = BotConfig::default();
        config.account.username = "steve".to_string();
        config.server.host = "mc.example.org".to_string();
        config
    }

    #[test]
    fn valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn missing_username_is_rejected() {
        let mut config = valid_config();
        config.account.username = "  ".to_string();
        assert_eq!(config.validate(), Err(ConfigError::MissingUsername));
    }

    #[test]
    fn missing_host_is_rejected() {
        let mut config = valid_config();
        config.server.host = String::new();
        assert_eq!(config.validate(), Err(ConfigError::MissingHost));
    }

    #[test]
    fn parses_kebab_case_toml() {
        let raw = r#"
            [account]
            username = "steve"
            password = "hunter2"
            auth = "offline"

            [server]
            host = "mc.example.org"
            port = 25566
            version = "1.20.4"

            [position]
            enabled = true
            x = 100
            y = 64
            z = -200

            [utils]
            chat-log = false
            auto-reconnect = true
            auto-reconnect-delay-ms = 1500

            [utils.chat-messages]
            enabled = true
            repeat = true
            repeat-delay-secs = 30
            messages = ["hi", "bye"]

            [utils.anti-afk]
            enabled = true
            sneak = true

            [utils.anti-afk.hit]
            enabled = true
            delay-ms = 750
            attack-mobs = true

            [utils.anti-afk.circle-walk]
            enabled = true
            radius = 3.5
        "#;

        let config: BotConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.server.port, 25566);
        assert!(config.position.enabled);
        assert!(!config.utils.chat_log);
        assert!(config.utils.auto_reconnect);
        assert_eq!(config.utils.auto_reconnect_delay_ms, 1500);
        assert_eq!(config.utils.chat_messages.messages.len(), 2);
        assert_eq!(config.utils.chat_messages.repeat_delay_secs, 30);
        assert!(config.utils.anti_afk.sneak);
        assert_eq!(config.utils.anti_afk.hit.delay_ms, 750);
        assert!(config.utils.anti_afk.hit.attack_mobs);
        assert_eq!(config.utils.anti_afk.circle_walk.radius, 3.5);
        config.validate().unwrap();
    }

    #[test]
    fn defaults_fill_missing_tables() {
        let raw = r#"
            [account]
            username = "steve"

            [server]
            host = "mc.example.org"
        "#;

        let config: BotConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.server.port, 25565);
        assert!(config.utils.chat_log);
        assert!(!config.utils.auto_reconnect);
        assert!(!config.utils.anti_afk.enabled);
        assert!(!config.position.enabled);
    }
}
