//! Connection lifecycle: the per-connection controller, its timers, and the
//! reconnect supervisor that strings connections together.

pub mod controller;
pub mod logging;
pub mod timer;

use std::time::Duration;

use tracing::{error, info};

pub use controller::{Controller, SessionOutcome, TICK_INTERVAL};
pub use timer::{TimerId, TimerManager};

use crate::client::session::SessionFactory;
use crate::config::{BotConfig, ConfigError};

/// Run the bot until it stays disconnected.
///
/// Validates the configuration once, then connects and runs a controller to
/// its end. With auto-reconnect on, each end schedules exactly one new
/// attempt after the fixed configured delay; connections are strictly
/// sequential and every attempt gets a fresh controller, fresh timers, and
/// fresh behavior state. A failed connect is treated like a disconnect for
/// reconnect purposes.
pub async fn run_bot(
    config: &BotConfig,
    factory: &mut dyn SessionFactory,
) -> Result<(), ConfigError> {
    config.validate()?;
    let opts = config.connect_options();

    loop {
        info!("Connecting to {}", opts);
        match factory.connect(&opts) {
            Ok(handle) => {
                let controller = Controller::new(config.clone(), handle.session);
                let outcome = controller.run(handle.events).await;
                info!("Session ended: {:?}", outcome);
            }
            Err(e) => {
                error!("Failed to create bot: {}", e);
            }
        }

        if !config.utils.auto_reconnect {
            return Ok(());
        }

        let delay = Duration::from_millis(config.utils.auto_reconnect_delay_ms);
        info!("Reconnecting in {}ms", config.utils.auto_reconnect_delay_ms);
        tokio::time::sleep(delay).await;
    }
}
