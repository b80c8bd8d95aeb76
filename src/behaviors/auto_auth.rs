use std::time::Duration;

use tracing::info;

use super::{Behavior, BehaviorContext};
use crate::config::AutoAuthConfig;
use crate::runner::timer::TimerId;

/// Delay between spawning and sending the auth commands, so the server-side
/// auth plugin has finished greeting us.
const AUTH_DELAY: Duration = Duration::from_millis(500);

/// Sends /register and /login once, shortly after spawn. Fire-and-forget:
/// there is no check that the login actually succeeded.
pub struct AutoAuth {
    config: AutoAuthConfig,
    timer: Option<TimerId>,
}

impl AutoAuth {
    pub fn new(config: AutoAuthConfig) -> Self {
        Self {
            config,
            timer: None,
        }
    }
}

impl Behavior for AutoAuth {
    fn id(&self) -> &'static str {
        "auto_auth"
    }

    fn name(&self) -> &'static str {
        "auto-auth"
    }

    fn on_start(&mut self, ctx: &mut BehaviorContext) {
        self.timer = Some(ctx.schedule_once(AUTH_DELAY, "auto_auth"));
    }

    fn on_tick(&mut self, ctx: &mut BehaviorContext) {
        let Some(timer) = self.timer else {
            return;
        };

        if ctx.fired(timer) {
            let password = self.config.password.clone();
            ctx.session()
                .chat(&format!("/register {} {}", password, password));
            ctx.session().chat(&format!("/login {}", password));
            info!(target: "behaviors", "Authentication commands sent");
            self.timer = None;
        }
    }
}
