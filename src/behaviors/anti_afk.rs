use std::time::Duration;

use super::{Behavior, BehaviorContext};
use crate::client::types::Control;
use crate::config::AntiAfkConfig;
use crate::runner::timer::TimerId;

/// How often the rotate option nudges the view.
const ROTATE_INTERVAL: Duration = Duration::from_millis(100);

/// Degrees of yaw added per rotate firing. The yaw accumulates without
/// wraparound; the session is free to normalize it.
const ROTATE_STEP: f32 = 1.0;

/// Idle-kick countermeasures. Any subset of the options can be active:
/// persistent sneak/jump, a periodic hit (attack the nearest hostile when
/// configured and one is in range, else an empty arm swing), and a periodic
/// one-degree look rotation.
pub struct AntiAfk {
    config: AntiAfkConfig,
    hit_timer: Option<TimerId>,
    rotate_timer: Option<TimerId>,
}

impl AntiAfk {
    pub fn new(config: AntiAfkConfig) -> Self {
        Self {
            config,
            hit_timer: None,
            rotate_timer: None,
        }
    }
}

impl Behavior for AntiAfk {
    fn id(&self) -> &'static str {
        "anti_afk"
    }

    fn name(&self) -> &'static str {
        "anti-afk"
    }

    fn on_start(&mut self, ctx: &mut BehaviorContext) {
        if self.config.sneak {
            ctx.session().set_control_state(Control::Sneak, true);
        }

        if self.config.jump {
            ctx.session().set_control_state(Control::Jump, true);
        }

        if self.config.hit.enabled {
            let interval = Duration::from_millis(self.config.hit.delay_ms);
            self.hit_timer = Some(ctx.schedule_every(interval, "anti_afk_hit"));
        }

        if self.config.rotate {
            self.rotate_timer = Some(ctx.schedule_every(ROTATE_INTERVAL, "anti_afk_rotate"));
        }
    }

    fn on_tick(&mut self, ctx: &mut BehaviorContext) {
        if let Some(timer) = self.hit_timer {
            if ctx.fired(timer) {
                let attacked =
                    self.config.hit.attack_mobs && ctx.session().attack_nearest_hostile();
                if !attacked {
                    ctx.session().swing_arm();
                }
            }
        }

        if let Some(timer) = self.rotate_timer {
            if ctx.fired(timer) {
                let (yaw, pitch) = ctx.session().orientation();
                ctx.session().look(yaw + ROTATE_STEP, pitch);
            }
        }
    }
}
