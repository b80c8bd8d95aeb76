//! Independent, individually togglable bot behaviors.
//!
//! Each behavior is activated once after spawn and from then on only hears
//! events and ticks. Behaviors never talk to each other and keep their own
//! counters; a reconnect builds a fresh set with zeroed state.

pub mod anti_afk;
pub mod auto_auth;
pub mod chat_messages;
pub mod circle_walk;
pub mod context;
pub mod move_to_target;

use tracing::info;

pub use context::BehaviorContext;

use crate::client::events::GameEvent;
use crate::config::BotConfig;

pub trait Behavior: Send {
    /// Short identifier used in log targets.
    fn id(&self) -> &'static str;

    /// Human-readable name.
    fn name(&self) -> &'static str;

    /// One-time activation, right after the spawn event.
    fn on_start(&mut self, ctx: &mut BehaviorContext);

    /// A game event arrived while this behavior is active.
    fn on_event(&mut self, _event: &GameEvent, _ctx: &mut BehaviorContext) {}

    /// Called on every controller tick.
    fn on_tick(&mut self, _ctx: &mut BehaviorContext) {}
}

/// Build the set of behaviors the configuration enables, in activation
/// order. Circle-walk rides on the anti-afk toggle but runs as its own
/// behavior so its waypoint index stays private.
pub fn build_behaviors(config: &BotConfig) -> Vec<Box<dyn Behavior>> {
    let mut behaviors: Vec<Box<dyn Behavior>> = Vec::new();

    if config.utils.auto_auth.enabled {
        behaviors.push(Box::new(auto_auth::AutoAuth::new(
            config.utils.auto_auth.clone(),
        )));
    }

    if config.utils.chat_messages.enabled {
        behaviors.push(Box::new(chat_messages::ChatMessages::new(
            config.utils.chat_messages.clone(),
        )));
    }

    if config.position.enabled {
        behaviors.push(Box::new(move_to_target::MoveToTarget::new(config.position)));
    }

    if config.utils.anti_afk.enabled {
        behaviors.push(Box::new(anti_afk::AntiAfk::new(
            config.utils.anti_afk.clone(),
        )));

        if config.utils.anti_afk.circle_walk.enabled {
            behaviors.push(Box::new(circle_walk::CircleWalk::new(
                config.utils.anti_afk.circle_walk.radius,
            )));
        }
    }

    for behavior in &behaviors {
        info!(target: "behaviors", "Started {} module", behavior.name());
    }

    behaviors
}
