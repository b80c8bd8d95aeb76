use tracing::info;

use super::{Behavior, BehaviorContext};
use crate::client::events::GameEvent;
use crate::config::PositionConfig;

/// Issues a single pathfinding goal for the configured coordinate. Arrival
/// is reported via the goal-reached event; the goal is never re-issued if
/// the path gets interrupted.
pub struct MoveToTarget {
    target: PositionConfig,
}

impl MoveToTarget {
    pub fn new(target: PositionConfig) -> Self {
        Self { target }
    }
}

impl Behavior for MoveToTarget {
    fn id(&self) -> &'static str {
        "move_to_target"
    }

    fn name(&self) -> &'static str {
        "move-to-target"
    }

    fn on_start(&mut self, ctx: &mut BehaviorContext) {
        info!(target: "behaviors", "Moving to target location {}", self.target);
        ctx.session().set_goal(self.target.goal());
    }

    fn on_event(&mut self, event: &GameEvent, ctx: &mut BehaviorContext) {
        if let GameEvent::GoalReached = event {
            let position = ctx.session().position();
            info!(target: "behaviors", "Arrived at target location: {}", position);
        }
    }
}
