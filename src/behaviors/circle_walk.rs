use std::time::Duration;

use super::{Behavior, BehaviorContext};
use crate::client::types::{Goal, Vec3};
use crate::runner::timer::TimerId;

/// How often the walk advances to the next waypoint.
const STEP_INTERVAL: Duration = Duration::from_millis(1000);

/// Walks a fixed square around wherever the bot stood at activation: four
/// cardinal waypoints at `radius`, cycled forever. The waypoints are
/// captured once and never re-centered, so they go stale if something else
/// displaces the bot.
pub struct CircleWalk {
    radius: f64,
    waypoints: Vec<Vec3>,
    next_index: usize,
    timer: Option<TimerId>,
}

impl CircleWalk {
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            waypoints: Vec::new(),
            next_index: 0,
            timer: None,
        }
    }

    /// The four cardinal offsets from `center`, in walk order.
    pub fn waypoints_around(center: Vec3, radius: f64) -> Vec<Vec3> {
        vec![
            Vec3::new(center.x + radius, center.y, center.z),
            Vec3::new(center.x, center.y, center.z + radius),
            Vec3::new(center.x - radius, center.y, center.z),
            Vec3::new(center.x, center.y, center.z - radius),
        ]
    }
}

impl Behavior for CircleWalk {
    fn id(&self) -> &'static str {
        "circle_walk"
    }

    fn name(&self) -> &'static str {
        "circle-walk"
    }

    fn on_start(&mut self, ctx: &mut BehaviorContext) {
        let center = ctx.session().position();
        self.waypoints = Self::waypoints_around(center, self.radius);
        self.timer = Some(ctx.schedule_every(STEP_INTERVAL, "circle_walk"));
    }

    fn on_tick(&mut self, ctx: &mut BehaviorContext) {
        let Some(timer) = self.timer else {
            return;
        };

        if ctx.fired(timer) {
            let waypoint = self.waypoints[self.next_index];
            ctx.session().set_goal(Goal::Column {
                x: waypoint.x,
                z: waypoint.z,
            });
            self.next_index = (self.next_index + 1) % self.waypoints.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_cardinal_waypoints_at_radius() {
        let center = Vec3::new(10.0, 64.0, -5.0);
        let radius = 3.0;
        let waypoints = CircleWalk::waypoints_around(center, radius);

        assert_eq!(waypoints.len(), 4);
        for waypoint in &waypoints {
            assert!((waypoint.distance_to(&center) - radius).abs() < 1e-9);
            assert_eq!(waypoint.y, center.y);
        }

        assert_eq!(waypoints[0], Vec3::new(13.0, 64.0, -5.0));
        assert_eq!(waypoints[1], Vec3::new(10.0, 64.0, -2.0));
        assert_eq!(waypoints[2], Vec3::new(7.0, 64.0, -5.0));
        assert_eq!(waypoints[3], Vec3::new(10.0, 64.0, -8.0));
    }
}
