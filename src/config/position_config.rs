use serde::{Deserialize, Serialize};

use crate::client::types::Goal;

/// Fixed block coordinate the bot walks to after spawning.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionConfig {
    pub enabled: bool,
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl PositionConfig {
    pub fn goal(&self) -> Goal {
        Goal::Block {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }
}

impl std::fmt::Display for PositionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
