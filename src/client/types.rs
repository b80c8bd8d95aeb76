use serde::{Deserialize, Serialize};

/// A position in the game world, in block units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Straight-line distance to another position.
    pub fn distance_to(&self, other: &Vec3) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl std::fmt::Display for Vec3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1}, {:.1})", self.x, self.y, self.z)
    }
}

/// A movement goal handed to the pathfinding side of the session.
///
/// `Block` asks for an exact block; `Column` only cares about the X/Z
/// coordinate and lets the mover pick any height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Goal {
    Block { x: i64, y: i64, z: i64 },
    Column { x: f64, z: f64 },
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Goal::Block { x, y, z } => write!(f, "block ({}, {}, {})", x, y, z),
            Goal::Column { x, z } => write!(f, "column ({:.1}, {:.1})", x, z),
        }
    }
}

/// Player control states the session can hold down on our behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Sneak,
    Jump,
}

impl std::fmt::Display for Control {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Control::Sneak => write!(f, "sneak"),
            Control::Jump => write!(f, "jump"),
        }
    }
}

/// How the account authenticates with the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    #[default]
    Offline,
    Online,
}

impl std::fmt::Display for AuthMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthMode::Offline => write!(f, "offline"),
            AuthMode::Online => write!(f, "online"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 6.0, 3.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-9);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn auth_mode_defaults_to_offline_and_parses_lowercase() {
        assert_eq!(AuthMode::default(), AuthMode::Offline);

        #[derive(serde::Deserialize)]
        struct Wrapper {
            auth: AuthMode,
        }
        let parsed: Wrapper = toml::from_str(r#"auth = "online""#).unwrap();
        assert_eq!(parsed.auth, AuthMode::Online);
    }
}
