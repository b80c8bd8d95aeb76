use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct UtilsConfig {
    /// Echo other players' chat to the log.
    pub chat_log: bool,

    /// Reconnect after a disconnect, with a fixed delay.
    pub auto_reconnect: bool,
    pub auto_reconnect_delay_ms: u64,

    pub auto_auth: AutoAuthConfig,
    pub chat_messages: ChatMessagesConfig,
    pub anti_afk: AntiAfkConfig,
}

impl Default for UtilsConfig {
    fn default() -> Self {
        Self {
            chat_log: true,
            auto_reconnect: false,
            auto_reconnect_delay_ms: 5000,
            auto_auth: AutoAuthConfig::default(),
            chat_messages: ChatMessagesConfig::default(),
            anti_afk: AntiAfkConfig::default(),
        }
    }
}

/// Sends /register and /login shortly after spawn.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoAuthConfig {
    pub enabled: bool,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ChatMessagesConfig {
    pub enabled: bool,
    /// When true, cycle through `messages` forever instead of sending each
    /// one once.
    pub repeat: bool,
    pub repeat_delay_secs: u64,
    pub messages: Vec<String>,
}

impl Default for ChatMessagesConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            repeat: false,
            repeat_delay_secs: 60,
            messages: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AntiAfkConfig {
    pub enabled: bool,
    /// Hold sneak for the whole session.
    pub sneak: bool,
    /// Hold jump for the whole session.
    pub jump: bool,
    /// Nudge the view one degree of yaw every 100ms.
    pub rotate: bool,
    pub hit: HitConfig,
    pub circle_walk: CircleWalkConfig,
}

impl Default for AntiAfkConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            sneak: false,
            jump: false,
            rotate: true,
            hit: HitConfig::default(),
            circle_walk: CircleWalkConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct HitConfig {
    pub enabled: bool,
    pub delay_ms: u64,
    /// Attack the nearest hostile instead of swinging at nothing, when one
    /// is in range.
    pub attack_mobs: bool,
}

impl Default for HitConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            delay_ms: 2000,
            attack_mobs: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleWalkConfig {
    pub enabled: bool,
    pub radius: f64,
}

impl Default for CircleWalkConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            radius: 2.0,
        }
    }
}
