use tokio::sync::mpsc::UnboundedReceiver;

use crate::client::events::GameEvent;
use crate::client::types::{AuthMode, Control, Goal, Vec3};

/// Everything a backend needs to open a session.
#[derive(Debug, Clone)]
pub struct ConnectOptions {
    pub username: String,
    pub password: String,
    pub auth: AuthMode,
    pub host: String,
    pub port: u16,
    pub version: String,
}

impl std::fmt::Display for ConnectOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}@{}:{} (version {}, {} auth)",
            self.username, self.host, self.port, self.version, self.auth
        )
    }
}

#[derive(Debug)]
pub enum SessionError {
    ConnectFailed(String),
    Closed,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::ConnectFailed(msg) => write!(f, "failed to connect: {}", msg),
            SessionError::Closed => write!(f, "session closed"),
        }
    }
}

impl std::error::Error for SessionError {}

/// The live connection handle, as exposed by the protocol collaborator.
///
/// All calls are synchronous and fire-and-forget: they enqueue an action on
/// the session and never wait for the server to acknowledge it. The
/// controller owns exactly one session at a time and drops it wholesale on
/// disconnect.
pub trait Session: Send {
    /// Toggle color formatting in chat payloads. The controller turns colors
    /// off right after connecting so log output stays deterministic.
    fn set_colors_enabled(&mut self, enabled: bool);

    /// Send a chat message (or a `/command`).
    fn chat(&mut self, message: &str);

    /// Hold or release a movement control.
    fn set_control_state(&mut self, control: Control, active: bool);

    /// Point the player's head. Angles are in degrees.
    fn look(&mut self, yaw: f32, pitch: f32);

    /// Swing the main arm without a target.
    fn swing_arm(&mut self);

    /// Attack the nearest hostile/creature entity if one is in range.
    /// Returns false when nothing eligible was found.
    fn attack_nearest_hostile(&mut self) -> bool;

    /// Hand a goal to the pathfinder. Replaces any previous goal.
    fn set_goal(&mut self, goal: Goal);

    /// Current player position.
    fn position(&self) -> Vec3;

    /// Current (yaw, pitch) in degrees.
    fn orientation(&self) -> (f32, f32);
}

/// A session plus the event stream it feeds.
pub struct SessionHandle {
    pub session: Box<dyn Session>,
    pub events: UnboundedReceiver<GameEvent>,
}

/// Opens sessions. The real implementation wraps the external protocol
/// library; tests and the offline `run` command use the harness factory.
pub trait SessionFactory: Send {
    fn connect(&mut self, opts: &ConnectOptions) -> Result<SessionHandle, SessionError>;
}
