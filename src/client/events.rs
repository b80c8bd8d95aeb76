use crate::client::types::Vec3;

/// Events that a live session can emit back to the controller.
///
/// The session collaborator owns the wire protocol; by the time an event
/// reaches us it has already been decoded into one of these variants.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// The player entered the world. Fires once per connection under normal
    /// conditions; a respawn after death does not re-fire it.
    Spawn,
    /// A chat message from another player.
    Chat { username: String, message: String },
    /// The pathfinder reached the goal that was last set.
    GoalReached,
    /// The player died and was respawned at `position`.
    Death { position: Vec3 },
    /// The server kicked us. `reason` is the raw payload, usually a JSON
    /// chat component but not guaranteed to be one.
    Kicked { reason: String },
    /// The session ended. Terminal for this connection.
    Disconnected,
    /// A protocol-level error. Not terminal by itself.
    Error { message: String },
}
