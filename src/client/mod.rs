//! The seam between the controller and the external protocol/session
//! collaborator. Everything below this module is fire-and-forget calls and
//! decoded events; no wire protocol lives in this crate.

pub mod chat;
pub mod events;
pub mod harness;
pub mod session;
pub mod types;

pub use events::GameEvent;
pub use session::{ConnectOptions, Session, SessionError, SessionFactory, SessionHandle};
pub use types::{AuthMode, Control, Goal, Vec3};
