//! `lurk` keeps a game account present on a remote server.
//!
//! The crate is a thin orchestration layer: it reads one immutable
//! configuration value, opens a session through the [`client::SessionFactory`]
//! seam, and wires individually togglable behaviors (auto-auth, scripted
//! chat, move-to-target, anti-idle, circle-walk) to the session's lifecycle
//! events. Protocol framing, world state, and path search belong to the
//! session backend; none of that lives here.

pub mod behaviors;
pub mod client;
pub mod config;
pub mod runner;
