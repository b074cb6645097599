//! Show operations for ringboard.
//!
//! - [`navigation`]: advance, retreat and jump an area's running pointer
//! - [`editor`]: rename and remove areas and classes
//! - [`access`]: credential registry, editor gate and sessions
//! - [`manager`]: role-gated operations with write-through persistence
//! - [`board`]: derived now running / up next view

pub mod access;
pub mod board;
pub mod editor;
pub mod error;
pub mod manager;
pub mod navigation;

pub use access::{AccessGate, CredentialRegistry, Session, SharedSecretGate};
pub use board::{Board, BoardEntry, BoardSlot};
pub use error::{AccessError, EditError, ManagerError, NavError, Result};
pub use manager::{ImportSummary, ShowManager};
