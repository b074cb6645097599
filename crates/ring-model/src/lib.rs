//! Data model for the ringboard class manager.
//!
//! A [`Show`] is an ordered list of [`Area`]s (rings), each owning its
//! running order of classes and the position of the class now running.
//! [`ShowSnapshot`] is the flat record the show is persisted as.

pub mod role;
pub mod show;
pub mod snapshot;

pub use role::Role;
pub use show::{Area, DEFAULT_AREA_NAME, Show};
pub use snapshot::ShowSnapshot;
