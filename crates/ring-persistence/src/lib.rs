//! Persistent storage for ringboard shows.
//!
//! Everything is stored as JSON strings in a [`KeyValueStore`]:
//!
//! - the show, as a [`ShowSnapshot`](ring_model::ShowSnapshot) under
//!   [`DEFAULT_SHOW_KEY`]
//! - the credential map `{username: password}` under [`DEFAULT_USERS_KEY`]
//!
//! Two backends are provided: [`FileStore`] writes one file per key with
//! atomic replace, [`MemoryStore`] keeps values in a map.

mod codec;
mod error;
mod store;

pub use codec::{
    DEFAULT_SHOW_KEY, DEFAULT_USERS_KEY, load_json, load_snapshot, save_json, save_snapshot,
};
pub use error::{PersistenceError, Result};
pub use store::{FileStore, KeyValueStore, MemoryStore};
