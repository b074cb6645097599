//! JSON encoding of stored records.

use serde::Serialize;
use serde::de::DeserializeOwned;

use ring_model::ShowSnapshot;

use crate::error::{PersistenceError, Result};
use crate::store::KeyValueStore;

/// Key the show snapshot is stored under by default.
pub const DEFAULT_SHOW_KEY: &str = "horseShowOrganization";

/// Key the credential map is stored under by default.
pub const DEFAULT_USERS_KEY: &str = "horseShowUsers";

/// Load and decode a JSON value, `None` if the key was never written.
pub fn load_json<T, S>(store: &S, key: &str) -> Result<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.load(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| PersistenceError::Deserialization {
            key: key.to_string(),
            source,
        })
}

/// Encode a value as JSON and store it.
pub fn save_json<T, S>(store: &S, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|source| PersistenceError::Serialization {
        key: key.to_string(),
        source,
    })?;
    store.save(key, &raw)
}

/// Load the stored show snapshot.
pub fn load_snapshot<S>(store: &S, key: &str) -> Result<Option<ShowSnapshot>>
where
    S: KeyValueStore + ?Sized,
{
    let snapshot: Option<ShowSnapshot> = load_json(store, key)?;
    if let Some(snapshot) = &snapshot {
        tracing::debug!(key, areas = snapshot.area_order.len(), "loaded show snapshot");
    }
    Ok(snapshot)
}

/// Store a full show snapshot.
pub fn save_snapshot<S>(store: &S, key: &str, snapshot: &ShowSnapshot) -> Result<()>
where
    S: KeyValueStore + ?Sized,
{
    save_json(store, key, snapshot)?;
    tracing::debug!(key, areas = snapshot.area_order.len(), "saved show snapshot");
    Ok(())
}
