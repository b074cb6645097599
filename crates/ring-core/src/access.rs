//! Sign-in and role selection.
//!
//! This is a placeholder gate, not a security boundary: passwords are kept
//! in plain text and the editor role is unlocked by one shared key. It
//! exists so that casual viewers cannot change the running order.

use std::collections::BTreeMap;

use ring_model::Role;
use ring_persistence::{KeyValueStore, load_json, save_json};
use serde::{Deserialize, Serialize};

use crate::error::{AccessError, ManagerError};

/// Username to password map, stored as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CredentialRegistry {
    users: BTreeMap<String, String>,
}

impl CredentialRegistry {
    /// Load the registry stored under `key`, empty if none was saved yet.
    pub fn load<S>(store: &S, key: &str) -> Result<Self, ManagerError>
    where
        S: KeyValueStore + ?Sized,
    {
        Ok(load_json(store, key)?.unwrap_or_default())
    }

    /// Store the registry under `key`.
    pub fn save<S>(&self, store: &S, key: &str) -> Result<(), ManagerError>
    where
        S: KeyValueStore + ?Sized,
    {
        save_json(store, key, self)?;
        Ok(())
    }

    /// Number of registered users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns true if nobody has registered yet.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Returns true if `username` is registered.
    pub fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    /// Add a new user.
    pub fn register(&mut self, username: &str, password: &str) -> Result<(), AccessError> {
        if username.is_empty() || password.is_empty() {
            return Err(AccessError::MissingCredentials);
        }
        if self.users.contains_key(username) {
            return Err(AccessError::UsernameTaken);
        }
        self.users
            .insert(username.to_string(), password.to_string());
        tracing::info!(user = username, "registered user");
        Ok(())
    }

    /// Check a username and password pair.
    pub fn verify(&self, username: &str, password: &str) -> Result<(), AccessError> {
        if username.is_empty() || password.is_empty() {
            return Err(AccessError::MissingCredentials);
        }
        match self.users.get(username) {
            Some(stored) if stored == password => Ok(()),
            _ => Err(AccessError::InvalidCredentials),
        }
    }
}

/// Decides whether a key unlocks the editor role.
pub trait AccessGate {
    fn unlock_editor(&self, key: &str) -> bool;
}

/// Gate unlocked by one shared key.
#[derive(Debug, Clone)]
pub struct SharedSecretGate {
    secret: String,
}

impl SharedSecretGate {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl AccessGate for SharedSecretGate {
    fn unlock_editor(&self, key: &str) -> bool {
        !self.secret.is_empty() && key == self.secret
    }
}

/// A signed-in user and the role they are acting in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user: String,
    role: Role,
}

impl Session {
    /// Sign in. Every session starts as a viewer.
    pub fn login(
        registry: &CredentialRegistry,
        username: &str,
        password: &str,
    ) -> Result<Self, AccessError> {
        registry.verify(username, password)?;
        tracing::info!(user = username, "signed in");
        Ok(Self {
            user: username.to_string(),
            role: Role::Viewer,
        })
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Switch to the editor role if `key` unlocks the gate.
    ///
    /// On a wrong key the session keeps its current role.
    pub fn elevate<G>(&mut self, gate: &G, key: &str) -> Result<(), AccessError>
    where
        G: AccessGate + ?Sized,
    {
        if !gate.unlock_editor(key) {
            tracing::warn!(user = %self.user, "rejected master key");
            return Err(AccessError::IncorrectMasterKey);
        }
        self.role = Role::Editor;
        tracing::info!(user = %self.user, "switched to editor");
        Ok(())
    }

    /// Drop back to the viewer role. No key is needed.
    pub fn demote(&mut self) {
        self.role = Role::Viewer;
    }

    /// Fails unless the session may change the show.
    pub fn require_editor(&self) -> Result<(), AccessError> {
        if self.role.can_edit() {
            Ok(())
        } else {
            Err(AccessError::ReadOnly)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ring_persistence::MemoryStore;

    fn registry() -> CredentialRegistry {
        let mut registry = CredentialRegistry::default();
        registry.register("steward", "pw").unwrap();
        registry
    }

    #[test]
    fn register_rejects_blank_and_duplicate() {
        let mut registry = registry();
        assert_eq!(
            registry.register("", "pw"),
            Err(AccessError::MissingCredentials)
        );
        assert_eq!(
            registry.register("steward", "other"),
            Err(AccessError::UsernameTaken)
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn login_checks_password() {
        let registry = registry();
        assert_eq!(
            Session::login(&registry, "steward", "wrong"),
            Err(AccessError::InvalidCredentials)
        );
        assert_eq!(
            Session::login(&registry, "nobody", "pw"),
            Err(AccessError::InvalidCredentials)
        );
        let session = Session::login(&registry, "steward", "pw").unwrap();
        assert_eq!(session.role(), Role::Viewer);
        assert_eq!(session.user(), "steward");
    }

    #[test]
    fn elevate_requires_master_key() {
        let gate = SharedSecretGate::new("emily");
        let mut session = Session::login(&registry(), "steward", "pw").unwrap();
        assert_eq!(session.require_editor(), Err(AccessError::ReadOnly));

        assert_eq!(
            session.elevate(&gate, "guess"),
            Err(AccessError::IncorrectMasterKey)
        );
        assert_eq!(session.role(), Role::Viewer);

        session.elevate(&gate, "emily").unwrap();
        assert_eq!(session.role(), Role::Editor);
        assert_eq!(session.require_editor(), Ok(()));

        session.demote();
        assert_eq!(session.role(), Role::Viewer);
    }

    #[test]
    fn empty_secret_never_unlocks() {
        let gate = SharedSecretGate::new("");
        assert!(!gate.unlock_editor(""));
    }

    #[test]
    fn registry_persists_as_plain_map() {
        let store = MemoryStore::new();
        registry().save(&store, "users").unwrap();
        assert_eq!(
            store.load("users").unwrap().as_deref(),
            Some(r#"{"steward":"pw"}"#)
        );
        let loaded = CredentialRegistry::load(&store, "users").unwrap();
        assert!(loaded.contains("steward"));
    }
}
