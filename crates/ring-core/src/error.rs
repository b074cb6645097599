//! Error types for show operations.

use ring_ingest::ParseError;
use ring_persistence::PersistenceError;
use thiserror::Error;

/// Errors from moving an area's navigation pointer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("this is the last class")]
    AtLastClass,
    #[error("this is the first class")]
    AtFirstClass,
    #[error("no class at position {} (area has {len})", .index.saturating_add(1))]
    IndexOutOfRange { index: usize, len: usize },
    #[error("area not found: {0}")]
    UnknownArea(String),
}

/// Errors from renaming or removing areas and classes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("name cannot be empty")]
    EmptyName,
    #[error("an area named '{0}' already exists")]
    DuplicateName(String),
    #[error("must have at least one area")]
    LastAreaRemaining,
    #[error("no class at position {} (area has {len})", .index.saturating_add(1))]
    IndexOutOfRange { index: usize, len: usize },
    #[error("area not found: {0}")]
    UnknownArea(String),
}

/// Errors from the access gate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error("please enter username and password")]
    MissingCredentials,
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("username already exists")]
    UsernameTaken,
    #[error("incorrect master key")]
    IncorrectMasterKey,
    #[error("editor access required")]
    ReadOnly,
}

/// Errors returned by [`ShowManager`](crate::manager::ShowManager) and the
/// credential registry.
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error(transparent)]
    Access(#[from] AccessError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Navigation(#[from] NavError),
    #[error(transparent)]
    Edit(#[from] EditError),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

pub type Result<T> = std::result::Result<T, ManagerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_messages_are_one_based() {
        let err = NavError::IndexOutOfRange { index: 4, len: 3 };
        assert_eq!(err.to_string(), "no class at position 5 (area has 3)");
    }

    #[test]
    fn out_of_range_message_for_largest_index() {
        let nav = NavError::IndexOutOfRange {
            index: usize::MAX,
            len: 2,
        };
        assert!(nav.to_string().contains(&usize::MAX.to_string()));

        let edit = EditError::IndexOutOfRange {
            index: usize::MAX,
            len: 2,
        };
        assert!(edit.to_string().contains("(area has 2)"));
    }
}
