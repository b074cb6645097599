//! Access roles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What a signed-in user is allowed to do with the show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Read-only access to the board.
    #[default]
    Viewer,
    /// Import, navigation and editing.
    Editor,
}

impl Role {
    /// Returns true if this role may mutate the show.
    pub fn can_edit(self) -> bool {
        matches!(self, Role::Editor)
    }

    /// Lowercase name used in logs and output.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Viewer => "viewer",
            Role::Editor => "editor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
