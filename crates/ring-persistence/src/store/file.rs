//! Directory-backed store, one JSON file per key.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::KeyValueStore;
use crate::error::{PersistenceError, Result};

/// File-based implementation of [`KeyValueStore`].
///
/// Values are stored as `<dir>/<key>.json`. The directory is created on
/// the first save.
#[derive(Debug, Clone)]
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Directory holding the stored files.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.base_dir.join(format!("{key}.json")))
    }
}

/// Keys become file names, so only a conservative character set is allowed.
fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(PersistenceError::InvalidKey {
            key: key.to_string(),
        })
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PersistenceError::Io {
                operation: "read",
                path,
                source: e,
            }),
        }
    }

    /// Uses atomic write (temp file + rename) so a crash mid-save leaves the
    /// previous value intact.
    fn save(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let temp_path = path.with_extension("json.tmp");

        fs::create_dir_all(&self.base_dir).map_err(|e| PersistenceError::Io {
            operation: "create directory",
            path: self.base_dir.clone(),
            source: e,
        })?;

        let result = write_synced(&temp_path, value).and_then(|()| {
            fs::rename(&temp_path, &path).map_err(|e| PersistenceError::Io {
                operation: "replace",
                path: path.clone(),
                source: e,
            })
        });
        if result.is_err() {
            let _ = fs::remove_file(&temp_path);
        }
        result?;

        tracing::debug!(key, path = %path.display(), "saved value");
        Ok(())
    }
}

fn write_synced(path: &Path, value: &str) -> Result<()> {
    let mut file = File::create(path).map_err(|e| PersistenceError::Io {
        operation: "create",
        path: path.to_path_buf(),
        source: e,
    })?;

    file.write_all(value.as_bytes())
        .map_err(|e| PersistenceError::Io {
            operation: "write",
            path: path.to_path_buf(),
            source: e,
        })?;

    file.sync_all().map_err(|e| PersistenceError::Io {
        operation: "sync",
        path: path.to_path_buf(),
        source: e,
    })
}
