//! Settings file handling.
//!
//! Settings are read from `--config PATH` or, when not given, from the
//! platform-specific configuration folder:
//! - macOS: ~/Library/Application Support/org.ringboard.Ringboard/
//! - Windows: %APPDATA%/ringboard/Ringboard/config/
//! - Linux: ~/.config/ringboard/

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use ring_persistence::{DEFAULT_SHOW_KEY, DEFAULT_USERS_KEY};
use serde::{Deserialize, Serialize};

const APP_QUALIFIER: &str = "org";
const APP_ORG: &str = "ringboard";
const APP_NAME: &str = "Ringboard";
const CONFIG_FILENAME: &str = "settings.toml";
const FALLBACK_DATA_DIR: &str = "ringboard-data";

/// Master key used when the settings do not provide one.
pub const DEFAULT_MASTER_KEY: &str = "emily";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub storage: StorageSettings,
    pub access: AccessSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Directory for stored records. Defaults to the platform data folder.
    pub data_dir: Option<PathBuf>,
    pub show_key: String,
    pub users_key: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: None,
            show_key: DEFAULT_SHOW_KEY.to_string(),
            users_key: DEFAULT_USERS_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessSettings {
    pub master_key: String,
}

impl Default for AccessSettings {
    fn default() -> Self {
        Self {
            master_key: DEFAULT_MASTER_KEY.to_string(),
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
}

/// Get the path to the settings file.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn settings_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

impl Settings {
    /// Parse settings from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("parse settings")
    }

    /// Load settings from an explicit file. A missing file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("read settings file {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Load settings from the platform folder.
    ///
    /// Returns default settings if the file doesn't exist, cannot be
    /// parsed, or the folder cannot be determined.
    pub fn discover() -> Self {
        let Some(path) = settings_path() else {
            tracing::warn!("Could not determine settings path, using defaults");
            return Self::default();
        };

        match fs::read_to_string(&path) {
            Ok(content) => match Self::from_toml(&content) {
                Ok(settings) => {
                    tracing::info!("Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    tracing::warn!("Failed to parse settings file: {:#}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No settings file found at {:?}, using defaults", path);
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Failed to read settings file: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Explicit file if given, otherwise the platform folder.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => Ok(Self::discover()),
        }
    }

    /// Directory for stored records. The CLI flag wins over the settings file.
    pub fn data_dir(&self, cli_override: Option<&Path>) -> PathBuf {
        if let Some(dir) = cli_override {
            return dir.to_path_buf();
        }
        if let Some(dir) = &self.storage.data_dir {
            return dir.clone();
        }
        project_dirs()
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_DIR))
    }
}
