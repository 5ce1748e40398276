//! Layered board configuration.
//!
//! Values are resolved in order, later sources winning: built-in defaults,
//! an optional JSON file, then environment variables. Binaries may apply
//! command-line overrides on top with the `with_*` methods.
//!
//! A representative JSON file is:
//!
//! ```json
//! {
//!   "data_dir": "/home/me/.taskboard",
//!   "storage_key": "TODO_APPS",
//!   "log_filter": "taskboard=debug"
//! }
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::task::services::DEFAULT_STORAGE_KEY;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "TASKBOARD_DATA_DIR";
/// Environment variable overriding the storage key.
pub const STORAGE_KEY_ENV: &str = "TASKBOARD_STORAGE_KEY";
/// Environment variable overriding the fallback log filter.
pub const LOG_FILTER_ENV: &str = "TASKBOARD_LOG";

const DEFAULT_DATA_DIR: &str = ".taskboard";
const DEFAULT_LOG_FILTER: &str = "info";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file '{path}': {source}")]
    Read {
        /// Path of the configuration file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for [`BoardConfig`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The storage key is empty after trimming.
    #[error("storage key must not be empty")]
    EmptyStorageKey,
}

/// Settings for one task board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    data_dir: Utf8PathBuf,
    storage_key: String,
    log_filter: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            data_dir: Utf8PathBuf::from(DEFAULT_DATA_DIR),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl BoardConfig {
    /// Resolves configuration from defaults, an optional file, and the
    /// process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or parsed, or the
    /// resolved storage key is empty.
    pub fn load(file: Option<&Utf8Path>) -> Result<Self, ConfigError> {
        let base = match file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        base.with_env(|name| std::env::var(name).ok()).validate()
    }

    /// Parses configuration from JSON text; absent fields keep defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the text is not valid.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read and
    /// [`ConfigError::Parse`] when it is not valid.
    pub fn from_file(path: &Utf8Path) -> Result<Self, ConfigError> {
        let read_error = |source| ConfigError::Read {
            path: path.to_owned(),
            source,
        };
        let file_name = path
            .file_name()
            .ok_or_else(|| read_error(std::io::Error::other("path must include a file name")))?;
        let parent = path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
        let contents = dir.read_to_string(file_name).map_err(read_error)?;
        Self::from_json(&contents)
    }

    /// Applies environment overrides using `lookup` to read variables.
    #[must_use]
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(data_dir) = lookup(DATA_DIR_ENV) {
            self.data_dir = Utf8PathBuf::from(data_dir);
        }
        if let Some(storage_key) = lookup(STORAGE_KEY_ENV) {
            self.storage_key = storage_key;
        }
        if let Some(log_filter) = lookup(LOG_FILTER_ENV) {
            self.log_filter = log_filter;
        }
        self
    }

    /// Overrides the data directory.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<Utf8PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Overrides the storage key.
    #[must_use]
    pub fn with_storage_key(mut self, storage_key: impl Into<String>) -> Self {
        self.storage_key = storage_key.into();
        self
    }

    /// Checks the resolved values, trimming the storage key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyStorageKey`] when the storage key is blank.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        let trimmed = self.storage_key.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        self.storage_key = trimmed.to_owned();
        Ok(self)
    }

    /// Returns the data directory.
    #[must_use]
    pub fn data_dir(&self) -> &Utf8Path {
        &self.data_dir
    }

    /// Returns the storage key.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Returns the fallback log filter.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }
}
