//! Directory-backed key-value store.
//!
//! Each key maps to one `<key>.json` file inside a single data directory.
//! All file access goes through a capability handle for that directory, so a
//! key can never address a file outside it. Writes land in a `.tmp` sibling
//! first and are renamed over the target, so an interrupted save leaves the
//! previous value intact.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use tracing::{debug, warn};

use crate::task::ports::{KeyValueStore, StorageError, StorageResult};

const VALUE_EXTENSION: &str = "json";
const PARTIAL_SUFFIX: &str = "tmp";

/// Key-value store persisted as files in one directory.
#[derive(Debug)]
pub struct DirectoryStore {
    root: Utf8PathBuf,
    dir: Option<Dir>,
}

impl DirectoryStore {
    /// Opens the data directory, creating it when missing.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] when the directory cannot be created
    /// or opened.
    pub fn open(root: impl AsRef<Utf8Path>) -> StorageResult<Self> {
        let root_path = root.as_ref();
        Dir::create_ambient_dir_all(root_path, ambient_authority())
            .map_err(StorageError::backend)?;
        let dir =
            Dir::open_ambient_dir(root_path, ambient_authority()).map_err(StorageError::backend)?;
        debug!(root = %root_path, "opened task storage directory");
        Ok(Self {
            root: root_path.to_owned(),
            dir: Some(dir),
        })
    }

    /// Opens the data directory, degrading to an unavailable store when it
    /// cannot be opened.
    #[must_use]
    pub fn open_or_unavailable(root: impl AsRef<Utf8Path>) -> Self {
        let root_path = root.as_ref();
        Self::open(root_path).unwrap_or_else(|err| {
            warn!(root = %root_path, error = %err, "task storage directory unavailable");
            Self {
                root: root_path.to_owned(),
                dir: None,
            }
        })
    }

    /// Returns the data directory path.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn dir(&self) -> StorageResult<&Dir> {
        self.dir.as_ref().ok_or(StorageError::Unavailable)
    }
}

fn file_name(key: &str) -> StorageResult<String> {
    let is_valid = !key.is_empty()
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-');
    if !is_valid {
        return Err(StorageError::InvalidKey(key.to_owned()));
    }
    Ok(format!("{key}.{VALUE_EXTENSION}"))
}

impl KeyValueStore for DirectoryStore {
    fn is_available(&self) -> bool {
        self.dir.is_some()
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let dir = self.dir()?;
        let name = file_name(key)?;
        match dir.read_to_string(&name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::backend(err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let dir = self.dir()?;
        let name = file_name(key)?;
        let partial = format!("{name}.{PARTIAL_SUFFIX}");
        let written = dir
            .write(&partial, value)
            .and_then(|()| dir.rename(&partial, dir, &name));
        if let Err(err) = written {
            if let Err(cleanup) = dir.remove_file(&partial) {
                debug!(file = %partial, error = %cleanup, "no partial value to clean up");
            }
            return Err(StorageError::backend(err));
        }
        Ok(())
    }
}
