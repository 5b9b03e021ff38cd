//! Bookmark persistence behind an injected key-value capability.
//!
//! The reader stores one serialized bookmark mapping per document title.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors raised by a bookmark store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backing file could not be read or written.
    #[error("Bookmark store I/O failed at {path:?}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Backing file exists but is not a JSON object of strings.
    #[error("Bookmark store at {path:?} is corrupt: {source}")]
    Corrupt {
        /// File that failed to parse.
        path: PathBuf,
        /// Parse error details.
        #[source]
        source: serde_json::Error,
    },

    /// Entries could not be encoded for writing.
    #[error("Failed to encode bookmark store: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Key-value store used to persist bookmarks.
///
/// Keys are document titles; values are opaque serialized mappings.
pub trait BookmarkStore {
    /// Value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;
}

/// In-memory store, for tests and hosts without persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookmarkStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// File-backed store: one JSON object mapping key to value.
///
/// The whole file is rewritten on every `set`. A missing file reads as empty.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store backed by the JSON file at `path`. Nothing is read until first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents = std::fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }
}

impl BookmarkStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value);

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let serialized = serde_json::to_string_pretty(&entries).map_err(StoreError::Encode)?;
        std::fs::write(&self.path, serialized).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = ?self.path, key, "Bookmark store written");
        Ok(())
    }
}
