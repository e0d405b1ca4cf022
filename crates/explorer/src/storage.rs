//! File-backed key-value storage and the repository list kept in it.

use anyhow::{Context, Result};
use explorer_core::{ExplorerError, Repository, RepositoryListStore};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Key under which the repository list is stored
pub const REPOSITORIES_KEY: &str = "@githubexplorer/repositories";

/// String-to-string store persisted as a JSON object in a single file
#[derive(Debug)]
pub struct LocalStorage {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl LocalStorage {
    /// Open the storage file. A missing or unreadable file starts out empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let items = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "discarding unreadable storage file");
                BTreeMap::new()
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read storage file");
                BTreeMap::new()
            }
        };

        Self { path, items }
    }

    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    /// Set a value and rewrite the whole file
    pub fn set_item(&mut self, key: &str, value: String) -> Result<()> {
        self.items.insert(key.to_string(), value);
        self.flush()
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create storage directory: {}", parent.display())
                })?;
            }
        }

        let content = serde_json::to_string_pretty(&self.items)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write storage file: {}", self.path.display()))?;
        debug!(path = %self.path.display(), "storage written");
        Ok(())
    }
}

/// Repository list serialized as a JSON array under [`REPOSITORIES_KEY`]
#[derive(Debug)]
pub struct RepositoryStore {
    storage: LocalStorage,
}

impl RepositoryStore {
    pub fn new(storage: LocalStorage) -> Self {
        Self { storage }
    }

    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(LocalStorage::open(path))
    }
}

impl RepositoryListStore for RepositoryStore {
    fn load(&self) -> Vec<Repository> {
        let Some(raw) = self.storage.get_item(REPOSITORIES_KEY) else {
            return Vec::new();
        };

        serde_json::from_str(raw).unwrap_or_else(|e| {
            warn!(error = %e, "discarding unreadable repository list");
            Vec::new()
        })
    }

    fn save(&mut self, repositories: &[Repository]) -> explorer_core::Result<()> {
        let raw = serde_json::to_string(repositories)
            .map_err(|e| ExplorerError::Parse(e.to_string()))?;
        self.storage
            .set_item(REPOSITORIES_KEY, raw)
            .map_err(|e| ExplorerError::Storage(format!("{:#}", e)))
    }
}
