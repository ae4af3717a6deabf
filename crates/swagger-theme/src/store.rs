//! Persistence of the user's theme selection.
//!
//! The selection is a single string under a single key. [`MemoryStore`]
//! keeps it for the lifetime of the process; [`JsonFileStore`] writes it to
//! a small JSON object on disk, the native stand-in for browser local
//! storage.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::StoreError;

/// Key/value storage for the persisted selection.
pub trait SelectionStore {
    /// Reads the value under `key`, `None` when it was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Process-local store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with one value.
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }

    /// Makes every subsequent write fail with [`StoreError::ReadOnly`],
    /// the way browser storage does in some private-browsing modes.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }
}

impl SelectionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::ReadOnly);
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a JSON object file, e.g. `{"swagger-theme": "dracula"}`.
///
/// A missing file reads as empty. Writes rewrite the whole file and keep
/// any unrelated keys already present, whatever their JSON type. A
/// non-string value under the selection key reads as absent.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Map<String, Value>, StoreError> {
        let source = match std::fs::read_to_string(&self.path) {
            Ok(source) => source,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        if source.trim().is_empty() {
            return Ok(Map::new());
        }
        serde_json::from_str(&source).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })
    }
}

impl SelectionStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(match self.read_all()?.remove(key) {
            Some(Value::String(value)) => Some(value),
            _ => None,
        })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), Value::String(value.to_string()));
        let json = serde_json::to_string_pretty(&values).map_err(|source| {
            StoreError::Malformed {
                path: self.path.clone(),
                source,
            }
        })?;
        std::fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
