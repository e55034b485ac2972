//! String key/value stores (the local-storage seam).

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::error::StoreError;

/// Minimal string key/value persistence capability.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: String) -> Result<(), StoreError>;
    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<S> KeyValueStore for Arc<S>
where
    S: KeyValueStore + ?Sized,
{
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// In-memory store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let map = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let mut map = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        map.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut map = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        map.remove(key);
        Ok(())
    }
}

/// Store persisted as a single JSON object on disk.
///
/// The file is read lazily on first access and rewritten in full on every
/// mutation. A missing file is an empty store.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    cache: RwLock<Option<BTreeMap<String, String>>>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: RwLock::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn read_file(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = ?self.path, "store file missing, starting empty");
                Ok(BTreeMap::new())
            }
            Err(err) => Err(self.io_error(err)),
        }
    }

    fn write_file(&self, map: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let json = serde_json::to_string_pretty(map)?;
        std::fs::write(&self.path, json).map_err(|e| self.io_error(e))
    }

    /// Run `f` against the loaded map; persist when it reports a change.
    ///
    /// Changes reach the cache only after the file write succeeds.
    fn with_map<T>(
        &self,
        f: impl FnOnce(&mut BTreeMap<String, String>) -> (T, bool),
    ) -> Result<T, StoreError> {
        let mut guard = self.cache.write().map_err(|_| StoreError::Poisoned)?;
        if guard.is_none() {
            *guard = Some(self.read_file()?);
        }
        let mut map = guard.clone().unwrap_or_default();
        let (out, changed) = f(&mut map);
        if changed {
            self.write_file(&map)?;
            *guard = Some(map);
        }
        Ok(out)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.with_map(|map| (map.get(key).cloned(), false))
    }

    fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.with_map(|map| {
            map.insert(key.to_string(), value);
            ((), true)
        })
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.with_map(|map| {
            let changed = map.remove(key).is_some();
            ((), changed)
        })
    }
}
