//! Scan and search history persisted through a [`KeyValueStore`].
//!
//! Both histories are stored newest-first as JSON arrays. Unreadable contents
//! are logged and treated as an empty history rather than surfaced as errors.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

use solidarity_core::EntryId;
use solidarity_products::ScanResult;
use solidarity_search::SearchKind;

use crate::error::StoreError;
use crate::kv::KeyValueStore;

pub const SCAN_HISTORY_KEY: &str = "scanHistory";
pub const SEARCH_HISTORY_KEY: &str = "searchHistory";
pub const DEFAULT_SEARCH_HISTORY_LIMIT: usize = 50;

fn load_list<T: DeserializeOwned>(
    store: &impl KeyValueStore,
    key: &str,
) -> Result<Vec<T>, StoreError> {
    let Some(raw) = store.get(key)? else {
        return Ok(Vec::new());
    };
    match serde_json::from_str(&raw) {
        Ok(items) => Ok(items),
        Err(err) => {
            warn!(key, error = %err, "discarding unreadable history");
            Ok(Vec::new())
        }
    }
}

fn save_list<T: Serialize>(
    store: &impl KeyValueStore,
    key: &str,
    items: &[T],
) -> Result<(), StoreError> {
    store.set(key, serde_json::to_string(items)?)
}

/// Past scans, newest first.
#[derive(Debug)]
pub struct ScanHistory<S> {
    store: S,
}

impl<S: KeyValueStore> ScanHistory<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn load(&self) -> Result<Vec<ScanResult>, StoreError> {
        load_list(&self.store, SCAN_HISTORY_KEY)
    }

    pub fn record(&self, result: ScanResult) -> Result<(), StoreError> {
        let mut entries = self.load()?;
        entries.insert(0, result);
        save_list(&self.store, SCAN_HISTORY_KEY, &entries)
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        self.store.remove(SCAN_HISTORY_KEY)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHistoryEntry {
    pub id: EntryId,
    pub term: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: SearchKind,
}

/// Past searches, newest first, capped at `limit` entries.
#[derive(Debug)]
pub struct SearchHistory<S> {
    store: S,
    limit: usize,
}

impl<S: KeyValueStore> SearchHistory<S> {
    pub fn new(store: S) -> Self {
        Self::with_limit(store, DEFAULT_SEARCH_HISTORY_LIMIT)
    }

    pub fn with_limit(store: S, limit: usize) -> Self {
        Self { store, limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn load(&self) -> Result<Vec<SearchHistoryEntry>, StoreError> {
        load_list(&self.store, SEARCH_HISTORY_KEY)
    }

    pub fn record(
        &self,
        term: impl Into<String>,
        kind: SearchKind,
        timestamp: DateTime<Utc>,
    ) -> Result<SearchHistoryEntry, StoreError> {
        let entry = SearchHistoryEntry {
            id: EntryId::new(),
            term: term.into(),
            timestamp,
            kind,
        };
        let mut entries = self.load()?;
        entries.insert(0, entry.clone());
        entries.truncate(self.limit);
        save_list(&self.store, SEARCH_HISTORY_KEY, &entries)?;
        Ok(entry)
    }

    /// Up to `n` distinct terms, most recent first.
    pub fn recent(&self, n: usize) -> Result<Vec<String>, StoreError> {
        let mut entries = self.load()?;
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        let mut terms: Vec<String> = Vec::with_capacity(n);
        for entry in entries {
            if terms.len() == n {
                break;
            }
            if !terms.contains(&entry.term) {
                terms.push(entry.term);
            }
        }
        Ok(terms)
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        self.store.remove(SEARCH_HISTORY_KEY)
    }
}
