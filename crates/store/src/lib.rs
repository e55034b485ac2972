//! Key/value persistence and the histories kept on top of it.
//!
//! The store is injected: histories and sessions take any [`KeyValueStore`],
//! so tests run against [`InMemoryStore`] and the CLI against [`JsonFileStore`].

pub mod error;
pub mod history;
pub mod kv;

pub use error::StoreError;
pub use history::{
    DEFAULT_SEARCH_HISTORY_LIMIT, SCAN_HISTORY_KEY, SEARCH_HISTORY_KEY, ScanHistory, SearchHistory,
    SearchHistoryEntry,
};
pub use kv::{InMemoryStore, JsonFileStore, KeyValueStore};
