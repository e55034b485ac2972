use std::sync::Arc;

use solidarity_auth::Session;
use solidarity_origin::{CountryResolver, PrefixTable};
use solidarity_products::{BoycottClassifier, ProductDatabase};
use solidarity_search::Catalog;
use solidarity_store::{KeyValueStore, ScanHistory, SearchHistory};

use crate::config::Config;

pub type SharedStore = Arc<dyn KeyValueStore>;

/// Everything a command needs: the lookup tables and the injected store.
pub struct App {
    pub resolver: CountryResolver,
    pub classifier: BoycottClassifier,
    pub products: ProductDatabase,
    pub catalog: Catalog,
    store: SharedStore,
    search_history_limit: usize,
}

impl App {
    pub fn new(table: PrefixTable, store: SharedStore, search_history_limit: usize) -> Self {
        let resolver = CountryResolver::new(table);
        let products = ProductDatabase::seeded(&resolver);
        Self {
            resolver,
            classifier: BoycottClassifier::new(),
            products,
            catalog: Catalog::seeded(),
            store,
            search_history_limit,
        }
    }

    pub fn from_config(config: &Config, store: SharedStore) -> anyhow::Result<Self> {
        let table = config.load_prefix_table()?;
        Ok(Self::new(table, store, config.search_history_limit))
    }

    pub fn scan_history(&self) -> ScanHistory<SharedStore> {
        ScanHistory::new(Arc::clone(&self.store))
    }

    pub fn search_history(&self) -> SearchHistory<SharedStore> {
        SearchHistory::with_limit(Arc::clone(&self.store), self.search_history_limit)
    }

    pub fn session(&self) -> Session<SharedStore> {
        Session::new(Arc::clone(&self.store))
    }
}
