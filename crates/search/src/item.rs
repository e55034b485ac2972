use serde::{Deserialize, Serialize};

use solidarity_core::Entity;
use solidarity_origin::CountryCode;

/// A company on the boycott list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub reason: String,
    pub alternatives: Vec<String>,
    /// Names of the brand's products, searchable alongside the brand itself.
    pub products: Vec<String>,
    pub popularity: u32,
}

/// A single catalog product with its curated status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub barcode: Option<String>,
    pub manufacturer: String,
    pub country: String,
    pub country_code: CountryCode,
    pub boycott: bool,
    pub reason: Option<String>,
    pub alternatives: Vec<String>,
    pub popularity: u32,
}

impl CatalogProduct {
    pub fn flag_emoji(&self) -> String {
        self.country_code.flag_emoji()
    }
}

impl Entity for Brand {
    type Id = u32;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Entity for CatalogProduct {
    type Id = u32;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Fields shared by everything the pipeline sorts.
pub(crate) trait Rankable {
    fn name(&self) -> &str;
    fn category(&self) -> &str;
    fn popularity(&self) -> u32;
}

impl Rankable for Brand {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn popularity(&self) -> u32 {
        self.popularity
    }
}

impl Rankable for CatalogProduct {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn popularity(&self) -> u32 {
        self.popularity
    }
}
