use serde::{Deserialize, Serialize};

use solidarity_core::Entity;
use solidarity_origin::{CountryCode, CountryRecord, CountryResolver};

/// Input for building a [`Product`]; everything except the derived country.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductDraft {
    pub barcode: String,
    pub name: String,
    pub boycott: bool,
    pub reason: Option<String>,
    pub alternatives: Vec<String>,
}

impl ProductDraft {
    pub fn new(barcode: impl Into<String>, name: impl Into<String>, boycott: bool) -> Self {
        Self {
            barcode: barcode.into(),
            name: name.into(),
            boycott,
            ..Default::default()
        }
    }

    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn alternatives<I, S>(mut self, alternatives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alternatives = alternatives.into_iter().map(Into::into).collect();
        self
    }
}

/// Catalog entry.
///
/// # Invariants
/// - `resolved_country` is derived from `barcode` once, at construction, and
///   has no setter.
/// - `stored_boycott`/`reason` are the curated flag and are never rewritten by
///   the country override; the override lives in the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    barcode: String,
    name: String,
    stored_boycott: bool,
    reason: Option<String>,
    alternatives: Vec<String>,
    resolved_country: CountryRecord,
}

impl Product {
    pub fn new(resolver: &CountryResolver, draft: ProductDraft) -> Self {
        let resolved_country = resolver.resolve(&draft.barcode);
        Self {
            barcode: draft.barcode,
            name: draft.name,
            stored_boycott: draft.boycott,
            reason: draft.reason,
            alternatives: draft.alternatives,
            resolved_country,
        }
    }

    pub fn barcode(&self) -> &str {
        &self.barcode
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stored_boycott(&self) -> bool {
        self.stored_boycott
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    pub fn resolved_country(&self) -> &CountryRecord {
        &self.resolved_country
    }

    pub fn is_from_israel(&self) -> bool {
        self.resolved_country.country_code == CountryCode::ISRAEL
    }
}

impl Entity for Product {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.barcode
    }
}
