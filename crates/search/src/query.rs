use core::str::FromStr;

use serde::{Deserialize, Serialize};

use solidarity_core::DomainError;

/// Which part of the catalog a search covers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Scope {
    #[default]
    All,
    Brands,
    Products,
    /// Brands and products whose category equals this exactly.
    Category(String),
}

impl Scope {
    pub fn includes_brands(&self) -> bool {
        !matches!(self, Scope::Products)
    }

    pub fn includes_products(&self) -> bool {
        !matches!(self, Scope::Brands)
    }

    pub fn admits_category(&self, category: &str) -> bool {
        match self {
            Scope::Category(c) => c == category,
            _ => true,
        }
    }

    /// How a search in this scope is labelled in history.
    pub fn kind(&self) -> SearchKind {
        match self {
            Scope::Brands => SearchKind::Brand,
            Scope::Products => SearchKind::Product,
            _ => SearchKind::General,
        }
    }
}

impl FromStr for Scope {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err(DomainError::validation("scope cannot be empty")),
            "all" => Ok(Scope::All),
            "brands" => Ok(Scope::Brands),
            "products" => Ok(Scope::Products),
            category => Ok(Scope::Category(category.to_string())),
        }
    }
}

impl core::fmt::Display for Scope {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Scope::All => f.write_str("all"),
            Scope::Brands => f.write_str("brands"),
            Scope::Products => f.write_str("products"),
            Scope::Category(c) => f.write_str(c),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Catalog order.
    #[default]
    Relevance,
    /// Most popular first.
    Popularity,
    NameAsc,
    NameDesc,
}

impl FromStr for SortOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "relevance" => Ok(SortOrder::Relevance),
            "popularity" => Ok(SortOrder::Popularity),
            "name_asc" => Ok(SortOrder::NameAsc),
            "name_desc" => Ok(SortOrder::NameDesc),
            other => Err(DomainError::validation(format!(
                "unknown sort order {other:?} \
                 (expected relevance, popularity, name_asc or name_desc)"
            ))),
        }
    }
}

/// Label recorded with a search in history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    Product,
    Brand,
    General,
}

/// Result tab: brand hits or product hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitKind {
    Brand,
    Product,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    pub term: String,
    pub scope: Scope,
    /// Product countries to keep; empty means no country filter.
    pub countries: Vec<String>,
    /// Product categories to keep; empty means no category filter.
    pub categories: Vec<String>,
    pub sort: SortOrder,
}

impl SearchQuery {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..Default::default()
        }
    }

    pub fn scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    pub fn countries<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.countries = countries.into_iter().map(Into::into).collect();
        self
    }

    pub fn categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    pub fn is_blank(&self) -> bool {
        self.term.trim().is_empty()
    }
}
