//! Catalog search: free-text match, scope/facet filters, stable sorting.

pub mod catalog;
pub mod item;
pub mod pipeline;
pub mod query;
mod seed;

pub use catalog::Catalog;
pub use item::{Brand, CatalogProduct};
pub use pipeline::{SearchHit, SearchResults};
pub use query::{HitKind, Scope, SearchKind, SearchQuery, SortOrder};
