//! Products and boycott classification.
//!
//! Deterministic domain logic only (no IO, no storage): a product's country is
//! fixed when it is built, and the boycott verdict is recomputed on every query.

pub mod database;
pub mod product;
pub mod scan;
pub mod verdict;

pub use database::{ProductDatabase, SAMPLE_BARCODES};
pub use product::{Product, ProductDraft};
pub use scan::ScanResult;
pub use verdict::{
    BoycottClassifier, BoycottVerdict, DEFAULT_BOYCOTT_REASON, ISRAELI_ORIGIN_REASON,
    OVERRIDE_COUNTRY_CODE,
};
