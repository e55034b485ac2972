//! Barcode → country-of-origin resolution.
//!
//! A barcode's leading characters are looked up in a static prefix table. The
//! lookup is an exact string match on a fixed-length prefix (not GS1 numeric
//! ranges), and it never fails: unknown prefixes resolve to an explicit
//! "Unknown" record.

pub mod barcode;
pub mod country;
pub mod resolver;
pub mod table;

pub use barcode::Barcode;
pub use country::{CountryCode, CountryRecord};
pub use resolver::CountryResolver;
pub use table::{DEFAULT_PREFIX_LEN, PrefixTable, PrefixTableSpec};
