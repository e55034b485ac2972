//! Static prefix → country table.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use solidarity_core::{DomainError, DomainResult};

use crate::country::{CountryCode, CountryRecord};

/// Number of leading barcode characters used as the lookup key.
pub const DEFAULT_PREFIX_LEN: usize = 3;

/// Built-in entries: (prefix, country, ISO code, manufacturer label).
const DEFAULT_ENTRIES: [(&str, &str, CountryCode, &str); 8] = [
    ("890", "India", CountryCode::from_static(b"IN"), "Local Manufacturer"),
    ("590", "Poland", CountryCode::from_static(b"PL"), "Polish Company"),
    ("790", "Norway", CountryCode::from_static(b"NO"), "Norwegian Producer"),
    ("629", "UAE", CountryCode::from_static(b"AE"), "Middle East Distributor"),
    ("729", "Israel", CountryCode::ISRAEL, "Israeli Company"),
    ("841", "Spain", CountryCode::from_static(b"ES"), "Spanish Producer"),
    ("500", "United Kingdom", CountryCode::from_static(b"GB"), "British Company"),
    ("007", "United States", CountryCode::from_static(b"US"), "American Corporation"),
];

/// Serialized form of a table, as loaded from a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixTableSpec {
    #[serde(default = "default_prefix_len")]
    pub prefix_len: usize,
    pub entries: Vec<CountryRecord>,
}

fn default_prefix_len() -> usize {
    DEFAULT_PREFIX_LEN
}

/// Exact-match lookup table keyed by fixed-length prefix.
///
/// # Invariants
/// - Every key has exactly `prefix_len` characters.
/// - Keys are unique; a second record for the same prefix is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixTable {
    prefix_len: usize,
    entries: HashMap<String, CountryRecord>,
}

impl PrefixTable {
    /// Empty table for prefixes of `prefix_len` characters.
    pub fn new(prefix_len: usize) -> DomainResult<Self> {
        if prefix_len == 0 {
            return Err(DomainError::validation("prefix length must be at least 1"));
        }
        Ok(Self {
            prefix_len,
            entries: HashMap::new(),
        })
    }

    pub fn from_spec(spec: PrefixTableSpec) -> DomainResult<Self> {
        let mut table = Self::new(spec.prefix_len)?;
        for record in spec.entries {
            table.insert(record)?;
        }
        Ok(table)
    }

    pub fn insert(&mut self, record: CountryRecord) -> DomainResult<()> {
        let len = record.prefix.chars().count();
        if len != self.prefix_len {
            return Err(DomainError::validation(format!(
                "prefix {:?} has {len} characters, table expects {}",
                record.prefix, self.prefix_len
            )));
        }
        if self.entries.contains_key(&record.prefix) {
            return Err(DomainError::conflict(format!(
                "prefix {} is already mapped",
                record.prefix
            )));
        }
        self.entries.insert(record.prefix.clone(), record);
        Ok(())
    }

    pub fn prefix_len(&self) -> usize {
        self.prefix_len
    }

    pub fn get(&self, prefix: &str) -> Option<&CountryRecord> {
        self.entries.get(prefix)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records sorted by prefix (stable output for listings).
    pub fn records(&self) -> Vec<&CountryRecord> {
        let mut records: Vec<_> = self.entries.values().collect();
        records.sort_by(|a, b| a.prefix.cmp(&b.prefix));
        records
    }
}

impl Default for PrefixTable {
    fn default() -> Self {
        let entries = DEFAULT_ENTRIES
            .iter()
            .map(|&(prefix, name, code, label)| {
                (prefix.to_string(), CountryRecord::new(prefix, name, code, label))
            })
            .collect();
        Self {
            prefix_len: DEFAULT_PREFIX_LEN,
            entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_has_every_builtin_prefix() {
        let table = PrefixTable::default();
        assert_eq!(table.len(), DEFAULT_ENTRIES.len());
        assert_eq!(table.prefix_len(), 3);
        for (prefix, name, code, _) in DEFAULT_ENTRIES {
            let record = table.get(prefix).unwrap();
            assert_eq!(record.country_name, name);
            assert_eq!(record.country_code, code);
        }
    }

    #[test]
    fn builtin_codes_are_valid() {
        for (_, _, code, _) in DEFAULT_ENTRIES {
            assert_eq!(CountryCode::parse(code.as_str()).unwrap(), code);
        }
    }

    #[test]
    fn insert_rejects_duplicate_prefix() {
        let mut table = PrefixTable::default();
        let err = table
            .insert(CountryRecord::new("729", "Elsewhere", CountryCode::UNKNOWN, "Someone"))
            .unwrap_err();
        match err {
            DomainError::Conflict(msg) => assert!(msg.contains("729")),
            other => panic!("Expected Conflict, got {other:?}"),
        }
        assert_eq!(table.get("729").unwrap().country_name, "Israel");
    }

    #[test]
    fn insert_rejects_wrong_length() {
        let mut table = PrefixTable::new(3).unwrap();
        let err = table
            .insert(CountryRecord::new("62", "Jordan", CountryCode::parse("JO").unwrap(), "x"))
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(table.is_empty());
    }

    #[test]
    fn zero_prefix_len_is_rejected() {
        assert!(PrefixTable::new(0).is_err());
    }

    #[test]
    fn from_spec_uses_default_prefix_len() {
        let spec: PrefixTableSpec = serde_json::from_str(
            r#"{"entries":[{
                "prefix": "625",
                "country_name": "Jordan",
                "country_code": "JO",
                "default_manufacturer_label": "Jordanian Producer"
            }]}"#,
        )
        .unwrap();
        let table = PrefixTable::from_spec(spec).unwrap();
        assert_eq!(table.prefix_len(), DEFAULT_PREFIX_LEN);
        assert_eq!(table.get("625").unwrap().country_code, "JO");
    }

    #[test]
    fn records_are_sorted_by_prefix() {
        let table = PrefixTable::default();
        let prefixes: Vec<_> = table.records().iter().map(|r| r.prefix.as_str()).collect();
        assert_eq!(prefixes, ["007", "500", "590", "629", "729", "790", "841", "890"]);
    }
}
