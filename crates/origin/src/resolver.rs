use tracing::debug;

use crate::country::CountryRecord;
use crate::table::PrefixTable;

/// Maps barcodes to their country of origin.
#[derive(Debug, Clone, Default)]
pub struct CountryResolver {
    table: PrefixTable,
}

impl CountryResolver {
    pub fn new(table: PrefixTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &PrefixTable {
        &self.table
    }

    /// Leading `prefix_len` characters, or the whole input when shorter.
    pub fn prefix_of<'a>(&self, barcode: &'a str) -> &'a str {
        match barcode.char_indices().nth(self.table.prefix_len()) {
            Some((end, _)) => &barcode[..end],
            None => barcode,
        }
    }

    /// Resolve a barcode to its country record.
    ///
    /// Total: an unmatched prefix (including empty or malformed input) yields
    /// [`CountryRecord::unknown`].
    pub fn resolve(&self, barcode: &str) -> CountryRecord {
        let prefix = self.prefix_of(barcode);
        match self.table.get(prefix) {
            Some(record) => {
                debug!(prefix, country = %record.country_code, "barcode prefix resolved");
                record.clone()
            }
            None => {
                debug!(prefix, "barcode prefix not in table");
                CountryRecord::unknown(prefix)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::country::CountryCode;

    #[test]
    fn israeli_prefix_resolves_to_israel() {
        let record = CountryResolver::default().resolve("7290103152017");
        assert_eq!(record.prefix, "729");
        assert_eq!(record.country_name, "Israel");
        assert_eq!(record.country_code, CountryCode::ISRAEL);
        assert_eq!(record.default_manufacturer_label, "Israeli Company");
    }

    #[test]
    fn indian_prefix_resolves_to_india() {
        let record = CountryResolver::default().resolve("8901234567890");
        assert_eq!(record.country_name, "India");
        assert_eq!(record.country_code, "IN");
    }

    #[test]
    fn leading_zeros_are_part_of_the_prefix() {
        let record = CountryResolver::default().resolve("0078742022871");
        assert_eq!(record.country_name, "United States");
    }

    #[test]
    fn unmatched_prefix_falls_back_to_unknown() {
        let record = CountryResolver::default().resolve("4056969794513");
        assert_eq!(record, CountryRecord::unknown("405"));
    }

    #[test]
    fn exact_match_not_numeric_range() {
        // 728 sits right next to Israel's 729 but is not in the table.
        let record = CountryResolver::default().resolve("7280000000000");
        assert!(record.is_unknown());
    }

    #[test]
    fn short_and_empty_input_do_not_panic() {
        let resolver = CountryResolver::default();
        assert!(resolver.resolve("").is_unknown());
        assert!(resolver.resolve("72").is_unknown());
        assert_eq!(resolver.resolve("72").prefix, "72");
    }

    #[test]
    fn exactly_prefix_length_input_matches() {
        assert_eq!(CountryResolver::default().resolve("729").country_code, "IL");
    }

    #[test]
    fn multibyte_input_is_sliced_on_char_boundaries() {
        let resolver = CountryResolver::default();
        assert_eq!(resolver.prefix_of("é72901"), "é72");
        assert!(resolver.resolve("é72901").is_unknown());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        const KNOWN: [&str; 8] = ["890", "590", "790", "629", "729", "841", "500", "007"];

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: any suffix after a known prefix resolves to that prefix's entry.
            #[test]
            fn known_prefix_wins_regardless_of_suffix(
                idx in 0usize..KNOWN.len(),
                suffix in "[0-9]{0,12}"
            ) {
                let resolver = CountryResolver::default();
                let prefix = KNOWN[idx];
                let expected = resolver.table().get(prefix).unwrap().clone();
                let record = resolver.resolve(&format!("{prefix}{suffix}"));
                prop_assert_eq!(record, expected);
            }

            /// Property: resolution is total over arbitrary strings.
            #[test]
            fn resolve_is_total(input in any::<String>()) {
                let record = CountryResolver::default().resolve(&input);
                prop_assert!(input.starts_with(&record.prefix));
                if !KNOWN.contains(&record.prefix.as_str()) {
                    prop_assert!(record.is_unknown());
                    prop_assert_eq!(
                        record.default_manufacturer_label.as_str(),
                        "Unknown Manufacturer"
                    );
                }
            }
        }
    }
}
