use serde::{Deserialize, Serialize};

use solidarity_core::{DomainError, DomainResult, ValueObject};

/// Offset from an ASCII uppercase letter to its regional indicator symbol.
const REGIONAL_INDICATOR_OFFSET: u32 = 0x1F1E6 - 'A' as u32;

/// ISO 3166-1 alpha-2 country code (always two uppercase ASCII letters).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode([u8; 2]);

impl CountryCode {
    /// Israel. Products resolving to this code are always boycotted.
    pub const ISRAEL: CountryCode = CountryCode(*b"IL");

    /// Placeholder for barcodes whose prefix is not in the table.
    pub const UNKNOWN: CountryCode = CountryCode(*b"XX");

    /// Parse a two-letter code; lowercase input is normalised to uppercase.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        match raw.as_bytes() {
            [a, b] if a.is_ascii_alphabetic() && b.is_ascii_alphabetic() => {
                Ok(Self([a.to_ascii_uppercase(), b.to_ascii_uppercase()]))
            }
            _ => Err(DomainError::validation(format!(
                "country code must be two ASCII letters: {raw:?}"
            ))),
        }
    }

    /// Code from a literal such as `b"PS"`.
    ///
    /// Panics unless both bytes are ASCII uppercase letters; in a `const`
    /// context that panic is a compile error.
    pub const fn from_static(code: &[u8; 2]) -> Self {
        assert!(
            code[0].is_ascii_uppercase() && code[1].is_ascii_uppercase(),
            "country code must be two uppercase ASCII letters"
        );
        Self(*code)
    }

    pub fn as_str(&self) -> &str {
        // Both bytes are ASCII letters by construction.
        core::str::from_utf8(&self.0).unwrap_or("XX")
    }

    /// Flag emoji built from the two regional indicator symbols.
    ///
    /// Derived on demand, never stored.
    pub fn flag_emoji(&self) -> String {
        self.0
            .iter()
            .filter_map(|&b| char::from_u32(b as u32 + REGIONAL_INDICATOR_OFFSET))
            .collect()
    }
}

impl ValueObject for CountryCode {}

impl core::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for CountryCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CountryCode> for String {
    fn from(value: CountryCode) -> Self {
        value.as_str().to_string()
    }
}

impl PartialEq<&str> for CountryCode {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Country metadata attached to a barcode prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub prefix: String,
    pub country_name: String,
    pub country_code: CountryCode,
    pub default_manufacturer_label: String,
}

impl CountryRecord {
    pub const UNKNOWN_COUNTRY: &'static str = "Unknown";
    pub const UNKNOWN_MANUFACTURER: &'static str = "Unknown Manufacturer";

    pub fn new(
        prefix: impl Into<String>,
        country_name: impl Into<String>,
        country_code: CountryCode,
        default_manufacturer_label: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            country_name: country_name.into(),
            country_code,
            default_manufacturer_label: default_manufacturer_label.into(),
        }
    }

    /// Fallback record for a prefix with no table entry.
    pub fn unknown(prefix: impl Into<String>) -> Self {
        Self::new(
            prefix,
            Self::UNKNOWN_COUNTRY,
            CountryCode::UNKNOWN,
            Self::UNKNOWN_MANUFACTURER,
        )
    }

    pub fn is_unknown(&self) -> bool {
        self.country_code == CountryCode::UNKNOWN
    }

    pub fn flag_emoji(&self) -> String {
        self.country_code.flag_emoji()
    }
}

impl ValueObject for CountryRecord {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_emoji_for_israel() {
        assert_eq!(CountryCode::ISRAEL.flag_emoji(), "\u{1F1EE}\u{1F1F1}");
    }

    #[test]
    fn flag_emoji_for_unknown_is_still_two_symbols() {
        assert_eq!(CountryCode::UNKNOWN.flag_emoji().chars().count(), 2);
    }

    #[test]
    fn parse_normalises_case() {
        let code = CountryCode::parse("ps").unwrap();
        assert_eq!(code.as_str(), "PS");
        assert_eq!(code.flag_emoji(), "\u{1F1F5}\u{1F1F8}");
    }

    #[test]
    fn parse_rejects_wrong_shapes() {
        for raw in ["", "I", "ISR", "1L", "I ", "Ä"] {
            assert!(CountryCode::parse(raw).is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    #[should_panic(expected = "uppercase")]
    fn from_static_rejects_lowercase_at_runtime() {
        let raw = *b"il";
        let _ = CountryCode::from_static(&raw);
    }

    #[test]
    fn unknown_record_uses_fallback_labels() {
        let record = CountryRecord::unknown("123");
        assert_eq!(record.prefix, "123");
        assert_eq!(record.country_name, "Unknown");
        assert_eq!(record.country_code, "XX");
        assert_eq!(record.default_manufacturer_label, "Unknown Manufacturer");
        assert!(record.is_unknown());
    }

    #[test]
    fn serializes_code_as_plain_string() {
        let record = CountryRecord::new("729", "Israel", CountryCode::ISRAEL, "Israeli Company");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["country_code"], "IL");

        let back: CountryRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
