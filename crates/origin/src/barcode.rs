use serde::{Deserialize, Serialize};

use solidarity_core::{DomainError, DomainResult};

/// A manually entered barcode that passed validation.
///
/// Resolution itself accepts any string; this type is for callers that want to
/// reject obviously bad input (blank, letters) before it reaches history.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Barcode(String);

impl Barcode {
    /// Trims surrounding whitespace, then requires a non-empty ASCII digit string.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("barcode cannot be empty"));
        }
        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::validation(format!(
                "barcode must contain only digits: {trimmed:?}"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Barcode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Barcode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl core::str::FromStr for Barcode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Barcode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Barcode> for String {
    fn from(value: Barcode) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_whitespace() {
        let barcode = Barcode::parse("  7290103152017\n").unwrap();
        assert_eq!(barcode.as_str(), "7290103152017");
    }

    #[test]
    fn parse_keeps_leading_zeros() {
        let barcode: Barcode = "0078742022871".parse().unwrap();
        assert_eq!(barcode.to_string(), "0078742022871");
    }

    #[test]
    fn parse_rejects_blank() {
        match Barcode::parse("   ").unwrap_err() {
            DomainError::Validation(_) => {}
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn parse_rejects_non_digits() {
        assert!(Barcode::parse("72901O3152017").is_err());
        assert!(Barcode::parse("-890").is_err());
    }

    #[test]
    fn deserialize_validates() {
        let ok: Barcode = serde_json::from_str("\"8901234567890\"").unwrap();
        assert_eq!(ok.as_str(), "8901234567890");
        assert!(serde_json::from_str::<Barcode>("\"abc\"").is_err());
    }
}
