use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use solidarity_core::EntryId;

use crate::product::Product;
use crate::verdict::BoycottClassifier;

/// One scan: the barcode read, the product it matched and when.
///
/// The verdict is not stored; it is recomputed from the product snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub id: EntryId,
    pub barcode: String,
    pub product: Product,
    pub timestamp: DateTime<Utc>,
}

impl ScanResult {
    pub fn new(barcode: impl Into<String>, product: Product, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: EntryId::new(),
            barcode: barcode.into(),
            product,
            timestamp,
        }
    }

    /// Short shareable summary of the scan.
    pub fn share_text(&self, classifier: &BoycottClassifier) -> String {
        let verdict = classifier.classify(&self.product);
        let status = if verdict.should_boycott {
            format!("This product should be BOYCOTTED! {}", verdict.reason)
        } else {
            "This product is OK to purchase.".to_string()
        };
        format!(
            "I scanned {} ({}) from {}. {status}",
            self.product.name(),
            self.barcode,
            self.product.resolved_country().country_name,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::ProductDatabase;
    use chrono::TimeZone;
    use solidarity_origin::CountryResolver;

    fn scan(barcode: &str) -> ScanResult {
        let resolver = CountryResolver::default();
        let product = ProductDatabase::seeded(&resolver).lookup(&resolver, barcode);
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
        ScanResult::new(barcode, product, at)
    }

    #[test]
    fn share_text_for_boycotted_product() {
        let text = scan("7290103152017").share_text(&BoycottClassifier::new());
        assert_eq!(
            text,
            "I scanned Israeli Product (7290103152017) from Israel. \
             This product should be BOYCOTTED! \
             Product is from Israel - Boycott all Israeli products"
        );
    }

    #[test]
    fn share_text_for_safe_product() {
        let text = scan("8410014001005").share_text(&BoycottClassifier::new());
        assert_eq!(
            text,
            "I scanned Spanish Olive Oil (8410014001005) from Spain. \
             This product is OK to purchase."
        );
    }

    #[test]
    fn serialized_scan_restores_snapshot() {
        let original = scan("5000157024898");
        let json = serde_json::to_string(&original).unwrap();
        let restored: ScanResult = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, original);
        assert_eq!(restored.product.resolved_country().country_code, "GB");
    }
}
