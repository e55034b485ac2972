//! Boycott verdicts.
//!
//! Rules, first match wins:
//! 1. Country of origin is Israel → always boycott, fixed reason.
//! 2. Otherwise the curated flag decides; a missing reason falls back to
//!    [`DEFAULT_BOYCOTT_REASON`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use solidarity_origin::CountryCode;

use crate::product::Product;

/// Country whose products are boycotted regardless of their curated flag.
pub const OVERRIDE_COUNTRY_CODE: CountryCode = CountryCode::ISRAEL;

pub const ISRAELI_ORIGIN_REASON: &str = "Product is from Israel - Boycott all Israeli products";

pub const DEFAULT_BOYCOTT_REASON: &str = "Company supports occupation";

/// Outcome of classifying one product. Computed per query, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoycottVerdict {
    pub should_boycott: bool,
    pub reason: String,
    pub alternatives: Vec<String>,
}

/// Stateless classifier combining country of origin with the curated flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoycottClassifier;

impl BoycottClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, product: &Product) -> BoycottVerdict {
        let alternatives = product.alternatives().to_vec();

        if product.resolved_country().country_code == OVERRIDE_COUNTRY_CODE {
            debug!(barcode = product.barcode(), "country of origin override");
            return BoycottVerdict {
                should_boycott: true,
                reason: ISRAELI_ORIGIN_REASON.to_string(),
                alternatives,
            };
        }

        let verdict = BoycottVerdict {
            should_boycott: product.stored_boycott(),
            reason: product.reason().unwrap_or(DEFAULT_BOYCOTT_REASON).to_string(),
            alternatives,
        };
        debug!(
            barcode = product.barcode(),
            should_boycott = verdict.should_boycott,
            "classified from stored flag"
        );
        verdict
    }
}
