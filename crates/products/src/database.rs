use std::collections::HashMap;

use tracing::debug;

use solidarity_core::{DomainError, DomainResult, Entity};
use solidarity_origin::CountryResolver;

use crate::product::{Product, ProductDraft};
use crate::verdict::ISRAELI_ORIGIN_REASON;

/// Barcodes the demo scanner hands out, one per table country.
pub const SAMPLE_BARCODES: [&str; 8] = [
    "8901234567890",
    "5901234567890",
    "7901234567890",
    "6291041500213",
    "7290103152017",
    "8410014001005",
    "5000157024898",
    "0078742022871",
];

/// In-memory product lookup keyed by barcode.
#[derive(Debug, Clone, Default)]
pub struct ProductDatabase {
    products: HashMap<String, Product>,
}

impl ProductDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// The sample catalog, one product per [`SAMPLE_BARCODES`] entry.
    pub fn seeded(resolver: &CountryResolver) -> Self {
        let drafts = [
            ProductDraft::new("8901234567890", "CocaCola", true)
                .reason("Supports occupation through investments")
                .alternatives(["Local soda brands", "Water"]),
            ProductDraft::new("5901234567890", "Nestlé", true)
                .reason("Operations in occupied territories")
                .alternatives(["Local food brands", "Ethical companies"]),
            ProductDraft::new("7901234567890", "Local Organic Produce", false),
            ProductDraft::new("6291041500213", "Middle Eastern Dates", false),
            ProductDraft::new("7290103152017", "Israeli Product", true)
                .reason("Product is from Israel")
                .alternatives(["Local alternatives", "Products from Palestine"]),
            ProductDraft::new("8410014001005", "Spanish Olive Oil", false),
            ProductDraft::new("5000157024898", "British Tea", true)
                .reason("Parent company supports occupation")
                .alternatives(["Local tea brands", "Fair trade options"]),
            ProductDraft::new("0078742022871", "American Snack", true)
                .reason("Company has investments in Israel")
                .alternatives(["Local snacks", "Ethical brands"]),
        ];

        let products = drafts
            .into_iter()
            .map(|draft| {
                let product = Product::new(resolver, draft);
                (product.id().clone(), product)
            })
            .collect();
        Self { products }
    }

    pub fn insert(&mut self, product: Product) -> DomainResult<()> {
        if self.products.contains_key(product.barcode()) {
            return Err(DomainError::conflict(format!(
                "product with barcode {} already exists",
                product.barcode()
            )));
        }
        self.products.insert(product.id().clone(), product);
        Ok(())
    }

    pub fn get(&self, barcode: &str) -> Option<&Product> {
        self.products.get(barcode)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Known product, or a placeholder built from the barcode's country.
    ///
    /// Placeholders are named after the resolved country and carry the
    /// Israeli-origin flag and reason when the prefix resolves to Israel.
    pub fn lookup(&self, resolver: &CountryResolver, barcode: &str) -> Product {
        if let Some(product) = self.products.get(barcode) {
            debug!(barcode, "product found in database");
            return product.clone();
        }

        let country = resolver.resolve(barcode);
        let from_israel = country.country_code == crate::verdict::OVERRIDE_COUNTRY_CODE;
        debug!(barcode, country = %country.country_name, "synthesizing unknown product");

        let mut draft = ProductDraft::new(
            barcode,
            format!("Unknown Product from {}", country.country_name),
            from_israel,
        );
        if from_israel {
            draft = draft.reason(ISRAELI_ORIGIN_REASON);
        }
        Product::new(resolver, draft)
    }
}
