use std::collections::HashSet;

use tracing::debug;

use solidarity_core::{DomainError, DomainResult};

use crate::item::{Brand, CatalogProduct};
use crate::pipeline::{self, SearchResults};
use crate::query::SearchQuery;
use crate::seed;

/// Brand and product listings, in catalog order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    brands: Vec<Brand>,
    products: Vec<CatalogProduct>,
}

impl Catalog {
    /// Build a catalog; ids must be unique within brands and within products.
    pub fn new(brands: Vec<Brand>, products: Vec<CatalogProduct>) -> DomainResult<Self> {
        ensure_unique("brand", brands.iter().map(|b| b.id))?;
        ensure_unique("product", products.iter().map(|p| p.id))?;
        Ok(Self { brands, products })
    }

    pub fn seeded() -> Self {
        Self {
            brands: seed::brands(),
            products: seed::products(),
        }
    }

    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    pub fn products(&self) -> &[CatalogProduct] {
        &self.products
    }

    pub fn search(&self, query: &SearchQuery) -> SearchResults<'_> {
        let results = pipeline::run(&self.brands, &self.products, query);
        debug!(
            term = %query.term,
            scope = %query.scope,
            brands = results.brands.len(),
            products = results.products.len(),
            "catalog search"
        );
        results
    }

    /// Boycott-list filter: name substring (case-insensitive) plus exact category.
    pub fn filter_brands(&self, term: &str, category: Option<&str>) -> Vec<&Brand> {
        let needle = term.trim().to_lowercase();
        self.brands
            .iter()
            .filter(|b| b.name.to_lowercase().contains(&needle))
            .filter(|b| category.is_none_or(|c| b.category == c))
            .collect()
    }

    /// Distinct categories: products first, then brands, in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        distinct(
            self.products
                .iter()
                .map(|p| p.category.as_str())
                .chain(self.brands.iter().map(|b| b.category.as_str())),
        )
    }

    /// Distinct brand categories, in first-seen order.
    pub fn brand_categories(&self) -> Vec<&str> {
        distinct(self.brands.iter().map(|b| b.category.as_str()))
    }

    /// Distinct product countries, in first-seen order.
    pub fn countries(&self) -> Vec<&str> {
        distinct(self.products.iter().map(|p| p.country.as_str()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(*v)).collect()
}

fn ensure_unique(kind: &str, ids: impl Iterator<Item = u32>) -> DomainResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DomainError::conflict(format!("duplicate {kind} id {id}")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_catalog_sizes() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.brands().len(), 10);
        assert_eq!(catalog.products().len(), 15);
    }

    #[test]
    fn seeded_ids_are_unique() {
        let catalog = Catalog::seeded();
        assert!(Catalog::new(catalog.brands().to_vec(), catalog.products().to_vec()).is_ok());
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let catalog = Catalog::seeded();
        let mut brands = catalog.brands().to_vec();
        brands.push(brands[0].clone());
        match Catalog::new(brands, Vec::new()).unwrap_err() {
            DomainError::Conflict(msg) => assert_eq!(msg, "duplicate brand id 1"),
            other => panic!("Expected Conflict, got {other:?}"),
        }
    }

    #[test]
    fn filter_brands_by_name_and_category() {
        let catalog = Catalog::seeded();

        let names: Vec<_> = catalog
            .filter_brands("S", None)
            .iter()
            .map(|b| b.name.as_str())
            .collect();
        assert_eq!(names, ["McDonald's", "Nestlé", "Starbucks", "Sabra", "SodaStream"]);

        let names: Vec<_> = catalog
            .filter_brands("s", Some("Beverages"))
            .iter()
            .map(|b| b.name.as_str())
            .collect();
        assert_eq!(names, ["Starbucks", "SodaStream"]);

        // Empty term lists the whole category.
        assert_eq!(catalog.filter_brands("", Some("Technology")).len(), 1);
        assert_eq!(catalog.filter_brands("", None).len(), 10);
    }

    #[test]
    fn categories_are_distinct_in_first_seen_order() {
        let catalog = Catalog::seeded();
        assert_eq!(
            catalog.categories(),
            [
                "Beverages",
                "Confectionery",
                "Food",
                "Technology",
                "Clothing",
                "Fast Food",
                "Food & Beverages",
                "Travel",
                "Construction",
            ]
        );
    }

    #[test]
    fn countries_are_distinct() {
        let catalog = Catalog::seeded();
        let countries = catalog.countries();
        assert_eq!(countries.len(), 10);
        assert_eq!(countries[0], "United States");
        assert!(countries.contains(&"Palestine"));
    }

    #[test]
    fn seeded_flags_derive_from_codes() {
        let catalog = Catalog::seeded();
        let olive_oil = catalog
            .products()
            .iter()
            .find(|p| p.name == "Palestinian Olive Oil")
            .unwrap();
        assert_eq!(olive_oil.flag_emoji(), "\u{1F1F5}\u{1F1F8}");
        assert!(!olive_oil.boycott);
    }
}
