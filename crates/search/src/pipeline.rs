//! Filter → sort over the catalog.

use core::cmp::Reverse;

use crate::item::{Brand, CatalogProduct, Rankable};
use crate::query::{HitKind, SearchQuery, SortOrder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchHit<'a> {
    Brand(&'a Brand),
    Product(&'a CatalogProduct),
}

impl SearchHit<'_> {
    pub fn kind(&self) -> HitKind {
        match self {
            SearchHit::Brand(_) => HitKind::Brand,
            SearchHit::Product(_) => HitKind::Product,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            SearchHit::Brand(b) => &b.name,
            SearchHit::Product(p) => &p.name,
        }
    }
}

/// Matches borrowed from the catalog, brands and products kept apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults<'a> {
    pub brands: Vec<&'a Brand>,
    pub products: Vec<&'a CatalogProduct>,
}

impl<'a> SearchResults<'a> {
    /// Brands first, then products, each in sorted order.
    pub fn hits(&self) -> impl Iterator<Item = SearchHit<'a>> + '_ {
        self.brands
            .iter()
            .map(|b| SearchHit::Brand(*b))
            .chain(self.products.iter().map(|p| SearchHit::Product(*p)))
    }

    pub fn of_kind(&self, kind: HitKind) -> Vec<SearchHit<'a>> {
        self.hits().filter(|hit| hit.kind() == kind).collect()
    }

    pub fn len(&self) -> usize {
        self.brands.len() + self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.brands.is_empty() && self.products.is_empty()
    }
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn brand_matches(brand: &Brand, needle: &str) -> bool {
    contains(&brand.name, needle)
        || contains(&brand.category, needle)
        || brand.products.iter().any(|p| contains(p, needle))
}

fn product_matches(product: &CatalogProduct, needle: &str) -> bool {
    contains(&product.name, needle)
        || contains(&product.category, needle)
        || contains(&product.manufacturer, needle)
        || contains(&product.country, needle)
        || product
            .barcode
            .as_deref()
            .is_some_and(|barcode| contains(barcode, needle))
}

/// Empty filter set means "no filter".
fn passes_filter(filter: &[String], value: &str) -> bool {
    filter.is_empty() || filter.iter().any(|f| f == value)
}

/// Stable: items with equal keys keep their catalog order.
pub(crate) fn sort_items<T: Rankable>(items: &mut [&T], order: SortOrder) {
    match order {
        SortOrder::Relevance => {}
        SortOrder::Popularity => items.sort_by_key(|item| Reverse(item.popularity())),
        SortOrder::NameAsc => items.sort_by_cached_key(|item| item.name().to_lowercase()),
        SortOrder::NameDesc => {
            items.sort_by_cached_key(|item| Reverse(item.name().to_lowercase()))
        }
    }
}

pub(crate) fn run<'a>(
    brands: &'a [Brand],
    products: &'a [CatalogProduct],
    query: &SearchQuery,
) -> SearchResults<'a> {
    if query.is_blank() {
        return SearchResults::default();
    }
    let needle = query.term.trim().to_lowercase();
    let scope = &query.scope;

    let mut brand_hits: Vec<&Brand> = if scope.includes_brands() {
        brands
            .iter()
            .filter(|b| scope.admits_category(b.category()))
            .filter(|b| brand_matches(b, &needle))
            .collect()
    } else {
        Vec::new()
    };

    let mut product_hits: Vec<&CatalogProduct> = if scope.includes_products() {
        products
            .iter()
            .filter(|p| scope.admits_category(p.category()))
            .filter(|p| passes_filter(&query.countries, &p.country))
            .filter(|p| passes_filter(&query.categories, &p.category))
            .filter(|p| product_matches(p, &needle))
            .collect()
    } else {
        Vec::new()
    };

    sort_items(&mut brand_hits, query.sort);
    sort_items(&mut product_hits, query.sort);

    SearchResults {
        brands: brand_hits,
        products: product_hits,
    }
}
