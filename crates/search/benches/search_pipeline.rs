use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use solidarity_origin::CountryCode;
use solidarity_search::{Brand, Catalog, CatalogProduct, Scope, SearchQuery, SortOrder};

/// Seeded catalog blown up to `copies` times its size (unique ids, same text).
fn scaled_catalog(copies: u32) -> Catalog {
    let seed = Catalog::seeded();
    let mut brands: Vec<Brand> = Vec::new();
    let mut products: Vec<CatalogProduct> = Vec::new();
    for copy in 0..copies {
        let offset = copy * 1_000;
        brands.extend(seed.brands().iter().cloned().map(|mut b| {
            b.id += offset;
            b
        }));
        products.extend(seed.products().iter().cloned().map(|mut p| {
            p.id += offset;
            p
        }));
    }
    Catalog::new(brands, products).expect("offset ids are unique")
}

fn bench_search_by_catalog_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_by_catalog_size");

    for copies in [1u32, 10, 100] {
        let catalog = scaled_catalog(copies);
        let items = (catalog.brands().len() + catalog.products().len()) as u64;
        group.throughput(Throughput::Elements(items));
        group.bench_with_input(BenchmarkId::from_parameter(items), &catalog, |b, catalog| {
            let query = SearchQuery::new("co");
            b.iter(|| black_box(catalog.search(black_box(&query))).len());
        });
    }

    group.finish();
}

fn bench_sort_orders(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_orders");
    let catalog = scaled_catalog(50);

    for (label, order) in [
        ("relevance", SortOrder::Relevance),
        ("popularity", SortOrder::Popularity),
        ("name_asc", SortOrder::NameAsc),
        ("name_desc", SortOrder::NameDesc),
    ] {
        let query = SearchQuery::new("e").scope(Scope::Products).sort(order);
        group.bench_function(label, |b| {
            b.iter(|| black_box(catalog.search(&query)).len());
        });
    }

    group.finish();
}

fn bench_filtered_search(c: &mut Criterion) {
    let catalog = scaled_catalog(50);
    let query = SearchQuery::new("a")
        .countries(["Israel", "United States"])
        .categories(["Beverages", "Food"])
        .sort(SortOrder::Popularity);

    c.bench_function("filtered_search", |b| {
        b.iter(|| black_box(catalog.search(&query)).len());
    });

    c.bench_function("flag_emoji", |b| {
        let code = CountryCode::ISRAEL;
        b.iter(|| black_box(code).flag_emoji());
    });
}

criterion_group!(
    benches,
    bench_search_by_catalog_size,
    bench_sort_orders,
    bench_filtered_search
);
criterion_main!(benches);
