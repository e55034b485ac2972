//! Command handlers. Each writes its report to the given writer.

use std::io::Write;

use anyhow::Context;
use chrono::{DateTime, Utc};
use tracing::info;

use solidarity_auth::ProfileUpdate;
use solidarity_origin::{Barcode, CountryRecord};
use solidarity_products::{SAMPLE_BARCODES, ScanResult};
use solidarity_search::{Brand, CatalogProduct, HitKind, SearchHit, SearchQuery};

use crate::app::App;
use crate::cli::Command;

pub fn run(
    app: &App,
    command: Command,
    now: DateTime<Utc>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        Command::Scan {
            barcode,
            no_history,
            share,
        } => scan(app, barcode.as_deref(), !no_history, share, now, out),
        Command::Resolve { barcode } => resolve(app, &barcode, out),
        Command::History { clear } => history(app, clear, out),
        Command::Search {
            term,
            scope,
            countries,
            categories,
            sort,
            only,
        } => {
            let query = SearchQuery::new(term)
                .scope(scope)
                .countries(countries)
                .categories(categories)
                .sort(sort);
            search(app, &query, only.map(HitKind::from), now, out)
        }
        Command::Recent { n } => recent(app, n, out),
        Command::Brands { term, category } => {
            brands(app, term.as_deref().unwrap_or(""), category.as_deref(), out)
        }
        Command::Facets => facets(app, out),
        Command::Prefixes => prefixes(app, out),
        Command::Login { email, name } => login(app, &email, &name, out),
        Command::Logout => logout(app, out),
        Command::Whoami => whoami(app, out),
        Command::Profile {
            name,
            email,
            avatar,
        } => {
            let update = ProfileUpdate {
                name,
                email,
                avatar,
            };
            profile(app, update, out)
        }
    }
}

fn flag(record: &CountryRecord) -> String {
    if record.is_unknown() {
        String::new()
    } else {
        format!("{} ", record.flag_emoji())
    }
}

/// Sample barcode standing in for a camera read.
fn sample_barcode(now: DateTime<Utc>) -> &'static str {
    SAMPLE_BARCODES[now.timestamp_subsec_nanos() as usize % SAMPLE_BARCODES.len()]
}

pub fn scan(
    app: &App,
    barcode: Option<&str>,
    record: bool,
    share: bool,
    now: DateTime<Utc>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let barcode = match barcode {
        Some(raw) => Barcode::parse(raw).context("invalid barcode")?,
        None => Barcode::parse(sample_barcode(now))?,
    };

    let product = app.products.lookup(&app.resolver, barcode.as_str());
    let verdict = app.classifier.classify(&product);
    let country = product.resolved_country();

    writeln!(out, "{} ({})", product.name(), barcode)?;
    writeln!(
        out,
        "Origin:       {}{} (prefix {}, {})",
        flag(country),
        country.country_name,
        country.prefix,
        country.default_manufacturer_label
    )?;
    if verdict.should_boycott {
        writeln!(out, "Verdict:      BOYCOTT")?;
        writeln!(out, "Reason:       {}", verdict.reason)?;
    } else {
        writeln!(out, "Verdict:      OK to purchase")?;
    }
    if !verdict.alternatives.is_empty() {
        writeln!(out, "Alternatives: {}", verdict.alternatives.join(", "))?;
    }

    let result = ScanResult::new(barcode.as_str(), product, now);
    if share {
        writeln!(out)?;
        writeln!(out, "{}", result.share_text(&app.classifier))?;
    }
    if record {
        app.scan_history().record(result)?;
        info!(barcode = barcode.as_str(), "scan recorded");
    }
    Ok(())
}

pub fn resolve(app: &App, barcode: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let record = app.resolver.resolve(barcode);
    writeln!(
        out,
        "{}{} [{}] prefix {}: {}",
        flag(&record),
        record.country_name,
        record.country_code,
        record.prefix,
        record.default_manufacturer_label
    )?;
    Ok(())
}

pub fn history(app: &App, clear: bool, out: &mut impl Write) -> anyhow::Result<()> {
    let history = app.scan_history();
    if clear {
        history.clear()?;
        writeln!(out, "Scan history cleared")?;
        return Ok(());
    }

    let scans = history.load()?;
    if scans.is_empty() {
        writeln!(out, "No scans yet")?;
        return Ok(());
    }
    for scan in &scans {
        let verdict = app.classifier.classify(&scan.product);
        writeln!(
            out,
            "{}  {}  {}{}  {}",
            scan.timestamp.format("%Y-%m-%d %H:%M"),
            scan.barcode,
            flag(scan.product.resolved_country()),
            scan.product.name(),
            if verdict.should_boycott { "BOYCOTT" } else { "OK" }
        )?;
    }
    Ok(())
}

fn write_brand(out: &mut impl Write, brand: &Brand) -> std::io::Result<()> {
    writeln!(out, "[brand]   {} ({}): BOYCOTT", brand.name, brand.category)?;
    writeln!(out, "          {}", brand.reason)?;
    if !brand.alternatives.is_empty() {
        writeln!(out, "          try: {}", brand.alternatives.join(", "))?;
    }
    Ok(())
}

fn write_product(out: &mut impl Write, product: &CatalogProduct) -> std::io::Result<()> {
    writeln!(
        out,
        "[product] {} {} ({}, {}, {}): {}",
        product.flag_emoji(),
        product.name,
        product.category,
        product.manufacturer,
        product.country,
        if product.boycott { "BOYCOTT" } else { "OK" }
    )?;
    if let Some(reason) = &product.reason {
        writeln!(out, "          {reason}")?;
    }
    if product.boycott && !product.alternatives.is_empty() {
        writeln!(out, "          try: {}", product.alternatives.join(", "))?;
    }
    Ok(())
}

pub fn search(
    app: &App,
    query: &SearchQuery,
    only: Option<HitKind>,
    now: DateTime<Utc>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    if query.is_blank() {
        writeln!(out, "Enter a search term")?;
        return Ok(());
    }

    let results = app.catalog.search(query);
    app.search_history()
        .record(query.term.trim(), query.scope.kind(), now)?;

    let hits: Vec<SearchHit<'_>> = match only {
        Some(kind) => results.of_kind(kind),
        None => results.hits().collect(),
    };
    if hits.is_empty() {
        writeln!(out, "No results for {:?}", query.term.trim())?;
        return Ok(());
    }

    let brand_count = hits.iter().filter(|hit| hit.kind() == HitKind::Brand).count();
    writeln!(
        out,
        "{} brand(s), {} product(s)",
        brand_count,
        hits.len() - brand_count
    )?;
    for hit in hits {
        match hit {
            SearchHit::Brand(brand) => write_brand(out, brand)?,
            SearchHit::Product(product) => write_product(out, product)?,
        }
    }
    Ok(())
}

pub fn recent(app: &App, n: usize, out: &mut impl Write) -> anyhow::Result<()> {
    let terms = app.search_history().recent(n)?;
    if terms.is_empty() {
        writeln!(out, "No recent searches")?;
    }
    for term in terms {
        writeln!(out, "{term}")?;
    }
    Ok(())
}

pub fn brands(
    app: &App,
    term: &str,
    category: Option<&str>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let brands = app.catalog.filter_brands(term, category);
    if brands.is_empty() {
        writeln!(out, "No brands match")?;
        return Ok(());
    }
    for brand in brands {
        write_brand(out, brand)?;
        writeln!(out, "          products: {}", brand.products.join(", "))?;
    }
    Ok(())
}

pub fn facets(app: &App, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "Categories: {}", app.catalog.categories().join(", "))?;
    writeln!(out, "Brand categories: {}", app.catalog.brand_categories().join(", "))?;
    writeln!(out, "Countries: {}", app.catalog.countries().join(", "))?;
    Ok(())
}

pub fn prefixes(app: &App, out: &mut impl Write) -> anyhow::Result<()> {
    let table = app.resolver.table();
    writeln!(out, "{} prefix(es) of length {}", table.len(), table.prefix_len())?;
    for record in table.records() {
        writeln!(
            out,
            "{}  {}{} [{}]  {}",
            record.prefix,
            flag(record),
            record.country_name,
            record.country_code,
            record.default_manufacturer_label
        )?;
    }
    Ok(())
}

pub fn login(app: &App, email: &str, name: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let user = app.session().login(email, name)?;
    writeln!(out, "Signed in as {} <{}>", user.name, user.email)?;
    Ok(())
}

pub fn logout(app: &App, out: &mut impl Write) -> anyhow::Result<()> {
    app.session().logout()?;
    writeln!(out, "Signed out")?;
    Ok(())
}

pub fn whoami(app: &App, out: &mut impl Write) -> anyhow::Result<()> {
    match app.session().load()? {
        Some(user) => {
            writeln!(out, "{} <{}>", user.name, user.email)?;
            if let Some(avatar) = &user.avatar {
                writeln!(out, "avatar: {avatar}")?;
            }
        }
        None => writeln!(out, "Not signed in")?,
    }
    Ok(())
}

pub fn profile(app: &App, update: ProfileUpdate, out: &mut impl Write) -> anyhow::Result<()> {
    if update.is_empty() {
        return whoami(app, out);
    }
    let user = app.session().update_profile(update)?;
    writeln!(out, "Profile updated: {} <{}>", user.name, user.email)?;
    Ok(())
}
