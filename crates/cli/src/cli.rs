use clap::{Parser, Subcommand, ValueEnum};

use solidarity_search::{HitKind, Scope, SortOrder};

#[derive(Parser, Debug)]
#[command(name = "solidarity")]
#[command(about = "Check products and brands against the boycott list")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Scan a barcode and show whether to boycott the product
    Scan {
        /// Barcode digits; a sample barcode is used when omitted
        barcode: Option<String>,

        /// Do not record the scan in history
        #[arg(long)]
        no_history: bool,

        /// Also print a shareable summary
        #[arg(long)]
        share: bool,
    },

    /// Show the country a barcode prefix maps to
    Resolve { barcode: String },

    /// List past scans
    History {
        /// Forget all past scans
        #[arg(long)]
        clear: bool,
    },

    /// Search brands and products
    Search {
        term: String,

        /// all, brands, products or a category name
        #[arg(long, default_value = "all")]
        scope: Scope,

        /// Keep only products from this country (repeatable)
        #[arg(long = "country")]
        countries: Vec<String>,

        /// Keep only products in this category (repeatable)
        #[arg(long = "category")]
        categories: Vec<String>,

        /// relevance, popularity, name_asc or name_desc
        #[arg(long, default_value = "relevance")]
        sort: SortOrder,

        /// Show a single result tab
        #[arg(long, value_enum)]
        only: Option<Tab>,
    },

    /// Recent distinct search terms
    Recent {
        #[arg(short, default_value = "5")]
        n: usize,
    },

    /// Browse the boycott list by brand
    Brands {
        /// Part of a brand name, case-insensitive
        term: Option<String>,

        #[arg(long)]
        category: Option<String>,
    },

    /// Categories and countries available as search filters
    Facets,

    /// Show the barcode prefix table
    Prefixes,

    /// Log in (or register) with an email and display name
    Login { email: String, name: String },

    Logout,

    /// Show the logged-in user
    Whoami,

    /// Edit the logged-in user's profile
    Profile {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        avatar: Option<String>,
    },
}

/// Result tab selectable with `search --only`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Brand,
    Product,
}

impl From<Tab> for HitKind {
    fn from(tab: Tab) -> Self {
        match tab {
            Tab::Brand => HitKind::Brand,
            Tab::Product => HitKind::Product,
        }
    }
}
