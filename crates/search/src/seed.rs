//! Built-in brand and product listings.

use solidarity_origin::CountryCode;

use crate::item::{Brand, CatalogProduct};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn brand(
    id: u32,
    name: &str,
    category: &str,
    reason: &str,
    alternatives: &[&str],
    products: &[&str],
    popularity: u32,
) -> Brand {
    Brand {
        id,
        name: name.to_string(),
        category: category.to_string(),
        reason: reason.to_string(),
        alternatives: strings(alternatives),
        products: strings(products),
        popularity,
    }
}

struct Origin(&'static str, CountryCode);

#[allow(clippy::too_many_arguments)]
fn product(
    id: u32,
    name: &str,
    category: &str,
    barcode: &str,
    manufacturer: &str,
    origin: Origin,
    reason: Option<&str>,
    alternatives: &[&str],
    popularity: u32,
) -> CatalogProduct {
    CatalogProduct {
        id,
        name: name.to_string(),
        category: category.to_string(),
        barcode: Some(barcode.to_string()),
        manufacturer: manufacturer.to_string(),
        country: origin.0.to_string(),
        country_code: origin.1,
        boycott: reason.is_some(),
        reason: reason.map(str::to_string),
        alternatives: strings(alternatives),
        popularity,
    }
}

const US: Origin = Origin("United States", CountryCode::from_static(b"US"));
const CH: Origin = Origin("Switzerland", CountryCode::from_static(b"CH"));
const DE: Origin = Origin("Germany", CountryCode::from_static(b"DE"));
const IL: Origin = Origin("Israel", CountryCode::ISRAEL);
const JO: Origin = Origin("Jordan", CountryCode::from_static(b"JO"));
const TR: Origin = Origin("Turkey", CountryCode::from_static(b"TR"));
const PS: Origin = Origin("Palestine", CountryCode::from_static(b"PS"));
const MY: Origin = Origin("Malaysia", CountryCode::from_static(b"MY"));
const ID: Origin = Origin("Indonesia", CountryCode::from_static(b"ID"));
const LB: Origin = Origin("Lebanon", CountryCode::from_static(b"LB"));

pub(crate) fn brands() -> Vec<Brand> {
    vec![
        brand(
            1,
            "Coca-Cola",
            "Beverages",
            "Supports occupation through investments and operations",
            &["Local soda brands", "Water", "Homemade beverages"],
            &["Coca-Cola", "Sprite", "Fanta", "Diet Coke", "Coke Zero"],
            95,
        ),
        brand(
            2,
            "McDonald's",
            "Fast Food",
            "Financial support to occupation",
            &["Local restaurants", "Independent food vendors"],
            &["Big Mac", "McChicken", "Happy Meal", "McNuggets"],
            90,
        ),
        brand(
            3,
            "Nestlé",
            "Food & Beverages",
            "Operations in occupied territories",
            &["Local food brands", "Ethical food companies"],
            &["Nescafé", "KitKat", "Nesquik", "Maggi", "Purina", "Perrier"],
            85,
        ),
        brand(
            4,
            "Starbucks",
            "Beverages",
            "Financial ties to occupation",
            &["Local coffee shops", "Independent cafes"],
            &["Coffee", "Frappuccino", "Cold Brew", "Espresso"],
            80,
        ),
        brand(
            5,
            "HP",
            "Technology",
            "Provides technology for checkpoints and surveillance",
            &["Lenovo", "Acer", "Local tech brands"],
            &["Laptops", "Printers", "Ink", "Monitors"],
            75,
        ),
        brand(
            6,
            "Puma",
            "Clothing",
            "Sponsors teams in occupied territories",
            &["Adidas", "New Balance", "Local clothing brands"],
            &["Shoes", "Sportswear", "T-shirts", "Accessories"],
            70,
        ),
        brand(
            7,
            "Sabra",
            "Food",
            "Partially owned by the Strauss Group, which supports Israeli military",
            &["Homemade hummus", "Local brands", "Other dip varieties"],
            &["Hummus", "Guacamole", "Salsa"],
            65,
        ),
        brand(
            8,
            "SodaStream",
            "Beverages",
            "Headquarters in illegal settlement territory",
            &["Traditional soda", "Homemade carbonated drinks"],
            &["Sparkling water makers", "Carbonation bottles", "Flavors"],
            60,
        ),
        brand(
            9,
            "Airbnb",
            "Travel",
            "Listings in illegal settlements",
            &["Local hotels", "Alternative booking platforms"],
            &["Accommodation bookings", "Experiences"],
            55,
        ),
        brand(
            10,
            "Caterpillar",
            "Construction",
            "Provides bulldozers used for home demolitions",
            &["Other construction equipment brands"],
            &["Bulldozers", "Construction equipment", "Work boots"],
            50,
        ),
    ]
}

pub(crate) fn products() -> Vec<CatalogProduct> {
    const SODA_ALTS: &[&str] = &["Local soda brands", "Water", "Homemade beverages"];
    const PARENT_COKE: Option<&str> = Some("Parent company supports occupation");
    const PARENT_NESTLE: Option<&str> =
        Some("Parent company has operations in occupied territories");

    vec![
        product(
            1,
            "Coca-Cola Classic",
            "Beverages",
            "5449000000996",
            "The Coca-Cola Company",
            US,
            PARENT_COKE,
            SODA_ALTS,
            95,
        ),
        product(
            2,
            "Sprite",
            "Beverages",
            "5449000131805",
            "The Coca-Cola Company",
            US,
            PARENT_COKE,
            SODA_ALTS,
            90,
        ),
        product(
            3,
            "KitKat",
            "Confectionery",
            "7613035260122",
            "Nestlé",
            CH,
            PARENT_NESTLE,
            &["Local chocolate brands", "Ethical chocolate companies"],
            85,
        ),
        product(
            4,
            "Nescafé Gold",
            "Beverages",
            "7613036932769",
            "Nestlé",
            CH,
            PARENT_NESTLE,
            &["Local coffee brands", "Fair trade coffee"],
            80,
        ),
        product(
            5,
            "Sabra Hummus",
            "Food",
            "040822011058",
            "Sabra Dipping Co.",
            US,
            Some("Partially owned by the Strauss Group, which supports Israeli military"),
            &["Homemade hummus", "Local brands", "Other dip varieties"],
            75,
        ),
        product(
            6,
            "HP Laptop",
            "Technology",
            "889899374795",
            "HP Inc.",
            US,
            Some("Company provides technology for checkpoints and surveillance"),
            &["Lenovo", "Acer", "Local tech brands"],
            70,
        ),
        product(
            7,
            "Puma Running Shoes",
            "Clothing",
            "4056969794513",
            "Puma",
            DE,
            Some("Sponsors teams in occupied territories"),
            &["Adidas", "New Balance", "Local clothing brands"],
            65,
        ),
        product(
            8,
            "SodaStream Fizzi",
            "Beverages",
            "7290014679658",
            "SodaStream",
            IL,
            Some("Headquarters in illegal settlement territory"),
            &["Traditional soda", "Homemade carbonated drinks"],
            60,
        ),
        product(
            9,
            "Dates from Jordan",
            "Food",
            "6254001234567",
            "Jordan Valley Farms",
            JO,
            None,
            &[],
            55,
        ),
        product(
            10,
            "Turkish Coffee",
            "Beverages",
            "8690504012345",
            "Turkish Coffee Co.",
            TR,
            None,
            &[],
            50,
        ),
        product(
            11,
            "Palestinian Olive Oil",
            "Food",
            "6255001234567",
            "Palestine Fair Trade",
            PS,
            None,
            &[],
            45,
        ),
        product(
            12,
            "Malaysian Chocolate",
            "Confectionery",
            "9556001234567",
            "Malaysian Cocoa Board",
            MY,
            None,
            &[],
            40,
        ),
        product(
            13,
            "Israeli Dates",
            "Food",
            "7290001234567",
            "Israeli Agricultural Co.",
            IL,
            Some("Product from Israel"),
            &["Dates from Jordan", "Dates from Tunisia", "Dates from Algeria"],
            35,
        ),
        product(
            14,
            "Indonesian Coffee",
            "Beverages",
            "8997001234567",
            "Indonesian Coffee Producers",
            ID,
            None,
            &[],
            30,
        ),
        product(
            15,
            "Lebanese Tahini",
            "Food",
            "6281001234567",
            "Lebanese Food Co.",
            LB,
            None,
            &[],
            25,
        ),
    ]
}
