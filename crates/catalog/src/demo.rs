//! The six-watch demo catalog.
//!
//! Prices are whole BRL units. Replace with a JSON catalog
//! (`Catalog::from_json_file`) for real inventory.

use luxor_core::{Price, ProductId};

use crate::catalog::Catalog;
use crate::product::Product;

struct Row {
    id: &'static str,
    name: &'static str,
    brand: &'static str,
    price: u64,
    image: &'static str,
    tags: &'static [&'static str],
}

const ROWS: &[Row] = &[
    Row {
        id: "pp-nautilus",
        name: "Nautilus Blue Dial",
        brand: "Patek Philippe",
        price: 129_900,
        image: "https://images.unsplash.com/photo-1548171916-c0dea59df7eb?q=80&w=1600&auto=format&fit=crop",
        tags: &["Automatic", "Stainless Steel"],
    },
    Row {
        id: "rolex-sub",
        name: "Submariner Date Black",
        brand: "Rolex",
        price: 74_900,
        image: "https://images.unsplash.com/photo-1526045478516-99145907023c?q=80&w=1600&auto=format&fit=crop",
        tags: &["Diver", "Ceramic Bezel"],
    },
    Row {
        id: "ap-royal-oak",
        name: "Royal Oak 41 Silver",
        brand: "Audemars Piguet",
        price: 159_900,
        image: "https://images.unsplash.com/photo-1524805444758-089113d48a6d?q=80&w=1600&auto=format&fit=crop",
        tags: &["Integrated Bracelet", "Iconic"],
    },
    Row {
        id: "omega-speedmaster",
        name: "Speedmaster Moonwatch",
        brand: "Omega",
        price: 38_900,
        image: "https://images.unsplash.com/photo-1606167668584-78701c57f13d?q=80&w=1600&auto=format&fit=crop",
        tags: &["Chronograph", "Manual Wind"],
    },
    Row {
        id: "tag-carrera",
        name: "Carrera Calibre 5",
        brand: "TAG Heuer",
        price: 12_900,
        image: "https://images.unsplash.com/photo-1526045612212-70caf35c14df?q=80&w=1600&auto=format&fit=crop",
        tags: &["Everyday", "Automatic"],
    },
    Row {
        id: "tissot-prx",
        name: "PRX Powermatic 80",
        brand: "Tissot",
        price: 4_499,
        image: "https://images.unsplash.com/photo-1612815154858-60aa4c59eaa0?q=80&w=1600&auto=format&fit=crop",
        tags: &["Value", "Integrated"],
    },
];

/// Build the demo catalog.
pub fn demo_catalog() -> Catalog {
    let products: Vec<Product> = ROWS
        .iter()
        .filter_map(|row| {
            Product::new(
                ProductId::new(row.id),
                row.name,
                row.brand,
                Price::new(row.price),
                row.image,
                row.tags.iter().map(|t| (*t).to_string()).collect(),
            )
            .ok()
        })
        .collect();
    Catalog::new(products).unwrap_or_default()
}
