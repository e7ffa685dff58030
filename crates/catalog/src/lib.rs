//! Watch catalog domain module.
//!
//! This crate holds the static product catalog and the search filter over it,
//! implemented purely as deterministic domain logic (no rendering, no storage).

pub mod catalog;
pub mod demo;
pub mod error;
pub mod product;
pub mod search;

pub use catalog::{Catalog, CatalogDocument};
pub use demo::demo_catalog;
pub use error::CatalogError;
pub use product::{Product, ProductDraft};
pub use search::{SearchQuery, filter, matches, searchable_text};
