//! Free-text catalog search.
//!
//! A product is visible when its searchable text (name, brand and tags joined by
//! spaces, lowercased) contains the trimmed, lowercased query. An empty query shows
//! everything. Results keep catalog order.

use crate::catalog::Catalog;
use crate::product::Product;

/// A normalized search query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn parse(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Lowercased `name brand tag1 tag2 ...`.
pub fn searchable_text(product: &Product) -> String {
    let mut text = String::with_capacity(product.name().len() + product.brand().len() + 16);
    text.push_str(product.name());
    text.push(' ');
    text.push_str(product.brand());
    for tag in product.tags() {
        text.push(' ');
        text.push_str(tag);
    }
    text.to_lowercase()
}

pub fn matches(product: &Product, query: &SearchQuery) -> bool {
    query.is_empty() || searchable_text(product).contains(query.as_str())
}

/// Visible subset of `catalog` for a raw, user-typed query.
pub fn filter<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Product> {
    let query = SearchQuery::parse(query);
    if query.is_empty() {
        return catalog.iter().collect();
    }
    catalog.iter().filter(|p| matches(p, &query)).collect()
}
