//! The ordered, read-only product collection.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use luxor_core::{Price, ProductId};

use crate::error::CatalogError;
use crate::product::{Product, ProductDraft};
use crate::search;

/// Authored catalog document: `{ "products": [ ... ] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub products: Vec<ProductDraft>,
}

/// Static, ordered collection of purchasable products.
///
/// Invariant: product ids are unique. Order is the authored order and is what
/// search results and listings preserve.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog from validated products, rejecting duplicate ids.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(products.len());
        for (pos, product) in products.iter().enumerate() {
            if index.insert(product.id_typed().clone(), pos).is_some() {
                return Err(CatalogError::DuplicateId(product.id_typed().clone()));
            }
        }
        Ok(Self { products, index })
    }

    /// Validate authored entries, then build the catalog.
    pub fn from_drafts(drafts: Vec<ProductDraft>) -> Result<Self, CatalogError> {
        let products = drafts
            .into_iter()
            .enumerate()
            .map(|(index, draft)| {
                draft
                    .validate()
                    .map_err(|source| CatalogError::Invalid { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(products)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        Self::from_drafts(doc.products)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        debug!(?path, "loading catalog");
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&contents)?;
        info!(?path, products = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            products: self.products.iter().map(ProductDraft::from).collect(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.index.get(id).map(|&pos| &self.products[pos])
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.index.contains_key(id)
    }

    pub fn price_of(&self, id: &ProductId) -> Option<Price> {
        self.get(id).map(Product::price)
    }

    /// Products visible for a free-text query. See [`search::filter`].
    pub fn search(&self, query: &str) -> Vec<&Product> {
        search::filter(self, query)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
