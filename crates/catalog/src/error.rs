//! Catalog loading errors.

use std::path::PathBuf;

use luxor_core::{DomainError, ProductId};
use thiserror::Error;

/// Failure to build a [`Catalog`](crate::Catalog) from authored data.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid catalog entry #{index}: {source}")]
    Invalid {
        index: usize,
        #[source]
        source: DomainError,
    },

    #[error("duplicate product id `{0}`")]
    DuplicateId(ProductId),
}
