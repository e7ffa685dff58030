use luxor_catalog::CatalogError;
use luxor_core::DomainError;
use thiserror::Error;

pub type StorefrontResult<T> = Result<T, StorefrontError>;

/// Errors surfaced by the storefront layer.
#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown command `{0}` (try `help`)")]
    UnknownCommand(String),

    #[error("missing argument (usage: {usage})")]
    MissingArgument { usage: &'static str },
}

impl StorefrontError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
