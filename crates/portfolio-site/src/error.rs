use thiserror::Error;

/// Errors returned while loading the site content document.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid content: {0}")]
    Invalid(String),

    #[error("duplicate key: {0}")]
    DuplicateKey(String),
}
