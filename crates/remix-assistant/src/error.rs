//! Error types for the assistant.
//!
//! Only catalog loading can fail. Answering questions never errors: weak
//! matches degrade to the fallback reply instead.

use remix_core::error::RemixError;

/// Errors from loading or validating a knowledge catalog.
#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("failed to read catalog: {0}")]
    CatalogIo(#[from] std::io::Error),
    #[error("failed to parse catalog: {0}")]
    CatalogParse(String),
    #[error("invalid catalog entry {index}: {reason}")]
    InvalidEntry { index: usize, reason: String },
    #[error("catalog has no entries")]
    EmptyCatalog,
}

impl From<serde_json::Error> for AssistantError {
    fn from(err: serde_json::Error) -> Self {
        AssistantError::CatalogParse(err.to_string())
    }
}

impl From<AssistantError> for RemixError {
    fn from(err: AssistantError) -> Self {
        match err {
            AssistantError::CatalogIo(e) => RemixError::Io(e),
            other => RemixError::Catalog(other.to_string()),
        }
    }
}
