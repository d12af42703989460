use thiserror::Error;

/// Top-level error type for the VideoRemix assistant.
///
/// Subsystem crates define their own error types and implement
/// `From<SubsystemError> for RemixError` so that `?` works across crate
/// boundaries. The conversation path itself never produces one of these;
/// they come from loading configuration and knowledge catalogs.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RemixError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for RemixError {
    fn from(err: toml::de::Error) -> Self {
        RemixError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for RemixError {
    fn from(err: toml::ser::Error) -> Self {
        RemixError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for RemixError {
    fn from(err: serde_json::Error) -> Self {
        RemixError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for assistant operations.
pub type Result<T> = std::result::Result<T, RemixError>;
