/// Unified error types for the item resolver
use thiserror::Error;

/// Main error type for resolver construction and wiring
///
/// Fetch failures never surface through this type: `ItemResolver::resolve`
/// folds them into an `ItemResponse` envelope instead.
#[derive(Error, Debug)]
pub enum ResolverError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for resolver operations
pub type ResolverResult<T> = Result<T, ResolverError>;
