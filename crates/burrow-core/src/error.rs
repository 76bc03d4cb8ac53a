use thiserror::Error;

/// Result type for short code construction.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors related to the core types of the URL shortener.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid short code: {0}")]
    InvalidShortCode(String),
}

/// Errors returned by short code allocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortenerError {
    /// Every candidate drawn from the generator was already taken.
    #[error("could not allocate a unique short code after {attempts} attempts")]
    AllocationExhausted { attempts: usize },
}
