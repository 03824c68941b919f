//! Error types for the tripcal ecosystem.

use thiserror::Error;

/// Errors that can occur in tripcal operations.
#[derive(Error, Debug)]
pub enum TripCalError {
    #[error("Invalid trip start date '{0}' (expected YYYY-MM-DD)")]
    InvalidStartDate(String),

    #[error("Itinerary source error: {0}")]
    Source(String),

    #[error("Itinerary source command '{0}' not found in PATH")]
    SourceNotFound(String),

    #[error("Itinerary source timed out after {0}s")]
    SourceTimeout(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for tripcal operations.
pub type TripCalResult<T> = Result<T, TripCalError>;
