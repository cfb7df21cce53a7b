//! Error types for overgrid operations.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, OvergridError>;

/// Errors produced by the overgrid core.
///
/// The taxonomy is deliberately narrow: the index is purely computational and
/// in-memory, so almost every "failure" (an out-of-bounds insert, a query that
/// matches nothing) is an ordinary return value rather than an error. The
/// variants here all indicate a caller contract violation.
#[derive(Debug, Error)]
pub enum OvergridError {
    /// A rectangle was constructed with min > max on either axis, or with a
    /// non-finite coordinate.
    #[error("invalid bounds: {0}")]
    InvalidBounds(String),

    /// A polygon was finalized with fewer than three distinct vertices.
    #[error("invalid polygon: {0}")]
    InvalidPolygon(String),

    /// A configuration or argument value is out of its documented range.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration could not be parsed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
