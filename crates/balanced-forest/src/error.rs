//! Error types for container construction.

use thiserror::Error;

/// Result type alias using [`ForestError`].
pub type Result<T> = std::result::Result<T, ForestError>;

/// Errors raised when building a container.
///
/// Runtime conditions such as duplicate inserts or absent deletes are not
/// errors; they are reported through
/// [`InsertOutcome`](crate::types::InsertOutcome) and
/// [`RemoveOutcome`](crate::types::RemoveOutcome).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForestError {
    #[error("invalid B-tree configuration: max_keys is {max_keys}, must be at least {min}")]
    Configuration { max_keys: usize, min: usize },
}
