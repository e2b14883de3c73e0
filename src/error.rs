//! Error types for geocodable operations.

use thiserror::Error;

/// Result type for geocodable operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when normalizing points or dispatching lookups
#[derive(Error, Debug)]
pub enum Error {
    /// Point is not a coordinate pair, a geocoded entity, or a resolvable address
    #[error("Invalid point: {0}")]
    InvalidPoint(String),

    /// The search provider returned no results for a free-text address
    #[error("Unresolvable address: {0}")]
    UnresolvableAddress(String),

    /// Entry point called without entity-type setup
    #[error("`{0}` requires entity-type setup to assign lookup results")]
    NotImplemented(&'static str),

    /// Async runtime could not be created for a blocking wrapper
    #[error("Runtime error: {0}")]
    Runtime(String),
}
