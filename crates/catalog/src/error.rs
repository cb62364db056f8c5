//! Catalog error types.

use thiserror::Error;

/// Errors that can occur while assembling or pricing an ice cream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A combination was built without choosing a flavor.
    #[error("Combination '{name}' has no flavor")]
    MissingFlavor { name: String },

    /// A seasonal discount outside `0..=100` percent.
    #[error("Invalid discount: {percentage}% (must be between 0 and 100)")]
    InvalidDiscount { percentage: u32 },

    /// A season name that does not match any season.
    #[error("Unknown season: {0}")]
    UnknownSeason(String),
}

/// Convenience type alias for catalog results.
pub type Result<T> = std::result::Result<T, CatalogError>;
