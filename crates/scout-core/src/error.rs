//! Error types for the scouting engine.

use thiserror::Error;

/// Result type for scouting operations.
pub type ScoutResult<T> = Result<T, ScoutError>;

/// Errors that can occur while planning or running a scout.
#[derive(Debug, Error)]
pub enum ScoutError {
    /// A scout must draw at least one card.
    #[error("invalid scout count: {0} (must be at least 1)")]
    InvalidCount(u32),

    /// Box name that matches none of the known profiles.
    #[error("unknown box: {0}")]
    UnknownBox(String),

    /// The card catalog could not answer a query.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// An image could not be produced for the scout.
    #[error("render error: {0}")]
    Render(String),

    /// Fewer cards were gathered than the scout asked for.
    #[error("expected {expected} cards, got {actual}")]
    Shortfall {
        /// Cards requested.
        expected: usize,
        /// Cards actually gathered.
        actual: usize,
    },

    /// A card carried no usable image URL.
    #[error("card has no image url")]
    MissingImage,

    /// Filesystem error.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON card data.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
