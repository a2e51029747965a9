//! Error types for the associative memory.

use thiserror::Error;

/// Hopfield error types.
///
/// Every fallible operation validates its inputs before touching any state,
/// so an `Err` never leaves a weight store or canvas half-updated.
#[derive(Error, Debug)]
pub enum HopfieldError {
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Dimensions that cannot back a grid or weight store
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    /// Grid has the wrong number of cells
    #[error("Cell count mismatch: expected {expected}, got {got}")]
    CellCountMismatch { expected: usize, got: usize },

    /// Activation vector has the wrong number of channels
    #[error("Channel count mismatch: expected {expected}, got {got}")]
    ChannelCountMismatch { expected: usize, got: usize },

    /// Symbol refers to a channel the set does not have
    #[error("Unknown channel {index} (channel set has {channels})")]
    UnknownChannel { index: usize, channels: usize },

    /// Recall rate is NaN or infinite
    #[error("Invalid recall rate: {0}")]
    InvalidRate(f64),

    /// Configuration failed validation
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type alias for Hopfield operations.
pub type Result<T> = std::result::Result<T, HopfieldError>;
