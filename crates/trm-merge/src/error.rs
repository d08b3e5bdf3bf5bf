//! Error types for the merge crate.
//!
//! The merge itself never fails. These errors come only from the strict
//! configuration surface.

use trm_types::TypeError;

/// Errors that can occur while building or loading a merge configuration.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// A configured value failed strict type validation.
    #[error("invalid value: {0}")]
    Type(#[from] TypeError),

    /// The configuration document could not be parsed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience alias for merge configuration results.
pub type MergeResult<T> = Result<T, MergeError>;
