//! Error types for daily-core.

use thiserror::Error;

/// Result type alias using StoreError.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors raised by a state store.
///
/// The engine never surfaces these: reads degrade to "no state" and writes
/// are dropped after logging.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("corrupt state payload: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
