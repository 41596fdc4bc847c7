//! Error types for open-slots operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    /// The input text was not JSON at all.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid time point: {0}")]
    InvalidTimePoint(String),
}

pub type Result<T> = std::result::Result<T, SlotError>;
