//! Error Types
//!
//! Typed failures behind the editor's silent fallbacks.

use thiserror::Error;

/// Why a text input could not be read as an integer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseIntError {
    #[error("input is empty")]
    Empty,
    #[error("no leading digits in {0:?}")]
    NoDigits(String),
    #[error("{0:?} does not fit in a 64-bit integer")]
    OutOfRange(String),
}

/// Failure to render a record as display text
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("json serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
