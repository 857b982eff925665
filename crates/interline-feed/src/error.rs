//! Error types for interline-feed

use interline_core::InterlineError;
use thiserror::Error;

/// Result type alias for feed operations
pub type Result<T> = std::result::Result<T, FeedError>;

/// Errors reading a partner feed or building the downstream response
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("XML parse error at byte {position}: {message}")]
    Xml { position: usize, message: String },

    #[error("Invalid boolean in <{tag}>: {value:?}")]
    InvalidBool { tag: &'static str, value: String },

    #[error("Feed has no offers")]
    NoOffers,

    #[error("First offer has no segments")]
    NoSegments,

    #[error("Interline error: {0}")]
    Core(#[from] InterlineError),

    #[error("JSON error: {0}")]
    Json(String),
}
