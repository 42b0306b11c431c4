//! Error types for deal-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DealError {
    /// A time string is blank or matches none of the accepted formats.
    #[error("Invalid time format: {0}")]
    InvalidTimeFormat(String),

    /// A required request parameter was absent or blank.
    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid page request: {0}")]
    InvalidPageRequest(String),

    /// The restaurant feed document was not valid JSON or had the wrong shape.
    #[error("Feed parse error: {0}")]
    FeedParse(#[from] serde_json::Error),

    #[error("Feed error: {0}")]
    Feed(String),
}

pub type Result<T> = std::result::Result<T, DealError>;
