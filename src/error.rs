// src/error.rs

use std::fmt;

/// Global Application Error Enum.
/// Centralizes error handling for the fetch, storage and input paths.
#[derive(Debug)]
pub enum AppError {
    /// Network failure while talking to the question API
    /// (connect error, timeout, non-success HTTP status, API refusal).
    Fetch(String),

    /// The API responded, but the body was not the expected JSON shape.
    Decode(String),

    /// The cookie jar or leaderboard blob could not be written.
    Storage(String),

    /// Rejected user input (e.g. an over-long player name).
    InvalidInput(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Fetch(msg) => write!(f, "question fetch failed: {}", msg),
            AppError::Decode(msg) => write!(f, "unexpected API response: {}", msg),
            AppError::Storage(msg) => write!(f, "storage failure: {}", msg),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Converts `reqwest::Error` into `AppError::Fetch`.
/// Allows using `?` operator on API calls.
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Fetch(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}
