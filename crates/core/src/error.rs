//! Error types shared across the study-assistant crates.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while asking the assist service a question.
#[derive(Error, Debug)]
pub enum Error {
    /// The question was empty or whitespace-only; no request was sent.
    #[error("Question must not be empty")]
    EmptyQuestion,

    /// The request never completed (connection refused, timeout, DNS).
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a non-success HTTP status.
    #[error("Request failed: {0}")]
    RequestFailed(u16),

    /// The response body could not be read as an answer document.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}
