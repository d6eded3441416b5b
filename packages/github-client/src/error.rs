//! Error types for the GitHub Gists client.

use thiserror::Error;

/// Result type for GitHub client operations.
pub type Result<T> = std::result::Result<T, GistApiError>;

/// GitHub client errors.
#[derive(Debug, Error)]
pub enum GistApiError {
    /// Transport-level failure (connection refused, TLS, timeout, bad JSON).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP response from the API. The body is carried verbatim;
    /// callers treat every status the same way and abort.
    #[error("GitHub API error {status}: {message}")]
    Api { status: u16, message: String },
}
