//! Source error types.

use thiserror::Error;

/// Errors that can occur while obtaining the fragment stream.
#[derive(Debug, Error)]
pub enum SourceError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The schedule page returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the server.
        status: u16,
        /// Response body.
        message: String,
    },

    /// A configured header value is not valid HTTP.
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// The server returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// A fragment file could not be read or written.
    #[error("fragment file error: {0}")]
    Io(#[from] std::io::Error),

    /// A fragment file line is not a valid fragment.
    #[error("parse error: {0}")]
    Parse(String),
}
