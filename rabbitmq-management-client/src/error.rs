//! Operation error and result types.

use http::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Represents the failures a management API operation can surface.
#[derive(Error, Debug)]
pub enum Error {
    /// A required request field was missing or empty. Detected before any
    /// network call; no request is sent.
    #[error("{0}")]
    Validation(String),
    /// The exchange completed but the broker answered with a status outside
    /// the 200-299 range.
    #[error("request failed with status {status}")]
    ApiFailure {
        /// HTTP status returned by the broker.
        status: StatusCode,
        /// Decoded response body, unmodified.
        body: Value,
    },
    /// No response was received: timeout, DNS failure, connection refused.
    #[error("transport failure: `{0}`")]
    Transport(#[from] reqwest::Error),
}

/// A type alias for results from management API operations.
pub type ApiResult<T> = Result<T, Error>;
