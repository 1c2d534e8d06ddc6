//! Transport-level error types for the DigitalOcean API client.
//!
//! This module contains error types for the HTTP transport layer: request
//! validation failures detected before sending, and network failures raised
//! while sending. HTTP error *responses* are not represented here: the
//! transport returns any received response to the interpreter layer, which
//! maps status codes into the public error taxonomy.

use thiserror::Error;

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent, so a failing request is
/// guaranteed to have caused no network activity.
///
/// # Example
///
/// ```rust
/// use digitalocean_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "POST".to_string(),
/// };
///
/// println!("{}", error); // "Cannot use POST without a request body."
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request path is empty.
    #[error("Request path must not be empty.")]
    EmptyPath,

    /// The request path still contains an unresolved `{placeholder}`.
    #[error("Request path '{path}' contains an unresolved path parameter.")]
    UnresolvedPathParameter {
        /// The path with the unresolved placeholder.
        path: String,
    },

    /// A POST or PUT request was built without a body.
    #[error("Cannot use {method} without a request body.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for transport-level failures.
///
/// The timeout case is kept distinct from other network failures so callers
/// can tell "the request deadline elapsed" apart from connection-level
/// errors, even though both leave the server-side effect unknown.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed before any network activity.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The configured request timeout elapsed.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// A network or connection error occurred.
    #[error("Network error: {0}")]
    Network(String),
}

impl From<reqwest::Error> for HttpError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<InvalidHttpRequestError>();
    assert_send_sync::<HttpError>();
};
