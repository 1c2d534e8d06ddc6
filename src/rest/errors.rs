//! The error taxonomy for API operations.
//!
//! Every facade method surfaces exactly one of three failure kinds, chosen
//! so callers can reason about retry safety:
//!
//! - [`ApiError::NotFound`]: the targeted resource definitely does not exist
//!   server-side. Non-retryable, and no side effect occurred.
//! - [`ApiError::Rejected`]: the provider understood the request but refused
//!   it, or the client refused to send it (precondition failure). Not
//!   retryable without changing the input.
//! - [`ApiError::Indeterminate`]: transport failure, timeout, server error,
//!   or an unparseable response. The effect on server state is unknown;
//!   retrying is only safe when the operation is idempotent, which the
//!   client does not decide.
//!
//! # Example
//!
//! ```rust,ignore
//! use digitalocean_api::ApiError;
//!
//! match client.droplet(42).await {
//!     Ok(droplet) => println!("{:?}", droplet.name),
//!     Err(ApiError::NotFound { resource, id, .. }) => {
//!         println!("{} {} does not exist", resource, id);
//!     }
//!     Err(ApiError::Rejected { message, .. }) => {
//!         println!("request refused: {}", message);
//!     }
//!     Err(ApiError::Indeterminate { message, .. }) => {
//!         println!("outcome unknown: {}", message);
//!     }
//! }
//! ```

use std::fmt;

use thiserror::Error;

use crate::clients::{HttpError, HttpMethod, HttpResponse};

/// The request a failure relates to, kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// The HTTP method of the originating request.
    pub method: HttpMethod,
    /// The request path relative to the base URL.
    pub path: String,
}

impl RequestContext {
    /// Creates a new request context.
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
        }
    }
}

impl fmt::Display for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} /{}", self.method, self.path)
    }
}

/// Error type for API operations.
///
/// See the module documentation for the retry-safety contract of each kind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The targeted resource does not exist server-side (HTTP 404).
    #[error("{resource} '{id}' not found ({context})")]
    NotFound {
        /// The type name of the resource (e.g., "Droplet", "Domain").
        resource: &'static str,
        /// The identifier that was requested (numeric id, slug, or name).
        id: String,
        /// The request the failure relates to.
        context: RequestContext,
    },

    /// The request was refused, either by the provider (4xx other than 404,
    /// carrying the provider-supplied message) or by the client before
    /// sending (precondition failure; `status` is `None` and no network
    /// activity occurred).
    #[error("Request rejected: {message}")]
    Rejected {
        /// Human-readable reason, from the provider when available.
        message: String,
        /// The HTTP status code, when a response was received.
        status: Option<u16>,
        /// The request the failure relates to, when one was built.
        context: Option<RequestContext>,
    },

    /// The outcome of the request is unknown: server error, transport
    /// failure, timeout, or a response that could not be decoded.
    #[error("Request unsuccessful: {message}")]
    Indeterminate {
        /// Description of the failure.
        message: String,
        /// The HTTP status code, when a response was received.
        status: Option<u16>,
        /// The request the failure relates to, when one was built.
        context: Option<RequestContext>,
    },
}

impl ApiError {
    /// Creates a `Rejected` error for a precondition failure detected
    /// before any network activity.
    #[must_use]
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
            status: None,
            context: None,
        }
    }

    /// Creates an `Indeterminate` error for a response that could not be
    /// decoded into the expected shape.
    #[must_use]
    pub fn decode(message: impl Into<String>, status: u16, context: &RequestContext) -> Self {
        Self::Indeterminate {
            message: message.into(),
            status: Some(status),
            context: Some(context.clone()),
        }
    }

    /// Maps a transport-level failure into the taxonomy.
    ///
    /// Validation failures become `Rejected` (the request never left the
    /// client); timeouts and network errors become `Indeterminate`.
    #[must_use]
    pub fn from_transport(error: HttpError, context: RequestContext) -> Self {
        match error {
            HttpError::InvalidRequest(e) => Self::Rejected {
                message: e.to_string(),
                status: None,
                context: Some(context),
            },
            HttpError::Timeout(message) | HttpError::Network(message) => Self::Indeterminate {
                message,
                status: None,
                context: Some(context),
            },
        }
    }

    /// Maps a non-success HTTP response into the taxonomy.
    ///
    /// - 404 always becomes `NotFound`, regardless of body content.
    /// - Other 4xx become `Rejected`, preserving the provider message.
    /// - Everything else (5xx, unexpected 3xx) becomes `Indeterminate`.
    #[must_use]
    pub fn from_response(
        response: &HttpResponse,
        resource: &'static str,
        id: Option<&str>,
        context: &RequestContext,
    ) -> Self {
        match response.code {
            404 => Self::NotFound {
                resource,
                id: id.unwrap_or("unknown").to_string(),
                context: context.clone(),
            },
            400..=499 => Self::Rejected {
                message: provider_message(response),
                status: Some(response.code),
                context: Some(context.clone()),
            },
            _ => Self::Indeterminate {
                message: provider_message(response),
                status: Some(response.code),
                context: Some(context.clone()),
            },
        }
    }

    /// Returns the HTTP status code, when a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::Rejected { status, .. } | Self::Indeterminate { status, .. } => *status,
        }
    }

    /// Returns the request context, when a request was built.
    #[must_use]
    pub const fn context(&self) -> Option<&RequestContext> {
        match self {
            Self::NotFound { context, .. } => Some(context),
            Self::Rejected { context, .. } | Self::Indeterminate { context, .. } => {
                context.as_ref()
            }
        }
    }

    /// Returns `true` for the `NotFound` kind.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Extracts a human-readable message from a provider error body.
///
/// DigitalOcean error bodies have the shape
/// `{"id": "not_found", "message": "The resource ... could not be found."}`.
/// Falls back through the error id, the raw body, and the status code.
fn provider_message(response: &HttpResponse) -> String {
    if let Ok(body) = response.parse_json() {
        if let Some(message) = body.get("message").and_then(serde_json::Value::as_str) {
            return message.to_string();
        }
        if let Some(id) = body.get("id").and_then(serde_json::Value::as_str) {
            return id.to_string();
        }
    }

    let trimmed = response.body.trim();
    if trimmed.is_empty() {
        format!("HTTP {}", response.code)
    } else {
        trimmed.to_string()
    }
}

// Verify ApiError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiError>();
    assert_send_sync::<RequestContext>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn response(code: u16, body: &str) -> HttpResponse {
        HttpResponse::new(code, HashMap::new(), body.to_string())
    }

    fn context() -> RequestContext {
        RequestContext::new(HttpMethod::Get, "droplets/42")
    }

    #[test]
    fn test_request_context_display() {
        assert_eq!(context().to_string(), "GET /droplets/42");
    }

    #[test]
    fn test_not_found_error_formats_message_with_resource_and_id() {
        let error = ApiError::NotFound {
            resource: "Droplet",
            id: "42".to_string(),
            context: context(),
        };
        let message = error.to_string();

        assert!(message.contains("Droplet"));
        assert!(message.contains("42"));
        assert!(message.contains("not found"));
        assert!(message.contains("GET /droplets/42"));
    }

    #[test]
    fn test_from_response_maps_404_to_not_found() {
        let error = ApiError::from_response(
            &response(404, r#"{"id":"not_found","message":"not there"}"#),
            "Droplet",
            Some("42"),
            &context(),
        );

        assert!(matches!(
            error,
            ApiError::NotFound { resource: "Droplet", ref id, .. } if id == "42"
        ));
        assert_eq!(error.status(), Some(404));
    }

    #[test]
    fn test_from_response_maps_404_regardless_of_body() {
        let error = ApiError::from_response(&response(404, "<html></html>"), "Image", None, &context());
        assert!(error.is_not_found());
    }

    #[test]
    fn test_from_response_maps_422_to_rejected_with_provider_message() {
        let error = ApiError::from_response(
            &response(
                422,
                r#"{"id":"unprocessable_entity","message":"Name is too long."}"#,
            ),
            "Droplet",
            None,
            &context(),
        );

        assert!(matches!(
            error,
            ApiError::Rejected { ref message, status: Some(422), .. } if message == "Name is too long."
        ));
    }

    #[test]
    fn test_from_response_maps_400_to_rejected() {
        let error = ApiError::from_response(
            &response(400, r#"{"id":"bad_request","message":"bad input"}"#),
            "Domain",
            None,
            &context(),
        );

        assert!(matches!(error, ApiError::Rejected { status: Some(400), .. }));
    }

    #[test]
    fn test_from_response_maps_500_to_indeterminate() {
        let error = ApiError::from_response(
            &response(500, r#"{"id":"server_error","message":"boom"}"#),
            "Droplet",
            None,
            &context(),
        );

        assert!(matches!(
            error,
            ApiError::Indeterminate { ref message, status: Some(500), .. } if message == "boom"
        ));
    }

    #[test]
    fn test_from_response_maps_503_to_indeterminate() {
        let error = ApiError::from_response(&response(503, ""), "Droplet", None, &context());

        assert!(matches!(
            error,
            ApiError::Indeterminate { ref message, status: Some(503), .. } if message == "HTTP 503"
        ));
    }

    #[test]
    fn test_provider_message_falls_back_to_error_id() {
        let error = ApiError::from_response(
            &response(403, r#"{"id":"forbidden"}"#),
            "Droplet",
            None,
            &context(),
        );

        assert!(matches!(
            error,
            ApiError::Rejected { ref message, .. } if message == "forbidden"
        ));
    }

    #[test]
    fn test_provider_message_falls_back_to_raw_body() {
        let error = ApiError::from_response(&response(429, "slow down"), "Droplet", None, &context());

        assert!(matches!(
            error,
            ApiError::Rejected { ref message, status: Some(429), .. } if message == "slow down"
        ));
    }

    #[test]
    fn test_precondition_has_no_status_or_context() {
        let error = ApiError::precondition("required path parameter 'name' must not be empty");

        assert!(matches!(error, ApiError::Rejected { status: None, context: None, .. }));
        assert_eq!(error.status(), None);
        assert!(error.context().is_none());
    }

    #[test]
    fn test_from_transport_timeout_is_indeterminate() {
        let error = ApiError::from_transport(
            HttpError::Timeout("deadline elapsed".to_string()),
            context(),
        );

        assert!(matches!(error, ApiError::Indeterminate { status: None, .. }));
        assert!(error.context().is_some());
    }

    #[test]
    fn test_from_transport_invalid_request_is_rejected() {
        let error = ApiError::from_transport(
            crate::clients::InvalidHttpRequestError::EmptyPath.into(),
            context(),
        );

        assert!(matches!(error, ApiError::Rejected { status: None, .. }));
    }

    #[test]
    fn test_decode_error_is_indeterminate_with_status() {
        let error = ApiError::decode("missing 'droplet' in response", 200, &context());

        assert!(matches!(error, ApiError::Indeterminate { status: Some(200), .. }));
        assert!(error.to_string().contains("missing 'droplet'"));
    }

    #[test]
    fn test_all_error_variants_implement_std_error() {
        let not_found: &dyn std::error::Error = &ApiError::NotFound {
            resource: "Droplet",
            id: "1".to_string(),
            context: context(),
        };
        let _ = not_found;

        let rejected: &dyn std::error::Error = &ApiError::precondition("bad");
        let _ = rejected;

        let indeterminate: &dyn std::error::Error = &ApiError::Indeterminate {
            message: "unknown".to_string(),
            status: None,
            context: None,
        };
        let _ = indeterminate;
    }
}
