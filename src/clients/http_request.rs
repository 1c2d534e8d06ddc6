//! HTTP request types for the DigitalOcean API client.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests before they are handed to the transport layer.
//! Building a request performs no network I/O, so request construction can
//! be tested in isolation.

use std::collections::BTreeMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods supported by the DigitalOcean API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources and performing actions.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// An HTTP request to be sent to the DigitalOcean API.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder
/// pattern. The `path` is relative to the client's base URL and must have
/// all path parameters already substituted.
///
/// Query parameters are kept in a [`BTreeMap`] so they serialize in a
/// stable, sorted order regardless of insertion order.
///
/// # Example
///
/// ```rust
/// use digitalocean_api::clients::{HttpRequest, HttpMethod};
/// use serde_json::json;
///
/// // GET request with a query parameter
/// let get_request = HttpRequest::builder(HttpMethod::Get, "droplets")
///     .query_param("page", "2")
///     .build()
///     .unwrap();
///
/// // POST request with a JSON body
/// let post_request = HttpRequest::builder(HttpMethod::Post, "droplets")
///     .body(json!({"name": "example", "region": "nyc1"}))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The path (relative to the base URL) for this request.
    pub path: String,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
    /// Query parameters to append to the URL, in sorted order.
    pub query: Option<BTreeMap<String, String>>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request, ensuring it meets all preconditions.
    ///
    /// Validation happens before any network activity, so a failing request
    /// is guaranteed to have no server-side effect.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - the path is empty
    /// - the path still contains an unresolved `{placeholder}`
    /// - the method is `Post` or `Put` but no body is set
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.path.is_empty() {
            return Err(InvalidHttpRequestError::EmptyPath);
        }

        if self.path.contains('{') || self.path.contains('}') {
            return Err(InvalidHttpRequestError::UnresolvedPathParameter {
                path: self.path.clone(),
            });
        }

        if matches!(self.method, HttpMethod::Post | HttpMethod::Put) && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.method.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    query: Option<BTreeMap<String, String>>,
}

impl HttpRequestBuilder {
    /// Creates a new builder with the required method and path.
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            query: None,
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: BTreeMap<String, String>) -> Self {
        self.query = Some(query);
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            method: self.method,
            path: self.path,
            body: self.body,
            query: self.query,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "droplets")
            .build()
            .unwrap();

        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "droplets");
        assert!(request.body.is_none());
        assert!(request.query.is_none());
    }

    #[test]
    fn test_builder_creates_valid_post_request() {
        let request = HttpRequest::builder(HttpMethod::Post, "droplets")
            .body(json!({"name": "example"}))
            .build()
            .unwrap();

        assert_eq!(request.method, HttpMethod::Post);
        assert!(request.body.is_some());
    }

    #[test]
    fn test_verify_requires_body_for_post() {
        let result = HttpRequest::builder(HttpMethod::Post, "droplets").build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "POST"
        ));
    }

    #[test]
    fn test_verify_requires_body_for_put() {
        let result = HttpRequest::builder(HttpMethod::Put, "images/123").build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "PUT"
        ));
    }

    #[test]
    fn test_verify_rejects_empty_path() {
        let result = HttpRequest::builder(HttpMethod::Get, "").build();

        assert!(matches!(result, Err(InvalidHttpRequestError::EmptyPath)));
    }

    #[test]
    fn test_verify_rejects_unresolved_path_parameter() {
        let result = HttpRequest::builder(HttpMethod::Get, "droplets/{id}").build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::UnresolvedPathParameter { path }) if path == "droplets/{id}"
        ));
    }

    #[test]
    fn test_query_parameters_are_sorted() {
        let request = HttpRequest::builder(HttpMethod::Get, "droplets")
            .query_param("per_page", "25")
            .query_param("page", "2")
            .build()
            .unwrap();

        let keys: Vec<&String> = request.query.as_ref().unwrap().keys().collect();
        assert_eq!(keys, vec!["page", "per_page"]);
    }

    #[test]
    fn test_query_ordering_is_deterministic() {
        let a = HttpRequest::builder(HttpMethod::Get, "droplets")
            .query_param("b", "2")
            .query_param("a", "1")
            .build()
            .unwrap();
        let b = HttpRequest::builder(HttpMethod::Get, "droplets")
            .query_param("a", "1")
            .query_param("b", "2")
            .build()
            .unwrap();

        assert_eq!(a.query, b.query);
    }
}
