//! REST verb layer over the HTTP transport.
//!
//! This module provides the [`RestClient`] type, a thin convenience layer
//! over [`HttpClient`](crate::clients::HttpClient) exposing `get`, `post`,
//! `put`, and `delete` methods that assemble an
//! [`HttpRequest`](crate::clients::HttpRequest) and execute it.

use std::collections::BTreeMap;

use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};
use crate::config::DigitalOceanConfig;

/// REST client for the DigitalOcean API.
///
/// Provides convenient methods (`get`, `post`, `put`, `delete`) for making
/// requests with pre-built paths. Paths are relative to the configured base
/// URL and must have all path parameters already substituted.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client from the given configuration.
    #[must_use]
    pub fn new(config: &DigitalOceanConfig) -> Self {
        Self {
            http_client: HttpClient::new(config),
        }
    }

    /// Returns the base URL requests are issued against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.http_client.base_url()
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for request validation and transport failures.
    pub async fn get(
        &self,
        path: &str,
        query: Option<BTreeMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Get, path, None, query).await
    }

    /// Sends a POST request with a JSON body to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for request validation and transport failures.
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Post, path, Some(body), None)
            .await
    }

    /// Sends a PUT request with a JSON body to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for request validation and transport failures.
    pub async fn put(&self, path: &str, body: serde_json::Value) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Put, path, Some(body), None)
            .await
    }

    /// Sends a DELETE request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for request validation and transport failures.
    pub async fn delete(&self, path: &str) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Delete, path, None, None).await
    }

    /// Internal helper to build and send requests.
    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<BTreeMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        let mut builder = HttpRequest::builder(method, path);

        if let Some(body_value) = body {
            builder = builder.body(body_value);
        }

        if let Some(query_params) = query {
            builder = builder.query(query_params);
        }

        let request = builder.build()?;

        self.http_client.request(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthToken;

    fn create_test_config() -> DigitalOceanConfig {
        DigitalOceanConfig::builder()
            .token(AuthToken::new("test-token").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_rest_client_uses_configured_base_url() {
        let client = RestClient::new(&create_test_config());
        assert_eq!(client.base_url(), "https://api.digitalocean.com/v2");
    }

    #[test]
    fn test_rest_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RestClient>();
    }

    #[tokio::test]
    async fn test_post_without_body_is_rejected_before_sending() {
        let client = RestClient::new(&create_test_config());

        // Bypass the verb helpers to exercise validation directly.
        let result = client.make_request(HttpMethod::Post, "droplets", None, None).await;

        assert!(matches!(result, Err(HttpError::InvalidRequest(_))));
    }
}
