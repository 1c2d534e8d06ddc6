//! HTTP client for DigitalOcean API communication.
//!
//! This module provides the [`HttpClient`] type, the transport layer that
//! attaches authentication and standard headers, enforces the configured
//! timeout, and executes exactly one network call per invocation. Responses
//! are returned raw for any HTTP status; mapping statuses into the error
//! taxonomy happens in the interpreter layer.

use std::collections::HashMap;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::DigitalOceanConfig;

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making authenticated requests to the DigitalOcean API.
///
/// The client handles:
/// - Base URL construction from the configured [`ApiBaseUrl`](crate::ApiBaseUrl)
/// - Default headers including User-Agent and the bearer token
/// - The configured request timeout
/// - Response header parsing (rate limits)
///
/// The client performs no retries: each invocation issues exactly one
/// network call, and retry policy is left to the caller, who knows whether
/// the wrapped operation is idempotent.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and its configuration is immutable after
/// construction, making it safe to share across async tasks. The underlying
/// connection pool is reused across calls.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL without a trailing slash (e.g., `https://api.digitalocean.com/v2`).
    base_url: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use digitalocean_api::{AuthToken, DigitalOceanConfig};
    /// use digitalocean_api::clients::HttpClient;
    ///
    /// let config = DigitalOceanConfig::builder()
    ///     .token(AuthToken::new("dop_v1_example").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = HttpClient::new(&config);
    /// assert_eq!(client.base_url(), "https://api.digitalocean.com/v2");
    /// ```
    #[must_use]
    pub fn new(config: &DigitalOceanConfig) -> Self {
        let base_url = config.base_url().as_ref().to_string();

        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}DigitalOcean API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        // Build default headers
        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", config.token().as_ref()),
        );

        // Create reqwest client
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            default_headers,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the DigitalOcean API.
    ///
    /// The request is validated first; a request that fails validation is
    /// never sent. A received response is returned whatever its status code.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The configured timeout elapses (`Timeout`)
    /// - A network error occurs (`Network`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        // Validate request first
        request.verify()?;

        // Build full URL
        let url = format!("{}/{}", self.base_url, request.path);

        // Build the reqwest request
        let mut req_builder = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        // Add headers
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key.as_str(), value.as_str());
        }

        // Add query params (BTreeMap serializes in sorted key order)
        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        // Add body
        if let Some(body) = &request.body {
            req_builder = req_builder
                .header("Content-Type", "application/json")
                .body(body.to_string());
        }

        tracing::debug!("sending {} {}", request.method, url);

        // Send request (exactly once; no retries)
        let res = req_builder.send().await?;

        // Collect the raw response
        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await.unwrap_or_default();

        if code >= 500 {
            tracing::warn!("{} {} returned server error {}", request.method, url, code);
        }

        Ok(HttpResponse::new(code, headers, body))
    }

    /// Parses response headers into a `HashMap` with lowercased names.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
