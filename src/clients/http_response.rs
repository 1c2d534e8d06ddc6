//! HTTP response types for the DigitalOcean API client.
//!
//! This module provides the [`HttpResponse`] type holding the raw result of
//! a transport call (status code, headers, body text), plus parsed
//! rate-limit information from the DigitalOcean rate-limit headers.
//! Decoding the body into resource types is the interpreter layer's job.

use std::collections::HashMap;

/// Rate limit information parsed from the `RateLimit-*` response headers.
///
/// DigitalOcean reports the request budget on every response:
/// `RateLimit-Limit` (requests per hour), `RateLimit-Remaining` (requests
/// left in the window), and `RateLimit-Reset` (Unix timestamp when the
/// window resets).
///
/// # Example
///
/// ```rust
/// use digitalocean_api::clients::RateLimit;
/// use std::collections::HashMap;
///
/// let mut headers = HashMap::new();
/// headers.insert("ratelimit-limit".to_string(), vec!["5000".to_string()]);
/// headers.insert("ratelimit-remaining".to_string(), vec!["4999".to_string()]);
/// headers.insert("ratelimit-reset".to_string(), vec!["1415984218".to_string()]);
///
/// let limit = RateLimit::from_headers(&headers).unwrap();
/// assert_eq!(limit.limit, 5000);
/// assert_eq!(limit.remaining, 4999);
/// assert_eq!(limit.reset, 1_415_984_218);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimit {
    /// The maximum number of requests allowed per window.
    pub limit: u32,
    /// The number of requests remaining in the current window.
    pub remaining: u32,
    /// Unix timestamp at which the current window resets.
    pub reset: i64,
}

impl RateLimit {
    /// Parses rate limit information from response headers.
    ///
    /// Returns `None` unless all three headers are present and numeric.
    #[must_use]
    pub fn from_headers(headers: &HashMap<String, Vec<String>>) -> Option<Self> {
        let first = |name: &str| headers.get(name).and_then(|values| values.first());

        let limit = first("ratelimit-limit")?.parse().ok()?;
        let remaining = first("ratelimit-remaining")?.parse().ok()?;
        let reset = first("ratelimit-reset")?.parse().ok()?;

        Some(Self {
            limit,
            remaining,
            reset,
        })
    }
}

/// A raw HTTP response from the DigitalOcean API.
///
/// Contains the status code, response headers (lowercased names, possibly
/// multi-valued), and the body as text. The body is kept undecoded so the
/// interpreter can distinguish decoding failures from HTTP failures.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (header names lowercased; headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body text. Empty for 204 responses.
    pub body: String,
    /// Rate limit information, when the rate-limit headers are present.
    pub rate_limit: Option<RateLimit>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing rate-limit headers.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        let rate_limit = RateLimit::from_headers(&headers);

        Self {
            code,
            headers,
            body,
            rate_limit,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns `true` if the response carried no body.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Attempts to parse the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error when the body is empty or
    /// not valid JSON.
    pub fn parse_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}
