//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated DigitalOcean API token.
///
/// This newtype ensures the token is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the token value, displaying only
/// `AuthToken(*****)` instead of the actual credential.
///
/// # Example
///
/// ```rust
/// use digitalocean_api::AuthToken;
///
/// let token = AuthToken::new("dop_v1_example").unwrap();
/// assert_eq!(token.as_ref(), "dop_v1_example");
/// assert_eq!(format!("{:?}", token), "AuthToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Creates a new validated API token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAuthToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyAuthToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AuthToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(*****)")
    }
}

/// A validated API base URL.
///
/// This newtype validates that the base URL carries an `http://` or
/// `https://` scheme and normalizes away any trailing slash, so request
/// paths can be appended uniformly.
///
/// The default value points at the public DigitalOcean v2 endpoint.
/// Overriding it is primarily useful for routing requests to a test server.
///
/// # Example
///
/// ```rust
/// use digitalocean_api::ApiBaseUrl;
///
/// let base = ApiBaseUrl::new("https://api.digitalocean.com/v2/").unwrap();
/// assert_eq!(base.as_ref(), "https://api.digitalocean.com/v2");
///
/// let default = ApiBaseUrl::default();
/// assert_eq!(default.as_ref(), "https://api.digitalocean.com/v2");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiBaseUrl(String);

impl ApiBaseUrl {
    /// The public DigitalOcean v2 API endpoint.
    pub const DEFAULT: &'static str = "https://api.digitalocean.com/v2";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL is empty or does
    /// not start with `http://` or `https://`.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim();

        if trimmed.is_empty()
            || !(trimmed.starts_with("https://") || trimmed.starts_with("http://"))
        {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        Ok(Self(trimmed.trim_end_matches('/').to_string()))
    }
}

impl AsRef<str> for ApiBaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Default for ApiBaseUrl {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

// Verify newtypes are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthToken>();
    assert_send_sync::<ApiBaseUrl>();
};
