//! Configuration types for the DigitalOcean API client.
//!
//! This module provides the core configuration types used to initialize
//! and configure the client for API communication with DigitalOcean.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`DigitalOceanConfig`]: The main configuration struct holding all client settings
//! - [`DigitalOceanConfigBuilder`]: A builder for constructing [`DigitalOceanConfig`] instances
//! - [`AuthToken`]: A validated API token newtype with masked debug output
//! - [`ApiBaseUrl`]: A validated API base URL
//!
//! # Example
//!
//! ```rust
//! use digitalocean_api::{DigitalOceanConfig, AuthToken};
//! use std::time::Duration;
//!
//! let config = DigitalOceanConfig::builder()
//!     .token(AuthToken::new("dop_v1_example").unwrap())
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiBaseUrl, AuthToken};

use std::time::Duration;

use crate::error::ConfigError;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the DigitalOcean API client.
///
/// This struct holds everything a client instance needs for API
/// communication: the bearer token, the API base URL, the request timeout,
/// and an optional user agent prefix. The configuration is read-only after
/// construction; a client built from it can be shared freely across
/// concurrent tasks.
///
/// # Example
///
/// ```rust
/// use digitalocean_api::{DigitalOceanConfig, AuthToken};
///
/// let config = DigitalOceanConfig::builder()
///     .token(AuthToken::new("dop_v1_example").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.base_url().as_ref(), "https://api.digitalocean.com/v2");
/// ```
#[derive(Clone, Debug)]
pub struct DigitalOceanConfig {
    token: AuthToken,
    base_url: ApiBaseUrl,
    timeout: Duration,
    user_agent_prefix: Option<String>,
}

impl DigitalOceanConfig {
    /// Creates a new builder for constructing a `DigitalOceanConfig`.
    #[must_use]
    pub fn builder() -> DigitalOceanConfigBuilder {
        DigitalOceanConfigBuilder::new()
    }

    /// Returns the API token.
    #[must_use]
    pub const fn token(&self) -> &AuthToken {
        &self.token
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &ApiBaseUrl {
        &self.base_url
    }

    /// Returns the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify DigitalOceanConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DigitalOceanConfig>();
};

/// Builder for constructing [`DigitalOceanConfig`] instances.
///
/// The only required field is `token`. All other fields have sensible
/// defaults.
///
/// # Defaults
///
/// - `base_url`: the public DigitalOcean v2 endpoint
/// - `timeout`: 30 seconds
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use digitalocean_api::{ApiBaseUrl, AuthToken, DigitalOceanConfig};
/// use std::time::Duration;
///
/// let config = DigitalOceanConfig::builder()
///     .token(AuthToken::new("dop_v1_example").unwrap())
///     .base_url(ApiBaseUrl::new("https://api.example.test/v2").unwrap())
///     .timeout(Duration::from_secs(5))
///     .user_agent_prefix("my-app/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct DigitalOceanConfigBuilder {
    token: Option<AuthToken>,
    base_url: Option<ApiBaseUrl>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl DigitalOceanConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API token (required).
    #[must_use]
    pub fn token(mut self, token: AuthToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn base_url(mut self, base_url: ApiBaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`DigitalOceanConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `token` is not set.
    pub fn build(self) -> Result<DigitalOceanConfig, ConfigError> {
        let token = self
            .token
            .ok_or(ConfigError::MissingRequiredField { field: "token" })?;

        Ok(DigitalOceanConfig {
            token,
            base_url: self.base_url.unwrap_or_default(),
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
