//! The DigitalOcean API facade.
//!
//! [`DigitalOceanClient`] exposes one async method per provider operation.
//! Each method is a direct composition of the lifecycle engine: resolve the
//! resource path, execute the transport call, interpret the response (and
//! page it for collections). There is no business logic here beyond
//! selecting the right path template, HTTP method, and result type.
//!
//! # Example
//!
//! ```rust,ignore
//! use digitalocean_api::{DigitalOceanClient, DropletCreate, ImageRef};
//!
//! let client = DigitalOceanClient::new("dop_v1_example")?;
//!
//! // List the first page of droplets
//! let page = client.droplets(None).await?;
//!
//! // Create a droplet and fetch it back
//! let created = client
//!     .create_droplet(&DropletCreate {
//!         name: "test".to_string(),
//!         region: "nyc1".to_string(),
//!         size: "512mb".to_string(),
//!         image: ImageRef::Id(3_445_812),
//!         ..Default::default()
//!     })
//!     .await?;
//! let fetched = client.droplet(created.id.unwrap()).await?;
//! ```

mod actions;
mod domains;
mod droplets;
mod images;
mod keys;
mod regions;
mod sizes;

use crate::clients::RestClient;
use crate::config::{AuthToken, DigitalOceanConfig};
use crate::error::ConfigError;

/// The DigitalOcean API client.
///
/// Holds the immutable client configuration and the transport it drives.
/// All methods take `&self`; the client is `Send + Sync` and can be shared
/// across concurrent tasks. Calls are independent of each other: no result
/// or error state is cached between invocations, and no ordering is imposed
/// between concurrent calls.
#[derive(Debug)]
pub struct DigitalOceanClient {
    pub(crate) rest: RestClient,
    config: DigitalOceanConfig,
}

// Verify DigitalOceanClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DigitalOceanClient>();
};

impl DigitalOceanClient {
    /// Creates a client for the public API with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAuthToken`] if the token is empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use digitalocean_api::DigitalOceanClient;
    ///
    /// let client = DigitalOceanClient::new("dop_v1_example").unwrap();
    /// ```
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let config = DigitalOceanConfig::builder()
            .token(AuthToken::new(token)?)
            .build()?;

        Ok(Self::from_config(config))
    }

    /// Creates a client from an explicit configuration.
    #[must_use]
    pub fn from_config(config: DigitalOceanConfig) -> Self {
        Self {
            rest: RestClient::new(&config),
            config,
        }
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &DigitalOceanConfig {
        &self.config
    }
}
