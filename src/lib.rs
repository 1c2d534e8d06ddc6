//! # DigitalOcean API Rust client
//!
//! A typed Rust client library for the DigitalOcean REST API, covering
//! droplets, images, regions, sizes, domains and DNS records, SSH keys,
//! and asynchronous action tracking.
//!
//! ## Overview
//!
//! This library provides:
//! - Type-safe configuration via [`DigitalOceanConfig`] with validated
//!   newtypes for the API token and base URL
//! - An async HTTP transport with bearer authentication, a configurable
//!   timeout, and rate-limit header parsing
//! - A three-kind error taxonomy ([`ApiError`]) distinguishing "does not
//!   exist" from "request refused" from "outcome unknown", so callers can
//!   reason about retry safety
//! - Page-at-a-time pagination ([`Page`]) plus a lazy, restartable
//!   [`PageWalker`] for draining whole collections one request at a time
//! - A facade ([`DigitalOceanClient`]) with one async method per provider
//!   operation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use digitalocean_api::{DigitalOceanClient, DropletCreate, ImageRef};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = DigitalOceanClient::new("dop_v1_example")?;
//!
//! // Fetch the first page of droplets
//! let droplets = client.droplets(None).await?;
//! for droplet in droplets.iter() {
//!     println!("{:?} ({:?})", droplet.name, droplet.status);
//! }
//!
//! // Create a new droplet
//! let droplet = client
//!     .create_droplet(&DropletCreate {
//!         name: "api-client-test-host".to_string(),
//!         region: "nyc1".to_string(),
//!         size: "512mb".to_string(),
//!         image: ImageRef::Id(3_445_812),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! // Track the droplet's pending actions
//! let actions = client.droplet_actions(droplet.id.unwrap(), None).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every facade method returns `Result<_, ApiError>` with exactly three
//! failure kinds:
//!
//! ```rust,no_run
//! use digitalocean_api::{ApiError, DigitalOceanClient};
//!
//! # async fn example(client: &DigitalOceanClient) {
//! match client.droplet(42).await {
//!     Ok(droplet) => println!("{:?}", droplet.name),
//!     Err(ApiError::NotFound { .. }) => {
//!         // Definitely does not exist; safe to treat as final.
//!     }
//!     Err(ApiError::Rejected { message, .. }) => {
//!         // The request was refused; retrying without changing the
//!         // input will fail again.
//!         eprintln!("refused: {message}");
//!     }
//!     Err(ApiError::Indeterminate { message, .. }) => {
//!         // Timeout, server error, or undecodable response. The effect
//!         // on server state is unknown; retry only idempotent calls.
//!         eprintln!("outcome unknown: {message}");
//!     }
//! }
//! # }
//! ```
//!
//! ## Pagination
//!
//! ```rust,no_run
//! # async fn example(client: &digitalocean_api::DigitalOceanClient)
//! #     -> Result<(), digitalocean_api::ApiError> {
//! // Single page access
//! let page = client.droplets(Some(2)).await?;
//! println!("page {} of {:?}", page.page(), page.last_page());
//!
//! // Lazy walk, one request per page
//! let mut walker = client.droplets_walker();
//! while let Some(page) = walker.next_page().await? {
//!     for droplet in page.iter() {
//!         println!("{:?}", droplet.name);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Preconditions are checked before any network call
//! - **Thread-safe**: The client is `Send + Sync`; calls are independent
//! - **No implicit retries**: Retry policy belongs to the caller, who knows
//!   whether the wrapped operation is idempotent

pub mod api;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;
pub mod rest;

// Re-export the facade and configuration types at the crate root
pub use api::DigitalOceanClient;
pub use config::{ApiBaseUrl, AuthToken, DigitalOceanConfig, DigitalOceanConfigBuilder};
pub use error::ConfigError;

// Re-export the lifecycle types callers interact with
pub use rest::{ApiError, Page, PageWalker, RequestContext, RestResource};

// Re-export resource models
pub use resources::{
    Action, Domain, DomainCreate, DomainRecord, DomainRecordCreate, Droplet, DropletAction,
    DropletCreate, Image, ImageAction, ImageRef, ImageUpdate, Kernel, KeyRef, Networks, NetworkV4,
    NetworkV6, Region, Size, SshKey, SshKeyCreate, SshKeyUpdate,
};

// Re-export HTTP client types
pub use clients::{HttpMethod, RateLimit};
