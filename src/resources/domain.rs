//! Domain resource implementation.
//!
//! Domains are identified by their unique name rather than a numeric id;
//! the name is the path parameter for lookups and deletion. Creating a
//! domain also provisions an A record pointing at the given IP address.

use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::ApiError;
use crate::rest::{ResourceOperation, ResourcePath, RestResource};

/// A domain managed by the DNS control panel.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Domain {
    /// The domain name (e.g., "example.com"). Unique per account.
    pub name: Option<String>,

    /// The TTL of the zone, in seconds.
    pub ttl: Option<u32>,

    /// The complete zone file contents.
    pub zone_file: Option<String>,
}

impl RestResource for Domain {
    const NAME: &'static str = "Domain";
    const KEY: &'static str = "domain";
    const PLURAL: &'static str = "domains";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["name"],
            "domains/{name}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "domains"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "domains"),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["name"],
            "domains/{name}",
        ),
    ];
}

/// Payload for creating a new domain.
///
/// Creates the domain together with an A record for `ip_address`.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct DomainCreate {
    /// The domain name to add (e.g., "example.com").
    pub name: String,

    /// The IP address the initial A record points at.
    pub ip_address: String,
}

impl DomainCreate {
    /// Validates the structural preconditions of the payload.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] (with no HTTP status) when a required
    /// field is empty; no network activity occurs in that case.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::precondition("domain name must not be empty"));
        }
        if self.ip_address.trim().is_empty() {
            return Err(ApiError::precondition(
                "domain ip_address must not be empty",
            ));
        }
        Ok(())
    }
}
