//! Domain record resource implementation.
//!
//! DNS records are nested under their domain: every operation requires the
//! parent domain name in addition to the record id.

use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::ApiError;
use crate::rest::{ResourceOperation, ResourcePath, RestResource};

/// A DNS record of a domain.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DomainRecord {
    /// The unique identifier of the record.
    pub id: Option<u64>,

    /// The record type: "A", "AAAA", "CNAME", "MX", "TXT", "SRV", "NS".
    #[serde(rename = "type")]
    pub record_type: Option<String>,

    /// The host name, alias, or service being defined.
    pub name: Option<String>,

    /// The value of the record (e.g., an IP address for A records).
    pub data: Option<String>,

    /// The priority, for SRV and MX records.
    pub priority: Option<u32>,

    /// The port, for SRV records.
    pub port: Option<u32>,

    /// The weight, for SRV records.
    pub weight: Option<u32>,
}

impl RestResource for DomainRecord {
    const NAME: &'static str = "DomainRecord";
    const KEY: &'static str = "domain_record";
    const PLURAL: &'static str = "domain_records";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["domain_name", "id"],
            "domains/{domain_name}/records/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["domain_name"],
            "domains/{domain_name}/records",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &["domain_name"],
            "domains/{domain_name}/records",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["domain_name", "id"],
            "domains/{domain_name}/records/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["domain_name", "id"],
            "domains/{domain_name}/records/{id}",
        ),
    ];
}

/// Payload for creating or updating a DNS record.
///
/// The same writable fields apply to both operations; fields left unset
/// are omitted from the request body.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct DomainRecordCreate {
    /// The record type: "A", "AAAA", "CNAME", "MX", "TXT", "SRV", "NS".
    #[serde(rename = "type")]
    pub record_type: String,

    /// The host name, alias, or service being defined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The value of the record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    /// The priority, for SRV and MX records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,

    /// The port, for SRV records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u32>,

    /// The weight, for SRV records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}

impl DomainRecordCreate {
    /// Validates the structural preconditions of the payload.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] (with no HTTP status) when the record
    /// type is empty; no network activity occurs in that case.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.record_type.trim().is_empty() {
            return Err(ApiError::precondition("record type must not be empty"));
        }
        Ok(())
    }
}
