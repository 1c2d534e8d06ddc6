//! SSH key resource implementation.
//!
//! Account SSH keys live under `/account/keys` and are addressable by
//! numeric id or by fingerprint; [`KeyRef`] carries either identifier
//! through the same path template.

use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::ApiError;
use crate::rest::{ResourceOperation, ResourcePath, RestResource};

/// A public SSH key stored in the account.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SshKey {
    /// The unique identifier of the key.
    pub id: Option<u64>,

    /// The fingerprint of the public key.
    pub fingerprint: Option<String>,

    /// The full public key material.
    pub public_key: Option<String>,

    /// The display name of the key.
    pub name: Option<String>,
}

impl RestResource for SshKey {
    const NAME: &'static str = "SshKey";
    const KEY: &'static str = "ssh_key";
    const PLURAL: &'static str = "ssh_keys";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "account/keys/{id}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "account/keys"),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "account/keys",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["id"],
            "account/keys/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "account/keys/{id}",
        ),
    ];
}

/// An SSH key identifier: a numeric id or a key fingerprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyRef {
    /// A numeric key id.
    Id(u64),
    /// A key fingerprint.
    Fingerprint(String),
}

impl std::fmt::Display for KeyRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Fingerprint(fingerprint) => f.write_str(fingerprint),
        }
    }
}

impl From<u64> for KeyRef {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for KeyRef {
    fn from(fingerprint: &str) -> Self {
        Self::Fingerprint(fingerprint.to_string())
    }
}

impl From<String> for KeyRef {
    fn from(fingerprint: String) -> Self {
        Self::Fingerprint(fingerprint)
    }
}

/// Payload for adding a new SSH key to the account.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct SshKeyCreate {
    /// The display name for the key.
    pub name: String,

    /// The full public key material.
    pub public_key: String,
}

impl SshKeyCreate {
    /// Validates the structural preconditions of the payload.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] (with no HTTP status) when a required
    /// field is empty; no network activity occurs in that case.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::precondition("SSH key name must not be empty"));
        }
        if self.public_key.trim().is_empty() {
            return Err(ApiError::precondition(
                "SSH public key must not be empty",
            ));
        }
        Ok(())
    }
}

/// Payload for renaming an SSH key.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SshKeyUpdate {
    /// The new display name.
    pub name: String,
}
