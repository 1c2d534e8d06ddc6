//! Droplet resource implementation.
//!
//! This module provides the [`Droplet`] resource (a virtual machine in the
//! DigitalOcean cloud) together with the [`DropletCreate`] payload, the
//! embedded network/kernel models, and the [`DropletAction`] request type
//! for lifecycle operations (reboot, resize, snapshot, ...).
//!
//! # Example
//!
//! ```rust,ignore
//! use digitalocean_api::{DigitalOceanClient, DropletCreate, ImageRef};
//!
//! let client = DigitalOceanClient::new("dop_v1_example")?;
//!
//! let request = DropletCreate {
//!     name: "api-client-test-host".to_string(),
//!     region: "nyc1".to_string(),
//!     size: "512mb".to_string(),
//!     image: ImageRef::Id(3_445_812),
//!     ..Default::default()
//! };
//! let droplet = client.create_droplet(&request).await?;
//! println!("created droplet {:?}", droplet.id);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::resources::{Image, ImageRef, Region};
use crate::rest::ApiError;
use crate::rest::{ResourceOperation, ResourcePath, RestResource};

/// A droplet: a virtual machine instance in the DigitalOcean cloud.
///
/// Droplets are immutable snapshots returned by the server. All fields are
/// optional so that responses remain decodable as the provider adds or
/// omits attributes.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Droplet {
    /// The unique identifier of the droplet. Assigned by the server.
    pub id: Option<u64>,

    /// The human-readable name of the droplet.
    pub name: Option<String>,

    /// Memory in megabytes.
    pub memory: Option<u64>,

    /// Number of virtual CPUs.
    pub vcpus: Option<u32>,

    /// Disk size in gigabytes.
    pub disk: Option<u64>,

    /// Whether the droplet is locked, preventing actions.
    pub locked: Option<bool>,

    /// Current status: "new", "active", "off", or "archive".
    pub status: Option<String>,

    /// When the droplet was created.
    pub created_at: Option<DateTime<Utc>>,

    /// The region the droplet runs in.
    pub region: Option<Region>,

    /// The image the droplet was created from.
    pub image: Option<Image>,

    /// The slug of the droplet's size (e.g., "512mb").
    pub size_slug: Option<String>,

    /// Network interfaces attached to the droplet.
    pub networks: Option<Networks>,

    /// The kernel the droplet is running.
    pub kernel: Option<Kernel>,

    /// Identifiers of backups taken of this droplet.
    pub backup_ids: Option<Vec<u64>>,

    /// Identifiers of snapshots taken of this droplet.
    pub snapshot_ids: Option<Vec<u64>>,

    /// Enabled features (e.g., "backups", "ipv6", "private_networking").
    pub features: Option<Vec<String>>,
}

impl RestResource for Droplet {
    const NAME: &'static str = "Droplet";
    const KEY: &'static str = "droplet";
    const PLURAL: &'static str = "droplets";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "droplets/{id}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "droplets"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "droplets"),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "droplets/{id}",
        ),
    ];
}

/// Network interfaces of a droplet, grouped by IP version.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Networks {
    /// IPv4 interfaces.
    #[serde(default)]
    pub v4: Vec<NetworkV4>,
    /// IPv6 interfaces.
    #[serde(default)]
    pub v6: Vec<NetworkV6>,
}

/// An IPv4 network interface.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct NetworkV4 {
    /// The IP address.
    pub ip_address: Option<String>,
    /// The dotted-quad netmask.
    pub netmask: Option<String>,
    /// The gateway address.
    pub gateway: Option<String>,
    /// "public" or "private".
    #[serde(rename = "type")]
    pub network_type: Option<String>,
}

/// An IPv6 network interface.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct NetworkV6 {
    /// The IP address.
    pub ip_address: Option<String>,
    /// The prefix length.
    pub netmask: Option<u32>,
    /// The gateway address.
    pub gateway: Option<String>,
    /// "public" or "private".
    #[serde(rename = "type")]
    pub network_type: Option<String>,
}

/// A kernel available to (or running on) a droplet.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Kernel {
    /// The unique identifier of the kernel.
    pub id: Option<u64>,
    /// The display name of the kernel.
    pub name: Option<String>,
    /// The version string of the kernel.
    pub version: Option<String>,
}

impl RestResource for Kernel {
    const NAME: &'static str = "Kernel";
    const KEY: &'static str = "kernel";
    const PLURAL: &'static str = "kernels";
    const PATHS: &'static [ResourcePath] = &[ResourcePath::new(
        HttpMethod::Get,
        ResourceOperation::All,
        &["droplet_id"],
        "droplets/{droplet_id}/kernels",
    )];
}

/// Payload for creating a new droplet.
///
/// `name`, `region`, `size`, and `image` are required; the rest are
/// optional and omitted from the request body when unset.
///
/// # Example
///
/// ```rust
/// use digitalocean_api::{DropletCreate, ImageRef};
///
/// let request = DropletCreate {
///     name: "test".to_string(),
///     region: "nyc1".to_string(),
///     size: "512mb".to_string(),
///     image: ImageRef::Id(3_445_812),
///     ..Default::default()
/// };
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct DropletCreate {
    /// The droplet name, formatted by hostname rules.
    pub name: String,

    /// The slug of the region to create the droplet in (e.g., "nyc1").
    pub region: String,

    /// The slug of the size to create the droplet at (e.g., "512mb").
    pub size: String,

    /// The image to create the droplet from, by numeric id or slug.
    pub image: ImageRef,

    /// SSH key ids to embed into the droplet's root account.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub ssh_keys: Vec<u64>,

    /// Whether to enable automatic backups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backups: Option<bool>,

    /// Whether to enable IPv6 networking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6: Option<bool>,

    /// Whether to enable private networking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_networking: Option<bool>,

    /// Cloud-init user data to pass to the droplet on first boot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
}

impl DropletCreate {
    /// Validates the structural preconditions of the payload.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] (with no HTTP status) when a required
    /// field is empty; no network activity occurs in that case.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::precondition("droplet name must not be empty"));
        }
        if self.region.trim().is_empty() {
            return Err(ApiError::precondition("droplet region must not be empty"));
        }
        if self.size.trim().is_empty() {
            return Err(ApiError::precondition("droplet size must not be empty"));
        }
        if self.image.is_unset() {
            return Err(ApiError::precondition("droplet image must be set"));
        }
        Ok(())
    }
}

/// A droplet lifecycle action request.
///
/// Serializes to the `{"type": "...", ...}` body POSTed to
/// `/droplets/{id}/actions`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DropletAction {
    /// Reboot the droplet (preferred when the server is unresponsive).
    Reboot,
    /// Power the droplet off, then back on.
    PowerCycle,
    /// Gracefully shut the droplet down; it stays in the account.
    Shutdown,
    /// Hard power-off; the droplet stays in the account.
    PowerOff,
    /// Power on a powered-off droplet.
    PowerOn,
    /// Reset the root password. The droplet reboots.
    PasswordReset,
    /// Resize the droplet to a different size slug.
    Resize {
        /// The target size slug.
        size: String,
    },
    /// Take a snapshot of the droplet. May cause a reboot.
    Snapshot {
        /// Optional name for the snapshot.
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    /// Restore the droplet from an image or snapshot.
    Restore {
        /// The image id to restore from.
        image: u64,
    },
    /// Rebuild the droplet from a default image, retaining its IP address.
    Rebuild {
        /// The image id to rebuild from.
        image: u64,
    },
    /// Enable automatic daily backups.
    EnableBackups,
    /// Disable automatic backups.
    DisableBackups,
    /// Rename the droplet.
    Rename {
        /// The new name.
        name: String,
    },
}
