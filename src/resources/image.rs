//! Image resource implementation.
//!
//! Images are the base systems droplets are created from: public
//! distribution images (addressable by slug), and the snapshots and backups
//! of an account (addressable by numeric id). [`ImageRef`] carries either
//! identifier through a single lookup path.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{ResourceOperation, ResourcePath, RestResource};

/// An image: a distribution, snapshot, or backup a droplet boots from.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Image {
    /// The unique identifier of the image.
    pub id: Option<u64>,

    /// The display name of the image.
    pub name: Option<String>,

    /// The base distribution (e.g., "Ubuntu").
    pub distribution: Option<String>,

    /// The slug identifier, present only for public images.
    pub slug: Option<String>,

    /// Whether the image is public.
    pub public: Option<bool>,

    /// Region slugs the image is available in.
    pub regions: Option<Vec<String>>,

    /// When the image was created.
    pub created_at: Option<DateTime<Utc>>,

    /// Minimum disk size in gigabytes required to use the image.
    pub min_disk_size: Option<u64>,

    /// The image kind: "snapshot", "backup", or "base".
    #[serde(rename = "type")]
    pub image_type: Option<String>,
}

impl RestResource for Image {
    const NAME: &'static str = "Image";
    const KEY: &'static str = "image";
    const PLURAL: &'static str = "images";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "images/{id}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "images"),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["id"],
            "images/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "images/{id}",
        ),
    ];
}

/// An image identifier: a numeric id or, for public images, a textual slug.
///
/// Both route through the same `images/{id}` path template; the variant
/// only decides how the segment renders and how the value serializes in
/// request bodies (number vs. string).
///
/// # Example
///
/// ```rust
/// use digitalocean_api::ImageRef;
///
/// assert_eq!(ImageRef::Id(6_918_990).to_string(), "6918990");
/// assert_eq!(ImageRef::from("ubuntu-14-04-x64").to_string(), "ubuntu-14-04-x64");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ImageRef {
    /// A numeric image id.
    Id(u64),
    /// A public image slug.
    Slug(String),
}

impl ImageRef {
    /// Returns `true` when the reference carries no usable identifier
    /// (the zero id or an empty slug).
    #[must_use]
    pub fn is_unset(&self) -> bool {
        match self {
            Self::Id(id) => *id == 0,
            Self::Slug(slug) => slug.trim().is_empty(),
        }
    }
}

impl Default for ImageRef {
    fn default() -> Self {
        Self::Id(0)
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Slug(slug) => f.write_str(slug),
        }
    }
}

impl From<u64> for ImageRef {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for ImageRef {
    fn from(slug: &str) -> Self {
        Self::Slug(slug.to_string())
    }
}

impl From<String> for ImageRef {
    fn from(slug: String) -> Self {
        Self::Slug(slug)
    }
}

/// Payload for renaming an image.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ImageUpdate {
    /// The new image name.
    pub name: String,
}

/// An image action request, POSTed to `/images/{id}/actions`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ImageAction {
    /// Transfer the image to another region.
    Transfer {
        /// The target region slug.
        region: String,
    },
}
