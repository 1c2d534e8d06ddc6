//! Region resource implementation.

use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{ResourceOperation, ResourcePath, RestResource};

/// A region: a data center droplets can be deployed to.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Region {
    /// The slug identifier of the region (e.g., "nyc1").
    pub slug: Option<String>,

    /// The display name of the region (e.g., "New York 1").
    pub name: Option<String>,

    /// Size slugs available in this region.
    pub sizes: Option<Vec<String>>,

    /// Whether new droplets can be created in this region.
    pub available: Option<bool>,

    /// Features available in this region (e.g., "backups", "ipv6").
    pub features: Option<Vec<String>>,
}

impl RestResource for Region {
    const NAME: &'static str = "Region";
    const KEY: &'static str = "region";
    const PLURAL: &'static str = "regions";
    const PATHS: &'static [ResourcePath] = &[ResourcePath::new(
        HttpMethod::Get,
        ResourceOperation::All,
        &[],
        "regions",
    )];
}
