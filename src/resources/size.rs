//! Size resource implementation.

use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{ResourceOperation, ResourcePath, RestResource};

/// A size: a droplet plan (memory, CPU, disk, and pricing).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Size {
    /// The slug identifier of the size (e.g., "512mb").
    pub slug: Option<String>,

    /// Memory in megabytes.
    pub memory: Option<u64>,

    /// Number of virtual CPUs.
    pub vcpus: Option<u32>,

    /// Disk size in gigabytes.
    pub disk: Option<u64>,

    /// Transfer allowance in terabytes.
    pub transfer: Option<f64>,

    /// Monthly price in US dollars.
    pub price_monthly: Option<f64>,

    /// Hourly price in US dollars.
    pub price_hourly: Option<f64>,

    /// Region slugs this size is available in.
    pub regions: Option<Vec<String>>,

    /// Whether new droplets can be created at this size.
    pub available: Option<bool>,
}

impl RestResource for Size {
    const NAME: &'static str = "Size";
    const KEY: &'static str = "size";
    const PLURAL: &'static str = "sizes";
    const PATHS: &'static [ResourcePath] = &[ResourcePath::new(
        HttpMethod::Get,
        ResourceOperation::All,
        &[],
        "sizes",
    )];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::{get_path, ResourceOperation};

    #[test]
    fn test_size_deserialization() {
        let json = r#"{
            "slug": "512mb",
            "memory": 512,
            "vcpus": 1,
            "disk": 20,
            "transfer": 1.0,
            "price_monthly": 5.0,
            "price_hourly": 0.00744,
            "regions": ["nyc1", "sfo1"],
            "available": true
        }"#;

        let size: Size = serde_json::from_str(json).unwrap();

        assert_eq!(size.slug, Some("512mb".to_string()));
        assert_eq!(size.memory, Some(512));
        assert_eq!(size.vcpus, Some(1));
        assert!((size.price_monthly.unwrap() - 5.0).abs() < f64::EPSILON);
        assert_eq!(size.regions.unwrap().len(), 2);
    }

    #[test]
    fn test_size_is_list_only() {
        assert!(get_path(Size::PATHS, ResourceOperation::All, &[]).is_some());
        assert!(get_path(Size::PATHS, ResourceOperation::Find, &["id"]).is_none());
    }
}
