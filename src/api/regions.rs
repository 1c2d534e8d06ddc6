//! Region operations.

use crate::api::DigitalOceanClient;
use crate::resources::Region;
use crate::rest::{ApiError, Page, PageWalker, RestResource};

impl DigitalOceanClient {
    /// Returns one page of the regions in the DigitalOcean cloud.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on failure.
    pub async fn regions(&self, page: Option<u32>) -> Result<Page<Region>, ApiError> {
        Region::page(&self.rest, &[], page).await
    }

    /// Returns a lazy walker over all regions, one page per request.
    #[must_use]
    pub fn regions_walker(&self) -> PageWalker<'_, Region> {
        PageWalker::new(
            &self.rest,
            Region::NAME,
            Region::PLURAL,
            "regions".to_string(),
        )
    }
}
