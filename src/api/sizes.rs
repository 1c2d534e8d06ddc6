//! Size operations.

use crate::api::DigitalOceanClient;
use crate::resources::Size;
use crate::rest::{ApiError, Page, PageWalker, RestResource};

impl DigitalOceanClient {
    /// Returns one page of the sizes droplets can be created at.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on failure.
    pub async fn sizes(&self, page: Option<u32>) -> Result<Page<Size>, ApiError> {
        Size::page(&self.rest, &[], page).await
    }

    /// Returns a lazy walker over all sizes, one page per request.
    #[must_use]
    pub fn sizes_walker(&self) -> PageWalker<'_, Size> {
        PageWalker::new(&self.rest, Size::NAME, Size::PLURAL, "sizes".to_string())
    }
}
