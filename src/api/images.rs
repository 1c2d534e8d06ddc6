//! Image operations.

use crate::api::DigitalOceanClient;
use crate::resources::{Action, Image, ImageAction, ImageRef, ImageUpdate};
use crate::rest::{ApiError, Page, PageWalker, RestResource};

impl DigitalOceanClient {
    /// Returns one page of the images available to the account: public
    /// distribution images plus the account's snapshots and backups.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on failure.
    pub async fn images(&self, page: Option<u32>) -> Result<Page<Image>, ApiError> {
        Image::page(&self.rest, &[], page).await
    }

    /// Returns a lazy walker over all images, one page per request.
    #[must_use]
    pub fn images_walker(&self) -> PageWalker<'_, Image> {
        PageWalker::new(
            &self.rest,
            Image::NAME,
            Image::PLURAL,
            "images".to_string(),
        )
    }

    /// Fetches an image by numeric id or, for public images, by slug.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when no image matches the reference,
    /// and [`ApiError::Rejected`] for an empty slug (client-side).
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let by_id = client.image(6_918_990).await?;
    /// let by_slug = client.image("ubuntu-14-04-x64").await?;
    /// ```
    pub async fn image(&self, reference: impl Into<ImageRef> + Send) -> Result<Image, ApiError> {
        let reference = reference.into();
        Image::find(&self.rest, &[("id", reference.to_string())]).await
    }

    /// Renames an image.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when `name` is empty (client-side).
    pub async fn update_image(&self, id: u64, name: &str) -> Result<Image, ApiError> {
        if name.trim().is_empty() {
            return Err(ApiError::precondition("new image name must not be empty"));
        }
        Image::update(
            &self.rest,
            &[("id", id.to_string())],
            &ImageUpdate {
                name: name.to_string(),
            },
        )
        .await
    }

    /// Deletes an image. There is no way to restore a deleted image.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when no image has the given id.
    pub async fn delete_image(&self, id: u64) -> Result<bool, ApiError> {
        Image::delete(&self.rest, &[("id", id.to_string())]).await
    }

    /// Transfers an image to another region.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when `region` is empty (client-side).
    pub async fn transfer_image(&self, id: u64, region: &str) -> Result<Action, ApiError> {
        if region.trim().is_empty() {
            return Err(ApiError::precondition("target region must not be empty"));
        }
        Action::create(
            &self.rest,
            &[("image_id", id.to_string())],
            &ImageAction::Transfer {
                region: region.to_string(),
            },
        )
        .await
    }
}
