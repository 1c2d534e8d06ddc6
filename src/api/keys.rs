//! SSH key operations.

use crate::api::DigitalOceanClient;
use crate::resources::{KeyRef, SshKey, SshKeyCreate, SshKeyUpdate};
use crate::rest::{ApiError, Page, PageWalker, RestResource};

impl DigitalOceanClient {
    /// Returns one page of the public SSH keys in the account.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on failure.
    pub async fn ssh_keys(&self, page: Option<u32>) -> Result<Page<SshKey>, ApiError> {
        SshKey::page(&self.rest, &[], page).await
    }

    /// Returns a lazy walker over all SSH keys, one page per request.
    #[must_use]
    pub fn ssh_keys_walker(&self) -> PageWalker<'_, SshKey> {
        PageWalker::new(
            &self.rest,
            SshKey::NAME,
            SshKey::PLURAL,
            "account/keys".to_string(),
        )
    }

    /// Fetches an SSH key by numeric id or fingerprint.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when no key matches the reference.
    pub async fn ssh_key(&self, reference: impl Into<KeyRef> + Send) -> Result<SshKey, ApiError> {
        let reference = reference.into();
        SshKey::find(&self.rest, &[("id", reference.to_string())]).await
    }

    /// Adds a new public SSH key to the account.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] for a payload failing validation
    /// (client-side) or refused by the provider.
    pub async fn create_ssh_key(&self, request: &SshKeyCreate) -> Result<SshKey, ApiError> {
        request.validate()?;
        SshKey::create(&self.rest, &[], request).await
    }

    /// Renames an SSH key.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when `name` is empty (client-side).
    pub async fn update_ssh_key(
        &self,
        reference: impl Into<KeyRef> + Send,
        name: &str,
    ) -> Result<SshKey, ApiError> {
        if name.trim().is_empty() {
            return Err(ApiError::precondition("new key name must not be empty"));
        }
        let reference = reference.into();
        SshKey::update(
            &self.rest,
            &[("id", reference.to_string())],
            &SshKeyUpdate {
                name: name.to_string(),
            },
        )
        .await
    }

    /// Deletes an SSH key from the account.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when no key matches the reference.
    pub async fn delete_ssh_key(
        &self,
        reference: impl Into<KeyRef> + Send,
    ) -> Result<bool, ApiError> {
        let reference = reference.into();
        SshKey::delete(&self.rest, &[("id", reference.to_string())]).await
    }
}
