//! Droplet operations.

use crate::api::DigitalOceanClient;
use crate::resources::{Action, Droplet, DropletAction, DropletCreate, Image, Kernel};
use crate::rest::{fetch_page, ApiError, Page, PageWalker, RestResource};

impl DigitalOceanClient {
    /// Returns one page of the droplets in the account.
    ///
    /// `page` is 1-based; `None` requests the first page.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on failure; see the error taxonomy for the
    /// retry-safety contract of each kind.
    pub async fn droplets(&self, page: Option<u32>) -> Result<Page<Droplet>, ApiError> {
        Droplet::page(&self.rest, &[], page).await
    }

    /// Returns a lazy walker over all droplets, one page per request.
    #[must_use]
    pub fn droplets_walker(&self) -> PageWalker<'_, Droplet> {
        PageWalker::new(
            &self.rest,
            Droplet::NAME,
            Droplet::PLURAL,
            "droplets".to_string(),
        )
    }

    /// Fetches full information for a single droplet.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when no droplet has the given id.
    pub async fn droplet(&self, id: u64) -> Result<Droplet, ApiError> {
        Droplet::find(&self.rest, &[("id", id.to_string())]).await
    }

    /// Creates a new droplet.
    ///
    /// The payload is validated before anything is sent: `name`, `region`,
    /// `size`, and `image` are required.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] for a payload failing validation
    /// (client-side, no network activity) or refused by the provider.
    pub async fn create_droplet(&self, request: &DropletCreate) -> Result<Droplet, ApiError> {
        request.validate()?;
        Droplet::create(&self.rest, &[], request).await
    }

    /// Destroys a droplet. This is irreversible.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when no droplet has the given id.
    pub async fn delete_droplet(&self, id: u64) -> Result<bool, ApiError> {
        Droplet::delete(&self.rest, &[("id", id.to_string())]).await
    }

    /// Returns one page of the kernels available to a droplet.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on failure.
    pub async fn droplet_kernels(
        &self,
        id: u64,
        page: Option<u32>,
    ) -> Result<Page<Kernel>, ApiError> {
        Kernel::page(&self.rest, &[("droplet_id", id.to_string())], page).await
    }

    /// Returns one page of the snapshots taken of a droplet.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on failure.
    pub async fn droplet_snapshots(
        &self,
        id: u64,
        page: Option<u32>,
    ) -> Result<Page<Image>, ApiError> {
        let path = format!("droplets/{id}/snapshots");
        fetch_page(&self.rest, "Snapshot", "snapshots", &path, page).await
    }

    /// Returns one page of the backups taken of a droplet.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on failure.
    pub async fn droplet_backups(
        &self,
        id: u64,
        page: Option<u32>,
    ) -> Result<Page<Image>, ApiError> {
        let path = format!("droplets/{id}/backups");
        fetch_page(&self.rest, "Backup", "backups", &path, page).await
    }

    /// Returns one page of the actions performed on a droplet.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on failure.
    pub async fn droplet_actions(
        &self,
        id: u64,
        page: Option<u32>,
    ) -> Result<Page<Action>, ApiError> {
        Action::page(&self.rest, &[("droplet_id", id.to_string())], page).await
    }

    /// Reboots a droplet. Preferred when the server is unresponsive.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on failure.
    pub async fn reboot_droplet(&self, id: u64) -> Result<Action, ApiError> {
        self.perform_droplet_action(id, &DropletAction::Reboot).await
    }

    /// Powers a droplet off and back on.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on failure.
    pub async fn power_cycle_droplet(&self, id: u64) -> Result<Action, ApiError> {
        self.perform_droplet_action(id, &DropletAction::PowerCycle)
            .await
    }

    /// Gracefully shuts a droplet down. The droplet remains in the account.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on failure.
    pub async fn shutdown_droplet(&self, id: u64) -> Result<Action, ApiError> {
        self.perform_droplet_action(id, &DropletAction::Shutdown)
            .await
    }

    /// Hard powers-off a running droplet. The droplet remains in the account.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on failure.
    pub async fn power_off_droplet(&self, id: u64) -> Result<Action, ApiError> {
        self.perform_droplet_action(id, &DropletAction::PowerOff)
            .await
    }

    /// Powers on a powered-off droplet.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on failure.
    pub async fn power_on_droplet(&self, id: u64) -> Result<Action, ApiError> {
        self.perform_droplet_action(id, &DropletAction::PowerOn).await
    }

    /// Resets the root password. The droplet reboots to apply it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on failure.
    pub async fn reset_droplet_password(&self, id: u64) -> Result<Action, ApiError> {
        self.perform_droplet_action(id, &DropletAction::PasswordReset)
            .await
    }

    /// Resizes a droplet to a different size slug.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when `size` is empty (client-side).
    pub async fn resize_droplet(&self, id: u64, size: &str) -> Result<Action, ApiError> {
        if size.trim().is_empty() {
            return Err(ApiError::precondition("target size must not be empty"));
        }
        self.perform_droplet_action(
            id,
            &DropletAction::Resize {
                size: size.to_string(),
            },
        )
        .await
    }

    /// Takes a snapshot of a droplet. May cause a reboot.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on failure.
    pub async fn snapshot_droplet(&self, id: u64) -> Result<Action, ApiError> {
        self.perform_droplet_action(id, &DropletAction::Snapshot { name: None })
            .await
    }

    /// Takes a named snapshot of a droplet. May cause a reboot.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on failure.
    pub async fn snapshot_droplet_with_name(
        &self,
        id: u64,
        name: &str,
    ) -> Result<Action, ApiError> {
        self.perform_droplet_action(
            id,
            &DropletAction::Snapshot {
                name: Some(name.to_string()),
            },
        )
        .await
    }

    /// Restores a droplet from an image or snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on failure.
    pub async fn restore_droplet(&self, id: u64, image_id: u64) -> Result<Action, ApiError> {
        self.perform_droplet_action(id, &DropletAction::Restore { image: image_id })
            .await
    }

    /// Rebuilds a droplet from an image, retaining its IP address.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on failure.
    pub async fn rebuild_droplet(&self, id: u64, image_id: u64) -> Result<Action, ApiError> {
        self.perform_droplet_action(id, &DropletAction::Rebuild { image: image_id })
            .await
    }

    /// Enables automatic daily backups for a droplet.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on failure.
    pub async fn enable_droplet_backups(&self, id: u64) -> Result<Action, ApiError> {
        self.perform_droplet_action(id, &DropletAction::EnableBackups)
            .await
    }

    /// Disables automatic backups for a droplet.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on failure.
    pub async fn disable_droplet_backups(&self, id: u64) -> Result<Action, ApiError> {
        self.perform_droplet_action(id, &DropletAction::DisableBackups)
            .await
    }

    /// Renames a droplet.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when `name` is empty (client-side).
    pub async fn rename_droplet(&self, id: u64, name: &str) -> Result<Action, ApiError> {
        if name.trim().is_empty() {
            return Err(ApiError::precondition("new droplet name must not be empty"));
        }
        self.perform_droplet_action(
            id,
            &DropletAction::Rename {
                name: name.to_string(),
            },
        )
        .await
    }

    /// POSTs an action request to `/droplets/{id}/actions`.
    async fn perform_droplet_action(
        &self,
        id: u64,
        action: &DropletAction,
    ) -> Result<Action, ApiError> {
        Action::create(&self.rest, &[("droplet_id", id.to_string())], action).await
    }
}
