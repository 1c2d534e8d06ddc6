//! Action tracking operations.

use crate::api::DigitalOceanClient;
use crate::resources::Action;
use crate::rest::{ApiError, Page, PageWalker, RestResource};

impl DigitalOceanClient {
    /// Returns one page of the actions taken on the account.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on failure.
    pub async fn actions(&self, page: Option<u32>) -> Result<Page<Action>, ApiError> {
        Action::page(&self.rest, &[], page).await
    }

    /// Returns a lazy walker over all account actions, one page per request.
    #[must_use]
    pub fn actions_walker(&self) -> PageWalker<'_, Action> {
        PageWalker::new(
            &self.rest,
            Action::NAME,
            Action::PLURAL,
            "actions".to_string(),
        )
    }

    /// Fetches a single action to track its progress.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when no action has the given id.
    pub async fn action(&self, id: u64) -> Result<Action, ApiError> {
        Action::find(&self.rest, &[("id", id.to_string())]).await
    }
}
