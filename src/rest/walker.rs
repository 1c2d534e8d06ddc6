//! Lazy page-at-a-time iteration over paginated collections.
//!
//! [`PageWalker`] turns a collection-returning operation into an on-demand
//! sequence of pages: each call to [`next_page`](PageWalker::next_page)
//! issues exactly one request, the sequence is bounded by the provider's
//! pagination metadata, and [`restart`](PageWalker::restart) rewinds to
//! page 1 for a fresh walk. Separate walks over a collection that changed
//! in between are not guaranteed to be consistent with each other; the
//! server is the only synchronization point.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut walker = client.droplets_walker();
//! while let Some(page) = walker.next_page().await? {
//!     for droplet in page.iter() {
//!         println!("{:?}", droplet.name);
//!     }
//! }
//!
//! // Or drain everything into one Vec:
//! let all = client.droplets_walker().collect().await?;
//! ```

use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::clients::RestClient;
use crate::rest::errors::ApiError;
use crate::rest::resource::fetch_page;
use crate::rest::response::Page;

/// A lazy, finite, restartable sequence of collection pages.
///
/// One request is issued per [`next_page`](Self::next_page) call, starting
/// at page 1. The walk ends after the page whose envelope advertises no
/// next page (an empty page ends it too, covering providers that report
/// zero total pages as a single empty page).
#[derive(Debug)]
pub struct PageWalker<'c, T> {
    client: &'c RestClient,
    name: &'static str,
    key: &'static str,
    path: String,
    next_page: u32,
    finished: bool,
    _marker: PhantomData<T>,
}

impl<'c, T: DeserializeOwned> PageWalker<'c, T> {
    /// Creates a walker over the collection at `path` with envelope `key`.
    pub(crate) fn new(
        client: &'c RestClient,
        name: &'static str,
        key: &'static str,
        path: String,
    ) -> Self {
        Self {
            client,
            name,
            key,
            path,
            next_page: 1,
            finished: false,
            _marker: PhantomData,
        }
    }

    /// Fetches the next page, or returns `None` when the walk is exhausted.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the underlying page fetch. A failed
    /// fetch does not advance the walk; calling again retries the same page.
    pub async fn next_page(&mut self) -> Result<Option<Page<T>>, ApiError> {
        if self.finished {
            return Ok(None);
        }

        let page = fetch_page(
            self.client,
            self.name,
            self.key,
            &self.path,
            Some(self.next_page),
        )
        .await?;

        if !page.has_next() || page.is_empty() {
            self.finished = true;
        }
        self.next_page += 1;

        Ok(Some(page))
    }

    /// Rewinds the walk to page 1.
    ///
    /// The next call to [`next_page`](Self::next_page) starts a fresh walk;
    /// no consistency with a previous walk is implied.
    pub fn restart(&mut self) {
        self.next_page = 1;
        self.finished = false;
    }

    /// Returns `true` once the walk has yielded its final page.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Drains the remaining pages into a single vector of items.
    ///
    /// # Errors
    ///
    /// Propagates the first [`ApiError`] encountered; items from pages
    /// fetched before the failure are discarded.
    pub async fn collect(mut self) -> Result<Vec<T>, ApiError> {
        let mut items = Vec::new();

        while let Some(page) = self.next_page().await? {
            items.extend(page.into_items());
        }

        Ok(items)
    }
}
