//! Response interpretation and the paginated collection type.
//!
//! This module decides the outcome of a raw HTTP response: success bodies
//! are decoded into the operation's declared shape (a single resource under
//! its envelope key, or a [`Page`] of resources), and non-success statuses
//! are mapped into the error taxonomy via
//! [`ApiError::from_response`](crate::rest::ApiError::from_response).
//!
//! # Collection envelopes
//!
//! DigitalOcean collection responses wrap the items together with
//! pagination metadata:
//!
//! ```json
//! {
//!   "droplets": [ ... ],
//!   "links": { "pages": { "next": "...?page=2", "last": "...?page=3" } },
//!   "meta": { "total": 25 }
//! }
//! ```
//!
//! [`Page`] surfaces the total resource count and the page numbers parsed
//! from the `links.pages` URLs, which is how a walk knows when it is
//! exhausted. The server decides the page size; the client never assumes
//! one.

use std::ops::Deref;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::clients::HttpResponse;
use crate::rest::errors::{ApiError, RequestContext};

/// Pagination link URLs from a collection envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub(crate) struct PageLinks {
    #[serde(default)]
    pub prev: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub last: Option<String>,
}

/// One page of a paginated collection.
///
/// Wraps the items of a single page together with the pagination metadata
/// from the response envelope. Derefs to its item slice for convenient
/// iteration and indexing.
///
/// Page numbers are 1-based. An empty page (including a page requested
/// beyond the last valid page) is data, not an error; whether it ends an
/// iteration is the caller's (or the walker's) decision.
///
/// # Example
///
/// ```rust,ignore
/// let page = client.droplets(Some(2)).await?;
/// for droplet in page.iter() {
///     println!("{:?}", droplet.name);
/// }
/// if page.has_next() {
///     let next = client.droplets(page.next_page()).await?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Page<T> {
    items: Vec<T>,
    page: u32,
    total: Option<u64>,
    prev_page: Option<u32>,
    next_page: Option<u32>,
    last_page: Option<u32>,
}

impl<T> Page<T> {
    /// Creates a page directly from its parts.
    #[must_use]
    pub(crate) const fn new(
        items: Vec<T>,
        page: u32,
        total: Option<u64>,
        prev_page: Option<u32>,
        next_page: Option<u32>,
        last_page: Option<u32>,
    ) -> Self {
        Self {
            items,
            page,
            total,
            prev_page,
            next_page,
            last_page,
        }
    }

    /// Returns the 1-based page number this page was requested as.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Returns the provider-reported total number of resources in the
    /// collection, when the envelope carried one.
    #[must_use]
    pub const fn total(&self) -> Option<u64> {
        self.total
    }

    /// Returns `true` if the envelope advertised a previous page.
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.prev_page.is_some()
    }

    /// Returns the previous page number, when the envelope advertised one.
    #[must_use]
    pub const fn prev_page(&self) -> Option<u32> {
        self.prev_page
    }

    /// Returns `true` if the envelope advertised a next page.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.next_page.is_some()
    }

    /// Returns the next page number, when the envelope advertised one.
    #[must_use]
    pub const fn next_page(&self) -> Option<u32> {
        self.next_page
    }

    /// Returns the last page number, when the envelope advertised one.
    /// This is the provider-reported total page count.
    #[must_use]
    pub const fn last_page(&self) -> Option<u32> {
        self.last_page
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if this page holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns an iterator over the items on this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Consumes the page and returns its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> Deref for Page<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: DeserializeOwned> Page<T> {
    /// Builds a page from a success response.
    ///
    /// Extracts the item array under `key` and the `links`/`meta` metadata.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Indeterminate`] when the body is not valid JSON,
    /// the key is missing, or the items do not match the expected shape.
    pub(crate) fn from_response(
        response: &HttpResponse,
        key: &str,
        page: u32,
        context: &RequestContext,
    ) -> Result<Self, ApiError> {
        let body = response
            .parse_json()
            .map_err(|e| ApiError::decode(format!("invalid JSON body: {e}"), response.code, context))?;

        let items_value = body.get(key).cloned().ok_or_else(|| {
            ApiError::decode(
                format!("missing '{key}' in response body"),
                response.code,
                context,
            )
        })?;

        let items: Vec<T> = serde_json::from_value(items_value).map_err(|e| {
            ApiError::decode(
                format!("failed to deserialize '{key}': {e}"),
                response.code,
                context,
            )
        })?;

        let total = body
            .get("meta")
            .and_then(|meta| meta.get("total"))
            .and_then(serde_json::Value::as_u64);

        let links: PageLinks = body
            .get("links")
            .and_then(|links| links.get("pages"))
            .cloned()
            .map(serde_json::from_value)
            .transpose()
            .unwrap_or_default()
            .unwrap_or_default();

        let prev_page = links.prev.as_deref().and_then(extract_page_number);
        let next_page = links.next.as_deref().and_then(extract_page_number);
        let last_page = links.last.as_deref().and_then(extract_page_number);

        Ok(Self::new(items, page, total, prev_page, next_page, last_page))
    }
}

/// Extracts the `page` query parameter from a pagination link URL.
fn extract_page_number(url: &str) -> Option<u32> {
    let query_start = url.find('?')?;
    let query = &url[query_start + 1..];

    for param in query.split('&') {
        let mut parts = param.splitn(2, '=');
        if let (Some(key), Some(value)) = (parts.next(), parts.next()) {
            if key == "page" {
                return value.parse().ok();
            }
        }
    }

    None
}

/// Checks a response status, mapping non-success codes into the taxonomy.
pub(crate) fn ensure_success(
    response: &HttpResponse,
    resource: &'static str,
    id: Option<&str>,
    context: &RequestContext,
) -> Result<(), ApiError> {
    if response.is_success() {
        Ok(())
    } else {
        Err(ApiError::from_response(response, resource, id, context))
    }
}

/// Decodes a single resource from a success response body.
///
/// The resource is expected under the given envelope key
/// (e.g., `{"droplet": {...}}`).
pub(crate) fn extract_resource<T: DeserializeOwned>(
    response: &HttpResponse,
    key: &str,
    context: &RequestContext,
) -> Result<T, ApiError> {
    let body = response
        .parse_json()
        .map_err(|e| ApiError::decode(format!("invalid JSON body: {e}"), response.code, context))?;

    let value = body.get(key).cloned().ok_or_else(|| {
        ApiError::decode(
            format!("missing '{key}' in response body"),
            response.code,
            context,
        )
    })?;

    serde_json::from_value(value).map_err(|e| {
        ApiError::decode(
            format!("failed to deserialize '{key}': {e}"),
            response.code,
            context,
        )
    })
}

// Verify Page is Send + Sync when T is Send + Sync
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Page<String>>();
};
