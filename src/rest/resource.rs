//! REST resource trait: shared request plumbing for all resources.
//!
//! This module defines the [`RestResource`] trait. A resource declares its
//! envelope keys and path templates, and the trait's default methods provide
//! the full request lifecycle for each operation: resolve the path (with
//! precondition checks), execute the transport call, and interpret the
//! response.
//!
//! # Implementing a resource
//!
//! ```rust,ignore
//! use digitalocean_api::rest::{ResourceOperation, ResourcePath, RestResource};
//! use digitalocean_api::clients::HttpMethod;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct Domain {
//!     pub name: Option<String>,
//!     pub ttl: Option<u32>,
//! }
//!
//! impl RestResource for Domain {
//!     const NAME: &'static str = "Domain";
//!     const KEY: &'static str = "domain";
//!     const PLURAL: &'static str = "domains";
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["name"], "domains/{name}"),
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "domains"),
//!     ];
//! }
//!
//! // Usage:
//! let domain = Domain::find(&client, &[("name", "example.com".to_string())]).await?;
//! let page = Domain::page(&client, &[], Some(2)).await?;
//! ```

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::RestClient;
use crate::rest::errors::{ApiError, RequestContext};
use crate::rest::path::{resolve_path, ResourceOperation, ResourcePath};
use crate::rest::response::{ensure_success, extract_resource, Page};

/// Identifier pairs substituted into a resource's path templates.
pub type PathIds = [(&'static str, String)];

/// A REST resource that can be fetched, listed, created, updated, and deleted.
///
/// Implementors declare the resource's name (for error messages), its
/// envelope keys, and its path templates; the trait provides default
/// implementations of the five operations. Which operations a resource
/// actually supports is determined by which templates it declares: calling
/// an operation with no matching template fails as a precondition, before
/// any network activity.
///
/// Request bodies are bare JSON objects (the input type's writable fields);
/// response bodies are unwrapped from the resource's envelope key.
#[allow(async_fn_in_trait)]
pub trait RestResource: DeserializeOwned + Clone + Send + Sync + Sized {
    /// The resource's display name, used in error messages (e.g., "Droplet").
    const NAME: &'static str;

    /// The envelope key for a single resource (e.g., "droplet").
    const KEY: &'static str;

    /// The envelope key for collections (e.g., "droplets").
    const PLURAL: &'static str;

    /// Path templates for the operations this resource supports.
    const PATHS: &'static [ResourcePath];

    /// Fetches a single resource by its identifier(s).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when the resource does not exist,
    /// [`ApiError::Rejected`] for precondition failures and refused
    /// requests, and [`ApiError::Indeterminate`] for transport and server
    /// failures.
    async fn find(client: &RestClient, ids: &PathIds) -> Result<Self, ApiError> {
        let resolved = resolve_path(Self::PATHS, ResourceOperation::Find, ids)?;
        let context = RequestContext::new(resolved.method, &resolved.path);

        let response = client
            .get(&resolved.path, None)
            .await
            .map_err(|e| ApiError::from_transport(e, context.clone()))?;

        ensure_success(&response, Self::NAME, leaf_id(ids), &context)?;
        extract_resource(&response, Self::KEY, &context)
    }

    /// Fetches one page of the resource's collection.
    ///
    /// `page` is 1-based; `None` requests the first page. A page beyond the
    /// last valid page yields an empty [`Page`], not an error.
    ///
    /// # Errors
    ///
    /// See [`find`](Self::find).
    async fn page(
        client: &RestClient,
        ids: &PathIds,
        page: Option<u32>,
    ) -> Result<Page<Self>, ApiError> {
        let resolved = resolve_path(Self::PATHS, ResourceOperation::All, ids)?;
        let context = RequestContext::new(resolved.method, &resolved.path);

        let query = page.map(|number| {
            let mut query = BTreeMap::new();
            query.insert("page".to_string(), number.to_string());
            query
        });

        let response = client
            .get(&resolved.path, query)
            .await
            .map_err(|e| ApiError::from_transport(e, context.clone()))?;

        ensure_success(&response, Self::NAME, None, &context)?;
        Page::from_response(&response, Self::PLURAL, page.unwrap_or(1), &context)
    }

    /// Creates a resource (or performs an action) by POSTing `body`.
    ///
    /// # Errors
    ///
    /// See [`find`](Self::find).
    async fn create<B: Serialize + Sync + ?Sized>(
        client: &RestClient,
        ids: &PathIds,
        body: &B,
    ) -> Result<Self, ApiError> {
        let resolved = resolve_path(Self::PATHS, ResourceOperation::Create, ids)?;
        let context = RequestContext::new(resolved.method, &resolved.path);

        let body = serialize_body(body)?;

        let response = client
            .post(&resolved.path, body)
            .await
            .map_err(|e| ApiError::from_transport(e, context.clone()))?;

        ensure_success(&response, Self::NAME, leaf_id(ids), &context)?;
        extract_resource(&response, Self::KEY, &context)
    }

    /// Updates a resource by PUTting `body`.
    ///
    /// # Errors
    ///
    /// See [`find`](Self::find).
    async fn update<B: Serialize + Sync + ?Sized>(
        client: &RestClient,
        ids: &PathIds,
        body: &B,
    ) -> Result<Self, ApiError> {
        let resolved = resolve_path(Self::PATHS, ResourceOperation::Update, ids)?;
        let context = RequestContext::new(resolved.method, &resolved.path);

        let body = serialize_body(body)?;

        let response = client
            .put(&resolved.path, body)
            .await
            .map_err(|e| ApiError::from_transport(e, context.clone()))?;

        ensure_success(&response, Self::NAME, leaf_id(ids), &context)?;
        extract_resource(&response, Self::KEY, &context)
    }

    /// Deletes a resource. Returns `true` on success (the API answers 204).
    ///
    /// # Errors
    ///
    /// See [`find`](Self::find).
    async fn delete(client: &RestClient, ids: &PathIds) -> Result<bool, ApiError> {
        let resolved = resolve_path(Self::PATHS, ResourceOperation::Delete, ids)?;
        let context = RequestContext::new(resolved.method, &resolved.path);

        let response = client
            .delete(&resolved.path)
            .await
            .map_err(|e| ApiError::from_transport(e, context.clone()))?;

        ensure_success(&response, Self::NAME, leaf_id(ids), &context)?;
        Ok(true)
    }
}

/// Fetches one page of a collection at an explicit path and envelope key.
///
/// Used for listings whose envelope key differs from the item type's own
/// collection key (droplet snapshots and backups deserialize as images but
/// arrive under "snapshots"/"backups"), and by the page walker.
pub(crate) async fn fetch_page<T: DeserializeOwned>(
    client: &RestClient,
    name: &'static str,
    key: &str,
    path: &str,
    page: Option<u32>,
) -> Result<Page<T>, ApiError> {
    let context = RequestContext::new(crate::clients::HttpMethod::Get, path);

    let query = page.map(|number| {
        let mut query = BTreeMap::new();
        query.insert("page".to_string(), number.to_string());
        query
    });

    let response = client
        .get(path, query)
        .await
        .map_err(|e| ApiError::from_transport(e, context.clone()))?;

    ensure_success(&response, name, None, &context)?;
    Page::from_response(&response, key, page.unwrap_or(1), &context)
}

/// Returns the last (most specific) identifier value, for error messages.
fn leaf_id(ids: &PathIds) -> Option<&str> {
    ids.last().map(|(_, value)| value.as_str())
}

/// Serializes a request body, reporting failure as a precondition.
fn serialize_body<B: Serialize + ?Sized>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body)
        .map_err(|e| ApiError::precondition(format!("failed to serialize request body: {e}")))
}
