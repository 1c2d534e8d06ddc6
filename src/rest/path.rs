//! Path building infrastructure for REST resources.
//!
//! This module provides the path resolution system that maps a resource
//! operation plus a set of identifiers onto a concrete request path.
//!
//! # Path Resolution
//!
//! Resources can be accessed through multiple paths. For example, an
//! `Action` is accessible via:
//! - `/droplets/{droplet_id}/actions` (scoped to a droplet)
//! - `/actions` (account-wide)
//!
//! The path resolution system selects the most specific path whose required
//! identifiers are all available. This also collapses by-id and by-slug
//! lookups into a single template: any identifier that renders to a path
//! segment can be substituted.
//!
//! # Example
//!
//! ```rust
//! use digitalocean_api::rest::{ResourcePath, ResourceOperation, get_path, build_path};
//! use digitalocean_api::clients::HttpMethod;
//! use std::collections::HashMap;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(
//!         HttpMethod::Get,
//!         ResourceOperation::Find,
//!         &["domain_name", "id"],
//!         "domains/{domain_name}/records/{id}",
//!     ),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::Find, &["domain_name", "id"]).unwrap();
//!
//! let mut ids = HashMap::new();
//! ids.insert("domain_name", "example.com");
//! ids.insert("id", "12");
//! assert_eq!(build_path(path.template, &ids), "domains/example.com/records/12");
//! ```

use std::collections::HashMap;
use std::fmt::Display;

use crate::clients::HttpMethod;
use crate::rest::errors::ApiError;

/// Operations that can be performed on a REST resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Fetch a single resource by identifier (GET).
    Find,
    /// List a page of resources (GET).
    All,
    /// Create a new resource or perform an action (POST).
    Create,
    /// Update an existing resource (PUT).
    Update,
    /// Delete a resource (DELETE).
    Delete,
}

impl ResourceOperation {
    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Find => "find",
            Self::All => "all",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// A path configuration for a REST resource operation.
///
/// Each `ResourcePath` defines how to reach a resource for a specific
/// operation: the HTTP method, the identifiers the template requires, and
/// the template itself with `{id_name}` placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// Required identifier names in order (e.g., `["domain_name", "id"]`).
    pub ids: &'static [&'static str],
    /// The URL template with `{id}` placeholders.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    ///
    /// This is a `const fn` so paths can be defined as constants.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }

    /// Returns the number of required identifiers for this path.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Checks if all required identifiers are available.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Selects the best matching path for an operation.
///
/// Filters paths by operation, keeps those whose required identifiers are
/// all available, and picks the most specific (most identifiers).
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.id_count())
}

/// Builds a URL from a template by interpolating identifiers.
///
/// Replaces `{id_name}` placeholders in the template with values from the
/// provided map. Placeholders without a matching entry are left unchanged.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &value.to_string());
    }

    result
}

/// A resolved request path: HTTP method plus the concrete path string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    /// The HTTP method the resolved path is invoked with.
    pub method: HttpMethod,
    /// The concrete path with all parameters substituted.
    pub path: String,
}

/// Resolves a concrete request path for an operation, enforcing the
/// precondition that every required identifier is present and non-empty.
///
/// This is the single path-construction entry point for all operations. It
/// runs before any network activity, so a failing resolution is guaranteed
/// to have no server-side effect.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] (with no HTTP status) when an identifier
/// is empty, when no template matches the operation and identifiers, or
/// when a placeholder remains unsubstituted.
pub fn resolve_path(
    paths: &[ResourcePath],
    operation: ResourceOperation,
    ids: &[(&'static str, String)],
) -> Result<ResolvedPath, ApiError> {
    for (name, value) in ids {
        if value.trim().is_empty() {
            return Err(ApiError::precondition(format!(
                "required path parameter '{name}' must not be empty"
            )));
        }
    }

    let available: Vec<&str> = ids.iter().map(|(name, _)| *name).collect();
    let path = get_path(paths, operation, &available).ok_or_else(|| {
        ApiError::precondition(format!(
            "no route for operation '{}' with the provided identifiers",
            operation.as_str()
        ))
    })?;

    let map: HashMap<&str, &String> = ids.iter().map(|(name, value)| (*name, value)).collect();
    let built = build_path(path.template, &map);

    if built.contains('{') {
        return Err(ApiError::precondition(format!(
            "missing required path parameter for '{built}'"
        )));
    }

    Ok(ResolvedPath {
        method: path.http_method,
        path: built,
    })
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};
