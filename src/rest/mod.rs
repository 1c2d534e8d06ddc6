//! The request/response lifecycle engine.
//!
//! This module turns typed operations into API calls:
//!
//! - **Path building** ([`ResourcePath`], [`ResourceOperation`],
//!   [`resolve_path`]): maps an operation plus identifiers onto a concrete
//!   request path, enforcing preconditions before any network activity.
//! - **Error taxonomy** ([`ApiError`], [`RequestContext`]): exactly three
//!   failure kinds (not found, rejected, indeterminate) chosen so callers
//!   can reason about retry safety.
//! - **Response interpretation** ([`Page`] and the single-resource
//!   decoders): decides between decoded results and taxonomy errors.
//! - **Resource plumbing** ([`RestResource`]): shared find/page/create/
//!   update/delete implementations driven by each resource's declared
//!   path templates.
//! - **Pagination walking** ([`PageWalker`]): a lazy, finite, restartable
//!   page-at-a-time sequence over any collection operation.

mod errors;
mod path;
mod resource;
mod response;
mod walker;

// Public exports
pub use errors::{ApiError, RequestContext};
pub use path::{build_path, get_path, resolve_path, ResolvedPath, ResourceOperation, ResourcePath};
pub use resource::{PathIds, RestResource};
pub use response::Page;
pub use walker::PageWalker;

pub(crate) use resource::fetch_page;
