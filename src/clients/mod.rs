//! HTTP client types for DigitalOcean API communication.
//!
//! This module provides the transport layer for making authenticated
//! requests to the DigitalOcean API. It handles request construction and
//! validation, header injection, timeouts, and raw response collection.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A raw response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`RateLimit`]: Parsed rate-limit header values
//! - [`RestClient`]: Verb-level convenience wrapper (`get`/`post`/`put`/`delete`)
//!
//! # Retry Behavior
//!
//! There is none. Each invocation issues exactly one network call. Whether a
//! failed call is safe to retry depends on the idempotency of the wrapped
//! operation, which only the caller knows, so retry policy is left to the
//! caller.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod rest;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, RateLimit};
pub use rest::RestClient;
