//! Core types for the cluster master admin client.
//!
//! This crate provides the pieces every master request is assembled from:
//! - [`RequestBuilder`] and [`Request`] - fluent request assembly with a deferred first error
//! - [`ParamValue`] and [`IntoParamValue`] - canonical parameter encoding
//! - [`ClientIdentity`] - the `User-Agent` identity injected into every request
//! - [`merge_headers`] - standalone header merge
//! - [`IntoBody`], [`Json`], [`to_json`], [`from_json`] - body encoding
//! - [`Error`] and [`Result`] - Error handling

mod body;
mod error;
mod headers;
mod identity;
mod param;
pub mod prelude;
mod request;

pub use body::{IntoBody, Json, from_json, to_json};
pub use error::{Error, Result};
pub use headers::merge_headers;
pub use identity::{ClientIdentity, DEFAULT_PRODUCT, USER_AGENT};
pub use param::{IntoParamValue, ParamValue, UnsupportedParam};
pub use request::{Request, RequestBuilder};

// Re-export http method type used by the builder
pub use http::Method;
