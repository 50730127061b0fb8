//! Transport trait.
//!
//! The master client does not open connections itself. A [`Transport`]
//! receives fully assembled `http::Request`s and returns the reply, leaving
//! TLS, pooling, retries and leader failover to the implementation.

use std::future::Future;

use bytes::Bytes;
use master_sdk_core::Result;

use crate::Response;

/// Sends wire requests to a master.
pub trait Transport: Send + Sync {
    /// Send a request and return the response, whatever its status.
    ///
    /// # Errors
    ///
    /// Returns an error only when no response was received, typically
    /// [`master_sdk_core::Error::Connection`].
    fn send(&self, request: http::Request<Bytes>) -> impl Future<Output = Result<Response>> + Send;
}
