//! Client for the cluster master admin API.
//!
//! [`MasterClient`] hands out [`RequestBuilder`]s pre-loaded with the client
//! identity and default headers, and dispatches finished builders through a
//! [`Transport`]. A builder that recorded an error along its chain is never
//! sent.
//!
//! # Example
//!
//! ```ignore
//! use master_sdk::prelude::*;
//!
//! let config = ClientConfig::builder()
//!     .base_url("http://192.168.0.11:17010")
//!     .build()?;
//! let client = MasterClient::new(transport, config);
//!
//! let response = client
//!     .execute(
//!         client
//!             .request(Method::GET, "/admin/getCluster")
//!             .add_param("name", "cluster1")
//!             .add_param_any("count", 5_i64),
//!     )
//!     .await?;
//! ```

mod client;
mod config;
pub mod prelude;
mod response;
mod transport;

pub use client::MasterClient;
pub use config::{ClientConfig, ClientConfigBuilder, DEFAULT_BASE_URL};
pub use response::Response;
pub use transport::Transport;

// Re-export core types
pub use master_sdk_core::{
    ClientIdentity, Error, IntoBody, IntoParamValue, Json, Method, ParamValue, Request,
    RequestBuilder, Result, USER_AGENT, from_json, merge_headers, to_json,
};
