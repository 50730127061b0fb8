//! Prelude module for convenient imports.
//!
//! ```ignore
//! use master_sdk_core::prelude::*;
//! ```

pub use crate::{
    ClientIdentity, Error, IntoBody, IntoParamValue, Json, Method, ParamValue, Request,
    RequestBuilder, Result, merge_headers,
};
