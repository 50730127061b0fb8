//! Prelude module for convenient imports.

pub use crate::{
    ClientConfig, ClientIdentity, Error, Json, MasterClient, Method, ParamValue, RequestBuilder,
    Response, Result, Transport,
};
