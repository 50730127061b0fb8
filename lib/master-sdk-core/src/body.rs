//! Body serialization utilities.

use bytes::Bytes;

use crate::Result;

/// Serialize a value to JSON bytes.
///
/// # Errors
///
/// Returns [`crate::Error::BodySerialization`] if JSON serialization fails.
///
/// # Example
///
/// ```
/// use master_sdk_core::to_json;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Volume { name: String, capacity: u64 }
///
/// let vol = Volume { name: "ltptest".to_string(), capacity: 30 };
/// let bytes = to_json(&vol).expect("serialize");
/// assert_eq!(bytes.as_ref(), br#"{"name":"ltptest","capacity":30}"#);
/// ```
pub fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<Bytes> {
    serde_json::to_vec(value)
        .map(Bytes::from)
        .map_err(Into::into)
}

/// Deserialize JSON bytes to a value with path-aware error messages.
///
/// # Errors
///
/// Returns an error if JSON deserialization fails, with the error message
/// including the path to the problematic field (e.g., "volume.capacity").
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        crate::Error::json_deserialization(e.path().to_string(), e.inner().to_string())
    })
}

/// Wrapper marking a value to be sent as a JSON body.
///
/// ```
/// use master_sdk_core::{ClientIdentity, Json, RequestBuilder};
///
/// let identity = ClientIdentity::new("cubefs-sdk", "1.0", "abc");
/// let builder = RequestBuilder::new(&identity, http::Method::POST, "/x")
///     .with_body(Json(vec!["dp1", "dp2"]));
/// assert_eq!(builder.body().map(|b| &b[..]), Some(&br#"["dp1","dp2"]"#[..]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Json<T>(pub T);

/// Conversion into request body bytes.
///
/// Raw byte containers are taken verbatim; structured values go through
/// [`to_json`].
pub trait IntoBody {
    /// Produce the body bytes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::BodySerialization`] when encoding fails.
    fn into_body(self) -> Result<Bytes>;
}

impl IntoBody for Bytes {
    fn into_body(self) -> Result<Bytes> {
        Ok(self)
    }
}

impl IntoBody for Vec<u8> {
    fn into_body(self) -> Result<Bytes> {
        Ok(Bytes::from(self))
    }
}

impl IntoBody for &[u8] {
    fn into_body(self) -> Result<Bytes> {
        Ok(Bytes::copy_from_slice(self))
    }
}

impl<T: serde::Serialize> IntoBody for Json<T> {
    fn into_body(self) -> Result<Bytes> {
        to_json(&self.0)
    }
}

impl IntoBody for serde_json::Value {
    fn into_body(self) -> Result<Bytes> {
        to_json(&self)
    }
}
