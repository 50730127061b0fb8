//! Error types for the master SDK.

use derive_more::{Display, Error, From};

/// Main error type for master SDK operations.
///
/// [`Error::UnsupportedParamType`] and [`Error::BodySerialization`] are
/// recorded on a [`crate::RequestBuilder`] and only surface when it is built.
/// The remaining variants are raised by the sending side.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// A dynamic parameter value had no scalar string form.
    #[display("unsupported param type for '{key}': {value}")]
    #[from(skip)]
    UnsupportedParamType {
        /// Parameter key.
        key: String,
        /// Rendering of the rejected value.
        value: String,
    },

    /// Structured body encoding failed.
    #[display("body json marshal: {_0}")]
    #[from]
    BodySerialization(serde_json::Error),

    /// HTTP-level errors (non-2xx status codes).
    #[display("HTTP error {status}: {message}")]
    #[from(skip)]
    Http {
        /// HTTP status code.
        status: u16,
        /// Error message.
        message: String,
        /// Response body, if available.
        #[error(not(source))]
        body: Option<bytes::Bytes>,
    },

    /// Network/connection errors reported by a transport.
    #[display("connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// The finished request could not be turned into a wire request.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),

    /// URL parsing error.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),

    /// JSON deserialization error with path context.
    #[display("JSON deserialization error at '{path}': {message}")]
    #[from(skip)]
    JsonDeserialization {
        /// JSON path to the error (e.g., "volume.capacity").
        path: String,
        /// Error message.
        message: String,
    },
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an unsupported parameter error.
    #[must_use]
    pub fn unsupported_param(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnsupportedParamType {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create an HTTP error from status code and message.
    #[must_use]
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
            body: None,
        }
    }

    /// Create an HTTP error with body.
    #[must_use]
    pub fn http_with_body(status: u16, message: impl Into<String>, body: bytes::Bytes) -> Self {
        Self::Http {
            status,
            message: message.into(),
            body: Some(body),
        }
    }

    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Create a JSON deserialization error with path context.
    #[must_use]
    pub fn json_deserialization(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::JsonDeserialization {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns `true` for errors recorded on a builder before dispatch.
    #[must_use]
    pub const fn is_deferred(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedParamType { .. } | Self::BodySerialization(_)
        )
    }

    /// Returns the HTTP status code if this is an HTTP error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the response body if this is an HTTP error with a body.
    #[must_use]
    pub fn body(&self) -> Option<&bytes::Bytes> {
        match self {
            Self::Http { body, .. } => body.as_ref(),
            _ => None,
        }
    }
}
