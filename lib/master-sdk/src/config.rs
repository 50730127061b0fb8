//! Client configuration types.

use std::collections::HashMap;

use master_sdk_core::{ClientIdentity, Result, merge_headers};
use url::Url;

/// Master address used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:17010";

/// Configuration for a [`crate::MasterClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Master base URL; request paths are resolved against it.
    pub base_url: Url,
    /// Identity sent as `User-Agent`.
    pub identity: ClientIdentity,
    /// Headers added to every request after the identity header.
    pub default_headers: HashMap<String, String>,
}

impl ClientConfig {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Default headers combined with flat `[key, value, ...]` pairs.
    #[must_use]
    pub fn headers_with<S: AsRef<str>>(&self, added: &[S]) -> HashMap<String, String> {
        merge_headers(&self.default_headers, added)
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    identity: Option<ClientIdentity>,
    default_headers: HashMap<String, String>,
}

impl ClientConfigBuilder {
    /// Set the master base URL.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the client identity.
    #[must_use]
    pub fn identity(mut self, identity: ClientIdentity) -> Self {
        self.identity = Some(identity);
        self
    }

    /// Add a header sent with every request.
    #[must_use]
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`master_sdk_core::Error::InvalidUrl`] if the base URL does not parse.
    pub fn build(self) -> Result<ClientConfig> {
        let base_url = Url::parse(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;
        Ok(ClientConfig {
            base_url,
            identity: self.identity.unwrap_or_else(ClientIdentity::from_build),
            default_headers: self.default_headers,
        })
    }
}
