//! Client identification header.

use std::fmt;

/// Header carrying the client identity on every request.
pub const USER_AGENT: &str = "User-Agent";

/// Product name used by [`ClientIdentity::from_build`].
pub const DEFAULT_PRODUCT: &str = "cubefs-sdk";

/// Who is calling the master, rendered as `<product>/<version> (commit <commit>)`.
///
/// The header value is rendered once when the identity is created. Create one
/// identity at startup and hand it to every [`crate::RequestBuilder`].
///
/// ```
/// use master_sdk_core::ClientIdentity;
///
/// let identity = ClientIdentity::new("cubefs-sdk", "3.5.0", "a1b2c3");
/// assert_eq!(identity.user_agent(), "cubefs-sdk/3.5.0 (commit a1b2c3)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientIdentity {
    product: String,
    version: String,
    commit_id: String,
    user_agent: String,
}

impl ClientIdentity {
    /// Creates an identity from explicit build metadata.
    #[must_use]
    pub fn new(
        product: impl Into<String>,
        version: impl Into<String>,
        commit_id: impl Into<String>,
    ) -> Self {
        let product = product.into();
        let version = version.into();
        let commit_id = commit_id.into();
        let user_agent = format!("{product}/{version} (commit {commit_id})");
        Self {
            product,
            version,
            commit_id,
            user_agent,
        }
    }

    /// Identity of this build.
    ///
    /// The commit id is read from `MASTER_SDK_COMMIT_ID` at compile time.
    #[must_use]
    pub fn from_build() -> Self {
        Self::new(
            DEFAULT_PRODUCT,
            env!("CARGO_PKG_VERSION"),
            option_env!("MASTER_SDK_COMMIT_ID").unwrap_or("unknown"),
        )
    }

    /// Product name.
    #[must_use]
    pub fn product(&self) -> &str {
        &self.product
    }

    /// Product version.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Commit id of the build.
    #[must_use]
    pub fn commit_id(&self) -> &str {
        &self.commit_id
    }

    /// The rendered `User-Agent` value.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Default for ClientIdentity {
    fn default() -> Self {
        Self::from_build()
    }
}

impl fmt::Display for ClientIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.user_agent)
    }
}
