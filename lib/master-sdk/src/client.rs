//! Master client: builds requests and dispatches them through a [`Transport`].

use std::time::Instant;

use bytes::Bytes;
use http::{Method, StatusCode};
use master_sdk_core::{Error, Request, RequestBuilder, Result};
use tracing::{Instrument, debug, info, info_span, warn};
use url::Url;

use crate::{ClientConfig, Response, Transport};

/// Client for the master admin API.
///
/// # Example
///
/// ```ignore
/// let client = MasterClient::new(transport, ClientConfig::builder().build()?);
///
/// let view: ClusterView = client
///     .execute_json(
///         client
///             .request(Method::GET, "/admin/getCluster")
///             .add_param_any("count", 5_i64),
///     )
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct MasterClient<T> {
    transport: T,
    config: ClientConfig,
}

impl<T> MasterClient<T> {
    /// Create a client from a transport and a configuration.
    #[must_use]
    pub const fn new(transport: T, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    /// Client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get a reference to the transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Start a request carrying the identity and default headers.
    #[must_use]
    pub fn request(&self, method: Method, path: impl Into<String>) -> RequestBuilder {
        self.request_with_headers::<&str>(method, path, &[])
    }

    /// Start a request with extra flat `[key, value, ...]` header pairs.
    ///
    /// An odd trailing element is dropped.
    #[must_use]
    pub fn request_with_headers<S: AsRef<str>>(
        &self,
        method: Method,
        path: impl Into<String>,
        added: &[S],
    ) -> RequestBuilder {
        RequestBuilder::new(&self.config.identity, method, path)
            .with_headers(&self.config.default_headers, added)
    }
}

impl<T: Transport> MasterClient<T> {
    /// Send a request and return the successful response.
    ///
    /// A builder holding a deferred error is never sent; that error is
    /// returned instead.
    ///
    /// # Errors
    ///
    /// Returns the builder's deferred error, [`Error::InvalidRequest`] or
    /// [`Error::InvalidUrl`] if the request cannot be encoded, the transport
    /// error, or [`Error::Http`] for non-2xx responses.
    pub async fn execute(&self, builder: RequestBuilder) -> Result<Response> {
        let method = builder.method().clone();
        let path = builder.path().to_string();

        let request = builder.build().inspect_err(|err| {
            warn!(%method, %path, error = %err, "request aborted before dispatch");
        })?;
        let http_request = to_http_request(&self.config.base_url, request)?;

        let url = http_request.uri().to_string();
        let span = info_span!("master_request", %method, %url);

        async move {
            debug!(headers = ?http_request.headers(), "sending request");
            let start = Instant::now();

            let response = self
                .transport
                .send(http_request)
                .await
                .inspect_err(|err| warn!(error = %err, "transport failed"))?;

            let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
            let status = response.status();

            if !response.is_success() {
                warn!(status, elapsed_ms, "request failed with HTTP error");
                let message = StatusCode::from_u16(status)
                    .ok()
                    .and_then(|code| code.canonical_reason())
                    .unwrap_or("unknown status");
                return Err(Error::http_with_body(status, message, response.into_body()));
            }

            info!(status, elapsed_ms, "request completed");
            Ok(response)
        }
        .instrument(span)
        .await
    }

    /// Send a request and decode the JSON reply.
    ///
    /// # Errors
    ///
    /// Same as [`Self::execute`], plus [`Error::JsonDeserialization`].
    pub async fn execute_json<R: serde::de::DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<R> {
        self.execute(builder).await?.json()
    }
}

/// Resolve the path against `base_url` and encode params as a query string.
///
/// Params are sorted by key so the URL is stable.
fn to_http_request(base_url: &Url, request: Request) -> Result<http::Request<Bytes>> {
    let (method, path, params, headers, body) = request.into_parts();

    let mut url = base_url.join(&path)?;
    if !params.is_empty() {
        let mut pairs: Vec<(String, String)> = params.into_iter().collect();
        pairs.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        url.query_pairs_mut().extend_pairs(pairs);
    }

    let mut builder = http::Request::builder().method(method).uri(url.as_str());
    for (name, value) in &headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    builder
        .body(body.unwrap_or_default())
        .map_err(|e| Error::invalid_request(e.to_string()))
}
