//! Master admin request building.
//!
//! A [`RequestBuilder`] collects method, path, params, headers and body through
//! a fluent chain. Failures along the chain are not returned immediately: the
//! first one is kept on the builder and surfaces from [`RequestBuilder::build`].
//!
//! # Example
//!
//! ```
//! use http::Method;
//! use master_sdk_core::{ClientIdentity, RequestBuilder};
//!
//! let identity = ClientIdentity::new("cubefs-sdk", "3.5.0", "a1b2c3");
//! let request = RequestBuilder::new(&identity, Method::GET, "/admin/getCluster")
//!     .add_param("name", "cluster1")
//!     .add_param_any("count", 5_i64)
//!     .build()
//!     .expect("no deferred error");
//!
//! assert_eq!(request.param("count"), Some("5"));
//! ```

use std::collections::HashMap;

use bytes::Bytes;
use http::Method;

use crate::body::IntoBody;
use crate::headers::apply_flat_pairs;
use crate::identity::USER_AGENT;
use crate::param::IntoParamValue;
use crate::{ClientIdentity, Error, Result};

/// A finished master request, ready for a transport.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    path: String,
    params: HashMap<String, String>,
    headers: HashMap<String, String>,
    body: Option<Bytes>,
}

impl Request {
    /// HTTP method.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Request path on the master.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query parameters.
    #[must_use]
    pub fn params(&self) -> &HashMap<String, String> {
        &self.params
    }

    /// Single parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Request headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Request body.
    #[must_use]
    pub const fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Consume into (method, path, params, headers, body).
    #[must_use]
    #[allow(clippy::type_complexity)]
    pub fn into_parts(
        self,
    ) -> (
        Method,
        String,
        HashMap<String, String>,
        HashMap<String, String>,
        Option<Bytes>,
    ) {
        (self.method, self.path, self.params, self.headers, self.body)
    }
}

/// Builder for master requests with a sticky first error.
///
/// Every mutator consumes and returns the builder, so calls chain without
/// intermediate error checks. Only [`Self::add_param_any`],
/// [`Self::with_params`] and [`Self::with_body`] can fail; the first failure
/// is recorded and never replaced.
#[derive(Debug)]
pub struct RequestBuilder {
    method: Method,
    path: String,
    params: HashMap<String, String>,
    headers: HashMap<String, String>,
    body: Option<Bytes>,
    error: Option<Error>,
}

impl RequestBuilder {
    /// Creates a builder carrying only the identity header.
    #[must_use]
    pub fn new(identity: &ClientIdentity, method: Method, path: impl Into<String>) -> Self {
        let mut headers = HashMap::new();
        headers.insert(USER_AGENT.to_string(), identity.user_agent().to_string());
        Self {
            method,
            path: path.into(),
            params: HashMap::new(),
            headers,
            body: None,
            error: None,
        }
    }

    /// Sets a parameter from any scalar value, in its canonical string form.
    ///
    /// Values with no parameter form record [`Error::UnsupportedParamType`]
    /// and leave the params untouched.
    #[must_use]
    pub fn add_param_any(mut self, key: impl Into<String>, value: impl IntoParamValue) -> Self {
        self.put_param(key.into(), value);
        self
    }

    /// Sets a string parameter.
    #[must_use]
    pub fn add_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Sets a header.
    #[must_use]
    pub fn add_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Replaces the body with raw bytes.
    #[must_use]
    pub fn set_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets several parameters in order.
    ///
    /// A failing pair records the error but the remaining pairs are still
    /// applied.
    #[must_use]
    pub fn with_params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoParamValue,
    {
        for (key, value) in params {
            self.put_param(key.into(), value);
        }
        self
    }

    /// Copies `base` into the headers, then applies `added` as flat
    /// `[key, value, ...]` pairs.
    ///
    /// An odd trailing element in `added` is dropped.
    #[must_use]
    pub fn with_headers<S: AsRef<str>>(
        mut self,
        base: &HashMap<String, String>,
        added: &[S],
    ) -> Self {
        self.headers
            .extend(base.iter().map(|(k, v)| (k.clone(), v.clone())));
        apply_flat_pairs(&mut self.headers, added);
        self
    }

    /// Sets the body from raw bytes or a structured value.
    ///
    /// If encoding fails, [`Error::BodySerialization`] is recorded and the
    /// previous body is kept.
    #[must_use]
    pub fn with_body(mut self, body: impl IntoBody) -> Self {
        match body.into_body() {
            Ok(bytes) => self.body = Some(bytes),
            Err(err) => self.record(err),
        }
        self
    }

    /// HTTP method.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Request path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Parameters collected so far.
    #[must_use]
    pub fn params(&self) -> &HashMap<String, String> {
        &self.params
    }

    /// Headers collected so far.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Body, if one was set.
    #[must_use]
    pub const fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// The first recorded error, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Finishes the builder.
    ///
    /// # Errors
    ///
    /// Returns the first error recorded along the chain.
    pub fn build(self) -> Result<Request> {
        if let Some(err) = self.error {
            return Err(err);
        }
        Ok(Request {
            method: self.method,
            path: self.path,
            params: self.params,
            headers: self.headers,
            body: self.body,
        })
    }

    fn put_param(&mut self, key: String, value: impl IntoParamValue) {
        match value.into_param_value() {
            Ok(value) => {
                self.params.insert(key, value.into_canonical());
            }
            Err(unsupported) => self.record(Error::unsupported_param(key, unsupported.0)),
        }
    }

    fn record(&mut self, err: Error) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};
    use serde::ser::Error as _;
    use serde_json::json;

    use super::*;
    use crate::{Json, ParamValue};

    fn identity() -> ClientIdentity {
        ClientIdentity::new("cubefs-sdk", "3.5.0", "a1b2c3")
    }

    fn builder(method: Method, path: &str) -> RequestBuilder {
        RequestBuilder::new(&identity(), method, path)
    }

    struct Unencodable;

    impl serde::Serialize for Unencodable {
        fn serialize<S: serde::Serializer>(
            &self,
            _serializer: S,
        ) -> std::result::Result<S::Ok, S::Error> {
            Err(S::Error::custom("cannot encode"))
        }
    }

    #[test]
    fn fresh_builder_has_only_identity_header() {
        let b = builder(Method::GET, "/admin/getCluster");

        check!(b.method() == &Method::GET);
        check!(b.path() == "/admin/getCluster");
        check!(b.params().is_empty());
        check!(b.headers().len() == 1);
        check!(
            b.headers().get(USER_AGENT).map(String::as_str)
                == Some("cubefs-sdk/3.5.0 (commit a1b2c3)")
        );
        check!(b.body().is_none());
        check!(b.error().is_none());
    }

    #[test]
    fn get_cluster_scenario() {
        let request = builder(Method::GET, "/admin/getCluster")
            .add_param("name", "cluster1")
            .add_param_any("count", 5_i64)
            .build()
            .expect("no deferred error");

        let expected = HashMap::from([
            ("name".to_string(), "cluster1".to_string()),
            ("count".to_string(), "5".to_string()),
        ]);
        check!(request.params() == &expected);
    }

    #[test]
    fn add_param_any_canonicalizes() {
        let b = builder(Method::GET, "/dataPartition/get")
            .add_param_any("flag", true)
            .add_param_any("signed", -5_i32)
            .add_param_any("unsigned", 5_u16)
            .add_param_any("ratio", 0.25_f32)
            .add_param_any("name", "vol1");

        check!(b.params()["flag"] == "true");
        check!(b.params()["signed"] == "-5");
        check!(b.params()["unsigned"] == "5");
        check!(b.params()["ratio"] == "0.250000");
        check!(b.params()["name"] == "vol1");
        check!(b.error().is_none());
    }

    #[test]
    fn unsupported_param_leaves_params_and_sets_error() {
        let b = builder(Method::POST, "/x")
            .add_param("keep", "me")
            .add_param_any("bad", json!({"nested": true}));

        check!(b.params().len() == 1);
        check!(!b.params().contains_key("bad"));
        let_assert!(Some(Error::UnsupportedParamType { key, value }) = b.error());
        check!(key == "bad");
        check!(value == r#"{"nested":true}"#);
    }

    #[test]
    fn first_error_wins() {
        let b = builder(Method::POST, "/x")
            .add_param_any("first", json!([1]))
            .add_param_any("second", json!(null))
            .with_body(Json(Unencodable));

        let_assert!(Some(Error::UnsupportedParamType { key, .. }) = b.error());
        check!(key == "first");
    }

    #[test]
    fn repeated_keys_overwrite() {
        let b = builder(Method::GET, "/x")
            .add_param("k", "1")
            .add_param("k", "2")
            .add_param_any("k", 3_u8)
            .add_header("X-Id", "a")
            .add_header("X-Id", "b");

        check!(b.params().len() == 1);
        check!(b.params()["k"] == "3");
        check!(b.headers().len() == 2);
        check!(b.headers()["X-Id"] == "b");
    }

    #[test]
    fn identity_header_can_be_overridden() {
        let b = builder(Method::GET, "/x").add_header(USER_AGENT, "custom/1.0");
        check!(b.headers().len() == 1);
        check!(b.headers()[USER_AGENT] == "custom/1.0");
    }

    #[test]
    fn with_params_applies_all_pairs_despite_failure() {
        let b = builder(Method::GET, "/admin/createVol").with_params([
            ("name", json!("vol1")),
            ("bad", json!({"a": 1})),
            ("capacity", json!(30)),
            ("name", json!("vol2")),
        ]);

        check!(b.params().len() == 2);
        check!(b.params()["name"] == "vol2");
        check!(b.params()["capacity"] == "30");
        let_assert!(Some(Error::UnsupportedParamType { key, .. }) = b.error());
        check!(key == "bad");
    }

    #[test]
    fn with_params_mixed_scalars() {
        let b = builder(Method::GET, "/x").with_params([
            ("replicas", ParamValue::from(3_u8)),
            ("followerRead", ParamValue::from(false)),
            ("owner", ParamValue::from("cfs")),
        ]);

        check!(b.params()["replicas"] == "3");
        check!(b.params()["followerRead"] == "false");
        check!(b.params()["owner"] == "cfs");
        check!(b.error().is_none());
    }

    #[test]
    fn with_headers_merges_base_then_pairs() {
        let base = HashMap::from([
            ("Accept".to_string(), "*/*".to_string()),
            ("X-Trace".to_string(), "base".to_string()),
        ]);
        let b = builder(Method::GET, "/x").with_headers(&base, &["X-Trace", "added", "X-New", "1"]);

        check!(b.headers().len() == 4);
        check!(b.headers()["Accept"] == "*/*");
        check!(b.headers()["X-Trace"] == "added");
        check!(b.headers()["X-New"] == "1");
    }

    // Quirk: an unpaired trailing element is dropped, no error is recorded.
    #[test]
    fn with_headers_drops_odd_trailing_element() {
        let b = builder(Method::GET, "/x").with_headers(&HashMap::new(), &["X-A", "1", "X-B"]);

        check!(b.headers().len() == 2);
        check!(b.headers()["X-A"] == "1");
        check!(!b.headers().contains_key("X-B"));
        check!(b.error().is_none());
    }

    #[test]
    fn with_body_raw_bytes_verbatim() {
        let raw = vec![0_u8, 159, 146, 150];
        let b = builder(Method::POST, "/x").with_body(raw.clone());
        check!(b.body().map(|body| body.to_vec()) == Some(raw));
    }

    #[test]
    fn with_body_structured_uses_json() {
        #[derive(serde::Serialize)]
        struct Quota {
            path: String,
            max_files: u64,
        }

        let quota = Quota {
            path: "/a".to_string(),
            max_files: 10,
        };
        let expected = crate::to_json(&quota).expect("encode");
        let b = builder(Method::POST, "/quota/create").with_body(Json(&quota));

        check!(b.body() == Some(&expected));
        check!(b.error().is_none());
    }

    #[test]
    fn with_body_failure_keeps_previous_body() {
        let b = builder(Method::POST, "/x")
            .set_body(Bytes::from_static(b"previous"))
            .with_body(Json(Unencodable));

        check!(b.body() == Some(&Bytes::from_static(b"previous")));
        let_assert!(Some(Error::BodySerialization(_)) = b.error());
        check!(b.error().is_some_and(Error::is_deferred));
    }

    #[test]
    fn set_body_replaces_wholesale() {
        let b = builder(Method::PUT, "/x")
            .set_body("first")
            .set_body(Bytes::from_static(b"second"));
        check!(b.body() == Some(&Bytes::from_static(b"second")));
    }

    #[test]
    fn build_surfaces_deferred_error() {
        let result = builder(Method::POST, "/x")
            .add_param_any("bad", json!([]))
            .add_param("good", "1")
            .build();

        let_assert!(Err(Error::UnsupportedParamType { key, .. }) = result);
        check!(key == "bad");
    }

    #[test]
    fn build_hands_over_every_part() {
        let request = builder(Method::DELETE, "/vol/delete")
            .add_param("name", "vol1")
            .add_header("X-Auth", "k")
            .set_body("payload")
            .build()
            .expect("build");

        check!(request.param("name") == Some("vol1"));
        check!(request.header("X-Auth") == Some("k"));
        check!(request.header(USER_AGENT) == Some("cubefs-sdk/3.5.0 (commit a1b2c3)"));

        let (method, path, params, headers, body) = request.into_parts();
        check!(method == Method::DELETE);
        check!(path == "/vol/delete");
        check!(params.len() == 1);
        check!(headers.len() == 2);
        check!(body == Some(Bytes::from_static(b"payload")));
    }
}
