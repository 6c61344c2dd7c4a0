//! Request descriptor and executor response.

use crate::cache::{CacheKey, CacheKeyGenerator};
use crate::Result;
use bytes::Bytes;
use reqwest::Method;
use serde::Serialize;

/// Immutable description of one upstream call: method, path relative to the
/// client's base URL, query parameters and JSON body.
///
/// ```rust
/// use opensea_client::client::ApiRequest;
///
/// let req = ApiRequest::get("/collection/doodles-official/stats")
///     .with_query("format", "json");
/// assert_eq!(req.encoded_query(), "format=json");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<Bytes>,
    scope: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        let path = path.into();
        let path = if path.starts_with('/') {
            path
        } else {
            format!("/{}", path)
        };
        Self {
            method,
            path,
            query: Vec::new(),
            body: None,
            scope: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Attach a JSON body. Serialization happens once, here.
    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = Some(Bytes::from(serde_json::to_vec(body)?));
        Ok(self)
    }

    /// Extra cache-key component that is never sent upstream.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// Form-encoded query, pairs sorted by key then value.
    pub fn encoded_query(&self) -> String {
        let mut pairs: Vec<&(String, String)> = self.query.iter().collect();
        pairs.sort();
        let mut ser = url::form_urlencoded::Serializer::new(String::new());
        for (k, v) in pairs {
            ser.append_pair(k, v);
        }
        ser.finish()
    }

    /// Endpoint URL without the query string.
    pub fn endpoint_url(&self, base_url: &str) -> String {
        format!("{}{}", base_url, self.path)
    }

    /// Full URL as sent on the wire.
    pub fn url(&self, base_url: &str) -> String {
        let query = self.encoded_query();
        if query.is_empty() {
            self.endpoint_url(base_url)
        } else {
            format!("{}?{}", self.endpoint_url(base_url), query)
        }
    }

    pub fn fingerprint(&self, generator: &CacheKeyGenerator, base_url: &str) -> CacheKey {
        generator.generate(
            self.method.as_str(),
            &self.endpoint_url(base_url),
            &self.encoded_query(),
            self.body.as_deref().unwrap_or_default(),
            self.scope.as_deref(),
        )
    }
}

/// Where a successful result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseSource {
    Network,
    Cache,
}

/// Successful executor outcome.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub data: T,
    pub source: ResponseSource,
}

impl<T> ApiResponse<T> {
    pub fn is_cached(&self) -> bool {
        self.source == ResponseSource::Cache
    }

    pub fn into_data(self) -> T {
        self.data
    }
}
