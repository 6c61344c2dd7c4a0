use crate::cache::{CacheBackend, CacheConfig, CacheKeyGenerator, MemoryCache, ResponseCache};
use crate::client::core::{OpenSeaClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::client::inflight::InflightGate;
use crate::client::policy::RateLimitPolicy;
use crate::transport::{HttpTransport, Transport};
use crate::{Error, ErrorContext, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Builder for [`OpenSeaClient`].
///
/// Everything is fixed at build time; a client never changes configuration
/// afterwards.
///
/// ```rust
/// use opensea_client::client::OpenSeaClientBuilder;
/// use std::time::Duration;
///
/// let client = OpenSeaClientBuilder::new()
///     .api_key("my-key")
///     .timeout(Duration::from_secs(30))
///     .build()
///     .unwrap();
/// assert_eq!(client.base_url(), "https://api.opensea.io/api/v1");
/// ```
pub struct OpenSeaClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Duration,
    transport: Option<Arc<dyn Transport>>,
    http_client: Option<reqwest::Client>,
    cache_backend: Option<Arc<dyn CacheBackend>>,
    cache_config: CacheConfig,
    key_namespace: Option<String>,
    policy: RateLimitPolicy,
    coalesce_in_flight: bool,
    cancellation_token: Option<CancellationToken>,
}

impl OpenSeaClientBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            transport: None,
            http_client: None,
            cache_backend: None,
            cache_config: CacheConfig::default(),
            key_namespace: None,
            policy: RateLimitPolicy::default(),
            coalesce_in_flight: false,
            cancellation_token: None,
        }
    }

    /// Sent as `X-API-KEY` on every request.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the upstream root (other environments, mock servers).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Budget for the live-attempt loop of one call. Zero disables the check.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a custom transport (recording/replay, scripted tests).
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Use a preconfigured `reqwest` client for the default transport.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Plug in a cache backend. Defaults to a 10 000 entry [`MemoryCache`].
    pub fn cache_backend(mut self, backend: Arc<dyn CacheBackend>) -> Self {
        self.cache_backend = Some(backend);
        self
    }

    pub fn cache_config(mut self, config: CacheConfig) -> Self {
        self.cache_config = config;
        self
    }

    /// Namespace of generated cache keys (default `opensea-req`).
    pub fn key_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.key_namespace = Some(namespace.into());
        self
    }

    pub fn rate_limit_policy(mut self, policy: RateLimitPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Serialize concurrent calls that share a fingerprint so only one of
    /// them reaches the network.
    pub fn coalesce_in_flight(mut self, enable: bool) -> Self {
        self.coalesce_in_flight = enable;
        self
    }

    /// Token used by the resource accessors; cancelling it aborts their calls.
    pub fn cancellation_token(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    pub fn build(self) -> Result<OpenSeaClient> {
        let api_key = self
            .api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                Error::configuration_with_context(
                    "API key is required",
                    ErrorContext::new()
                        .with_field_path("api_key")
                        .with_source("client_builder"),
                )
            })?;

        let base_url = normalize_base_url(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;

        let transport: Arc<dyn Transport> = match (self.transport, self.http_client) {
            (Some(t), _) => t,
            (None, Some(client)) => Arc::new(HttpTransport::from_client(client)),
            (None, None) => Arc::new(HttpTransport::new(None).map_err(|e| {
                Error::configuration(format!("Failed to create HTTP client: {}", e))
            })?),
        };

        let backend = self
            .cache_backend
            .unwrap_or_else(|| Arc::new(MemoryCache::default()));
        let cache = ResponseCache::new(self.cache_config, backend);

        let mut keygen = CacheKeyGenerator::new();
        if let Some(ns) = self.key_namespace {
            keygen = keygen.with_namespace(ns);
        }

        Ok(OpenSeaClient {
            base_url,
            api_key,
            transport,
            cache,
            keygen,
            timeout: self.timeout,
            policy: self.policy,
            inflight: self.coalesce_in_flight.then(InflightGate::new),
            cancellation_token: self.cancellation_token.unwrap_or_default(),
        })
    }
}

impl Default for OpenSeaClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let parsed = url::Url::parse(raw).map_err(|e| {
        Error::configuration_with_context(
            format!("invalid base URL: {}", e),
            ErrorContext::new().with_field_path("base_url").with_details(raw),
        )
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(Error::configuration_with_context(
            "base URL must use http or https",
            ErrorContext::new().with_field_path("base_url").with_details(raw),
        ));
    }
    Ok(raw.trim_end_matches('/').to_string())
}
