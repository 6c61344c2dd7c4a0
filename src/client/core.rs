use crate::cache::{CacheKeyGenerator, CacheStats, ResponseCache};
use crate::client::inflight::InflightGate;
use crate::client::policy::RateLimitPolicy;
use crate::transport::Transport;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Default upstream endpoint root.
pub const DEFAULT_BASE_URL: &str = "https://api.opensea.io/api/v1";
/// Default budget for the live-attempt portion of a call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Cache-first marketplace client.
///
/// Safe to share across tasks (`Arc<OpenSeaClient>`); every call runs on the
/// caller's task and the only shared state is the cache backend and the
/// transport.
pub struct OpenSeaClient {
    pub(crate) base_url: String,
    pub(crate) api_key: String,
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) cache: ResponseCache,
    pub(crate) keygen: CacheKeyGenerator,
    pub(crate) timeout: Duration,
    pub(crate) policy: RateLimitPolicy,
    pub(crate) inflight: Option<InflightGate>,
    pub(crate) cancellation_token: CancellationToken,
}

impl OpenSeaClient {
    pub fn builder() -> crate::client::builder::OpenSeaClientBuilder {
        crate::client::builder::OpenSeaClientBuilder::new()
    }

    /// Client with default transport, in-memory cache and timeouts.
    pub fn new(api_key: impl Into<String>) -> crate::Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn rate_limit_policy(&self) -> &RateLimitPolicy {
        &self.policy
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Cancel every call issued through this client's own token, now and later.
    pub fn cancel_all_requests(&self) {
        self.cancellation_token.cancel();
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancellation_token
    }
}

impl std::fmt::Debug for OpenSeaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenSeaClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("cache", &self.cache.backend_name())
            .field("timeout", &self.timeout)
            .field("policy", &self.policy)
            .field("coalesce_in_flight", &self.inflight.is_some())
            .finish()
    }
}
