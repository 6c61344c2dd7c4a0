//! Response caching module.
//!
//! Every live request outcome is persisted under a fingerprint of the
//! request, so repeated lookups are served without touching the network.
//!
//! ## Key Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`ResponseCache`] | Typed record storage with expiries and statistics |
//! | [`CacheConfig`] | Expiries, size limit and key prefix |
//! | [`CacheBackend`] | Trait for implementing custom cache backends |
//! | [`MemoryCache`] | In-memory LRU cache implementation |
//! | [`NullCache`] | No-op cache for disabling caching |
//! | [`CacheKeyGenerator`] | Request fingerprinting |
//! | [`CachedResponse`] | Stored record: status, body, error marker |
//!
//! ## Example
//!
//! ```rust
//! use opensea_client::cache::{CacheConfig, MemoryCache, ResponseCache};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let backend = Arc::new(MemoryCache::new(1000));
//! let config = CacheConfig::new().with_ttl(Duration::from_secs(600));
//! let cache = ResponseCache::new(config, backend);
//! assert_eq!(cache.backend_name(), "memory");
//! ```
//!
//! ## Expiry
//!
//! Success and ordinary failure records live for [`DEFAULT_CACHE_EXPIRY`].
//! A 404 is remembered for [`DEFAULT_CACHE_NOT_FOUND_EXPIRY`]. Records with
//! status 401 or 429 are stored but never short-circuit a lookup.

mod backend;
mod key;
mod manager;
mod record;

pub use backend::{CacheBackend, MemoryCache, NullCache, DEFAULT_CACHE_SIZE};
pub use key::{CacheKey, CacheKeyGenerator, DEFAULT_KEY_NAMESPACE};
pub use manager::{
    CacheConfig, CacheStats, ResponseCache, DEFAULT_CACHE_EXPIRY, DEFAULT_CACHE_NOT_FOUND_EXPIRY,
};
pub use record::CachedResponse;
