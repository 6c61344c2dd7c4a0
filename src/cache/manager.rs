//! Cache manager.

use super::backend::CacheBackend;
use super::key::CacheKey;
use super::record::CachedResponse;
use crate::Result;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Expiry for ordinary records (successes and non-404 failures).
pub const DEFAULT_CACHE_EXPIRY: Duration = Duration::from_secs(60 * 60);
/// Expiry for negative (404) records.
pub const DEFAULT_CACHE_NOT_FOUND_EXPIRY: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub default_ttl: Duration,
    pub not_found_ttl: Duration,
    pub enabled: bool,
    pub max_entry_size: usize,
    pub key_prefix: Option<String>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl: DEFAULT_CACHE_EXPIRY,
            not_found_ttl: DEFAULT_CACHE_NOT_FOUND_EXPIRY,
            enabled: true,
            max_entry_size: 10 * 1024 * 1024,
            key_prefix: None,
        }
    }
}

impl CacheConfig {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.default_ttl = ttl;
        self
    }
    pub fn with_not_found_ttl(mut self, ttl: Duration) -> Self {
        self.not_found_ttl = ttl;
        self
    }
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
    pub fn with_max_entry_size(mut self, bytes: usize) -> Self {
        self.max_entry_size = bytes;
        self
    }
    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub sets: u64,
    pub errors: u64,
}

impl CacheStats {
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

#[derive(Default)]
struct AtomicStats {
    hits: AtomicU64,
    misses: AtomicU64,
    sets: AtomicU64,
    errors: AtomicU64,
}

impl AtomicStats {
    fn to_stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            sets: self.sets.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
        }
    }
}

/// Typed view over a [`CacheBackend`] storing [`CachedResponse`] records.
///
/// Records are encoded as JSON. A stored value that no longer decodes is
/// reported as a miss and counted as an error.
pub struct ResponseCache {
    config: CacheConfig,
    backend: Arc<dyn CacheBackend>,
    stats: AtomicStats,
}

impl ResponseCache {
    pub fn new(config: CacheConfig, backend: Arc<dyn CacheBackend>) -> Self {
        Self {
            config,
            backend,
            stats: AtomicStats::default(),
        }
    }

    pub async fn get(&self, key: &CacheKey) -> Result<Option<CachedResponse>> {
        if !self.config.enabled {
            return Ok(None);
        }
        let prefixed = self.prefix_key(key);
        match self.backend.get(&prefixed).await {
            Ok(Some(data)) => match serde_json::from_slice(&data) {
                Ok(record) => {
                    self.stats.hits.fetch_add(1, Ordering::Relaxed);
                    Ok(Some(record))
                }
                Err(_) => {
                    self.stats.errors.fetch_add(1, Ordering::Relaxed);
                    self.stats.misses.fetch_add(1, Ordering::Relaxed);
                    Ok(None)
                }
            },
            Ok(None) => {
                self.stats.misses.fetch_add(1, Ordering::Relaxed);
                Ok(None)
            }
            Err(e) => {
                self.stats.errors.fetch_add(1, Ordering::Relaxed);
                Err(e)
            }
        }
    }

    pub async fn set(&self, key: &CacheKey, record: &CachedResponse) -> Result<()> {
        self.set_with_ttl(key, record, self.config.default_ttl).await
    }

    pub async fn set_with_ttl(
        &self,
        key: &CacheKey,
        record: &CachedResponse,
        ttl: Duration,
    ) -> Result<()> {
        if !self.config.enabled {
            return Ok(());
        }
        let data = serde_json::to_vec(record)?;
        if data.len() > self.config.max_entry_size {
            return Ok(());
        }
        let prefixed = self.prefix_key(key);
        match self.backend.set(&prefixed, &data, ttl).await {
            Ok(()) => {
                self.stats.sets.fetch_add(1, Ordering::Relaxed);
                Ok(())
            }
            Err(e) => {
                self.stats.errors.fetch_add(1, Ordering::Relaxed);
                Err(e)
            }
        }
    }

    /// Store a negative record with the not-found expiry.
    pub async fn set_not_found(&self, key: &CacheKey) -> Result<()> {
        self.set_with_ttl(key, &CachedResponse::not_found(), self.config.not_found_ttl)
            .await
    }

    pub async fn delete(&self, key: &CacheKey) -> Result<bool> {
        if !self.config.enabled {
            return Ok(false);
        }
        self.backend.delete(&self.prefix_key(key)).await
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }
    pub fn stats(&self) -> CacheStats {
        self.stats.to_stats()
    }
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    fn prefix_key(&self, key: &CacheKey) -> CacheKey {
        if let Some(ref p) = self.config.key_prefix {
            CacheKey::new(format!("{}:{}", p, key.hash))
        } else {
            key.clone()
        }
    }
}
