//! Deterministic transport and cache doubles for executor tests

use async_trait::async_trait;
use bytes::Bytes;
use opensea_client::cache::{CacheBackend, CacheKey, MemoryCache};
use opensea_client::transport::{Transport, TransportError, TransportRequest, TransportResponse};
use opensea_client::{Error, OpenSeaClient, OpenSeaClientBuilder};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const TEST_BASE_URL: &str = "https://api.test.local/api/v1";
pub const TEST_API_KEY: &str = "test-key";

enum Step {
    Respond(u16, Bytes),
    Fail(String),
    Hang,
}

/// Transport that replays a fixed script of outcomes, one per `send`.
#[derive(Default)]
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Step>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, status: u16, body: &str) -> &Self {
        self.push(Step::Respond(status, Bytes::copy_from_slice(body.as_bytes())))
    }

    pub fn respond_times(&self, times: usize, status: u16, body: &str) -> &Self {
        for _ in 0..times {
            self.respond(status, body);
        }
        self
    }

    pub fn fail(&self, message: &str) -> &Self {
        self.push(Step::Fail(message.to_string()))
    }

    /// Next `send` never completes.
    pub fn hang(&self) -> &Self {
        self.push(Step::Hang)
    }

    pub fn attempts(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn push(&self, step: Step) -> &Self {
        self.script.lock().unwrap().push_back(step);
        self
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        let step = self.script.lock().unwrap().pop_front();
        match step {
            Some(Step::Respond(status, body)) => Ok(TransportResponse::new(status, body)),
            Some(Step::Fail(message)) => Err(TransportError::Other(message)),
            Some(Step::Hang) => std::future::pending().await,
            None => Err(TransportError::Other("script exhausted".to_string())),
        }
    }
}

/// Memory cache that records every write and can be told to fail.
pub struct RecordingCache {
    inner: MemoryCache,
    writes: Mutex<Vec<(String, Duration)>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl RecordingCache {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: MemoryCache::new(128),
            writes: Mutex::new(Vec::new()),
            fail_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
        })
    }

    pub fn fail_reads(&self) {
        self.fail_reads.store(true, Ordering::SeqCst);
    }

    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    /// Expiries of successful writes, in order.
    pub fn write_ttls(&self) -> Vec<Duration> {
        self.writes.lock().unwrap().iter().map(|(_, ttl)| *ttl).collect()
    }

    pub fn write_count(&self) -> usize {
        self.writes.lock().unwrap().len()
    }

    pub async fn raw(&self, key: &CacheKey) -> Option<serde_json::Value> {
        let bytes = self.inner.get(key).await.unwrap()?;
        Some(serde_json::from_slice(&bytes).unwrap())
    }
}

#[async_trait]
impl CacheBackend for RecordingCache {
    async fn get(&self, key: &CacheKey) -> opensea_client::Result<Option<Vec<u8>>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(Error::configuration("cache store unavailable"));
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &CacheKey, value: &[u8], ttl: Duration) -> opensea_client::Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Error::configuration("cache store unavailable"));
        }
        self.writes.lock().unwrap().push((key.to_string(), ttl));
        self.inner.set(key, value, ttl).await
    }

    async fn delete(&self, key: &CacheKey) -> opensea_client::Result<bool> {
        self.inner.delete(key).await
    }

    async fn exists(&self, key: &CacheKey) -> opensea_client::Result<bool> {
        self.inner.exists(key).await
    }

    async fn clear(&self) -> opensea_client::Result<()> {
        self.inner.clear().await
    }

    async fn len(&self) -> opensea_client::Result<usize> {
        self.inner.len().await
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

/// Client wired to the given doubles, with the timeout check disabled.
pub fn scripted_client(
    transport: Arc<ScriptedTransport>,
    cache: Arc<RecordingCache>,
) -> OpenSeaClientBuilder {
    OpenSeaClient::builder()
        .api_key(TEST_API_KEY)
        .base_url(TEST_BASE_URL)
        .timeout(Duration::ZERO)
        .transport(transport)
        .cache_backend(cache)
}
