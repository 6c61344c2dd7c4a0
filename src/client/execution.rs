//! Request execution: cache lookup, live attempt loop, cache population.

use crate::cache::{CacheKey, CachedResponse};
use crate::client::core::OpenSeaClient;
use crate::client::request::{ApiRequest, ApiResponse, ResponseSource};
use crate::transport::TransportRequest;
use crate::{Error, ErrorContext, Result};
use serde::de::DeserializeOwned;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

impl OpenSeaClient {
    /// Execute a request under the client's own cancellation token.
    ///
    /// A fresh success is decoded into `T` and cached; a cached success is
    /// returned without touching the network. See [`execute_with_cancel`]
    /// for the full contract.
    ///
    /// [`execute_with_cancel`]: OpenSeaClient::execute_with_cancel
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: &ApiRequest,
    ) -> Result<ApiResponse<T>> {
        let token = self.cancellation_token.clone();
        self.execute_with_cancel(request, &token).await
    }

    /// Execute a request, aborting promptly when `cancel` fires.
    ///
    /// Lookup order:
    /// 1. A cached 2xx record that decodes into `T` is returned as is.
    /// 2. A cached 401 or 429 record is ignored and the request goes live.
    /// 3. Any other cached record (404 included) is returned as a failure.
    ///
    /// Live attempts back off linearly on 429 until the retry budget is
    /// spent. Every terminal outcome is written back to the cache; cache
    /// failures never surface to the caller.
    pub async fn execute_with_cancel<T: DeserializeOwned>(
        &self,
        request: &ApiRequest,
        cancel: &CancellationToken,
    ) -> Result<ApiResponse<T>> {
        let key = request.fingerprint(&self.keygen, &self.base_url);
        let endpoint = request.endpoint_url(&self.base_url);
        let request_id = Uuid::new_v4().to_string();
        let span = info_span!(
            "opensea_request",
            request_id = %request_id,
            method = %request.method(),
            endpoint = %endpoint,
        );

        async {
            let _slot = match &self.inflight {
                Some(gate) => tokio::select! {
                    biased;
                    _ = cancel.cancelled() => return Err(cancelled(&endpoint)),
                    guard = gate.acquire(key.as_str()) => Some(guard),
                },
                None => None,
            };

            if let Some(hit) = self.lookup_cached::<T>(&key, &endpoint).await? {
                return Ok(hit);
            }
            self.fetch_live(request, &key, &endpoint, cancel).await
        }
        .instrument(span)
        .await
    }

    /// `Ok(None)` means "go to the network".
    async fn lookup_cached<T: DeserializeOwned>(
        &self,
        key: &CacheKey,
        endpoint: &str,
    ) -> Result<Option<ApiResponse<T>>> {
        let record = match self.cache.get(key).await {
            Ok(Some(record)) => record,
            Ok(None) => return Ok(None),
            Err(e) => {
                debug!(error = %e, "cache read failed, treating as miss");
                return Ok(None);
            }
        };

        if record.requires_revalidation() {
            debug!(status = record.status, "cached record needs revalidation");
            return Ok(None);
        }

        if record.is_success() {
            return match serde_json::from_slice::<T>(&record.body) {
                Ok(data) => {
                    debug!(status = record.status, "cache hit");
                    Ok(Some(ApiResponse {
                        status: record.status,
                        data,
                        source: ResponseSource::Cache,
                    }))
                }
                Err(e) => {
                    debug!(error = %e, "cached body does not decode, refetching");
                    Ok(None)
                }
            };
        }

        debug!(status = record.status, "serving cached failure");
        let body: &[u8] = match (&record.error, record.body.is_empty()) {
            (Some(error), true) => error.as_bytes(),
            _ => &record.body,
        };
        Err(Error::remote(
            record.status,
            body,
            ErrorContext::new()
                .with_endpoint(endpoint)
                .with_source("cache"),
        ))
    }

    async fn fetch_live<T: DeserializeOwned>(
        &self,
        request: &ApiRequest,
        key: &CacheKey,
        endpoint: &str,
        cancel: &CancellationToken,
    ) -> Result<ApiResponse<T>> {
        let url = request.url(&self.base_url);
        let started = Instant::now();
        let mut retries: u32 = 0;

        loop {
            let elapsed = started.elapsed();
            if !self.timeout.is_zero() && elapsed > self.timeout {
                return Err(Error::Timeout {
                    elapsed,
                    context: ErrorContext::new()
                        .with_endpoint(endpoint)
                        .with_details(format!("gave up after {} retries", retries)),
                });
            }

            info!(attempt = retries + 1, "sending request");
            let outgoing = self.transport_request(request, &url);
            let response = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(cancelled(endpoint)),
                res = self.transport.send(outgoing) => res?,
            };
            if cancel.is_cancelled() {
                return Err(cancelled(endpoint));
            }

            let status = response.status;
            match status {
                200..=299 => {
                    let data = serde_json::from_slice::<T>(&response.body)
                        .map_err(|source| Error::Decode { status, source })?;
                    self.store(key, CachedResponse::new(status, response.body.to_vec()))
                        .await;
                    return Ok(ApiResponse {
                        status,
                        data,
                        source: ResponseSource::Network,
                    });
                }
                429 => {
                    if let Some(delay) = self.policy.next_backoff(retries) {
                        retries += 1;
                        warn!(
                            retries,
                            delay_ms = delay.as_millis() as u64,
                            "rate limited, backing off"
                        );
                        tokio::select! {
                            biased;
                            _ = cancel.cancelled() => return Err(cancelled(endpoint)),
                            _ = tokio::time::sleep(delay) => {}
                        }
                        continue;
                    }
                    warn!(retries, "rate limit retry budget exhausted");
                    self.store(
                        key,
                        CachedResponse::new(status, response.body.to_vec())
                            .with_error("rate limited"),
                    )
                    .await;
                    return Err(Error::RateLimited {
                        retries,
                        context: ErrorContext::new()
                            .with_endpoint(endpoint)
                            .with_status_code(status),
                    });
                }
                401 => {
                    self.store(
                        key,
                        CachedResponse::new(status, response.body.to_vec())
                            .with_error("unauthorized"),
                    )
                    .await;
                    return Err(Error::Unauthorized {
                        context: ErrorContext::new()
                            .with_endpoint(endpoint)
                            .with_status_code(status),
                    });
                }
                404 => {
                    if let Err(e) = self.cache.set_not_found(key).await {
                        debug!(error = %e, "failed to cache not-found record");
                    }
                    return Err(Error::remote(
                        status,
                        b"not found",
                        ErrorContext::new().with_endpoint(endpoint),
                    ));
                }
                _ => {
                    self.store(key, CachedResponse::new(status, response.body.to_vec()))
                        .await;
                    return Err(Error::remote(
                        status,
                        &response.body,
                        ErrorContext::new().with_endpoint(endpoint),
                    ));
                }
            }
        }
    }

    fn transport_request(&self, request: &ApiRequest, url: &str) -> TransportRequest {
        TransportRequest {
            method: request.method().clone(),
            url: url.to_string(),
            headers: vec![
                ("Accept", "application/json".to_string()),
                ("Content-Type", "application/json".to_string()),
                ("X-API-KEY", self.api_key.clone()),
            ],
            body: request.body().cloned(),
        }
    }

    async fn store(&self, key: &CacheKey, record: CachedResponse) {
        if let Err(e) = self.cache.set(key, &record).await {
            debug!(error = %e, status = record.status, "failed to cache response");
        }
    }
}

fn cancelled(endpoint: &str) -> Error {
    Error::Cancelled {
        context: ErrorContext::new().with_endpoint(endpoint),
    }
}
