use super::{Transport, TransportError, TransportRequest, TransportResponse};
use async_trait::async_trait;
use std::time::Duration;

/// `reqwest`-backed transport.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build with pooled-connection defaults.
    ///
    /// `request_timeout` bounds a single round trip; the executor's own
    /// timeout covers the whole retry sequence.
    pub fn new(request_timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder()
            .pool_max_idle_per_host(32)
            .pool_idle_timeout(Some(Duration::from_secs(90)));
        if let Some(timeout) = request_timeout.filter(|t| !t.is_zero()) {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { client })
    }

    /// Wrap a preconfigured client (proxies, custom TLS, recording middleware).
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let mut req = self.client.request(request.method, &request.url);
        for (name, value) in &request.headers {
            req = req.header(*name, value);
        }
        if let Some(body) = request.body {
            req = req.body(body);
        }

        let resp = req.send().await?;
        let status = resp.status().as_u16();
        let headers = resp.headers().clone();
        let body = resp.bytes().await?;
        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}
