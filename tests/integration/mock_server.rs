//! Mock HTTP server setup for integration tests

use mockito::{Matcher, Mock, Server, ServerGuard};
use opensea_client::cache::CacheBackend;
use opensea_client::{OpenSeaClient, OpenSeaClientBuilder};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: Arc<Mutex<ServerGuard>>,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = format!("{}/api/v1", server.url());
        Self {
            server: Arc::new(Mutex::new(server)),
            base_url,
        }
    }

    /// Builder pointed at the mock server.
    pub fn client_builder(&self, api_key: &str) -> OpenSeaClientBuilder {
        OpenSeaClient::builder()
            .api_key(api_key)
            .base_url(&self.base_url)
    }

    pub fn create_test_client(
        &self,
        api_key: &str,
        cache: Arc<dyn CacheBackend>,
    ) -> opensea_client::Result<OpenSeaClient> {
        self.client_builder(api_key).cache_backend(cache).build()
    }

    /// Create a mock for a JSON response that must see the expected headers
    /// and be hit exactly `hits` times
    pub async fn mock_json_response(
        &self,
        path: &str,
        api_key: &str,
        status: u16,
        body: &str,
        hits: usize,
    ) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("GET", format!("/api/v1{}", path).as_str())
            .match_header("x-api-key", api_key)
            .match_header("accept", "application/json")
            .match_header("content-type", "application/json")
            .match_query(Matcher::Any)
            .with_status(status as usize)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(hits)
            .create_async()
            .await
    }

    /// Mock that must never be hit
    pub async fn mock_unreachable(&self) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await
    }
}
