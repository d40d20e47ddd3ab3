//! Shared fixtures for integration tests
//!
//! Provides a wiremock-backed stand-in for the iNaturalist taxa API and
//! helpers to build a `TaxaService` pointed at it.

#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use TaxonBuddy::{Settings, TaxaService};

/// Mock iNaturalist API server for testing
pub struct TaxaMockServer {
    pub server: MockServer,
}

impl TaxaMockServer {
    /// Create a new mock taxa API server
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Settings pointed at the mock server
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::default();
        settings.bot.token = "12345:test_token".to_string();
        settings.taxa.api_url = self.server.uri();
        settings.taxa.timeout_seconds = 2;
        settings
    }

    /// A `TaxaService` talking to the mock server
    pub fn service(&self) -> TaxaService {
        TaxaService::new(self.settings()).expect("failed to build TaxaService")
    }

    /// Mock a successful `/taxa` search, asserting the exact query parameters
    pub async fn mock_search(&self, query: &str, page: u32, body: Value) {
        Mock::given(method("GET"))
            .and(path("/taxa"))
            .and(query_param("q", query))
            .and(query_param("page", page.to_string()))
            .and(query_param("per_page", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Mock a `/taxa` response with the given HTTP status
    pub async fn mock_status(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path("/taxa"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Mock a successful `/taxa` response with an arbitrary body
    pub async fn mock_body(&self, body: Value) {
        Mock::given(method("GET"))
            .and(path("/taxa"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mock a `/taxa` response delayed by `delay_ms`
    pub async fn mock_delayed(&self, delay_ms: u64, body: Value) {
        Mock::given(method("GET"))
            .and(path("/taxa"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(body)
                    .set_delay(std::time::Duration::from_millis(delay_ms)),
            )
            .mount(&self.server)
            .await;
    }

    /// Number of requests the mock server received
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }
}

/// Build a taxon JSON record as the API returns it
pub fn taxon_json(id: u64, name: &str, rank: &str, photo_url: Option<&str>) -> Value {
    let mut taxon = json!({
        "id": id,
        "name": name,
        "rank": rank,
        "is_active": true,
        "observations_count": 100
    });
    if let Some(url) = photo_url {
        taxon["default_photo"] = json!({ "url": url });
    }
    taxon
}

/// Build a `/taxa` response body
pub fn taxa_response_json(results: Vec<Value>, total_results: u64) -> Value {
    json!({
        "total_results": total_results,
        "page": 1,
        "per_page": 5,
        "results": results
    })
}
