//! iNaturalist taxa search service
//!
//! This service wraps the iNaturalist `/taxa` search endpoint: HTTP client
//! setup, typed response parsing and error classification. Every call goes
//! straight to the API; results are not cached or retried.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::config::settings::Settings;
use crate::models::TaxaResponse;
use crate::utils::errors::{Result, TaxaError, TaxonBuddyError};

/// Client for the iNaturalist taxa search API
#[derive(Debug, Clone)]
pub struct TaxaService {
    client: Client,
    settings: Settings,
}

impl TaxaService {
    /// Create a new TaxaService instance
    pub fn new(settings: Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.taxa.timeout_seconds))
            .user_agent("TaxonBuddy-Bot/1.0")
            .build()
            .map_err(TaxonBuddyError::Http)?;

        Ok(Self { client, settings })
    }

    /// Search taxa by name.
    ///
    /// Issues exactly one `GET {api_url}/taxa` request with `q`, `page` and
    /// the configured `per_page`. `page` is 1-based.
    pub async fn search(&self, query: &str, page: u32) -> Result<TaxaResponse> {
        let url = format!("{}/taxa", self.settings.taxa.api_url);

        debug!(query = query, page = page, url = %url, "Making taxa API request");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", query),
                ("page", &page.to_string()),
                ("per_page", &self.settings.taxa.per_page.to_string()),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TaxonBuddyError::Taxa(TaxaError::Timeout)
                } else if e.is_connect() {
                    TaxonBuddyError::Taxa(TaxaError::ServiceUnavailable)
                } else {
                    TaxonBuddyError::Taxa(TaxaError::RequestFailed(e.to_string()))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(TaxonBuddyError::Taxa(TaxaError::RequestFailed(format!(
                "HTTP {}: {}",
                status, error_text
            ))));
        }

        let taxa_response: TaxaResponse = response
            .json()
            .await
            .map_err(|e| TaxonBuddyError::Taxa(TaxaError::InvalidResponse(e.to_string())))?;

        debug!(
            query = query,
            page = page,
            result_count = taxa_response.results.len(),
            total_results = taxa_response.total_results,
            "Taxa API request completed"
        );

        Ok(taxa_response)
    }

    /// Configured page size
    pub fn per_page(&self) -> u32 {
        self.settings.taxa.per_page
    }
}
