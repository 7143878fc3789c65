//! HTTP client for the disease.sh statistics API.
//!
//! This module provides the client used by both providers, wrapping the
//! `/all`, `/countries/{query}`, and `/countries` endpoints.

mod provider;

pub use provider::{provider_for_scope, CountryProvider, StatsProvider, WorldProvider};

use crate::models::{CountrySummary, StatsSnapshot};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

pub const STATS_BASE_URL: &str = "https://disease.sh/v3/covid-19";

/// Request timeout applied to every API call so a hung upstream resolves to
/// an error instead of leaving the screen loading forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Error type for statistics API operations
#[derive(Debug)]
pub enum ProviderError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// JSON deserialization failed
    Json(serde_json::Error),
    /// Server returned an error status
    ServerError { status: u16, message: String },
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderError::Http(e) => write!(f, "HTTP error: {}", e),
            ProviderError::Json(e) => write!(f, "JSON error: {}", e),
            ProviderError::ServerError { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
        }
    }
}

impl std::error::Error for ProviderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProviderError::Http(e) => Some(e),
            ProviderError::Json(e) => Some(e),
            ProviderError::ServerError { .. } => None,
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        ProviderError::Http(e)
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(e: serde_json::Error) -> Self {
        ProviderError::Json(e)
    }
}

/// Wire shape of one `/countries` list entry; only the name and ISO code
/// are kept.
#[derive(Debug, Deserialize)]
struct CountryEntry {
    country: String,
    #[serde(rename = "countryInfo", default)]
    country_info: Option<CountryInfo>,
}

#[derive(Debug, Deserialize)]
struct CountryInfo {
    #[serde(rename = "iso2", default)]
    iso2: Option<String>,
}

/// Client for the disease.sh statistics API.
///
/// Provides snapshot fetches for the global aggregate and individual
/// countries, plus the country list backing the search screen.
#[derive(Debug, Clone)]
pub struct StatsApiClient {
    /// Base URL for the statistics API
    pub base_url: String,
    /// Reusable HTTP client
    client: Client,
}

impl StatsApiClient {
    /// Create a new StatsApiClient with the default base URL.
    pub fn new() -> Self {
        Self::with_base_url(STATS_BASE_URL.to_string())
    }

    /// Create a new StatsApiClient with a custom base URL.
    ///
    /// Panics if the HTTP client cannot be constructed; the request timeout
    /// is not negotiable, a client without it would hang on a dead upstream.
    pub fn with_base_url(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");
        Self { base_url, client }
    }

    /// Fetch the whole-world aggregate snapshot.
    ///
    /// Sends a GET request to `/all`.
    pub async fn fetch_world(&self) -> Result<StatsSnapshot, ProviderError> {
        let url = format!("{}/all", self.base_url);
        self.fetch_snapshot(&url).await
    }

    /// Fetch the snapshot for a single country.
    ///
    /// Sends a GET request to `/countries/{query}` where `query` is an ISO
    /// code or country name.
    pub async fn fetch_country(&self, query: &str) -> Result<StatsSnapshot, ProviderError> {
        let url = format!("{}/countries/{}", self.base_url, query);
        self.fetch_snapshot(&url).await
    }

    /// Fetch the list of countries the API reports data for.
    ///
    /// Sends a GET request to `/countries`; used to populate the search
    /// screen.
    pub async fn fetch_countries(&self) -> Result<Vec<CountrySummary>, ProviderError> {
        let url = format!("{}/countries", self.base_url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ProviderError::ServerError { status, message });
        }

        let entries: Vec<CountryEntry> = response.json().await?;
        Ok(entries
            .into_iter()
            .map(|entry| CountrySummary {
                name: entry.country,
                code: entry.country_info.and_then(|info| info.iso2),
            })
            .collect())
    }

    async fn fetch_snapshot(&self, url: &str) -> Result<StatsSnapshot, ProviderError> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ProviderError::ServerError { status, message });
        }

        let snapshot = response.json::<StatsSnapshot>().await?;
        Ok(snapshot)
    }
}

impl Default for StatsApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_api_client_new() {
        let client = StatsApiClient::new();
        assert_eq!(client.base_url, STATS_BASE_URL);
    }

    #[test]
    fn test_stats_api_client_with_base_url() {
        let custom_url = "http://localhost:8080".to_string();
        let client = StatsApiClient::with_base_url(custom_url.clone());
        assert_eq!(client.base_url, custom_url);
    }

    #[test]
    fn test_provider_error_display_server_error() {
        let err = ProviderError::ServerError {
            status: 404,
            message: "Country not found".to_string(),
        };
        let display = format!("{}", err);
        assert!(display.contains("404"));
        assert!(display.contains("Country not found"));
    }

    #[test]
    fn test_provider_error_from_json() {
        let json_err = serde_json::from_str::<StatsSnapshot>("not json").unwrap_err();
        let err: ProviderError = json_err.into();
        assert!(matches!(err, ProviderError::Json(_)));
    }

    #[test]
    fn test_country_entry_deserializes_without_iso() {
        let json = r#"{"country": "Nowhere", "countryInfo": {"iso2": null}}"#;
        let entry: CountryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.country, "Nowhere");
        assert!(entry.country_info.unwrap().iso2.is_none());
    }

    #[tokio::test]
    async fn test_fetch_world_with_invalid_server() {
        let client = StatsApiClient::with_base_url("http://127.0.0.1:1".to_string());
        let result = client.fetch_world().await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_fetch_country_with_invalid_server() {
        let client = StatsApiClient::with_base_url("http://127.0.0.1:1".to_string());
        let result = client.fetch_country("TL").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_fetch_countries_with_invalid_server() {
        let client = StatsApiClient::with_base_url("http://127.0.0.1:1".to_string());
        let result = client.fetch_countries().await;
        assert!(result.is_err());
    }
}
