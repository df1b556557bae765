//! HTTP client for the places text-search endpoint.

use std::time::Duration;

use reqwest::Client;
use serde_json::json;

use crate::error::PlacesError;
use crate::grid::GridPoint;
use crate::types::SearchResponse;

const DEFAULT_BASE_URL: &str = "https://places.googleapis.com/v1/places:searchText";

/// Field mask limiting the response to the fields the index builder consumes.
const FIELD_MASK: &str = "places.id,places.displayName,places.location,places.types,\
places.reviews,places.editorialSummary,places.priceLevel,places.formattedAddress,\
nextPageToken,places.regularOpeningHours";

/// Maximum response-body bytes echoed into an `UnexpectedStatus` error.
const ERROR_BODY_LIMIT: usize = 200;

/// Client for the places text-search API.
///
/// One call fetches one result page; pagination and retry policy live in
/// [`crate::pager::SearchPager`]. Use [`PlacesClient::new`] for production or
/// [`PlacesClient::with_base_url`] to point at a mock server in tests.
pub struct PlacesClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl PlacesClient {
    /// Creates a client pointed at the production search endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom endpoint URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("placedex/0.1 (place-index-collection)")
            .build()?;
        Ok(Self {
            http,
            api_key: api_key.to_owned(),
            base_url: base_url.to_owned(),
        })
    }

    /// Fetches one page of text-search results biased to a circle around
    /// `center`.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::RateLimited`]: HTTP 429; the caller backs off.
    /// - [`PlacesError::UnexpectedStatus`]: any other non-2xx status, with a
    ///   snippet of the response body.
    /// - [`PlacesError::Http`]: network or TLS failure.
    /// - [`PlacesError::Deserialize`]: response body is not the expected shape.
    pub async fn search_page(
        &self,
        query: &str,
        center: GridPoint,
        radius_m: f64,
        page_token: Option<&str>,
    ) -> Result<SearchResponse, PlacesError> {
        let mut payload = json!({
            "textQuery": query,
            "locationBias": {
                "circle": {
                    "center": { "latitude": center.lat, "longitude": center.lng },
                    "radius": radius_m,
                }
            },
        });
        if let Some(token) = page_token {
            payload["pageToken"] = json!(token);
        }

        let response = self
            .http
            .post(&self.base_url)
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", FIELD_MASK)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(PlacesError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body = body.chars().take(ERROR_BODY_LIMIT).collect();
            return Err(PlacesError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<SearchResponse>(&body).map_err(|e| PlacesError::Deserialize {
            context: format!("search page for query \"{query}\""),
            source: e,
        })
    }
}
