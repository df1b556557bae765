use std::path::PathBuf;

/// Runtime configuration for the collect and load stages, built from
/// environment variables by [`crate::config::load_app_config`].
#[derive(Clone)]
pub struct AppConfig {
    /// Search API key. Required by `collect`, unused by `load`.
    pub api_key: Option<String>,
    /// Base URL of the places text-search endpoint.
    pub search_base_url: String,
    /// Path to the service-account credential JSON for the document store.
    pub credentials_path: PathBuf,
    /// Path of the compressed index file written by `collect` and read by `load`.
    pub index_path: PathBuf,
    /// Document-store collection the load stage writes into.
    pub collection: String,
    pub request_timeout_secs: u64,
    /// Additional attempts after the first failure on a rate-limited request.
    pub max_retries: u32,
    /// Fixed delay between result pages of one query, per API guidance.
    pub page_delay_secs: u64,
    /// Randomized inter-query delay window, milliseconds.
    pub query_delay_min_ms: u64,
    pub query_delay_max_ms: u64,
    /// Location-bias circle radius in meters.
    pub search_radius_m: f64,
    /// Grid is `grid_steps × grid_steps` cells over the configured bounds.
    pub grid_steps: u32,
    /// Per-commit document ceiling of the store; writes are chunked to this.
    pub batch_limit: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("search_base_url", &self.search_base_url)
            .field("credentials_path", &self.credentials_path)
            .field("index_path", &self.index_path)
            .field("collection", &self.collection)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("max_retries", &self.max_retries)
            .field("page_delay_secs", &self.page_delay_secs)
            .field("query_delay_min_ms", &self.query_delay_min_ms)
            .field("query_delay_max_ms", &self.query_delay_max_ms)
            .field("search_radius_m", &self.search_radius_m)
            .field("grid_steps", &self.grid_steps)
            .field("batch_limit", &self.batch_limit)
            .finish()
    }
}
