use std::path::PathBuf;

use thiserror::Error;

use crate::app_config::AppConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

const DEFAULT_SEARCH_BASE_URL: &str = "https://places.googleapis.com/v1/places:searchText";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse. No variable is hard
/// required here: the API key is only needed by the collect stage, which
/// checks for it itself.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Core parsing logic decoupled from the actual environment so it can be
/// tested with a pure `HashMap` lookup, without touching the process env.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_f64 = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<f64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let api_key = lookup("PLACEDEX_API_KEY").ok();
    let search_base_url = or_default("PLACEDEX_SEARCH_BASE_URL", DEFAULT_SEARCH_BASE_URL);
    let credentials_path = PathBuf::from(or_default(
        "PLACEDEX_CREDENTIALS_PATH",
        "./service_account.json",
    ));
    let index_path = PathBuf::from(or_default("PLACEDEX_INDEX_PATH", "./place_index.json.gz"));
    let collection = or_default("PLACEDEX_COLLECTION", "locations");

    let request_timeout_secs = parse_u64("PLACEDEX_REQUEST_TIMEOUT_SECS", "30")?;
    let max_retries = parse_u32("PLACEDEX_MAX_RETRIES", "5")?;
    let page_delay_secs = parse_u64("PLACEDEX_PAGE_DELAY_SECS", "2")?;
    let query_delay_min_ms = parse_u64("PLACEDEX_QUERY_DELAY_MIN_MS", "300")?;
    let query_delay_max_ms = parse_u64("PLACEDEX_QUERY_DELAY_MAX_MS", "700")?;
    let search_radius_m = parse_f64("PLACEDEX_SEARCH_RADIUS_M", "1250")?;
    let grid_steps = parse_u32("PLACEDEX_GRID_STEPS", "8")?;
    let batch_limit = parse_usize("PLACEDEX_BATCH_LIMIT", "500")?;

    if query_delay_max_ms < query_delay_min_ms {
        return Err(ConfigError::InvalidEnvVar {
            var: "PLACEDEX_QUERY_DELAY_MAX_MS".to_string(),
            reason: format!("must be >= PLACEDEX_QUERY_DELAY_MIN_MS ({query_delay_min_ms})"),
        });
    }

    Ok(AppConfig {
        api_key,
        search_base_url,
        credentials_path,
        index_path,
        collection,
        request_timeout_secs,
        max_retries,
        page_delay_secs,
        query_delay_min_ms,
        query_delay_max_ms,
        search_radius_m,
        grid_steps,
        batch_limit,
    })
}
