use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlacesError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("rate limited by the places API (HTTP 429)")]
    RateLimited,

    #[error("unexpected HTTP status {status} from the places API: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("pagination limit reached for query \"{query}\": exceeded {max_pages} pages")]
    PaginationLimit { query: String, max_pages: usize },
}
