//! Client for the places text-search API.
//!
//! Wraps `reqwest` with typed error handling, grid-cell enumeration for
//! location-biased sweeps, and a paginated fetch state machine with
//! exponential backoff on rate limits.

pub mod client;
pub mod error;
pub mod grid;
pub mod pager;
pub mod types;

pub use client::PlacesClient;
pub use error::PlacesError;
pub use grid::{GridConfig, GridPoint};
pub use pager::{PagerPolicy, SearchPager};
pub use types::{ApiPlace, SearchResponse};
