//! Input record for one point of interest, as returned by the search API.

/// A place as collected from the search API, before scoring.
///
/// Optional fields default to empty/neutral values rather than failing:
/// the search API omits reviews, summaries, price levels, and coordinates
/// for many places.
#[derive(Debug, Clone, Default)]
pub struct Place {
    /// Stable place identifier used for cross-cell deduplication.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Formatted street address.
    pub address: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    /// Ordered category tags (e.g. `"night_club"`, `"bar"`).
    pub tags: Vec<String>,
    /// Review body texts, most relevant first.
    pub reviews: Vec<String>,
    /// Editorial summary text; empty when the API has none.
    pub summary: String,
    /// Raw price-level string from the API (e.g. `"PRICE_LEVEL_MODERATE"`).
    pub price_level: Option<String>,
    /// Weekly hours as one description line per day, or `None` when unknown.
    pub weekday_hours: Option<Vec<String>>,
}
