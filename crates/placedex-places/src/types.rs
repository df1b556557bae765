//! Wire types for the places text-search endpoint.
//!
//! Every optional field carries `#[serde(default)]`: the API omits reviews,
//! summaries, price levels, hours, and even coordinates for many places, and
//! a missing field must never fail the whole page.

use serde::Deserialize;

use placedex_core::Place;

/// Top-level response from `POST places:searchText`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub places: Vec<ApiPlace>,
    /// Opaque token for the next result page; absent on the last page.
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// One place as returned by the search endpoint, field-mask limited.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPlace {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub display_name: Option<LocalizedText>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub location: Option<LatLng>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub editorial_summary: Option<LocalizedText>,
    #[serde(default)]
    pub price_level: Option<String>,
    #[serde(default)]
    pub regular_opening_hours: Option<OpeningHours>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LocalizedText {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Default, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub text: Option<LocalizedText>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHours {
    #[serde(default)]
    pub weekday_descriptions: Option<Vec<String>>,
}

impl ApiPlace {
    /// Convert the wire shape into the core [`Place`] record, defaulting
    /// every missing field to an empty/neutral value.
    #[must_use]
    pub fn into_place(self) -> Place {
        Place {
            id: self.id,
            name: self.display_name.map(|t| t.text).unwrap_or_default(),
            address: self.formatted_address.unwrap_or_default(),
            lat: self.location.as_ref().map(|l| l.latitude),
            lng: self.location.as_ref().map(|l| l.longitude),
            tags: self.types,
            reviews: self
                .reviews
                .into_iter()
                .filter_map(|r| r.text.map(|t| t.text))
                .collect(),
            summary: self.editorial_summary.map(|t| t.text).unwrap_or_default(),
            price_level: self.price_level,
            weekday_hours: self
                .regular_opening_hours
                .and_then(|h| h.weekday_descriptions),
        }
    }
}
