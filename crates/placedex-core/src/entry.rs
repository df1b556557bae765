//! Scored output record and the operating-hours representations it carries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One open/close span within a day, HHMM-coded (`930` = 9:30, `1730` = 17:30).
///
/// `close` may be `2400` for a midnight end. `open > close` is representable:
/// overnight spans exist in source data, and the AM/PM-inheritance rule in the
/// hours parser can also produce them (see `placedex-store::hours`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub open: u16,
    pub close: u16,
}

/// Operating hours in either the raw or the normalized representation.
///
/// Collection stores the raw weekday description lines (or the `"Unknown"`
/// sentinel when the API had none); the load stage rewrites entries in place
/// to the per-day slot map. Untagged: the three shapes are distinct on the
/// wire (array of strings, map, bare string).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OpenHours {
    /// One description line per day, e.g. `"Monday: 9:00 AM – 5:00 PM"`.
    Weekly(Vec<String>),
    /// Normalized day-name → ordered open/close slots.
    ByDay(BTreeMap<String, Vec<TimeSlot>>),
    /// The `"Unknown"` string sentinel written when the API had no hours.
    Sentinel(String),
}

impl OpenHours {
    pub const UNKNOWN: &'static str = "Unknown";

    #[must_use]
    pub fn unknown() -> Self {
        OpenHours::Sentinel(Self::UNKNOWN.to_owned())
    }

    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, OpenHours::Sentinel(s) if s == Self::UNKNOWN)
    }
}

/// A scored place, grouped in the index by its `(sociability, physicality)`
/// pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub name: String,
    pub address: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    /// `-1..=4`; `-1` means unknown.
    pub price_level: i32,
    /// Clamped to `[1, 10]`.
    pub sociability: f64,
    /// Clamped to `[1, 10]`.
    pub physicality: f64,
    pub open_hours: OpenHours,
    /// Up to 7 category tags, generic stoplist terms removed.
    pub tags: Vec<String>,
    /// Precision-9 geohash of the coordinates; set by the load stage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geohash: Option<String>,
}

impl IndexEntry {
    /// Composite grouping key, `"{sociability},{physicality}"`.
    #[must_use]
    pub fn score_key(&self) -> String {
        format!("{},{}", self.sociability, self.physicality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_hours_weekly_roundtrips_as_string_array() {
        let hours = OpenHours::Weekly(vec!["Monday: Closed".to_owned()]);
        let json = serde_json::to_string(&hours).unwrap();
        assert_eq!(json, r#"["Monday: Closed"]"#);
        let back: OpenHours = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hours);
    }

    #[test]
    fn open_hours_unknown_roundtrips_as_bare_string() {
        let json = serde_json::to_string(&OpenHours::unknown()).unwrap();
        assert_eq!(json, r#""Unknown""#);
        let back: OpenHours = serde_json::from_str(&json).unwrap();
        assert!(back.is_unknown());
    }

    #[test]
    fn stray_string_sentinel_is_not_unknown() {
        let hours: OpenHours = serde_json::from_str(r#""sometimes""#).unwrap();
        assert_eq!(hours, OpenHours::Sentinel("sometimes".to_owned()));
        assert!(!hours.is_unknown());
    }

    #[test]
    fn open_hours_by_day_roundtrips_as_map() {
        let mut days = BTreeMap::new();
        days.insert(
            "Monday".to_owned(),
            vec![TimeSlot {
                open: 900,
                close: 1700,
            }],
        );
        let hours = OpenHours::ByDay(days);
        let json = serde_json::to_string(&hours).unwrap();
        assert_eq!(json, r#"{"Monday":[{"open":900,"close":1700}]}"#);
        let back: OpenHours = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hours);
    }

    #[test]
    fn score_key_formats_integral_scores_without_trailing_zeros() {
        let entry = IndexEntry {
            name: String::new(),
            address: String::new(),
            lat: None,
            lng: None,
            price_level: -1,
            sociability: 7.0,
            physicality: 3.5,
            open_hours: OpenHours::unknown(),
            tags: Vec::new(),
            geohash: None,
        };
        assert_eq!(entry.score_key(), "7,3.5");
    }
}
