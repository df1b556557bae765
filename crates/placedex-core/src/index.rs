//! The score-grouped place index and its on-disk JSON shape.
//!
//! ## Wire format
//!
//! A flat JSON object mapping composite `"{sociability},{physicality}"` keys
//! to arrays of entries, plus a `"total_count"` key holding a one-element
//! array with the total processed count:
//!
//! ```json
//! {
//!   "7,3.5": [ { "name": "...", ... } ],
//!   "total_count": [412]
//! }
//! ```
//!
//! The sentinel key shares the namespace with the group keys, so serde is
//! implemented by hand rather than derived.

use std::collections::BTreeMap;

use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::entry::IndexEntry;

const TOTAL_COUNT_KEY: &str = "total_count";

/// Aggregate of scored entries keyed by their score pair.
///
/// Deduplication by place identifier happens upstream (the collector tracks
/// seen ids across all grid cells); the index itself only groups and counts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceIndex {
    groups: BTreeMap<String, Vec<IndexEntry>>,
    total: u64,
}

impl PlaceIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry under its score key and bumps the processed count.
    pub fn insert(&mut self, entry: IndexEntry) {
        self.groups.entry(entry.score_key()).or_default().push(entry);
        self.total += 1;
    }

    /// Total number of entries processed into the index.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn groups(&self) -> impl Iterator<Item = (&str, &[IndexEntry])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Mutable walk over every entry, used by the load stage to rewrite
    /// `open_hours` and attach geohashes in place.
    pub fn entries_mut(&mut self) -> impl Iterator<Item = &mut IndexEntry> {
        self.groups.values_mut().flatten()
    }

    pub fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.groups.values().flatten()
    }
}

impl Serialize for PlaceIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len() + 1))?;
        for (key, entries) in &self.groups {
            map.serialize_entry(key, entries)?;
        }
        map.serialize_entry(TOTAL_COUNT_KEY, &[self.total])?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for PlaceIndex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
        let mut groups = BTreeMap::new();
        let mut total = 0u64;
        for (key, value) in raw {
            if key == TOTAL_COUNT_KEY {
                let counts: Vec<u64> =
                    serde_json::from_value(value).map_err(de::Error::custom)?;
                total = counts.first().copied().unwrap_or(0);
            } else {
                let entries: Vec<IndexEntry> =
                    serde_json::from_value(value).map_err(de::Error::custom)?;
                groups.insert(key, entries);
            }
        }
        Ok(PlaceIndex { groups, total })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::OpenHours;

    fn entry(name: &str, soc: f64, phys: f64) -> IndexEntry {
        IndexEntry {
            name: name.to_owned(),
            address: "1 Main St".to_owned(),
            lat: Some(33.7),
            lng: Some(-117.8),
            price_level: -1,
            sociability: soc,
            physicality: phys,
            open_hours: OpenHours::unknown(),
            tags: vec!["bar".to_owned()],
            geohash: None,
        }
    }

    #[test]
    fn insert_groups_by_score_pair() {
        let mut index = PlaceIndex::new();
        index.insert(entry("a", 7.0, 3.0));
        index.insert(entry("b", 7.0, 3.0));
        index.insert(entry("c", 9.5, 3.0));

        assert_eq!(index.total(), 3);
        let groups: Vec<_> = index.groups().collect();
        assert_eq!(groups.len(), 2);
        let (key, entries) = &groups[0];
        assert_eq!(*key, "7,3");
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn serializes_with_total_count_sentinel() {
        let mut index = PlaceIndex::new();
        index.insert(entry("a", 7.0, 3.0));

        let value = serde_json::to_value(&index).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("7,3"));
        assert_eq!(obj["total_count"], serde_json::json!([1]));
    }

    #[test]
    fn roundtrips_through_json() {
        let mut index = PlaceIndex::new();
        index.insert(entry("a", 7.0, 3.0));
        index.insert(entry("b", 8.5, 1.0));

        let json = serde_json::to_string(&index).unwrap();
        let back: PlaceIndex = serde_json::from_str(&json).unwrap();
        assert_eq!(back, index);
    }

    #[test]
    fn deserializes_empty_index() {
        let index: PlaceIndex = serde_json::from_str(r#"{"total_count":[0]}"#).unwrap();
        assert_eq!(index.total(), 0);
        assert!(index.is_empty());
    }
}
