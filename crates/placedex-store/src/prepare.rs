//! In-place enrichment of index entries before upload.

use std::collections::BTreeMap;

use placedex_core::{IndexEntry, OpenHours, TimeSlot};

use crate::geohash;
use crate::hours::day_slots;

/// Geohash precision for the proximity index (~5 m cells).
const GEOHASH_PRECISION: usize = 9;

/// Normalize one entry for upload: rewrite raw weekly hour lines into the
/// per-day slot map and attach the geohash.
///
/// The `"Closed"` check happens here, per line, before the slot parser runs;
/// unknown hours collapse to an empty map. Entries already normalized pass
/// through untouched.
pub fn normalize_entry(entry: &mut IndexEntry) {
    if let (Some(lat), Some(lng)) = (entry.lat, entry.lng) {
        entry.geohash = Some(geohash::encode(lat, lng, GEOHASH_PRECISION));
    }

    entry.open_hours = match &entry.open_hours {
        OpenHours::Weekly(lines) => OpenHours::ByDay(normalize_hours(lines)),
        OpenHours::Sentinel(_) => OpenHours::ByDay(BTreeMap::new()),
        OpenHours::ByDay(days) => OpenHours::ByDay(days.clone()),
    };
}

/// Key each line by its day prefix; `"Closed"` days get an empty slot list.
fn normalize_hours(lines: &[String]) -> BTreeMap<String, Vec<TimeSlot>> {
    let mut days = BTreeMap::new();
    for line in lines {
        let day_name = line.split(':').next().unwrap_or(line).trim().to_owned();
        let slots = if line.contains("Closed") {
            Vec::new()
        } else {
            day_slots(line)
        };
        days.insert(day_name, slots);
    }
    days
}
