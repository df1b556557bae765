//! Parses free-text weekly-hours lines into structured time slots.
//!
//! Input lines look like `"Monday: 9:00 AM – 5:00 PM"`, with slots separated
//! by commas and a dash (hyphen, en-dash, or em-dash) between open and close
//! times. Times may carry narrow or thin no-break spaces before the AM/PM
//! marker.
//!
//! ## AM/PM inheritance
//!
//! A first time string without an explicit marker inherits the marker of the
//! second, so the compact American `"9 – 5 PM"` reads as 9 PM – 5 PM and
//! yields `{open: 2100, close: 1700}` with open > close. This matches the
//! source data pipeline and is preserved deliberately; consumers must accept
//! inverted pairs (overnight spans produce them legitimately too).

use std::sync::OnceLock;

use regex::Regex;

use placedex_core::TimeSlot;

fn time_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(\d+):?(\d+)?\s*(?:(AM|PM))?").expect("valid time regex"))
}

/// Parse the slots of one day line, e.g. `"Monday: 9:00 AM – 5:00 PM"`.
///
/// Returns an empty sequence for lines without a colon (malformed) and skips
/// slots that do not split into exactly two parseable time strings. `"Closed"`
/// days are handled by the caller before this parser runs (see
/// [`crate::prepare::normalize_entry`]).
#[must_use]
pub fn day_slots(line: &str) -> Vec<TimeSlot> {
    let Some((_, time_part)) = line.split_once(':') else {
        return Vec::new();
    };

    let mut slots = Vec::new();
    for slot in time_part.split(',') {
        if slot.contains("Open 24 hours") {
            slots.push(TimeSlot {
                open: 0,
                close: 2400,
            });
            continue;
        }

        let parts: Vec<&str> = slot.split(['–', '-', '—']).collect();
        if parts.len() != 2 {
            continue;
        }
        if let Some(slot) = parse_span(parts[0], parts[1]) {
            slots.push(slot);
        }
    }
    slots
}

/// Parse an open/close pair, applying AM/PM inheritance from the close time
/// to a marker-less open time.
fn parse_span(open_str: &str, close_str: &str) -> Option<TimeSlot> {
    let open_str = normalize_spaces(open_str);
    let close_str = normalize_spaces(close_str);

    let open_caps = time_re().captures(&open_str)?;
    let close_caps = time_re().captures(&close_str)?;

    let close_marker = close_caps.get(3).map(|m| m.as_str().to_ascii_uppercase());
    let open_marker = open_caps
        .get(3)
        .map(|m| m.as_str().to_ascii_uppercase())
        .or_else(|| close_marker.clone());

    let open = hhmm(&open_caps, open_marker.as_deref())?;
    let close = hhmm(&close_caps, close_marker.as_deref())?;
    Some(TimeSlot { open, close })
}

/// HHMM-encode one captured time with its effective AM/PM marker.
///
/// Rejects anything past `2400` after the marker adjustment, so a
/// contradictory input like `"13:00 PM"` yields no slot instead of an
/// out-of-range one.
fn hhmm(caps: &regex::Captures<'_>, marker: Option<&str>) -> Option<u16> {
    let mut hour: u16 = caps.get(1)?.as_str().parse().ok()?;
    let minute: u16 = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    match marker {
        Some("PM") if hour != 12 => hour = hour.checked_add(12)?,
        Some("AM") if hour == 12 => hour = 0,
        _ => {}
    }
    let encoded = hour.checked_mul(100)?.checked_add(minute)?;
    (encoded <= 2400).then_some(encoded)
}

/// The API renders a narrow no-break space (U+202F) or thin space (U+2009)
/// before AM/PM markers.
fn normalize_spaces(s: &str) -> String {
    s.replace(['\u{202f}', '\u{2009}'], " ").trim().to_owned()
}
