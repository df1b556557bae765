//! Builds one scored [`IndexEntry`] from one [`Place`].

use placedex_core::{IndexEntry, OpenHours, Place};

use crate::lexicon::{CategoryWeights, Lexicon, TextRules};
use crate::scorer::lexicon_shift;

/// Prior used when no category tag matches the sociability table.
const DEFAULT_SOCIAL_PRIOR: f64 = 5.0;

/// Prior used when no category tag matches the physicality table.
const DEFAULT_PHYSICAL_PRIOR: f64 = 3.0;

/// Physicality ceiling for sedentary categories.
const SEDENTARY_CAP: f64 = 3.0;

/// Sociability floor for high-social categories.
const VIBE_FLOOR: f64 = 7.0;

/// Maximum category tags carried into the output entry, applied before the
/// stoplist filter (slice-then-filter order).
const MAX_TAGS: usize = 7;

/// Sentinel for missing or unmapped price levels.
const PRICE_UNKNOWN: i32 = -1;

/// Full set of scoring tables, passed explicitly to [`build_index_entry`].
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub soc_lexicon: Lexicon,
    pub phys_lexicon: Lexicon,
    pub rules: TextRules,
    pub weights: CategoryWeights,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            soc_lexicon: Lexicon::sociability(),
            phys_lexicon: Lexicon::physicality(),
            rules: TextRules::default(),
            weights: CategoryWeights::default(),
        }
    }
}

/// Derive the scored index entry for one place.
///
/// Each score starts from the best-matching category prior (or the default
/// when nothing matches), shifted by the lexicon scan over the combined
/// summary-plus-reviews text, clamped to `[1, 10]`. The sedentary cap and
/// vibe floor then override: a library can never score above 3 physicality,
/// a bar never below 7 sociability.
#[must_use]
pub fn build_index_entry(place: &Place, config: &ScoringConfig) -> IndexEntry {
    let text = combined_text(place);

    let social_prior =
        max_weight(&place.tags, |t| config.weights.social(t)).unwrap_or(DEFAULT_SOCIAL_PRIOR);
    let mut soc_score = (social_prior + lexicon_shift(&text, &config.soc_lexicon, &config.rules))
        .min(10.0)
        .max(1.0);

    let physical_prior =
        max_weight(&place.tags, |t| config.weights.physical(t)).unwrap_or(DEFAULT_PHYSICAL_PRIOR);
    let mut phys_score = (physical_prior
        + lexicon_shift(&text, &config.phys_lexicon, &config.rules))
    .min(10.0)
    .max(1.0);

    if place.tags.iter().any(|t| config.weights.is_sedentary(t)) {
        phys_score = phys_score.min(SEDENTARY_CAP);
    }
    if place.tags.iter().any(|t| config.weights.is_high_social(t)) {
        soc_score = soc_score.max(VIBE_FLOOR);
    }

    let tags = place
        .tags
        .iter()
        .take(MAX_TAGS)
        .filter(|t| !config.weights.is_stoplisted(t))
        .cloned()
        .collect();

    let open_hours = match &place.weekday_hours {
        Some(lines) => OpenHours::Weekly(lines.clone()),
        None => OpenHours::unknown(),
    };

    IndexEntry {
        name: place.name.clone(),
        address: place.address.clone(),
        lat: place.lat,
        lng: place.lng,
        price_level: price_level_code(place.price_level.as_deref()),
        sociability: soc_score,
        physicality: phys_score,
        open_hours,
        tags,
        geohash: None,
    }
}

/// Editorial summary plus all review texts, space-joined and lower-cased.
fn combined_text(place: &Place) -> String {
    let mut text = place.summary.clone();
    for review in &place.reviews {
        text.push(' ');
        text.push_str(review);
    }
    text.to_lowercase()
}

fn max_weight<F>(tags: &[String], table: F) -> Option<f64>
where
    F: Fn(&str) -> Option<f64>,
{
    tags.iter()
        .filter_map(|t| table(t))
        .fold(None, |best, w| match best {
            Some(b) if b >= w => Some(b),
            _ => Some(w),
        })
}

/// Map the API price-level string to the integer code.
///
/// Missing and unmapped values both collapse to the `-1` sentinel.
#[must_use]
pub fn price_level_code(raw: Option<&str>) -> i32 {
    match raw {
        Some("PRICE_LEVEL_FREE") => 0,
        Some("PRICE_LEVEL_INEXPENSIVE") => 1,
        Some("PRICE_LEVEL_MODERATE") => 2,
        Some("PRICE_LEVEL_EXPENSIVE") => 3,
        Some("PRICE_LEVEL_VERY_EXPENSIVE") => 4,
        Some(_) | None => PRICE_UNKNOWN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_with_tags(tags: &[&str]) -> Place {
        Place {
            id: "p1".to_owned(),
            name: "Test Place".to_owned(),
            address: "1 Main St".to_owned(),
            lat: Some(33.68),
            lng: Some(-117.82),
            tags: tags.iter().map(|&t| (*t).to_owned()).collect(),
            ..Place::default()
        }
    }

    #[test]
    fn untagged_place_gets_default_priors() {
        let entry = build_index_entry(&place_with_tags(&[]), &ScoringConfig::default());
        assert!((entry.sociability - 5.0).abs() < f64::EPSILON);
        assert!((entry.physicality - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn best_matching_category_weight_wins() {
        // restaurant (6) vs bar (9): the max applies, then the bar vibe floor
        // is a no-op at 9.
        let entry = build_index_entry(
            &place_with_tags(&["restaurant", "bar"]),
            &ScoringConfig::default(),
        );
        assert!((entry.sociability - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn library_physicality_capped_regardless_of_text() {
        let mut place = place_with_tags(&["library"]);
        place.reviews = vec!["extremely strenuous workout climb sweat hiking".to_owned()];
        let entry = build_index_entry(&place, &ScoringConfig::default());
        assert!(
            entry.physicality <= 3.0,
            "sedentary cap violated: {}",
            entry.physicality
        );
    }

    #[test]
    fn bar_sociability_floored_regardless_of_text() {
        let mut place = place_with_tags(&["bar"]);
        place.reviews = vec!["quiet empty solo".to_owned()];
        let entry = build_index_entry(&place, &ScoringConfig::default());
        assert!(
            entry.sociability >= 7.0,
            "vibe floor violated: {}",
            entry.sociability
        );
    }

    #[test]
    fn scores_stay_within_one_and_ten() {
        let mut place = place_with_tags(&["night_club"]);
        place.summary = "packed tournament league social busy".to_owned();
        let entry = build_index_entry(&place, &ScoringConfig::default());
        assert!(entry.sociability <= 10.0);

        let mut place = place_with_tags(&["library"]);
        place.summary = "quiet solo empty".to_owned();
        let entry = build_index_entry(&place, &ScoringConfig::default());
        assert!(entry.sociability >= 1.0);
    }

    #[test]
    fn review_text_shifts_the_prior() {
        let mut place = place_with_tags(&["restaurant"]);
        place.reviews = vec!["Always busy on weekends.".to_owned()];
        let entry = build_index_entry(&place, &ScoringConfig::default());
        // restaurant prior 6 + busy shift 1.0
        assert!((entry.sociability - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn summary_and_reviews_are_combined() {
        let mut place = place_with_tags(&[]);
        place.summary = "A busy spot".to_owned();
        place.reviews = vec!["great for social evenings".to_owned()];
        let entry = build_index_entry(&place, &ScoringConfig::default());
        // busy (2) + social (3) = 5 → shift 2.5 over prior 5
        assert!((entry.sociability - 7.5).abs() < f64::EPSILON);
    }

    #[test]
    fn tags_truncated_to_seven_before_stoplist_filter() {
        // Ten raw tags; the stoplist entries sit inside the first seven, so
        // the output is the first seven minus the two stoplisted ones.
        let place = place_with_tags(&[
            "bar",
            "store",
            "night_club",
            "point_of_interest",
            "pub",
            "cafe",
            "restaurant",
            "museum",
            "park",
            "zoo",
        ]);
        let entry = build_index_entry(&place, &ScoringConfig::default());
        assert_eq!(entry.tags, vec!["bar", "night_club", "pub", "cafe", "restaurant"]);
    }

    #[test]
    fn stoplisted_tag_beyond_first_seven_is_never_seen() {
        let place = place_with_tags(&[
            "bar", "pub", "cafe", "museum", "park", "zoo", "spa", "establishment",
        ]);
        let entry = build_index_entry(&place, &ScoringConfig::default());
        assert_eq!(entry.tags.len(), 7);
    }

    #[test]
    fn price_levels_map_to_integer_codes() {
        assert_eq!(price_level_code(Some("PRICE_LEVEL_FREE")), 0);
        assert_eq!(price_level_code(Some("PRICE_LEVEL_MODERATE")), 2);
        assert_eq!(price_level_code(Some("PRICE_LEVEL_VERY_EXPENSIVE")), 4);
        assert_eq!(price_level_code(Some("PRICE_UNKNOWN")), -1);
        assert_eq!(price_level_code(Some("something-new")), -1);
        assert_eq!(price_level_code(None), -1);
    }

    #[test]
    fn missing_hours_produce_the_unknown_sentinel() {
        let entry = build_index_entry(&place_with_tags(&[]), &ScoringConfig::default());
        assert!(entry.open_hours.is_unknown());
    }

    #[test]
    fn present_hours_are_carried_raw() {
        let mut place = place_with_tags(&[]);
        place.weekday_hours = Some(vec!["Monday: Closed".to_owned()]);
        let entry = build_index_entry(&place, &ScoringConfig::default());
        assert_eq!(
            entry.open_hours,
            placedex_core::OpenHours::Weekly(vec!["Monday: Closed".to_owned()])
        );
    }
}
