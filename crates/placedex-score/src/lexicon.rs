//! Immutable scoring tables: keyword lexicons, negation/modifier rules, and
//! category weight maps.
//!
//! Everything here is configuration passed explicitly into the scorer and
//! builder rather than ambient state. The `Default` impls carry the
//! production tables; tests build smaller ones through the same constructors.

use std::collections::{BTreeMap, BTreeSet};

/// Sociability keyword weights. Positive words signal crowd density.
const SOC_LEXICON: &[(&str, f64)] = &[
    ("packed", 4.0),
    ("tournament", 5.0),
    ("league", 3.0),
    ("social", 3.0),
    ("busy", 2.0),
    ("quiet", -4.0),
    ("solo", -4.0),
    ("empty", -5.0),
];

/// Physicality keyword weights. Negative words signal sedentary activity.
const PHYS_LEXICON: &[(&str, f64)] = &[
    ("strenuous", 5.0),
    ("climb", 4.0),
    ("sweat", 3.0),
    ("workout", 4.0),
    ("hiking", 3.0),
    ("sitting", -6.0),
    ("indoor", -3.0),
    ("reading", -7.0),
];

const NEGATIONS: &[&str] = &["not", "never", "no", "isnt", "wasnt", "dont"];

const MODIFIERS: &[(&str, f64)] = &[
    ("very", 1.5),
    ("extremely", 2.0),
    ("super", 1.5),
    ("slightly", 0.5),
];

/// Category prior weights for sociability, 0–10 scale.
const SOCIAL_WEIGHTS: &[(&str, f64)] = &[
    // High social / high people density
    ("night_club", 10.0),
    ("dance_hall", 10.0),
    ("karaoke", 10.0),
    ("comedy_club", 10.0),
    ("bar", 9.0),
    ("pub", 9.0),
    ("beer_garden", 9.0),
    ("live_music_venue", 9.0),
    ("stadium", 9.0),
    ("community_center", 8.0),
    ("event_venue", 8.0),
    ("bowling_alley", 8.0),
    ("amusement_park", 8.0),
    ("dog_park", 8.0),
    ("picnic_ground", 7.0),
    ("bbq_area", 8.0),
    // Moderate social / conversation
    ("cafe", 7.0),
    ("coffee_shop", 7.0),
    ("restaurant", 6.0),
    ("ice_cream_shop", 5.0),
    ("museum", 4.0),
    ("art_gallery", 4.0),
    ("book_store", 3.0),
    // Low social / solo focus
    ("library", 2.0),
    ("spa", 2.0),
    ("sauna", 2.0),
];

/// Category prior weights for physical exertion, 0–10 scale.
const PHYSICAL_WEIGHTS: &[(&str, f64)] = &[
    // High exertion
    ("gym", 10.0),
    ("fitness_center", 10.0),
    ("rock_climbing_gym", 10.0),
    ("hiking_area", 9.0),
    ("sports_complex", 9.0),
    ("swimming_pool", 8.0),
    ("tennis_court", 9.0),
    ("yoga_studio", 7.0),
    ("cycling_park", 9.0),
    // Moderate / walking
    ("park", 6.0),
    ("amusement_park", 6.0),
    ("zoo", 5.0),
    ("botanical_garden", 4.0),
    ("golf_course", 6.0),
    ("playground", 7.0),
    ("scenic_spot", 4.0),
    // Low / stationary
    ("movie_theater", 1.0),
    ("cafe", 1.0),
    ("restaurant", 1.0),
    ("bar", 1.0),
    ("library", 0.0),
    ("museum", 2.0),
    ("night_club", 3.0), // clubs get a 3 for dancing
];

/// Categories whose physicality score is hard-capped at 3.
const SEDENTARY_TYPES: &[&str] = &["toy_store", "hobby_shop", "book_store", "library", "cafe"];

/// Categories whose sociability score is floored at 7.
const HIGH_SOCIAL_TYPES: &[&str] = &[
    "night_club",
    "dance_hall",
    "karaoke",
    "comedy_club",
    "bar",
    "pub",
    "community_center",
    "amusement_park",
    "picnic_ground",
    "dog_park",
];

/// Generic tags dropped from the output entry.
const TAG_STOPLIST: &[&str] = &["store", "point_of_interest", "establishment"];

/// Keyword → signed weight mapping used for text-based score adjustment.
#[derive(Debug, Clone)]
pub struct Lexicon {
    weights: BTreeMap<String, f64>,
}

impl Lexicon {
    #[must_use]
    pub fn new(pairs: &[(&str, f64)]) -> Self {
        Self {
            weights: pairs
                .iter()
                .map(|&(word, weight)| (word.to_owned(), weight))
                .collect(),
        }
    }

    /// The production sociability lexicon.
    #[must_use]
    pub fn sociability() -> Self {
        Self::new(SOC_LEXICON)
    }

    /// The production physicality lexicon.
    #[must_use]
    pub fn physicality() -> Self {
        Self::new(PHYS_LEXICON)
    }

    #[must_use]
    pub fn weight(&self, word: &str) -> Option<f64> {
        self.weights.get(word).copied()
    }
}

/// Negation set and intensity-modifier table shared by both lexicons.
#[derive(Debug, Clone)]
pub struct TextRules {
    negations: BTreeSet<String>,
    modifiers: BTreeMap<String, f64>,
}

impl Default for TextRules {
    fn default() -> Self {
        Self {
            negations: NEGATIONS.iter().map(|&w| w.to_owned()).collect(),
            modifiers: MODIFIERS
                .iter()
                .map(|&(word, factor)| (word.to_owned(), factor))
                .collect(),
        }
    }
}

impl TextRules {
    #[must_use]
    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word)
    }

    #[must_use]
    pub fn modifier(&self, word: &str) -> Option<f64> {
        self.modifiers.get(word).copied()
    }
}

/// Category-tag weight tables and the fixed tag sets driving floors, caps,
/// and the output stoplist.
#[derive(Debug, Clone)]
pub struct CategoryWeights {
    social: BTreeMap<String, f64>,
    physical: BTreeMap<String, f64>,
    sedentary: BTreeSet<String>,
    high_social: BTreeSet<String>,
    stoplist: BTreeSet<String>,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        let to_map = |pairs: &[(&str, f64)]| {
            pairs
                .iter()
                .map(|&(word, weight)| (word.to_owned(), weight))
                .collect()
        };
        let to_set =
            |words: &[&str]| words.iter().map(|&w| w.to_owned()).collect::<BTreeSet<_>>();
        Self {
            social: to_map(SOCIAL_WEIGHTS),
            physical: to_map(PHYSICAL_WEIGHTS),
            sedentary: to_set(SEDENTARY_TYPES),
            high_social: to_set(HIGH_SOCIAL_TYPES),
            stoplist: to_set(TAG_STOPLIST),
        }
    }
}

impl CategoryWeights {
    #[must_use]
    pub fn social(&self, tag: &str) -> Option<f64> {
        self.social.get(tag).copied()
    }

    #[must_use]
    pub fn physical(&self, tag: &str) -> Option<f64> {
        self.physical.get(tag).copied()
    }

    #[must_use]
    pub fn is_sedentary(&self, tag: &str) -> bool {
        self.sedentary.contains(tag)
    }

    #[must_use]
    pub fn is_high_social(&self, tag: &str) -> bool {
        self.high_social.contains(tag)
    }

    #[must_use]
    pub fn is_stoplisted(&self, tag: &str) -> bool {
        self.stoplist.contains(tag)
    }
}
