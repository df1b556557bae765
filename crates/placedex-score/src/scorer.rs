//! Lexicon scan over free text, producing a bounded score shift.

use std::collections::BTreeSet;

use crate::lexicon::{Lexicon, TextRules};

/// Scale applied to the accumulated keyword total before clamping.
const SHIFT_SCALE: f64 = 0.5;

/// Bound of the final shift, both directions.
const SHIFT_LIMIT: f64 = 3.5;

/// Score `text` against `lexicon`, handling phrases like "not crowded" or
/// "very strenuous".
///
/// Tokenization lower-cases the text, strips periods, and splits on
/// whitespace. Each lexicon keyword contributes at most once (first
/// occurrence wins). The token immediately before a keyword may scale it
/// (intensity modifier); a negation at offset −1 or −2 flips its sign, and
/// both adjustments can apply to the same keyword. The accumulated total is
/// halved and clamped to `[-3.5, 3.5]`.
///
/// Pure function of its inputs; returns `0.0` for text with no lexicon hits.
#[must_use]
pub fn lexicon_shift(text: &str, lexicon: &Lexicon, rules: &TextRules) -> f64 {
    let lowered = text.to_lowercase().replace('.', "");
    let tokens: Vec<&str> = lowered.split_whitespace().collect();

    let mut seen_keywords: BTreeSet<&str> = BTreeSet::new();
    let mut total_shift = 0.0f64;

    for (i, word) in tokens.iter().enumerate() {
        let Some(base) = lexicon.weight(word) else {
            continue;
        };
        if !seen_keywords.insert(word) {
            continue;
        }

        let mut value = base;
        if i > 0 {
            if let Some(factor) = rules.modifier(tokens[i - 1]) {
                value *= factor;
            }
        }
        // Negation looks back two tokens so "not very busy" still flips.
        let negated = (i >= 1 && rules.is_negation(tokens[i - 1]))
            || (i >= 2 && rules.is_negation(tokens[i - 2]));
        if negated {
            value = -value;
        }

        total_shift += value;
    }

    (total_shift * SHIFT_SCALE).clamp(-SHIFT_LIMIT, SHIFT_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn soc() -> Lexicon {
        Lexicon::sociability()
    }

    fn rules() -> TextRules {
        TextRules::default()
    }

    #[test]
    fn empty_text_returns_zero() {
        assert_eq!(lexicon_shift("", &soc(), &rules()), 0.0);
    }

    #[test]
    fn unknown_text_returns_zero() {
        assert_eq!(
            lexicon_shift("the weather was pleasant", &soc(), &rules()),
            0.0
        );
    }

    #[test]
    fn single_keyword_scores_half_its_weight() {
        // busy = 2 → 2 * 0.5 = 1.0
        let shift = lexicon_shift("busy", &soc(), &rules());
        assert!((shift - 1.0).abs() < f64::EPSILON, "got {shift}");
    }

    #[test]
    fn negation_flips_sign_with_equal_magnitude() {
        let positive = lexicon_shift("busy", &soc(), &rules());
        let negated = lexicon_shift("not busy", &soc(), &rules());
        assert!(positive > 0.0, "got {positive}");
        assert!(negated < 0.0, "got {negated}");
        assert!(
            (positive + negated).abs() < f64::EPSILON,
            "expected equal magnitude, got {positive} vs {negated}"
        );
    }

    #[test]
    fn negation_reaches_back_two_tokens() {
        let shift = lexicon_shift("not very busy", &soc(), &rules());
        // busy = 2, ×1.5 modifier, negated, ×0.5 scale → -1.5
        assert!((shift + 1.5).abs() < f64::EPSILON, "got {shift}");
    }

    #[test]
    fn modifier_amplifies_magnitude() {
        let plain = lexicon_shift("busy", &soc(), &rules());
        let modified = lexicon_shift("very busy", &soc(), &rules());
        assert!(
            modified.abs() > plain.abs(),
            "expected amplification, got {plain} vs {modified}"
        );
        assert!((modified - 1.5).abs() < f64::EPSILON, "got {modified}");
    }

    #[test]
    fn slightly_dampens_magnitude() {
        let shift = lexicon_shift("slightly busy", &soc(), &rules());
        assert!((shift - 0.5).abs() < f64::EPSILON, "got {shift}");
    }

    #[test]
    fn repeated_keyword_counts_once() {
        let once = lexicon_shift("busy", &soc(), &rules());
        let thrice = lexicon_shift("busy busy busy", &soc(), &rules());
        assert!((once - thrice).abs() < f64::EPSILON);
    }

    #[test]
    fn periods_are_stripped_before_matching() {
        let shift = lexicon_shift("It was busy.", &soc(), &rules());
        assert!(shift > 0.0, "got {shift}");
    }

    #[test]
    fn shift_clamps_to_positive_limit() {
        // packed(4) + tournament(5) + league(3) + social(3) + busy(2) = 17 → 8.5 pre-clamp
        let shift = lexicon_shift("packed tournament league social busy", &soc(), &rules());
        assert!((shift - 3.5).abs() < f64::EPSILON, "got {shift}");
    }

    #[test]
    fn shift_clamps_to_negative_limit() {
        // quiet(-4) + solo(-4) + empty(-5) = -13 → -6.5 pre-clamp
        let shift = lexicon_shift("quiet solo empty", &soc(), &rules());
        assert!((shift + 3.5).abs() < f64::EPSILON, "got {shift}");
    }

    #[test]
    fn shift_is_always_within_bounds() {
        let phys = Lexicon::physicality();
        let samples = [
            "strenuous climb sweat workout hiking",
            "sitting indoor reading sitting reading",
            "not strenuous never sweat",
            "extremely strenuous extremely climb extremely workout",
            "",
        ];
        for text in samples {
            let shift = lexicon_shift(text, &phys, &rules());
            assert!(
                (-3.5..=3.5).contains(&shift),
                "shift {shift} out of bounds for {text:?}"
            );
        }
    }
}
