//! Sociability/physicality scoring for Placedex.
//!
//! Combines categorical priors (place-type weight tables) with a
//! lexicon-driven adjustment extracted from review and summary text,
//! including negation handling, intensity modifiers, and category-specific
//! floors and caps.

pub mod builder;
pub mod lexicon;
pub mod scorer;

pub use builder::{build_index_entry, ScoringConfig};
pub use lexicon::{CategoryWeights, Lexicon, TextRules};
pub use scorer::lexicon_shift;
