//! Urgency Triage Classify — the classification engine.
//!
//! Text is normalized into a `Document`, scanned for configured phrases by
//! the `ExactMatchScorer`, and, only when nothing matched, scored against
//! every phrase by the `SimilarityFallbackScorer`. The `Classifier` turns
//! those scores into a single `Label` with a fixed High > Medium > Low
//! priority, defaulting to Low.

pub mod builtin;
pub mod classifier;
pub mod exact;
pub mod index;
pub mod label;
pub mod normalize;
pub mod phrases;
pub mod similarity;

pub use classifier::{Classifier, ClassifierOptions, Decision, SIMILARITY_THRESHOLD};
pub use exact::ExactMatchScorer;
pub use index::{Phrase, PhraseIndex};
pub use label::{Label, LabelMap, MatchCount, SimilarityScore};
pub use normalize::{normalize, Document};
pub use phrases::PhraseConfig;
pub use similarity::SimilarityFallbackScorer;
