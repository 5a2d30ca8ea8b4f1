//! Urgency classifier: exact stage, similarity fallback, default.

use std::sync::Arc;

use tracing::debug;
use triage_core::{Error, Result, TriageConfig};
use triage_infer::TextModel;

use crate::exact::ExactMatchScorer;
use crate::index::PhraseIndex;
use crate::label::{Label, MatchCount, SimilarityScore};
use crate::normalize::{normalize, Document};
use crate::phrases::PhraseConfig;
use crate::similarity::SimilarityFallbackScorer;

/// Minimum similarity for a token/phrase comparison to count.
pub const SIMILARITY_THRESHOLD: f32 = 0.75;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierOptions {
    /// Similarity a comparison must exceed to contribute.
    pub threshold: f32,
    /// Run the similarity stage when no phrase matched exactly.
    pub fallback: bool,
}

impl Default for ClassifierOptions {
    fn default() -> Self {
        Self {
            threshold: SIMILARITY_THRESHOLD,
            fallback: true,
        }
    }
}

impl ClassifierOptions {
    /// Exact phrase matching only.
    pub fn exact_only() -> Self {
        Self {
            fallback: false,
            ..Self::default()
        }
    }
}

/// Which stage settled the label, with the scores it saw.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    Exact { label: Label, counts: MatchCount },
    Fallback { label: Label, scores: SimilarityScore },
    Default,
}

impl Decision {
    pub fn label(&self) -> Label {
        match self {
            Decision::Exact { label, .. } | Decision::Fallback { label, .. } => *label,
            Decision::Default => Label::Low,
        }
    }

    pub fn stage(&self) -> &'static str {
        match self {
            Decision::Exact { .. } => "exact",
            Decision::Fallback { .. } => "fallback",
            Decision::Default => "default",
        }
    }
}

/// Highest-priority label with at least one exact match.
fn exact_winner(counts: &MatchCount) -> Option<Label> {
    counts.iter().find(|&(_, n)| n > 0).map(|(label, _)| label)
}

/// Label with the strictly greatest positive score. Equal scores resolve
/// to the higher-priority label.
fn fallback_winner(scores: &SimilarityScore) -> Option<Label> {
    let mut best: Option<(Label, f32)> = None;
    for (label, score) in scores.iter() {
        if score > 0.0 && best.map_or(true, |(_, top)| score > top) {
            best = Some((label, score));
        }
    }
    best.map(|(label, _)| label)
}

/// Shares the phrase index and model by `Arc`; cheap to clone and safe to
/// call from any number of threads.
#[derive(Clone)]
pub struct Classifier {
    index: Arc<PhraseIndex>,
    model: Arc<dyn TextModel>,
    exact: ExactMatchScorer,
    fallback: Option<SimilarityFallbackScorer>,
}

impl Classifier {
    pub fn new(index: Arc<PhraseIndex>, model: Arc<dyn TextModel>, options: ClassifierOptions) -> Self {
        let fallback = (options.fallback && model.is_semantic()).then(|| {
            SimilarityFallbackScorer::new(index.clone(), model.clone(), options.threshold)
        });
        Self {
            exact: ExactMatchScorer::new(index.clone()),
            index,
            model,
            fallback,
        }
    }

    /// Build the phrase index from `config` and wire it to `model`.
    pub fn from_config(config: &TriageConfig, model: Arc<dyn TextModel>) -> Result<Self> {
        let phrases = PhraseConfig::resolve(config)?;
        Self::from_phrases(&phrases, model, ClassifierOptions::default())
    }

    pub fn from_phrases(
        phrases: &PhraseConfig,
        model: Arc<dyn TextModel>,
        options: ClassifierOptions,
    ) -> Result<Self> {
        let index = Arc::new(PhraseIndex::build(phrases, model.as_ref())?);
        Ok(Self::new(index, model, options))
    }

    pub fn index(&self) -> &PhraseIndex {
        &self.index
    }

    /// Whether the similarity stage is active.
    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    pub fn normalize(&self, text: &str) -> Document {
        normalize(self.model.as_ref(), text)
    }

    /// Run the stages in order and stop at the first that yields a label.
    pub fn decide(&self, document: &Document) -> Decision {
        let counts = self.exact.score(document);
        if let Some(label) = exact_winner(&counts) {
            return Decision::Exact { label, counts };
        }

        if let Some(fallback) = &self.fallback {
            let scores = fallback.score(document);
            if let Some(label) = fallback_winner(&scores) {
                return Decision::Fallback { label, scores };
            }
        }

        Decision::Default
    }

    /// Classify a message. Empty text is rejected.
    pub fn classify(&self, text: &str) -> Result<Label> {
        if text.is_empty() {
            return Err(Error::InvalidInput("Text is required".to_string()));
        }

        let document = self.normalize(text);
        let decision = self.decide(&document);
        debug!(
            stage = decision.stage(),
            label = %decision.label(),
            tokens = document.len(),
            "classified"
        );
        Ok(decision.label())
    }
}

impl std::fmt::Debug for Classifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Classifier")
            .field("phrases", &self.index.phrases().len())
            .field("fallback", &self.fallback)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(high: f32, medium: f32, low: f32) -> SimilarityScore {
        let mut s = SimilarityScore::default();
        s[Label::High] = high;
        s[Label::Medium] = medium;
        s[Label::Low] = low;
        s
    }

    #[test]
    fn test_exact_priority_beats_count() {
        let mut counts = MatchCount::default();
        counts[Label::Low] = 100;
        counts[Label::High] = 1;
        assert_eq!(exact_winner(&counts), Some(Label::High));

        counts[Label::High] = 0;
        assert_eq!(exact_winner(&counts), Some(Label::Low));
        assert_eq!(exact_winner(&MatchCount::default()), None);
    }

    #[test]
    fn test_fallback_takes_maximum() {
        assert_eq!(fallback_winner(&scores(0.8, 2.4, 1.6)), Some(Label::Medium));
        assert_eq!(fallback_winner(&scores(0.0, 0.0, 0.9)), Some(Label::Low));
        assert_eq!(fallback_winner(&scores(0.0, 0.0, 0.0)), None);
    }

    #[test]
    fn test_fallback_tie_prefers_higher_priority() {
        assert_eq!(fallback_winner(&scores(0.0, 1.5, 1.5)), Some(Label::Medium));
        assert_eq!(fallback_winner(&scores(0.9, 0.9, 0.9)), Some(Label::High));
    }

    #[test]
    fn test_decision_labels() {
        assert_eq!(Decision::Default.label(), Label::Low);
        let d = Decision::Fallback {
            label: Label::High,
            scores: scores(1.0, 0.0, 0.0),
        };
        assert_eq!(d.label(), Label::High);
        assert_eq!(d.stage(), "fallback");
    }
}
