//! Exact phrase scoring stage.

use std::sync::Arc;

use crate::index::PhraseIndex;
use crate::label::MatchCount;
use crate::normalize::Document;

/// Counts configured phrase occurrences in a document.
#[derive(Debug, Clone)]
pub struct ExactMatchScorer {
    index: Arc<PhraseIndex>,
}

impl ExactMatchScorer {
    pub fn new(index: Arc<PhraseIndex>) -> Self {
        Self { index }
    }

    pub fn score(&self, document: &Document) -> MatchCount {
        self.index.count_matches(document)
    }
}
