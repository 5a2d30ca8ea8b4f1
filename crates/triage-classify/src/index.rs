//! Immutable phrase index with contiguous token-run matching.

use std::collections::{HashMap, HashSet};

use ndarray::Array1;
use tracing::info;
use triage_core::{Error, Result};
use triage_infer::TextModel;

use crate::label::{Label, MatchCount};
use crate::normalize::{normalize, Document};
use crate::phrases::PhraseConfig;

/// A configured phrase, tokenized the same way as input text.
#[derive(Debug, Clone, PartialEq)]
pub struct Phrase {
    pub label: Label,
    /// Token texts, matched as a contiguous run.
    pub words: Vec<String>,
    /// Mean vector of the phrase's content words. None when the model has
    /// no vector for any of them.
    pub vector: Option<Array1<f32>>,
}

/// Label → phrases, built once at startup and read-only afterwards.
#[derive(Debug)]
pub struct PhraseIndex {
    phrases: Vec<Phrase>,
    /// First word → positions in `phrases`.
    by_first_word: HashMap<String, Vec<usize>>,
}

impl PhraseIndex {
    /// Tokenize, embed and index every configured phrase.
    ///
    /// Blank phrases are dropped and duplicates within a label collapse.
    /// Fails if no phrase is left for any label.
    pub fn build(config: &PhraseConfig, model: &dyn TextModel) -> Result<Self> {
        let mut phrases = Vec::new();

        for label in Label::ALL {
            let mut seen: HashSet<Vec<String>> = HashSet::new();
            for raw in config.phrases(label) {
                let document = normalize(model, raw);
                let words: Vec<String> = document.tokens().iter().map(|t| t.text.clone()).collect();
                if words.is_empty() || !seen.insert(words.clone()) {
                    continue;
                }
                let vector = if model.is_semantic() {
                    let content: Vec<&str> =
                        document.content_tokens().map(|t| t.text.as_str()).collect();
                    model.embed(&content)
                } else {
                    None
                };
                phrases.push(Phrase {
                    label,
                    words,
                    vector,
                });
            }
        }

        if phrases.is_empty() {
            return Err(Error::Config("No phrases configured for any label".to_string()));
        }

        let mut by_first_word: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, phrase) in phrases.iter().enumerate() {
            by_first_word
                .entry(phrase.words[0].clone())
                .or_default()
                .push(i);
        }

        let index = Self {
            phrases,
            by_first_word,
        };
        info!(
            "Phrase index built: high={}, medium={}, low={}, embedded={}",
            index.count(Label::High),
            index.count(Label::Medium),
            index.count(Label::Low),
            index.phrases.iter().filter(|p| p.vector.is_some()).count()
        );
        Ok(index)
    }

    /// Count phrase occurrences per label. Every occurrence counts,
    /// including overlapping and repeated ones.
    pub fn count_matches(&self, document: &Document) -> MatchCount {
        let tokens = document.tokens();
        let mut counts = MatchCount::default();

        for start in 0..tokens.len() {
            let Some(candidates) = self.by_first_word.get(&tokens[start].text) else {
                continue;
            };
            for &i in candidates {
                let phrase = &self.phrases[i];
                let end = start + phrase.words.len();
                if end > tokens.len() {
                    continue;
                }
                let matched = tokens[start..end]
                    .iter()
                    .zip(&phrase.words)
                    .all(|(token, word)| token.text == *word);
                if matched {
                    counts[phrase.label] += 1;
                }
            }
        }

        counts
    }

    /// All phrases, grouped by label in priority order.
    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    /// Number of phrases configured for one label.
    pub fn count(&self, label: Label) -> usize {
        self.phrases.iter().filter(|p| p.label == label).count()
    }
}
