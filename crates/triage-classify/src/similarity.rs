//! Similarity fallback scoring stage.
//!
//! Every content token is compared with every configured phrase; each
//! comparison above the threshold adds its similarity to the phrase's
//! label. Phrase vectors come from the index; token vectors are computed
//! per call and never stored. Cost is content tokens × phrases, which stays
//! small for short complaint messages and a few hundred phrases.

use std::sync::Arc;

use triage_infer::TextModel;

use crate::index::PhraseIndex;
use crate::label::SimilarityScore;
use crate::normalize::Document;

#[derive(Clone)]
pub struct SimilarityFallbackScorer {
    index: Arc<PhraseIndex>,
    model: Arc<dyn TextModel>,
    threshold: f32,
}

impl SimilarityFallbackScorer {
    pub fn new(index: Arc<PhraseIndex>, model: Arc<dyn TextModel>, threshold: f32) -> Self {
        Self {
            index,
            model,
            threshold,
        }
    }

    pub fn score(&self, document: &Document) -> SimilarityScore {
        let mut scores = SimilarityScore::default();

        for token in document.content_tokens() {
            let Some(token_vector) = self.model.embed(&[token.text.as_str()]) else {
                continue;
            };
            for phrase in self.index.phrases() {
                let Some(phrase_vector) = &phrase.vector else {
                    continue;
                };
                let similarity = self.model.similarity(&token_vector, phrase_vector);
                if similarity > self.threshold {
                    scores[phrase.label] += similarity;
                }
            }
        }

        scores
    }
}

impl std::fmt::Debug for SimilarityFallbackScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimilarityFallbackScorer")
            .field("phrases", &self.index.phrases().len())
            .field("threshold", &self.threshold)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::Label;
    use crate::normalize::normalize;
    use crate::phrases::PhraseConfig;
    use ndarray::Array1;
    use std::collections::HashMap;
    use triage_core::Token;
    use triage_infer::RuleTokenizer;

    /// Model with a fixed table of word and phrase vectors, keyed by the
    /// space-joined words.
    struct TableModel {
        tokenizer: RuleTokenizer,
        table: HashMap<String, Array1<f32>>,
    }

    impl TableModel {
        fn new(entries: &[(&str, [f32; 3])]) -> Self {
            Self {
                tokenizer: RuleTokenizer::new(),
                table: entries
                    .iter()
                    .map(|(key, v)| (key.to_string(), Array1::from_vec(v.to_vec())))
                    .collect(),
            }
        }
    }

    impl TextModel for TableModel {
        fn tokenize(&self, text: &str) -> Vec<Token> {
            self.tokenizer.tokenize(text)
        }

        fn embed(&self, words: &[&str]) -> Option<Array1<f32>> {
            self.table.get(&words.join(" ")).cloned()
        }

        fn is_semantic(&self) -> bool {
            true
        }
    }

    fn scorer(model: TableModel, threshold: f32) -> (SimilarityFallbackScorer, Arc<dyn TextModel>) {
        let model: Arc<dyn TextModel> = Arc::new(model);
        let config = PhraseConfig::new(["explosion", "gas leak"], ["tap not working"], ["dripping tap"]);
        let index = Arc::new(PhraseIndex::build(&config, model.as_ref()).unwrap());
        (SimilarityFallbackScorer::new(index, model.clone(), threshold), model)
    }

    #[test]
    fn test_accumulates_similarity_values() {
        let (scorer, model) = scorer(
            TableModel::new(&[
                ("explosion", [0.9, 0.43589, 0.0]),
                ("gas leak", [0.8, 0.6, 0.0]),
                ("dripping tap", [0.0, 0.64992, 0.76]),
                ("blast", [1.0, 0.0, 0.0]),
                ("faucet", [0.0, 0.0, 1.0]),
            ]),
            0.75,
        );
        let scores = scorer.score(&normalize(model.as_ref(), "blast near the faucet"));
        // blast: 0.9 (explosion) + 0.8 (gas leak); faucet: 0.76 (dripping tap)
        assert!((scores[Label::High] - 1.7).abs() < 1e-4);
        assert_eq!(scores[Label::Medium], 0.0);
        assert!((scores[Label::Low] - 0.76).abs() < 1e-4);
    }

    #[test]
    fn test_threshold_is_strict() {
        // cos([1,0,0], [4,3,0]) is exactly 0.8
        let (scorer, model) = scorer(
            TableModel::new(&[("explosion", [4.0, 3.0, 0.0]), ("blast", [1.0, 0.0, 0.0])]),
            0.8,
        );
        let scores = scorer.score(&normalize(model.as_ref(), "blast"));
        assert_eq!(scores, SimilarityScore::default());
    }

    #[test]
    fn test_skips_stopwords_and_punctuation() {
        let (scorer, model) = scorer(
            TableModel::new(&[
                ("explosion", [1.0, 0.0, 0.0]),
                ("the", [1.0, 0.0, 0.0]),
                ("!", [1.0, 0.0, 0.0]),
            ]),
            0.75,
        );
        let scores = scorer.score(&normalize(model.as_ref(), "the !"));
        assert_eq!(scores, SimilarityScore::default());
    }

    #[test]
    fn test_unknown_token_scores_zero() {
        let (scorer, model) = scorer(TableModel::new(&[("explosion", [1.0, 0.0, 0.0])]), 0.75);
        let scores = scorer.score(&normalize(model.as_ref(), "kaboom"));
        assert_eq!(scores, SimilarityScore::default());
    }

    #[test]
    fn test_empty_document_scores_zero() {
        let (scorer, model) = scorer(TableModel::new(&[("explosion", [1.0, 0.0, 0.0])]), 0.75);
        assert_eq!(
            scorer.score(&normalize(model.as_ref(), "")),
            SimilarityScore::default()
        );
    }
}
