//! The language model seam the classifier depends on.

use std::sync::Arc;

use ndarray::Array1;
use triage_core::Token;

use crate::embedder::EmbedderBackend;
use crate::tokenizer::RuleTokenizer;

/// Tokenization plus word/phrase vectors, shared read-only by all
/// classification calls. Implementations hold no per-call state.
pub trait TextModel: Send + Sync {
    /// Lowercase and split text into flagged tokens.
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Vector for a word or a phrase given as its words. None when the
    /// model has no vector for it.
    fn embed(&self, words: &[&str]) -> Option<Array1<f32>>;

    /// Semantic closeness of two vectors, in [-1, 1].
    fn similarity(&self, a: &Array1<f32>, b: &Array1<f32>) -> f32 {
        cosine_similarity(a, b)
    }

    /// Whether `embed` carries any signal. Exact-only models return false.
    fn is_semantic(&self) -> bool;
}

/// `TextModel` built from a rule tokenizer and an embedding backend.
pub struct EmbeddingModel {
    tokenizer: RuleTokenizer,
    embedder: Arc<dyn EmbedderBackend>,
}

impl EmbeddingModel {
    pub fn new(tokenizer: RuleTokenizer, embedder: Arc<dyn EmbedderBackend>) -> Self {
        Self {
            tokenizer,
            embedder,
        }
    }
}

impl TextModel for EmbeddingModel {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        self.tokenizer.tokenize(text)
    }

    fn embed(&self, words: &[&str]) -> Option<Array1<f32>> {
        if !self.embedder.is_available() {
            return None;
        }
        self.embedder.embed(words)
    }

    fn is_semantic(&self) -> bool {
        self.embedder.is_available()
    }
}

/// Cosine similarity of two vectors; 0.0 if either is (near) zero or the
/// dimensions differ.
pub fn cosine_similarity(a: &Array1<f32>, b: &Array1<f32>) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }
    let norm_a = a.dot(a).sqrt();
    let norm_b = b.dot(b).sqrt();
    if norm_a < 1e-9 || norm_b < 1e-9 {
        return 0.0;
    }
    a.dot(b) / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedder::NoopEmbedder;
    use crate::word_vectors::WordVectors;
    use ndarray::array;

    fn vector_model() -> EmbeddingModel {
        let vectors = WordVectors::from_entries([
            ("explosion", vec![1.0, 0.0, 0.0]),
            ("blast", vec![0.95, 0.05, 0.0]),
            ("tap", vec![0.0, 1.0, 0.0]),
            ("fire", vec![0.8, 0.0, 0.6]),
        ])
        .unwrap();
        EmbeddingModel::new(RuleTokenizer::new(), Arc::new(vectors))
    }

    #[test]
    fn test_cosine() {
        assert!((cosine_similarity(&array![1.0, 0.0], &array![1.0, 0.0]) - 1.0).abs() < 1e-6);
        assert!(cosine_similarity(&array![1.0, 0.0], &array![0.0, 1.0]).abs() < 1e-6);
        assert_eq!(cosine_similarity(&array![0.0, 0.0], &array![1.0, 0.0]), 0.0);
        assert_eq!(cosine_similarity(&array![1.0], &array![1.0, 0.0]), 0.0);
    }

    #[test]
    fn test_similarity_with_vectors() {
        let model = vector_model();
        assert!(model.is_semantic());
        let explosion = model.embed(&["explosion"]).unwrap();
        let blast = model.embed(&["blast"]).unwrap();
        let tap = model.embed(&["tap"]).unwrap();
        assert!(model.similarity(&blast, &explosion) > 0.75);
        assert!(model.similarity(&tap, &explosion) < 0.1);
        assert!(model.embed(&["unknownword"]).is_none());
    }

    #[test]
    fn test_phrase_vector_is_mean_of_words() {
        let model = vector_model();
        // mean("fire", "explosion") = [0.9, 0, 0.3]
        let phrase = model.embed(&["fire", "explosion"]).unwrap();
        let blast = model.embed(&["blast"]).unwrap();
        let sim = model.similarity(&blast, &phrase);
        assert!(sim > 0.9 && sim < 1.0);
    }

    #[test]
    fn test_noop_model_has_no_signal() {
        let model = EmbeddingModel::new(RuleTokenizer::new(), Arc::new(NoopEmbedder::new()));
        assert!(!model.is_semantic());
        assert!(model.embed(&["fire"]).is_none());
        assert_eq!(model.tokenize("Fire!").len(), 2);
    }
}
