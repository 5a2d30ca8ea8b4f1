//! Embedding backend trait and the no-op implementation.
//!
//! The `EmbedderBackend` trait abstracts over vector generation for a word
//! or a short phrase, given as the words the tokenizer produced.
//! Implementations:
//! - `WordVectors`: static word-vector table, phrase = mean of word vectors
//! - `OnnxEmbedder`: ONNX Runtime sentence embedder (requires `onnx` feature)
//! - `NoopEmbedder`: no vectors at all (exact-only classification)

use ndarray::Array1;

/// Trait for embedding backends.
pub trait EmbedderBackend: Send + Sync {
    /// Embed a word or phrase. Returns None when it has no vector
    /// (out-of-vocabulary, or no model loaded).
    fn embed(&self, words: &[&str]) -> Option<Array1<f32>>;

    /// Get the embedding dimension.
    fn dimension(&self) -> usize;

    /// Check if the embedder can produce vectors at all.
    fn is_available(&self) -> bool;
}

/// Embedder that never produces a vector.
#[derive(Debug, Default)]
pub struct NoopEmbedder;

impl NoopEmbedder {
    pub fn new() -> Self {
        Self
    }
}

impl EmbedderBackend for NoopEmbedder {
    fn embed(&self, _words: &[&str]) -> Option<Array1<f32>> {
        None
    }

    fn dimension(&self) -> usize {
        0
    }

    fn is_available(&self) -> bool {
        false
    }
}
