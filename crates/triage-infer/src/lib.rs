//! Urgency Triage Infer — the language model collaborator.
//!
//! Provides the `TextModel` trait the classifier depends on: a tokenizer
//! that flags stopwords and punctuation, word/phrase vectors and a
//! similarity between them. `EmbeddingModel` gets its vectors from an
//! `EmbedderBackend`:
//! static word vectors (`vectors.txt`), an ONNX sentence embedder when the
//! `onnx` feature is enabled, or `NoopEmbedder` for exact-only operation.

pub mod embedder;
pub mod model;
pub mod onnx_embedder;
pub mod tokenizer;
pub mod word_vectors;

pub use embedder::{EmbedderBackend, NoopEmbedder};
pub use model::{cosine_similarity, EmbeddingModel, TextModel};
pub use tokenizer::RuleTokenizer;
pub use word_vectors::WordVectors;

#[cfg(feature = "onnx")]
pub use onnx_embedder::OnnxEmbedder;

use std::sync::Arc;

use tracing::info;
use triage_core::{ModelBackend, Result, TriageConfig};

/// File name of the static word-vector table inside the model directory.
pub const VECTORS_FILE: &str = "vectors.txt";

/// Load the model collaborator selected by `config`.
///
/// A backend that is configured but cannot be loaded is fatal: the caller
/// must not start serving with a silently degraded model.
pub fn create_model(config: &TriageConfig) -> Result<Arc<dyn TextModel>> {
    let embedder: Arc<dyn EmbedderBackend> = match config.backend {
        ModelBackend::Vectors => {
            let vectors = WordVectors::load(&config.model_dir.join(VECTORS_FILE))?;
            info!(
                "Using word vectors (words={}, dim={})",
                vectors.len(),
                vectors.dimension()
            );
            Arc::new(vectors)
        }
        ModelBackend::Onnx => load_onnx(config)?,
        ModelBackend::None => {
            info!("No similarity backend configured. Exact phrase matching only.");
            Arc::new(NoopEmbedder::new())
        }
    };

    Ok(Arc::new(EmbeddingModel::new(RuleTokenizer::new(), embedder)))
}

#[cfg(feature = "onnx")]
fn load_onnx(config: &TriageConfig) -> Result<Arc<dyn EmbedderBackend>> {
    let embedder = OnnxEmbedder::load(&config.model_dir)?;
    info!("Using ONNX embedder (dim={})", embedder.dimension());
    Ok(Arc::new(embedder))
}

#[cfg(not(feature = "onnx"))]
fn load_onnx(_config: &TriageConfig) -> Result<Arc<dyn EmbedderBackend>> {
    Err(triage_core::Error::ModelUnavailable(
        "ONNX backend requested but this build lacks the `onnx` feature".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use triage_core::Error;

    #[test]
    fn test_create_exact_only_model() {
        let config = TriageConfig {
            backend: ModelBackend::None,
            ..Default::default()
        };
        let model = create_model(&config).unwrap();
        assert!(!model.is_semantic());
        assert!(model.embed(&["fire", "incident"]).is_none());
    }

    #[test]
    fn test_missing_vectors_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let config = TriageConfig {
            model_dir: dir.path().to_path_buf(),
            backend: ModelBackend::Vectors,
            ..Default::default()
        };
        assert!(matches!(create_model(&config), Err(Error::ModelUnavailable(_))));
    }

    #[test]
    fn test_create_vector_model() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = std::fs::File::create(dir.path().join(VECTORS_FILE)).unwrap();
        writeln!(file, "fire 1.0 0.0").unwrap();
        writeln!(file, "blaze 0.9 0.1").unwrap();

        let config = TriageConfig {
            model_dir: dir.path().to_path_buf(),
            backend: ModelBackend::Vectors,
            ..Default::default()
        };
        let model = create_model(&config).unwrap();
        assert!(model.is_semantic());
        let blaze = model.embed(&["blaze"]).unwrap();
        let fire = model.embed(&["fire"]).unwrap();
        assert!(model.similarity(&blaze, &fire) > 0.9);
    }

    #[cfg(not(feature = "onnx"))]
    #[test]
    fn test_onnx_without_feature() {
        let config = TriageConfig {
            backend: ModelBackend::Onnx,
            ..Default::default()
        };
        assert!(matches!(create_model(&config), Err(Error::ModelUnavailable(_))));
    }
}
