//! ONNX sentence embedder for token/phrase similarity.
//!
//! Loads a SentenceTransformers-style ONNX export (`model.onnx`) and its
//! HuggingFace tokenizer (`tokenizer.json`). Output token embeddings are
//! mean-pooled over the attention mask. Requires the `onnx` feature.

#[cfg(feature = "onnx")]
mod inner {
    use std::path::Path;

    use ndarray::Array1;
    use ort::session::Session;
    use ort::value::Tensor;
    use parking_lot::Mutex;
    use tokenizers::Tokenizer;
    use tracing::{info, warn};
    use triage_core::{Error, Result};

    use crate::embedder::EmbedderBackend;

    /// Complaint phrases are short; anything longer is truncated.
    const MAX_SEQ_LEN: usize = 128;

    pub struct OnnxEmbedder {
        session: Mutex<Session>,
        tokenizer: Tokenizer,
        dimension: usize,
    }

    impl OnnxEmbedder {
        /// Load `model.onnx` and `tokenizer.json` from `model_dir`.
        pub fn load(model_dir: &Path) -> Result<Self> {
            let model_path = model_dir.join("model.onnx");
            let tokenizer_path = model_dir.join("tokenizer.json");

            for path in [&model_path, &tokenizer_path] {
                if !path.exists() {
                    return Err(Error::ModelUnavailable(format!(
                        "Missing model file: {}",
                        path.display()
                    )));
                }
            }

            // With load-dynamic, ORT_DYLIB_PATH must point to libonnxruntime
            ort::init().commit();

            let session = Session::builder()
                .map_err(|e| Error::ModelUnavailable(format!("Failed to create session builder: {}", e)))?
                .with_intra_threads(2)
                .map_err(|e| Error::ModelUnavailable(format!("Failed to set threads: {}", e)))?
                .commit_from_file(&model_path)
                .map_err(|e| Error::ModelUnavailable(format!("Failed to load ONNX model: {}", e)))?;

            let tokenizer = Tokenizer::from_file(&tokenizer_path)
                .map_err(|e| Error::ModelUnavailable(format!("Failed to load tokenizer: {}", e)))?;

            let mut embedder = Self {
                session: Mutex::new(session),
                tokenizer,
                dimension: 0,
            };

            // Embed once so the dimension is known and a broken model fails at startup
            let sample = embedder.infer("warmup").ok_or_else(|| {
                Error::ModelUnavailable("ONNX model produced no embedding".to_string())
            })?;
            embedder.dimension = sample.len();

            info!(
                "ONNX embedder loaded: dim={}, model={}",
                embedder.dimension,
                model_path.display()
            );
            Ok(embedder)
        }

        fn infer(&self, text: &str) -> Option<Array1<f32>> {
            let encoding = self
                .tokenizer
                .encode(text, true)
                .map_err(|e| warn!("Tokenization failed: {}", e))
                .ok()?;

            let seq_len = encoding.get_ids().len().min(MAX_SEQ_LEN);
            let ids: Vec<i64> = encoding.get_ids()[..seq_len].iter().map(|&v| v as i64).collect();
            let mask: Vec<i64> = encoding.get_attention_mask()[..seq_len]
                .iter()
                .map(|&v| v as i64)
                .collect();
            let type_ids = vec![0i64; seq_len];

            let tensor = |data: Vec<i64>| {
                Tensor::from_array(([1usize, seq_len], data))
                    .map_err(|e| warn!("Failed to build input tensor: {}", e))
                    .ok()
            };
            let inputs = ort::inputs![tensor(ids)?, tensor(mask.clone())?, tensor(type_ids)?];

            let mut session = self.session.lock();
            let outputs = session
                .run(inputs)
                .map_err(|e| warn!("ONNX inference failed: {}", e))
                .ok()?;
            let (shape, data) = outputs[0]
                .try_extract_tensor::<f32>()
                .map_err(|e| warn!("Failed to extract output tensor: {}", e))
                .ok()?;
            let dims: Vec<i64> = shape.iter().copied().collect();

            match dims.as_slice() {
                // [1, seq_len, dim]: token embeddings, mean-pool over the mask
                [_, _, dim] => {
                    let dim = *dim as usize;
                    let kept: f32 = mask.iter().map(|&m| m as f32).sum();
                    if kept < 1.0 {
                        return None;
                    }
                    let mut pooled = Array1::<f32>::zeros(dim);
                    for (i, _) in mask.iter().enumerate().filter(|&(_, &m)| m > 0) {
                        let row = &data[i * dim..(i + 1) * dim];
                        pooled
                            .iter_mut()
                            .zip(row)
                            .for_each(|(p, v)| *p += v);
                    }
                    Some(pooled / kept)
                }
                // [1, dim]: already pooled
                [_, dim] => Some(Array1::from_vec(data[..*dim as usize].to_vec())),
                other => {
                    warn!("Unexpected output shape: {:?}", other);
                    None
                }
            }
        }
    }

    impl EmbedderBackend for OnnxEmbedder {
        fn embed(&self, words: &[&str]) -> Option<Array1<f32>> {
            if words.is_empty() {
                return None;
            }
            self.infer(&words.join(" "))
        }

        fn dimension(&self) -> usize {
            self.dimension
        }

        fn is_available(&self) -> bool {
            true
        }
    }
}

#[cfg(feature = "onnx")]
pub use inner::OnnxEmbedder;
