//! Runtime configuration read from the environment at startup.

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Which similarity backend the model collaborator should load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelBackend {
    /// Static word vectors from `vectors.txt`.
    Vectors,
    /// Sentence embedder from `model.onnx` + `tokenizer.json`.
    Onnx,
    /// No semantic model; exact phrase matching only.
    None,
}

impl FromStr for ModelBackend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "vectors" | "word-vectors" => Ok(Self::Vectors),
            "onnx" => Ok(Self::Onnx),
            "none" | "exact" => Ok(Self::None),
            other => Err(Error::Config(format!("Unknown model backend: {}", other))),
        }
    }
}

/// Built-in phrase configuration to start from when no phrase file is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhraseSet {
    /// Curated multi-word complaint phrases.
    Standard,
    /// Compact single-keyword lists.
    Keywords,
}

impl FromStr for PhraseSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "keywords" => Ok(Self::Keywords),
            other => Err(Error::Config(format!("Unknown phrase set: {}", other))),
        }
    }
}

/// Top-level triage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageConfig {
    /// HTTP server port.
    pub port: u16,
    /// Directory holding model files.
    pub model_dir: PathBuf,
    /// Similarity backend.
    pub backend: ModelBackend,
    /// Optional JSON phrase configuration overriding the built-in set.
    pub phrases_file: Option<PathBuf>,
    /// Built-in phrase set used when `phrases_file` is unset.
    pub phrase_set: PhraseSet,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            model_dir: PathBuf::from("models"),
            backend: ModelBackend::Vectors,
            phrases_file: None,
            phrase_set: PhraseSet::Standard,
        }
    }
}

impl TriageConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(p) => p
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("Invalid PORT: {}", p)))?,
            None => defaults.port,
        };

        let model_dir = lookup("TRIAGE_MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.model_dir);

        let backend = match lookup("TRIAGE_BACKEND") {
            Some(b) => b.parse()?,
            None => defaults.backend,
        };

        let phrases_file = lookup("TRIAGE_PHRASES_FILE")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let phrase_set = match lookup("TRIAGE_PHRASE_SET") {
            Some(s) => s.parse()?,
            None => defaults.phrase_set,
        };

        Ok(Self {
            port,
            model_dir,
            backend,
            phrases_file,
            phrase_set,
        })
    }
}
