//! Phrase configuration: built-in sets and JSON phrase files.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;
use triage_core::{PhraseSet, Result, TriageConfig};

use crate::builtin;
use crate::label::Label;

/// Raw phrase strings per label, as configured.
///
/// Deserialises from `{"high": [...], "medium": [...], "low": [...]}`;
/// missing keys are empty lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhraseConfig {
    #[serde(alias = "HIGH", alias = "High")]
    pub high: Vec<String>,
    #[serde(alias = "MEDIUM", alias = "Medium")]
    pub medium: Vec<String>,
    #[serde(alias = "LOW", alias = "Low")]
    pub low: Vec<String>,
}

impl PhraseConfig {
    pub fn new<S: Into<String>>(
        high: impl IntoIterator<Item = S>,
        medium: impl IntoIterator<Item = S>,
        low: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            high: high.into_iter().map(Into::into).collect(),
            medium: medium.into_iter().map(Into::into).collect(),
            low: low.into_iter().map(Into::into).collect(),
        }
    }

    /// The curated complaint phrase lists.
    pub fn standard() -> Self {
        Self::new(
            builtin::STANDARD_HIGH.iter().copied(),
            builtin::STANDARD_MEDIUM.iter().copied(),
            builtin::STANDARD_LOW.iter().copied(),
        )
    }

    /// The compact keyword lists.
    pub fn keywords() -> Self {
        Self::new(
            builtin::KEYWORD_HIGH.iter().copied(),
            builtin::KEYWORD_MEDIUM.iter().copied(),
            builtin::KEYWORD_LOW.iter().copied(),
        )
    }

    pub fn builtin(set: PhraseSet) -> Self {
        match set {
            PhraseSet::Standard => Self::standard(),
            PhraseSet::Keywords => Self::keywords(),
        }
    }

    /// Read a JSON phrase file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&data)?;
        Ok(config)
    }

    /// Phrase configuration selected by the runtime config: the phrase
    /// file when one is set, otherwise the built-in set.
    pub fn resolve(config: &TriageConfig) -> Result<Self> {
        match &config.phrases_file {
            Some(path) => {
                info!("Loading phrases from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::builtin(config.phrase_set)),
        }
    }

    pub fn phrases(&self, label: Label) -> &[String] {
        match label {
            Label::High => &self.high,
            Label::Medium => &self.medium,
            Label::Low => &self.low,
        }
    }

    pub fn is_empty(&self) -> bool {
        Label::ALL.iter().all(|&l| self.phrases(l).is_empty())
    }
}
