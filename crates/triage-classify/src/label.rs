//! Urgency labels and per-label score maps.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use triage_core::Error;

/// Urgency tier. Declaration order is priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    High,
    Medium,
    Low,
}

impl Label {
    /// All labels, highest priority first.
    pub const ALL: [Label; 3] = [Label::High, Label::Medium, Label::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::High => "High",
            Label::Medium => "Medium",
            Label::Low => "Low",
        }
    }

    fn slot(self) -> usize {
        match self {
            Label::High => 0,
            Label::Medium => 1,
            Label::Low => 2,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Label {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Label::High),
            "medium" => Ok(Label::Medium),
            "low" => Ok(Label::Low),
            other => Err(Error::InvalidInput(format!("Unknown label: {}", other))),
        }
    }
}

/// A value per label.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LabelMap<T> {
    values: [T; 3],
}

impl<T: Copy> LabelMap<T> {
    /// (label, value) pairs in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (Label, T)> + '_ {
        Label::ALL.into_iter().map(move |label| (label, self[label]))
    }
}

impl<T> Index<Label> for LabelMap<T> {
    type Output = T;

    fn index(&self, label: Label) -> &T {
        &self.values[label.slot()]
    }
}

impl<T> IndexMut<Label> for LabelMap<T> {
    fn index_mut(&mut self, label: Label) -> &mut T {
        &mut self.values[label.slot()]
    }
}

/// Exact phrase occurrences per label.
pub type MatchCount = LabelMap<u32>;

/// Accumulated above-threshold similarity per label.
pub type SimilarityScore = LabelMap<f32>;
