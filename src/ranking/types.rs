use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One `(label, confidence)` pair from the classifier's output distribution.
pub struct EmotionScore {
    /// Label as named by the model vocabulary.
    pub label: String,
    /// Confidence in `[0, 1]`.
    pub score: f32,
}

impl EmotionScore {
    /// Creates a new score entry.
    pub fn new(label: impl Into<String>, score: f32) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// Ordered, filtered, capped label list.
///
/// Only [`RankingPolicy`](super::RankingPolicy) builds these, so a value is never
/// empty and never longer than the policy cap. Serializes as a plain JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RankedResult {
    labels: Vec<String>,
    #[serde(skip)]
    fallback: bool,
}

impl RankedResult {
    pub(super) fn ranked(labels: Vec<String>) -> Self {
        debug_assert!(!labels.is_empty());
        Self {
            labels,
            fallback: false,
        }
    }

    pub(super) fn fallback(label: &str) -> Self {
        Self {
            labels: vec![label.to_string()],
            fallback: true,
        }
    }

    /// Labels, highest score first.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns `true` if no label cleared the threshold and the fallback was used.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    pub fn into_labels(self) -> Vec<String> {
        self.labels
    }
}
