use std::cmp::Ordering;

use tracing::debug;

use crate::constants::{DEFAULT_MAX_EMOTIONS, DEFAULT_SCORE_THRESHOLD, NEUTRAL_LABEL};

use super::types::{EmotionScore, RankedResult};

/// Threshold + cap + fallback applied to a classifier distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingPolicy {
    threshold: f32,
    max_labels: usize,
    fallback_label: String,
}

impl Default for RankingPolicy {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SCORE_THRESHOLD,
            max_labels: DEFAULT_MAX_EMOTIONS,
            fallback_label: NEUTRAL_LABEL.to_string(),
        }
    }
}

impl RankingPolicy {
    pub fn new(threshold: f32, max_labels: usize) -> Self {
        Self {
            threshold,
            max_labels,
            ..Default::default()
        }
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        assert!(
            (0.0..=1.0).contains(&threshold),
            "threshold must be between 0.0 and 1.0"
        );
        self.threshold = threshold;
        self
    }

    pub fn with_max_labels(mut self, max_labels: usize) -> Self {
        assert!(max_labels >= 1, "max_labels must be at least 1");
        self.max_labels = max_labels;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(format!(
                "threshold must be between 0.0 and 1.0, got {}",
                self.threshold
            ));
        }

        if self.max_labels == 0 {
            return Err("max_labels must be at least 1".to_string());
        }

        Ok(())
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn max_labels(&self) -> usize {
        self.max_labels
    }

    pub fn fallback_label(&self) -> &str {
        &self.fallback_label
    }

    /// Returns `true` if `score` would survive the threshold filter.
    pub fn is_reportable(&self, score: f32) -> bool {
        score > self.threshold
    }

    /// Ranks a distribution. Never fails, never returns an empty result.
    pub fn rank(&self, scores: &[EmotionScore]) -> RankedResult {
        let mut ordered: Vec<&EmotionScore> = scores.iter().collect();

        // `sort_by` is stable, so exact ties keep enumeration order.
        ordered.sort_by(|a, b| descending(a.score, b.score));

        let labels: Vec<String> = ordered
            .into_iter()
            .take(self.max_labels)
            .filter(|s| self.is_reportable(s.score))
            .map(|s| s.label.clone())
            .collect();

        debug!(
            candidates = scores.len(),
            kept = labels.len(),
            threshold = self.threshold,
            "Ranked emotion distribution"
        );

        if labels.is_empty() {
            RankedResult::fallback(&self.fallback_label)
        } else {
            RankedResult::ranked(labels)
        }
    }
}

/// Ranks with the default policy (top 3, `> 0.1`, fallback `"Neutral"`).
pub fn rank(scores: &[EmotionScore]) -> RankedResult {
    RankingPolicy::default().rank(scores)
}

// NaN sinks below every real score so the comparator stays a total order.
fn descending(a: f32, b: f32) -> Ordering {
    let key = |s: f32| if s.is_nan() { f32::NEG_INFINITY } else { s };
    key(b).total_cmp(&key(a))
}
