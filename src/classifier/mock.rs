//! Mock classifier (fixed distribution, call counting, optional failure).

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::ranking::EmotionScore;

use super::Classifier;
use super::error::ClassifierError;

pub struct MockClassifier {
    scores: Vec<EmotionScore>,
    labels: Vec<String>,
    model_id: String,
    failure: Option<String>,
    calls: AtomicUsize,
    last_text: Mutex<Option<String>>,
}

impl MockClassifier {
    /// Returns `scores` for every input.
    pub fn new(scores: Vec<EmotionScore>) -> Self {
        let labels = scores.iter().map(|s| s.label.clone()).collect();
        Self {
            scores,
            labels,
            model_id: "mock/emotion-classifier".to_string(),
            failure: None,
            calls: AtomicUsize::new(0),
            last_text: Mutex::new(None),
        }
    }

    /// Convenience constructor from `(label, score)` pairs.
    pub fn from_pairs(pairs: &[(&str, f32)]) -> Self {
        Self::new(
            pairs
                .iter()
                .map(|(label, score)| EmotionScore::new(*label, *score))
                .collect(),
        )
    }

    /// Fails every call with an inference error carrying `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        let mut mock = Self::new(Vec::new());
        mock.failure = Some(reason.into());
        mock
    }

    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_text(&self) -> Option<String> {
        self.last_text.lock().ok().and_then(|guard| guard.clone())
    }
}

impl Classifier for MockClassifier {
    fn classify(&self, text: &str) -> Result<Vec<EmotionScore>, ClassifierError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.last_text.lock() {
            *guard = Some(text.to_string());
        }

        match &self.failure {
            Some(reason) => Err(ClassifierError::InferenceFailed {
                reason: reason.clone(),
            }),
            None => Ok(self.scores.clone()),
        }
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }

    fn labels(&self) -> &[String] {
        &self.labels
    }

    fn is_stub(&self) -> bool {
        true
    }
}
