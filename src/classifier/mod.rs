//! Emotion classifier adapter.
//!
//! [`Classifier`] is the boundary the gateway depends on: text in, one
//! [`EmotionScore`] per vocabulary label out (`return_all_scores` semantics, never
//! just the argmax). Anything honouring that contract can back the service.
//!
//! - [`EmotionClassifier`] runs a RoBERTa-family checkpoint with candle, or a
//!   keyword lexicon when no model path is configured (stub mode).
//! - [`MockClassifier`] returns a fixed distribution and counts calls (tests and the
//!   `mock` feature).

pub mod config;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod emotion;
mod error;
pub mod labels;
mod lexicon;
#[cfg(any(test, feature = "mock"))]
mod mock;
/// candle model wrapper.
pub mod model;
/// Tokenizer loading.
pub mod tokenizer;


pub use config::ClassifierConfig;
pub use emotion::EmotionClassifier;
pub use error::ClassifierError;
pub use lexicon::lexicon_scores;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockClassifier;

use crate::ranking::EmotionScore;

/// Text → full per-label distribution.
///
/// Implementations are shared across requests behind an `Arc` and may be called
/// concurrently from the blocking pool.
pub trait Classifier: Send + Sync + 'static {
    /// Scores `text` against every label in [`labels`](Classifier::labels), in
    /// vocabulary order. Empty text is valid input.
    fn classify(&self, text: &str) -> Result<Vec<EmotionScore>, ClassifierError>;

    /// Configured model identity.
    fn model_id(&self) -> &str;

    /// Label vocabulary, in the order `classify` reports it.
    fn labels(&self) -> &[String];

    /// `true` when no real model weights back this classifier.
    fn is_stub(&self) -> bool {
        false
    }
}
