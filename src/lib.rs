//! Affect library crate (used by the server binary and integration tests).
//!
//! Free text goes in, a short ranked list of emotion labels comes out.
//!
//! # Public API Surface
//!
//! ## Core
//! - [`rank`], [`RankingPolicy`] - turn a per-label distribution into at most three
//!   labels above `0.1`, or `["Neutral"]`
//! - [`EmotionScore`], [`RankedResult`] - input and output of the policy
//!
//! ## Classifier
//! - [`Classifier`] - adapter boundary (`classify(text) -> [EmotionScore]`)
//! - [`EmotionClassifier`], [`ClassifierConfig`] - candle RoBERTa classifier or stub lexicon
//!
//! ## Server
//! - [`Config`], [`ConfigError`] - `AFFECT_*` environment configuration
//! - [`gateway`] - Axum router, handlers and error mapping
//! - [`health_check`] - `--health-check` client for container liveness checks
//!
//! ## Test/Mock Support
//! [`MockClassifier`] is available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod classifier;
pub mod config;
pub mod constants;
pub mod gateway;
pub mod health_check;
pub mod ranking;

pub use classifier::{Classifier, ClassifierConfig, ClassifierError, EmotionClassifier};
#[cfg(any(test, feature = "mock"))]
pub use classifier::MockClassifier;
pub use config::{Config, ConfigError};
pub use constants::{DEFAULT_MAX_EMOTIONS, DEFAULT_SCORE_THRESHOLD, NEUTRAL_LABEL};
pub use gateway::{HandlerState, create_router_with_cors, create_router_with_state};
pub use ranking::{EmotionScore, RankedResult, RankingPolicy, rank};
