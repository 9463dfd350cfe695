//! Cross-cutting, shared constants.
//!
//! The ranking defaults here are the values the service ships with; [`RankingPolicy`]
//! can override threshold and cap at runtime, but the fallback label is fixed.
//!
//! [`RankingPolicy`]: crate::ranking::RankingPolicy

/// Scores must be strictly greater than this to be reported.
pub const DEFAULT_SCORE_THRESHOLD: f32 = 0.1;

/// Maximum number of labels returned per request.
pub const DEFAULT_MAX_EMOTIONS: usize = 3;

/// Sentinel label returned when nothing clears the threshold.
pub const NEUTRAL_LABEL: &str = "Neutral";

/// Model identity used when `AFFECT_MODEL_ID` is not set.
pub const DEFAULT_MODEL_ID: &str = "j-hartmann/emotion-english-distilroberta-base";

/// Tokenizer truncation length for RoBERTa-family classifiers.
pub const MAX_SEQ_LEN: usize = 512;

/// Label vocabulary of the default model, in `id2label` order.
///
/// The stub classifier reports exactly these labels.
pub const DEFAULT_EMOTION_LABELS: [&str; 7] = [
    "anger", "disgust", "fear", "joy", "neutral", "sadness", "surprise",
];

pub const AFFECT_STATUS_HEADER: &str = "X-Affect-Status";
pub const AFFECT_MODEL_HEADER: &str = "X-Affect-Model";

pub const AFFECT_STATUS_CLASSIFIED: &str = "classified";
pub const AFFECT_STATUS_NEUTRAL: &str = "neutral";
pub const AFFECT_STATUS_HEALTHY: &str = "healthy";
pub const AFFECT_STATUS_READY: &str = "ready";
