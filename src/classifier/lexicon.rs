//! Keyword lexicon used when no model weights are configured.
//!
//! Deterministic and cheap: every label in [`DEFAULT_EMOTION_LABELS`] gets a logit
//! from keyword hits, then the logits go through a softmax so the output looks like
//! a real classifier distribution. `neutral` carries a bias so text without any
//! cue (including empty text) leans neutral.

use std::collections::HashSet;

use crate::constants::DEFAULT_EMOTION_LABELS;
use crate::ranking::EmotionScore;

const KEYWORD_WEIGHT: f32 = 2.5;
const NEUTRAL_BIAS: f32 = 2.0;

fn keywords(label: &str) -> &'static [&'static str] {
    match label {
        "anger" => &[
            "angry", "anger", "furious", "mad", "rage", "annoyed", "irritated", "hate", "livid",
            "outraged",
        ],
        "disgust" => &[
            "disgust", "disgusted", "disgusting", "gross", "revolting", "nasty", "sick", "vile",
            "yuck",
        ],
        "fear" => &[
            "afraid", "scared", "fear", "terrified", "anxious", "nervous", "worried", "panic",
            "dread", "frightened",
        ],
        "joy" => &[
            "happy", "joy", "glad", "delighted", "love", "great", "wonderful", "excited",
            "grateful", "awesome", "fun",
        ],
        "neutral" => &["okay", "ok", "fine", "normal", "usual", "routine"],
        "sadness" => &[
            "sad", "unhappy", "depressed", "lonely", "miss", "cry", "crying", "grief", "lost",
            "heartbroken", "down",
        ],
        "surprise" => &[
            "surprised", "surprise", "shocked", "unexpected", "wow", "amazed", "astonished",
            "suddenly",
        ],
        _ => &[],
    }
}

/// Scores `text` against the default seven-label vocabulary.
pub fn lexicon_scores(text: &str) -> Vec<EmotionScore> {
    let lower = text.to_lowercase();
    let words: HashSet<&str> = lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    let logits: Vec<f32> = DEFAULT_EMOTION_LABELS
        .iter()
        .map(|label| {
            let hits = keywords(label)
                .iter()
                .filter(|k| words.contains(*k))
                .count() as f32;
            let bias = if *label == "neutral" { NEUTRAL_BIAS } else { 0.0 };
            bias + KEYWORD_WEIGHT * hits
        })
        .collect();

    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|l| (l - max).exp()).collect();
    let sum: f32 = exps.iter().sum();

    DEFAULT_EMOTION_LABELS
        .iter()
        .zip(exps)
        .map(|(label, e)| EmotionScore::new(*label, e / sum))
        .collect()
}
