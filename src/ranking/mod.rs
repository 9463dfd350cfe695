//! Ranking & filtering of classifier output.
//!
//! The classifier hands back one [`EmotionScore`] per label in its vocabulary. The
//! policy here turns that distribution into the short list a UI renders as emotion
//! chips:
//!
//! 1. Stable sort by score, descending (ties keep enumeration order).
//! 2. Keep the first `max_labels` entries.
//! 3. Drop entries whose score is not strictly above `threshold`.
//! 4. If nothing survives, return the fallback label alone.
//!
//! With the default policy that is top-3, `> 0.1`, fallback `"Neutral"`.
//!
//! ```
//! use affect::ranking::{EmotionScore, rank};
//!
//! let scores = vec![
//!     EmotionScore::new("joy", 0.9),
//!     EmotionScore::new("surprise", 0.3),
//!     EmotionScore::new("fear", 0.2),
//!     EmotionScore::new("anger", 0.05),
//! ];
//! assert_eq!(rank(&scores).labels(), ["joy", "surprise", "fear"]);
//! ```

pub mod policy;
pub mod types;


pub use policy::{RankingPolicy, rank};
pub use types::{EmotionScore, RankedResult};
