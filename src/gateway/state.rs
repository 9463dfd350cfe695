use std::sync::Arc;

use crate::classifier::Classifier;
use crate::ranking::RankingPolicy;

/// Shared, read-only request context: the loaded classifier and the ranking policy.
pub struct HandlerState<C: Classifier> {
    pub classifier: Arc<C>,

    pub policy: Arc<RankingPolicy>,
}

// Manual impl: `Arc<C>` is cloneable even when `C` is not.
impl<C: Classifier> Clone for HandlerState<C> {
    fn clone(&self) -> Self {
        Self {
            classifier: Arc::clone(&self.classifier),
            policy: Arc::clone(&self.policy),
        }
    }
}

impl<C: Classifier> HandlerState<C> {
    /// State with the default ranking policy (top 3, `> 0.1`, fallback `"Neutral"`).
    pub fn new(classifier: Arc<C>) -> Self {
        Self::with_policy(classifier, RankingPolicy::default())
    }

    pub fn with_policy(classifier: Arc<C>, policy: RankingPolicy) -> Self {
        Self {
            classifier,
            policy: Arc::new(policy),
        }
    }
}
