use serde::{Deserialize, Serialize};

use crate::ranking::RankedResult;

/// `POST /detect_emotions` body. `text` is required; empty is allowed.
#[derive(Deserialize, Debug, Clone)]
pub struct DetectEmotionsRequest {
    pub text: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct DetectEmotionsResponse {
    pub emotions: RankedResult,
}
