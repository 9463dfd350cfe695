use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{debug, instrument, warn};

use crate::classifier::Classifier;
use crate::constants::{
    AFFECT_MODEL_HEADER, AFFECT_STATUS_CLASSIFIED, AFFECT_STATUS_HEADER, AFFECT_STATUS_NEUTRAL,
};
use crate::gateway::error::GatewayError;
use crate::gateway::payload::{DetectEmotionsRequest, DetectEmotionsResponse};
use crate::gateway::state::HandlerState;
use crate::ranking::{EmotionScore, RankedResult};

#[instrument(
    skip(state, payload),
    fields(text_len = tracing::field::Empty, emotions = tracing::field::Empty)
)]
pub async fn detect_emotions_handler<C: Classifier>(
    State(state): State<HandlerState<C>>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Response, GatewayError> {
    let Json(body) = payload.map_err(|e| GatewayError::InvalidRequest(e.body_text()))?;
    let request = parse_request(body)?;

    let span = tracing::Span::current();
    span.record("text_len", request.text.len());

    let scores = classify_blocking(Arc::clone(&state.classifier), request.text).await?;
    let ranked = state.policy.rank(&scores);

    span.record("emotions", ranked.len());
    debug!(
        emotions = ?ranked.labels(),
        fallback = ranked.is_fallback(),
        "Emotions detected"
    );

    Ok(make_response(ranked, state.classifier.model_id()))
}

pub(crate) fn parse_request(body: serde_json::Value) -> Result<DetectEmotionsRequest, GatewayError> {
    serde_json::from_value(body)
        .map_err(|e| GatewayError::InvalidRequest(format!("Invalid request schema: {}", e)))
}

/// Runs the classifier once on the blocking pool.
pub(crate) async fn classify_blocking<C: Classifier>(
    classifier: Arc<C>,
    text: String,
) -> Result<Vec<EmotionScore>, GatewayError> {
    let scores = tokio::task::spawn_blocking(move || classifier.classify(&text))
        .await
        .map_err(|e| GatewayError::InternalError(format!("classifier task failed: {}", e)))?
        .inspect_err(|e| warn!(error = %e, "Classifier call failed"))?;

    Ok(scores)
}

pub(crate) fn make_response(ranked: RankedResult, model_id: &str) -> Response {
    let mut headers = HeaderMap::new();

    let status = if ranked.is_fallback() {
        AFFECT_STATUS_NEUTRAL
    } else {
        AFFECT_STATUS_CLASSIFIED
    };
    headers.insert(AFFECT_STATUS_HEADER, HeaderValue::from_static(status));

    if let Ok(value) = HeaderValue::from_str(model_id) {
        headers.insert(AFFECT_MODEL_HEADER, value);
    }

    (
        StatusCode::OK,
        headers,
        Json(DetectEmotionsResponse { emotions: ranked }),
    )
        .into_response()
}
