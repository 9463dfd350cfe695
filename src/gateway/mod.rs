//! HTTP gateway (Axum): `POST /detect_emotions` plus liveness/readiness probes.
//!
//! This module is primarily used by the `affect` server binary.

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;


use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, Method, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

pub use handler::detect_emotions_handler;
pub use state::HandlerState;

use crate::classifier::Classifier;
use crate::constants::{AFFECT_STATUS_HEADER, AFFECT_STATUS_HEALTHY, AFFECT_STATUS_READY};

/// Router with CORS open to any origin.
pub fn create_router_with_state<C: Classifier>(state: HandlerState<C>) -> Router {
    create_router_with_cors(state, cors_layer(&["*".to_string()]))
}

pub fn create_router_with_cors<C: Classifier>(state: HandlerState<C>, cors: CorsLayer) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler::<C>))
        .route("/detect_emotions", post(detect_emotions_handler::<C>))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS for browser callers: `POST` from the given origins (`"*"` = any), any headers.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::POST])
        .allow_headers(Any);

    if origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(allowed))
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(serde::Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub components: ComponentStatus,
}

#[derive(serde::Serialize)]
pub struct ComponentStatus {
    pub http: &'static str,
    pub classifier: &'static str,
    pub classifier_mode: &'static str,
    pub model: String,
    pub labels: usize,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        AFFECT_STATUS_HEADER,
        HeaderValue::from_static(AFFECT_STATUS_HEALTHY),
    );

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse { status: "ok" }),
    )
        .into_response()
}

/// The classifier is loaded before the listener binds, so a serving process is ready
/// as long as the vocabulary is non-empty.
#[tracing::instrument(skip(state))]
pub async fn ready_handler<C: Classifier>(State(state): State<HandlerState<C>>) -> Response {
    let classifier = &state.classifier;
    let is_ready = !classifier.labels().is_empty();

    let components = ComponentStatus {
        http: AFFECT_STATUS_READY,
        classifier: if is_ready { AFFECT_STATUS_READY } else { "pending" },
        classifier_mode: if classifier.is_stub() { "stub" } else { "real" },
        model: classifier.model_id().to_string(),
        labels: classifier.labels().len(),
    };

    let (status_code, status_msg) = if is_ready {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "pending")
    };

    let mut headers = HeaderMap::new();
    headers.insert(AFFECT_STATUS_HEADER, HeaderValue::from_static(status_msg));

    (
        status_code,
        headers,
        Json(ReadyResponse {
            status: status_msg,
            components,
        }),
    )
        .into_response()
}
