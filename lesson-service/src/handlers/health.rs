use crate::services::get_metrics;
use crate::startup::AppState;
use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::IntoResponse,
    Json,
};
use serde_json::json;
use service_core::error::AppError;

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let summarizer = if state.inference.is_ready() {
        "ready"
    } else {
        "unavailable"
    };

    let mut body = json!({
        "status": "ok",
        "service": "lesson-service",
        "version": env!("CARGO_PKG_VERSION"),
        "summarizer": summarizer,
    });

    if let Some(reason) = state.inference.unavailable_reason() {
        body["summarizer_reason"] = json!(reason);
    }

    Json(body)
}

/// Content is always servable, so readiness does not depend on the model.
pub async fn readiness_check() -> impl IntoResponse {
    StatusCode::OK
}

pub async fn metrics_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        get_metrics(),
    )
}

pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(anyhow::anyhow!("No route for {}", uri.path()))
}
