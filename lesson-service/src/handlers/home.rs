use axum::{response::IntoResponse, Json};
use serde_json::json;

pub const HOME_MESSAGE: &str = "Multilingual Learning Assistant API Running 🚀";

pub async fn home() -> impl IntoResponse {
    Json(json!({ "message": HOME_MESSAGE }))
}
