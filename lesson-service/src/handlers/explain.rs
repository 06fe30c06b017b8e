use crate::models::ExplainRequest;
use crate::startup::AppState;
use axum::{body::Bytes, extract::State, response::IntoResponse, Json};

/// `POST /explain-ai/`: summarize the `question` field of the body.
///
/// The body is read raw so that a missing or malformed payload degrades to an
/// empty question instead of an extractor rejection. The router disables the
/// default body limit on this route, so large bodies are read in full.
pub async fn explain_ai(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let question = ExplainRequest::from_body(&body).question_text();

    tracing::debug!(question_len = question.len(), "Explain request");

    Json(state.inference.explain(&question).await)
}
