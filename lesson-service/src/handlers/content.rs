use crate::models::{LessonResponse, QuizResponse};
use crate::startup::AppState;
use axum::{
    extract::State,
    http::Uri,
    response::{IntoResponse, Response},
    Json,
};
use percent_encoding::percent_decode_str;
use serde_json::json;
use std::borrow::Cow;

/// The `{lang}` segment of `/lesson/{lang}` or `/quiz/{lang}`.
///
/// Decoded lossily: bytes that are not valid UTF-8 become U+FFFD, so the
/// lookup misses in the body instead of the request being rejected.
fn lang_segment(uri: &Uri) -> Cow<'_, str> {
    let raw = uri.path().rsplit('/').next().unwrap_or_default();
    percent_decode_str(raw).decode_utf8_lossy()
}

pub async fn get_lesson(State(state): State<AppState>, uri: Uri) -> Response {
    let lang = lang_segment(&uri);
    let lesson = state.content.lesson(&lang);
    if !lesson.is_found() {
        tracing::debug!(lang = %lang, "No lesson for language");
    }

    Json(LessonResponse { lesson }).into_response()
}

pub async fn get_quiz(State(state): State<AppState>, uri: Uri) -> Response {
    let lang = lang_segment(&uri);
    Json(QuizResponse {
        quiz: state.content.quiz(&lang),
    })
    .into_response()
}

pub async fn list_languages(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({ "languages": state.content.languages() }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_is_percent_decoded() {
        let uri: Uri = "/lesson/Tamil%20Nadu".parse().unwrap();
        assert_eq!(lang_segment(&uri), "Tamil Nadu");
    }

    #[test]
    fn invalid_utf8_segment_is_replaced() {
        let uri: Uri = "/quiz/%FF".parse().unwrap();
        assert_eq!(lang_segment(&uri), "\u{FFFD}");
    }
}
