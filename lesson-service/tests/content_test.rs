mod common;

use axum::http::StatusCode;
use common::{get_json, unavailable_router};
use serde_json::json;

#[tokio::test]
async fn home_reports_service_running() {
    let (status, body) = get_json(unavailable_router(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"message": "Multilingual Learning Assistant API Running 🚀"})
    );
}

#[tokio::test]
async fn known_lessons_carry_canonical_language_name() {
    for (key, name) in [("english", "English"), ("tamil", "Tamil")] {
        let (status, body) = get_json(unavailable_router(), &format!("/lesson/{}", key)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["lesson"]["language"], name);
        assert!(body["lesson"]["title"].is_string());
        assert!(body["lesson"]["content"].is_string());
        assert!(body["lesson"]["quiz_id"].is_string());
    }
}

#[tokio::test]
async fn english_lesson_matches_published_content() {
    let (_, body) = get_json(unavailable_router(), "/lesson/english").await;

    assert_eq!(
        body,
        json!({
            "lesson": {
                "language": "English",
                "title": "Welcome to the Platform",
                "content": "Hello! This is your first lesson on simple English grammar. We will learn about verbs and nouns today.",
                "quiz_id": "quiz-eng-101"
            }
        })
    );
}

#[tokio::test]
async fn unknown_lesson_returns_error_payload_with_200() {
    let (status, body) = get_json(unavailable_router(), "/lesson/Klingon").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"lesson": {"error": "No lesson found for Klingon"}})
    );
}

#[tokio::test]
async fn unknown_quiz_returns_empty_list() {
    let (status, body) = get_json(unavailable_router(), "/quiz/klingon").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"quiz": []}));
}

#[tokio::test]
async fn undecodable_language_key_still_answers_in_body() {
    let (status, body) = get_json(unavailable_router(), "/lesson/%FF").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"lesson": {"error": "No lesson found for \u{FFFD}"}})
    );

    let (status, body) = get_json(unavailable_router(), "/quiz/%FF").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"quiz": []}));
}

#[tokio::test]
async fn percent_encoded_language_key_is_decoded() {
    let (_, body) = get_json(unavailable_router(), "/lesson/%45nglish").await;
    assert_eq!(body["lesson"]["language"], "English");
}

#[tokio::test]
async fn lesson_lookup_ignores_case() {
    let (_, upper) = get_json(unavailable_router(), "/lesson/ENGLISH").await;
    let (_, lower) = get_json(unavailable_router(), "/lesson/english").await;
    assert_eq!(upper, lower);

    let (_, mixed) = get_json(unavailable_router(), "/quiz/TaMiL").await;
    let (_, lower) = get_json(unavailable_router(), "/quiz/tamil").await;
    assert_eq!(mixed, lower);
}

#[tokio::test]
async fn tamil_quiz_has_two_questions() {
    let (status, body) = get_json(unavailable_router(), "/quiz/tamil").await;

    assert_eq!(status, StatusCode::OK);
    let quiz = body["quiz"].as_array().expect("quiz should be an array");
    assert_eq!(quiz.len(), 2);
    assert_eq!(quiz[0]["question"], "தமிழ் எழுத்துக்களின் எண்ணிக்கை எவ்வளவு?");
    assert_eq!(quiz[0]["answer"], "247");
    assert_eq!(quiz[0]["options"], json!(["247", "200", "180", "300"]));
}

#[tokio::test]
async fn every_served_answer_is_one_of_four_options() {
    for lang in ["english", "tamil"] {
        let (_, body) = get_json(unavailable_router(), &format!("/quiz/{}", lang)).await;
        let quiz = body["quiz"].as_array().unwrap();
        assert!(!quiz.is_empty());

        for question in quiz {
            let options = question["options"].as_array().unwrap();
            assert_eq!(options.len(), 4);
            assert!(
                options.contains(&question["answer"]),
                "answer {} not in {:?}",
                question["answer"],
                options
            );
        }
    }
}

#[tokio::test]
async fn languages_lists_known_keys() {
    let (status, body) = get_json(unavailable_router(), "/languages").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"languages": ["english", "tamil"]}));
}

#[tokio::test]
async fn unknown_route_is_a_json_404() {
    let (status, body) = get_json(unavailable_router(), "/lessons").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("/lessons"));
}
