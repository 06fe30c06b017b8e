#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use lesson_service::config::{LessonConfig, SummarizerBackend, SummarizerConfig};
use lesson_service::services::{ContentStore, InferenceAdapter};
use lesson_service::startup::{build_router, AppState, Application};
use serde_json::Value;
use tower::util::ServiceExt;

/// Configuration that binds a random port and never reaches out to a model.
pub fn test_config() -> LessonConfig {
    let mut common = service_core::config::Config::default();
    common.port = 0;
    common.log_level = "error".to_string();

    LessonConfig {
        common,
        summarizer: SummarizerConfig {
            backend: SummarizerBackend::Disabled,
            model: "facebook/bart-large-cnn".to_string(),
            api_base: "http://127.0.0.1:9".to_string(),
            api_token: None,
            timeout_secs: 5,
            warmup: false,
        },
        otlp_endpoint: None,
    }
}

pub fn router_with(inference: InferenceAdapter) -> Router {
    build_router(AppState::new(ContentStore::builtin(), inference))
}

pub fn unavailable_router() -> Router {
    router_with(InferenceAdapter::unavailable("model load failed"))
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).expect("response body should be JSON");
    (status, json)
}

pub async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    send(
        router,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

pub async fn post_raw(router: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    send(
        router,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    /// Spawn the full HTTP server with the given state on a random port.
    pub async fn spawn_with_state(state: AppState) -> Self {
        let app = Application::build_with_state(&test_config(), state)
            .await
            .expect("Failed to build test application");
        Self::run(app).await
    }

    /// Spawn the server through the normal startup path.
    pub async fn spawn(config: LessonConfig) -> Self {
        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        Self::run(app).await
    }

    async fn run(app: Application) -> Self {
        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address, port }
    }
}
