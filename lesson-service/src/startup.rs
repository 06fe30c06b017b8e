//! Application startup and lifecycle management.

use crate::config::{LessonConfig, SummarizerBackend};
use crate::handlers;
use crate::services::summarizer::HuggingFaceSummarizer;
use crate::services::{ContentStore, InferenceAdapter};
use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    make_request_span, metrics_middleware, permissive_cors, request_id_middleware,
};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared application state, built once at startup and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<ContentStore>,
    pub inference: Arc<InferenceAdapter>,
}

impl AppState {
    pub fn new(content: ContentStore, inference: InferenceAdapter) -> Self {
        Self {
            content: Arc::new(content),
            inference: Arc::new(inference),
        }
    }
}

/// Build the inference adapter for the configured backend.
///
/// Model initialization is attempted exactly once; failure leaves the adapter
/// unavailable but never fails startup.
pub async fn build_inference(config: &LessonConfig) -> InferenceAdapter {
    match config.summarizer.backend {
        SummarizerBackend::HuggingFace => {
            tracing::info!(
                model = %config.summarizer.model,
                api_base = %config.summarizer.api_base,
                "Loading summarization model"
            );
            InferenceAdapter::initialize(HuggingFaceSummarizer::connect(
                config.summarizer.huggingface(),
            ))
            .await
        }
        SummarizerBackend::Disabled => {
            tracing::warn!("Summarizer backend disabled by configuration");
            InferenceAdapter::unavailable("summarizer backend disabled")
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    // Explain reads the raw body; no size limit so it never answers 413.
    let explain = post(handlers::explain_ai).layer(DefaultBodyLimit::disable());

    Router::new()
        .route("/", get(handlers::home))
        .route("/lesson/:lang", get(handlers::get_lesson))
        .route("/quiz/:lang", get(handlers::get_quiz))
        .route("/explain-ai/", explain.clone())
        .route("/explain-ai", explain)
        .route("/languages", get(handlers::list_languages))
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .fallback(handlers::not_found)
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<axum::body::Body>))
        .layer(from_fn(request_id_middleware))
        .layer(permissive_cors())
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: LessonConfig) -> Result<Self, AppError> {
        let inference = build_inference(&config).await;
        let content = ContentStore::builtin();
        tracing::info!(languages = ?content.languages(), "Loaded built-in content");

        Self::build_with_state(&config, AppState::new(content, inference)).await
    }

    /// Build with pre-constructed state; used by tests to inject a summarizer.
    pub async fn build_with_state(config: &LessonConfig, state: AppState) -> Result<Self, AppError> {
        // Port 0 = random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Lesson service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.run_until(std::future::pending()).await
    }

    /// Run until `shutdown` resolves, then drain in-flight requests.
    pub async fn run_until<F>(self, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = build_router(self.state);
        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown)
            .await
    }
}
