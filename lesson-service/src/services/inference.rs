//! Inference adapter wrapping the summarization model.
//!
//! The adapter is built once at startup. If the model cannot be initialized
//! it stays unavailable for the life of the process; every other route keeps
//! working.

use crate::models::ExplainResponse;
use crate::services::summarizer::{Summarizer, SummarizerError, SummaryParams};
use metrics::counter;
use std::future::Future;
use std::sync::Arc;

/// Answer returned while no model is available.
pub const MODEL_NOT_READY_MESSAGE: &str = "AI model is not ready. Please try later.";

enum InferenceState {
    Ready(Arc<dyn Summarizer>),
    Unavailable { reason: String },
}

pub struct InferenceAdapter {
    state: InferenceState,
}

impl InferenceAdapter {
    /// Await one initialization attempt and record its outcome.
    pub async fn initialize<S, F>(init: F) -> Self
    where
        S: Summarizer + 'static,
        F: Future<Output = Result<S, SummarizerError>>,
    {
        match init.await {
            Ok(summarizer) => {
                tracing::info!(model = %summarizer.model_id(), "Summarization model ready");
                Self::ready(Arc::new(summarizer))
            }
            Err(e) => {
                tracing::error!(error = %e, "Model load failed; explain endpoint disabled");
                Self::unavailable(e.to_string())
            }
        }
    }

    pub fn ready(summarizer: Arc<dyn Summarizer>) -> Self {
        Self {
            state: InferenceState::Ready(summarizer),
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            state: InferenceState::Unavailable {
                reason: reason.into(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, InferenceState::Ready(_))
    }

    /// Why the model is unavailable, if it is.
    pub fn unavailable_reason(&self) -> Option<&str> {
        match &self.state {
            InferenceState::Ready(_) => None,
            InferenceState::Unavailable { reason } => Some(reason),
        }
    }

    /// Summarize `question` with the fixed explain bounds.
    ///
    /// Never fails: unavailability and model errors are both reported in the
    /// returned value.
    pub async fn explain(&self, question: &str) -> ExplainResponse {
        let summarizer = match &self.state {
            InferenceState::Ready(s) => s,
            InferenceState::Unavailable { .. } => {
                counter!("summarizer_requests_total", "outcome" => "unavailable").increment(1);
                return ExplainResponse::Answer(MODEL_NOT_READY_MESSAGE.to_string());
            }
        };

        let result = summarizer
            .summarize(question, &SummaryParams::EXPLAIN)
            .await
            .and_then(|summaries| {
                summaries.into_iter().next().ok_or_else(|| {
                    SummarizerError::InvalidResponse("model returned no summaries".to_string())
                })
            });

        match result {
            Ok(summary) => {
                counter!("summarizer_requests_total", "outcome" => "ok").increment(1);
                ExplainResponse::Answer(summary.summary_text)
            }
            Err(e) => {
                tracing::warn!(
                    model = %summarizer.model_id(),
                    error = %e,
                    "Summarization failed"
                );
                counter!("summarizer_requests_total", "outcome" => "error").increment(1);
                ExplainResponse::Error(e.to_string())
            }
        }
    }
}
