//! Summarization backends.
//!
//! The inference adapter talks to a `Summarizer` trait object so the hosted
//! model can be swapped for the mock in tests.

pub mod huggingface;
pub mod mock;

pub use huggingface::{HuggingFaceConfig, HuggingFaceSummarizer};
pub use mock::MockSummarizer;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for summarizer operations.
#[derive(Error, Debug)]
pub enum SummarizerError {
    #[error("Summarizer not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Generation bounds passed to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryParams {
    pub max_length: u32,
    pub min_length: u32,
    pub do_sample: bool,
}

impl SummaryParams {
    /// Bounds used for every explain request: 10 to 80 tokens, greedy decoding.
    pub const EXPLAIN: SummaryParams = SummaryParams {
        max_length: 80,
        min_length: 10,
        do_sample: false,
    };
}

/// One generated summary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Summary {
    pub summary_text: String,
}

/// A text summarization model.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize `text`. Backends may return several candidates; callers use the first.
    async fn summarize(
        &self,
        text: &str,
        params: &SummaryParams,
    ) -> Result<Vec<Summary>, SummarizerError>;

    /// Identifier of the underlying model.
    fn model_id(&self) -> &str;
}
