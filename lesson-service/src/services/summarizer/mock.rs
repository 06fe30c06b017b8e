//! Mock summarizer for testing.

use super::{Summarizer, SummarizerError, Summary, SummaryParams};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

enum Behaviour {
    Echo,
    Fixed(String),
    Empty,
    Fail(String),
}

/// Deterministic summarizer that never leaves the process.
pub struct MockSummarizer {
    behaviour: Behaviour,
    calls: AtomicUsize,
}

impl MockSummarizer {
    /// Returns the first `max_length` whitespace-separated words of the input.
    pub fn echo() -> Self {
        Self::with(Behaviour::Echo)
    }

    pub fn fixed(summary: impl Into<String>) -> Self {
        Self::with(Behaviour::Fixed(summary.into()))
    }

    /// Succeeds with no summaries at all.
    pub fn empty() -> Self {
        Self::with(Behaviour::Empty)
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::with(Behaviour::Fail(message.into()))
    }

    fn with(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `summarize` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Summarizer for MockSummarizer {
    async fn summarize(
        &self,
        text: &str,
        params: &SummaryParams,
    ) -> Result<Vec<Summary>, SummarizerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let summary_text = match &self.behaviour {
            Behaviour::Echo => text
                .split_whitespace()
                .take(params.max_length as usize)
                .collect::<Vec<_>>()
                .join(" "),
            Behaviour::Fixed(summary) => summary.clone(),
            Behaviour::Empty => return Ok(Vec::new()),
            Behaviour::Fail(message) => return Err(SummarizerError::Api(message.clone())),
        };

        Ok(vec![Summary { summary_text }])
    }

    fn model_id(&self) -> &str {
        "mock-summarizer"
    }
}
