//! Hugging Face Inference API summarizer.
//!
//! Sends text to a hosted summarization model (`facebook/bart-large-cnn` by
//! default) and returns the generated summaries.

use super::{Summarizer, SummarizerError, Summary, SummaryParams};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Text used to check at startup that the model can be loaded and invoked.
const WARMUP_TEXT: &str = "The quick brown fox jumps over the lazy dog. \
    It is a sentence that contains every letter of the English alphabet \
    and is often used to test typewriters and computer keyboards.";

/// Hugging Face summarizer configuration.
#[derive(Debug, Clone)]
pub struct HuggingFaceConfig {
    pub api_base: String,
    pub model: String,
    pub api_token: Option<String>,
    pub timeout: Duration,
    pub warmup: bool,
}

pub struct HuggingFaceSummarizer {
    config: HuggingFaceConfig,
    api_token: String,
    client: Client,
}

impl HuggingFaceSummarizer {
    /// Build the client and, if enabled, run one warm-up summarization.
    ///
    /// Any failure here means the model is not usable for this process.
    pub async fn connect(config: HuggingFaceConfig) -> Result<Self, SummarizerError> {
        let api_token = config
            .api_token
            .clone()
            .ok_or_else(|| SummarizerError::NotConfigured("HF_API_TOKEN is not set".to_string()))?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                SummarizerError::NotConfigured(format!("Failed to create HTTP client: {}", e))
            })?;

        let summarizer = Self {
            config,
            api_token,
            client,
        };

        if summarizer.config.warmup {
            summarizer
                .summarize(WARMUP_TEXT, &SummaryParams::EXPLAIN)
                .await?;
            tracing::info!(model = %summarizer.config.model, "Summarization model warmed up");
        }

        Ok(summarizer)
    }

    fn model_url(&self) -> String {
        format!(
            "{}/models/{}",
            self.config.api_base.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl Summarizer for HuggingFaceSummarizer {
    async fn summarize(
        &self,
        text: &str,
        params: &SummaryParams,
    ) -> Result<Vec<Summary>, SummarizerError> {
        let request = SummarizationRequest {
            inputs: text,
            parameters: params,
            options: RequestOptions {
                wait_for_model: true,
            },
        };

        tracing::debug!(
            model = %self.config.model,
            input_len = text.len(),
            "Sending request to Hugging Face inference API"
        );

        let response = self
            .client
            .post(self.model_url())
            .bearer_auth(&self.api_token)
            .json(&request)
            .send()
            .await
            .map_err(|e| SummarizerError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            if status == StatusCode::TOO_MANY_REQUESTS {
                return Err(SummarizerError::RateLimited);
            }

            let error_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&error_text)
                .map(|body| body.error)
                .unwrap_or(error_text);

            return Err(SummarizerError::Api(format!(
                "Hugging Face API error {}: {}",
                status, message
            )));
        }

        response
            .json::<Vec<Summary>>()
            .await
            .map_err(|e| SummarizerError::InvalidResponse(format!("Failed to parse response: {}", e)))
    }

    fn model_id(&self) -> &str {
        &self.config.model
    }
}

// Hugging Face API types

#[derive(Debug, Serialize)]
struct SummarizationRequest<'a> {
    inputs: &'a str,
    parameters: &'a SummaryParams,
    options: RequestOptions,
}

#[derive(Debug, Serialize)]
struct RequestOptions {
    wait_for_model: bool,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
}
