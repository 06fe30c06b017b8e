use crate::services::summarizer::HuggingFaceConfig;
use service_core::config::{self as core_config, get_env, get_optional_env};
use service_core::error::AppError;
use std::time::Duration;

const DEFAULT_MODEL: &str = "facebook/bart-large-cnn";
const DEFAULT_API_BASE: &str = "https://api-inference.huggingface.co";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone)]
pub struct LessonConfig {
    pub common: core_config::Config,
    pub summarizer: SummarizerConfig,
    pub otlp_endpoint: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    pub backend: SummarizerBackend,
    pub model: String,
    pub api_base: String,
    pub api_token: Option<String>,
    pub timeout_secs: u64,
    pub warmup: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummarizerBackend {
    HuggingFace,
    Disabled,
}

impl LessonConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env and APP__ prefix)
        let common_config = core_config::Config::load()?;

        Ok(LessonConfig {
            common: common_config,
            summarizer: SummarizerConfig {
                backend: get_env("SUMMARIZER_BACKEND", Some("huggingface"), false)?
                    .parse()
                    .map_err(|e: String| AppError::ConfigError(anyhow::anyhow!(e)))?,
                model: get_env("SUMMARIZER_MODEL", Some(DEFAULT_MODEL), false)?,
                api_base: get_env("SUMMARIZER_API_BASE", Some(DEFAULT_API_BASE), false)?,
                api_token: get_optional_env("HF_API_TOKEN"),
                timeout_secs: parse_env("SUMMARIZER_TIMEOUT_SECS", &DEFAULT_TIMEOUT_SECS.to_string())?,
                warmup: parse_env("SUMMARIZER_WARMUP", "true")?,
            },
            otlp_endpoint: get_optional_env("OTLP_ENDPOINT"),
        })
    }
}

impl SummarizerConfig {
    pub fn huggingface(&self) -> HuggingFaceConfig {
        HuggingFaceConfig {
            api_base: self.api_base.clone(),
            model: self.model.clone(),
            api_token: self.api_token.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            warmup: self.warmup,
        }
    }
}

impl std::str::FromStr for SummarizerBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "huggingface" | "hf" => Ok(SummarizerBackend::HuggingFace),
            "disabled" | "none" | "off" => Ok(SummarizerBackend::Disabled),
            _ => Err(format!("Invalid summarizer backend: {}", s)),
        }
    }
}

/// Read and parse a setting that falls back to `default` when unset.
fn parse_env<T>(key: &str, default: &str) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = get_env(key, Some(default), false)?;

    raw.trim().parse().map_err(|e: T::Err| {
        AppError::ConfigError(anyhow::anyhow!("{} has invalid value '{}': {}", key, raw, e))
    })
}
