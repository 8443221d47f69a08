//! Generative text client.
//!
//! `LlmClient` is the seam between fusion logic and the text service. The
//! production implementation talks to an OpenAI-compatible chat endpoint;
//! `FakeLlmClient` returns scripted answers for tests.

use crate::config::LlmConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;
use tracing::debug;

/// System message sent with every completion.
pub const SYSTEM_PROMPT: &str = "You are a company data expert.";

/// LLM errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LlmError {
    #[error("LLM is disabled in configuration")]
    Disabled,

    #[error("No API key configured for the completion endpoint")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("HTTP {0} from completion endpoint")]
    Status(u16),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Request timeout after {0} seconds")]
    Timeout(u64),

    #[error("LLM returned empty response")]
    EmptyResponse,
}

/// Text completion service.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(
        &self,
        prompt: &str,
        max_output_tokens: u32,
        temperature: f32,
    ) -> Result<String, LlmError>;
}

/// OpenAI-compatible chat completions client
pub struct OpenAiClient {
    config: LlmConfig,
    http: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(config: LlmConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { config, http })
    }

    fn url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.config.endpoint.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn complete(
        &self,
        prompt: &str,
        max_output_tokens: u32,
        temperature: f32,
    ) -> Result<String, LlmError> {
        if !self.config.enabled {
            return Err(LlmError::Disabled);
        }
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(LlmError::MissingApiKey)?;

        let body = serde_json::json!({
            "model": self.config.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": prompt},
            ],
            "max_tokens": max_output_tokens,
            "temperature": temperature,
        });

        let response = self
            .http
            .post(self.url())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::Timeout(self.config.timeout_secs)
                } else {
                    LlmError::Http(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(LlmError::Status(response.status().as_u16()));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        let text = extract_content(&json)?;
        debug!(model = %self.config.model, chars = text.len(), "completion received");
        Ok(text)
    }
}

/// Pull `choices[0].message.content` out of a chat completion.
pub fn extract_content(json: &serde_json::Value) -> Result<String, LlmError> {
    json.get("choices")
        .and_then(|v| v.get(0))
        .and_then(|v| v.get("message"))
        .and_then(|v| v.get("content"))
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or(LlmError::EmptyResponse)
}

/// Fake LLM client for testing
///
/// Answers are chosen by the first rule whose needle occurs in the prompt,
/// else the default. Every prompt is recorded.
pub struct FakeLlmClient {
    rules: Vec<(String, Result<String, LlmError>)>,
    default: Result<String, LlmError>,
    prompts: Mutex<Vec<String>>,
}

impl FakeLlmClient {
    /// Always answer with `text`
    pub fn always(text: &str) -> Self {
        Self {
            rules: Vec::new(),
            default: Ok(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Always fail with `error`
    pub fn always_error(error: LlmError) -> Self {
        Self {
            rules: Vec::new(),
            default: Err(error),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Answer `text` for prompts containing `needle`
    pub fn with_rule(mut self, needle: &str, text: &str) -> Self {
        self.rules.push((needle.to_string(), Ok(text.to_string())));
        self
    }

    /// Fail with `error` for prompts containing `needle`
    pub fn with_error_rule(mut self, needle: &str, error: LlmError) -> Self {
        self.rules.push((needle.to_string(), Err(error)));
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmClient for FakeLlmClient {
    async fn complete(
        &self,
        prompt: &str,
        _max_output_tokens: u32,
        _temperature: f32,
    ) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        self.rules
            .iter()
            .find(|(needle, _)| prompt.contains(needle.as_str()))
            .map(|(_, answer)| answer.clone())
            .unwrap_or_else(|| self.default.clone())
    }
}
