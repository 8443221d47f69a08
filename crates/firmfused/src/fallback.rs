//! Generative fallback adapter.
//!
//! The only component allowed to invent data. It never returns an empty
//! string: any service failure or blank answer becomes [`FALLBACK_VALUE`].

use crate::config::LlmConfig;
use crate::llm_client::LlmClient;
use crate::prompts;
use firmfuse_shared::{Field, RawSourceRecord};
use std::sync::Arc;
use tracing::{debug, warn};

/// Value substituted when the service fails or answers blank.
pub const FALLBACK_VALUE: &str = "Unknown";

/// Token and temperature settings for one kind of call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSettings {
    pub max_output_tokens: u32,
    pub temperature: f32,
}

impl GenerationSettings {
    pub fn fill(config: &LlmConfig) -> Self {
        Self {
            max_output_tokens: config.fill_max_tokens,
            temperature: config.fill_temperature,
        }
    }

    pub fn industry(config: &LlmConfig) -> Self {
        Self {
            max_output_tokens: config.industry_max_tokens,
            temperature: config.industry_temperature,
        }
    }
}

#[derive(Clone)]
pub struct GenerativeFallback {
    client: Arc<dyn LlmClient>,
    settings: GenerationSettings,
}

impl GenerativeFallback {
    pub fn new(client: Arc<dyn LlmClient>, settings: GenerationSettings) -> Self {
        Self { client, settings }
    }

    /// Plausible value for `field` built from both sources.
    pub async fn generate(
        &self,
        field: Field,
        search: &RawSourceRecord,
        network: &RawSourceRecord,
    ) -> String {
        let prompt = prompts::fill_prompt(field, search, network);

        match self
            .client
            .complete(&prompt, self.settings.max_output_tokens, self.settings.temperature)
            .await
        {
            Ok(text) => {
                let text = text.trim();
                if text.is_empty() {
                    warn!(field = %field, "generative service returned a blank value");
                    FALLBACK_VALUE.to_string()
                } else {
                    debug!(field = %field, "generated value");
                    text.to_string()
                }
            }
            Err(e) => {
                warn!(field = %field, "generative service failed: {}", e);
                FALLBACK_VALUE.to_string()
            }
        }
    }
}
