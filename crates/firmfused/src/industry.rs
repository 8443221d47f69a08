//! Industry classifier.
//!
//! Always asks the generative service; raw industry values are never read.
//! The answer must be an exact vocabulary member, else [`DEFAULT_INDUSTRY`].

use crate::fallback::GenerationSettings;
use crate::llm_client::LlmClient;
use crate::prompts;
use firmfuse_shared::{is_industry, RawSourceRecord, DEFAULT_INDUSTRY};
use std::sync::Arc;
use tracing::warn;

#[derive(Clone)]
pub struct IndustryClassifier {
    client: Arc<dyn LlmClient>,
    settings: GenerationSettings,
}

impl IndustryClassifier {
    pub fn new(client: Arc<dyn LlmClient>, settings: GenerationSettings) -> Self {
        Self { client, settings }
    }

    pub async fn classify(&self, search: &RawSourceRecord, network: &RawSourceRecord) -> String {
        let prompt = prompts::industry_prompt(search, network);

        match self
            .client
            .complete(&prompt, self.settings.max_output_tokens, self.settings.temperature)
            .await
        {
            Ok(text) => {
                let label = text.trim();
                if is_industry(label) {
                    label.to_string()
                } else {
                    warn!("industry answer {:?} is not in the vocabulary", label);
                    DEFAULT_INDUSTRY.to_string()
                }
            }
            Err(e) => {
                warn!("industry classification failed: {}", e);
                DEFAULT_INDUSTRY.to_string()
            }
        }
    }
}
