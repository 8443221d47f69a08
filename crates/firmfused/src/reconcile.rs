//! Reconciliation engine.
//!
//! Runs the fusion policy over every field either source carries, then sets
//! `country` through the country prompt and `industry_type` through the
//! classifier. Raw country and industry values are never copied through.

use crate::config::LlmConfig;
use crate::fallback::{GenerationSettings, GenerativeFallback};
use crate::fusion::FieldFusion;
use crate::industry::IndustryClassifier;
use crate::llm_client::LlmClient;
use firmfuse_shared::{Field, FieldKind, FusedRecord, RawSourceRecord};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub struct ReconciliationEngine {
    fusion: FieldFusion,
    classifier: IndustryClassifier,
}

impl ReconciliationEngine {
    pub fn new(client: Arc<dyn LlmClient>, config: &LlmConfig) -> Self {
        let fallback = GenerativeFallback::new(client.clone(), GenerationSettings::fill(config));
        Self {
            fusion: FieldFusion::new(fallback),
            classifier: IndustryClassifier::new(client, GenerationSettings::industry(config)),
        }
    }

    /// Merge the two source records into one complete profile.
    pub async fn reconcile(&self, search: RawSourceRecord, network: RawSourceRecord) -> FusedRecord {
        let fields: BTreeSet<Field> = search.fields().chain(network.fields()).collect();
        let mut fused = FusedRecord::new();

        for field in fields {
            if field.kind() == FieldKind::GenerativeOnly {
                continue;
            }
            let value = self.fusion.fuse(field, &search, &network).await;
            fused.insert(field, value);
        }

        let country = self
            .fusion
            .fallback()
            .generate(Field::Country, &search, &network)
            .await;
        fused.insert(Field::Country, country);

        let industry = self.classifier.classify(&search, &network).await;
        fused.insert(Field::IndustryType, industry);

        debug!(fields = fused.len(), "reconciled record");
        fused
    }
}
