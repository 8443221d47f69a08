//! Per-company research orchestration.
//!
//! Both sources are queried concurrently, then reconciled. Batches run every
//! company as its own task with no shared mutable state.

use crate::reconcile::ReconciliationEngine;
use crate::sources::SourceCollaborator;
use firmfuse_shared::CompanyResearch;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{error, info, info_span, Instrument};
use uuid::Uuid;

pub struct Researcher {
    search: Arc<dyn SourceCollaborator>,
    network: Arc<dyn SourceCollaborator>,
    engine: ReconciliationEngine,
}

impl Researcher {
    pub fn new(
        search: Arc<dyn SourceCollaborator>,
        network: Arc<dyn SourceCollaborator>,
        engine: ReconciliationEngine,
    ) -> Self {
        Self {
            search,
            network,
            engine,
        }
    }

    /// Research one company.
    pub async fn research(&self, company_name: &str) -> CompanyResearch {
        let request_id = Uuid::new_v4();
        let span = info_span!("research", company = %company_name, %request_id);

        async {
            let (search, network) = tokio::join!(
                self.search.fetch(company_name),
                self.network.fetch(company_name)
            );
            info!(source = self.search.name(), fields = search.len(), "source fetched");
            info!(source = self.network.name(), fields = network.len(), "source fetched");

            let fused = self.engine.reconcile(search, network).await;
            info!(fields = fused.len(), "research completed");
            CompanyResearch::from_fused(company_name, &fused)
        }
        .instrument(span)
        .await
    }

    /// Research every company concurrently; results keep the input order.
    pub async fn research_many(self: &Arc<Self>, company_names: Vec<String>) -> Vec<CompanyResearch> {
        let mut join_set = JoinSet::new();

        for (index, name) in company_names.iter().cloned().enumerate() {
            let researcher = Arc::clone(self);
            join_set.spawn(async move {
                let result = researcher.research(&name).await;
                (index, result)
            });
        }

        let mut results: Vec<Option<CompanyResearch>> = vec![None; company_names.len()];
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, result)) => results[index] = Some(result),
                Err(e) => error!("research task failed: {}", e),
            }
        }

        results
            .into_iter()
            .zip(&company_names)
            .map(|(result, name)| result.unwrap_or_else(|| CompanyResearch::error(name)))
            .collect()
    }
}
