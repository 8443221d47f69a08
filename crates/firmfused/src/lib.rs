//! firmfused library - exposes modules for testing.

pub mod config;
pub mod fallback;
pub mod fusion;
pub mod industry;
pub mod llm_client;
pub mod prompts;
pub mod reconcile;
pub mod research;
pub mod routes;
pub mod server;
pub mod sources;

pub use fallback::{GenerationSettings, GenerativeFallback, FALLBACK_VALUE};
pub use fusion::FieldFusion;
pub use industry::IndustryClassifier;
pub use llm_client::{FakeLlmClient, LlmClient, LlmError, OpenAiClient};
pub use reconcile::ReconciliationEngine;
pub use research::Researcher;
pub use sources::{NetworkResearcher, SearchResearcher, SourceCollaborator, StaticSource};
