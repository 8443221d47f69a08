//! Source collaborators.
//!
//! Each collaborator turns a company name into a raw record with every source
//! field present. Failures never cross this boundary: they are logged and
//! replaced by a placeholder record.

pub mod extract;
pub mod network;
pub mod search;

pub use network::NetworkResearcher;
pub use search::SearchResearcher;

use async_trait::async_trait;
use firmfuse_shared::RawSourceRecord;
use std::collections::HashMap;
use std::sync::Mutex;

/// Errors raised inside a collaborator before it falls back to a placeholder.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Missing credentials: {0}")]
    MissingCredentials(&'static str),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("API error {code}: {message}")]
    Api { code: i64, message: String },
}

impl From<reqwest::Error> for SourceError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            SourceError::Parse(e.to_string())
        } else {
            SourceError::Network(e.to_string())
        }
    }
}

/// A provider of raw company records.
#[async_trait]
pub trait SourceCollaborator: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Best-effort record; never fails.
    async fn fetch(&self, company_name: &str) -> RawSourceRecord;
}

/// Fixed-answer collaborator for tests and offline runs.
///
/// Unknown companies get the fallback record, or a blank record.
pub struct StaticSource {
    name: &'static str,
    records: HashMap<String, RawSourceRecord>,
    fallback: Option<RawSourceRecord>,
    calls: Mutex<Vec<String>>,
}

impl StaticSource {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            records: HashMap::new(),
            fallback: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_record(mut self, company_name: &str, record: RawSourceRecord) -> Self {
        self.records.insert(company_name.to_string(), record);
        self
    }

    pub fn with_fallback(mut self, record: RawSourceRecord) -> Self {
        self.fallback = Some(record);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SourceCollaborator for StaticSource {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn fetch(&self, company_name: &str) -> RawSourceRecord {
        self.calls.lock().unwrap().push(company_name.to_string());
        self.records
            .get(company_name)
            .or(self.fallback.as_ref())
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use firmfuse_shared::Field;

    #[tokio::test]
    async fn test_static_source_answers_and_records_calls() {
        let acme = RawSourceRecord::new().with(Field::State, "AZ");
        let source = StaticSource::new("search").with_record("Acme", acme.clone());

        assert_eq!(source.name(), "search");
        assert_eq!(source.fetch("Acme").await, acme);
        assert!(source.fetch("Globex").await.is_empty());
        assert_eq!(source.calls(), vec!["Acme", "Globex"]);
    }
}
