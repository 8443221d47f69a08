//! Professional-network collaborator.
//!
//! Posts the company name to the provider's company search tool and maps the
//! JSON payload onto a raw record.

use super::{SourceCollaborator, SourceError};
use crate::config::NetworkConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use firmfuse_shared::{Field, FieldValue, RawSourceRecord, SENTINEL};
use serde_json::Value;
use std::time::Duration;
use tracing::{info, warn};

/// Payload keys mapped onto source fields. Description is handled separately.
const PAYLOAD_FIELDS: [(&str, Field); 7] = [
    ("address", Field::Address),
    ("state", Field::State),
    ("postal_code", Field::PostalCode),
    ("phone", Field::Phone),
    ("email", Field::Email),
    ("employees", Field::Employees),
    ("website", Field::Website),
];

/// Record used when the provider cannot be reached or answers with an error.
pub fn empty_record(company_name: &str) -> RawSourceRecord {
    RawSourceRecord::placeholder(
        company_name,
        "Company data not found via professional network",
    )
}

/// Convert a JSON payload value into a field value.
///
/// Strings and numbers become text, string arrays become lists; anything
/// else is treated as absent.
pub fn json_to_field_value(value: &Value) -> Option<FieldValue> {
    match value {
        Value::String(s) => Some(FieldValue::Text(s.clone())),
        Value::Number(n) => Some(FieldValue::Text(n.to_string())),
        Value::Bool(b) => Some(FieldValue::Text(b.to_string())),
        Value::Array(items) => {
            let items: Vec<String> = items
                .iter()
                .filter_map(|v| match v {
                    Value::String(s) => Some(s.clone()),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .collect();
            Some(FieldValue::List(items))
        }
        _ => None,
    }
}

/// Map a successful provider payload onto a raw record.
pub fn record_from_payload(company_name: &str, payload: &Value) -> RawSourceRecord {
    let description = payload
        .get("description")
        .and_then(json_to_field_value)
        .unwrap_or_else(|| {
            FieldValue::Text(format!(
                "Description for {} (from professional network)",
                company_name
            ))
        });

    let mut record = RawSourceRecord::new()
        .with(Field::CompanyName, company_name)
        .with(Field::Description, description);

    for (key, field) in PAYLOAD_FIELDS {
        let value = payload
            .get(key)
            .and_then(json_to_field_value)
            .unwrap_or_else(|| FieldValue::text(SENTINEL));
        record.insert(field, value);
    }
    record
}

pub struct NetworkResearcher {
    config: NetworkConfig,
    http: reqwest::Client,
}

impl NetworkResearcher {
    pub fn new(config: NetworkConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { config, http })
    }

    async fn lookup(&self, company_name: &str) -> Result<Value, SourceError> {
        let token = self
            .config
            .auth_token
            .as_deref()
            .ok_or(SourceError::MissingCredentials("network auth token"))?;
        let project_id = self
            .config
            .project_id
            .as_deref()
            .ok_or(SourceError::MissingCredentials("network project id"))?;

        let endpoint = format!(
            "{}/{}/linkedin/search",
            self.config.base_url.trim_end_matches('/'),
            project_id
        );
        let response = self
            .http
            .post(&endpoint)
            .bearer_auth(token)
            .json(&serde_json::json!({ "company_name": company_name }))
            .send()
            .await?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(SourceError::Status(response.status().as_u16()));
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl SourceCollaborator for NetworkResearcher {
    fn name(&self) -> &'static str {
        "network"
    }

    async fn fetch(&self, company_name: &str) -> RawSourceRecord {
        info!("Fetching network data for {}", company_name);

        match self.lookup(company_name).await {
            Ok(payload) => record_from_payload(company_name, &payload),
            Err(e) => {
                warn!("Network lookup failed for {}: {}", company_name, e);
                empty_record(company_name)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_mapping() {
        let payload = serde_json::json!({
            "description": "Anvils and rockets.",
            "address": ["1 Desert Rd", "2 Mesa Way"],
            "employees": 420,
            "email": null,
            "website": "https://acme.com"
        });
        let record = record_from_payload("Acme", &payload);

        assert_eq!(record.get(Field::Description), Some(&FieldValue::text("Anvils and rockets.")));
        assert_eq!(
            record.get(Field::Address),
            Some(&FieldValue::List(vec!["1 Desert Rd".to_string(), "2 Mesa Way".to_string()]))
        );
        assert_eq!(record.get(Field::Employees), Some(&FieldValue::text("420")));
        assert_eq!(record.get(Field::Email), Some(&FieldValue::text("N/A")));
        assert_eq!(record.get(Field::Phone), Some(&FieldValue::text("N/A")));
        assert_eq!(record.len(), 9);
    }

    #[test]
    fn test_missing_description_gets_attribution() {
        let record = record_from_payload("Acme", &serde_json::json!({}));
        assert_eq!(
            record.get(Field::Description),
            Some(&FieldValue::text("Description for Acme (from professional network)"))
        );
    }

    #[tokio::test]
    async fn test_missing_credentials_yield_placeholder() {
        let researcher = NetworkResearcher::new(NetworkConfig::default()).unwrap();
        assert_eq!(researcher.name(), "network");
        assert_eq!(researcher.fetch("Acme").await, empty_record("Acme"));
    }
}
