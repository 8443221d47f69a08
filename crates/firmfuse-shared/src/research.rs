//! Research request and response payloads.

use crate::field::Field;
use crate::record::{FieldValue, FusedRecord};
use chrono::{DateTime, Utc};
use serde::{de::IgnoredAny, Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResearchStatus {
    Completed,
    Error,
}

/// Response shape for a single researched company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyResearch {
    pub company_name: String,
    pub description: Option<String>,
    pub address: Option<Vec<String>>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub phone: Option<Vec<String>>,
    pub country: Option<String>,
    pub email: Option<String>,
    pub employees: Option<String>,
    pub website: Option<String>,
    pub industry_type: Option<String>,
    pub status: ResearchStatus,
    pub researched_at: DateTime<Utc>,
}

impl CompanyResearch {
    /// Shape a fused record into the response. An empty record is an error.
    pub fn from_fused(company_name: &str, fused: &FusedRecord) -> Self {
        let text = |field: Field| fused.get(field).map(str::to_string);
        let list = |field: Field| fused.get(field).map(split_field);

        Self {
            company_name: company_name.to_string(),
            description: text(Field::Description),
            address: list(Field::Address),
            state: text(Field::State),
            postal_code: text(Field::PostalCode),
            phone: list(Field::Phone),
            country: text(Field::Country),
            email: text(Field::Email),
            employees: text(Field::Employees),
            website: text(Field::Website),
            industry_type: text(Field::IndustryType),
            status: if fused.is_empty() {
                ResearchStatus::Error
            } else {
                ResearchStatus::Completed
            },
            researched_at: Utc::now(),
        }
    }

    pub fn error(company_name: &str) -> Self {
        Self::from_fused(company_name, &FusedRecord::new())
    }

    /// Apply caller-supplied values; blank overrides are ignored.
    pub fn apply_overrides(&mut self, overrides: &ResearchOverrides) {
        fn set(target: &mut Option<String>, value: &Option<String>) {
            if let Some(v) = value.as_ref().filter(|v| !v.trim().is_empty()) {
                *target = Some(v.clone());
            }
        }
        fn set_list(target: &mut Option<Vec<String>>, value: &Option<FieldValue>) {
            let items = match value {
                Some(FieldValue::List(items)) => items.clone(),
                Some(FieldValue::Text(s)) => split_field(s),
                None => return,
            };
            if !items.is_empty() {
                *target = Some(items);
            }
        }

        set(&mut self.description, &overrides.description);
        set_list(&mut self.address, &overrides.address);
        set(&mut self.state, &overrides.state);
        set(&mut self.postal_code, &overrides.postal_code);
        set_list(&mut self.phone, &overrides.phone);
        set(&mut self.email, &overrides.email);
        set(&mut self.employees, &overrides.employees);
        set(&mut self.website, &overrides.website);
        set(&mut self.industry_type, &overrides.industry_type);
    }
}

/// Split a `;`-joined value into trimmed, non-empty parts.
pub fn split_field(value: &str) -> Vec<String> {
    value
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Values a caller may pin on a single-company POST.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResearchOverrides {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: Option<FieldValue>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub phone: Option<FieldValue>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub employees: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub industry_type: Option<String>,
}

/// POST body: either a batch of names or one name with optional overrides.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResearchRequestBody {
    /// Only a JSON array selects batch mode; any other value is ignored.
    #[serde(default, deserialize_with = "names_array")]
    pub company_names: Option<Vec<String>>,
    #[serde(default)]
    pub company_name: Option<String>,
    /// Accepted for compatibility, not acted on.
    #[serde(default)]
    pub callback_url: Option<String>,
    #[serde(flatten)]
    pub overrides: ResearchOverrides,
}

fn names_array<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Names {
        List(Vec<String>),
        Other(IgnoredAny),
    }

    Ok(match Option::<Names>::deserialize(deserializer)? {
        Some(Names::List(names)) => Some(names),
        Some(Names::Other(_)) | None => None,
    })
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResponse {
    pub results: Vec<CompanyResearch>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResearchReply {
    Batch(BatchResponse),
    Single(Box<CompanyResearch>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
