//! Raw source records and the fused record.

use crate::field::{Field, FieldKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Placeholder collaborators write when a value cannot be determined.
pub const SENTINEL: &str = "N/A";

/// A single field value as reported by a source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Trimmed single-string rendering; list members are joined with `"; "`.
    pub fn render(&self) -> String {
        match self {
            FieldValue::Text(s) => s.trim().to_string(),
            FieldValue::List(items) => items
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}

/// Per-provider company data before fusion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawSourceRecord(BTreeMap<Field, FieldValue>);

impl RawSourceRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record with every source field set to [`SENTINEL`] and the given description.
    pub fn placeholder(company_name: &str, description: impl Into<String>) -> Self {
        let mut record = Self::new();
        record.insert(Field::CompanyName, company_name);
        for field in Field::SOURCE_FIELDS {
            record.insert(field, SENTINEL);
        }
        record.insert(Field::Description, description.into());
        record
    }

    pub fn with(mut self, field: Field, value: impl Into<FieldValue>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: Field, value: impl Into<FieldValue>) {
        self.0.insert(field, value.into());
    }

    pub fn get(&self, field: Field) -> Option<&FieldValue> {
        self.0.get(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy with multi-value lists flattened to `"; "`-joined text, for prompts.
    pub fn prompt_view(&self) -> RawSourceRecord {
        let flattened = self
            .0
            .iter()
            .map(|(field, value)| {
                let value = match (field.kind(), value) {
                    (FieldKind::MultiValue, FieldValue::List(_)) => FieldValue::Text(value.render()),
                    _ => value.clone(),
                };
                (*field, value)
            })
            .collect();
        RawSourceRecord(flattened)
    }
}

impl FromIterator<(Field, FieldValue)> for RawSourceRecord {
    fn from_iter<I: IntoIterator<Item = (Field, FieldValue)>>(iter: I) -> Self {
        RawSourceRecord(iter.into_iter().collect())
    }
}

/// Single reconciled company profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FusedRecord(BTreeMap<Field, String>);

impl FusedRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, value: impl Into<String>) {
        self.0.insert(field, value.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, v)| (*f, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_trims() {
        assert_eq!(FieldValue::text("  https://acme.com ").render(), "https://acme.com");
        let list = FieldValue::List(vec![" 1 A St ".to_string(), "".to_string()]);
        assert_eq!(list.render(), "1 A St");
    }

    #[test]
    fn test_placeholder_has_every_source_field() {
        let record = RawSourceRecord::placeholder("Acme", "No information found for Acme.");
        assert_eq!(record.len(), 9);
        assert_eq!(record.get(Field::CompanyName), Some(&FieldValue::text("Acme")));
        assert_eq!(record.get(Field::Phone), Some(&FieldValue::text("N/A")));
        assert_eq!(
            record.get(Field::Description),
            Some(&FieldValue::text("No information found for Acme."))
        );
    }

    #[test]
    fn test_prompt_view_flattens_addresses_only() {
        let record = RawSourceRecord::new()
            .with(Field::Address, vec!["1 A St".to_string(), "2 B Ave".to_string()])
            .with(Field::Description, vec!["kept".to_string()]);
        let view = record.prompt_view();
        assert_eq!(view.get(Field::Address), Some(&FieldValue::text("1 A St; 2 B Ave")));
        assert_eq!(
            view.get(Field::Description),
            Some(&FieldValue::List(vec!["kept".to_string()]))
        );
        // source record untouched
        assert!(matches!(record.get(Field::Address), Some(FieldValue::List(_))));
    }

    #[test]
    fn test_record_json_uses_labels() {
        let record = RawSourceRecord::new()
            .with(Field::PostalCode, "94043")
            .with(Field::Phone, vec!["555-1234".to_string()]);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["Postal Code"], "94043");
        assert_eq!(json["Phone"][0], "555-1234");

        let parsed: RawSourceRecord =
            serde_json::from_str(r#"{"postal_code": "94043", "Phone": ["555-1234"]}"#).unwrap();
        assert_eq!(parsed, record);
    }
}
