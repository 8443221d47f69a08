//! Validity predicate: is a source value present and usable?

use crate::field::Field;
use crate::record::FieldValue;

/// Uppercased phrases that mark a value as "no data", matched as substrings.
const SENTINEL_PHRASES: [&str; 4] = ["N/A", "NOT FOUND", "NO INFORMATION FOUND", "UNKNOWN"];

/// True when `value` is blank or carries one of the placeholder phrases.
pub fn is_sentinel(value: &str) -> bool {
    let cleaned = value.trim().to_uppercase();
    cleaned.is_empty() || SENTINEL_PHRASES.iter().any(|p| cleaned.contains(p))
}

/// True when `value` is missing or garbage for `field`.
///
/// A list is invalid when none of its entries is valid on its own.
pub fn is_invalid(value: Option<&FieldValue>, field: Field) -> bool {
    value.and_then(|v| usable_value(v, field)).is_none()
}

/// The trimmed text of `value` with invalid list entries dropped, if
/// anything usable remains. List entries are joined with `"; "`.
pub fn usable_value(value: &FieldValue, field: Field) -> Option<String> {
    match value {
        FieldValue::Text(s) => (!is_invalid_text(s, field)).then(|| s.trim().to_string()),
        FieldValue::List(items) => {
            let kept: Vec<&str> = items
                .iter()
                .map(|s| s.trim())
                .filter(|s| !is_invalid_text(s, field))
                .collect();
            (!kept.is_empty()).then(|| kept.join("; "))
        }
    }
}

pub fn is_invalid_text(value: &str, field: Field) -> bool {
    if is_sentinel(value) {
        return true;
    }
    let value = value.trim();
    match field {
        Field::Email => !value.contains('@') || !value.contains('.'),
        Field::Phone => !value.chars().any(|c| c.is_ascii_digit()),
        Field::Website => !value.starts_with("http") || !value.contains('.'),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_substring() {
        assert!(is_sentinel("Company data not found via network"));
        assert!(is_sentinel("   "));
        assert!(!is_sentinel("Acme Corp"));
    }

    #[test]
    fn test_missing_value_is_invalid() {
        assert!(is_invalid(None, Field::State));
    }

    #[test]
    fn test_list_entries_are_judged_one_by_one() {
        let sentinel = FieldValue::List(vec!["N/A".to_string()]);
        assert!(is_invalid(Some(&sentinel), Field::State));
        let blank = FieldValue::List(vec![" ".to_string()]);
        assert!(is_invalid(Some(&blank), Field::State));
        assert!(is_invalid(Some(&FieldValue::List(vec![])), Field::State));
        let email = FieldValue::List(vec!["not an email".to_string()]);
        assert!(is_invalid(Some(&email), Field::Email));
    }

    #[test]
    fn test_usable_value_drops_bad_entries_and_trims() {
        let mixed = FieldValue::List(vec![
            "Unknown".to_string(),
            " sales@acme.com ".to_string(),
            "nope".to_string(),
        ]);
        assert_eq!(usable_value(&mixed, Field::Email).as_deref(), Some("sales@acme.com"));
        assert_eq!(
            usable_value(&FieldValue::text("  https://acme.com "), Field::Website).as_deref(),
            Some("https://acme.com")
        );
        assert_eq!(usable_value(&FieldValue::text("N/A"), Field::State), None);
    }
}
