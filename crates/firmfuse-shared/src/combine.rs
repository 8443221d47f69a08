//! Multi-value combiner for address and phone fields.

use crate::record::FieldValue;
use crate::validity::is_sentinel;

/// Ordered, trimmed, non-empty parts of a value.
///
/// Text is split on newlines, commas and semicolons. Placeholder parts such as
/// "N/A" are dropped so two empty sources combine to nothing.
fn split_values(value: Option<&FieldValue>) -> Vec<String> {
    let parts: Vec<String> = match value {
        None => Vec::new(),
        Some(FieldValue::List(items)) => items.iter().map(|s| s.trim().to_string()).collect(),
        Some(FieldValue::Text(s)) => s
            .replace(['\n', ','], ";")
            .split(';')
            .map(|p| p.trim().to_string())
            .collect(),
    };
    parts.into_iter().filter(|p| !is_sentinel(p)).collect()
}

/// Combine two source values: A's parts first, then B's, exact duplicates
/// dropped, joined with `"; "`. `None` when nothing usable remains.
pub fn combine(a: Option<&FieldValue>, b: Option<&FieldValue>) -> Option<String> {
    let mut combined: Vec<String> = Vec::new();
    for part in split_values(a).into_iter().chain(split_values(b)) {
        if !combined.contains(&part) {
            combined.push(part);
        }
    }

    if combined.is_empty() {
        None
    } else {
        Some(combined.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_normalizes_delimiters() {
        let value = FieldValue::text("1 Main St\n2 Oak Ave, 3 Pine Rd;;  ");
        assert_eq!(
            split_values(Some(&value)),
            vec!["1 Main St", "2 Oak Ave", "3 Pine Rd"]
        );
    }

    #[test]
    fn test_dedup_is_case_sensitive() {
        let a = FieldValue::text("1 Main St");
        let b = FieldValue::text("1 MAIN ST");
        assert_eq!(combine(Some(&a), Some(&b)).as_deref(), Some("1 Main St; 1 MAIN ST"));
    }

    #[test]
    fn test_one_side_missing() {
        let b = FieldValue::text("+1 555 123 4567");
        assert_eq!(combine(None, Some(&b)).as_deref(), Some("+1 555 123 4567"));
    }
}
