//! Tests for combine.rs

use firmfuse_shared::{combine, FieldValue};

#[test]
fn test_combine_dedups_in_first_seen_order() {
    let a = FieldValue::List(vec!["123 Main St".to_string(), "456 Oak Ave".to_string()]);
    let b = FieldValue::text("123 Main St; 789 Pine Rd");
    assert_eq!(
        combine(Some(&a), Some(&b)).as_deref(),
        Some("123 Main St; 456 Oak Ave; 789 Pine Rd")
    );
}

#[test]
fn test_combine_empty_inputs_is_none() {
    let a = FieldValue::text("N/A");
    let b = FieldValue::text("");
    assert_eq!(combine(Some(&a), Some(&b)), None);

    let a = FieldValue::List(vec![" ".to_string(), String::new()]);
    let b = FieldValue::text("Not Found");
    assert_eq!(combine(Some(&a), Some(&b)), None);

    assert_eq!(combine(None, None), None);
}

#[test]
fn test_combine_skips_sentinel_parts() {
    let a = FieldValue::text("N/A");
    let b = FieldValue::text("+1 650 253 0000");
    assert_eq!(combine(Some(&a), Some(&b)).as_deref(), Some("+1 650 253 0000"));
}

#[test]
fn test_combine_splits_commas_and_newlines() {
    let a = FieldValue::text("Tel 555-1234\nFax 555-9999");
    let b = FieldValue::text("Fax 555-9999, Tel 555-0000");
    assert_eq!(
        combine(Some(&a), Some(&b)).as_deref(),
        Some("Tel 555-1234; Fax 555-9999; Tel 555-0000")
    );
}
