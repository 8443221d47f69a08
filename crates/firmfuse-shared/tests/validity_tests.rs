//! Tests for validity.rs

use firmfuse_shared::{is_invalid, is_invalid_text, usable_value, Field, FieldValue};

#[test]
fn test_sentinels_are_invalid_for_generic_fields() {
    for value in ["N/A", "n/a", "", "Unknown", "NOT FOUND", "No information found for Acme"] {
        assert!(
            is_invalid_text(value, Field::Description),
            "expected {:?} to be invalid",
            value
        );
        assert!(is_invalid(Some(&FieldValue::text(value)), Field::State));
    }
}

#[test]
fn test_plain_values_are_valid_for_generic_fields() {
    assert!(!is_invalid_text("California", Field::State));
    assert!(!is_invalid_text("94043", Field::PostalCode));
    assert!(!is_invalid_text("250", Field::Employees));
}

#[test]
fn test_email_shape() {
    assert!(is_invalid_text("notanemail", Field::Email));
    assert!(is_invalid_text("name@localhost", Field::Email));
    assert!(!is_invalid_text("valid@x.com", Field::Email));
}

#[test]
fn test_phone_needs_a_digit() {
    assert!(!is_invalid_text("555-1234", Field::Phone));
    assert!(is_invalid_text("abcdef", Field::Phone));
}

#[test]
fn test_website_needs_scheme_and_dot() {
    assert!(is_invalid_text("example.com", Field::Website));
    assert!(is_invalid_text("http://localhost", Field::Website));
    assert!(!is_invalid_text("https://example.com", Field::Website));
}

#[test]
fn test_field_rules_do_not_leak() {
    // Website rule only applies to Website
    assert!(!is_invalid_text("example.com", Field::Description));
    // Phone rule only applies to Phone
    assert!(!is_invalid_text("abcdef", Field::State));
}

#[test]
fn test_list_values_follow_field_rules() {
    let states = FieldValue::List(vec!["N/A".to_string(), "Unknown".to_string()]);
    assert!(is_invalid(Some(&states), Field::State));

    let phones = FieldValue::List(vec!["call us".to_string(), "555-1234".to_string()]);
    assert!(!is_invalid(Some(&phones), Field::Phone));
    assert_eq!(usable_value(&phones, Field::Phone).as_deref(), Some("555-1234"));
}
