//! Tests for research.rs

use firmfuse_shared::{
    split_field, CompanyResearch, Field, FieldValue, FusedRecord, ResearchOverrides,
    ResearchReply, ResearchRequestBody, ResearchStatus,
};

fn sample_fused() -> FusedRecord {
    let mut fused = FusedRecord::new();
    fused.insert(Field::Description, "Makes anvils.");
    fused.insert(Field::Address, "1 Desert Rd; 2 Canyon Way");
    fused.insert(Field::Phone, "555-1234");
    fused.insert(Field::Country, "United States");
    fused.insert(Field::IndustryType, "Technical and Engineering");
    fused
}

#[test]
fn test_from_fused_splits_multi_value_fields() {
    let research = CompanyResearch::from_fused("Acme", &sample_fused());
    assert_eq!(research.company_name, "Acme");
    assert_eq!(
        research.address,
        Some(vec!["1 Desert Rd".to_string(), "2 Canyon Way".to_string()])
    );
    assert_eq!(research.phone, Some(vec!["555-1234".to_string()]));
    assert_eq!(research.country.as_deref(), Some("United States"));
    assert_eq!(research.email, None);
    assert_eq!(research.status, ResearchStatus::Completed);
}

#[test]
fn test_empty_fused_record_is_an_error() {
    let research = CompanyResearch::error("Acme");
    assert_eq!(research.status, ResearchStatus::Error);
    assert!(research.description.is_none());
}

#[test]
fn test_overrides_skip_blank_values() {
    let mut research = CompanyResearch::from_fused("Acme", &sample_fused());
    let overrides = ResearchOverrides {
        description: Some("  ".to_string()),
        email: Some("sales@acme.com".to_string()),
        phone: Some(FieldValue::text("555-0000; 555-1111")),
        ..Default::default()
    };
    research.apply_overrides(&overrides);
    assert_eq!(research.description.as_deref(), Some("Makes anvils."));
    assert_eq!(research.email.as_deref(), Some("sales@acme.com"));
    assert_eq!(
        research.phone,
        Some(vec!["555-0000".to_string(), "555-1111".to_string()])
    );
}

#[test]
fn test_request_body_ignores_non_array_names() {
    let body: ResearchRequestBody =
        serde_json::from_str(r#"{"company_names": "Acme, Globex", "company_name": "Initech"}"#)
            .unwrap();
    assert!(body.company_names.is_none());
    assert_eq!(body.company_name.as_deref(), Some("Initech"));

    let body: ResearchRequestBody =
        serde_json::from_str(r#"{"company_names": ["Acme", "Globex"]}"#).unwrap();
    assert_eq!(
        body.company_names,
        Some(vec!["Acme".to_string(), "Globex".to_string()])
    );
}

#[test]
fn test_request_body_parses_overrides() {
    let body: ResearchRequestBody = serde_json::from_str(
        r#"{"company_name": "Acme", "website": "https://acme.com", "address": ["1 Desert Rd"]}"#,
    )
    .unwrap();
    assert_eq!(body.company_name.as_deref(), Some("Acme"));
    assert!(body.company_names.is_none());
    assert_eq!(body.overrides.website.as_deref(), Some("https://acme.com"));
    assert_eq!(
        body.overrides.address,
        Some(FieldValue::List(vec!["1 Desert Rd".to_string()]))
    );
}

#[test]
fn test_reply_serialization_shapes() {
    let single = ResearchReply::Single(Box::new(CompanyResearch::error("Acme")));
    let json = serde_json::to_value(&single).unwrap();
    assert_eq!(json["company_name"], "Acme");
    assert_eq!(json["status"], "error");

    let batch = ResearchReply::Batch(firmfuse_shared::BatchResponse {
        results: vec![CompanyResearch::error("A"), CompanyResearch::error("B")],
    });
    let json = serde_json::to_value(&batch).unwrap();
    assert_eq!(json["results"].as_array().unwrap().len(), 2);
}

#[test]
fn test_split_field() {
    assert_eq!(split_field(" a ;; b;"), vec!["a", "b"]);
    assert!(split_field("").is_empty());
}
