//! Integration tests for validating raw JSON objects.

use bizobj_rules::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn order_rules() -> RuleSet {
    RuleSetBuilder::new()
        .rule(required("Reference").unwrap())
        .rule(length("Reference", 3, 12).unwrap())
        .rule(in_range("Quantity", 1, 100).unwrap())
        .rule(
            PredicateRule::for_value("Tags", "Tags must not be empty", |v| {
                v.is_none_or(|v| !v.is_blank())
            })
            .unwrap(),
        )
        .build()
}

fn order(value: serde_json::Value) -> JsonEntity {
    JsonEntity::from_value("Order", value)
        .unwrap()
        .declare(["Reference", "Quantity", "Tags", "Note"])
}

#[test]
fn valid_document() {
    let entity = order(json!({
        "Reference": "ORD-001",
        "Quantity": 4,
        "Tags": ["rush"],
    }));

    let broken = Validator::default()
        .validate_with(&order_rules(), &entity)
        .unwrap();
    assert!(broken.is_valid());
}

#[test]
fn broken_document_reports_in_order() {
    let entity = order(json!({
        "Reference": null,
        "Quantity": "250",
        "Tags": [],
    }));

    let broken = Validator::default()
        .validate_with(&order_rules(), &entity)
        .unwrap();
    assert_eq!(
        broken.descriptions(),
        vec![
            "Reference is required",
            "Reference must be between 3 and 12 characters long",
            "Quantity must be between 1 and 100",
            "Tags must not be empty",
        ]
    );
}

#[test]
fn broken_rules_serialize_for_api_layers() {
    let entity = order(json!({ "Reference": "AB", "Quantity": 1 }));

    let broken = Validator::default()
        .validate_with(&order_rules(), &entity)
        .unwrap();
    assert_eq!(
        serde_json::to_value(&broken).unwrap(),
        json!([
            {
                "property": "Reference",
                "description": "Reference must be between 3 and 12 characters long",
            }
        ])
    );
}

#[test]
fn undeclared_key_fails_fast() {
    let entity = JsonEntity::from_value("Order", json!({ "Reference": "ORD-001" })).unwrap();

    let err = Validator::default()
        .validate_with(&order_rules(), &entity)
        .unwrap_err();
    assert_eq!(err, LookupError::unknown("Order", "Quantity"));
}

#[cfg(feature = "pattern")]
#[test]
fn pattern_rule_over_json() {
    let rules = RuleSetBuilder::new()
        .rule(pattern("Reference", r"^ORD-\d{3}$").unwrap())
        .build();
    let validator = Validator::default();

    let good = order(json!({ "Reference": "ORD-042" }));
    let bad = order(json!({ "Reference": "ord-42" }));
    let missing = order(json!({}));

    assert!(validator.validate_with(&rules, &good).unwrap().is_valid());
    assert_eq!(
        validator.validate_with(&rules, &bad).unwrap().descriptions(),
        vec!["Reference has an invalid format"]
    );
    assert!(validator.validate_with(&rules, &missing).unwrap().is_valid());
}
