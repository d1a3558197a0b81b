//! Integration tests for composed checks over deserialized documents.
//!
//! Builds nested checks from every combinator and validates JSON documents
//! converted into values, the way the CLI does.

use serde_json::json;
use typeguard_checks::{
    array_of, email, fields, int, normalize, one_of, optional, specs, struct_of, tuple, Check,
    Literal, Primitive, ValidationEntry, Value,
};

fn account() -> Check {
    struct_of(fields! {
        "id" => int(),
        "email" => email(),
        "status" => one_of(specs!["active", "suspended"]),
        "tags" => array_of(Primitive::String),
        "location" => optional(tuple(specs![Primitive::Number, Primitive::Number])),
    })
}

#[test]
fn account_name_is_composed_from_nested_names() {
    assert_eq!(
        account().name(),
        "{ id: int, email: Email, status: OneOf<'active', 'suspended'>, tags: string[], \
         location: Optional<(number, number)> }"
    );
}

#[test]
fn valid_document_passes() {
    let doc = Value::from(json!({
        "id": 7,
        "email": "ops@example.com",
        "status": "active",
        "tags": ["a", "b"],
        "location": [51.5, -0.12],
        "unrelated": {"nested": true}
    }));
    account()
        .perform(&ValidationEntry::parameter(0, &doc))
        .unwrap();
}

#[test]
fn null_optional_field_passes() {
    let doc = Value::from(json!({
        "id": 1,
        "email": "a@b.co",
        "status": "suspended",
        "tags": [],
        "location": null
    }));
    assert!(account().accepts(&doc));
}

#[test]
fn invalid_document_reports_every_field() {
    let doc = Value::from(json!({
        "id": 1.5,
        "email": "a@b.co",
        "status": "deleted",
        "tags": ["a", 2, "c"]
    }));
    let err = account()
        .perform(&ValidationEntry::parameter(0, &doc))
        .unwrap_err();
    assert_eq!(
        err.received(),
        "object with invalid fields { id: expected int, received number; \
         status: expected OneOf<'active', 'suspended'>, received string; \
         tags: expected string[], received [..., number@1, ...] }"
    );
}

#[test]
fn normalization_is_idempotent() {
    let check = account();
    assert!(normalize(&check).ptr_eq(&check));
    let literal = normalize(Literal::Null);
    assert!(normalize(&literal).ptr_eq(&literal));
}
