//! Validation Invariant Tests
//!
//! - Validation is deterministic
//! - Validating an output again yields the same output
//! - A built validator is shared across threads without locking
//! - Nesting depth is bounded
//! - Strict mode accepts exact types only

use std::thread;

use serde_json::json;
use shapeval::{Dict, SchemaNode, SchemaValidator, ValidatorConfig, Value};

// =============================================================================
// Helper Functions
// =============================================================================

fn order_validator() -> SchemaValidator {
    SchemaValidator::from_json(&json!({
        "type": "model",
        "class_type": "Order",
        "fields": {
            "id": {"type": "int"},
            "total": {"type": "float"},
            "paid": {"type": "bool", "default": false},
            "note": {"type": "union", "choices": [{"type": "none"}, {"type": "str"}]},
            "lines": {"type": "list", "items": {"type": "union", "choices": [{"type": "int"}, {"type": "str"}]}}
        }
    }))
    .unwrap()
}

fn order_input() -> Value {
    Value::from(
        [
            ("id", Value::from(" 12 ")),
            ("total", Value::from("9.5")),
            ("note", Value::None),
            (
                "lines",
                Value::from(vec![Value::from("3"), Value::from("x"), Value::Int(4)]),
            ),
        ]
        .into_iter()
        .collect::<Dict>(),
    )
}

// =============================================================================
// Determinism Tests
// =============================================================================

/// Same input validates the same way every time.
#[test]
fn test_validation_is_deterministic() {
    let v = order_validator();
    let first = v.validate(&order_input()).unwrap();

    for _ in 0..100 {
        assert_eq!(v.validate(&order_input()).unwrap(), first);
    }
}

/// Invalid input fails with the same report every time.
#[test]
fn test_invalid_input_fails_consistently() {
    let v = order_validator();
    let input = Value::from(
        [("id", Value::from("one")), ("total", Value::Bool(true))]
            .into_iter()
            .collect::<Dict>(),
    );
    let first = v.validate(&input).unwrap_err();
    assert_eq!(first.error_count(), 4);

    for _ in 0..100 {
        assert_eq!(v.validate(&input).unwrap_err(), first);
    }
}

// =============================================================================
// Idempotence Tests
// =============================================================================

/// Validating an output again returns an equal output.
#[test]
fn test_revalidation_is_identity() {
    let v = order_validator();
    let once = v.validate(&order_input()).unwrap();
    let twice = v.validate(&once).unwrap();
    assert_eq!(once, twice);

    let model = once.as_model().unwrap();
    assert_eq!(model.get("id"), Some(&Value::Int(12)));
    assert_eq!(model.get("total"), Some(&Value::Float(9.5)));
    assert_eq!(model.get("paid"), Some(&Value::Bool(false)));
    // "3" is already a str, so the exact pass picks the str choice.
    assert_eq!(
        model.get("lines"),
        Some(&Value::from(vec![Value::from("3"), Value::from("x"), Value::Int(4)]))
    );
}

#[test]
fn test_revalidation_of_leaf_outputs() {
    let schemas = [
        SchemaNode::bool(),
        SchemaNode::int(),
        SchemaNode::float(),
        SchemaNode::str(),
    ];
    let inputs = [Value::from("yes"), Value::from("8"), Value::Int(2), Value::Float(0.25)];

    for (schema, input) in schemas.iter().zip(inputs.iter()) {
        let v = SchemaValidator::build(schema).unwrap();
        let once = v.validate(input).unwrap();
        assert_eq!(v.validate(&once).unwrap(), once, "schema {}", v.name());
        // Coerced outputs are already exact.
        assert_eq!(v.validate_strict(&once).unwrap(), once, "schema {}", v.name());
    }
}

// =============================================================================
// Concurrency Tests
// =============================================================================

#[test]
fn test_shared_validator_across_threads() {
    let v = order_validator();
    let expected = v.validate(&order_input()).unwrap();

    thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| {
                for _ in 0..50 {
                    assert_eq!(v.validate(&order_input()).unwrap(), expected);
                    assert!(v.validate(&Value::Int(1)).is_err());
                }
            });
        }
    });
}

// =============================================================================
// Depth Tests
// =============================================================================

#[test]
fn test_depth_limit() {
    let schema = SchemaNode::list(SchemaNode::list(SchemaNode::list(SchemaNode::int())));
    let input = Value::from(vec![Value::from(vec![Value::from(vec![Value::Int(1)])])]);

    let shallow =
        SchemaValidator::build_with_config(&schema, ValidatorConfig::default().with_max_depth(3))
            .unwrap();
    let err = shallow.validate(&input).unwrap_err();
    assert_eq!(err.error_count(), 1);
    assert_eq!(err.errors()[0].code(), "depth_exceeded");
    assert_eq!(err.errors()[0].location().len(), 3);

    let deep =
        SchemaValidator::build_with_config(&schema, ValidatorConfig::default().with_max_depth(4))
            .unwrap();
    assert!(deep.validate(&input).is_ok());
}

// =============================================================================
// Strict Mode Tests
// =============================================================================

#[test]
fn test_strict_config_rejects_coercion() {
    let v = SchemaValidator::build_with_config(
        &SchemaNode::list(SchemaNode::float()),
        ValidatorConfig::strict(),
    )
    .unwrap();

    assert!(v.validate(&Value::from(vec![Value::Float(1.0)])).is_ok());

    let err = v
        .validate(&Value::from(vec![Value::Int(1), Value::from("2.0")]))
        .unwrap_err();
    assert_eq!(err.error_count(), 2);
    assert!(err.errors().iter().all(|e| e.code() == "float_type"));
}

#[test]
fn test_strict_node_inside_lax_tree() {
    let v = SchemaValidator::from_json(&json!({
        "type": "list",
        "items": {"type": "int", "strict": true}
    }))
    .unwrap();

    assert!(v.validate(&Value::from(vec![Value::Int(1)])).is_ok());
    let err = v.validate(&Value::from(vec![Value::from("1")])).unwrap_err();
    assert_eq!(err.errors()[0].code(), "int_type");
}

#[test]
fn test_strict_model_requires_instance() {
    let v = SchemaValidator::from_json(&json!({
        "type": "model",
        "class_type": "P",
        "fields": {"x": {"type": "int"}}
    }))
    .unwrap();

    let input = Value::from([("x", Value::Int(1))].into_iter().collect::<Dict>());
    let err = v.validate_strict(&input).unwrap_err();
    assert_eq!(err.errors()[0].code(), "model_class_type");
    assert_eq!(err.errors()[0].message(), "Value must be an instance of P");

    let instance = v.validate(&input).unwrap();
    assert!(v.validate_strict(&instance).is_ok());
}

// =============================================================================
// Report Formatting
// =============================================================================

#[test]
fn test_report_display() {
    let v = SchemaValidator::build(&SchemaNode::union(vec![
        SchemaNode::none(),
        SchemaNode::int(),
    ]))
    .unwrap();
    let err = v.validate(&Value::from("hello")).unwrap_err();

    let text = err.to_string();
    assert!(text.starts_with("2 validation errors for union[none,int]"), "{}", text);
    assert!(text.contains("\nnone\n  Value must be None/null [kind=none_required"), "{}", text);
    assert!(text.contains("input_value='hello'"), "{}", text);
}
