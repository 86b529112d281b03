//! Schema description loader
//!
//! Turns a JSON description into a typed `SchemaNode` tree. Recognised keys
//! per node:
//! - `type`: bool | int | float | str | none | list | model | union
//! - `strict`: optional bool on leaf, list and model nodes
//! - `items`: list item schema
//! - `class_type`, `fields`, `extra`: model target name, ordered field map,
//!   unknown-key behaviour
//! - `choices`, `mode`: union members and resolution mode
//!
//! Field entries are schema nodes with an optional `default`. Unknown keys
//! are ignored. The first defect found aborts loading.
//!
//! The description is walked by hand instead of through a derived
//! `Deserialize`: every error is wrapped with the enclosing validator kind
//! and its `items`, `field "name"` or `choices[i]` position, giving
//! messages such as
//! `Error building "model" validator (field "tags"):\n  Error building "list" validator: "items" is required`.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value as JsonValue};

use crate::errors::{SchemaError, SchemaResult};
use crate::input::Value;

use super::types::{ExtraBehavior, FieldSchema, ModelSchema, SchemaNode, UnionMode};

type JsonObject = Map<String, JsonValue>;

/// Loads a schema tree from a parsed JSON description.
pub fn load_schema(description: &JsonValue) -> SchemaResult<SchemaNode> {
    let obj = description.as_object().ok_or(SchemaError::NotAnObject {
        found: json_type_name(description),
    })?;

    let type_name = match obj.get("type") {
        None => return Err(SchemaError::MissingType),
        Some(JsonValue::String(s)) => s.as_str(),
        Some(_) => {
            return Err(SchemaError::InvalidKey {
                kind: "schema",
                key: "type",
                expected: "a string",
            })
        }
    };

    match type_name {
        "bool" => Ok(SchemaNode::Bool {
            strict: strict_flag(obj, "bool")?,
        }),
        "int" => Ok(SchemaNode::Int {
            strict: strict_flag(obj, "int")?,
        }),
        "float" => Ok(SchemaNode::Float {
            strict: strict_flag(obj, "float")?,
        }),
        "str" => Ok(SchemaNode::Str {
            strict: strict_flag(obj, "str")?,
        }),
        "none" => Ok(SchemaNode::None),
        "list" => load_list(obj),
        "model" => load_model(obj).map(SchemaNode::Model),
        "union" => load_union(obj),
        other => Err(SchemaError::UnknownType(other.to_string())),
    }
}

/// Parses and loads a schema description from JSON text.
pub fn load_schema_str(content: &str) -> SchemaResult<SchemaNode> {
    let description: JsonValue = serde_json::from_str(content).map_err(|e| SchemaError::File {
        path: "<inline>".into(),
        reason: format!("Invalid JSON: {}", e),
    })?;
    load_schema(&description)
}

/// Loads a schema description from a JSON file.
pub fn load_schema_file(path: &Path) -> SchemaResult<SchemaNode> {
    let content = fs::read_to_string(path).map_err(|e| SchemaError::File {
        path: path.display().to_string(),
        reason: format!("Failed to read file: {}", e),
    })?;

    let description: JsonValue = serde_json::from_str(&content).map_err(|e| SchemaError::File {
        path: path.display().to_string(),
        reason: format!("Invalid JSON: {}", e),
    })?;

    load_schema(&description)
}

fn load_list(obj: &JsonObject) -> SchemaResult<SchemaNode> {
    let items = obj.get("items").ok_or(SchemaError::MissingKey {
        kind: "list",
        key: "items",
    })?;
    let items = load_schema(items).map_err(|e| e.within("list", "items"))?;

    Ok(SchemaNode::List {
        items: Box::new(items),
        strict: strict_flag(obj, "list")?,
    })
}

fn load_model(obj: &JsonObject) -> SchemaResult<ModelSchema> {
    let class_type = match obj.get("class_type") {
        None => {
            return Err(SchemaError::MissingKey {
                kind: "model",
                key: "class_type",
            })
        }
        Some(JsonValue::String(s)) => s.clone(),
        Some(_) => {
            return Err(SchemaError::InvalidKey {
                kind: "model",
                key: "class_type",
                expected: "a string",
            })
        }
    };

    let fields = match obj.get("fields") {
        None => {
            return Err(SchemaError::MissingKey {
                kind: "model",
                key: "fields",
            })
        }
        Some(JsonValue::Object(fields)) => fields,
        Some(_) => {
            return Err(SchemaError::InvalidKey {
                kind: "model",
                key: "fields",
                expected: "an object",
            })
        }
    };

    let mut model = ModelSchema::new(class_type);
    model.strict = strict_flag(obj, "model")?;
    model.extra = match obj.get("extra") {
        None => ExtraBehavior::default(),
        Some(JsonValue::String(s)) if s == "ignore" => ExtraBehavior::Ignore,
        Some(JsonValue::String(s)) if s == "forbid" => ExtraBehavior::Forbid,
        Some(_) => {
            return Err(SchemaError::InvalidKey {
                kind: "model",
                key: "extra",
                expected: "\"ignore\" or \"forbid\"",
            })
        }
    };

    // serde_json's preserve_order keeps declaration order here
    for (name, entry) in fields {
        let schema =
            load_schema(entry).map_err(|e| e.within("model", format!("field \"{}\"", name)))?;
        let default = entry.get("default").map(Value::from);
        model.fields.push(FieldSchema {
            name: name.clone(),
            schema,
            default,
        });
    }

    Ok(model)
}

fn load_union(obj: &JsonObject) -> SchemaResult<SchemaNode> {
    let choices = match obj.get("choices") {
        None => {
            return Err(SchemaError::MissingKey {
                kind: "union",
                key: "choices",
            })
        }
        Some(JsonValue::Array(choices)) => choices,
        Some(_) => {
            return Err(SchemaError::InvalidKey {
                kind: "union",
                key: "choices",
                expected: "an array",
            })
        }
    };

    let choices = choices
        .iter()
        .enumerate()
        .map(|(i, choice)| {
            load_schema(choice).map_err(|e| e.within("union", format!("choices[{}]", i)))
        })
        .collect::<SchemaResult<Vec<_>>>()?;

    let mode = match obj.get("mode") {
        None => None,
        Some(mode) => Some(
            serde_json::from_value::<UnionMode>(mode.clone()).map_err(|_| {
                SchemaError::InvalidKey {
                    kind: "union",
                    key: "mode",
                    expected: "\"exact_first\" or \"declared_order\"",
                }
            })?,
        ),
    };

    Ok(SchemaNode::Union { choices, mode })
}

fn strict_flag(obj: &JsonObject, kind: &'static str) -> SchemaResult<bool> {
    match obj.get("strict") {
        None => Ok(false),
        Some(JsonValue::Bool(b)) => Ok(*b),
        Some(_) => Err(SchemaError::InvalidKey {
            kind,
            key: "strict",
            expected: "a boolean",
        }),
    }
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
