//! Schema description types
//!
//! Supported node types:
//! - bool, int, float, str, none: leaf scalars
//! - list: homogeneous sequence with one item schema
//! - model: ordered named fields producing an instance of a target class
//! - union: ordered choices, first success wins

use serde::{Deserialize, Serialize};

use crate::input::Value;

/// How a union picks among choices that could all accept an input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnionMode {
    /// First choice accepting the exact type, then first choice accepting
    /// after coercion
    #[default]
    ExactFirst,
    /// First choice accepting after coercion, in declared order
    DeclaredOrder,
}

impl UnionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnionMode::ExactFirst => "exact_first",
            UnionMode::DeclaredOrder => "declared_order",
        }
    }
}

/// What a model does with mapping keys it does not declare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtraBehavior {
    /// Unknown keys are left unset on the instance
    #[default]
    Ignore,
    /// Each unknown key is an `extra_forbidden` error
    Forbid,
}

/// One node of a schema tree. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    Bool { strict: bool },
    Int { strict: bool },
    Float { strict: bool },
    Str { strict: bool },
    None,
    List { items: Box<SchemaNode>, strict: bool },
    Model(ModelSchema),
    Union {
        choices: Vec<SchemaNode>,
        /// Overrides the config-wide union mode when set
        mode: Option<UnionMode>,
    },
}

impl SchemaNode {
    pub fn bool() -> Self {
        SchemaNode::Bool { strict: false }
    }

    pub fn int() -> Self {
        SchemaNode::Int { strict: false }
    }

    pub fn float() -> Self {
        SchemaNode::Float { strict: false }
    }

    pub fn str() -> Self {
        SchemaNode::Str { strict: false }
    }

    pub fn none() -> Self {
        SchemaNode::None
    }

    pub fn list(items: SchemaNode) -> Self {
        SchemaNode::List {
            items: Box::new(items),
            strict: false,
        }
    }

    pub fn model(model: ModelSchema) -> Self {
        SchemaNode::Model(model)
    }

    pub fn union(choices: Vec<SchemaNode>) -> Self {
        SchemaNode::Union {
            choices,
            mode: None,
        }
    }

    pub fn union_with_mode(choices: Vec<SchemaNode>, mode: UnionMode) -> Self {
        SchemaNode::Union {
            choices,
            mode: Some(mode),
        }
    }

    /// Returns the type tag used in schema descriptions
    pub fn type_name(&self) -> &'static str {
        match self {
            SchemaNode::Bool { .. } => "bool",
            SchemaNode::Int { .. } => "int",
            SchemaNode::Float { .. } => "float",
            SchemaNode::Str { .. } => "str",
            SchemaNode::None => "none",
            SchemaNode::List { .. } => "list",
            SchemaNode::Model(_) => "model",
            SchemaNode::Union { .. } => "union",
        }
    }
}

/// Field definition: required exactly when there is no default
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSchema {
    pub name: String,
    pub schema: SchemaNode,
    pub default: Option<Value>,
}

impl FieldSchema {
    pub fn required(name: impl Into<String>, schema: SchemaNode) -> Self {
        Self {
            name: name.into(),
            schema,
            default: None,
        }
    }

    pub fn with_default(name: impl Into<String>, schema: SchemaNode, default: Value) -> Self {
        Self {
            name: name.into(),
            schema,
            default: Some(default),
        }
    }

    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelSchema {
    /// Target class name; equal names within one build share a class
    pub class_type: String,
    /// Fields in declaration order
    pub fields: Vec<FieldSchema>,
    pub extra: ExtraBehavior,
    pub strict: bool,
}

impl ModelSchema {
    pub fn new(class_type: impl Into<String>) -> Self {
        Self {
            class_type: class_type.into(),
            fields: Vec::new(),
            extra: ExtraBehavior::default(),
            strict: false,
        }
    }

    /// Adds a required field
    pub fn field(mut self, name: impl Into<String>, schema: SchemaNode) -> Self {
        self.fields.push(FieldSchema::required(name, schema));
        self
    }

    /// Adds a field with a default
    pub fn field_with_default(
        mut self,
        name: impl Into<String>,
        schema: SchemaNode,
        default: impl Into<Value>,
    ) -> Self {
        self.fields
            .push(FieldSchema::with_default(name, schema, default.into()));
        self
    }

    pub fn extra(mut self, extra: ExtraBehavior) -> Self {
        self.extra = extra;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_builder_keeps_declaration_order() {
        let model = ModelSchema::new("User")
            .field("name", SchemaNode::str())
            .field_with_default("age", SchemaNode::int(), 0)
            .field("email", SchemaNode::str());
        let names: Vec<_> = model.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["name", "age", "email"]);
        assert!(model.fields[0].is_required());
        assert!(!model.fields[1].is_required());
    }

    #[test]
    fn test_type_names() {
        assert_eq!(SchemaNode::bool().type_name(), "bool");
        assert_eq!(SchemaNode::none().type_name(), "none");
        assert_eq!(SchemaNode::list(SchemaNode::int()).type_name(), "list");
        assert_eq!(SchemaNode::model(ModelSchema::new("A")).type_name(), "model");
        assert_eq!(SchemaNode::union(vec![]).type_name(), "union");
    }

    #[test]
    fn test_union_mode_serde_names() {
        let mode: UnionMode = serde_json::from_str("\"declared_order\"").unwrap();
        assert_eq!(mode, UnionMode::DeclaredOrder);
        assert_eq!(UnionMode::ExactFirst.as_str(), "exact_first");
    }
}
