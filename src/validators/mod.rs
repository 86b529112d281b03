//! Compiled validator tree
//!
//! Each schema node compiles 1:1 into a validator. Validators are immutable
//! after build and hold no per-call state, so one tree can serve many
//! concurrent `validate` calls.
//!
//! Dispatch is a closed enum (`CombinedValidator`) over per-kind structs
//! that all implement `Validator`. Composite validators only ever talk to
//! children through the trait, so adding a leaf kind touches this module
//! and the leaf, never list/model/union code.

use std::collections::HashMap;
use std::fmt;

use crate::config::ValidatorConfig;
use crate::errors::{SchemaResult, ValResult};
use crate::input::{ClassType, Value};
use crate::schema::{SchemaNode, UnionMode};

mod leaf;
mod list;
mod model;
mod schema_validator;
mod state;
mod union;

pub use leaf::{BoolValidator, FloatValidator, IntValidator, NoneValidator, StrValidator};
pub use list::ListValidator;
pub use model::ModelValidator;
pub use schema_validator::SchemaValidator;
pub use state::ValidationState;
pub use union::UnionValidator;

/// Behaviour shared by every validator kind.
pub trait Validator: Send + Sync + fmt::Debug {
    /// Validates and coerces `input`, or returns every failure found.
    fn validate(&self, input: &Value, state: &mut ValidationState) -> ValResult<Value>;

    /// Name used as the location tag when this validator is a union choice.
    fn name(&self) -> &str;
}

#[derive(Debug)]
pub enum CombinedValidator {
    Bool(BoolValidator),
    Int(IntValidator),
    Float(FloatValidator),
    Str(StrValidator),
    None(NoneValidator),
    List(ListValidator),
    Model(ModelValidator),
    Union(UnionValidator),
}

macro_rules! dispatch {
    ($self:ident, $v:ident => $e:expr) => {
        match $self {
            CombinedValidator::Bool($v) => $e,
            CombinedValidator::Int($v) => $e,
            CombinedValidator::Float($v) => $e,
            CombinedValidator::Str($v) => $e,
            CombinedValidator::None($v) => $e,
            CombinedValidator::List($v) => $e,
            CombinedValidator::Model($v) => $e,
            CombinedValidator::Union($v) => $e,
        }
    };
}

impl Validator for CombinedValidator {
    fn validate(&self, input: &Value, state: &mut ValidationState) -> ValResult<Value> {
        state.enter(input)?;
        let result = dispatch!(self, v => v.validate(input, state));
        state.leave();
        result
    }

    fn name(&self) -> &str {
        dispatch!(self, v => v.name())
    }
}

macro_rules! impl_from_validator {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for CombinedValidator {
                fn from(validator: $ty) -> Self {
                    CombinedValidator::$variant(validator)
                }
            }
        )*
    };
}

impl_from_validator!(
    Bool => BoolValidator,
    Int => IntValidator,
    Float => FloatValidator,
    Str => StrValidator,
    None => NoneValidator,
    List => ListValidator,
    Model => ModelValidator,
    Union => UnionValidator,
);

/// Model target classes created during a build, interned by name.
#[derive(Debug, Clone, Default)]
pub struct ClassRegistry {
    classes: HashMap<String, ClassType>,
}

impl ClassRegistry {
    /// Returns the class for `name`, creating it on first use.
    pub fn intern(&mut self, name: &str) -> ClassType {
        self.classes
            .entry(name.to_string())
            .or_insert_with(|| ClassType::new(name))
            .clone()
    }

    pub fn get(&self, name: &str) -> Option<&ClassType> {
        self.classes.get(name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// Build-time context shared across one schema compilation.
pub(crate) struct Builder<'a> {
    config: &'a ValidatorConfig,
    classes: ClassRegistry,
}

impl<'a> Builder<'a> {
    pub(crate) fn new(config: &'a ValidatorConfig) -> Self {
        Self {
            config,
            classes: ClassRegistry::default(),
        }
    }

    pub(crate) fn config(&self) -> &ValidatorConfig {
        self.config
    }

    pub(crate) fn class_for(&mut self, name: &str) -> ClassType {
        self.classes.intern(name)
    }

    /// A union's own mode wins over the config-wide one.
    pub(crate) fn union_mode(&self, node_mode: Option<UnionMode>) -> UnionMode {
        node_mode.unwrap_or(self.config.union_mode)
    }

    pub(crate) fn into_classes(self) -> ClassRegistry {
        self.classes
    }
}

/// Compiles one schema node, top-down.
pub(crate) fn build_validator(
    schema: &SchemaNode,
    builder: &mut Builder<'_>,
) -> SchemaResult<CombinedValidator> {
    let validator: CombinedValidator = match schema {
        SchemaNode::Bool { strict } => BoolValidator::new(*strict).into(),
        SchemaNode::Int { strict } => IntValidator::new(*strict).into(),
        SchemaNode::Float { strict } => FloatValidator::new(*strict).into(),
        SchemaNode::Str { strict } => StrValidator::new(*strict).into(),
        SchemaNode::None => NoneValidator.into(),
        SchemaNode::List { items, strict } => ListValidator::build(items, *strict, builder)?.into(),
        SchemaNode::Model(model) => ModelValidator::build(model, builder)?.into(),
        SchemaNode::Union { choices, mode } => UnionValidator::build(choices, *mode, builder)?.into(),
    };
    Ok(validator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_interns_by_name() {
        let mut registry = ClassRegistry::default();
        let a1 = registry.intern("A");
        let a2 = registry.intern("A");
        let b = registry.intern("B");
        assert_eq!(a1, a2);
        assert_ne!(a1, b);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_names_follow_schema_shape() {
        let config = ValidatorConfig::default();
        let mut builder = Builder::new(&config);
        let schema = SchemaNode::union(vec![
            SchemaNode::list(SchemaNode::bool()),
            SchemaNode::list(SchemaNode::list(SchemaNode::int())),
            SchemaNode::none(),
        ]);
        let validator = build_validator(&schema, &mut builder).unwrap();
        assert_eq!(validator.name(), "union[list-bool,list-list-int,none]");
    }

    #[test]
    fn test_dispatch_enforces_depth() {
        let config = ValidatorConfig::default();
        let mut builder = Builder::new(&config);
        let schema = SchemaNode::list(SchemaNode::list(SchemaNode::int()));
        let validator = build_validator(&schema, &mut builder).unwrap();

        let input = Value::List(vec![Value::List(vec![Value::Int(1)])]);
        let mut state = ValidationState::new(false, 2);
        let errors = validator.validate(&input, &mut state).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code(), "depth_exceeded");
        assert_eq!(errors[0].location().to_string(), "0 -> 0");
        assert_eq!(state.depth(), 0);
    }
}
