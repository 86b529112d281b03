//! Model validation
//!
//! Resolves each declared field, in declaration order, from a mapping (or
//! from another model's attributes):
//! - present: run the field validator, errors located under the field name
//! - absent with default: use the default, the validator is not run
//! - absent and required: `missing` at the field name
//!
//! A failing field never stops the remaining ones. An input that is already
//! an instance of this model's class is returned as-is.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::trace;

use crate::errors::{
    prefix_errors, val_error, ErrorEntry, ErrorKind, LocItem, SchemaError, SchemaResult,
    ValResult, ValidationError,
};
use crate::input::{ClassType, GenericMapping, ModelInstance, Value};
use crate::schema::{ExtraBehavior, ModelSchema};

use super::{build_validator, Builder, CombinedValidator, ValidationState, Validator};

#[derive(Debug)]
struct ModelField {
    name: String,
    validator: CombinedValidator,
    /// Already validated at build time
    default: Option<Value>,
}

#[derive(Debug)]
pub struct ModelValidator {
    class: ClassType,
    fields: Vec<ModelField>,
    declared: HashSet<String>,
    extra: ExtraBehavior,
    strict: bool,
}

impl ModelValidator {
    pub(crate) fn build(schema: &ModelSchema, builder: &mut Builder<'_>) -> SchemaResult<Self> {
        let class = builder.class_for(&schema.class_type);

        let mut fields = Vec::with_capacity(schema.fields.len());
        for field in &schema.fields {
            let validator = build_validator(&field.schema, builder)
                .map_err(|e| e.within("model", format!("field \"{}\"", field.name)))?;

            let default = match &field.default {
                Some(default) => {
                    let mut state = ValidationState::new(false, builder.config().max_depth);
                    let value = validator.validate(default, &mut state).map_err(|errors| {
                        SchemaError::InvalidDefault {
                            field: field.name.clone(),
                            error: ValidationError::new(validator.name(), errors),
                        }
                    })?;
                    Some(value)
                }
                None => None,
            };

            fields.push(ModelField {
                name: field.name.clone(),
                validator,
                default,
            });
        }

        let declared = fields.iter().map(|field| field.name.clone()).collect();

        Ok(Self {
            class,
            fields,
            declared,
            extra: schema.extra,
            strict: schema.strict,
        })
    }

    /// The class every produced instance belongs to
    pub fn class(&self) -> &ClassType {
        &self.class
    }

    fn is_declared(&self, key: &str) -> bool {
        self.declared.contains(key)
    }
}

impl Validator for ModelValidator {
    fn validate(&self, input: &Value, state: &mut ValidationState) -> ValResult<Value> {
        if let Value::Model(instance) = input {
            if instance.is_instance_of(&self.class) {
                trace!(class = self.class.name(), "model instance passed through");
                return Ok(input.clone());
            }
        }

        if self.strict || state.strict() {
            return val_error(
                ErrorKind::ModelClassType {
                    class_name: self.class.name().to_string(),
                },
                input,
            );
        }

        let mapping = input.lax_mapping()?;

        let mut values = Vec::with_capacity(self.fields.len());
        let mut errors = Vec::new();
        for field in &self.fields {
            match (mapping.get(&field.name), &field.default) {
                (Some(value), _) => match field.validator.validate(value, state) {
                    Ok(output) => values.push((field.name.clone(), output)),
                    Err(field_errors) => errors.extend(prefix_errors(
                        field_errors,
                        &LocItem::Key(field.name.clone()),
                    )),
                },
                (None, Some(default)) => values.push((field.name.clone(), default.clone())),
                (None, None) => errors.push(
                    ErrorEntry::new(ErrorKind::Missing, input.clone())
                        .with_outer_location(field.name.as_str()),
                ),
            }
        }

        if self.extra == ExtraBehavior::Forbid {
            if let GenericMapping::Dict(dict) = mapping {
                for (key, value) in dict.iter().filter(|(key, _)| !self.is_declared(key)) {
                    errors.push(
                        ErrorEntry::new(ErrorKind::ExtraForbidden, value.clone())
                            .with_outer_location(key),
                    );
                }
            }
        }

        if errors.is_empty() {
            let instance = ModelInstance::new(self.class.clone(), values);
            Ok(Value::Model(Arc::new(instance)))
        } else {
            Err(errors)
        }
    }

    fn name(&self) -> &str {
        self.class.name()
    }
}
