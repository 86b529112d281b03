use crate::errors::{prefix_errors, LocItem, SchemaError, SchemaResult, ValResult};
use crate::input::Value;
use crate::schema::SchemaNode;

use super::{build_validator, Builder, CombinedValidator, ValidationState, Validator};

/// Validates every element against one item validator.
///
/// Failing elements do not stop the walk; each failure is located by its
/// index and all of them are reported together.
#[derive(Debug)]
pub struct ListValidator {
    item: Box<CombinedValidator>,
    strict: bool,
    name: String,
}

impl ListValidator {
    pub(crate) fn build(
        items: &SchemaNode,
        strict: bool,
        builder: &mut Builder<'_>,
    ) -> SchemaResult<Self> {
        let item = build_validator(items, builder)
            .map_err(|e: SchemaError| e.within("list", "items"))?;
        let name = format!("list-{}", item.name());
        Ok(Self {
            item: Box::new(item),
            strict,
            name,
        })
    }
}

impl Validator for ListValidator {
    fn validate(&self, input: &Value, state: &mut ValidationState) -> ValResult<Value> {
        let items = input.list_items()?;

        let mut strict_state;
        let state = if self.strict && !state.strict() {
            strict_state = state.as_strict();
            &mut strict_state
        } else {
            state
        };

        let mut output = Vec::with_capacity(items.len());
        let mut errors = Vec::new();
        for (index, item) in items.iter().enumerate() {
            match self.item.validate(item, state) {
                Ok(value) => output.push(value),
                Err(item_errors) => {
                    errors.extend(prefix_errors(item_errors, &LocItem::Index(index)))
                }
            }
        }

        if errors.is_empty() {
            Ok(Value::List(output))
        } else {
            Err(errors)
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
