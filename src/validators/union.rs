//! Union validation
//!
//! Choices are tried in declared order and the first success is returned;
//! later choices are never consulted once one succeeds. In `ExactFirst`
//! mode an exact-type pass over all choices runs before the coercing pass,
//! so an input that already has one choice's type is never coerced into an
//! earlier choice.
//!
//! When every choice fails, each choice's errors are tagged with its name
//! and concatenated in declared order. Choice names must therefore be
//! distinct within one union.

use std::collections::HashMap;

use tracing::trace;

use crate::errors::{prefix_errors, LocItem, SchemaError, SchemaResult, ValResult};
use crate::input::Value;
use crate::schema::{SchemaNode, UnionMode};

use super::{build_validator, Builder, CombinedValidator, ValidationState, Validator};

#[derive(Debug)]
pub struct UnionValidator {
    choices: Vec<CombinedValidator>,
    mode: UnionMode,
    name: String,
}

impl UnionValidator {
    pub(crate) fn build(
        choices: &[SchemaNode],
        mode: Option<UnionMode>,
        builder: &mut Builder<'_>,
    ) -> SchemaResult<Self> {
        if choices.is_empty() {
            return Err(SchemaError::EmptyChoices);
        }

        let choices = choices
            .iter()
            .enumerate()
            .map(|(i, choice)| {
                build_validator(choice, builder)
                    .map_err(|e| e.within("union", format!("choices[{}]", i)))
            })
            .collect::<SchemaResult<Vec<_>>>()?;

        let names: Vec<&str> = choices.iter().map(|choice| choice.name()).collect();
        let mut seen = HashMap::with_capacity(names.len());
        for (index, name) in names.iter().enumerate() {
            if let Some(first) = seen.insert(*name, index) {
                return Err(SchemaError::DuplicateChoice {
                    name: name.to_string(),
                    first,
                    second: index,
                });
            }
        }

        let name = format!("union[{}]", names.join(","));

        Ok(Self {
            mode: builder.union_mode(mode),
            choices,
            name,
        })
    }

    pub fn mode(&self) -> UnionMode {
        self.mode
    }
}

impl Validator for UnionValidator {
    fn validate(&self, input: &Value, state: &mut ValidationState) -> ValResult<Value> {
        if self.mode == UnionMode::ExactFirst && !state.strict() {
            let mut exact_state = state.as_strict();
            for choice in &self.choices {
                if let Ok(output) = choice.validate(input, &mut exact_state) {
                    return Ok(output);
                }
            }
        }

        let mut errors = Vec::new();
        for choice in &self.choices {
            match choice.validate(input, state) {
                Ok(output) => return Ok(output),
                Err(choice_errors) => {
                    trace!(
                        choice = choice.name(),
                        errors = choice_errors.len(),
                        "union choice rejected input"
                    );
                    let tag = LocItem::Key(choice.name().to_string());
                    errors.extend(prefix_errors(choice_errors, &tag));
                }
            }
        }
        Err(errors)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
