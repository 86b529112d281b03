//! Leaf scalar validators
//!
//! Type-check first; coerce only outside strict mode. See `input::coerce`
//! for the coercion table.

use crate::errors::ValResult;
use crate::input::Value;

use super::{ValidationState, Validator};

#[derive(Debug, Clone)]
pub struct BoolValidator {
    strict: bool,
}

impl BoolValidator {
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }
}

impl Validator for BoolValidator {
    fn validate(&self, input: &Value, state: &mut ValidationState) -> ValResult<Value> {
        let b = if self.strict || state.strict() {
            input.strict_bool()?
        } else {
            input.lax_bool()?
        };
        Ok(Value::Bool(b))
    }

    fn name(&self) -> &str {
        "bool"
    }
}

#[derive(Debug, Clone)]
pub struct IntValidator {
    strict: bool,
}

impl IntValidator {
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }
}

impl Validator for IntValidator {
    fn validate(&self, input: &Value, state: &mut ValidationState) -> ValResult<Value> {
        let i = if self.strict || state.strict() {
            input.strict_int()?
        } else {
            input.lax_int()?
        };
        Ok(Value::Int(i))
    }

    fn name(&self) -> &str {
        "int"
    }
}

#[derive(Debug, Clone)]
pub struct FloatValidator {
    strict: bool,
}

impl FloatValidator {
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }
}

impl Validator for FloatValidator {
    fn validate(&self, input: &Value, state: &mut ValidationState) -> ValResult<Value> {
        let f = if self.strict || state.strict() {
            input.strict_float()?
        } else {
            input.lax_float()?
        };
        Ok(Value::Float(f))
    }

    fn name(&self) -> &str {
        "float"
    }
}

#[derive(Debug, Clone)]
pub struct StrValidator {
    strict: bool,
}

impl StrValidator {
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }
}

impl Validator for StrValidator {
    fn validate(&self, input: &Value, state: &mut ValidationState) -> ValResult<Value> {
        let s = if self.strict || state.strict() {
            input.strict_str()?
        } else {
            input.lax_str()?
        };
        Ok(Value::Str(s))
    }

    fn name(&self) -> &str {
        "str"
    }
}

/// Accepts only none; there is nothing to coerce from.
#[derive(Debug, Clone)]
pub struct NoneValidator;

impl Validator for NoneValidator {
    fn validate(&self, input: &Value, _state: &mut ValidationState) -> ValResult<Value> {
        input.none_check()?;
        Ok(Value::None)
    }

    fn name(&self) -> &str {
        "none"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lax() -> ValidationState {
        ValidationState::new(false, 16)
    }

    #[test]
    fn test_exact_type_passes_through() {
        let mut state = lax();
        assert_eq!(
            BoolValidator::new(false).validate(&Value::Bool(false), &mut state),
            Ok(Value::Bool(false))
        );
        assert_eq!(
            StrValidator::new(false).validate(&Value::from("x"), &mut state),
            Ok(Value::from("x"))
        );
    }

    #[test]
    fn test_node_strict_flag_blocks_coercion() {
        let mut state = lax();
        let errors = IntValidator::new(true)
            .validate(&Value::from("5"), &mut state)
            .unwrap_err();
        assert_eq!(errors[0].code(), "int_type");
        assert_eq!(
            IntValidator::new(false).validate(&Value::from("5"), &mut state),
            Ok(Value::Int(5))
        );
    }

    #[test]
    fn test_state_strict_blocks_coercion() {
        let mut state = ValidationState::new(true, 16);
        let errors = FloatValidator::new(false)
            .validate(&Value::Int(1), &mut state)
            .unwrap_err();
        assert_eq!(errors[0].code(), "float_type");
    }

    #[test]
    fn test_none_required() {
        let mut state = lax();
        assert_eq!(NoneValidator.validate(&Value::None, &mut state), Ok(Value::None));
        let errors = NoneValidator
            .validate(&Value::from("hello"), &mut state)
            .unwrap_err();
        assert_eq!(errors[0].code(), "none_required");
        assert_eq!(errors[0].input_value(), &Value::from("hello"));
        assert!(errors[0].location().is_empty());
    }
}
