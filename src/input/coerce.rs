//! Leaf coercion table
//!
//! `strict_*` accepts only the exact type. `lax_*` falls back to a fixed set
//! of conversions:
//!
//! | target | lax conversions |
//! |--------|-----------------|
//! | bool   | str literals (case-insensitive), int 0 / 1 |
//! | int    | trimmed base-10 str, float with no fractional part |
//! | float  | int, trimmed str parsed as f64 |
//! | str    | int, float |
//!
//! Bools are never treated as numbers, and numbers are never rendered from
//! bools.

use crate::errors::{val_error, ErrorKind, ValResult};

use super::value::{Dict, ModelInstance, Value};

const TRUE_LITERALS: [&str; 6] = ["1", "on", "t", "true", "y", "yes"];
const FALSE_LITERALS: [&str; 6] = ["0", "off", "f", "false", "n", "no"];

/// A mapping-shaped view of an input, used by model validation.
#[derive(Debug, Clone, Copy)]
pub enum GenericMapping<'a> {
    Dict(&'a Dict),
    /// Fields of another model's instance read as attributes
    Instance(&'a ModelInstance),
}

impl<'a> GenericMapping<'a> {
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        match *self {
            GenericMapping::Dict(dict) => dict.get(key),
            GenericMapping::Instance(instance) => instance.get(key),
        }
    }
}

impl Value {
    pub fn strict_bool(&self) -> ValResult<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            _ => val_error(ErrorKind::BoolType, self),
        }
    }

    pub fn lax_bool(&self) -> ValResult<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            Value::Str(s) => str_as_bool(self, s),
            Value::Int(0) => Ok(false),
            Value::Int(1) => Ok(true),
            Value::Int(_) => val_error(ErrorKind::BoolParsing, self),
            _ => val_error(ErrorKind::BoolType, self),
        }
    }

    pub fn strict_int(&self) -> ValResult<i64> {
        match self {
            Value::Int(i) => Ok(*i),
            _ => val_error(ErrorKind::IntType, self),
        }
    }

    pub fn lax_int(&self) -> ValResult<i64> {
        match self {
            Value::Int(i) => Ok(*i),
            Value::Str(s) => match s.trim().parse::<i64>() {
                Ok(i) => Ok(i),
                Err(_) => val_error(ErrorKind::IntParsing, self),
            },
            Value::Float(f) => float_as_int(self, *f),
            _ => val_error(ErrorKind::IntType, self),
        }
    }

    pub fn strict_float(&self) -> ValResult<f64> {
        match self {
            Value::Float(f) => Ok(*f),
            _ => val_error(ErrorKind::FloatType, self),
        }
    }

    pub fn lax_float(&self) -> ValResult<f64> {
        match self {
            Value::Float(f) => Ok(*f),
            Value::Int(i) => Ok(*i as f64),
            Value::Str(s) => match s.trim().parse::<f64>() {
                Ok(f) => Ok(f),
                Err(_) => val_error(ErrorKind::FloatParsing, self),
            },
            _ => val_error(ErrorKind::FloatType, self),
        }
    }

    pub fn strict_str(&self) -> ValResult<String> {
        match self {
            Value::Str(s) => Ok(s.clone()),
            _ => val_error(ErrorKind::StrType, self),
        }
    }

    pub fn lax_str(&self) -> ValResult<String> {
        match self {
            Value::Str(s) => Ok(s.clone()),
            Value::Int(i) => Ok(i.to_string()),
            Value::Float(f) => Ok(f.to_string()),
            _ => val_error(ErrorKind::StrType, self),
        }
    }

    pub fn none_check(&self) -> ValResult<()> {
        match self {
            Value::None => Ok(()),
            _ => val_error(ErrorKind::NoneRequired, self),
        }
    }

    /// Lists are accepted as-is in both modes.
    pub fn list_items(&self) -> ValResult<&[Value]> {
        match self {
            Value::List(items) => Ok(items),
            _ => val_error(ErrorKind::ListType, self),
        }
    }

    /// Mapping view in lax mode: a dict, or another model's instance.
    pub fn lax_mapping(&self) -> ValResult<GenericMapping<'_>> {
        match self {
            Value::Dict(dict) => Ok(GenericMapping::Dict(dict)),
            Value::Model(instance) => Ok(GenericMapping::Instance(instance)),
            _ => val_error(ErrorKind::DictType, self),
        }
    }
}

fn str_as_bool(input: &Value, s: &str) -> ValResult<bool> {
    let lower = s.to_lowercase();
    if TRUE_LITERALS.contains(&lower.as_str()) {
        Ok(true)
    } else if FALSE_LITERALS.contains(&lower.as_str()) {
        Ok(false)
    } else {
        val_error(ErrorKind::BoolParsing, input)
    }
}

fn float_as_int(input: &Value, f: f64) -> ValResult<i64> {
    // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
    if !f.is_finite() || f < i64::MIN as f64 || f >= i64::MAX as f64 {
        val_error(ErrorKind::IntType, input)
    } else if f.fract() != 0.0 {
        val_error(ErrorKind::IntFromFloat, input)
    } else {
        Ok(f as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code_of<T: std::fmt::Debug>(result: ValResult<T>) -> &'static str {
        let errors = result.unwrap_err();
        assert_eq!(errors.len(), 1);
        errors[0].kind().code()
    }

    #[test]
    fn test_bool_literals() {
        for s in ["true", "TRUE", "Yes", "on", "1", "t", "y"] {
            assert_eq!(Value::from(s).lax_bool().unwrap(), true, "{}", s);
        }
        for s in ["false", "No", "off", "0", "f", "N"] {
            assert_eq!(Value::from(s).lax_bool().unwrap(), false, "{}", s);
        }
        assert_eq!(code_of(Value::from("maybe").lax_bool()), "bool_parsing");
        assert_eq!(code_of(Value::from(" true").lax_bool()), "bool_parsing");
    }

    #[test]
    fn test_bool_from_int() {
        assert_eq!(Value::Int(1).lax_bool().unwrap(), true);
        assert_eq!(Value::Int(0).lax_bool().unwrap(), false);
        assert_eq!(code_of(Value::Int(3).lax_bool()), "bool_parsing");
        assert_eq!(code_of(Value::Float(1.0).lax_bool()), "bool_type");
        assert_eq!(code_of(Value::from("true").strict_bool()), "bool_type");
    }

    #[test]
    fn test_int_coercion() {
        assert_eq!(Value::from(" 42 ").lax_int().unwrap(), 42);
        assert_eq!(Value::from("-7").lax_int().unwrap(), -7);
        assert_eq!(Value::Float(3.0).lax_int().unwrap(), 3);
        assert_eq!(code_of(Value::Float(3.5).lax_int()), "int_from_float");
        assert_eq!(code_of(Value::Float(f64::NAN).lax_int()), "int_type");
        assert_eq!(code_of(Value::from("1.5").lax_int()), "int_parsing");
        assert_eq!(code_of(Value::Bool(true).lax_int()), "int_type");
        assert_eq!(code_of(Value::from("1").strict_int()), "int_type");
    }

    #[test]
    fn test_float_coercion() {
        assert_eq!(Value::Int(2).lax_float().unwrap(), 2.0);
        assert_eq!(Value::from("1e3").lax_float().unwrap(), 1000.0);
        assert!(Value::from("inf").lax_float().unwrap().is_infinite());
        assert_eq!(code_of(Value::from("abc").lax_float()), "float_parsing");
        assert_eq!(code_of(Value::Bool(false).lax_float()), "float_type");
        assert_eq!(code_of(Value::Int(2).strict_float()), "float_type");
    }

    #[test]
    fn test_str_coercion() {
        assert_eq!(Value::Int(12).lax_str().unwrap(), "12");
        assert_eq!(Value::Float(2.5).lax_str().unwrap(), "2.5");
        assert_eq!(code_of(Value::Bool(true).lax_str()), "str_type");
        assert_eq!(code_of(Value::Int(12).strict_str()), "str_type");
    }

    #[test]
    fn test_mapping_view() {
        let dict: Dict = vec![("a", 1)].into_iter().collect();
        let value = Value::Dict(dict);
        let mapping = value.lax_mapping().unwrap();
        assert_eq!(mapping.get("a"), Some(&Value::Int(1)));
        assert_eq!(code_of(Value::List(vec![]).lax_mapping()), "dict_type");
    }
}
