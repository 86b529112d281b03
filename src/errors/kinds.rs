//! Validation error kinds
//!
//! Each kind has a stable snake_case code and a default message. Codes are
//! part of the public report format and must not change.

use std::borrow::Cow;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Required field absent from the mapping
    Missing,
    NoneRequired,
    BoolType,
    BoolParsing,
    IntType,
    IntParsing,
    IntFromFloat,
    FloatType,
    FloatParsing,
    StrType,
    ListType,
    DictType,
    /// Strict model validation given something other than its own instance
    ModelClassType { class_name: String },
    ExtraForbidden,
    DepthExceeded { max_depth: usize },
    InvalidJson { error: String },
}

impl ErrorKind {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::Missing => "missing",
            ErrorKind::NoneRequired => "none_required",
            ErrorKind::BoolType => "bool_type",
            ErrorKind::BoolParsing => "bool_parsing",
            ErrorKind::IntType => "int_type",
            ErrorKind::IntParsing => "int_parsing",
            ErrorKind::IntFromFloat => "int_from_float",
            ErrorKind::FloatType => "float_type",
            ErrorKind::FloatParsing => "float_parsing",
            ErrorKind::StrType => "str_type",
            ErrorKind::ListType => "list_type",
            ErrorKind::DictType => "dict_type",
            ErrorKind::ModelClassType { .. } => "model_class_type",
            ErrorKind::ExtraForbidden => "extra_forbidden",
            ErrorKind::DepthExceeded { .. } => "depth_exceeded",
            ErrorKind::InvalidJson { .. } => "invalid_json",
        }
    }

    /// Returns the default human-readable message
    pub fn message(&self) -> Cow<'static, str> {
        let message = match self {
            ErrorKind::Missing => "Field required",
            ErrorKind::NoneRequired => "Value must be None/null",
            ErrorKind::BoolType => "Value must be a valid boolean",
            ErrorKind::BoolParsing => "Value must be a valid boolean, unable to interpret input",
            ErrorKind::IntType => "Value must be a valid integer",
            ErrorKind::IntParsing => {
                "Value must be a valid integer, unable to parse string as an integer"
            }
            ErrorKind::IntFromFloat => {
                "Value must be a valid integer, got a number with a fractional part"
            }
            ErrorKind::FloatType => "Value must be a valid number",
            ErrorKind::FloatParsing => {
                "Value must be a valid number, unable to parse string as a number"
            }
            ErrorKind::StrType => "Value must be a valid string",
            ErrorKind::ListType => "Value must be a valid list",
            ErrorKind::DictType => "Value must be a valid dictionary",
            ErrorKind::ExtraForbidden => "Extra fields are not permitted",
            ErrorKind::ModelClassType { class_name } => {
                return Cow::Owned(format!("Value must be an instance of {}", class_name))
            }
            ErrorKind::DepthExceeded { max_depth } => {
                return Cow::Owned(format!(
                    "Maximum validation depth of {} exceeded",
                    max_depth
                ))
            }
            ErrorKind::InvalidJson { error } => {
                return Cow::Owned(format!("Invalid JSON: {}", error))
            }
        };
        Cow::Borrowed(message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
