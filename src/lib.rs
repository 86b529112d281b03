//! shapeval - A schema-driven validation and coercion engine
//!
//! Given a schema tree and an untyped input value, produce either a
//! validated, coerced output or one report listing every independent
//! failure with its location.
//!
//! ```
//! use serde_json::json;
//! use shapeval::{SchemaValidator, Value};
//!
//! let validator = SchemaValidator::from_json(&json!({
//!     "type": "union",
//!     "choices": [{"type": "none"}, {"type": "int"}]
//! }))
//! .unwrap();
//!
//! assert_eq!(validator.validate(&Value::from("42")).unwrap(), Value::Int(42));
//! let err = validator.validate(&Value::from("hello")).unwrap_err();
//! assert_eq!(err.error_count(), 2);
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod input;
pub mod schema;
pub mod validators;

pub use config::{ConfigError, ValidatorConfig};
pub use errors::{
    ErrorEntry, ErrorKind, LocItem, Location, SchemaError, SchemaResult, ValidationError,
};
pub use input::{ClassType, Dict, ModelInstance, Value};
pub use schema::{ExtraBehavior, FieldSchema, ModelSchema, SchemaNode, UnionMode};
pub use validators::SchemaValidator;
