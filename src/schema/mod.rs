//! Schema descriptions
//!
//! A schema is a typed tree (`SchemaNode`) built either in code or by
//! loading a JSON description. Schemas carry no behaviour; they are
//! compiled into validators by `SchemaValidator::build`.

mod loader;
mod types;

pub use loader::{load_schema, load_schema_file, load_schema_str};
pub use types::{ExtraBehavior, FieldSchema, ModelSchema, SchemaNode, UnionMode};
