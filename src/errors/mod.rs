//! Error types for the validation engine
//!
//! Two families, never mixed:
//! - `SchemaError`: build time, structural, first defect only
//! - `ValidationError`: run time, content, every independent defect with
//!   its location

mod kinds;
mod line_error;
mod location;
mod schema_error;
mod validation_error;

pub use kinds::ErrorKind;
pub use line_error::{val_error, ErrorEntry, ValResult};
pub use location::{LocItem, Location};
pub use schema_error::{SchemaError, SchemaResult};
pub use validation_error::ValidationError;

pub(crate) use line_error::prefix_errors;
