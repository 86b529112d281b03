//! Input and output values for the validation engine
//!
//! Validators read `Value`s and produce `Value`s. JSON documents convert
//! losslessly into `Value` (key order preserved), and every `Value`
//! serializes back to JSON.

mod coerce;
mod json;
mod value;

pub use coerce::GenericMapping;
pub use value::{ClassType, Dict, ModelInstance, Value};
