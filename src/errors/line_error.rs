//! A single located validation failure

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::input::Value;

use super::kinds::ErrorKind;
use super::location::{LocItem, Location};

/// Result of every validator call: the output value, or a non-empty list
/// of failures.
pub type ValResult<T> = Result<T, Vec<ErrorEntry>>;

/// Fails with a single unlocated entry for `input`.
pub fn val_error<T>(kind: ErrorKind, input: &Value) -> ValResult<T> {
    Err(vec![ErrorEntry::new(kind, input.clone())])
}

/// One failure: what went wrong, where, and on which value.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorEntry {
    kind: ErrorKind,
    location: Location,
    input_value: Value,
}

impl ErrorEntry {
    pub fn new(kind: ErrorKind, input_value: Value) -> Self {
        Self {
            kind,
            location: Location::new(),
            input_value,
        }
    }

    /// Wraps this entry in one more enclosing location segment.
    pub fn with_outer_location(mut self, item: impl Into<LocItem>) -> Self {
        self.location.push_outer(item.into());
        self
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn message(&self) -> String {
        self.kind.message().into_owned()
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn input_value(&self) -> &Value {
        &self.input_value
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// Prefixes every entry in `errors` with `item`.
pub(crate) fn prefix_errors(
    errors: Vec<ErrorEntry>,
    item: &LocItem,
) -> impl Iterator<Item = ErrorEntry> + '_ {
    errors
        .into_iter()
        .map(move |entry| entry.with_outer_location(item.clone()))
}

impl Serialize for ErrorEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("kind", self.code())?;
        map.serialize_entry("loc", &self.location)?;
        map.serialize_entry("message", &self.message())?;
        map.serialize_entry("input_value", &self.input_value)?;
        map.end()
    }
}
