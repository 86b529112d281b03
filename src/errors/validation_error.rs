//! Aggregated validation report

use std::fmt;
use std::fmt::Write;

use super::line_error::ErrorEntry;

/// Input reprs longer than this are elided in the middle.
const MAX_INPUT_REPR: usize = 50;

/// Every independent failure from one `validate` call, in discovery order.
///
/// Never empty: a call that produced no entries succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    title: String,
    errors: Vec<ErrorEntry>,
}

impl ValidationError {
    pub fn new(title: impl Into<String>, errors: Vec<ErrorEntry>) -> Self {
        debug_assert!(!errors.is_empty(), "validation error without entries");
        Self {
            title: title.into(),
            errors,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn errors(&self) -> &[ErrorEntry] {
        &self.errors
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn into_errors(self) -> Vec<ErrorEntry> {
        self.errors
    }

    /// Returns the entries as a JSON array of
    /// `{kind, loc, message, input_value}` objects.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Array(self.errors.iter().map(ErrorEntry::to_json).collect())
    }

    fn pretty_line(entry: &ErrorEntry, out: &mut String) -> fmt::Result {
        if !entry.location().is_empty() {
            writeln!(out, "{}", entry.location())?;
        }
        let input = entry.input_value().to_string();
        write!(out, "  {} [kind={}, input_value=", entry.message(), entry.code())?;
        if input.chars().count() > MAX_INPUT_REPR {
            let head: String = input.chars().take(25).collect();
            let tail: String = {
                let mut tail: Vec<char> = input.chars().rev().take(24).collect();
                tail.reverse();
                tail.into_iter().collect()
            };
            write!(out, "{}...{}", head, tail)?;
        } else {
            write!(out, "{}", input)?;
        }
        write!(out, ", input_type={}]", entry.input_value().type_name())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.errors.len();
        let plural = if count == 1 { "" } else { "s" };
        write!(f, "{} validation error{} for {}", count, plural, self.title)?;
        for entry in &self.errors {
            let mut line = String::with_capacity(128);
            Self::pretty_line(entry, &mut line)?;
            write!(f, "\n{}", line)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
