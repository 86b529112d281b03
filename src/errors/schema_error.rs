//! Build-time schema errors
//!
//! A schema error is structural and fatal to the build: the first defect
//! found is reported, never a list.

use thiserror::Error;

use crate::config::ConfigError;

use super::validation_error::ValidationError;

/// Result type for schema loading and validator building
pub type SchemaResult<T> = Result<T, SchemaError>;

#[derive(Debug, Clone, Error)]
pub enum SchemaError {
    /// A schema node is not a JSON object
    #[error("Error building validator: schema must be an object, got {found}")]
    NotAnObject { found: &'static str },

    #[error("Error building validator: \"type\" is required")]
    MissingType,

    #[error("Error building validator: unknown schema type \"{0}\"")]
    UnknownType(String),

    #[error("Error building \"{kind}\" validator: \"{key}\" is required")]
    MissingKey {
        kind: &'static str,
        key: &'static str,
    },

    #[error("Error building \"{kind}\" validator: \"{key}\" must be {expected}")]
    InvalidKey {
        kind: &'static str,
        key: &'static str,
        expected: &'static str,
    },

    /// A union that can never succeed
    #[error("Error building \"union\" validator: \"choices\" must contain at least one schema")]
    EmptyChoices,

    /// Two choices would share one location tag
    #[error("Error building \"union\" validator: choices[{first}] and choices[{second}] are both named \"{name}\"")]
    DuplicateChoice {
        name: String,
        first: usize,
        second: usize,
    },

    #[error("Error building \"model\" validator: default for field \"{field}\" is invalid:\n{error}")]
    InvalidDefault {
        field: String,
        error: ValidationError,
    },

    /// A defect inside a child schema, tagged with where it sits
    #[error("Error building \"{kind}\" validator ({context}):\n  {source}")]
    Nested {
        kind: &'static str,
        context: String,
        source: Box<SchemaError>,
    },

    #[error("Error reading schema file '{path}': {reason}")]
    File { path: String, reason: String },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl SchemaError {
    /// Wraps this error with the enclosing validator kind and position.
    pub fn within(self, kind: &'static str, context: impl Into<String>) -> Self {
        SchemaError::Nested {
            kind,
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Returns the rendered message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Returns the innermost error, skipping nesting context.
    pub fn root_cause(&self) -> &SchemaError {
        match self {
            SchemaError::Nested { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_message() {
        let err = SchemaError::MissingKey {
            kind: "union",
            key: "choices",
        };
        assert_eq!(
            err.message(),
            "Error building \"union\" validator: \"choices\" is required"
        );
    }

    #[test]
    fn test_nested_context_and_root_cause() {
        let err = SchemaError::EmptyChoices
            .within("list", "items")
            .within("model", "field \"tags\"");
        assert!(matches!(err.root_cause(), SchemaError::EmptyChoices));
        let message = err.message();
        assert!(message.starts_with("Error building \"model\" validator (field \"tags\"):"));
        assert!(message.contains("Error building \"list\" validator (items):"));
        assert!(message.contains("\"choices\" must contain at least one schema"));
    }
}
