//! SchemaValidator facade
//!
//! Compiles a schema once and validates any number of inputs against it.

use std::path::Path;

use serde_json::Value as JsonValue;
use tracing::debug;

use crate::config::ValidatorConfig;
use crate::errors::{ErrorEntry, ErrorKind, SchemaResult, ValidationError};
use crate::input::{ClassType, Value};
use crate::schema::{load_schema, load_schema_file, SchemaNode};

use super::{build_validator, Builder, ClassRegistry, CombinedValidator, ValidationState, Validator};

/// A compiled, immutable validator tree plus its configuration.
///
/// `SchemaValidator` is `Send + Sync`; share it freely across threads.
#[derive(Debug)]
pub struct SchemaValidator {
    validator: CombinedValidator,
    config: ValidatorConfig,
    classes: ClassRegistry,
    title: String,
}

impl SchemaValidator {
    /// Builds a validator with the default configuration.
    pub fn build(schema: &SchemaNode) -> SchemaResult<Self> {
        Self::build_with_config(schema, ValidatorConfig::default())
    }

    /// Builds a validator, failing on the first structural defect.
    pub fn build_with_config(schema: &SchemaNode, config: ValidatorConfig) -> SchemaResult<Self> {
        config.validate()?;

        let mut builder = Builder::new(&config);
        let validator = build_validator(schema, &mut builder)?;
        let classes = builder.into_classes();

        let title = config
            .title
            .clone()
            .unwrap_or_else(|| validator.name().to_string());

        debug!(
            validator = validator.name(),
            classes = classes.len(),
            strict = config.strict,
            union_mode = config.union_mode.as_str(),
            "validator built"
        );

        Ok(Self {
            validator,
            config,
            classes,
            title,
        })
    }

    /// Loads a JSON schema description and builds it.
    pub fn from_json(description: &JsonValue) -> SchemaResult<Self> {
        Self::from_json_with_config(description, ValidatorConfig::default())
    }

    pub fn from_json_with_config(
        description: &JsonValue,
        config: ValidatorConfig,
    ) -> SchemaResult<Self> {
        let schema = load_schema(description)?;
        Self::build_with_config(&schema, config)
    }

    /// Loads a schema description file and builds it.
    pub fn from_file(path: &Path, config: ValidatorConfig) -> SchemaResult<Self> {
        let schema = load_schema_file(path)?;
        Self::build_with_config(&schema, config)
    }

    /// Validates `input`, returning the coerced output or every failure.
    pub fn validate(&self, input: &Value) -> Result<Value, ValidationError> {
        self.run(input, self.config.strict)
    }

    /// Validates `input` accepting exact types only.
    pub fn validate_strict(&self, input: &Value) -> Result<Value, ValidationError> {
        self.run(input, true)
    }

    pub fn validate_json_value(&self, input: &JsonValue) -> Result<Value, ValidationError> {
        self.validate(&Value::from(input))
    }

    /// Parses `input` as JSON and validates it. A parse failure is reported
    /// as a single `invalid_json` entry.
    pub fn validate_json(&self, input: &str) -> Result<Value, ValidationError> {
        self.run_json(input, self.config.strict)
    }

    /// Like `validate_json`, accepting exact types only.
    pub fn validate_json_strict(&self, input: &str) -> Result<Value, ValidationError> {
        self.run_json(input, true)
    }

    fn run_json(&self, input: &str, strict: bool) -> Result<Value, ValidationError> {
        match serde_json::from_str::<JsonValue>(input) {
            Ok(json) => self.run(&Value::from(&json), strict),
            Err(e) => Err(ValidationError::new(
                self.title.clone(),
                vec![ErrorEntry::new(
                    ErrorKind::InvalidJson {
                        error: e.to_string(),
                    },
                    Value::from(input),
                )],
            )),
        }
    }

    fn run(&self, input: &Value, strict: bool) -> Result<Value, ValidationError> {
        let mut state = ValidationState::new(strict, self.config.max_depth);
        self.validator.validate(input, &mut state).map_err(|errors| {
            debug!(
                validator = self.validator.name(),
                errors = errors.len(),
                "validation failed"
            );
            ValidationError::new(self.title.clone(), errors)
        })
    }

    /// Name of the root validator
    pub fn name(&self) -> &str {
        self.validator.name()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Returns the model class named `name` in this tree, if any.
    pub fn class(&self, name: &str) -> Option<&ClassType> {
        self.classes.get(name)
    }
}
