//! CLI command implementations
//!
//! Both commands build the schema once, then either report on the build
//! (`check`) or validate a single document (`validate`).

use std::path::Path;

use tracing::{debug, info};

use crate::config::ValidatorConfig;
use crate::validators::SchemaValidator;

use super::args::{Cli, Command};
use super::errors::{CliError, CliErrorCode, CliResult};
use super::io::{
    read_document, write_check, write_error, write_response, write_validation_errors,
};

/// Main entry point for CLI
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
///
/// Failures other than a rejected document are also reported on stdout
/// as `{"status":"error","code":..,"message":..}`.
pub fn run_command(cmd: Command) -> CliResult<()> {
    let result = match cmd {
        Command::Check { schema, config } => check(&schema, config.as_deref()),
        Command::Validate {
            schema,
            config,
            input,
            strict,
        } => validate(&schema, config.as_deref(), input.as_deref(), strict),
    };

    if let Err(e) = &result {
        if e.code() != &CliErrorCode::ValidationFailed {
            write_error(e.code_str(), e.message())?;
        }
    }

    result
}

/// Build the schema and report the root validator name
pub fn check(schema_path: &Path, config_path: Option<&Path>) -> CliResult<()> {
    let validator = build(schema_path, config_path)?;

    info!(validator = validator.name(), "schema ok");
    write_check(validator.name())
}

/// Validate one document against the schema
///
/// A rejected document prints the full report and fails with
/// `CLI_VALIDATION_FAILED`.
pub fn validate(
    schema_path: &Path,
    config_path: Option<&Path>,
    input_path: Option<&Path>,
    strict: bool,
) -> CliResult<()> {
    let validator = build(schema_path, config_path)?;
    let document = read_document(input_path)?;

    let outcome = if strict {
        validator.validate_json_strict(&document)
    } else {
        validator.validate_json(&document)
    };

    match outcome {
        Ok(output) => write_response(output.to_json()),
        Err(err) => {
            debug!(errors = err.error_count(), "document rejected");
            write_validation_errors(err.title(), err.to_json())?;
            Err(CliError::validation_failed(err.error_count()))
        }
    }
}

fn build(schema_path: &Path, config_path: Option<&Path>) -> CliResult<SchemaValidator> {
    let config = match config_path {
        Some(path) => ValidatorConfig::load(path)?,
        None => ValidatorConfig::default(),
    };

    debug!(schema = %schema_path.display(), "building validator");
    Ok(SchemaValidator::from_file(schema_path, config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_json(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_check_valid_schema() {
        let schema = temp_json(r#"{"type": "list", "items": {"type": "int"}}"#);
        assert!(check(schema.path(), None).is_ok());
    }

    #[test]
    fn test_check_rejects_empty_union() {
        let schema = temp_json(r#"{"type": "union", "choices": []}"#);
        let err = check(schema.path(), None).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::SchemaError);
    }

    #[test]
    fn test_check_bad_config() {
        let schema = temp_json(r#"{"type": "int"}"#);
        let config = temp_json(r#"{"max_depth": 0}"#);
        let err = check(schema.path(), Some(config.path())).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }

    #[test]
    fn test_validate_document() {
        let schema = temp_json(r#"{"type": "list", "items": {"type": "int"}}"#);
        let doc = temp_json(r#"[1, "2"]"#);
        assert!(validate(schema.path(), None, Some(doc.path()), false).is_ok());
    }

    #[test]
    fn test_validate_rejected_document() {
        let schema = temp_json(r#"{"type": "list", "items": {"type": "int"}}"#);
        let doc = temp_json(r#"[1, "x", "y"]"#);
        let err = validate(schema.path(), None, Some(doc.path()), false).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ValidationFailed);
        assert_eq!(err.message(), "2 validation errors");
    }

    #[test]
    fn test_validate_strict_flag() {
        let schema = temp_json(r#"{"type": "int"}"#);
        let doc = temp_json(r#""5""#);
        assert!(validate(schema.path(), None, Some(doc.path()), false).is_ok());
        let err = validate(schema.path(), None, Some(doc.path()), true).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ValidationFailed);
    }

    #[test]
    fn test_unparsable_document_is_a_report_in_both_modes() {
        let schema = temp_json(r#"{"type": "int"}"#);
        let doc = temp_json("[1,");
        for strict in [false, true] {
            let err = validate(schema.path(), None, Some(doc.path()), strict).unwrap_err();
            assert_eq!(err.code(), &CliErrorCode::ValidationFailed, "strict={}", strict);
            assert_eq!(err.message(), "1 validation error");
        }
    }
}
