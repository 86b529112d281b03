//! JSON I/O handling for CLI
//!
//! - Input: one JSON document from a file or all of stdin
//! - Output: one JSON object per command on stdout
//! - UTF-8 only

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use serde_json::Value;

use super::errors::{CliError, CliResult};

/// Read the document to validate, from `path` or stdin
pub fn read_document(path: Option<&Path>) -> CliResult<String> {
    let content = match path {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            CliError::io_error(format!("Failed to read {}: {}", path.display(), e))
        })?,
        None => {
            let mut buf = String::new();
            io::stdin().lock().read_to_string(&mut buf)?;
            buf
        }
    };

    if content.trim().is_empty() {
        return Err(CliError::io_error("Empty input"));
    }

    Ok(content)
}

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    write_json(&serde_json::json!({
        "status": "ok",
        "data": data
    }))
}

/// Write the result of a successful schema build to stdout
pub fn write_check(validator: &str) -> CliResult<()> {
    write_json(&serde_json::json!({
        "status": "ok",
        "validator": validator
    }))
}

/// Write a validation report to stdout
pub fn write_validation_errors(title: &str, errors: Value) -> CliResult<()> {
    write_json(&serde_json::json!({
        "status": "error",
        "title": title,
        "errors": errors
    }))
}

/// Write an error response to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    write_json(&serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    }))
}

fn write_json(response: &Value) -> CliResult<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, response)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_document_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{\"a\": 1}}").unwrap();
        let content = read_document(Some(file.path())).unwrap();
        assert_eq!(content, "{\"a\": 1}");
    }

    #[test]
    fn test_empty_document_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "  \n").unwrap();
        let err = read_document(Some(file.path())).unwrap_err();
        assert_eq!(err.message(), "Empty input");
    }
}
