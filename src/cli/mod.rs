//! CLI module for shapeval
//!
//! Provides command-line interface for:
//! - check: Build a schema and report the result
//! - validate: Validate one JSON document and print the coerced output

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{check, run, run_command, validate};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_document, write_error, write_response};
