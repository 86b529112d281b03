//! CLI argument definitions using clap
//!
//! Commands:
//! - shapeval check --schema <path> [--config <path>]
//! - shapeval validate --schema <path> [--config <path>] [--input <path>] [--strict]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// shapeval - validate and coerce JSON documents against a schema
#[derive(Parser, Debug)]
#[command(name = "shapeval")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a schema and report whether it is well formed
    Check {
        /// Path to the schema description (JSON)
        #[arg(long)]
        schema: PathBuf,

        /// Path to a validator configuration file (JSON)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate one JSON document and print the coerced output
    Validate {
        /// Path to the schema description (JSON)
        #[arg(long)]
        schema: PathBuf,

        /// Path to a validator configuration file (JSON)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Document to validate; stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,

        /// Accept exact types only
        #[arg(long)]
        strict: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
