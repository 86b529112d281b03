//! shapeval CLI entry point
//!
//! Parses arguments and dispatches through `cli::run`. Errors go to
//! stderr and the process exits non-zero. Log level comes from `RUST_LOG`.

use shapeval::cli;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
