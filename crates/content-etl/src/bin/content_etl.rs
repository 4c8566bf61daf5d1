//! Fixture formatter for scraped hotel and restaurant listings.
//!
//! This binary delegates to `content_etl::cli`; progress is logged to
//! stderr and controlled with `RUST_LOG`.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use content_etl::cli::{CliArgs, run, success_message};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args = CliArgs::parse();
    match run(&args) {
        Ok(report) => {
            if let Err(err) = writeln!(io::stdout().lock(), "{}", success_message(&report)) {
                drop(err);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}
