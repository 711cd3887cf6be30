//! benchrun CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: collect the arguments,
//! bind them, report the outcome, and exit with the matching status.
//! For programmatic use, prefer the library API (`benchrun::api`).

use std::process::ExitCode;

mod cli;

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    cli::init_logging();
    let tokens = cli::collect_tokens(std::env::args_os().skip(1))?;
    let status = cli::run(tokens)?;
    Ok(status.exit_code())
}
