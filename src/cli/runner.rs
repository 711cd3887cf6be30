use std::io::Write;
use std::process::ExitCode;

use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use benchrun::core::schema::PROGRAM_NAME;
use benchrun::{ParseOutcome, parse};

use super::errors::AppError;

/// Environment variable holding the log filter (`EnvFilter` syntax).
pub const LOG_ENV: &str = "BENCHRUN_LOG";

/// How an invocation ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Success,
    Help,
    InvalidArguments,
}

impl Status {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Status::Success | Status::Help => ExitCode::SUCCESS,
            Status::InvalidArguments => ExitCode::from(2),
        }
    }
}

pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run(tokens: Vec<String>) -> Result<Status, AppError> {
    debug!("Binding {} argument token(s)", tokens.len());
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    report(parse(tokens), &mut stdout.lock(), &mut stderr.lock())
}

/// Writes the outcome: configuration JSON or help to `out`, diagnostics to `err`.
pub fn report<O: Write, E: Write>(
    outcome: ParseOutcome,
    out: &mut O,
    err: &mut E,
) -> Result<Status, AppError> {
    match outcome {
        ParseOutcome::Parsed(options) => {
            info!(
                "Resolved job '{}' with {} filter(s), outliers {}",
                options.base_job,
                options.filters.len(),
                options.outliers
            );
            writeln!(out, "{}", options.to_json()?)?;
            Ok(Status::Success)
        }
        ParseOutcome::HelpRequested(text) => {
            write!(out, "{text}")?;
            Ok(Status::Help)
        }
        ParseOutcome::Failed(errors) => {
            warn!("Rejected arguments: {} problem(s)", errors.len());
            for error in &errors {
                writeln!(err, "error: {error}")?;
            }
            writeln!(err, "\nRun '{PROGRAM_NAME} --help' for usage.")?;
            Ok(Status::InvalidArguments)
        }
    }
}
