use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Argument {position} is not valid UTF-8: {lossy}")]
    NonUnicodeArgument { position: usize, lossy: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Library(#[from] benchrun::Error),
}
