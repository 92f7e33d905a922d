use thiserror::Error;

/// Failures of the binary outside the widget itself.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("could not determine a log directory")]
    NoLogDir,
}
