use clap::error::ErrorKind;
use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    /// Wrong argument count or unknown flag; `detail` carries clap's message,
    /// which ends with the `Usage: filerun <directory>` line.
    #[error("{detail}")]
    Usage { detail: String },

    /// Help or version output requested; not a failure.
    #[error("{0}")]
    Help(clap::Error),

    #[error(transparent)]
    Run(#[from] filerun::Error),
}

impl AppError {
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Usage { .. } => 1,
            AppError::Help(_) => 0,
            AppError::Run(e) => e.exit_code(),
        }
    }
}

impl From<clap::Error> for AppError {
    fn from(e: clap::Error) -> Self {
        match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => AppError::Help(e),
            _ => AppError::Usage {
                detail: e.to_string().trim_end().to_string(),
            },
        }
    }
}
