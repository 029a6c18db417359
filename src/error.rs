//! Crate-level error types and `Result` alias.
//!
//! `Error` covers the fatal, pre-flight failures that end the whole run
//! (argument usage errors live in the CLI's `AppError`).
//! `InvocationFailure` covers a single external invocation and is recovered
//! by the batch loop.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The directory '{}' does not exist.", .path.display())]
    Configuration { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit status for a fatal error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Configuration { .. } | Error::Io(_) => 1,
        }
    }
}

/// Why one external invocation did not succeed.
#[derive(Debug, Error)]
pub enum InvocationFailure {
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("command returned non-zero exit status {code}")]
    ExitStatus { code: i32 },

    #[error("command terminated by signal {}", .signal.map_or_else(|| "unknown".to_string(), |s| s.to_string()))]
    Signal { signal: Option<i32> },
}
