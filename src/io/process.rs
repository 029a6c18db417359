use std::path::Path;
use std::process::{Command, ExitStatus};

use tracing::debug;

use crate::core::params::RunnerParams;
use crate::error::InvocationFailure;

/// Run the tool for `file` with inherited standard streams and wait for it to exit.
pub fn invoke(params: &RunnerParams, file: &Path) -> Result<(), InvocationFailure> {
    let status = Command::new(&params.program)
        .args(params.args_for(file))
        .status()
        .map_err(|source| InvocationFailure::Spawn {
            program: params.program.clone(),
            source,
        })?;

    debug!("{:?} finished with {}", file, status);
    check_status(status)
}

fn check_status(status: ExitStatus) -> Result<(), InvocationFailure> {
    if status.success() {
        return Ok(());
    }
    match status.code() {
        Some(code) => Err(InvocationFailure::ExitStatus { code }),
        None => Err(InvocationFailure::Signal {
            signal: signal_of(&status),
        }),
    }
}

#[cfg(unix)]
fn signal_of(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn signal_of(_status: &ExitStatus) -> Option<i32> {
    None
}
