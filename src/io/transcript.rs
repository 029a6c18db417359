//! Console transcript: the command line before each invocation and a notice
//! after each failed one.
use std::io::{self, Write};
use std::path::Path;

use crate::core::params::RunnerParams;
use crate::error::InvocationFailure;

/// Write `Running command: ...` for `file` and flush it, so the line lands
/// ahead of anything the tool itself prints.
pub fn write_command<W: Write>(
    out: &mut W,
    params: &RunnerParams,
    file: &Path,
) -> io::Result<()> {
    tolerate_closed_pipe(
        writeln!(out, "Running command: {}", params.display_command(file))
            .and_then(|_| out.flush()),
    )
}

/// Write the failure notice for `file` followed by the failure detail.
pub fn write_failure<W: Write>(
    out: &mut W,
    file: &Path,
    failure: &InvocationFailure,
) -> io::Result<()> {
    tolerate_closed_pipe(
        writeln!(out, "An error occurred while processing {}:", file.display())
            .and_then(|_| writeln!(out, "{}", failure))
            .and_then(|_| out.flush()),
    )
}

// A reader that went away (`filerun dir | head -1`) must not stop the batch.
fn tolerate_closed_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("no space left"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn command_line_lists_program_args_and_file() {
        let mut out = Vec::new();
        let params = RunnerParams::new("tool", &["--check"]);
        write_command(&mut out, &params, Path::new("dir/a.txt")).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Running command: tool --check dir/a.txt\n"
        );
    }

    #[test]
    fn failure_notice_names_file_then_detail() {
        let mut out = Vec::new();
        let failure = InvocationFailure::ExitStatus { code: 101 };
        write_failure(&mut out, Path::new("dir/b.txt"), &failure).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "An error occurred while processing dir/b.txt:\n\
             command returned non-zero exit status 101\n"
        );
    }

    #[test]
    fn broken_pipe_is_ignored() {
        let failure = InvocationFailure::ExitStatus { code: 1 };
        assert!(write_command(&mut ClosedPipe, &RunnerParams::default(), Path::new("a")).is_ok());
        assert!(write_failure(&mut ClosedPipe, Path::new("a"), &failure).is_ok());
    }

    #[test]
    fn other_write_errors_surface() {
        let err =
            write_command(&mut FullDisk, &RunnerParams::default(), Path::new("a")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
    }
}
