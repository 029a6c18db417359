//! filerun CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run the batch,
//! and exit with the appropriate status. For programmatic use, prefer the
//! library API (`filerun::run`).

use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    let outcome = cli::parse_args().and_then(cli::run);
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
