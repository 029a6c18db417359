use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing::info;
use tracing_subscriber::EnvFilter;

use filerun::RunnerParams;

use super::args::CliArgs;
use super::errors::AppError;

const INFO_FLAGS: [&str; 4] = ["-h", "--help", "-V", "--version"];

/// Parse the process arguments. Help and version requests are printed by clap
/// and end the process with status 0.
pub fn parse_args() -> Result<CliArgs, AppError> {
    match parse_args_from(std::env::args_os()) {
        Err(AppError::Help(e)) => e.exit(),
        other => other,
    }
}

/// Exactly one argument is accepted and it is always taken as the directory,
/// whatever it looks like, unless it is a help or version flag.
pub fn parse_args_from<I>(argv: I) -> Result<CliArgs, AppError>
where
    I: IntoIterator<Item = OsString>,
{
    let mut argv: Vec<OsString> = argv.into_iter().collect();
    if argv.len() != 2 {
        let given = argv.len().saturating_sub(1);
        return Err(CliArgs::command()
            .error(
                ErrorKind::WrongNumberOfValues,
                format!("expected exactly one argument, got {given}"),
            )
            .into());
    }

    let bin = argv.remove(0);
    let arg = argv.remove(0);
    let parsed = if INFO_FLAGS.iter().any(|flag| arg == *flag) {
        CliArgs::try_parse_from([bin, arg])
    } else {
        CliArgs::try_parse_from([bin, OsString::from("--"), arg])
    };
    parsed.map_err(AppError::from)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    init_logging();

    let params = RunnerParams::default();
    info!("Target directory: {:?}", args.directory);
    filerun::run(&args.directory, &params)?;
    Ok(())
}
