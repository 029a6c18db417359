//! High-level library API: run the external tool over every regular file in a
//! directory. Prefer these entrypoints over the lower-level `io` helpers.
use std::io::Write;
use std::path::Path;

use tracing::{info, warn};

use crate::core::params::RunnerParams;
use crate::error::{Error, Result};
use crate::io::{invoke, regular_files, write_command, write_failure};

/// Invoke the tool described by `params` once for each regular file directly
/// inside `directory`, one at a time.
///
/// Fails before any invocation if `directory` is not a directory. A failing
/// invocation is reported on stdout and the batch moves on to the next file.
pub fn run(directory: &Path, params: &RunnerParams) -> Result<()> {
    run_with_output(directory, params, &mut std::io::stdout())
}

/// [`run`], writing the transcript to `out` instead of stdout. The tool's own
/// output still goes to the inherited standard streams.
pub fn run_with_output<W: Write>(
    directory: &Path,
    params: &RunnerParams,
    out: &mut W,
) -> Result<()> {
    if !directory.is_dir() {
        return Err(Error::Configuration {
            path: directory.to_path_buf(),
        });
    }

    info!("Starting batch run over directory: {:?}", directory);

    for file in regular_files(directory)? {
        write_command(out, params, &file)?;
        if let Err(e) = invoke(params, &file) {
            write_failure(out, &file, &e)?;
            warn!("Error processing {:?}: {}", file, e);
        }
    }

    info!("Batch run complete");
    Ok(())
}

/// [`run`] with the default tool, `cargo run -- <file>`.
pub fn run_default(directory: &Path) -> Result<()> {
    run(directory, &RunnerParams::default())
}
