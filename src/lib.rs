#![doc = r#"
filerun — run an external tool once for every file in a directory.

The crate walks the direct entries of a target directory and, for each regular
file, synchronously runs `<program> <fixed-args...> <file>` with the tool's
output streamed straight to the console. A failing invocation is reported and
the batch continues with the next file. It powers the `filerun` CLI and can be
embedded in your own Rust applications.

Quick start
-----------
```rust,no_run
use std::path::Path;
use filerun::{run, RunnerParams};

fn main() -> filerun::Result<()> {
    // `cargo run -- <file>` for each file in ./inputs
    run(Path::new("inputs"), &RunnerParams::default())?;

    // any other tool
    let params = RunnerParams::new("wc", &["-l"]);
    run(Path::new("inputs"), &params)
}
```

Error handling
--------------
Pre-flight failures (`Error::Configuration`, `Error::Io`) are returned before
any invocation happens. Per-file failures (`InvocationFailure`) never escape
[`run`]; they are printed and the batch moves on.

```rust,no_run
use std::path::Path;
use filerun::{run_default, Error};

fn main() {
    match run_default(Path::new("/bad/path")) {
        Ok(()) => {}
        Err(Error::Configuration { path }) => eprintln!("not a directory: {}", path.display()),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — batch entry points.
- [`core`] — `RunnerParams` and command composition.
- [`io`] — directory enumeration, process invocation and the console transcript.
- [`error`] — crate-level `Error`, `InvocationFailure` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;

pub use core::params::RunnerParams;
pub use error::{Error, InvocationFailure, Result};

pub use api::{run, run_default, run_with_output};
pub use io::{invoke, regular_files, write_command, write_failure};
