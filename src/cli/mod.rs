//! Command Line Interface (CLI) layer for filerun.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`). The CLI always runs the default
//! tool; embedders wanting another tool should call `filerun::run` with
//! their own `RunnerParams`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::{parse_args, run};
