//! Host-facing I/O: enumerating the target directory, spawning the
//! external tool for one file and writing the console transcript.
pub mod directory;
pub use directory::regular_files;

pub mod process;
pub use process::invoke;

pub mod transcript;
pub use transcript::{write_command, write_failure};
