use std::ffi::OsString;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// External tool invoked once per file, suitable for config files and presets.
///
/// The file path is always appended after `fixed_args`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerParams {
    pub program: String,
    #[serde(default)]
    pub fixed_args: Vec<String>,
}

impl Default for RunnerParams {
    fn default() -> Self {
        Self {
            program: "cargo".to_string(),
            fixed_args: vec!["run".to_string(), "--".to_string()],
        }
    }
}

impl RunnerParams {
    pub fn new(program: impl Into<String>, fixed_args: &[&str]) -> Self {
        Self {
            program: program.into(),
            fixed_args: fixed_args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Arguments passed to `program` for `file`: the fixed args, then the path.
    pub fn args_for(&self, file: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = self.fixed_args.iter().map(OsString::from).collect();
        args.push(file.as_os_str().to_os_string());
        args
    }

    /// Human-readable command line as printed before each invocation.
    pub fn display_command(&self, file: &Path) -> String {
        let mut parts = Vec::with_capacity(self.fixed_args.len() + 2);
        parts.push(self.program.clone());
        parts.extend(self.fixed_args.iter().cloned());
        parts.push(file.display().to_string());
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_runs_cargo_with_trailing_separator() {
        let params = RunnerParams::default();
        assert_eq!(
            params.display_command(Path::new("streams/q1.yaml")),
            "cargo run -- streams/q1.yaml"
        );
    }

    #[test]
    fn file_path_is_the_final_argument() {
        let params = RunnerParams::new("tool", &["--check", "-v"]);
        let args = params.args_for(Path::new("/tmp/input.txt"));
        assert_eq!(
            args,
            vec![
                OsString::from("--check"),
                OsString::from("-v"),
                OsString::from("/tmp/input.txt"),
            ]
        );
    }

    #[test]
    fn no_fixed_args() {
        let params = RunnerParams::new("wc", &[]);
        assert_eq!(params.display_command(Path::new("a")), "wc a");
        assert_eq!(params.args_for(Path::new("a")), vec![OsString::from("a")]);
    }
}
