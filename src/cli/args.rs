use clap::Parser;
use std::path::{Path, PathBuf};

use filerun::RunnerParams;

#[derive(Parser, Debug)]
#[command(
    name = "filerun",
    version,
    about = about_text(),
    override_usage = "filerun <directory>"
)]
pub struct CliArgs {
    /// Directory whose regular files are processed (not recursive)
    pub directory: PathBuf,
}

fn about_text() -> String {
    format!(
        "Run `{}` for every regular file in a directory",
        RunnerParams::default().display_command(Path::new("<file>"))
    )
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn single_positional_directory() {
        let args = CliArgs::try_parse_from(["filerun", "inputs"]).unwrap();
        assert_eq!(args.directory, PathBuf::from("inputs"));
    }

    #[test]
    fn rejects_missing_and_extra_arguments() {
        assert!(CliArgs::try_parse_from(["filerun"]).is_err());
        assert!(CliArgs::try_parse_from(["filerun", "a", "b"]).is_err());
        assert!(CliArgs::try_parse_from(["filerun", "--bogus", "a"]).is_err());
    }

    #[test]
    fn help_names_the_default_command() {
        let help = CliArgs::command().render_help().to_string();
        let default_command = RunnerParams::default().display_command(Path::new("<file>"));
        assert!(help.contains(&default_command), "{help}");
    }
}
