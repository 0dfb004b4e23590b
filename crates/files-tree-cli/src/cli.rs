//! Command line arguments

use clap::{Parser, ValueEnum};
use derive_more::Display;
use std::path::PathBuf;

/// How the tree is printed
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default, Display)]
pub enum OutputFormat {
    /// Compact nested arrays on one line
    #[default]
    #[display(fmt = "json")]
    Json,
    /// Indented nested arrays
    #[display(fmt = "pretty")]
    Pretty,
    /// Indented listing, directories end with `/`
    #[display(fmt = "text")]
    Text,
}

#[derive(Parser, Debug)]
#[command(name = "files-tree")]
#[command(version)]
#[command(about = "Convert a JSON object of file paths into a nested, sorted tree")]
#[command(long_about = "
Reads a JSON object whose keys are slash-delimited file paths (values are
ignored) and prints the paths as a nested tree, sorted at every level.

Example usage:
  files-tree files.json                    # Nested arrays on one line
  cat files.json | files-tree --format text
  files-tree - --format pretty -vv         # Read stdin, log at debug level
")]
pub struct Cli {
    /// JSON file to read, `-` or nothing for stdin
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The input file, `None` when reading stdin
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input
            .as_ref()
            .filter(|path| path.as_os_str() != "-")
    }

    /// Default log filter for the requested verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["files-tree"]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.input_path(), None);
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn test_dash_means_stdin() {
        let cli = Cli::parse_from(["files-tree", "-"]);
        assert_eq!(cli.input_path(), None);

        let cli = Cli::parse_from(["files-tree", "files.json"]);
        assert_eq!(cli.input_path(), Some(&PathBuf::from("files.json")));
    }

    #[test]
    fn test_format_and_verbosity() {
        let cli = Cli::parse_from(["files-tree", "--format", "text", "-vv"]);
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.format.to_string(), "text");
        assert_eq!(cli.log_level(), "debug");

        let cli = Cli::parse_from(["files-tree", "-f", "pretty", "-vvvv"]);
        assert_eq!(cli.format, OutputFormat::Pretty);
        assert_eq!(cli.log_level(), "trace");
    }
}
