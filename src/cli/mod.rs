//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod logging;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// folio - export portfolio data as a self-contained HTML page
#[derive(Parser, Debug)]
#[command(name = "folio", version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render portfolio data into an HTML document
    Export(ExportArgs),

    /// List the available templates
    Templates(TemplatesArgs),

    /// Print the demo portfolio data as JSON
    Sample(SampleArgs),

    /// Check portfolio data for problems the export would hide
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `export` command
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Portfolio data file (JSON). Required unless --sample is used.
    #[arg(required_unless_present = "sample")]
    pub input: Option<PathBuf>,

    /// Export the built-in demo data instead of a file
    #[arg(long, conflicts_with = "input")]
    pub sample: bool,

    /// Template to render with, overriding the one in the data
    #[arg(short, long)]
    pub template: Option<String>,

    /// Output file or directory (default: config output_dir, then current directory)
    #[arg(short, long, conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Print the document instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Output format for the export summary
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `templates` command
#[derive(Parser, Debug)]
pub struct TemplatesArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `sample` command
#[derive(Parser, Debug)]
pub struct SampleArgs {
    /// Write the JSON to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `check` command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Portfolio data file (JSON)
    pub input: PathBuf,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn export_requires_input_or_sample() {
        assert!(Cli::try_parse_from(["folio", "export"]).is_err());
        assert!(Cli::try_parse_from(["folio", "export", "--sample"]).is_ok());
        assert!(Cli::try_parse_from(["folio", "export", "data.json"]).is_ok());
    }

    #[test]
    fn export_rejects_input_with_sample() {
        assert!(Cli::try_parse_from(["folio", "export", "data.json", "--sample"]).is_err());
    }

    #[test]
    fn export_rejects_output_with_stdout() {
        let result = Cli::try_parse_from(["folio", "export", "--sample", "-o", "x.html", "--stdout"]);
        assert!(result.is_err());
    }

    #[test]
    fn verbose_is_counted_and_global() {
        let cli = Cli::try_parse_from(["folio", "templates", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn export_parses_template_and_output() {
        let cli = Cli::try_parse_from([
            "folio", "export", "data.json", "-t", "mono-grid", "-o", "out/",
        ])
        .unwrap();
        match cli.command {
            Command::Export(args) => {
                assert_eq!(args.template.as_deref(), Some("mono-grid"));
                assert_eq!(args.output, Some(PathBuf::from("out/")));
                assert!(!args.stdout);
            }
            other => panic!("expected export, got {other:?}"),
        }
    }
}
