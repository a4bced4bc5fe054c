//! folio - export portfolio data as a self-contained HTML page

pub mod cli;
pub mod domain;
pub mod export;
pub mod infra;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_check, handle_completions, handle_export, handle_sample, handle_templates},
    logging::init_logger,
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match &cli.command {
        Command::Export(args) => handle_export(args, &Config::load()?),
        Command::Templates(args) => handle_templates(args),
        Command::Sample(args) => handle_sample(args),
        Command::Check(args) => handle_check(args),
        Command::Completions(args) => handle_completions(args),
    }
}
