//! Check command handler.

use anyhow::{Context, Result, bail};

use crate::cli::CheckArgs;
use crate::cli::output::{CheckReport, Output, OutputFormat};
use crate::domain::validate_portfolio;
use crate::infra::read_portfolio;

pub fn handle_check(args: &CheckArgs) -> Result<()> {
    let data = read_portfolio(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    let summary = validate_portfolio(&data);

    match args.format {
        OutputFormat::Json => Output::new(CheckReport::from(&summary)).print()?,
        OutputFormat::Human if summary.is_empty() => println!("No issues found."),
        OutputFormat::Human => {
            for issue in summary.issues_by_severity() {
                println!("{}: {}", issue.severity(), issue);
            }
            println!(
                "\nFound {} issue(s): {} error(s), {} warning(s)",
                summary.total(),
                summary.error_count(),
                summary.warning_count()
            );
        }
    }

    // Exit code: fail only if there are errors
    if summary.has_errors() {
        bail!("check failed");
    }
    Ok(())
}
