//! Handler for the `export` command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::cli::config::Config;
use crate::cli::output::{ExportResult, Output, OutputFormat};
use crate::cli::ExportArgs;
use crate::domain::{PortfolioData, TemplateId, validate_portfolio};
use crate::export::DocumentGenerator;
use crate::infra::{export_filename, read_portfolio, write_document};

/// Handle the `export` command.
pub fn handle_export(args: &ExportArgs, config: &Config) -> Result<()> {
    let mut data = load_data(args)?;

    if let Some(id) = config.template(args.template.as_deref()) {
        let template: TemplateId = id.parse()?;
        data = data.with_template(template);
    }

    for issue in validate_portfolio(&data).issues_by_severity() {
        tracing::warn!(severity = %issue.severity(), "{issue}");
    }

    let html = DocumentGenerator::new()?.generate(&data)?;

    if args.stdout {
        print!("{html}");
        return Ok(());
    }

    let path = resolve_output_path(
        args.output.as_deref(),
        &config.output_dir(),
        &data.personal_info.name,
    )?;
    write_document(&path, &html)?;

    let result = ExportResult {
        path: path.display().to_string(),
        template: data.template_id(),
        bytes: html.len(),
    };
    match args.format {
        OutputFormat::Human => {
            println!("Exported {} with {} to {}", data.personal_info.name, result.template, result.path);
        }
        OutputFormat::Json => Output::new(result).print()?,
    }

    Ok(())
}

fn load_data(args: &ExportArgs) -> Result<PortfolioData> {
    if args.sample {
        return Ok(PortfolioData::sample());
    }
    let input = args.input.as_deref().context("no input file given")?;
    read_portfolio(input).with_context(|| format!("failed to load {}", input.display()))
}

/// Picks the file an export is written to.
///
/// An `--output` that is an existing directory, or ends with `/`, gets the
/// exported file name joined to it (the directory is created if needed).
/// Any other `--output` is used as the file path. Without `--output` the
/// file lands in `default_dir`.
pub fn resolve_output_path(output: Option<&Path>, default_dir: &Path, name: &str) -> Result<PathBuf> {
    let dir = match output {
        Some(path) if path.is_dir() || path.to_string_lossy().ends_with('/') => path,
        Some(path) => return Ok(path.to_path_buf()),
        None => default_dir,
    };

    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory: {}", dir.display()))?;
    Ok(dir.join(export_filename(name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn existing_directory_gets_export_filename() {
        let dir = TempDir::new().unwrap();
        let path = resolve_output_path(Some(dir.path()), Path::new("."), "Jane Q. Doe").unwrap();
        assert_eq!(path, dir.path().join("jane-q.-doe-portfolio.html"));
    }

    #[test]
    fn trailing_slash_creates_directory() {
        let dir = TempDir::new().unwrap();
        let output = format!("{}/site/", dir.path().display());

        let path = resolve_output_path(Some(Path::new(&output)), Path::new("."), "Jane Doe").unwrap();

        assert!(dir.path().join("site").is_dir());
        assert!(path.ends_with("site/jane-doe-portfolio.html"));
    }

    #[test]
    fn file_path_is_used_as_is() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("index.html");
        let path = resolve_output_path(Some(&output), Path::new("."), "Jane Doe").unwrap();
        assert_eq!(path, output);
    }

    #[test]
    fn missing_output_uses_default_dir() {
        let dir = TempDir::new().unwrap();
        let path = resolve_output_path(None, dir.path(), "").unwrap();
        assert_eq!(path, dir.path().join("portfolio.html"));
    }
}
