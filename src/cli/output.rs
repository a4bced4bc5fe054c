//! Output format types for CLI commands.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use crate::domain::{TemplateId, ValidationIssue, ValidationSummary};
use crate::export::TemplateMeta;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }

    /// Prints the wrapped data as pretty JSON on stdout.
    pub fn print(&self) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(self)?);
        Ok(())
    }
}

/// A template in listing output.
#[derive(Debug, Serialize)]
pub struct TemplateListing {
    pub id: TemplateId,
    pub name: &'static str,
    pub description: &'static str,
}

impl From<&TemplateMeta> for TemplateListing {
    fn from(meta: &TemplateMeta) -> Self {
        Self {
            id: meta.id,
            name: meta.name,
            description: meta.description,
        }
    }
}

/// Result of an export written to disk.
#[derive(Debug, Serialize)]
pub struct ExportResult {
    pub path: String,
    pub template: TemplateId,
    pub bytes: usize,
}

/// A single validation issue in check output.
#[derive(Debug, Serialize)]
pub struct IssueListing {
    pub severity: String,
    pub location: String,
    pub message: String,
}

impl From<&ValidationIssue> for IssueListing {
    fn from(issue: &ValidationIssue) -> Self {
        Self {
            severity: issue.severity().to_string(),
            location: issue.location.clone(),
            message: issue.kind.to_string(),
        }
    }
}

/// Check results with counts.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub errors: usize,
    pub warnings: usize,
    pub issues: Vec<IssueListing>,
}

impl From<&ValidationSummary> for CheckReport {
    fn from(summary: &ValidationSummary) -> Self {
        Self {
            errors: summary.error_count(),
            warnings: summary.warning_count(),
            issues: summary.issues_by_severity().map(IssueListing::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn output_wraps_data() {
        let json = serde_json::to_value(Output::new(vec![1, 2])).unwrap();
        assert_eq!(json, serde_json::json!({ "data": [1, 2] }));
    }

    #[test]
    fn template_listing_serializes_kebab_id() {
        let meta = TemplateId::TechAura.meta();
        let json = serde_json::to_value(TemplateListing::from(meta)).unwrap();
        assert_eq!(json["id"], "tech-aura");
        assert_eq!(json["name"], meta.name);
    }

    #[test]
    fn check_report_counts_and_orders_issues() {
        let mut summary = ValidationSummary::new();
        summary.add(ValidationIssue::external_image("projects[0].image"));
        summary.add(ValidationIssue::missing_name());
        summary.add(ValidationIssue::new(
            "template",
            ValidationKind::UnknownTemplate { id: "retro".into() },
        ));

        let report = CheckReport::from(&summary);
        assert_eq!(report.errors, 1);
        assert_eq!(report.warnings, 2);
        assert_eq!(report.issues[0].severity, "error");
        assert_eq!(report.issues[0].location, "personalInfo.name");
    }
}
