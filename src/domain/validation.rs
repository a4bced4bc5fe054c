//! Validation issue types for the check command.
//!
//! These types describe problems in portfolio data that the input forms would
//! normally have caught: blank required fields, duplicate skills, images that
//! are not embedded, and identifiers the generator will not recognize.

use std::fmt;

/// A validation issue found in portfolio data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Where in the data the issue was found, e.g. `skills[2]`.
    pub location: String,
    /// The kind of validation issue.
    pub kind: ValidationKind,
}

impl ValidationIssue {
    /// Creates a new validation issue.
    pub fn new(location: impl Into<String>, kind: ValidationKind) -> Self {
        Self {
            location: location.into(),
            kind,
        }
    }

    /// Creates a missing-name issue.
    pub fn missing_name() -> Self {
        Self::new("personalInfo.name", ValidationKind::MissingName)
    }

    /// Creates a duplicate skill issue.
    pub fn duplicate_skill(index: usize, name: impl Into<String>, first_index: usize) -> Self {
        Self::new(
            format!("skills[{index}]"),
            ValidationKind::DuplicateSkill {
                name: name.into(),
                first_index,
            },
        )
    }

    /// Creates a missing project field issue.
    pub fn missing_project_field(index: usize, field: &'static str) -> Self {
        Self::new(
            format!("projects[{index}].{field}"),
            ValidationKind::MissingField { field },
        )
    }

    /// Creates an external image issue.
    pub fn external_image(location: impl Into<String>) -> Self {
        Self::new(location, ValidationKind::ExternalImage)
    }

    /// Returns the severity of this issue.
    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }

    /// Returns true if this issue blocks a clean export.
    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.kind)
    }
}

/// The kind of validation issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationKind {
    /// The person's name is blank; the title and filename will be generic.
    MissingName,

    /// A skill name is blank.
    BlankSkillName,

    /// Another skill already has this name.
    DuplicateSkill {
        name: String,
        /// Index of the first skill with this name.
        first_index: usize,
    },

    /// Skill level above 100; rendered as 100.
    SkillLevelOutOfRange { level: u32 },

    /// A required text field is blank.
    MissingField { field: &'static str },

    /// An image is a URL rather than an embedded data URI.
    ExternalImage,

    /// The template identifier is unknown; the default template will be used.
    UnknownTemplate { id: String },

    /// The social platform key is unknown; a generic link icon will be used.
    UnknownSocialPlatform { key: String },
}

impl ValidationKind {
    /// Returns the severity of this kind of issue.
    pub fn severity(&self) -> Severity {
        match self {
            ValidationKind::MissingName => Severity::Error,
            ValidationKind::BlankSkillName => Severity::Error,
            ValidationKind::DuplicateSkill { .. } => Severity::Error,
            ValidationKind::MissingField { .. } => Severity::Error,
            ValidationKind::SkillLevelOutOfRange { .. } => Severity::Warning,
            ValidationKind::ExternalImage => Severity::Warning,
            ValidationKind::UnknownTemplate { .. } => Severity::Warning,
            ValidationKind::UnknownSocialPlatform { .. } => Severity::Warning,
        }
    }
}

impl fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationKind::MissingName => write!(f, "name is required"),
            ValidationKind::BlankSkillName => write!(f, "skill name is required"),
            ValidationKind::DuplicateSkill { name, first_index } => {
                write!(f, "duplicate skill '{}' (first seen at skills[{}])", name, first_index)
            }
            ValidationKind::SkillLevelOutOfRange { level } => {
                write!(f, "level {} exceeds 100 and will be shown as 100", level)
            }
            ValidationKind::MissingField { field } => write!(f, "{} is required", field),
            ValidationKind::ExternalImage => {
                write!(f, "image is not a data URI; the export will fetch it at view time")
            }
            ValidationKind::UnknownTemplate { id } => {
                write!(f, "unknown template '{}', the default template will be used", id)
            }
            ValidationKind::UnknownSocialPlatform { key } => {
                write!(f, "unknown platform '{}', a generic link icon will be used", key)
            }
        }
    }
}

/// Severity level of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Export still looks right, but probably not as intended.
    Warning,
    /// Problem that should be fixed.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Summary of validation results.
#[derive(Debug, Clone, Default)]
pub struct ValidationSummary {
    /// All issues found during validation.
    pub issues: Vec<ValidationIssue>,
}

impl ValidationSummary {
    /// Creates a new empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an issue to the summary.
    pub fn add(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    /// Returns the total number of issues.
    pub fn total(&self) -> usize {
        self.issues.len()
    }

    /// Returns the number of errors.
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Returns the number of warnings.
    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// Returns all errors.
    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity() == Severity::Error)
    }

    /// Returns all warnings.
    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity() == Severity::Warning)
    }

    /// Returns true if there are no issues.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns true if there are any errors.
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Returns issues grouped by severity, errors first.
    pub fn issues_by_severity(&self) -> impl Iterator<Item = &ValidationIssue> {
        let mut sorted: Vec<_> = self.issues.iter().collect();
        sorted.sort_by_key(|i| std::cmp::Reverse(i.severity()));
        sorted.into_iter()
    }
}

impl Extend<ValidationIssue> for ValidationSummary {
    fn extend<I: IntoIterator<Item = ValidationIssue>>(&mut self, iter: I) {
        self.issues.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn duplicate_skill_has_index_location() {
        let issue = ValidationIssue::duplicate_skill(3, "Rust", 0);

        assert_eq!(issue.location, "skills[3]");
        assert!(issue.is_error());
        assert_eq!(
            issue.to_string(),
            "skills[3]: duplicate skill 'Rust' (first seen at skills[0])"
        );
    }

    #[test]
    fn missing_project_field_names_field() {
        let issue = ValidationIssue::missing_project_field(1, "title");
        assert_eq!(issue.location, "projects[1].title");
        assert_eq!(issue.to_string(), "projects[1].title: title is required");
    }

    #[test]
    fn external_image_is_warning() {
        let issue = ValidationIssue::external_image("projects[0].image");
        assert_eq!(issue.severity(), Severity::Warning);
        assert!(issue.to_string().contains("not a data URI"));
    }

    #[test]
    fn unknown_template_is_warning() {
        let kind = ValidationKind::UnknownTemplate {
            id: "creative".to_string(),
        };
        assert_eq!(kind.severity(), Severity::Warning);
        assert!(kind.to_string().contains("'creative'"));
    }

    #[test]
    fn summary_counts_by_severity() {
        let mut summary = ValidationSummary::new();
        summary.add(ValidationIssue::missing_name());
        summary.add(ValidationIssue::external_image("personalInfo.profileImage"));
        summary.add(ValidationIssue::duplicate_skill(1, "Go", 0));

        assert_eq!(summary.total(), 3);
        assert_eq!(summary.error_count(), 2);
        assert_eq!(summary.warning_count(), 1);
        assert!(summary.has_errors());
        assert!(!summary.is_empty());
    }

    #[test]
    fn issues_by_severity_puts_errors_first() {
        let mut summary = ValidationSummary::new();
        summary.add(ValidationIssue::external_image("projects[0].image"));
        summary.add(ValidationIssue::missing_name());

        let kinds: Vec<_> = summary.issues_by_severity().map(|i| i.severity()).collect();
        assert_eq!(kinds, vec![Severity::Error, Severity::Warning]);
    }

    #[test]
    fn empty_summary_is_clean() {
        let summary = ValidationSummary::new();
        assert!(summary.is_empty());
        assert!(!summary.has_errors());
    }

    #[test]
    fn severity_display() {
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(Severity::Error.to_string(), "error");
    }
}
