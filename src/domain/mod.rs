//! Core types: PortfolioData and its sections, SocialPlatform, TemplateId

mod portfolio;
mod sample;
mod social;
mod template_id;
mod validate;
mod validation;

pub use portfolio::{
    DEFAULT_SKILL_LEVEL, Education, Experience, MAX_SKILL_LEVEL, PersonalInfo, PortfolioData,
    Project, Skill, Testimonial,
};
pub use social::{SocialLinks, SocialPlatform};
pub use template_id::{ParseTemplateIdError, TemplateId};
pub use validate::{
    find_external_images, find_missing_project_fields, find_skill_issues, validate_portfolio,
};
pub use validation::{Severity, ValidationIssue, ValidationKind, ValidationSummary};

/// Returns true for strings that are empty once trimmed.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Treats blank optional strings the same as missing ones.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !is_blank(v))
}
