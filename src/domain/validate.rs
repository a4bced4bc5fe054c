//! Validation functions for portfolio data.
//!
//! Pure functions over a [`PortfolioData`] value; nothing here blocks
//! generation, the generator degrades on its own. These checks exist so a
//! user can see what the export will quietly paper over.

use std::collections::HashMap;

use crate::domain::{
    PortfolioData, Skill, TemplateId, ValidationIssue, ValidationKind, ValidationSummary,
    is_blank, non_blank,
};

/// Runs every check and collects the results.
pub fn validate_portfolio(data: &PortfolioData) -> ValidationSummary {
    let mut summary = ValidationSummary::new();

    if is_blank(&data.personal_info.name) {
        summary.add(ValidationIssue::missing_name());
    }

    summary.extend(find_skill_issues(&data.skills));
    summary.extend(find_missing_project_fields(data));
    summary.extend(find_external_images(data));

    if data.template.parse::<TemplateId>().is_err() {
        summary.add(ValidationIssue::new(
            "template",
            ValidationKind::UnknownTemplate {
                id: data.template.clone(),
            },
        ));
    }

    for platform in data.social_links.platforms().filter(|p| p.is_other()) {
        summary.add(ValidationIssue::new(
            format!("socialLinks.{}", platform),
            ValidationKind::UnknownSocialPlatform {
                key: platform.to_string(),
            },
        ));
    }

    tracing::debug!(
        errors = summary.error_count(),
        warnings = summary.warning_count(),
        "validated portfolio data"
    );

    summary
}

/// Finds blank, duplicate and out-of-range skills.
///
/// The first occurrence of a name is the original; later ones are reported
/// against it. Names are compared after trimming.
pub fn find_skill_issues(skills: &[Skill]) -> Vec<ValidationIssue> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut issues = Vec::new();

    for (index, skill) in skills.iter().enumerate() {
        let name = skill.name.trim();
        if name.is_empty() {
            issues.push(ValidationIssue::new(
                format!("skills[{index}]"),
                ValidationKind::BlankSkillName,
            ));
            continue;
        }

        if let Some(&first_index) = seen.get(name) {
            issues.push(ValidationIssue::duplicate_skill(index, name, first_index));
        } else {
            seen.insert(name, index);
        }

        if skill.level > crate::domain::MAX_SKILL_LEVEL {
            issues.push(ValidationIssue::new(
                format!("skills[{index}].level"),
                ValidationKind::SkillLevelOutOfRange { level: skill.level },
            ));
        }
    }

    issues
}

/// Finds projects with a blank title or description.
pub fn find_missing_project_fields(data: &PortfolioData) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    for (index, project) in data.projects.iter().enumerate() {
        if is_blank(&project.title) {
            issues.push(ValidationIssue::missing_project_field(index, "title"));
        }
        if is_blank(&project.description) {
            issues.push(ValidationIssue::missing_project_field(index, "description"));
        }
    }
    issues
}

/// Finds image fields that reference a URL instead of embedding a data URI.
pub fn find_external_images(data: &PortfolioData) -> Vec<ValidationIssue> {
    let mut images: Vec<(String, Option<&str>)> = vec![(
        "personalInfo.profileImage".to_string(),
        data.personal_info.profile_image.as_deref(),
    )];
    images.extend(
        data.projects
            .iter()
            .enumerate()
            .map(|(i, p)| (format!("projects[{i}].image"), p.image.as_deref())),
    );
    images.extend(
        data.testimonials
            .iter()
            .enumerate()
            .map(|(i, t)| (format!("testimonials[{i}].image"), t.image.as_deref())),
    );

    images
        .into_iter()
        .filter_map(|(location, image)| {
            let image = non_blank(image)?;
            (!is_data_uri(image)).then(|| ValidationIssue::external_image(location))
        })
        .collect()
}

fn is_data_uri(value: &str) -> bool {
    value.trim_start().starts_with("data:")
}
