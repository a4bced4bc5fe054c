//! The values markup templates render from.
//!
//! Views borrow from [`PortfolioData`] and normalize it on the way in: blank
//! optional strings become `None` and skill levels are clamped, so the
//! templates only ever test presence.

use minijinja::{Value, context};
use serde::Serialize;

use crate::domain::{
    Education, Experience, PersonalInfo, PortfolioData, Project, Skill, Testimonial, TemplateId,
    non_blank,
};

#[derive(Debug, Serialize)]
struct PersonView<'a> {
    name: &'a str,
    title: &'a str,
    bio: &'a str,
    portrait: Option<&'a str>,
    initials: String,
}

impl<'a> From<&'a PersonalInfo> for PersonView<'a> {
    fn from(info: &'a PersonalInfo) -> Self {
        Self {
            name: &info.name,
            title: &info.title,
            bio: &info.bio,
            portrait: info.portrait(),
            initials: info.initials(),
        }
    }
}

#[derive(Debug, Serialize)]
struct SkillView<'a> {
    name: &'a str,
    level: u32,
}

impl<'a> From<&'a Skill> for SkillView<'a> {
    fn from(skill: &'a Skill) -> Self {
        Self {
            name: &skill.name,
            level: skill.display_level(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ProjectView<'a> {
    title: &'a str,
    description: &'a str,
    link: Option<&'a str>,
    image: Option<&'a str>,
}

impl<'a> From<&'a Project> for ProjectView<'a> {
    fn from(project: &'a Project) -> Self {
        Self {
            title: &project.title,
            description: &project.description,
            link: non_blank(project.link.as_deref()).map(str::trim),
            image: non_blank(project.image.as_deref()).map(str::trim),
        }
    }
}

#[derive(Debug, Serialize)]
struct EducationView<'a> {
    degree: &'a str,
    institution: &'a str,
    year: &'a str,
    description: Option<&'a str>,
}

impl<'a> From<&'a Education> for EducationView<'a> {
    fn from(entry: &'a Education) -> Self {
        Self {
            degree: &entry.degree,
            institution: &entry.institution,
            year: &entry.year,
            description: non_blank(entry.description.as_deref()),
        }
    }
}

#[derive(Debug, Serialize)]
struct ExperienceView<'a> {
    position: &'a str,
    company: &'a str,
    year: &'a str,
    description: Option<&'a str>,
}

impl<'a> From<&'a Experience> for ExperienceView<'a> {
    fn from(entry: &'a Experience) -> Self {
        Self {
            position: &entry.position,
            company: &entry.company,
            year: &entry.year,
            description: non_blank(entry.description.as_deref()),
        }
    }
}

#[derive(Debug, Serialize)]
struct TestimonialView<'a> {
    name: &'a str,
    position: &'a str,
    text: &'a str,
    image: Option<&'a str>,
}

impl<'a> From<&'a Testimonial> for TestimonialView<'a> {
    fn from(entry: &'a Testimonial) -> Self {
        Self {
            name: &entry.name,
            position: &entry.position,
            text: &entry.text,
            image: non_blank(entry.image.as_deref()).map(str::trim),
        }
    }
}

#[derive(Debug, Serialize)]
struct SocialLinkView<'a> {
    platform: &'a str,
    url: &'a str,
    icon: &'static str,
}

/// Everything one markup template needs for one render.
#[derive(Debug, Serialize)]
pub(crate) struct MarkupContext<'a> {
    person: PersonView<'a>,
    skills: Vec<SkillView<'a>>,
    projects: Vec<ProjectView<'a>>,
    education: Vec<EducationView<'a>>,
    experience: Vec<ExperienceView<'a>>,
    testimonials: Vec<TestimonialView<'a>>,
    #[serde(skip)]
    rotation: Vec<TestimonialView<'a>>,
    social_links: Vec<SocialLinkView<'a>>,
    year: i32,
}

impl<'a> MarkupContext<'a> {
    pub(crate) fn new(data: &'a PortfolioData, template: TemplateId, year: i32) -> Self {
        let (shown, rotated) = template.testimonial_policy().partition(&data.testimonials);

        Self {
            person: PersonView::from(&data.personal_info),
            skills: data.skills.iter().map(SkillView::from).collect(),
            projects: data.projects.iter().map(ProjectView::from).collect(),
            education: data.education.iter().map(EducationView::from).collect(),
            experience: data.experience.iter().map(ExperienceView::from).collect(),
            testimonials: shown.iter().map(TestimonialView::from).collect(),
            rotation: rotated.iter().map(TestimonialView::from).collect(),
            social_links: data
                .social_links
                .rendered()
                .map(|(platform, url)| SocialLinkView {
                    platform: platform.as_str(),
                    url,
                    icon: platform.icon_class(),
                })
                .collect(),
            year,
        }
    }

    /// Converts to a template value.
    ///
    /// `rotation` is the testimonial payload as a JSON string safe to place
    /// inside a `<script>` element, or none when nothing rotates.
    pub(crate) fn to_value(&self) -> Value {
        let rotation: Value = (!self.rotation.is_empty())
            .then(|| Value::from_safe_string(script_json(&self.rotation)))
            .into();
        context! {
            rotation => rotation,
            ..Value::from_serialize(self)
        }
    }
}

/// Serializes `value` for embedding in a `<script>` element.
///
/// Every `<` is written as `\u003c`, which keeps `</script>` and `<!--`
/// sequences in user text from ending the element early.
fn script_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "[]".to_string())
        .replace('<', "\\u003c")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SocialPlatform;
    use pretty_assertions::assert_eq;

    fn data() -> PortfolioData {
        let mut data = PortfolioData::new(PersonalInfo::new("Jane Doe", "Engineer", "Bio"));
        data.testimonials = vec![
            Testimonial::new("A", "CTO", "First"),
            Testimonial::new("B", "PM", "Second </script>").with_image(" "),
        ];
        data
    }

    #[test]
    fn blank_optionals_become_none() {
        let mut data = data();
        data.projects = vec![Project::new("P", "D").with_link("  ").with_image("")];
        data.personal_info.profile_image = Some(String::new());

        let ctx = MarkupContext::new(&data, TemplateId::MonoGrid, 2024);
        assert_eq!(ctx.projects[0].link, None);
        assert_eq!(ctx.projects[0].image, None);
        assert_eq!(ctx.person.portrait, None);
        assert_eq!(ctx.testimonials[1].image, None);
    }

    #[test]
    fn skill_levels_are_clamped() {
        let mut data = data();
        data.skills = vec![Skill::new("Rust", 140), Skill::new("Go", 0)];

        let ctx = MarkupContext::new(&data, TemplateId::NovaSpark, 2024);
        let levels: Vec<_> = ctx.skills.iter().map(|s| s.level).collect();
        assert_eq!(levels, vec![100, 0]);
    }

    #[test]
    fn show_all_templates_have_no_rotation() {
        let data = data();
        let ctx = MarkupContext::new(&data, TemplateId::BloomCraft, 2024);
        assert_eq!(ctx.testimonials.len(), 2);
        assert!(ctx.rotation.is_empty());
        assert!(ctx.to_value().get_attr("rotation").unwrap().is_none());
    }

    #[test]
    fn featured_template_rotates_full_list() {
        let data = data();
        let ctx = MarkupContext::new(&data, TemplateId::TechAura, 2024);
        assert_eq!(ctx.testimonials.len(), 1);
        assert_eq!(ctx.rotation.len(), 2);

        let rotation = ctx.to_value().get_attr("rotation").unwrap();
        assert!(rotation.is_safe());
        let json = rotation.as_str().unwrap();
        assert!(json.contains(r#""text":"First""#));
        assert!(json.contains("\\u003c/script>"));
        assert!(!json.contains("</script>"));
    }

    #[test]
    fn social_links_carry_icons() {
        let mut data = data();
        data.social_links
            .insert(SocialPlatform::Other("mastodon".to_string()), "https://m.example/@jane");
        data.social_links.insert(SocialPlatform::Github, "https://github.com/jane");

        let ctx = MarkupContext::new(&data, TemplateId::NovaSpark, 2024);
        let links: Vec<_> = ctx
            .social_links
            .iter()
            .map(|l| (l.platform, l.icon))
            .collect();
        assert_eq!(
            links,
            vec![
                ("github", "fa-brands fa-github"),
                ("mastodon", "fa-solid fa-link")
            ]
        );
    }

    #[test]
    fn script_json_escapes_angle_brackets() {
        assert_eq!(script_json(&vec!["<b>"]), r#"["\u003cb>"]"#);
    }
}
