//! The portfolio data record handed to the document generator.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{SocialLinks, TemplateId, non_blank};

/// Skill level assumed when the data doesn't carry one.
pub const DEFAULT_SKILL_LEVEL: u32 = 75;

/// Highest level a skill bar can show.
pub const MAX_SKILL_LEVEL: u32 = 100;

/// A user's complete portfolio content plus the selected template.
///
/// The JSON shape matches what the portfolio form stores: camelCase keys, every
/// section optional except `personalInfo`.
///
/// # Examples
///
/// ```
/// use folio::domain::{PortfolioData, TemplateId};
///
/// let data = PortfolioData::from_json(r#"{
///     "personalInfo": { "name": "Jane Doe", "title": "Engineer", "bio": "Builds things." },
///     "skills": [{ "name": "Rust", "level": 90 }, "SQL"],
///     "template": "mono-grid"
/// }"#).unwrap();
///
/// assert_eq!(data.skills[1].level, 75);
/// assert_eq!(data.template_id(), TemplateId::MonoGrid);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioData {
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub social_links: SocialLinks,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    /// Raw template identifier; may be unknown, see [`PortfolioData::template_id`].
    #[serde(default = "default_template")]
    pub template: String,
}

fn default_template() -> String {
    TemplateId::DEFAULT.as_str().to_string()
}

impl PortfolioData {
    /// Creates an otherwise empty portfolio for a person.
    pub fn new(personal_info: PersonalInfo) -> Self {
        Self {
            personal_info,
            skills: Vec::new(),
            projects: Vec::new(),
            social_links: SocialLinks::new(),
            education: Vec::new(),
            experience: Vec::new(),
            testimonials: Vec::new(),
            template: default_template(),
        }
    }

    /// Parses portfolio data from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or `personalInfo` is missing.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the data as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Resolves the selected template, falling back to the default when unknown.
    pub fn template_id(&self) -> TemplateId {
        TemplateId::resolve(&self.template)
    }

    /// Returns a copy with a different template selected.
    pub fn with_template(mut self, template: TemplateId) -> Self {
        self.template = template.as_str().to_string();
        self
    }
}

/// Name, headline and bio shown in the hero section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub bio: String,
    /// Pre-sized data URI for the portrait.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

impl PersonalInfo {
    pub fn new(name: impl Into<String>, title: impl Into<String>, bio: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            bio: bio.into(),
            profile_image: None,
        }
    }

    /// The portrait, if one is set to something non-blank.
    pub fn portrait(&self) -> Option<&str> {
        non_blank(self.profile_image.as_deref())
    }

    /// First letter of each word of the name, used as a monogram.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

/// A named skill with a proficiency level in percent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SkillRepr")]
pub struct Skill {
    pub name: String,
    pub level: u32,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: u32) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }

    /// The level bounded to what a bar can display.
    pub fn display_level(&self) -> u32 {
        self.level.min(MAX_SKILL_LEVEL)
    }
}

/// Skills are stored either as objects or, in older data, as bare names.
#[derive(Deserialize)]
#[serde(untagged)]
enum SkillRepr {
    Full {
        #[serde(default)]
        name: String,
        #[serde(default = "default_skill_level", deserialize_with = "lenient_level")]
        level: u32,
    },
    Name(String),
}

fn default_skill_level() -> u32 {
    DEFAULT_SKILL_LEVEL
}

/// Level values as they turn up in hand-edited data.
#[derive(Deserialize)]
#[serde(untagged)]
enum LevelRepr {
    Integer(i64),
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Reads a skill level without ever rejecting the document.
///
/// Negative numbers become 0, fractions are rounded, numeric strings are
/// parsed, and anything else (null, booleans, junk text) takes the default
/// level. Values above 100 are kept and clamped only when rendered.
fn lenient_level<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let level = match LevelRepr::deserialize(deserializer)? {
        LevelRepr::Integer(n) => Some(n.clamp(0, i64::from(u32::MAX)) as u32),
        LevelRepr::Number(n) => number_level(n),
        LevelRepr::Text(text) => text.trim().parse::<f64>().ok().and_then(number_level),
        LevelRepr::Other(_) => None,
    };
    Ok(level.unwrap_or(DEFAULT_SKILL_LEVEL))
}

fn number_level(n: f64) -> Option<u32> {
    // `as` saturates, so huge values land on u32::MAX and negatives on 0
    n.is_finite().then(|| n.round() as u32)
}

impl From<SkillRepr> for Skill {
    fn from(repr: SkillRepr) -> Self {
        match repr {
            SkillRepr::Full { name, level } => Skill { name, level },
            SkillRepr::Name(name) => Skill {
                name,
                level: DEFAULT_SKILL_LEVEL,
            },
        }
    }
}

/// A portfolio project card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Project {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            link: None,
            image: None,
        }
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// A degree or course entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub year: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Education {
    pub fn new(
        degree: impl Into<String>,
        institution: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            degree: degree.into(),
            institution: institution.into(),
            year: year.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A job or role entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub position: String,
    pub company: String,
    pub year: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Experience {
    pub fn new(
        position: impl Into<String>,
        company: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            position: position.into(),
            company: company.into(),
            year: year.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A quote from a client or colleague.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    pub name: String,
    pub position: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Testimonial {
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            text: text.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}
