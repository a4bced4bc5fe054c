//! Identifier for the fixed set of portfolio templates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five visual templates a portfolio can be exported with.
///
/// Parsing is strict (`"nova-spark".parse()`); use [`TemplateId::resolve`] when an
/// unknown identifier should fall back to the default instead of failing.
///
/// # Examples
///
/// ```
/// use folio::domain::TemplateId;
///
/// let id: TemplateId = "mono-grid".parse().unwrap();
/// assert_eq!(id, TemplateId::MonoGrid);
/// assert_eq!(TemplateId::resolve("retro-wave"), TemplateId::DEFAULT);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemplateId {
    NovaSpark,
    BloomCraft,
    MonoGrid,
    GradientFlow,
    TechAura,
}

/// Error returned when parsing an unknown template identifier.
#[derive(Debug, Clone)]
pub struct ParseTemplateIdError(String);

impl fmt::Display for ParseTemplateIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown template '{}': expected one of {}",
            self.0,
            TemplateId::ALL
                .iter()
                .map(|t| t.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl std::error::Error for ParseTemplateIdError {}

impl TemplateId {
    /// Template used whenever an identifier is missing or unrecognized.
    pub const DEFAULT: TemplateId = TemplateId::NovaSpark;

    /// All templates in registry order.
    pub const ALL: [TemplateId; 5] = [
        TemplateId::NovaSpark,
        TemplateId::BloomCraft,
        TemplateId::MonoGrid,
        TemplateId::GradientFlow,
        TemplateId::TechAura,
    ];

    /// Returns the kebab-case identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            TemplateId::NovaSpark => "nova-spark",
            TemplateId::BloomCraft => "bloom-craft",
            TemplateId::MonoGrid => "mono-grid",
            TemplateId::GradientFlow => "gradient-flow",
            TemplateId::TechAura => "tech-aura",
        }
    }

    /// Resolves an identifier, falling back to [`TemplateId::DEFAULT`] when unknown.
    pub fn resolve(id: &str) -> TemplateId {
        match id.parse() {
            Ok(template) => template,
            Err(_) => {
                tracing::debug!(
                    requested = id,
                    fallback = TemplateId::DEFAULT.as_str(),
                    "unknown template, using default"
                );
                TemplateId::DEFAULT
            }
        }
    }
}

impl Default for TemplateId {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = ParseTemplateIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim();
        TemplateId::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| ParseTemplateIdError(normalized.to_string()))
    }
}

impl Serialize for TemplateId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TemplateId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
