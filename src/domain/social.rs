//! Social platform keys and the link map shown in a portfolio's contact section.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::domain::is_blank;

/// A social platform key.
///
/// The known platforms come from a fixed list; anything else is kept verbatim as
/// [`SocialPlatform::Other`] so it still renders (with a generic link icon).
///
/// Ordering follows declaration order, which is also the order links are rendered in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SocialPlatform {
    Github,
    Linkedin,
    Twitter,
    Website,
    Instagram,
    Facebook,
    Youtube,
    Dribbble,
    Behance,
    Other(String),
}

impl SocialPlatform {
    /// The known platforms, in render order.
    pub const KNOWN: [SocialPlatform; 9] = [
        SocialPlatform::Github,
        SocialPlatform::Linkedin,
        SocialPlatform::Twitter,
        SocialPlatform::Website,
        SocialPlatform::Instagram,
        SocialPlatform::Facebook,
        SocialPlatform::Youtube,
        SocialPlatform::Dribbble,
        SocialPlatform::Behance,
    ];

    /// Returns the platform key as it appears in portfolio data.
    pub fn as_str(&self) -> &str {
        match self {
            SocialPlatform::Github => "github",
            SocialPlatform::Linkedin => "linkedin",
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::Website => "website",
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::Facebook => "facebook",
            SocialPlatform::Youtube => "youtube",
            SocialPlatform::Dribbble => "dribbble",
            SocialPlatform::Behance => "behance",
            SocialPlatform::Other(key) => key.as_str(),
        }
    }

    /// Font Awesome classes for the platform icon.
    pub fn icon_class(&self) -> &'static str {
        match self {
            SocialPlatform::Github => "fa-brands fa-github",
            SocialPlatform::Linkedin => "fa-brands fa-linkedin",
            SocialPlatform::Twitter => "fa-brands fa-twitter",
            SocialPlatform::Website => "fa-solid fa-globe",
            SocialPlatform::Instagram => "fa-brands fa-instagram",
            SocialPlatform::Facebook => "fa-brands fa-facebook",
            SocialPlatform::Youtube => "fa-brands fa-youtube",
            SocialPlatform::Dribbble => "fa-brands fa-dribbble",
            SocialPlatform::Behance => "fa-brands fa-behance",
            SocialPlatform::Other(_) => "fa-solid fa-link",
        }
    }

    /// Returns true for keys outside the fixed platform list.
    pub fn is_other(&self) -> bool {
        matches!(self, SocialPlatform::Other(_))
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SocialPlatform {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Ok(SocialPlatform::KNOWN
            .into_iter()
            .find(|p| p.as_str() == key)
            .unwrap_or_else(|| SocialPlatform::Other(key.to_string())))
    }
}

impl Serialize for SocialPlatform {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SocialPlatform {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let Ok(platform) = s.parse::<SocialPlatform>();
        Ok(platform)
    }
}

/// Mapping from platform to an optional profile URL.
///
/// Entries with a missing or blank URL are kept (the form stores them that way)
/// but never rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SocialLinks(BTreeMap<SocialPlatform, Option<String>>);

impl SocialLinks {
    /// Creates an empty link map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the URL for a platform, replacing any previous value.
    pub fn insert(&mut self, platform: SocialPlatform, url: impl Into<String>) {
        self.0.insert(platform, Some(url.into()));
    }

    /// Returns the stored URL for a platform, blank or not.
    pub fn get(&self, platform: &SocialPlatform) -> Option<&str> {
        self.0.get(platform).and_then(|url| url.as_deref())
    }

    /// Iterates every stored key, including those without a URL.
    pub fn platforms(&self) -> impl Iterator<Item = &SocialPlatform> {
        self.0.keys()
    }

    /// Iterates the links that should appear in a document, in render order.
    pub fn rendered(&self) -> impl Iterator<Item = (&SocialPlatform, &str)> {
        self.0.iter().filter_map(|(platform, url)| match url.as_deref() {
            Some(url) if !is_blank(url) => Some((platform, url.trim())),
            _ => None,
        })
    }
}

impl FromIterator<(SocialPlatform, String)> for SocialLinks {
    fn from_iter<I: IntoIterator<Item = (SocialPlatform, String)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(p, url)| (p, Some(url))).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_known_platforms() {
        for platform in SocialPlatform::KNOWN {
            let Ok(parsed) = platform.as_str().parse::<SocialPlatform>();
            assert_eq!(parsed, platform);
        }
    }

    #[test]
    fn unknown_key_becomes_other() {
        let Ok(parsed) = "mastodon".parse::<SocialPlatform>();
        assert_eq!(parsed, SocialPlatform::Other("mastodon".to_string()));
        assert_eq!(parsed.icon_class(), "fa-solid fa-link");
    }

    #[test]
    fn website_uses_globe_icon() {
        assert_eq!(SocialPlatform::Website.icon_class(), "fa-solid fa-globe");
        assert_eq!(SocialPlatform::Github.icon_class(), "fa-brands fa-github");
    }

    #[test]
    fn rendered_skips_missing_and_blank_urls() {
        let links: SocialLinks = serde_json::from_str(
            r#"{"github": "https://github.com/jane", "twitter": "", "linkedin": null, "website": "   "}"#,
        )
        .unwrap();

        let rendered: Vec<_> = links.rendered().map(|(p, url)| (p.as_str(), url)).collect();
        assert_eq!(rendered, vec![("github", "https://github.com/jane")]);
    }

    #[test]
    fn rendered_follows_platform_order() {
        let links: SocialLinks = serde_json::from_str(
            r#"{"zulip": "https://z.example", "website": "https://jane.dev", "github": "https://github.com/jane"}"#,
        )
        .unwrap();

        let order: Vec<_> = links.rendered().map(|(p, _)| p.as_str().to_string()).collect();
        assert_eq!(order, vec!["github", "website", "zulip"]);
    }

    #[test]
    fn serializes_back_to_keyed_object() {
        let mut links = SocialLinks::new();
        links.insert(SocialPlatform::Dribbble, "https://dribbble.com/jane");
        let json = serde_json::to_string(&links).unwrap();
        assert_eq!(json, r#"{"dribbble":"https://dribbble.com/jane"}"#);
    }
}
