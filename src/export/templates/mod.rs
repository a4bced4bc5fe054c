//! Per-template markup and style.
//!
//! Each submodule owns one template: its [`StyleBundle`], its markup source
//! and the testimonial rule it follows. Dispatch happens on [`TemplateId`]
//! with exhaustive matches, so adding a variant fails to compile until every
//! table here covers it.

mod bloom_craft;
mod context;
mod gradient_flow;
mod mono_grid;
mod nova_spark;
mod tech_aura;

pub(crate) use context::MarkupContext;

use crate::domain::TemplateId;
use crate::export::style::StyleBundle;

/// How a template turns the testimonial list into markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestimonialPolicy {
    /// Every testimonial is rendered as its own block.
    ShowAll,
    /// Only the first testimonial is rendered. When there are more, the
    /// full list is embedded as JSON and rotated client-side.
    FeaturedFirst,
}

impl TestimonialPolicy {
    /// Splits `items` into (rendered as markup, handed to the rotation script).
    ///
    /// The rotation list is either empty or the complete input, so the
    /// client-side cycle returns to the featured entry.
    pub fn partition<T>(self, items: &[T]) -> (&[T], &[T]) {
        match self {
            TestimonialPolicy::ShowAll => (items, &[]),
            TestimonialPolicy::FeaturedFirst if items.len() > 1 => (&items[..1], items),
            TestimonialPolicy::FeaturedFirst => (items, &[]),
        }
    }
}

impl TemplateId {
    /// The style bundle for this template.
    pub fn style(self) -> &'static StyleBundle {
        match self {
            TemplateId::NovaSpark => &nova_spark::STYLE,
            TemplateId::BloomCraft => &bloom_craft::STYLE,
            TemplateId::MonoGrid => &mono_grid::STYLE,
            TemplateId::GradientFlow => &gradient_flow::STYLE,
            TemplateId::TechAura => &tech_aura::STYLE,
        }
    }

    /// The body markup template source.
    pub fn markup_source(self) -> &'static str {
        match self {
            TemplateId::NovaSpark => nova_spark::MARKUP,
            TemplateId::BloomCraft => bloom_craft::MARKUP,
            TemplateId::MonoGrid => mono_grid::MARKUP,
            TemplateId::GradientFlow => gradient_flow::MARKUP,
            TemplateId::TechAura => tech_aura::MARKUP,
        }
    }

    pub fn testimonial_policy(self) -> TestimonialPolicy {
        match self {
            TemplateId::TechAura => TestimonialPolicy::FeaturedFirst,
            TemplateId::NovaSpark
            | TemplateId::BloomCraft
            | TemplateId::MonoGrid
            | TemplateId::GradientFlow => TestimonialPolicy::ShowAll,
        }
    }

    /// Name the markup is registered under in the template environment.
    ///
    /// The `.html` suffix turns on HTML auto-escaping.
    pub(crate) fn markup_template_name(self) -> &'static str {
        match self {
            TemplateId::NovaSpark => "nova-spark.html",
            TemplateId::BloomCraft => "bloom-craft.html",
            TemplateId::MonoGrid => "mono-grid.html",
            TemplateId::GradientFlow => "gradient-flow.html",
            TemplateId::TechAura => "tech-aura.html",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn show_all_keeps_everything_in_markup() {
        let items = [1, 2, 3];
        let (shown, rotated) = TestimonialPolicy::ShowAll.partition(&items);
        assert_eq!(shown, &[1, 2, 3]);
        assert!(rotated.is_empty());
    }

    #[test]
    fn featured_first_renders_one_and_rotates_all() {
        let items = [1, 2, 3];
        let (shown, rotated) = TestimonialPolicy::FeaturedFirst.partition(&items);
        assert_eq!(shown, &[1]);
        assert_eq!(rotated, &[1, 2, 3]);
    }

    #[test]
    fn featured_first_without_extras_has_no_rotation() {
        let one = [1];
        let (shown, rotated) = TestimonialPolicy::FeaturedFirst.partition(&one);
        assert_eq!(shown, &[1]);
        assert!(rotated.is_empty());

        let none: [i32; 0] = [];
        let (shown, rotated) = TestimonialPolicy::FeaturedFirst.partition(&none);
        assert!(shown.is_empty());
        assert!(rotated.is_empty());
    }

    #[test]
    fn only_tech_aura_features_a_testimonial() {
        for id in TemplateId::ALL {
            let expected = if id == TemplateId::TechAura {
                TestimonialPolicy::FeaturedFirst
            } else {
                TestimonialPolicy::ShowAll
            };
            assert_eq!(id.testimonial_policy(), expected, "{id}");
        }
    }

    #[test]
    fn every_template_has_distinct_markup() {
        let mut names: Vec<_> = TemplateId::ALL.iter().map(|id| id.markup_template_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), TemplateId::ALL.len());

        for id in TemplateId::ALL {
            assert!(id.markup_template_name().ends_with(".html"));
            assert!(id.markup_source().contains("All rights reserved."), "{id}");
            assert!(!id.style().body_class.is_empty(), "{id}");
        }
    }
}
