//! Full-document assembly.
//!
//! [`DocumentGenerator`] renders the chosen template's body markup, then
//! wraps it in a fixed skeleton: head metadata, CDN assets, Tailwind config,
//! the style bundle, a dark-mode toggle and the reveal-on-scroll script.

use chrono::{Datelike, Utc};
use minijinja::{Environment, Value, context};
use thiserror::Error;

use crate::domain::{PortfolioData, TemplateId};
use crate::export::html::html_formatter;
use crate::export::style::SHARED_CSS;
use crate::export::templates::MarkupContext;

const DOCUMENT_TEMPLATE_NAME: &str = "document.html";

/// Scripts loaded by every exported document.
pub const SCRIPT_ASSETS: [&str; 4] = [
    "https://cdn.tailwindcss.com",
    "https://cdnjs.cloudflare.com/ajax/libs/gsap/3.12.2/gsap.min.js",
    "https://cdnjs.cloudflare.com/ajax/libs/gsap/3.12.2/ScrollTrigger.min.js",
    "https://unpkg.com/framer-motion@10.16.4/dist/framer-motion.js",
];

/// Stylesheets loaded by every exported document.
pub const STYLESHEET_ASSETS: [&str; 1] =
    ["https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.2/css/all.min.css"];

/// Outer skeleton shared by all templates.
pub const DOCUMENT_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{{ name }} - Portfolio</title>
{%- for src in scripts %}
<script src="{{ src }}"></script>
{%- endfor %}
{%- for href in stylesheets %}
<link rel="stylesheet" href="{{ href }}">
{%- endfor %}
<script>
  tailwind.config = {
    darkMode: 'class',
    theme: {
      extend: {{ tailwind_theme }}
    }
  }

  if (localStorage.theme === 'dark' || (!('theme' in localStorage) && window.matchMedia('(prefers-color-scheme: dark)').matches)) {
    document.documentElement.classList.add('dark')
  } else {
    document.documentElement.classList.remove('dark')
  }
</script>
<style>
{{ css }}
{{ shared_css }}
</style>
</head>
<body class="{{ body_class }}">
{{ body }}
<button id="theme-toggle" class="fixed bottom-4 right-4 p-2 rounded-full bg-gray-200 dark:bg-gray-800 text-gray-800 dark:text-gray-200 shadow-lg z-50" aria-label="Toggle dark mode">
  <i class="fa-solid fa-sun dark:hidden"></i>
  <i class="fa-solid fa-moon hidden dark:inline"></i>
</button>
<script>
  gsap.registerPlugin(ScrollTrigger);

  document.getElementById('theme-toggle').addEventListener('click', () => {
    if (document.documentElement.classList.contains('dark')) {
      document.documentElement.classList.remove('dark');
      localStorage.theme = 'light';
    } else {
      document.documentElement.classList.add('dark');
      localStorage.theme = 'dark';
    }
  });

  document.addEventListener('DOMContentLoaded', () => {
    const observer = new IntersectionObserver((entries) => {
      entries.forEach(entry => {
        if (entry.isIntersecting) {
          entry.target.classList.add('animated');
        }
      });
    }, { threshold: 0.1 });

    document.querySelectorAll('.animate-on-scroll').forEach(element => {
      observer.observe(element);
    });
{{ animation_script }}
  });
</script>
</body>
</html>
"##;

/// Errors from document generation.
///
/// Rendering only fails on a defect in an embedded template, never on the
/// content of the portfolio data.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to render template {template}")]
    Render {
        template: &'static str,
        #[source]
        source: minijinja::Error,
    },
}

/// Renders portfolio data into standalone HTML documents.
///
/// Construction compiles the skeleton and every template once; the
/// generator can then be reused for any number of documents.
pub struct DocumentGenerator {
    env: Environment<'static>,
    year: i32,
}

impl DocumentGenerator {
    /// Builds the template environment. The footer year is the current UTC year.
    pub fn new() -> Result<Self, ExportError> {
        let mut env = Environment::new();
        env.set_formatter(html_formatter);

        add_template(&mut env, DOCUMENT_TEMPLATE_NAME, DOCUMENT_TEMPLATE)?;
        for id in TemplateId::ALL {
            add_template(&mut env, id.markup_template_name(), id.markup_source())?;
        }

        Ok(Self {
            env,
            year: Utc::now().year(),
        })
    }

    /// Pins the footer year, making output byte-for-byte reproducible.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Produces the complete HTML document for `data`.
    ///
    /// An unrecognized `data.template` renders the default template.
    pub fn generate(&self, data: &PortfolioData) -> Result<String, ExportError> {
        let template = data.template_id();
        let style = template.style();

        let markup = MarkupContext::new(data, template, self.year);
        let body = self.render(template.markup_template_name(), markup.to_value())?;

        let html = self.render(
            DOCUMENT_TEMPLATE_NAME,
            context! {
                name => data.personal_info.name.as_str(),
                scripts => SCRIPT_ASSETS,
                stylesheets => STYLESHEET_ASSETS,
                tailwind_theme => Value::from_safe_string(style.tailwind_theme()),
                css => Value::from_safe_string(style.css.to_string()),
                shared_css => Value::from_safe_string(SHARED_CSS.to_string()),
                body_class => style.body_class,
                body => Value::from_safe_string(body),
                animation_script => Value::from_safe_string(style.animation_script.to_string()),
            },
        )?;

        tracing::debug!(
            template = %template,
            bytes = html.len(),
            "generated portfolio document"
        );

        Ok(html)
    }

    fn render(&self, name: &'static str, ctx: Value) -> Result<String, ExportError> {
        self.env
            .get_template(name)
            .and_then(|tmpl| tmpl.render(ctx))
            .map_err(|source| ExportError::Render {
                template: name,
                source,
            })
    }
}

fn add_template(
    env: &mut Environment<'static>,
    name: &'static str,
    source: &'static str,
) -> Result<(), ExportError> {
    env.add_template(name, source)
        .map_err(|source| ExportError::Render {
            template: name,
            source,
        })
}

/// Generates a document with a fresh [`DocumentGenerator`].
///
/// Callers producing several documents should build one generator and reuse it.
pub fn generate_document(data: &PortfolioData) -> Result<String, ExportError> {
    DocumentGenerator::new()?.generate(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PersonalInfo, Skill};
    use pretty_assertions::assert_eq;

    fn generator() -> DocumentGenerator {
        DocumentGenerator::new().unwrap().with_year(2024)
    }

    fn data() -> PortfolioData {
        PortfolioData::new(PersonalInfo::new("Jane Doe", "Engineer", "Builds things."))
    }

    #[test]
    fn document_starts_with_doctype() {
        let html = generator().generate(&data()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn head_carries_metadata_and_assets() {
        let html = generator().generate(&data()).unwrap();
        assert!(html.contains(r#"<meta charset="UTF-8">"#));
        assert!(html.contains(r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#));
        assert!(html.contains("<title>Jane Doe - Portfolio</title>"));
        for src in SCRIPT_ASSETS {
            assert!(html.contains(&format!(r#"<script src="{src}"></script>"#)), "{src}");
        }
        for href in STYLESHEET_ASSETS {
            assert!(html.contains(&format!(r#"<link rel="stylesheet" href="{href}">"#)), "{href}");
        }
    }

    #[test]
    fn applies_style_bundle() {
        let data = data().with_template(TemplateId::MonoGrid);
        let html = generator().generate(&data).unwrap();
        let style = TemplateId::MonoGrid.style();

        assert!(html.contains(&format!(r#"<body class="{}">"#, style.body_class)));
        assert!(html.contains(r##"extend: {"colors":{"primary":"#65a30d"}}"##));
        assert!(html.contains(".text-reveal.animated"));
        assert!(html.contains(".animate-on-scroll.animated"));
    }

    #[test]
    fn registers_scroll_plugin_before_template_script() {
        let html = generator().generate(&data()).unwrap();
        let register = html.find("gsap.registerPlugin(ScrollTrigger);").unwrap();
        let animation = html.find("gsap.from('.hero-title'").unwrap();
        assert!(register < animation);
        assert_eq!(html.matches("gsap.registerPlugin(").count(), 1);
    }

    #[test]
    fn includes_toggle_and_reveal_observer() {
        let html = generator().generate(&data()).unwrap();
        assert!(html.contains(r#"<button id="theme-toggle""#));
        assert!(html.contains("localStorage.theme = 'dark'"));
        assert!(html.contains("{ threshold: 0.1 }"));
    }

    #[test]
    fn escapes_name_in_title() {
        let mut data = data();
        data.personal_info.name = "<Jane & Co>".to_string();
        let html = generator().generate(&data).unwrap();
        assert!(html.contains("<title>&lt;Jane &amp; Co&gt; - Portfolio</title>"));
        assert!(!html.contains("<Jane"));
    }

    #[test]
    fn pinned_year_appears_in_footer() {
        let html = generator().with_year(1999).generate(&data()).unwrap();
        assert!(html.contains("&copy; 1999 Jane Doe. All rights reserved."));
    }

    #[test]
    fn default_year_is_current() {
        let generator = DocumentGenerator::new().unwrap();
        assert_eq!(generator.year(), Utc::now().year());
    }

    #[test]
    fn every_template_renders() {
        let mut data = data();
        data.skills = vec![Skill::new("Rust", 80)];
        let generator = generator();
        for id in TemplateId::ALL {
            let html = generator.generate(&data.clone().with_template(id)).unwrap();
            assert!(html.contains(id.style().body_class), "{id}");
            assert!(html.contains(r#"data-level="80""#), "{id}");
        }
    }

    #[test]
    fn generate_document_matches_generator() {
        let data = data();
        let year = Utc::now().year();
        let expected = DocumentGenerator::new()
            .unwrap()
            .with_year(year)
            .generate(&data)
            .unwrap();
        assert_eq!(generate_document(&data).unwrap(), expected);
    }
}
