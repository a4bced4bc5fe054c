//! Style bundles: per-template CSS, body class and animation script.

use serde_json::{Map, Value, json};

/// Everything a template contributes to the document head and trailing script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleBundle {
    /// Utility classes placed on `<body>`.
    pub body_class: &'static str,
    /// Template CSS, emitted before the shared rules.
    pub css: &'static str,
    /// Script run after the shared reveal observer is wired up.
    pub animation_script: &'static str,
    /// Named color tokens merged into the Tailwind theme.
    pub colors: &'static [(&'static str, &'static str)],
}

impl StyleBundle {
    /// Tailwind `theme.extend` object for this bundle, as JSON.
    pub fn tailwind_theme(&self) -> String {
        let colors: Map<String, Value> = self
            .colors
            .iter()
            .map(|(token, hex)| ((*token).to_string(), Value::from(*hex)))
            .collect();
        json!({ "colors": colors }).to_string()
    }
}

/// Reveal-on-scroll and scrollbar rules shared by every template.
pub const SHARED_CSS: &str = r#"
  .animate-on-scroll {
    opacity: 0;
    transform: translateY(20px);
    transition: opacity 0.6s ease, transform 0.6s ease;
  }
  .animate-on-scroll.animated {
    opacity: 1;
    transform: translateY(0);
  }
  ::-webkit-scrollbar { width: 8px; }
  ::-webkit-scrollbar-track { background: #f1f1f1; }
  ::-webkit-scrollbar-thumb { background: #888; border-radius: 4px; }
  ::-webkit-scrollbar-thumb:hover { background: #555; }
  .dark ::-webkit-scrollbar-track { background: #1a1a1a; }
  .dark ::-webkit-scrollbar-thumb { background: #555; }
  .dark ::-webkit-scrollbar-thumb:hover { background: #777; }
"#;

/// Appends the `.animate-section` entrance animation to a template script.
///
/// The second argument is the starting vertical offset in pixels; only the
/// offsets the templates use are accepted.
macro_rules! with_section_entrance {
    ($script:literal, 30) => {
        concat!(
            $script,
            r#"
    document.querySelectorAll('.animate-section').forEach(section => {
      gsap.from(section, {
        y: 30,
        opacity: 0,
        duration: 0.8,
        scrollTrigger: { trigger: section, start: 'top 80%' }
      });
    });
"#
        )
    };
    ($script:literal, 50) => {
        concat!(
            $script,
            r#"
    document.querySelectorAll('.animate-section').forEach(section => {
      gsap.from(section, {
        y: 50,
        opacity: 0,
        duration: 0.8,
        scrollTrigger: { trigger: section, start: 'top 80%' }
      });
    });
"#
        )
    };
}

pub(crate) use with_section_entrance;
