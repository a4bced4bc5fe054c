//! Export engine: the template registry and the HTML document generator.
//!
//! A document is built in two phases. The template's style bundle and body
//! markup are resolved from its [`TemplateId`](crate::domain::TemplateId),
//! then both are placed into the shared skeleton in [`document`].

pub mod document;
mod html;
pub mod registry;
mod style;
mod templates;

pub use document::{
    DOCUMENT_TEMPLATE, DocumentGenerator, ExportError, SCRIPT_ASSETS, STYLESHEET_ASSETS,
    generate_document,
};
pub use html::escape_html;
pub use registry::{PreviewSwatch, TemplateMeta, get_template_by_id, list_templates};
pub use style::{SHARED_CSS, StyleBundle};
pub use templates::TestimonialPolicy;
