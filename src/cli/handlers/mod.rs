//! Command handlers for the CLI.

mod check;
mod completions;
mod export;
mod sample;
mod templates;

pub use check::handle_check;
pub use completions::handle_completions;
pub use export::{handle_export, resolve_output_path};
pub use sample::handle_sample;
pub use templates::handle_templates;
