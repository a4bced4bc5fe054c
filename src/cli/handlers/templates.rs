//! Handler for the `templates` command.

use anyhow::Result;

use crate::cli::TemplatesArgs;
use crate::cli::output::{Output, OutputFormat, TemplateListing};
use crate::domain::TemplateId;
use crate::export::list_templates;

pub fn handle_templates(args: &TemplatesArgs) -> Result<()> {
    match args.format {
        OutputFormat::Human => {
            for meta in list_templates() {
                let marker = if meta.id == TemplateId::DEFAULT { " (default)" } else { "" };
                println!("{:<14} {}{}", meta.id.as_str(), meta.name, marker);
                println!("{:<14} {}", "", meta.description);
            }
        }
        OutputFormat::Json => {
            let listings: Vec<_> = list_templates().iter().map(TemplateListing::from).collect();
            Output::new(listings).print()?;
        }
    }
    Ok(())
}
