//! Handler for the `sample` command.

use anyhow::{Context, Result};

use crate::cli::SampleArgs;
use crate::domain::PortfolioData;
use crate::infra::write_atomic;

pub fn handle_sample(args: &SampleArgs) -> Result<()> {
    let json = PortfolioData::sample().to_json_pretty();

    match &args.output {
        Some(path) => {
            write_atomic(path, &json)
                .with_context(|| format!("failed to write sample data to {}", path.display()))?;
            println!("Wrote sample data to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
