use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use turntable_core::config::ViewerConfig;

use crate::summary::print_product_summary;

#[derive(Args)]
pub struct InfoArgs {
    /// Product file (TOML)
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let config = ViewerConfig::load(&args.file)
        .with_context(|| format!("Failed to read product file {}", args.file.display()))?;
    print_product_summary(&config);
    Ok(())
}
