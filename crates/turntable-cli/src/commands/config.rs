use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use turntable_core::config::ViewerConfig;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write the product file instead of printing it
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print or save an example product file as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let toml_str = ViewerConfig::example().to_toml_string()?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write product file to {}", path.display()))?;
        println!("Example product saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}
