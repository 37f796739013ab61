use anyhow::Result;
use clap::Args;
use turntable_core::consts::DEFAULT_BASE_URL;
use turntable_core::source::frame_url;

#[derive(Args)]
pub struct UrlArgs {
    /// Product id (dashes become underscores)
    pub product: String,

    /// Color id
    pub color: String,

    /// Frame index
    pub index: u32,

    /// Asset host prefix
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}

pub fn run(args: &UrlArgs) -> Result<()> {
    println!(
        "{}",
        frame_url(&args.base_url, &args.product, &args.color, args.index)
    );
    Ok(())
}
