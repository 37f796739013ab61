use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use console::Style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;
use turntable_core::config::ViewerConfig;
use turntable_core::consts::UNAVAILABLE_MESSAGE;
use turntable_core::executor::{drive_to_completion, ProbeExecutor};
use turntable_core::loader::loader_for_base;
use turntable_core::viewer::{FrameViewer, ViewerPhase};

#[derive(Args)]
pub struct ProbeArgs {
    /// Product file (TOML)
    pub file: PathBuf,

    /// Probe only this color id
    #[arg(long)]
    pub color: Option<String>,

    /// Override the product's asset host prefix (URL or local directory)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Maximum simultaneous frame loads
    #[arg(long)]
    pub concurrency: Option<usize>,
}

pub fn run(args: &ProbeArgs) -> Result<()> {
    let mut config = ViewerConfig::load(&args.file)
        .with_context(|| format!("Failed to read product file {}", args.file.display()))?;
    if let Some(ref base) = args.base_url {
        config.base_url = base.clone();
    }
    if let Some(n) = args.concurrency {
        config.max_concurrent_loads = n;
    }

    let targets: Vec<usize> = match args.color {
        Some(ref id) => vec![config.color_index(id)?],
        None => (0..config.colors.len()).collect(),
    };

    let loader = loader_for_base(&config.base_url)?;
    let executor = ProbeExecutor::new(loader, config.max_concurrent_loads)?;
    let mut viewer = FrameViewer::new(&config)?;

    let ok = Style::new().green();
    let empty = Style::new().dim().yellow();
    let label = Style::new().bold();

    println!(
        "Probing {} ({} colors) at {}",
        config.product_id,
        targets.len(),
        config.base_url
    );

    for index in targets {
        let requests = viewer.select_color(index)?;
        let total = requests.len();

        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{msg} [{bar:40}] {pos}/{len}")?
                .progress_chars("=> "),
        );
        pb.set_message(format!("{:<12}", viewer.selected_color().id));

        let phase = drive_to_completion(&mut viewer, &executor, requests, |v| {
            pb.set_position((total - v.pending()) as u64);
        });
        pb.finish_and_clear();
        debug!(
            "Color {} finished {phase}: {} frames available, {total} requested",
            viewer.selected_color().id,
            viewer.available().len()
        );

        let color = viewer.selected_color();
        let mode = viewer
            .probe_mode()
            .map(|m| m.to_string())
            .unwrap_or_default();
        match phase {
            ViewerPhase::Ready => println!(
                "  {:<12} {:<24} {} {:?}",
                label.apply_to(&color.id),
                mode,
                ok.apply_to(format!("{} frames", viewer.available().len())),
                viewer.available().to_vec()
            ),
            ViewerPhase::Empty => println!(
                "  {:<12} {:<24} {}",
                label.apply_to(&color.id),
                mode,
                empty.apply_to(UNAVAILABLE_MESSAGE)
            ),
            other => println!(
                "  {:<12} {:<24} interrupted ({other})",
                label.apply_to(&color.id),
                mode
            ),
        }
    }

    Ok(())
}
