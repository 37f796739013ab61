mod app;
mod convert;
mod messages;
mod panels;
mod session;
mod states;
mod textures;

use std::path::PathBuf;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Optional product file to open at startup.
    let initial = std::env::args_os().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Turntable"),
        ..Default::default()
    };

    eframe::run_native(
        "Turntable",
        options,
        Box::new(|cc| Ok(Box::new(app::TurntableApp::new(&cc.egui_ctx, initial)))),
    )
}
