use std::path::PathBuf;
use std::sync::mpsc;

use turntable_core::config::ViewerConfig;
use turntable_core::viewer::ViewerPhase;

use crate::messages::AppMessage;
use crate::panels;
use crate::session::ViewerSession;
use crate::states::UIState;
use crate::textures::TextureStore;

pub struct TurntableApp {
    pub msg_tx: mpsc::Sender<AppMessage>,
    pub msg_rx: mpsc::Receiver<AppMessage>,
    pub session: Option<ViewerSession>,
    pub textures: TextureStore,
    pub ui_state: UIState,
    pub show_about: bool,
}

impl TurntableApp {
    pub fn new(ctx: &egui::Context, initial: Option<PathBuf>) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        let mut app = Self {
            msg_tx,
            msg_rx,
            session: None,
            textures: TextureStore::default(),
            ui_state: UIState::default(),
            show_about: false,
        };

        if let Some(path) = initial {
            match ViewerConfig::load(&path) {
                Ok(config) => app.open_product(ctx, path, config),
                Err(e) => app
                    .ui_state
                    .add_log(format!("ERROR: {}: {e}", path.display())),
            }
        }
        app
    }

    pub fn open_product(&mut self, ctx: &egui::Context, path: PathBuf, config: ViewerConfig) {
        // Drop the old session first so its pending loads are cancelled.
        self.session = None;
        self.textures.clear();
        self.ui_state.last_phase = None;

        let product = config.product_id.clone();
        let colors = config.colors.len();
        match ViewerSession::open(config, ctx) {
            Ok(session) => {
                self.ui_state.add_log(format!(
                    "Opened: {} ({product}, {colors} colors)",
                    path.display()
                ));
                self.session = Some(session);
                self.ui_state.product_path = Some(path);
            }
            Err(e) => self
                .ui_state
                .add_log(format!("ERROR: failed to open {product}: {e:#}")),
        }
    }

    pub fn select_color(&mut self, index: usize) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if let Err(e) = session.select_color(index) {
            self.ui_state.add_log(format!("ERROR: {e:#}"));
        }
    }

    /// Drain helper-thread messages and completed frame loads.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(msg) = self.msg_rx.try_recv() {
            match msg {
                AppMessage::ProductOpened { path, config } => {
                    self.open_product(ctx, path, config);
                }
                AppMessage::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
            }
        }

        let Some(session) = self.session.as_mut() else {
            return;
        };
        let textures = &mut self.textures;
        session.drain(|color_id, index, frame| {
            textures.insert(ctx, color_id, index, frame);
        });

        let phase = session.viewer.phase();
        if self.ui_state.last_phase != Some(phase) {
            let color = session.viewer.selected_color().name.clone();
            match phase {
                ViewerPhase::Ready => self.ui_state.add_log(format!(
                    "{color}: {} frames",
                    session.viewer.available().len()
                )),
                ViewerPhase::Empty => self
                    .ui_state
                    .add_log(format!("{color}: no frames available")),
                ViewerPhase::Probing => self.ui_state.add_log(format!("{color}: loading")),
                ViewerPhase::Init => {}
            }
            self.ui_state.last_phase = Some(phase);
        }
    }
}

impl eframe::App for TurntableApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::colors::show(ctx, self);
        panels::status::show(ctx, self);
        panels::viewport::show(ctx, self);

        if self.show_about {
            egui::Window::new("About Turntable")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Turntable");
                        ui.label("360° product viewer");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
