use std::path::PathBuf;

use turntable_core::config::ViewerConfig;

use crate::app::TurntableApp;
use crate::messages::AppMessage;

pub fn show(ctx: &egui::Context, app: &mut TurntableApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui.add(egui::Button::new("Open Product...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    open_product(app);
                }

                if ui.button("Reload").clicked() {
                    ui.close();
                    reload_product(app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O))) {
            open_product(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

fn open_product(app: &mut TurntableApp) {
    let msg_tx = app.msg_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Product files", &["toml"])
            .add_filter("All files", &["*"])
            .pick_file()
        {
            let _ = msg_tx.send(load_message(path));
        }
    });
}

/// Re-read the current product file. The new session starts with an empty
/// cache.
fn reload_product(app: &mut TurntableApp) {
    if let Some(path) = app.ui_state.product_path.clone() {
        let _ = app.msg_tx.send(load_message(path));
    }
}

fn load_message(path: PathBuf) -> AppMessage {
    match ViewerConfig::load(&path) {
        Ok(config) => AppMessage::ProductOpened { path, config },
        Err(e) => AppMessage::Error {
            message: format!("{}: {e}", path.display()),
        },
    }
}
