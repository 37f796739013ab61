use crate::app::TurntableApp;

pub fn show(ctx: &egui::Context, app: &mut TurntableApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        let overlay = app.session.as_ref().and_then(|s| s.viewer.overlay());
        match overlay {
            Some(overlay) => {
                ui.add(
                    egui::ProgressBar::new(overlay.fraction())
                        .text(format!(
                            "Loading frames ({}/{})",
                            overlay.loaded, overlay.total
                        ))
                        .animate(true),
                );
            }
            None => {
                // Same height as the live bar.
                ui.add(egui::ProgressBar::new(0.0).text(""));
            }
        }

        // Log area: fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.separator();
        ui.horizontal(|ui| match app.session.as_ref() {
            Some(session) => {
                let viewer = &session.viewer;
                ui.label(&session.config.product_id);
                ui.separator();
                ui.label(&viewer.selected_color().name);
                ui.separator();
                let position = viewer
                    .current_frame()
                    .and_then(|c| viewer.available().position(c))
                    .map(|p| p + 1)
                    .unwrap_or(0);
                ui.label(format!(
                    "Frame {position}/{}",
                    viewer.available().len()
                ));
                ui.separator();
                ui.label(viewer.phase().to_string());
                ui.separator();
                ui.label(format!("{} textures", app.textures.len()));
            }
            None => {
                ui.label("No product");
            }
        });
    });
}
