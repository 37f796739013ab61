use crate::app::TurntableApp;
use crate::convert::rgb_to_color32;

const SWATCH_RADIUS: f32 = 9.0;

/// Color picker strip. Clicking a swatch restarts probing for that color.
pub fn show(ctx: &egui::Context, app: &mut TurntableApp) {
    let Some(session) = app.session.as_ref() else {
        return;
    };

    let selected = session.viewer.selected_index();
    let swatches: Vec<(String, egui::Color32)> = session
        .viewer
        .colors()
        .iter()
        .map(|c| {
            let fill = c.swatch().map(rgb_to_color32).unwrap_or(egui::Color32::GRAY);
            (c.name.clone(), fill)
        })
        .collect();

    let mut clicked = None;
    egui::TopBottomPanel::top("colors").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            for (i, (name, fill)) in swatches.iter().enumerate() {
                if swatch(ui, name, *fill, i == selected).clicked() {
                    clicked = Some(i);
                }
            }
        });
        ui.add_space(4.0);
    });

    if let Some(i) = clicked {
        app.select_color(i);
    }
}

fn swatch(ui: &mut egui::Ui, name: &str, fill: egui::Color32, selected: bool) -> egui::Response {
    let size = egui::vec2(SWATCH_RADIUS * 2.0 + 4.0, SWATCH_RADIUS * 2.0 + 4.0);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    let painter = ui.painter();

    painter.circle_filled(rect.center(), SWATCH_RADIUS, fill);
    let ring = if selected {
        egui::Stroke::new(2.0, ui.visuals().selection.stroke.color)
    } else {
        egui::Stroke::new(1.0, egui::Color32::from_gray(90))
    };
    painter.circle_stroke(rect.center(), SWATCH_RADIUS + 1.0, ring);

    let label = if selected {
        egui::RichText::new(name).strong()
    } else {
        egui::RichText::new(name)
    };
    ui.label(label);
    ui.add_space(8.0);

    response.on_hover_text(name)
}
