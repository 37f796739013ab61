use turntable_core::consts::UNAVAILABLE_MESSAGE;
use turntable_core::navigation::NavKey;
use turntable_core::surface::{LoadingOverlay, SurfaceView};

use crate::app::TurntableApp;
use crate::convert::rgb_to_color32;
use crate::panels::slider;
use crate::session::ViewerSession;
use crate::textures::TextureStore;

const SLIDER_HEIGHT: f32 = 32.0;

pub fn show(ctx: &egui::Context, app: &mut TurntableApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();

        let Some(session) = app.session.as_mut() else {
            paint_background(ui, rect, egui::Color32::from_gray(30));
            show_placeholder(ui);
            return;
        };

        let backdrop = session
            .viewer
            .selected_color()
            .backdrop()
            .ok()
            .flatten()
            .map(rgb_to_color32)
            .unwrap_or(egui::Color32::from_gray(30));
        paint_background(ui, rect, backdrop);

        let (image_rect, slider_rect) = split_rect(rect);
        let response = ui.allocate_rect(image_rect, egui::Sense::click_and_drag());

        handle_drag(&response, session);
        handle_keys(ui, session);
        draw_layers(ui, session, &app.textures, image_rect);

        match session.viewer.view() {
            SurfaceView::Loading(overlay) => draw_loading(ui, image_rect, &overlay),
            SurfaceView::Unavailable { color_name } => {
                draw_unavailable(ui, image_rect, &color_name)
            }
            SurfaceView::Frames { current } => {
                if let Some(index) = current {
                    draw_frame_label(ui, image_rect, index);
                }
            }
        }

        slider::show(ui, slider_rect, &mut session.viewer);
    });
}

fn split_rect(rect: egui::Rect) -> (egui::Rect, egui::Rect) {
    let split = (rect.bottom() - SLIDER_HEIGHT).max(rect.top());
    let image = egui::Rect::from_min_max(rect.min, egui::pos2(rect.right(), split));
    let slider = egui::Rect::from_min_max(egui::pos2(rect.left(), split), rect.max);
    (image, slider)
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect, color: egui::Color32) {
    ui.painter().rect_filled(rect, 0.0, color);
}

fn handle_drag(response: &egui::Response, session: &mut ViewerSession) {
    if response.drag_started_by(egui::PointerButton::Primary) {
        if let Some(pos) = response.interact_pointer_pos() {
            session.viewer.drag_start(pos.x);
        }
    }
    if response.dragged_by(egui::PointerButton::Primary) {
        if let Some(pos) = response.interact_pointer_pos() {
            session.viewer.drag_move(pos.x);
        }
    }
    if response.drag_stopped() {
        session.viewer.drag_end();
    }
}

fn handle_keys(ui: &egui::Ui, session: &mut ViewerSession) {
    let (left, right) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::ArrowLeft),
            i.key_pressed(egui::Key::ArrowRight),
        )
    });
    if left {
        session.viewer.key(NavKey::ArrowLeft);
    }
    if right {
        session.viewer.key(NavKey::ArrowRight);
    }
}

/// Paint the stacked frames back to front, skipping transparent layers.
fn draw_layers(ui: &egui::Ui, session: &ViewerSession, textures: &TextureStore, area: egui::Rect) {
    let color_id = &session.viewer.selected_color().id;
    let mut layers = session.viewer.layers();
    layers.sort_by_key(|l| l.z);

    for layer in layers.iter().filter(|l| l.is_visible()) {
        let Some(texture) = textures.get(color_id, layer.index) else {
            continue;
        };
        let size = texture.size_vec2();
        let img_rect = fit_rect(area, size);
        let alpha = (layer.opacity.clamp(0.0, 1.0) * 255.0) as u8;
        ui.painter().image(
            texture.id(),
            img_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::from_white_alpha(alpha),
        );
    }
}

/// Largest rect with the image's aspect ratio centered in `area`.
fn fit_rect(area: egui::Rect, image_size: egui::Vec2) -> egui::Rect {
    if image_size.x <= 0.0 || image_size.y <= 0.0 {
        return area;
    }
    let scale = (area.width() / image_size.x).min(area.height() / image_size.y);
    egui::Rect::from_center_size(area.center(), image_size * scale)
}

fn draw_loading(ui: &egui::Ui, area: egui::Rect, overlay: &LoadingOverlay) {
    ui.painter()
        .rect_filled(area, 0.0, egui::Color32::from_black_alpha(140));

    let spinner_rect = egui::Rect::from_center_size(area.center(), egui::vec2(36.0, 36.0));
    egui::Spinner::new().paint_at(ui, spinner_rect);

    ui.painter().text(
        area.center() + egui::vec2(0.0, 34.0),
        egui::Align2::CENTER_TOP,
        format!("Loading 360° view... {}%", overlay.percent),
        egui::FontId::proportional(15.0),
        egui::Color32::from_white_alpha(220),
    );
}

fn draw_unavailable(ui: &egui::Ui, area: egui::Rect, color_name: &str) {
    ui.painter().text(
        area.center() - egui::vec2(0.0, 12.0),
        egui::Align2::CENTER_CENTER,
        color_name,
        egui::FontId::proportional(18.0),
        egui::Color32::from_gray(200),
    );
    ui.painter().text(
        area.center() + egui::vec2(0.0, 12.0),
        egui::Align2::CENTER_CENTER,
        UNAVAILABLE_MESSAGE,
        egui::FontId::proportional(14.0),
        egui::Color32::from_gray(160),
    );
}

fn draw_frame_label(ui: &egui::Ui, area: egui::Rect, index: u32) {
    ui.painter().text(
        area.left_top() + egui::vec2(8.0, 8.0),
        egui::Align2::LEFT_TOP,
        format!("Frame {index}"),
        egui::FontId::proportional(13.0),
        egui::Color32::from_white_alpha(160),
    );
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Open a product file to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
