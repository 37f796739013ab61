use turntable_core::navigation::track_ratio;
use turntable_core::viewer::FrameViewer;

const TRACK_INSET: f32 = 16.0;
const THUMB_RADIUS: f32 = 7.0;

/// Frame scrubber under the image. One tick per available frame.
pub fn show(ui: &mut egui::Ui, rect: egui::Rect, viewer: &mut FrameViewer) {
    let track = rect.shrink2(egui::vec2(TRACK_INSET, 0.0));
    if track.width() <= 0.0 {
        return;
    }
    let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

    let pressed = response.is_pointer_button_down_on();
    if pressed {
        if let Some(pos) = response.interact_pointer_pos() {
            let ratio = track_ratio(pos.x, track.left(), track.width());
            if viewer.navigation().slider_dragging {
                viewer.slider_move(ratio);
            } else {
                viewer.slider_press(ratio);
            }
        }
    } else if viewer.navigation().slider_dragging {
        viewer.slider_release();
    }

    paint(ui, track, viewer, pressed || response.hovered());
}

fn paint(ui: &egui::Ui, track: egui::Rect, viewer: &FrameViewer, active: bool) {
    let painter = ui.painter();
    let y = track.center().y;
    let visuals = ui.visuals();

    painter.line_segment(
        [egui::pos2(track.left(), y), egui::pos2(track.right(), y)],
        egui::Stroke::new(3.0, visuals.widgets.inactive.bg_fill),
    );

    let available = viewer.available();
    let len = available.len();
    if len == 0 {
        return;
    }

    if len > 1 {
        let tick = egui::Stroke::new(1.0, visuals.weak_text_color());
        for i in 0..len {
            let x = track.left() + track.width() * i as f32 / (len - 1) as f32;
            painter.line_segment([egui::pos2(x, y - 4.0), egui::pos2(x, y + 4.0)], tick);
        }
    }

    let thumb_x = track.left() + track.width() * viewer.slider_ratio();
    let fill = if active {
        visuals.selection.bg_fill
    } else {
        visuals.widgets.active.bg_fill
    };
    painter.circle_filled(egui::pos2(thumb_x, y), THUMB_RADIUS, fill);
}
