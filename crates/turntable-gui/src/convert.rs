use turntable_core::loader::DecodedFrame;

/// Convert a decoded RGBA8 frame to an egui ColorImage.
pub fn frame_to_color_image(frame: &DecodedFrame) -> egui::ColorImage {
    egui::ColorImage::from_rgba_unmultiplied(
        [frame.width as usize, frame.height as usize],
        &frame.rgba,
    )
}

pub fn rgb_to_color32(rgb: turntable_core::color::Rgb8) -> egui::Color32 {
    egui::Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}
