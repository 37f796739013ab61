use std::collections::HashMap;

use turntable_core::loader::DecodedFrame;

use crate::convert::frame_to_color_image;

/// Uploaded frame textures, one per (color, index). Kept for the lifetime of
/// the open product so revisiting a frame or a color never re-decodes.
#[derive(Default)]
pub struct TextureStore {
    textures: HashMap<(String, u32), egui::TextureHandle>,
}

impl TextureStore {
    pub fn insert(&mut self, ctx: &egui::Context, color_id: &str, index: u32, frame: &DecodedFrame) {
        let key = (color_id.to_string(), index);
        if self.textures.contains_key(&key) {
            return;
        }
        let texture = ctx.load_texture(
            format!("frame-{color_id}-{index}"),
            frame_to_color_image(frame),
            egui::TextureOptions::LINEAR,
        );
        self.textures.insert(key, texture);
    }

    pub fn get(&self, color_id: &str, index: u32) -> Option<&egui::TextureHandle> {
        self.textures.get(&(color_id.to_string(), index))
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn clear(&mut self) {
        self.textures.clear();
    }
}
