#![allow(dead_code)]

use std::collections::HashSet;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use turntable_core::color::ColorOption;
use turntable_core::config::ViewerConfig;
use turntable_core::error::{Result, TurntableError};
use turntable_core::loader::{DecodedFrame, FrameLoader};
use turntable_core::probe::LoadEvent;
use turntable_core::source::FrameRequest;

/// In-memory loader that succeeds only for the listed (color, index) pairs
/// and counts every call.
pub struct ScriptedLoader {
    present: HashSet<(String, u32)>,
    calls: AtomicUsize,
}

impl ScriptedLoader {
    pub fn new(present: &[(&str, u32)]) -> Arc<Self> {
        Arc::new(Self {
            present: present
                .iter()
                .map(|(color, index)| (color.to_string(), *index))
                .collect(),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl FrameLoader for ScriptedLoader {
    fn load(&self, request: &FrameRequest) -> Result<DecodedFrame> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self
            .present
            .contains(&(request.color_id.clone(), request.index))
        {
            Ok(tiny_frame())
        } else {
            Err(TurntableError::Http(format!("{}: 404", request.url)))
        }
    }
}

pub fn tiny_frame() -> DecodedFrame {
    DecodedFrame::new(2, 2, vec![255u8; 16])
}

pub fn ok(color: &str, index: u32) -> LoadEvent {
    LoadEvent::loaded(color, index, tiny_frame())
}

pub fn missing(color: &str, index: u32) -> LoadEvent {
    LoadEvent::failed(color, index, "not found")
}

/// Two colors: `red` auto-detects over 0..12, `blue` lists [0, 4, 8].
pub fn two_color_config() -> ViewerConfig {
    ViewerConfig::new(
        "model-x",
        vec![
            ColorOption::new("red", "Racing Red", "#c1121f"),
            ColorOption::new("blue", "Deep Blue", "#003049").with_frames(vec![8, 0, 4]),
        ],
    )
    .with_base_url("https://cdn.test/360")
    .with_total_frames(12)
}

/// Write a tiny PNG (named `.webp`) for every index under
/// `root/<normalized product>/<color>/`.
pub fn write_frame_tree(root: &Path, product_dir: &str, color: &str, indices: &[u32]) {
    let dir = root.join(product_dir).join(color);
    std::fs::create_dir_all(&dir).expect("create frame dir");
    for &index in indices {
        let img = image::RgbaImage::from_pixel(4, 4, image::Rgba([10, 20, 30, 255]));
        img.save_with_format(dir.join(format!("{index}.webp")), image::ImageFormat::Png)
            .expect("write frame");
    }
}
