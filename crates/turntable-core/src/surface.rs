use crate::frames::AvailableFrames;

/// One stacked image on the render surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameLayer {
    pub index: u32,
    pub opacity: f32,
    pub z: i32,
}

impl FrameLayer {
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

/// Every available frame stays on the surface; only the current one is
/// opaque and on top. Switching frames never needs a new load.
pub fn stack_layers(frames: &AvailableFrames, current: Option<u32>) -> Vec<FrameLayer> {
    frames
        .iter()
        .map(|index| {
            let shown = Some(index) == current;
            FrameLayer {
                index,
                opacity: if shown { 1.0 } else { 0.0 },
                z: i32::from(shown),
            }
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadingOverlay {
    pub loaded: usize,
    pub total: usize,
    /// Whole percent in [0, 100].
    pub percent: u8,
}

impl LoadingOverlay {
    /// `loaded / max(available, total_frames)`.
    pub fn new(loaded: usize, available: usize, total_frames: u32) -> Self {
        let total = available.max(total_frames as usize);
        let percent = if total == 0 {
            100
        } else {
            ((loaded * 100) / total).min(100) as u8
        };
        Self {
            loaded,
            total,
            percent,
        }
    }

    pub fn fraction(&self) -> f32 {
        self.percent as f32 / 100.0
    }
}

/// What the surface should show right now.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceView {
    /// Probing with frames still outstanding.
    Loading(LoadingOverlay),
    /// Probing finished and the color has no frames.
    Unavailable { color_name: String },
    /// Draw the layers; `current` may be `None` only before the first frame
    /// arrives.
    Frames { current: Option<u32> },
}
