use crate::frames::AvailableFrames;

/// Keys that rotate the view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
}

/// Gesture state shared by the image drag and the slider.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavigationState {
    pub dragging: bool,
    pub last_x: f32,
    pub slider_dragging: bool,
}

impl NavigationState {
    /// Begin an image drag. Refused while the slider is held.
    pub fn begin_drag(&mut self, x: f32) -> bool {
        if self.slider_dragging {
            return false;
        }
        self.dragging = true;
        self.last_x = x;
        true
    }

    /// Whole frame steps produced by moving the pointer to `x`.
    /// `last_x` only advances when a step is taken so slow drags accumulate.
    pub fn drag_to(&mut self, x: f32, sensitivity: f32) -> i64 {
        if !self.dragging || self.slider_dragging {
            return 0;
        }
        let steps = drag_steps(x - self.last_x, sensitivity);
        if steps != 0 {
            self.last_x = x;
        }
        steps
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
        self.last_x = 0.0;
    }

    pub fn begin_slider(&mut self) {
        self.slider_dragging = true;
        self.dragging = false;
    }

    pub fn end_slider(&mut self) {
        self.slider_dragging = false;
    }
}

/// `trunc(dx * sensitivity)`, toward zero.
pub fn drag_steps(dx: f32, sensitivity: f32) -> i64 {
    let scaled = dx * sensitivity;
    if !scaled.is_finite() {
        return 0;
    }
    scaled.trunc() as i64
}

/// Normalize a pointer x coordinate on a slider track to [0, 1].
pub fn track_ratio(x: f32, track_left: f32, track_width: f32) -> f32 {
    if track_width <= 0.0 {
        return 0.0;
    }
    ((x - track_left) / track_width).clamp(0.0, 1.0)
}

/// `floor(ratio * (len - 1))`, clamped to a valid position.
pub fn slider_index(len: usize, ratio: f32) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
    let pos = (ratio * (len - 1) as f32).floor() as usize;
    Some(pos.min(len - 1))
}

/// Move `delta` positions from `current`, wrapping at both ends.
/// A `current` that is not in the set snaps to the first frame.
pub fn step_within(frames: &AvailableFrames, current: Option<u32>, delta: i64) -> Option<u32> {
    let len = frames.len() as i64;
    if len == 0 {
        return None;
    }
    let Some(pos) = current.and_then(|c| frames.position(c)) else {
        return frames.first();
    };
    let next = (pos as i64 + delta.rem_euclid(len)) % len;
    frames.nth(next as usize)
}

/// Position within the slider as a ratio in [0, 1], for drawing the thumb.
pub fn position_ratio(frames: &AvailableFrames, current: Option<u32>) -> f32 {
    let len = frames.len();
    match current.and_then(|c| frames.position(c)) {
        Some(pos) if len > 1 => pos as f32 / (len - 1) as f32,
        _ => 0.0,
    }
}
