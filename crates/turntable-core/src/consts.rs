/// Number of frame indices probed in auto-detect mode when the product does
/// not say otherwise.
pub const DEFAULT_TOTAL_FRAMES: u32 = 24;

/// Asset host prefix used when a product file does not name one.
pub const DEFAULT_BASE_URL: &str = "https://cdn.turntable-assets.net/360";

/// File extension of every frame asset.
pub const FRAME_EXTENSION: &str = "webp";

/// Frames advanced per pixel of horizontal drag on the image surface.
/// 0.1 means one frame per 10 px.
pub const DEFAULT_DRAG_SENSITIVITY: f32 = 0.1;

/// Upper bound on simultaneous in-flight frame loads.
pub const DEFAULT_MAX_CONCURRENT_LOADS: usize = 8;

/// Shown in place of the image when a color resolves with zero frames.
pub const UNAVAILABLE_MESSAGE: &str =
    "360° view is not available for this color. Please choose a different color.";
