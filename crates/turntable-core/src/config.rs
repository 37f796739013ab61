use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::ColorOption;
use crate::consts::{
    DEFAULT_BASE_URL, DEFAULT_DRAG_SENSITIVITY, DEFAULT_MAX_CONCURRENT_LOADS, DEFAULT_TOTAL_FRAMES,
};
use crate::error::{Result, TurntableError};
use crate::source::FrameResolver;

/// Everything a viewer needs for one product. Usually read from a TOML
/// product file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    pub product_id: String,
    /// Upper bound for auto-detect probing (indices `0..total_frames`).
    #[serde(default = "default_total_frames")]
    pub total_frames: u32,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_drag_sensitivity")]
    pub drag_sensitivity: f32,
    #[serde(default = "default_max_concurrent_loads")]
    pub max_concurrent_loads: usize,
    /// First entry is the default selection.
    pub colors: Vec<ColorOption>,
}

fn default_total_frames() -> u32 {
    DEFAULT_TOTAL_FRAMES
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_drag_sensitivity() -> f32 {
    DEFAULT_DRAG_SENSITIVITY
}

fn default_max_concurrent_loads() -> usize {
    DEFAULT_MAX_CONCURRENT_LOADS
}

impl ViewerConfig {
    pub fn new(product_id: impl Into<String>, colors: Vec<ColorOption>) -> Self {
        Self {
            product_id: product_id.into(),
            total_frames: DEFAULT_TOTAL_FRAMES,
            base_url: DEFAULT_BASE_URL.to_string(),
            drag_sensitivity: DEFAULT_DRAG_SENSITIVITY,
            max_concurrent_loads: DEFAULT_MAX_CONCURRENT_LOADS,
            colors,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_total_frames(mut self, total_frames: u32) -> Self {
        self.total_frames = total_frames;
        self
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.colors.is_empty() {
            return Err(TurntableError::NoColors);
        }
        if self.total_frames == 0 {
            return Err(TurntableError::InvalidFrameCount(self.total_frames));
        }
        if !self.drag_sensitivity.is_finite() || self.drag_sensitivity <= 0.0 {
            return Err(TurntableError::InvalidDragSensitivity(self.drag_sensitivity));
        }
        for color in &self.colors {
            color.swatch()?;
            color.backdrop()?;
        }
        Ok(())
    }

    pub fn resolver(&self) -> FrameResolver {
        FrameResolver::new(self.base_url.clone(), self.product_id.clone())
    }

    pub fn color_index(&self, color_id: &str) -> Result<usize> {
        self.colors
            .iter()
            .position(|c| c.id == color_id)
            .ok_or_else(|| TurntableError::UnknownColor(color_id.to_string()))
    }

    /// Sample product used by `turntable config`.
    pub fn example() -> Self {
        Self::new(
            "model-x",
            vec![
                ColorOption::new("white", "Pearl White", "#f4f4f2").with_background("#e9ecef"),
                ColorOption::new("black", "Obsidian Black", "#1b1b1d")
                    .with_frames(vec![0, 3, 6, 9, 12, 15, 18, 21]),
            ],
        )
    }
}
