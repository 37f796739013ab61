use serde::{Deserialize, Serialize};

use crate::error::{Result, TurntableError};

/// One selectable paint color of a product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorOption {
    /// Directory name of the color on the asset host.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Swatch color as `#RRGGBB` or `#RGB`.
    pub hex: String,
    /// Optional backdrop painted behind the frames.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Known-good frame indices. When absent the viewer auto-detects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frames: Option<Vec<u32>>,
}

impl ColorOption {
    pub fn new(id: impl Into<String>, name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            hex: hex.into(),
            background: None,
            frames: None,
        }
    }

    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = Some(background.into());
        self
    }

    pub fn with_frames(mut self, frames: Vec<u32>) -> Self {
        self.frames = Some(frames);
        self
    }

    pub fn swatch(&self) -> Result<Rgb8> {
        Rgb8::parse_hex(&self.hex)
    }

    pub fn backdrop(&self) -> Result<Option<Rgb8>> {
        self.background.as_deref().map(Rgb8::parse_hex).transpose()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    /// Parse `#RRGGBB` or the `#RGB` shorthand. The leading `#` is optional.
    pub fn parse_hex(value: &str) -> Result<Self> {
        let invalid = || TurntableError::InvalidColor(value.to_string());
        let digits = value.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match digits.len() {
            6 => Ok(Self {
                r: channel(&digits[0..2])?,
                g: channel(&digits[2..4])?,
                b: channel(&digits[4..6])?,
            }),
            3 => {
                let expand = |s: &str| channel(s).map(|v| v * 17);
                Ok(Self {
                    r: expand(&digits[0..1])?,
                    g: expand(&digits[1..2])?,
                    b: expand(&digits[2..3])?,
                })
            }
            _ => Err(invalid()),
        }
    }

    /// Perceived brightness in [0, 1], BT.601 weights.
    pub fn luminance(&self) -> f32 {
        (0.299 * self.r as f32 + 0.587 * self.g as f32 + 0.114 * self.b as f32) / 255.0
    }
}

impl std::fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
