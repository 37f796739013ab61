use crate::consts::FRAME_EXTENSION;

/// Replace every `-` separator in a product id with `_`, the convention used
/// by the asset host's directory layout.
pub fn normalize_product_id(product_id: &str) -> String {
    product_id.replace('-', "_")
}

/// Build the asset URL for one frame:
/// `{base}/{normalized product}/{color}/{index}.webp`.
///
/// The base is used verbatim. Malformed inputs produce a URL that simply
/// fails to load.
pub fn frame_url(base_url: &str, product_id: &str, color_id: &str, index: u32) -> String {
    format!(
        "{}/{}/{}/{}.{}",
        base_url,
        normalize_product_id(product_id),
        color_id,
        index,
        FRAME_EXTENSION
    )
}

/// A single frame load to be issued against the asset host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRequest {
    pub color_id: String,
    pub index: u32,
    pub url: String,
}

/// Resolves frame requests for one product.
#[derive(Clone, Debug)]
pub struct FrameResolver {
    base_url: String,
    product_id: String,
}

impl FrameResolver {
    pub fn new(base_url: impl Into<String>, product_id: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            product_id: product_id.into(),
        }
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn url(&self, color_id: &str, index: u32) -> String {
        frame_url(&self.base_url, &self.product_id, color_id, index)
    }

    pub fn request(&self, color_id: &str, index: u32) -> FrameRequest {
        FrameRequest {
            color_id: color_id.to_string(),
            index,
            url: self.url(color_id, index),
        }
    }
}
