use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{Result, TurntableError};
use crate::source::FrameRequest;

/// A decoded frame in straight (non-premultiplied) RGBA8, row-major.
#[derive(Clone, Debug)]
pub struct DecodedFrame {
    pub width: u32,
    pub height: u32,
    pub rgba: Arc<Vec<u8>>,
}

impl DecodedFrame {
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Self {
        debug_assert_eq!(rgba.len(), width as usize * height as usize * 4);
        Self {
            width,
            height,
            rgba: Arc::new(rgba),
        }
    }
}

/// Decode fetched bytes. The container format is detected from content, so a
/// `.webp` name holding PNG data still decodes.
pub fn decode_frame(bytes: &[u8]) -> Result<DecodedFrame> {
    let img = image::load_from_memory(bytes)?;
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();
    Ok(DecodedFrame::new(w, h, rgba.into_raw()))
}

/// Fetches and decodes one frame. Implementations are called from loader
/// pool threads.
pub trait FrameLoader: Send + Sync {
    fn load(&self, request: &FrameRequest) -> Result<DecodedFrame>;
}

/// Reads frames from a local directory tree laid out like the asset host.
#[derive(Clone, Debug, Default)]
pub struct FsLoader;

impl FsLoader {
    pub fn path_for(url: &str) -> PathBuf {
        PathBuf::from(url.strip_prefix("file://").unwrap_or(url))
    }
}

impl FrameLoader for FsLoader {
    fn load(&self, request: &FrameRequest) -> Result<DecodedFrame> {
        let path = Self::path_for(&request.url);
        let bytes = std::fs::read(&path)?;
        decode_frame(&bytes)
    }
}

/// Fetches frames over HTTP(S).
#[cfg(feature = "http")]
#[derive(Clone, Debug)]
pub struct HttpLoader {
    agent: ureq::Agent,
}

#[cfg(feature = "http")]
impl HttpLoader {
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout(std::time::Duration::from_secs(30))
                .build(),
        }
    }
}

#[cfg(feature = "http")]
impl Default for HttpLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "http")]
impl FrameLoader for HttpLoader {
    fn load(&self, request: &FrameRequest) -> Result<DecodedFrame> {
        use std::io::Read;

        let response = self
            .agent
            .get(&request.url)
            .call()
            .map_err(|e| TurntableError::Http(format!("{}: {e}", request.url)))?;
        let mut bytes = Vec::new();
        response.into_reader().read_to_end(&mut bytes)?;
        decode_frame(&bytes)
    }
}

pub fn is_remote(base_url: &str) -> bool {
    base_url.starts_with("http://") || base_url.starts_with("https://")
}

/// Pick a loader for a base URL: HTTP for `http(s)://`, the filesystem for
/// anything else (a plain path or `file://`).
pub fn loader_for_base(base_url: &str) -> Result<Arc<dyn FrameLoader>> {
    if !is_remote(base_url) {
        let root = FsLoader::path_for(base_url);
        if !Path::new(&root).is_dir() {
            tracing::warn!("Frame root {} is not a directory", root.display());
        }
        return Ok(Arc::new(FsLoader));
    }

    #[cfg(feature = "http")]
    {
        Ok(Arc::new(HttpLoader::new()))
    }
    #[cfg(not(feature = "http"))]
    {
        Err(TurntableError::Http(format!(
            "{base_url}: built without HTTP support"
        )))
    }
}
