use std::collections::{BTreeMap, HashMap};

/// Per-color record of which frame indices have been attempted and whether
/// they loaded.
///
/// An entry is `true` once the frame decoded successfully and `false` when
/// the load failed. A `true` entry is never downgraded and no entry is ever
/// removed, so the cache only grows for the lifetime of the viewer.
#[derive(Clone, Debug, Default)]
pub struct FrameCache {
    entries: HashMap<String, BTreeMap<u32, bool>>,
}

impl FrameCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a load outcome and return the resulting state of the entry.
    pub fn record(&mut self, color_id: &str, index: u32, loaded: bool) -> bool {
        let frames = self.entries.entry(color_id.to_string()).or_default();
        let slot = frames.entry(index).or_insert(loaded);
        *slot |= loaded;
        *slot
    }

    /// `None` if the frame was never attempted.
    pub fn state(&self, color_id: &str, index: u32) -> Option<bool> {
        self.entries
            .get(color_id)
            .and_then(|frames| frames.get(&index).copied())
    }

    pub fn is_loaded(&self, color_id: &str, index: u32) -> bool {
        self.state(color_id, index).unwrap_or(false)
    }

    /// Loaded indices for a color, ascending.
    pub fn loaded_indices(&self, color_id: &str) -> Vec<u32> {
        self.entries
            .get(color_id)
            .map(|frames| {
                frames
                    .iter()
                    .filter(|(_, &loaded)| loaded)
                    .map(|(&index, _)| index)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn len_loaded(&self, color_id: &str) -> usize {
        self.entries
            .get(color_id)
            .map_or(0, |frames| frames.values().filter(|&&loaded| loaded).count())
    }

    pub fn colors(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
