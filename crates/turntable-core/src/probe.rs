//! Frame availability probing.
//!
//! A probe pass decides which frame indices of one color exist. In explicit
//! mode the color lists its frames; in auto-detect mode every index in
//! `0..total_frames` is tried. Loads complete in any order and each one is
//! folded into the viewer through a [`LoadEvent`].

use std::collections::BTreeSet;

use crate::cache::FrameCache;
use crate::color::ColorOption;
use crate::frames::AvailableFrames;
use crate::loader::DecodedFrame;
use crate::source::{FrameRequest, FrameResolver};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProbeMode {
    /// Sorted, duplicate-free list supplied by the color.
    Explicit(Vec<u32>),
    AutoDetect { total_frames: u32 },
}

impl ProbeMode {
    pub fn for_color(color: &ColorOption, total_frames: u32) -> Self {
        match &color.frames {
            Some(frames) => {
                let sorted: BTreeSet<u32> = frames.iter().copied().collect();
                ProbeMode::Explicit(sorted.into_iter().collect())
            }
            None => ProbeMode::AutoDetect { total_frames },
        }
    }

    pub fn candidates(&self) -> Vec<u32> {
        match self {
            ProbeMode::Explicit(frames) => frames.clone(),
            ProbeMode::AutoDetect { total_frames } => (0..*total_frames).collect(),
        }
    }
}

impl std::fmt::Display for ProbeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProbeMode::Explicit(frames) => write!(f, "Explicit ({} frames)", frames.len()),
            ProbeMode::AutoDetect { total_frames } => {
                write!(f, "Auto-detect (0..{total_frames})")
            }
        }
    }
}

/// Result of a single frame load.
#[derive(Clone, Debug)]
pub enum LoadOutcome {
    Loaded(DecodedFrame),
    Failed(String),
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded(_))
    }
}

/// Completion signal for one issued [`FrameRequest`].
#[derive(Clone, Debug)]
pub struct LoadEvent {
    pub color_id: String,
    pub index: u32,
    pub outcome: LoadOutcome,
}

impl LoadEvent {
    pub fn loaded(color_id: impl Into<String>, index: u32, frame: DecodedFrame) -> Self {
        Self {
            color_id: color_id.into(),
            index,
            outcome: LoadOutcome::Loaded(frame),
        }
    }

    pub fn failed(color_id: impl Into<String>, index: u32, reason: impl Into<String>) -> Self {
        Self {
            color_id: color_id.into(),
            index,
            outcome: LoadOutcome::Failed(reason.into()),
        }
    }
}

/// Bookkeeping for one in-progress probe pass.
#[derive(Clone, Debug)]
pub struct ProbePass {
    pub color_id: String,
    pub mode: ProbeMode,
    candidates: BTreeSet<u32>,
    pending: BTreeSet<u32>,
}

impl ProbePass {
    /// Plan a pass against the cache. Cached successes are seeded into
    /// `available`, cached failures count as resolved, everything else is
    /// returned as a request to issue.
    pub fn plan(
        color: &ColorOption,
        total_frames: u32,
        resolver: &FrameResolver,
        cache: &FrameCache,
        available: &mut AvailableFrames,
    ) -> (Self, Vec<FrameRequest>) {
        let mode = ProbeMode::for_color(color, total_frames);
        let candidates: BTreeSet<u32> = mode.candidates().into_iter().collect();
        let mut pending = BTreeSet::new();
        let mut requests = Vec::new();

        for &index in &candidates {
            match cache.state(&color.id, index) {
                Some(true) => {
                    available.insert(index);
                }
                Some(false) => {}
                None => {
                    pending.insert(index);
                    requests.push(resolver.request(&color.id, index));
                }
            }
        }

        let pass = Self {
            color_id: color.id.clone(),
            mode,
            candidates,
            pending,
        };
        (pass, requests)
    }

    /// Mark an index resolved. Returns `false` if it was not pending, which
    /// happens for duplicate or stale completions.
    pub fn resolve(&mut self, index: u32) -> bool {
        self.pending.remove(&index)
    }

    pub fn is_complete(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Number of candidates the cache confirms as loaded.
    pub fn loaded_count(&self, cache: &FrameCache) -> usize {
        self.candidates
            .iter()
            .filter(|&&index| cache.is_loaded(&self.color_id, index))
            .count()
    }

    pub fn all_cached(&self, cache: &FrameCache) -> bool {
        self.loaded_count(cache) == self.candidates.len()
    }
}
