use tracing::{debug, info, warn};

use crate::cache::FrameCache;
use crate::color::ColorOption;
use crate::config::ViewerConfig;
use crate::error::{Result, TurntableError};
use crate::frames::AvailableFrames;
use crate::navigation::{self, NavKey, NavigationState};
use crate::probe::{LoadEvent, LoadOutcome, ProbeMode, ProbePass};
use crate::source::{FrameRequest, FrameResolver};
use crate::surface::{self, FrameLayer, LoadingOverlay, SurfaceView};

/// Lifecycle of the active color selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerPhase {
    Init,
    Probing,
    /// At least one frame available.
    Ready,
    /// Probing finished with zero frames.
    Empty,
}

impl std::fmt::Display for ViewerPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewerPhase::Init => write!(f, "Init"),
            ViewerPhase::Probing => write!(f, "Probing"),
            ViewerPhase::Ready => write!(f, "Ready"),
            ViewerPhase::Empty => write!(f, "Empty"),
        }
    }
}

/// State of one interactive 360° viewer instance.
///
/// The viewer never performs I/O itself. [`FrameViewer::select_color`]
/// returns the loads to issue and every completion comes back through
/// [`FrameViewer::apply`], in any order.
#[derive(Debug)]
pub struct FrameViewer {
    colors: Vec<ColorOption>,
    resolver: FrameResolver,
    total_frames: u32,
    drag_sensitivity: f32,
    selected: usize,
    cache: FrameCache,
    available: AvailableFrames,
    current: Option<u32>,
    nav: NavigationState,
    phase: ViewerPhase,
    pass: Option<ProbePass>,
}

impl FrameViewer {
    pub fn new(config: &ViewerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            colors: config.colors.clone(),
            resolver: config.resolver(),
            total_frames: config.total_frames,
            drag_sensitivity: config.drag_sensitivity,
            selected: 0,
            cache: FrameCache::new(),
            available: AvailableFrames::new(),
            current: None,
            nav: NavigationState::default(),
            phase: ViewerPhase::Init,
            pass: None,
        })
    }

    /// Begin probing the default (first) color.
    pub fn start(&mut self) -> Vec<FrameRequest> {
        self.begin_pass(0)
    }

    /// Switch to another color and restart probing for it. Frames cached for
    /// that color by earlier passes are reused without new loads.
    pub fn select_color(&mut self, index: usize) -> Result<Vec<FrameRequest>> {
        if index >= self.colors.len() {
            return Err(TurntableError::ColorIndexOutOfRange {
                index,
                total: self.colors.len(),
            });
        }
        Ok(self.begin_pass(index))
    }

    pub fn select_color_id(&mut self, color_id: &str) -> Result<Vec<FrameRequest>> {
        let index = self
            .colors
            .iter()
            .position(|c| c.id == color_id)
            .ok_or_else(|| TurntableError::UnknownColor(color_id.to_string()))?;
        self.select_color(index)
    }

    fn begin_pass(&mut self, index: usize) -> Vec<FrameRequest> {
        self.selected = index;
        self.phase = ViewerPhase::Init;
        self.available.clear();
        self.nav = NavigationState::default();

        let color = &self.colors[index];
        let (pass, requests) = ProbePass::plan(
            color,
            self.total_frames,
            &self.resolver,
            &self.cache,
            &mut self.available,
        );
        info!(
            "Probing color {} [{}]: {} requests, {} cached",
            color.id,
            pass.mode,
            requests.len(),
            self.available.len()
        );

        self.phase = ViewerPhase::Probing;
        let complete = pass.is_complete();
        self.pass = Some(pass);
        if complete {
            self.finish_pass();
        } else if self.current.map_or(true, |c| !self.available.contains(c)) {
            self.current = self.available.first();
        }
        requests
    }

    /// Fold one load completion into the viewer. Completions for colors
    /// other than the active one only update the cache.
    pub fn apply(&mut self, event: LoadEvent) {
        let loaded = self
            .cache
            .record(&event.color_id, event.index, event.outcome.is_loaded());
        if let LoadOutcome::Failed(ref reason) = event.outcome {
            debug!("Frame {}/{} unavailable: {reason}", event.color_id, event.index);
        }

        let Some(pass) = self.pass.as_mut() else {
            return;
        };
        if self.phase != ViewerPhase::Probing
            || pass.color_id != event.color_id
            || !pass.resolve(event.index)
        {
            return;
        }

        if loaded {
            self.available.insert(event.index);
            if self.current.map_or(true, |c| !self.available.contains(c)) {
                self.current = self.available.first();
            }
        }

        if pass.is_complete() {
            self.finish_pass();
        }
    }

    fn finish_pass(&mut self) {
        let color = &self.colors[self.selected];
        if self.available.is_empty() {
            self.phase = ViewerPhase::Empty;
            self.current = None;
            warn!("No frames available for color {}", color.id);
        } else {
            self.phase = ViewerPhase::Ready;
            if self.current.map_or(true, |c| !self.available.contains(c)) {
                self.current = self.available.first();
            }
            info!(
                "Color {} ready with {} frames",
                color.id,
                self.available.len()
            );
        }
    }

    // Navigation

    fn move_by(&mut self, delta: i64) {
        if let Some(next) = navigation::step_within(&self.available, self.current, delta) {
            self.current = Some(next);
        }
    }

    pub fn next(&mut self) {
        self.move_by(1);
    }

    pub fn previous(&mut self) {
        self.move_by(-1);
    }

    pub fn key(&mut self, key: NavKey) {
        match key {
            NavKey::ArrowLeft => self.previous(),
            NavKey::ArrowRight => self.next(),
        }
    }

    /// Jump to the frame at `position` within the available set.
    pub fn jump_to_position(&mut self, position: usize) {
        if let Some(index) = self.available.nth(position) {
            self.current = Some(index);
        }
    }

    pub fn drag_start(&mut self, x: f32) {
        if self.available.is_empty() {
            return;
        }
        self.nav.begin_drag(x);
    }

    pub fn drag_move(&mut self, x: f32) {
        let steps = self.nav.drag_to(x, self.drag_sensitivity);
        if steps != 0 {
            self.move_by(steps);
        }
    }

    pub fn drag_end(&mut self) {
        self.nav.end_drag();
    }

    /// Press on the slider track at `ratio` (0 = left end, 1 = right end).
    pub fn slider_press(&mut self, ratio: f32) {
        if self.available.is_empty() {
            return;
        }
        self.nav.begin_slider();
        self.slider_seek(ratio);
    }

    pub fn slider_move(&mut self, ratio: f32) {
        if self.nav.slider_dragging {
            self.slider_seek(ratio);
        }
    }

    pub fn slider_release(&mut self) {
        self.nav.end_slider();
    }

    /// One-shot click on the track.
    pub fn slider_seek(&mut self, ratio: f32) {
        if let Some(pos) = navigation::slider_index(self.available.len(), ratio) {
            self.jump_to_position(pos);
        }
    }

    // Render surface

    pub fn layers(&self) -> Vec<FrameLayer> {
        surface::stack_layers(&self.available, self.current)
    }

    /// Present while probing and not every candidate is already cached.
    pub fn overlay(&self) -> Option<LoadingOverlay> {
        if self.phase != ViewerPhase::Probing {
            return None;
        }
        let pass = self.pass.as_ref()?;
        if pass.all_cached(&self.cache) {
            return None;
        }
        Some(LoadingOverlay::new(
            pass.loaded_count(&self.cache),
            self.available.len(),
            self.total_frames,
        ))
    }

    pub fn view(&self) -> SurfaceView {
        if self.phase == ViewerPhase::Empty {
            return SurfaceView::Unavailable {
                color_name: self.selected_color().name.clone(),
            };
        }
        match self.overlay() {
            Some(overlay) => SurfaceView::Loading(overlay),
            None => SurfaceView::Frames {
                current: self.current,
            },
        }
    }

    // Accessors

    pub fn colors(&self) -> &[ColorOption] {
        &self.colors
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_color(&self) -> &ColorOption {
        &self.colors[self.selected]
    }

    pub fn current_frame(&self) -> Option<u32> {
        self.current
    }

    pub fn available(&self) -> &AvailableFrames {
        &self.available
    }

    pub fn cache(&self) -> &FrameCache {
        &self.cache
    }

    pub fn phase(&self) -> ViewerPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ViewerPhase::Probing
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    pub fn resolver(&self) -> &FrameResolver {
        &self.resolver
    }

    pub fn total_frames(&self) -> u32 {
        self.total_frames
    }

    pub fn probe_mode(&self) -> Option<&ProbeMode> {
        self.pass.as_ref().map(|p| &p.mode)
    }

    /// Loads still outstanding for the active pass.
    pub fn pending(&self) -> usize {
        match (&self.pass, self.phase) {
            (Some(pass), ViewerPhase::Probing) => pass.pending(),
            _ => 0,
        }
    }

    pub fn slider_ratio(&self) -> f32 {
        navigation::position_ratio(&self.available, self.current)
    }
}
