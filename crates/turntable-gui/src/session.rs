use std::sync::mpsc;

use anyhow::Result;
use turntable_core::config::ViewerConfig;
use turntable_core::executor::ProbeExecutor;
use turntable_core::loader::{loader_for_base, DecodedFrame};
use turntable_core::probe::{LoadEvent, LoadOutcome};
use turntable_core::viewer::FrameViewer;

/// One open product: the viewer state plus the loader pool feeding it.
///
/// Dropping the session cancels every load that has not started yet.
pub struct ViewerSession {
    pub viewer: FrameViewer,
    pub config: ViewerConfig,
    executor: ProbeExecutor,
    event_tx: mpsc::Sender<LoadEvent>,
    event_rx: mpsc::Receiver<LoadEvent>,
}

impl ViewerSession {
    /// Build the session and start probing the default color.
    pub fn open(config: ViewerConfig, ctx: &egui::Context) -> Result<Self> {
        let loader = loader_for_base(&config.base_url)?;
        let repaint = ctx.clone();
        let executor = ProbeExecutor::new(loader, config.max_concurrent_loads)?
            .with_waker(move || repaint.request_repaint());
        let mut viewer = FrameViewer::new(&config)?;
        let (event_tx, event_rx) = mpsc::channel();

        let requests = viewer.start();
        executor.submit(requests, &event_tx);

        Ok(Self {
            viewer,
            config,
            executor,
            event_tx,
            event_rx,
        })
    }

    pub fn select_color(&mut self, index: usize) -> Result<()> {
        if index == self.viewer.selected_index() {
            return Ok(());
        }
        let requests = self.viewer.select_color(index)?;
        self.executor.submit(requests, &self.event_tx);
        Ok(())
    }

    /// Apply every completed load. `on_frame` sees each decoded frame before
    /// the viewer does.
    pub fn drain(&mut self, mut on_frame: impl FnMut(&str, u32, &DecodedFrame)) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            if let LoadOutcome::Loaded(ref frame) = event.outcome {
                on_frame(&event.color_id, event.index, frame);
            }
            self.viewer.apply(event);
            applied += 1;
        }
        applied
    }
}
