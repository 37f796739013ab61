use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;

use tracing::debug;

use crate::error::{Result, TurntableError};
use crate::loader::FrameLoader;
use crate::probe::{LoadEvent, LoadOutcome};
use crate::source::FrameRequest;
use crate::viewer::{FrameViewer, ViewerPhase};

/// Shared flag that stops loads which have not started yet.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

type Waker = Arc<dyn Fn() + Send + Sync>;

/// Runs frame loads on a bounded pool and reports each completion as a
/// [`LoadEvent`] on a channel.
///
/// Loads are fire-and-forget: switching colors does not cancel them, and
/// their results still land in the cache of the color they belong to.
/// Dropping the executor cancels every load that has not started.
pub struct ProbeExecutor {
    pool: rayon::ThreadPool,
    loader: Arc<dyn FrameLoader>,
    cancel: CancelToken,
    waker: Option<Waker>,
}

impl ProbeExecutor {
    pub fn new(loader: Arc<dyn FrameLoader>, max_concurrent: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(max_concurrent.max(1))
            .thread_name(|i| format!("turntable-loader-{i}"))
            .build()
            .map_err(|e| TurntableError::Executor(e.to_string()))?;

        Ok(Self {
            pool,
            loader,
            cancel: CancelToken::new(),
            waker: None,
        })
    }

    /// Called on the loader thread after every sent event.
    pub fn with_waker(mut self, waker: impl Fn() + Send + Sync + 'static) -> Self {
        self.waker = Some(Arc::new(waker));
        self
    }

    pub fn concurrency(&self) -> usize {
        self.pool.current_num_threads()
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Schedule one load per request. Each load sends exactly one event
    /// unless cancelled before it starts.
    pub fn submit(&self, requests: Vec<FrameRequest>, tx: &mpsc::Sender<LoadEvent>) {
        for request in requests {
            let loader = Arc::clone(&self.loader);
            let cancel = self.cancel.clone();
            let waker = self.waker.clone();
            let tx = tx.clone();

            self.pool.spawn(move || {
                if cancel.is_cancelled() {
                    return;
                }
                let outcome = match loader.load(&request) {
                    Ok(frame) => LoadOutcome::Loaded(frame),
                    Err(e) => LoadOutcome::Failed(e.to_string()),
                };
                debug!(
                    "Loaded {} -> {}",
                    request.url,
                    if outcome.is_loaded() { "ok" } else { "missing" }
                );
                let _ = tx.send(LoadEvent {
                    color_id: request.color_id,
                    index: request.index,
                    outcome,
                });
                if let Some(waker) = waker {
                    waker();
                }
            });
        }
    }
}

impl Drop for ProbeExecutor {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Issue `requests` and fold completions into `viewer` until the active pass
/// finishes. `on_event` runs after every applied event.
///
/// Returns the phase the viewer ended in. If the loads are cancelled before
/// the pass completes, the viewer is left in `Probing`.
pub fn drive_to_completion(
    viewer: &mut FrameViewer,
    executor: &ProbeExecutor,
    requests: Vec<FrameRequest>,
    mut on_event: impl FnMut(&FrameViewer),
) -> ViewerPhase {
    let (tx, rx) = mpsc::channel();
    executor.submit(requests, &tx);
    drop(tx);

    while viewer.is_loading() {
        match rx.recv() {
            Ok(event) => {
                viewer.apply(event);
                on_event(viewer);
            }
            Err(_) => break,
        }
    }
    viewer.phase()
}
