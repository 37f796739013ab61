use std::path::PathBuf;

use turntable_core::viewer::ViewerPhase;

/// Keep at most this many log lines.
const MAX_LOG_LINES: usize = 200;

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub product_path: Option<PathBuf>,

    /// Phase seen on the previous frame, to log transitions once.
    pub last_phase: Option<ViewerPhase>,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
        if self.log_messages.len() > MAX_LOG_LINES {
            let excess = self.log_messages.len() - MAX_LOG_LINES;
            self.log_messages.drain(..excess);
        }
    }
}
