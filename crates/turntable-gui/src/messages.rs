use std::path::PathBuf;

use turntable_core::config::ViewerConfig;

/// Results sent from background helper threads (file dialogs) to the UI thread.
pub enum AppMessage {
    ProductOpened { path: PathBuf, config: ViewerConfig },
    Error { message: String },
}
