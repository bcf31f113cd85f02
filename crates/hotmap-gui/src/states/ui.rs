use std::path::PathBuf;

use hotmap_core::source::HotspotSource;

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub config_path: Option<PathBuf>,
    pub image_path: Option<PathBuf>,
    pub data_source: Option<HotspotSource>,

    /// A data load is in flight.
    pub loading_data: bool,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
