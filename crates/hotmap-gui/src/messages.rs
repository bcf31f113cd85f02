use std::path::PathBuf;

use hotmap_core::config::MapConfig;
use hotmap_core::error::HotmapError;
use hotmap_core::hotspot::HotspotCatalog;
use hotmap_core::source::HotspotSource;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Decode the base image.
    LoadImage { path: PathBuf },

    /// Read or fetch the hotspot collection.
    LoadData { source: HotspotSource },

    /// Parse a map config file.
    LoadConfig { path: PathBuf },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    ImageLoaded {
        path: PathBuf,
        image: egui::ColorImage,
    },
    ImageFailed {
        path: PathBuf,
        message: String,
    },
    /// Outcome of a `LoadData` command, success or failure.
    DataLoaded {
        source: HotspotSource,
        result: Result<HotspotCatalog, HotmapError>,
    },
    ConfigLoaded {
        path: PathBuf,
        config: MapConfig,
    },
    Error {
        message: String,
    },
    Log {
        message: String,
    },
}
