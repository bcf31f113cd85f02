use std::path::Path;
use std::sync::mpsc;
use std::time::Instant;

use hotmap_core::config::MapConfig;
use hotmap_core::source::HotspotSource;

use crate::convert::dynamic_to_color_image;
use crate::messages::WorkerResult;

use super::{send, send_error, send_log};

pub(super) fn handle_load_image(
    path: &Path,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let start = Instant::now();
    match image::open(path) {
        Ok(img) => {
            let image = dynamic_to_color_image(&img);
            tracing::info!(
                path = %path.display(),
                width = image.size[0],
                height = image.size[1],
                elapsed_ms = start.elapsed().as_millis() as u64,
                "map image loaded"
            );
            send(
                tx,
                ctx,
                WorkerResult::ImageLoaded {
                    path: path.to_path_buf(),
                    image,
                },
            );
        }
        Err(e) => {
            tracing::error!(path = %path.display(), "failed to open map image: {e}");
            send(
                tx,
                ctx,
                WorkerResult::ImageFailed {
                    path: path.to_path_buf(),
                    message: format!("Failed to open image {}: {e}", path.display()),
                },
            );
        }
    }
}

pub(super) fn handle_load_data(
    source: HotspotSource,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    send_log(tx, ctx, format!("Loading hotspot data from {source}"));
    let result = source.load();
    send(tx, ctx, WorkerResult::DataLoaded { source, result });
}

pub(super) fn handle_load_config(
    path: &Path,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    send_log(tx, ctx, format!("Loading config {}", path.display()));
    match MapConfig::load(path) {
        Ok(config) => send(
            tx,
            ctx,
            WorkerResult::ConfigLoaded {
                path: path.to_path_buf(),
                config,
            },
        ),
        Err(e) => send_error(tx, ctx, format!("Failed to load config {}: {e}", path.display())),
    }
}
