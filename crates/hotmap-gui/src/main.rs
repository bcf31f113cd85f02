mod app;
mod convert;
mod messages;
mod panels;
mod states;
mod workers;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use hotmap_core::config::MapConfig;
use hotmap_core::session::MapSession;

const DEFAULT_CONFIG_FILE: &str = "hotmap.toml";

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let (config, config_path) = match startup_config() {
        Ok(found) => found,
        Err(e) => {
            tracing::error!("{e:#}");
            std::process::exit(1);
        }
    };
    let session = match MapSession::new(&config) {
        Ok(session) => session,
        Err(e) => {
            tracing::error!("Invalid map config: {e}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Hotmap"),
        ..Default::default()
    };

    eframe::run_native(
        "Hotmap",
        options,
        Box::new(|cc| Ok(Box::new(app::HotmapApp::new(
            &cc.egui_ctx,
            config,
            session,
            config_path,
        )))),
    )
}

/// Config from the first argument, else `hotmap.toml` in the working directory, else defaults.
fn startup_config() -> Result<(MapConfig, Option<PathBuf>)> {
    let path = match std::env::args_os().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => PathBuf::from(DEFAULT_CONFIG_FILE),
        None => return Ok((MapConfig::default(), None)),
    };
    let config = MapConfig::load(&path)
        .with_context(|| format!("Failed to load config {}", path.display()))?;
    Ok((config, Some(path)))
}
