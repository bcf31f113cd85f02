use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Instant;

use hotmap_core::config::MapConfig;
use hotmap_core::session::MapSession;
use hotmap_core::source::HotspotSource;

use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{UIState, ViewportState};
use crate::workers;

pub struct HotmapApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub config: MapConfig,
    pub session: MapSession,
    pub show_about: bool,
}

impl HotmapApp {
    pub fn new(
        ctx: &egui::Context,
        config: MapConfig,
        session: MapSession,
        config_path: Option<PathBuf>,
    ) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = workers::spawn_worker(result_tx, ctx.clone());

        let mut app = Self {
            cmd_tx,
            result_rx,
            ui_state: UIState {
                config_path,
                ..UIState::default()
            },
            viewport: ViewportState::default(),
            config,
            session,
            show_about: false,
        };
        app.load_map();
        app
    }

    /// Request the image and the hotspot data named by the current config.
    pub fn load_map(&mut self) {
        let image = self.config.image.clone();
        self.ui_state.image_path = Some(image.clone());
        self.send_command(WorkerCommand::LoadImage { path: image });
        self.reload_data();
    }

    /// Fetch the hotspot data again. Markers stay hidden until it arrives.
    pub fn reload_data(&mut self) {
        let source = HotspotSource::parse(&self.config.data);
        self.session.reset();
        self.viewport.clear_popups();
        self.ui_state.data_source = Some(source.clone());
        self.ui_state.loading_data = true;
        self.send_command(WorkerCommand::LoadData { source });
    }

    pub fn apply_config(&mut self, path: PathBuf, config: MapConfig) {
        let session = match MapSession::new(&config) {
            Ok(session) => session,
            Err(e) => {
                self.ui_state
                    .add_log(format!("ERROR: config {} rejected: {e}", path.display()));
                return;
            }
        };
        self.ui_state.add_log(format!("Config: {}", path.display()));
        self.ui_state.config_path = Some(path);
        self.session = session;
        self.config = config;
        self.viewport = ViewportState::default();
        self.load_map();
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ImageLoaded { path, image } => {
                    self.ui_state
                        .add_log(format!("Image: {} ({}x{})", path.display(), image.size[0], image.size[1]));
                    self.update_viewport_texture(ctx, image);
                }
                WorkerResult::ImageFailed { path, message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                    if self.ui_state.image_path.as_ref() == Some(&path) {
                        self.viewport.texture = None;
                        self.viewport.image_size = None;
                        self.viewport.image_error = Some(message);
                    }
                }
                WorkerResult::DataLoaded { source, result } => {
                    if self.ui_state.data_source.as_ref() != Some(&source) {
                        tracing::debug!(%source, "dropping stale hotspot data");
                        continue;
                    }
                    self.ui_state.loading_data = false;
                    match &result {
                        Ok(catalog) => self
                            .ui_state
                            .add_log(format!("{} hotspots loaded from {source}", catalog.len())),
                        Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
                    }
                    self.session.data_loaded(result, Instant::now());
                }
                WorkerResult::ConfigLoaded { path, config } => {
                    self.apply_config(path, config);
                }
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    fn update_viewport_texture(&mut self, ctx: &egui::Context, image: egui::ColorImage) {
        let size = image.size;
        let texture = ctx.load_texture("map", image, egui::TextureOptions::LINEAR);
        self.viewport.texture = Some(texture);
        self.viewport.image_size = Some(size);
        self.viewport.image_error = None;
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

impl eframe::App for HotmapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::toolbar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::viewport::show(ctx, self);

        if let Some(wait) = self.session.next_wakeup(Instant::now()) {
            ctx.request_repaint_after(wait);
        }

        if self.show_about {
            egui::Window::new("About Hotmap")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Hotmap");
                        ui.label("Interactive hotspot map");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
