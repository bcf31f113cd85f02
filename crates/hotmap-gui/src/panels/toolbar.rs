use std::time::Instant;

use crate::app::HotmapApp;

/// Zoom control and coordinate readout, above the map.
pub fn show(ctx: &egui::Context, app: &mut HotmapApp) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button(app.session.zoom_label()).clicked() {
                app.session.zoom(Instant::now());
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.monospace(app.session.readout_text());
            });
        });
    });
}
