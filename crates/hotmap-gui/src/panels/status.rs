use hotmap_core::session::LoadState;

use crate::app::HotmapApp;

pub fn show(ctx: &egui::Context, app: &mut HotmapApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed at 4 lines.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            if let Some(ref size) = app.viewport.image_size {
                ui.label(format!("{}x{}", size[0], size[1]));
                ui.separator();
            }
            match app.session.load_state() {
                LoadState::Pending if app.ui_state.loading_data => {
                    ui.spinner();
                    ui.label("Loading hotspots");
                }
                LoadState::Pending => {
                    ui.label("No data");
                }
                LoadState::Ready => {
                    ui.label(format!("Hotspots: {}", app.session.catalog().len()));
                }
                LoadState::Failed(_) => {
                    ui.colored_label(egui::Color32::from_rgb(230, 90, 80), "Data failed");
                }
            }
            ui.separator();
            ui.label(format!("Zoom: {}%", app.session.zoom_cycle().current()));
            ui.separator();
            ui.label(app.session.interaction().phase().to_string());
            if let Some(ref source) = app.ui_state.data_source {
                ui.separator();
                ui.label(source.to_string());
            }
        });

        ui.add_space(2.0);
    });
}
