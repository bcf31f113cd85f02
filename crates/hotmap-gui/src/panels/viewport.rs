use std::time::Instant;

use hotmap_core::consts::TOOLTIP_GAP;
use hotmap_core::layout::{tooltip_anchor, ImageSize, PixelPoint};
use hotmap_core::session::{BasicTooltip, ClickTarget, DetailPanel};

use crate::app::HotmapApp;

const TOOLTIP_WIDTH: f32 = 260.0;
const DETAIL_WIDTH: f32 = 380.0;
const DETAIL_MAX_HEIGHT: f32 = 320.0;
const OVERLAY_ALPHA: u8 = 150;
const MARKER_DOT_SCALE: f32 = 0.45;

pub fn show(ctx: &egui::Context, app: &mut HotmapApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        let now = Instant::now();
        track_window_resize(app, rect.size(), now);

        let texture_info = app.viewport.texture.as_ref().map(|t| (t.id(), t.size_vec2()));

        let Some((texture_id, tex_size)) = texture_info else {
            if app.viewport.image_error.is_none() {
                show_placeholder(ui, app.ui_state.image_path.is_some());
            }
            let messages = map_messages(
                app.viewport.image_error.as_deref(),
                app.session.error_message(),
            );
            if let Some(message) = messages {
                draw_load_error(ui, rect, &message);
            }
            return;
        };

        let fraction = eased_zoom_fraction(ctx, app);
        let img_rect = compute_img_rect(rect, tex_size, fraction);
        app.session
            .set_image_size(ImageSize::new(img_rect.width(), img_rect.height()));
        app.session.tick(now);

        draw_image(ui, texture_id, img_rect);
        if app.session.overlay_active() {
            ui.painter()
                .rect_filled(rect, 0.0, egui::Color32::from_black_alpha(OVERLAY_ALPHA));
        }
        draw_markers(ui, app, img_rect);
        if let Some(message) = map_messages(None, app.session.error_message()) {
            draw_load_error(ui, rect, &message);
        }

        handle_pointer(ctx, ui, app, rect, img_rect);
        draw_popups(ctx, app, img_rect);
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

/// A change of the panel size means the window was resized. Zoom easing
/// changes the image, not the panel, so it never lands here.
fn track_window_resize(app: &mut HotmapApp, size: egui::Vec2, now: Instant) {
    if let Some(previous) = app.viewport.last_panel_size {
        if previous != size {
            app.session.window_resized(now);
        }
    }
    app.viewport.last_panel_size = Some(size);
}

fn eased_zoom_fraction(ctx: &egui::Context, app: &mut HotmapApp) -> f32 {
    let target = app.session.zoom_cycle().fraction();
    if app.viewport.zoom_target != Some(target) {
        app.viewport.zoom_easing = app.viewport.zoom_target.is_some();
        app.viewport.zoom_target = Some(target);
    }

    let seconds = app.config.zoom.transition_ms as f32 / 1000.0;
    let value = ctx.animate_value_with_time(egui::Id::new("map_zoom_width"), target, seconds);

    if app.viewport.zoom_easing && (value - target).abs() < 1e-4 {
        app.viewport.zoom_easing = false;
        app.session.transition_finished();
    }
    value
}

/// Container width follows the zoom fraction; height keeps the image aspect.
fn compute_img_rect(rect: egui::Rect, tex_size: egui::Vec2, fraction: f32) -> egui::Rect {
    let width = rect.width() * fraction;
    let height = if tex_size.x > 0.0 {
        width * tex_size.y / tex_size.x
    } else {
        0.0
    };
    egui::Rect::from_min_size(
        egui::pos2(rect.center().x - width / 2.0, rect.top()),
        egui::vec2(width, height),
    )
}

fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, img_rect: egui::Rect) {
    ui.painter().image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn draw_markers(ui: &egui::Ui, app: &HotmapApp, img_rect: egui::Rect) {
    let painter = ui.painter();
    let state = app.session.interaction();
    let radius = app.session.marker_layer().marker_size() / 2.0;

    for marker in app.session.markers() {
        let center = to_screen(img_rect, marker.center);
        let active = state.active_id() == Some(marker.hotspot_id.as_str());
        let fill = if active {
            egui::Color32::from_rgb(255, 196, 0)
        } else {
            egui::Color32::from_rgb(230, 57, 70)
        };
        painter.circle_stroke(center, radius, egui::Stroke::new(1.0, fill.gamma_multiply(0.5)));
        painter.circle_filled(center, radius * MARKER_DOT_SCALE, fill);
        painter.circle_stroke(
            center,
            radius * MARKER_DOT_SCALE,
            egui::Stroke::new(2.0, egui::Color32::WHITE),
        );
    }
}

/// Inline messages shown on the map, image problems first.
fn map_messages(image_error: Option<&str>, data_error: Option<&str>) -> Option<String> {
    let lines: Vec<&str> = image_error.into_iter().chain(data_error).collect();
    (!lines.is_empty()).then(|| lines.join("\n"))
}

fn draw_load_error(ui: &egui::Ui, rect: egui::Rect, message: &str) {
    let painter = ui.painter();
    let galley = painter.layout(
        message.to_owned(),
        egui::FontId::proportional(15.0),
        egui::Color32::from_rgb(255, 120, 110),
        (rect.width() - 48.0).max(120.0),
    );
    let pos = rect.left_top() + egui::vec2(16.0, 16.0);
    let background = egui::Rect::from_min_size(pos, galley.size()).expand(8.0);
    painter.rect_filled(background, 4.0, egui::Color32::from_black_alpha(210));
    painter.galley(pos, galley, egui::Color32::WHITE);
}

/// Feed hover, readout and clicks from this frame's pointer into the session.
fn handle_pointer(
    ctx: &egui::Context,
    ui: &egui::Ui,
    app: &mut HotmapApp,
    rect: egui::Rect,
    img_rect: egui::Rect,
) {
    let layer = ui.layer_id();
    // Other panels share the background layer, so the rect check is needed too.
    let on_map = |pos: egui::Pos2| rect.contains(pos) && ctx.layer_id_at(pos) == Some(layer);

    let hover_pos = ctx.input(|i| i.pointer.hover_pos()).filter(|p| on_map(*p));

    match hover_pos.filter(|p| img_rect.contains(*p)) {
        Some(pos) => app.session.pointer_moved(to_local(img_rect, pos)),
        None => app.session.pointer_left(),
    }

    let hovered = hover_pos.and_then(|pos| hotspot_at(app, img_rect, pos));
    app.session.hover(hovered.as_deref());

    let clicked = ctx.input(|i| {
        if i.pointer.primary_clicked() {
            i.pointer.interact_pos()
        } else {
            None
        }
    });
    if let Some(pos) = clicked {
        let target = if app.viewport.tooltip_rect.is_some_and(|r| r.contains(pos)) {
            ClickTarget::Tooltip
        } else if app.viewport.detail_rect.is_some_and(|r| r.contains(pos)) {
            ClickTarget::DetailPanel
        } else if on_map(pos) {
            hotspot_at(app, img_rect, pos).map_or(ClickTarget::Outside, ClickTarget::Hotspot)
        } else {
            ClickTarget::Outside
        };
        app.session.click(target);
    }
}

fn hotspot_at(app: &HotmapApp, img_rect: egui::Rect, pos: egui::Pos2) -> Option<String> {
    app.session
        .marker_layer()
        .hit_test(to_local(img_rect, pos))
        .map(|m| m.hotspot_id.clone())
}

fn draw_popups(ctx: &egui::Context, app: &mut HotmapApp, img_rect: egui::Rect) {
    app.viewport.clear_popups();
    let Some(tooltip) = app.session.basic_tooltip() else {
        return;
    };

    let measured = app.viewport.tooltip_size;
    let anchor = tooltip_anchor(
        tooltip.anchor,
        ImageSize::new(measured.x, measured.y),
        ImageSize::new(img_rect.width(), img_rect.height()),
    );

    let tooltip_rect = egui::Area::new(egui::Id::new("hotspot_tooltip"))
        .order(egui::Order::Foreground)
        .fixed_pos(to_screen(img_rect, anchor))
        .show(ctx, |ui| show_tooltip(ui, &tooltip))
        .response
        .rect;
    app.viewport.tooltip_size = tooltip_rect.size();
    app.viewport.tooltip_rect = Some(tooltip_rect);

    if let Some(detail) = app.session.detail_panel() {
        let detail_rect = egui::Area::new(egui::Id::new("hotspot_detail"))
            .order(egui::Order::Foreground)
            .fixed_pos(tooltip_rect.left_bottom() + egui::vec2(0.0, TOOLTIP_GAP))
            .show(ctx, |ui| show_detail(ui, &detail))
            .response
            .rect;
        app.viewport.detail_rect = Some(detail_rect);
    }
}

fn show_tooltip(ui: &mut egui::Ui, tooltip: &BasicTooltip) {
    let mut frame = egui::Frame::popup(ui.style());
    if tooltip.pinned {
        frame = frame.stroke(egui::Stroke::new(1.5, ui.visuals().selection.bg_fill));
    }
    frame.show(ui, |ui| {
        ui.set_max_width(TOOLTIP_WIDTH);
        ui.strong(&tooltip.title);
        ui.small(&tooltip.coordinates);
        if !tooltip.description.is_empty() {
            ui.label(&tooltip.description);
        }
        if let Some(ref hint) = tooltip.details_hint {
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new(hint)
                    .italics()
                    .color(ui.visuals().hyperlink_color),
            );
        }
    });
}

fn show_detail(ui: &mut egui::Ui, detail: &DetailPanel) {
    egui::Frame::popup(ui.style()).show(ui, |ui| {
        ui.set_max_width(DETAIL_WIDTH);
        ui.heading(&detail.title);
        ui.small(&detail.coordinates);
        ui.separator();
        egui::ScrollArea::vertical()
            .max_height(DETAIL_MAX_HEIGHT)
            .show(ui, |ui| {
                ui.label(&detail.body);
            });
    });
}

fn show_placeholder(ui: &mut egui::Ui, loading: bool) {
    let text = if loading {
        "Loading map image..."
    } else {
        "Open a map config to begin"
    };
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new(text)
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}

fn to_local(img_rect: egui::Rect, pos: egui::Pos2) -> PixelPoint {
    let offset = pos - img_rect.min;
    PixelPoint::new(offset.x, offset.y)
}

fn to_screen(img_rect: egui::Rect, point: PixelPoint) -> egui::Pos2 {
    img_rect.min + egui::vec2(point.x, point.y)
}
