mod common;

use std::time::{Duration, Instant};

use approx::assert_abs_diff_eq;

use hotmap_core::config::MapConfig;
use hotmap_core::error::HotmapError;
use hotmap_core::interaction::{Outcome, Phase};
use hotmap_core::layout::{ImageSize, PixelPoint};
use hotmap_core::relayout::RelayoutReason;
use hotmap_core::session::{ClickTarget, LoadState, MapSession};

fn ready_session(now: Instant) -> MapSession {
    let mut session = MapSession::new(&MapConfig::default()).unwrap();
    session.set_image_size(ImageSize::new(1000.0, 500.0));
    session.data_loaded(Ok(common::two_record_catalog()), now);
    session
}

fn phase(session: &MapSession) -> &Phase {
    session.interaction().phase()
}

#[test]
fn test_hover_click_detail_walkthrough() {
    let now = Instant::now();
    let mut s = ready_session(now);
    assert_eq!(s.markers().len(), 2);

    // Hover "a": basic tooltip, no overlay.
    s.hover(Some("a"));
    let tip = s.basic_tooltip().unwrap();
    assert_eq!(tip.title, "A");
    assert!(!tip.pinned);
    assert!(!s.overlay_active());

    // Click "a": tooltip persists, overlay on. No detail affordance for "a".
    s.click(ClickTarget::Hotspot("a".into()));
    let tip = s.basic_tooltip().unwrap();
    assert_eq!(tip.hotspot_id, "a");
    assert!(tip.pinned);
    assert_eq!(tip.details_hint, None);
    assert!(s.overlay_active());

    // Click the tooltip of "a": nothing to show.
    assert_eq!(
        s.click(ClickTarget::Tooltip),
        Outcome::DetailUnavailable("a".into())
    );
    assert!(s.detail_panel().is_none());
    assert_eq!(phase(&s), &Phase::Pinned("a".into()));

    // Click "b": pin moves over.
    s.hover(Some("b"));
    s.click(ClickTarget::Hotspot("b".into()));
    let tip = s.basic_tooltip().unwrap();
    assert_eq!(tip.title, "B");
    assert!(tip.pinned);
    assert_eq!(tip.details_hint.as_deref(), Some("Click để xem chi tiết"));

    // Click the tooltip of "b": detail panel.
    s.click(ClickTarget::Tooltip);
    let detail = s.detail_panel().unwrap();
    assert_eq!(detail.body, "more");
    assert_eq!(detail.title, "B");

    // Click on empty page area: everything closes.
    s.hover(None);
    s.click(ClickTarget::Outside);
    assert_eq!(phase(&s), &Phase::Idle);
    assert!(s.basic_tooltip().is_none());
    assert!(s.detail_panel().is_none());
    assert!(!s.overlay_active());
}

#[test]
fn test_click_inside_detail_panel_keeps_state() {
    let now = Instant::now();
    let mut s = ready_session(now);
    s.click(ClickTarget::Hotspot("b".into()));
    s.click(ClickTarget::Tooltip);
    assert_eq!(s.click(ClickTarget::DetailPanel), Outcome::Unchanged);
    assert!(s.detail_panel().is_some());
}

#[test]
fn test_tooltip_anchored_to_marker() {
    let now = Instant::now();
    let mut s = ready_session(now);
    s.hover(Some("a"));
    let tip = s.basic_tooltip().unwrap();
    assert_abs_diff_eq!(tip.anchor.center().x, 500.0);
    assert_abs_diff_eq!(tip.anchor.center().y, 250.0);
}

#[test]
fn test_repeated_hover_reports_unchanged() {
    let now = Instant::now();
    let mut s = ready_session(now);
    assert_eq!(s.hover(Some("a")), Outcome::Changed);
    assert_eq!(s.hover(Some("a")), Outcome::Unchanged);
    assert_eq!(s.hover(None), Outcome::Changed);
    assert_eq!(s.hover(None), Outcome::Unchanged);
}

#[test]
fn test_rich_text_is_sanitized() {
    let now = Instant::now();
    let mut s = MapSession::new(&MapConfig::default()).unwrap();
    s.set_image_size(ImageSize::new(100.0, 100.0));
    let catalog = hotmap_core::hotspot::HotspotCatalog::from_json(
        r#"[{"id": "x", "x_percent": 5, "y_percent": 5, "location": "<b>Title</b>",
             "description": "a<br>b", "detailed_description": "<script>x</script>ok"}]"#,
    )
    .unwrap();
    s.data_loaded(Ok(catalog), now);
    s.click(ClickTarget::Hotspot("x".into()));
    s.click(ClickTarget::Tooltip);

    let tip = s.basic_tooltip().unwrap();
    assert_eq!(tip.title, "Title");
    assert_eq!(tip.description, "a\nb");
    assert!(!s.detail_panel().unwrap().body.contains('<'));
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

#[test]
fn test_load_failure_shows_one_message_and_no_markers() {
    let now = Instant::now();
    let mut s = MapSession::new(&MapConfig::default()).unwrap();
    s.set_image_size(ImageSize::new(1000.0, 500.0));
    s.data_loaded(Err(HotmapError::HttpStatus { status: 404 }), now);

    assert!(matches!(s.load_state(), LoadState::Failed(_)));
    assert_eq!(
        s.error_message(),
        Some("Không thể tải dữ liệu điểm nóng. Vui lòng kiểm tra lại file data.json.")
    );
    assert!(s.markers().is_empty());

    // Interaction stays inert.
    assert_eq!(s.click(ClickTarget::Outside), Outcome::Unchanged);
    assert!(s.basic_tooltip().is_none());
}

#[test]
fn test_failed_reload_replaces_markers_with_message() {
    let now = Instant::now();
    let mut s = ready_session(now);
    s.reset();
    assert_eq!(s.load_state(), &LoadState::Pending);
    assert!(s.markers().is_empty());

    let err = serde_json::from_str::<Vec<u8>>("nope").unwrap_err();
    s.data_loaded(Err(err.into()), now);
    assert!(s.error_message().is_some());
    assert!(s.markers().is_empty());
}

#[test]
fn test_data_before_image_size_lays_out_later() {
    let now = Instant::now();
    let mut s = MapSession::new(&MapConfig::default()).unwrap();
    s.data_loaded(Ok(common::two_record_catalog()), now);
    assert!(s.markers().is_empty());

    s.set_image_size(ImageSize::new(200.0, 100.0));
    assert_eq!(s.markers().len(), 2);
}

#[test]
fn test_empty_data_renders_nothing_without_error() {
    let now = Instant::now();
    let mut s = MapSession::new(&MapConfig::default()).unwrap();
    s.set_image_size(ImageSize::new(200.0, 100.0));
    s.data_loaded(Ok(Default::default()), now);
    assert!(s.markers().is_empty());
    assert_eq!(s.error_message(), None);
}

// ---------------------------------------------------------------------------
// Zoom and resize
// ---------------------------------------------------------------------------

#[test]
fn test_zoom_relayout_after_transition() {
    let t0 = Instant::now();
    let mut s = ready_session(t0);
    assert_eq!(s.zoom_label(), "Phóng to lên 100%");

    assert_eq!(s.zoom(t0), 100);
    assert_eq!(s.zoom_label(), "Thu nhỏ về 30%");

    // Container still easing: markers keep their old positions.
    s.set_image_size(ImageSize::new(1500.0, 750.0));
    assert_eq!(s.tick(t0 + Duration::from_millis(100)), None);
    assert_abs_diff_eq!(s.marker_layer().marker("a").unwrap().center.x, 500.0);

    s.set_image_size(ImageSize::new(2000.0, 1000.0));
    s.transition_finished();
    assert_eq!(s.tick(t0 + Duration::from_millis(500)), Some(RelayoutReason::Zoom));
    assert_abs_diff_eq!(s.marker_layer().marker("a").unwrap().center.x, 1000.0);
}

#[test]
fn test_zoom_fallback_without_transition_signal() {
    let t0 = Instant::now();
    let mut s = ready_session(t0);
    s.zoom(t0);
    s.set_image_size(ImageSize::new(2000.0, 1000.0));
    assert_eq!(s.tick(t0 + Duration::from_millis(549)), None);
    assert_eq!(s.tick(t0 + Duration::from_millis(550)), Some(RelayoutReason::Zoom));
    assert_eq!(s.markers().len(), 2);
}

#[test]
fn test_zoom_keeps_pin() {
    let t0 = Instant::now();
    let mut s = ready_session(t0);
    s.click(ClickTarget::Hotspot("a".into()));
    s.zoom(t0);
    s.transition_finished();
    s.tick(t0);
    assert_eq!(phase(&s), &Phase::Pinned("a".into()));
}

#[test]
fn test_resize_drops_pin_after_debounce() {
    let t0 = Instant::now();
    let mut s = ready_session(t0);
    s.click(ClickTarget::Hotspot("b".into()));
    s.click(ClickTarget::Tooltip);

    for i in 0..5 {
        s.window_resized(t0 + Duration::from_millis(i * 20));
    }
    s.set_image_size(ImageSize::new(600.0, 300.0));
    assert_eq!(s.tick(t0 + Duration::from_millis(200)), None);
    assert!(s.overlay_active());

    assert_eq!(
        s.tick(t0 + Duration::from_millis(400)),
        Some(RelayoutReason::Resize)
    );
    assert_eq!(phase(&s), &Phase::Idle);
    assert!(s.detail_panel().is_none());
    assert_abs_diff_eq!(s.marker_layer().marker("a").unwrap().center.x, 300.0);
    assert_eq!(s.markers().len(), 2);
}

#[test]
fn test_auto_advance_zoom_is_opt_in() {
    let now = Instant::now();
    let s = ready_session(now);
    assert_eq!(s.zoom_cycle().current(), 50);

    let config = MapConfig {
        auto_advance_zoom_on_load: true,
        ..MapConfig::default()
    };
    let mut s = MapSession::new(&config).unwrap();
    s.data_loaded(Ok(common::two_record_catalog()), now);
    assert_eq!(s.zoom_cycle().current(), 100);
}

// ---------------------------------------------------------------------------
// Coordinate readout
// ---------------------------------------------------------------------------

#[test]
fn test_readout_follows_pointer() {
    let now = Instant::now();
    let mut s = ready_session(now);
    assert_eq!(s.readout_text(), "Di chuyển chuột trên bản đồ để lấy tọa độ");

    s.pointer_moved(PixelPoint::new(250.0, 125.0));
    assert_eq!(s.readout_text(), "X: 25.00%, Y: 25.00%");

    s.pointer_left();
    assert_eq!(s.readout_text(), "Di chuyển chuột trên bản đồ để lấy tọa độ");
}
