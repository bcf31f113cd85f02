mod common;

use approx::assert_abs_diff_eq;

use hotmap_core::hotspot::HotspotCatalog;
use hotmap_core::layout::{ImageSize, PixelPoint};
use hotmap_core::render::MarkerLayer;

#[test]
fn test_one_marker_per_record() {
    let catalog = common::two_record_catalog();
    let mut layer = MarkerLayer::new(40.0);
    layer.rebuild(&catalog, ImageSize::new(800.0, 600.0));

    assert_eq!(layer.len(), 2);
    let ids: Vec<_> = layer.markers().iter().map(|m| m.hotspot_id.as_str()).collect();
    assert_eq!(ids, ["a", "b"]);
}

#[test]
fn test_rebuild_is_idempotent() {
    let catalog = common::two_record_catalog();
    let mut layer = MarkerLayer::new(40.0);
    let size = ImageSize::new(800.0, 600.0);
    layer.rebuild(&catalog, size);
    let first = layer.markers().to_vec();

    for _ in 0..5 {
        layer.rebuild(&catalog, size);
    }
    assert_eq!(layer.markers(), first.as_slice());
    assert_eq!(layer.generation(), 6);
}

#[test]
fn test_rebuild_moves_markers_to_new_size() {
    let catalog = common::two_record_catalog();
    let mut layer = MarkerLayer::new(40.0);
    layer.rebuild(&catalog, ImageSize::new(800.0, 600.0));
    layer.rebuild(&catalog, ImageSize::new(400.0, 300.0));

    let a = layer.marker("a").unwrap();
    assert_abs_diff_eq!(a.center.x, 200.0);
    assert_abs_diff_eq!(a.center.y, 150.0);
    assert_abs_diff_eq!(a.rect.x, 180.0);
    assert_eq!(layer.laid_out_for(), Some(ImageSize::new(400.0, 300.0)));
}

#[test]
fn test_empty_catalog_renders_nothing() {
    let mut layer = MarkerLayer::new(40.0);
    layer.rebuild(&common::two_record_catalog(), ImageSize::new(100.0, 100.0));
    layer.rebuild(&HotspotCatalog::default(), ImageSize::new(100.0, 100.0));
    assert!(layer.is_empty());
}

#[test]
fn test_hit_test() {
    let catalog = common::two_record_catalog();
    let mut layer = MarkerLayer::new(40.0);
    layer.rebuild(&catalog, ImageSize::new(1000.0, 1000.0));

    // "a" sits at (500, 500), "b" at (100, 900).
    assert_eq!(
        layer.hit_test(PixelPoint::new(515.0, 485.0)).map(|m| m.hotspot_id.as_str()),
        Some("a")
    );
    assert_eq!(
        layer.hit_test(PixelPoint::new(100.0, 900.0)).map(|m| m.hotspot_id.as_str()),
        Some("b")
    );
    assert!(layer.hit_test(PixelPoint::new(300.0, 300.0)).is_none());
}

#[test]
fn test_hit_test_prefers_topmost() {
    let catalog = HotspotCatalog::new(vec![
        common::record("under", 50.0, 50.0),
        common::record("over", 51.0, 50.0),
    ])
    .unwrap();
    let mut layer = MarkerLayer::new(40.0);
    layer.rebuild(&catalog, ImageSize::new(1000.0, 1000.0));
    let hit = layer.hit_test(PixelPoint::new(505.0, 500.0)).unwrap();
    assert_eq!(hit.hotspot_id, "over");
}

#[test]
fn test_clear() {
    let mut layer = MarkerLayer::new(40.0);
    layer.rebuild(&common::two_record_catalog(), ImageSize::new(100.0, 100.0));
    layer.clear();
    assert!(layer.is_empty());
    assert_eq!(layer.laid_out_for(), None);
}
