#![allow(dead_code)]

use hotmap_core::hotspot::{HotspotCatalog, HotspotRecord};

/// Build a record with empty display strings.
pub fn record(id: &str, x_percent: f32, y_percent: f32) -> HotspotRecord {
    HotspotRecord {
        id: id.to_string(),
        x_percent,
        y_percent,
        location: String::new(),
        coordinates: String::new(),
        description: String::new(),
        detailed_description: None,
    }
}

/// The two records used by the hover/pin/detail walkthrough.
pub fn two_record_catalog() -> HotspotCatalog {
    let mut a = record("a", 50.0, 50.0);
    a.location = "A".into();
    let mut b = record("b", 10.0, 90.0);
    b.location = "B".into();
    b.detailed_description = Some("more".into());
    HotspotCatalog::new(vec![a, b]).expect("unique ids")
}

pub const TWO_RECORD_JSON: &str = r#"[
    {"id": "a", "x_percent": 50, "y_percent": 50, "location": "A"},
    {"id": "b", "x_percent": 10, "y_percent": 90, "location": "B", "detailed_description": "more"}
]"#;

/// Write a data file to a temporary location.
pub fn write_data_file(content: &str) -> tempfile::NamedTempFile {
    use std::io::Write;
    let mut f = tempfile::NamedTempFile::new().expect("create temp file");
    f.write_all(content.as_bytes()).expect("write data");
    f.flush().expect("flush");
    f
}
