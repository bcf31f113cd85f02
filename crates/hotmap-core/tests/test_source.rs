mod common;

use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;

use hotmap_core::error::{DataFailure, HotmapError};
use hotmap_core::hotspot::HotspotCatalog;
use hotmap_core::source::HotspotSource;

/// Serve a single HTTP response on a local port and return its URL.
fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    std::thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        }
    });
    format!("http://{addr}/data.json")
}

// ---------------------------------------------------------------------------
// Source parsing
// ---------------------------------------------------------------------------

#[test]
fn test_parse_source_kinds() {
    assert_eq!(
        HotspotSource::parse("https://example.com/data.json"),
        HotspotSource::Url("https://example.com/data.json".into())
    );
    assert_eq!(
        HotspotSource::parse("maps/data.json"),
        HotspotSource::File(PathBuf::from("maps/data.json"))
    );
}

// ---------------------------------------------------------------------------
// Local files
// ---------------------------------------------------------------------------

#[test]
fn test_load_from_file() {
    let file = common::write_data_file(common::TWO_RECORD_JSON);
    let catalog = HotspotSource::File(file.path().to_path_buf()).load().unwrap();
    assert_eq!(catalog.len(), 2);
    let b = catalog.get("b").unwrap();
    assert_eq!(b.location, "B");
    assert!(b.has_detail());
    assert!(!catalog.get("a").unwrap().has_detail());
    assert_eq!(catalog.get("a").unwrap().description, "");
}

#[test]
fn test_missing_file_is_load_failure() {
    let dir = tempfile::tempdir().unwrap();
    let err = HotspotSource::File(dir.path().join("nope.json"))
        .load()
        .unwrap_err();
    assert_eq!(err.data_failure(), Some(DataFailure::Load));
}

#[test]
fn test_malformed_body_is_parse_failure() {
    let file = common::write_data_file("{ not json");
    let err = HotspotSource::File(file.path().to_path_buf())
        .load()
        .unwrap_err();
    assert!(matches!(err, HotmapError::Parse(_)));
    assert_eq!(err.data_failure(), Some(DataFailure::Parse));
}

#[test]
fn test_wrong_shape_is_parse_failure() {
    let file = common::write_data_file(r#"{"id": "a"}"#);
    let err = HotspotSource::File(file.path().to_path_buf())
        .load()
        .unwrap_err();
    assert_eq!(err.data_failure(), Some(DataFailure::Parse));
}

#[test]
fn test_duplicate_id_rejected() {
    let err = HotspotCatalog::from_json(
        r#"[{"id": "x", "x_percent": 1, "y_percent": 1},
            {"id": "x", "x_percent": 2, "y_percent": 2}]"#,
    )
    .unwrap_err();
    assert!(matches!(err, HotmapError::DuplicateId(ref id) if id == "x"));
    assert_eq!(err.data_failure(), Some(DataFailure::Parse));
}

#[test]
fn test_empty_array_is_valid() {
    let catalog = HotspotCatalog::from_json("[]").unwrap();
    assert!(catalog.is_empty());
}

#[test]
fn test_blank_detail_has_no_affordance() {
    let catalog = HotspotCatalog::from_json(
        r#"[{"id": "x", "x_percent": 1, "y_percent": 1, "detailed_description": "  "}]"#,
    )
    .unwrap();
    assert!(!catalog.get("x").unwrap().has_detail());
}

// ---------------------------------------------------------------------------
// HTTP
// ---------------------------------------------------------------------------

#[test]
fn test_fetch_over_http() {
    let url = serve_once("200 OK", common::TWO_RECORD_JSON);
    let catalog = HotspotSource::Url(url).load().unwrap();
    assert_eq!(catalog.len(), 2);
}

#[test]
fn test_http_error_status_is_load_failure() {
    let url = serve_once("404 Not Found", "");
    let err = HotspotSource::Url(url).load().unwrap_err();
    assert!(matches!(err, HotmapError::HttpStatus { status: 404 }));
    assert_eq!(err.data_failure(), Some(DataFailure::Load));
}

#[test]
fn test_connection_refused_is_load_failure() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let err = HotspotSource::Url(format!("http://127.0.0.1:{port}/data.json"))
        .load()
        .unwrap_err();
    assert_eq!(err.data_failure(), Some(DataFailure::Load));
}
