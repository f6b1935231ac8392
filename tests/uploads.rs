#![cfg(feature = "json")]

use bison_env::http::upload::{self, Upload, UploadError};
use bison_env::Request;

const FORM: &str = r#"{
    "avatar": {
        "name": "a.png",
        "type": "image/png",
        "tmp_name": "/tmp/upload1",
        "error": 0,
        "size": 10
    },
    "photos": {
        "name": ["a.png", "b.png"],
        "type": ["image/png", "image/jpeg"],
        "tmp_name": ["/tmp/upload2", "/tmp/upload3"],
        "error": [0, 0],
        "size": [10, 20]
    },
    "broken": {
        "name": ["c.png"],
        "error": [3]
    }
}"#;

fn request() -> Request {
    let mut req = Request::new();
    req.set_uploads(upload::from_json(FORM).unwrap());
    req
}

#[test]
fn multiple_files() {
    let req = request();

    let photos = match req.file("photos") {
        Some(Upload::Multiple(records)) => records,
        other => panic!("expected multiple uploads, got {:?}", other),
    };

    assert_eq!(photos.len(), 2);

    assert_eq!(photos[0].name.as_deref(), Some("a.png"));
    assert_eq!(photos[0].size, 10);
    assert_eq!(photos[0].error, UploadError::None);

    assert_eq!(photos[1].name.as_deref(), Some("b.png"));
    assert_eq!(photos[1].mime_type.as_deref(), Some("image/jpeg"));
    assert_eq!(photos[1].tmp_name.as_deref(), Some("/tmp/upload3"));
    assert_eq!(photos[1].size, 20);
    assert!(photos[1].is_ok());
}

#[test]
fn single_file() {
    let req = request();

    let avatar = match req.file("avatar") {
        Some(Upload::Single(record)) => record,
        other => panic!("expected a single upload, got {:?}", other),
    };

    assert_eq!(avatar.name.as_deref(), Some("a.png"));
    assert_eq!(avatar.mime_type.as_deref(), Some("image/png"));
    assert_eq!(avatar.size, 10);
    assert!(!req.file("avatar").unwrap().is_multiple());
}

#[test]
fn missing_slots() {
    let req = request();
    let broken = req.files("broken");

    assert_eq!(broken.len(), 1);
    assert_eq!(broken[0].error, UploadError::Partial);
    assert_eq!(broken[0].mime_type, None);
    assert_eq!(broken[0].size, 0);
    assert!(!broken[0].is_ok());
}

#[test]
fn missing_field() {
    let req = request();

    assert_eq!(req.file("resume"), None);
    assert!(req.files("resume").is_empty());
}
