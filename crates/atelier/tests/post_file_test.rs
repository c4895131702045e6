//! Tests for loading posts from JSON files.

use atelier::{AtelierErrorKind, IoErrorKind, PostId, load_post};
use tempfile::TempDir;

#[test]
fn test_load_post_reads_backend_shape() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("21.json");
    std::fs::write(
        &path,
        r#"{"id": 21, "authorId": "42", "allowedRoleIds": ["vip"],
            "media": [{"id": 300, "mimeClass": "image", "hasThumbnail": true}]}"#,
    )
    .unwrap();

    let post = load_post(&path).unwrap();
    assert_eq!(post.id(), &PostId::from(21u64));
    assert_eq!(post.media().len(), 1);
}

#[test]
fn test_missing_post_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let err = load_post(dir.path().join("absent.json")).unwrap_err();

    match err.kind() {
        AtelierErrorKind::Io(io) => {
            assert!(matches!(io.kind(), IoErrorKind::NotFound(detail) if detail.contains("absent.json")));
        }
        other => panic!("expected an IO error, got {other}"),
    }
}

#[test]
fn test_malformed_post_file_is_a_json_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = load_post(&path).unwrap_err();
    assert!(matches!(err.kind(), AtelierErrorKind::Json(_)));
}
