use super::*;

// =============================================================
// encode_data_url
// =============================================================

#[test]
fn encode_data_url_uses_mime_and_base64_payload() {
    assert_eq!(encode_data_url("image/png", b"hello"), "data:image/png;base64,aGVsbG8=");
}

#[test]
fn encode_data_url_handles_empty_file() {
    assert_eq!(encode_data_url("image/gif", &[]), "data:image/gif;base64,");
}

#[test]
fn encode_data_url_falls_back_when_mime_missing() {
    assert_eq!(
        encode_data_url("  ", &[0xff, 0x00]),
        "data:application/octet-stream;base64,/wA="
    );
}

// =============================================================
// is_image_mime
// =============================================================

#[test]
fn is_image_mime_accepts_image_types() {
    assert!(is_image_mime("image/png"));
    assert!(is_image_mime("image/svg+xml"));
    assert!(is_image_mime("IMAGE/JPEG"));
}

#[test]
fn is_image_mime_rejects_other_types() {
    assert!(!is_image_mime("text/plain"));
    assert!(!is_image_mime("image/"));
    assert!(!is_image_mime(""));
    assert!(!is_image_mime("application/image"));
}

#[test]
fn image_load_error_messages_name_the_cause() {
    assert_eq!(
        ImageLoadError::NotAnImage("notes.txt".to_owned()).to_string(),
        "not an image file: notes.txt"
    );
    assert_eq!(ImageLoadError::Read("aborted".to_owned()).to_string(), "file read failed: aborted");
}
