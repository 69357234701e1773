use gemini_wire::{Blob, FileData, Part};

#[test]
fn test_text_part_decodes() {
    let json = r#"{"text": "hello"}"#;

    let part: Part = serde_json::from_str(json).expect("text part should decode");
    assert_eq!(part.as_text(), Some("hello"));
}

#[test]
fn test_inline_data_part_decodes() {
    let json = r#"{"inline_data": {"mime_type": "image/png", "data": "QUJD"}}"#;

    let part: Part = serde_json::from_str(json).expect("inline_data part should decode");
    assert_eq!(part.as_inline_data(), Some(&Blob::new("image/png", "QUJD")));
}

#[test]
fn test_file_data_part_decodes() {
    let json = r#"{"file_data": {"mime_type": "video/mp4", "file_uri": "https://example.com/a.mp4"}}"#;

    let part: Part = serde_json::from_str(json).expect("file_data part should decode");
    assert_eq!(
        part.as_file_data(),
        Some(&FileData::new("video/mp4", "https://example.com/a.mp4"))
    );
}

#[test]
fn test_text_wins_over_inline_data() {
    let json = r#"{
        "text": "hello",
        "inline_data": {"mime_type": "image/png", "data": "QUJD"}
    }"#;

    let part: Part = serde_json::from_str(json).expect("part should decode");
    assert_eq!(part.as_text(), Some("hello"), "text key takes priority");
}

#[test]
fn test_inline_data_wins_over_file_data() {
    let json = r#"{
        "inline_data": {"mime_type": "image/png", "data": "QUJD"},
        "file_data": {"mime_type": "video/mp4", "file_uri": "https://example.com/a.mp4"}
    }"#;

    let part: Part = serde_json::from_str(json).expect("part should decode");
    assert!(
        part.as_inline_data().is_some(),
        "inline_data key takes priority over file_data"
    );
}

#[test]
fn test_unknown_part_shape_fails() {
    let json = r#"{"file_url": "x"}"#;

    let result: Result<Part, _> = serde_json::from_str(json);
    let err = result.expect_err("object without a known part key must not decode");
    assert!(
        err.to_string().contains("Unknown Part type"),
        "unexpected error: {err}"
    );
}

#[test]
fn test_non_object_part_fails() {
    let result: Result<Part, _> = serde_json::from_str(r#""hello""#);
    assert!(result.is_err(), "a part must be a JSON object");
}

#[test]
fn test_matched_key_with_malformed_value_fails() {
    // The `text` key selects the variant, so a non-string value is a decode
    // error rather than a fall-through to `inline_data`.
    let json = r#"{
        "text": 42,
        "inline_data": {"mime_type": "image/png", "data": "QUJD"}
    }"#;

    let result: Result<Part, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn test_missing_required_blob_field_fails() {
    let json = r#"{"inline_data": {"mime_type": "image/png"}}"#;

    let result: Result<Part, _> = serde_json::from_str(json);
    let err = result.expect_err("blob without data must not decode");
    assert!(err.to_string().contains("data"), "unexpected error: {err}");
}

#[test]
fn test_unknown_sibling_keys_are_ignored() {
    let json = r#"{"text": "hello", "thought": true}"#;

    let part: Part = serde_json::from_str(json).expect("extra keys should be ignored");
    assert_eq!(part.as_text(), Some("hello"));
}
