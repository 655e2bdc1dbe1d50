//! Integration tests for the share-state codec.

use bilby_common::share::{
    SHARE_KEY, decode_lines, encode_lines, lines_from_query, share_query,
};

/// Helper to build an owned line list
fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

#[test]
fn test_encode_decode_roundtrip() {
    let input = lines(&["input.selected", ".toolbar, .menu", ""]);
    let payload = encode_lines(&input);
    assert_eq!(decode_lines(&payload), Some(input));
}

#[test]
fn test_payload_is_ascii_safe() {
    let payload = encode_lines(&lines(&["a:not(.b)", "[na\\$me='Ünïcode']"]));
    assert!(payload.is_ascii());
    assert!(!payload.contains('='), "payload must be padding-free");
    assert!(!payload.contains('&'));
}

#[test]
fn test_decode_garbage_is_none() {
    assert_eq!(decode_lines("!!not base64!!"), None);
    // Valid base64, but not a JSON string list underneath.
    assert_eq!(decode_lines("aGVsbG8"), None);
}

#[test]
fn test_query_roundtrip() {
    let input = lines(&["div.item", "#main"]);
    let query = share_query(&input);
    assert!(query.starts_with(&format!("{SHARE_KEY}=")));
    assert_eq!(lines_from_query(&query), Some(input));
}

#[test]
fn test_query_with_other_parameters() {
    let input = lines(&[".a"]);
    let query = format!("theme=dark&{}&lang=en", share_query(&input));
    assert_eq!(lines_from_query(&query), Some(input));
}

#[test]
fn test_query_accepts_leading_question_mark() {
    let input = lines(&[".a"]);
    let query = format!("?{}", share_query(&input));
    assert_eq!(lines_from_query(&query), Some(input));
}

#[test]
fn test_missing_or_malformed_key_is_none() {
    assert_eq!(lines_from_query("theme=dark"), None);
    assert_eq!(lines_from_query(""), None);
    // A prefix-sharing key must not be mistaken for ours.
    assert_eq!(lines_from_query("selectorsx=abc"), None);
    // Present key, mangled payload: ignored rather than an error.
    assert_eq!(lines_from_query("selectors=%%%"), None);
}
