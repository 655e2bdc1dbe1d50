//! Share-state codec.
//!
//! The input pane is shareable as a URL query parameter: the raw input lines
//! are serialized as a JSON array (a list that needs no length prefixes) and
//! encoded as URL-safe base64 so the payload survives inside a query string
//! without percent-escaping.
//!
//! Decoding is deliberately forgiving: a payload that fails at any stage
//! (base64, UTF-8, JSON) yields `None`, and the caller leaves its current
//! input untouched. A mangled share link is treated as no link at all.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Fixed query-parameter key the payload is stored under.
pub const SHARE_KEY: &str = "selectors";

/// Encode raw input lines into an ASCII-safe share payload.
///
/// # Panics
///
/// Panics if JSON serialization of a string list fails, which it cannot.
#[must_use]
pub fn encode_lines(lines: &[String]) -> String {
    let json = serde_json::to_string(lines).expect("a string list always serializes");
    URL_SAFE_NO_PAD.encode(json)
}

/// Decode a share payload back into input lines.
///
/// Returns `None` on any malformed payload rather than an error.
#[must_use]
pub fn decode_lines(payload: &str) -> Option<Vec<String>> {
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Build the full `key=payload` query string for the given input lines.
#[must_use]
pub fn share_query(lines: &[String]) -> String {
    format!("{SHARE_KEY}={}", encode_lines(lines))
}

/// Extract and decode the share payload from a query string.
///
/// Accepts the query with or without its leading `?`. Returns `None` when
/// the key is absent or the payload is malformed.
#[must_use]
pub fn lines_from_query(query: &str) -> Option<Vec<String>> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix(SHARE_KEY)?.strip_prefix('='))
        .and_then(decode_lines)
}
