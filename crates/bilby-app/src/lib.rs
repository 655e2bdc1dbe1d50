//! Text-pane pipeline for the Bilby selector tool.
//!
//! The tool's surface is two text panes: selectors go in one line at a
//! time, and each line comes back re-serialized in canonical form (or as an
//! error line). This crate is the glue between that surface and the
//! selector library: per-line parsing, the skipped-character lint, and the
//! share-link round trip. No matching happens here; callers that want
//! containment checks build a [`bilby_selector::MatchIndex`] themselves.

use bilby_common::{share, warning::warn_once};
use bilby_selector::{SelectorTokenizer, parse};

/// Render the output pane for the given input pane text.
///
/// Each input line is parsed independently (leading whitespace stripped
/// first) and produces exactly one output line: the parsed selectors
/// re-serialized and comma-joined, or `error: ...` when the line does not
/// parse. Output lines are newline-joined in input order.
#[must_use]
pub fn render_output(input: &str) -> String {
    input
        .lines()
        .map(|line| match parse(line.trim_start()) {
            Ok(selectors) => selectors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
            Err(error) => format!("error: {error}"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Warn (once per unique character) about input characters the selector
/// grammar skipped.
///
/// Combinator punctuation gets a pointed message, since selectors written
/// for this tool should not use combinators at all. Whitespace is passed
/// over silently; it carries no meaning in the dialect either, but flagging
/// every space would drown the signal.
pub fn lint_input(input: &str) {
    for line in input.lines() {
        let mut tokenizer = SelectorTokenizer::new(line.trim_start());
        tokenizer.run();
        for &c in tokenizer.skipped() {
            if c.is_whitespace() {
                continue;
            }
            if matches!(c, '>' | '+' | '~') {
                warn_once(
                    "selector",
                    &format!("ignored '{c}' (combinators are not supported)"),
                );
            } else {
                warn_once("selector", &format!("ignored character '{c}'"));
            }
        }
    }
}

/// Build the share query string for the current input pane.
#[must_use]
pub fn share_link(input: &str) -> String {
    let lines: Vec<String> = input.lines().map(String::from).collect();
    share::share_query(&lines)
}

/// Restore input pane text from a share query string.
///
/// Returns `None` when the query holds no share payload or a malformed one;
/// the caller keeps its current input in that case.
#[must_use]
pub fn restore(query: &str) -> Option<String> {
    share::lines_from_query(query).map(|lines| lines.join("\n"))
}
