//! Integration tests for the text-pane pipeline.

use bilby_app::{render_output, restore, share_link};

#[test]
fn test_one_output_line_per_input_line() {
    let output = render_output("input.selected\n.toolbar, .menu\n#main");
    let output_lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        output_lines,
        ["input.selected", ".toolbar, .menu", "[id=main]"]
    );
}

#[test]
fn test_leading_whitespace_is_stripped_per_line() {
    assert_eq!(render_output("   input.selected"), "input.selected");
}

#[test]
fn test_error_lines_do_not_stop_other_lines() {
    let output = render_output(".fine\na:not(b:not(c))\n.also-fine");
    let output_lines: Vec<&str> = output.lines().collect();
    assert_eq!(output_lines.len(), 3);
    assert_eq!(output_lines[0], ".fine");
    assert!(output_lines[1].starts_with("error: "));
    assert_eq!(output_lines[2], ".also-fine");
}

#[test]
fn test_output_is_canonicalized() {
    // Quoting and case are normalized; combinator punctuation vanishes.
    let output = render_output("DIV.Item[lang='EN']\nul > li");
    let output_lines: Vec<&str> = output.lines().collect();
    assert_eq!(output_lines, ["DIV.item[lang=en]", "li"]);
}

#[test]
fn test_share_roundtrip_preserves_raw_input() {
    // The share payload carries the raw lines, not the canonical rendering.
    let input = "DIV.Item[lang='EN']\na:not(.b)";
    let query = share_link(input);
    assert_eq!(restore(&query).as_deref(), Some(input));
}

#[test]
fn test_restore_from_garbage_is_none() {
    assert_eq!(restore("selectors=@@@"), None);
    assert_eq!(restore("unrelated=1"), None);
}
