//! Integration tests for selector parsing and serialization.

use bilby_selector::{ParseError, Selector, parse};

/// Helper: parse input that must yield exactly one selector
fn parse_one(input: &str) -> Selector {
    let selectors = parse(input).unwrap();
    assert_eq!(selectors.len(), 1, "expected one selector from {input:?}");
    selectors.into_iter().next().unwrap()
}

/// Helper: serialize a selector list back to comma-joined text
fn serialize(selectors: &[Selector]) -> String {
    selectors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[test]
fn test_parse_element_and_class() {
    let selector = parse_one("input.selected");
    assert_eq!(selector.element(), Some("input"));
    assert_eq!(selector.class_names(), ["selected"]);
    assert!(selector.attributes().is_empty());
    assert!(selector.not_groups().is_empty());
}

#[test]
fn test_class_names_are_lowercased() {
    let selector = parse_one(".Toolbar.BIG");
    assert_eq!(selector.class_names(), ["toolbar", "big"]);
}

#[test]
fn test_id_is_attribute_sugar() {
    let selector = parse_one("#Main");
    assert_eq!(selector.element(), None);
    assert_eq!(
        selector.attributes(),
        [("id".to_string(), "main".to_string())]
    );
}

#[test]
fn test_attribute_value_is_lowercased() {
    let selector = parse_one("[type=TEXT]");
    assert_eq!(
        selector.attributes(),
        [("type".to_string(), "text".to_string())]
    );
}

#[test]
fn test_attribute_presence_has_empty_value() {
    let selector = parse_one("[required]");
    assert_eq!(
        selector.attributes(),
        [("required".to_string(), String::new())]
    );
}

#[test]
fn test_quoted_attribute_values() {
    let double = parse_one("[title=\"Hello World\"]");
    let single = parse_one("[title='Hello World']");
    assert_eq!(double.attributes(), single.attributes());
    assert_eq!(
        double.attributes(),
        [("title".to_string(), "hello world".to_string())]
    );
}

#[test]
fn test_selector_list() {
    let selectors = parse("input.selected, .toolbar, #main").unwrap();
    assert_eq!(selectors.len(), 3);
    assert_eq!(selectors[0].element(), Some("input"));
    assert_eq!(selectors[1].class_names(), ["toolbar"]);
    assert_eq!(
        selectors[2].attributes(),
        [("id".to_string(), "main".to_string())]
    );
}

#[test]
fn test_empty_input_yields_one_bare_selector() {
    let selectors = parse("").unwrap();
    assert_eq!(selectors.len(), 1);
    assert!(selectors[0].is_bare());
    assert!(selectors[0].not_groups().is_empty());
}

#[test]
fn test_trailing_comma_yields_trailing_bare_selector() {
    let selectors = parse("a,").unwrap();
    assert_eq!(selectors.len(), 2);
    assert_eq!(selectors[0].element(), Some("a"));
    assert!(selectors[1].is_bare());
}

#[test]
fn test_negation_group() {
    let selector = parse_one("input:not(.disabled)");
    assert_eq!(selector.element(), Some("input"));
    assert_eq!(selector.not_groups().len(), 1);
    assert_eq!(selector.not_groups()[0].class_names(), ["disabled"]);
}

#[test]
fn test_negation_only_selector_normalizes_to_universal() {
    let selector = parse_one(":not(.x)");
    assert_eq!(selector.element(), Some("*"));
    assert_eq!(selector.not_groups().len(), 1);
    assert_eq!(selector.not_groups()[0].class_names(), ["x"]);
}

#[test]
fn test_nested_negation_is_rejected() {
    assert_eq!(parse("a:not(b:not(c))"), Err(ParseError::NestedNegation));
}

#[test]
fn test_selector_list_inside_negation_is_rejected() {
    assert_eq!(
        parse("a:not(b, c)"),
        Err(ParseError::MultipleSelectorsInNegation)
    );
}

#[test]
fn test_unescaped_dollar_is_rejected() {
    assert!(matches!(
        parse("[na$me]"),
        Err(ParseError::UnescapedDollar { name }) if name == "na$me"
    ));
}

#[test]
fn test_escaped_dollar_is_kept_literally() {
    let selector = parse_one("[na\\$me]");
    assert_eq!(
        selector.attributes(),
        [("na$me".to_string(), String::new())]
    );
}

#[test]
fn test_backslashes_are_dropped_from_attribute_names() {
    let selector = parse_one("[da\\ta]");
    assert_eq!(selector.attributes()[0].0, "data");
}

#[test]
fn test_combinator_characters_have_no_structural_effect() {
    // "div > p" carries no combinator meaning here; the later element
    // fragment simply overwrites the earlier one.
    let selector = parse_one("div > p");
    assert_eq!(selector.element(), Some("p"));
}

#[test]
fn test_stray_close_paren_is_ignored() {
    let selector = parse_one("a)");
    assert_eq!(selector.element(), Some("a"));
    assert!(selector.not_groups().is_empty());
}

#[test]
fn test_unclosed_negation_closes_at_end_of_input() {
    let selector = parse_one("a:not(.b");
    assert_eq!(selector.element(), Some("a"));
    assert_eq!(selector.not_groups().len(), 1);
    assert_eq!(selector.not_groups()[0].class_names(), ["b"]);
}

#[test]
fn test_display_canonical_form() {
    let selector = parse_one("input.selected[required]:not(.disabled)");
    assert_eq!(
        selector.to_string(),
        "input.selected[required]:not(.disabled)"
    );
}

#[test]
fn test_display_reescapes_attribute_names() {
    let selector = parse_one("[na\\$me=x]");
    assert_eq!(selector.to_string(), "[na\\$me=x]");
}

#[test]
fn test_roundtrip_reparses_to_equal_structure() {
    let inputs = [
        "input.selected",
        "#Main.Toolbar[type=\"TEXT\"]",
        "a:not(.b), [required], :not(.x)",
        "[na\\$me='Q']",
    ];
    for input in inputs {
        let first = parse(input).unwrap();
        let second = parse(&serialize(&first)).unwrap();
        assert_eq!(first, second, "round-trip changed structure for {input:?}");
    }
}

#[test]
fn test_parse_is_idempotent_through_serialization() {
    let first = parse("DIV.Item[lang='EN']:not(#Hidden)").unwrap();
    let rendered = serialize(&first);
    let again = parse(&serialize(&parse(&rendered).unwrap())).unwrap();
    assert_eq!(first, again);
}
