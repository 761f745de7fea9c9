//! Byte-exact output contract tests.
//!
//! The serializer's format is a compatibility contract: compact single-line
//! arrays, line-broken key-sorted objects, and a fixed escape table. These
//! tests pin the exact bytes.

use json_doc::{from_str, json, to_string, Document, Value};

fn render(text: &str) -> String {
    to_string(&from_str(text).unwrap())
}

#[test]
fn test_scalar_forms() {
    assert_eq!(render("null"), "null");
    assert_eq!(render("true"), "true");
    assert_eq!(render("false"), "false");
    assert_eq!(render("42"), "42");
    assert_eq!(render("-7"), "-7");
}

#[test]
fn test_int_prints_without_decimal_point() {
    assert_eq!(render("3"), "3");
    assert_eq!(to_string(&Document::new(Value::Int(2147483647))), "2147483647");
}

#[test]
fn test_double_always_prints_with_marker() {
    assert_eq!(render("1.5"), "1.5");
    assert_eq!(render("1.0"), "1.0");
    // 1e2 is a double even though integral-valued, and stays one
    assert_eq!(render("1e2"), "100.0");
    assert_eq!(render("2147483648"), "2147483648.0");
}

#[test]
fn test_array_is_compact_single_line() {
    assert_eq!(render("[1,2,3]"), "[1, 2, 3]");
    assert_eq!(render("[]"), "[]");
    assert_eq!(render("[[1],[2]]"), "[[1], [2]]");
}

#[test]
fn test_object_is_line_broken_and_key_sorted() {
    assert_eq!(render(r#"{"b":1,"a":2}"#), "{\n\"a\": 2,\n\"b\": 1}\n");
}

#[test]
fn test_single_entry_object() {
    assert_eq!(render(r#"{"only": []}"#), "{\n\"only\": []}\n");
}

#[test]
fn test_empty_object() {
    assert_eq!(render("{}"), "{\n}\n");
}

#[test]
fn test_no_trailing_separators() {
    let text = render(r#"{"a":1,"b":2,"c":3}"#);
    assert!(!text.contains(",\n}"));
    assert_eq!(text, "{\n\"a\": 1,\n\"b\": 2,\n\"c\": 3}\n");

    let text = render("[1,2]");
    assert!(!text.ends_with(", ]"));
}

#[test]
fn test_mixed_nesting_keeps_asymmetry() {
    // arrays stay compact even when they hold line-broken objects
    assert_eq!(
        render(r#"[{"k":1},2]"#),
        "[{\n\"k\": 1}\n, 2]"
    );
    // objects line-break even when they hold compact arrays
    assert_eq!(
        render(r#"{"v":[1,2]}"#),
        "{\n\"v\": [1, 2]}\n"
    );
}

#[test]
fn test_string_escape_table() {
    assert_eq!(render(r#""a\nb""#), r#""a\nb""#);
    assert_eq!(render(r#""a\tb""#), r#""a\tb""#);
    assert_eq!(render(r#""a\rb""#), r#""a\rb""#);
    assert_eq!(render(r#""a\"b""#), r#""a\"b""#);
    assert_eq!(render(r#""a\\b""#), r#""a\\b""#);
    // everything else is verbatim
    assert_eq!(render("\"héllo/world\""), "\"héllo/world\"");
}

#[test]
fn test_programmatic_tree_formats_identically() {
    let built = Document::new(json!({"b": 1, "a": [true, null]}));
    let parsed = from_str(r#"{"a": [true, null], "b": 1}"#).unwrap();
    assert_eq!(to_string(&built), to_string(&parsed));
    assert_eq!(to_string(&built), "{\n\"a\": [true, null],\n\"b\": 1}\n");
}
