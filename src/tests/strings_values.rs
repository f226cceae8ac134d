use super::*;
use crate::escape::{escape_interior, escape_string_values};
use crate::repair::Logger;
use crate::tokenize::tokenize;

#[test]
fn raw_quotes_are_escaped() {
    assert_eq!(escape_interior(r#"say "hi""#), r#"say \"hi\""#);
}

#[test]
fn existing_escapes_survive() {
    assert_eq!(escape_interior(r#"a \" b \\ c"#), r#"a \" b \\ c"#);
}

#[test]
fn control_characters_get_two_char_forms() {
    assert_eq!(escape_interior("a\nb\tc\rd"), r"a\nb\tc\rd");
}

#[test]
fn backslash_before_raw_newline() {
    // A backslash followed by a literal newline must not leave the newline raw.
    assert_eq!(escape_interior("a\\\nb"), r"a\\nb");
}

#[test]
fn lone_trailing_backslash_is_doubled() {
    assert_eq!(escape_interior("a\\"), r"a\\");
}

#[test]
fn reconstruction_rewrites_value_interiors_only() {
    let o = opts();
    let mut log = Logger::new(&o);
    let t = tokenize("{\"k\": \"a\nb\"}", &o, &mut log);
    let out = escape_string_values(&t, &mut log);
    assert_eq!(out, "{\"k\":\"a\\nb\"}");
}

#[test]
fn non_value_strings_pass_through() {
    let o = opts();
    let mut log = Logger::new(&o);
    let t = tokenize(r#"{"a b": 1}"#, &o, &mut log);
    let out = escape_string_values(&t, &mut log);
    assert_eq!(out, r#"{"a b":1}"#);
}
