use super::*;
use crate::balance::{append_missing_closers, remove_extra_closers};
use crate::repair::Logger;

fn remove(s: &str) -> String {
    let o = opts();
    let mut log = Logger::new(&o);
    remove_extra_closers(s, &mut log)
}

fn append(s: &str) -> String {
    let o = opts();
    let mut log = Logger::new(&o);
    append_missing_closers(s, &mut log)
}

#[test]
fn stray_closing_brace_is_dropped() {
    assert_eq!(remove(r#"{"a":1}}"#), r#"{"a":1}"#);
}

#[test]
fn mismatched_closer_is_dropped() {
    assert_eq!(remove("[1}"), "[1");
}

#[test]
fn closers_inside_strings_survive() {
    assert_eq!(remove(r#"{"a":"}"}"#), r#"{"a":"}"}"#);
}

#[test]
fn missing_closers_appended_innermost_first() {
    assert_eq!(append(r#"{"a":[1,2"#), r#"{"a":[1,2]}"#);
}

#[test]
fn balanced_text_is_untouched() {
    assert_eq!(append(r#"{"a":[1]}"#), r#"{"a":[1]}"#);
}

#[test]
fn openers_inside_strings_need_no_closers() {
    assert_eq!(append(r#"{"a":"{["}"#), r#"{"a":"{["}"#);
}
