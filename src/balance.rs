use crate::repair::Logger;
use crate::scan::{QuoteAwareScan, contains_closer, contains_opener};

/// First balancer pass: drop closing braces/brackets with no matching opener.
/// Brackets inside string literals are never structural.
pub(crate) fn remove_extra_closers(text: &str, log: &mut Logger) -> String {
    if !contains_closer(text) {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut stack: Vec<char> = Vec::new();
    for (i, ev) in QuoteAwareScan::new(text).enumerate() {
        if ev.quoted {
            out.push(ev.ch);
            continue;
        }
        match ev.ch {
            '{' | '[' => {
                stack.push(ev.ch);
                out.push(ev.ch);
            }
            '}' => {
                if stack.last() == Some(&'{') {
                    stack.pop();
                    out.push('}');
                } else {
                    log.log_at("balance", i, "dropped unmatched '}'", text);
                }
            }
            ']' => {
                if stack.last() == Some(&'[') {
                    stack.pop();
                    out.push(']');
                } else {
                    log.log_at("balance", i, "dropped unmatched ']'", text);
                }
            }
            c => out.push(c),
        }
    }
    out
}

/// Second balancer pass: track the closers each opener still expects and
/// append whatever remains unmatched at end of input, innermost first.
pub(crate) fn append_missing_closers(text: &str, log: &mut Logger) -> String {
    if !contains_opener(text) {
        return text.to_string();
    }
    let mut stack: Vec<char> = Vec::new();
    for ev in QuoteAwareScan::new(text) {
        if ev.quoted {
            continue;
        }
        match ev.ch {
            '{' => stack.push('}'),
            '[' => stack.push(']'),
            '}' | ']' => {
                if stack.last() == Some(&ev.ch) {
                    stack.pop();
                }
            }
            _ => {}
        }
    }
    if stack.is_empty() {
        return text.to_string();
    }
    let mut appended = String::with_capacity(stack.len());
    while let Some(c) = stack.pop() {
        appended.push(c);
    }
    log.log(
        "balance",
        text.chars().count(),
        "appended missing closers",
        appended.clone(),
    );
    let mut out = String::with_capacity(text.len() + appended.len());
    out.push_str(text);
    out.push_str(&appended);
    out
}
