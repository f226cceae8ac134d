use super::*;

// Shared test helpers

fn opts() -> Options {
    Options::default()
}

fn repaired(s: &str) -> String {
    crate::repair_to_string(s, &opts()).unwrap()
}

fn parsed(s: &str) -> serde_json::Value {
    serde_json::from_str(&repaired(s)).unwrap()
}

/// Net bracket nesting depth, counting only structural brackets.
fn structural_depth(text: &str) -> i32 {
    let mut depth = 0;
    for ev in crate::scan::QuoteAwareScan::new(text) {
        if ev.quoted {
            continue;
        }
        match ev.ch {
            '{' | '[' => depth += 1,
            '}' | ']' => depth -= 1,
            _ => {}
        }
    }
    depth
}

// Submodules (topic-based)
mod brackets;
mod file_trees;
mod strings_values;
