use crate::options::Options;
use crate::repair::Logger;
use crate::scan::is_whitespace;

/// How a string literal sits in the surrounding structure. Only `Value`
/// interiors are rewritten by the escaper; keys and stray quoted fragments
/// pass through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Role {
    Value,
    NotAValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// A quoted string literal, raw text including both delimiting quotes.
    Str { raw: String, role: Role },
    /// Any other non-whitespace character, reproduced verbatim on output.
    /// Numbers, booleans and bare identifiers arrive as runs of these.
    Symbol(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Container {
    Object,
    Array,
}

/// Split the input into string-literal and structural-symbol tokens.
/// Whitespace between tokens is dropped; everything else is covered.
/// This never fails: an unterminated literal is closed at end of input.
pub(crate) fn tokenize(input: &str, opts: &Options, log: &mut Logger) -> Vec<Token> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut containers: Vec<Container> = Vec::new();
    let mut i = 0usize;
    while i < chars.len() {
        let c = chars[i];
        if c == '"' {
            let role = role_at(&chars, i, &containers, opts);
            let (raw, next) = match role {
                Role::Value => read_value_string(&chars, i, input, log),
                Role::NotAValue => read_plain_string(&chars, i, input, log),
            };
            tokens.push(Token::Str { raw, role });
            i = next;
        } else if is_whitespace(c) {
            i += 1;
        } else {
            match c {
                '{' => containers.push(Container::Object),
                '[' => containers.push(Container::Array),
                '}' | ']' => {
                    containers.pop();
                }
                _ => {}
            }
            tokens.push(Token::Symbol(c));
            i += 1;
        }
    }
    tokens
}

/// A literal is a value when the nearest preceding non-whitespace character
/// is `:`. With `escape_array_strings`, string elements of arrays (preceded
/// by `[` or `,` while the innermost open container is an array) count too.
fn role_at(chars: &[char], open: usize, containers: &[Container], opts: &Options) -> Role {
    let mut j = open;
    while j > 0 {
        j -= 1;
        let c = chars[j];
        if is_whitespace(c) {
            continue;
        }
        if c == ':' {
            return Role::Value;
        }
        if opts.escape_array_strings
            && matches!(c, '[' | ',')
            && containers.last() == Some(&Container::Array)
        {
            return Role::Value;
        }
        return Role::NotAValue;
    }
    Role::NotAValue
}

/// Strict literal scan: ends at the first unescaped `"`.
fn read_plain_string(chars: &[char], start: usize, input: &str, log: &mut Logger) -> (String, usize) {
    let mut raw = String::from('"');
    let mut escape_next = false;
    let mut i = start + 1;
    while i < chars.len() {
        let c = chars[i];
        raw.push(c);
        if escape_next {
            escape_next = false;
        } else if c == '\\' {
            escape_next = true;
        } else if c == '"' {
            return (raw, i + 1);
        }
        i += 1;
    }
    log.log_at("tokenize", start, "closed unterminated string at end of input", input);
    raw.push('"');
    (raw, chars.len())
}

/// Lenient literal scan for values: an unescaped `"` only terminates the
/// literal when followed, after optional whitespace, by `,`, `}`, `]` or end
/// of input. Anything else means the quote is content the model forgot to
/// escape, so it stays inside the literal for the escaper to fix.
fn read_value_string(chars: &[char], start: usize, input: &str, log: &mut Logger) -> (String, usize) {
    let mut raw = String::from('"');
    let mut escape_next = false;
    let mut i = start + 1;
    while i < chars.len() {
        let c = chars[i];
        raw.push(c);
        if escape_next {
            escape_next = false;
        } else if c == '\\' {
            escape_next = true;
        } else if c == '"' && closes_value(chars, i + 1) {
            return (raw, i + 1);
        }
        i += 1;
    }
    log.log_at("tokenize", start, "closed unterminated string at end of input", input);
    raw.push('"');
    (raw, chars.len())
}

fn closes_value(chars: &[char], mut j: usize) -> bool {
    while j < chars.len() && is_whitespace(chars[j]) {
        j += 1;
    }
    match chars.get(j) {
        None => true,
        Some(&c) => matches!(c, ',' | '}' | ']'),
    }
}
