use crate::repair::Logger;
use crate::tokenize::{Role, Token};

/// Rewrite every `Value` token's interior so that raw quotes, newlines,
/// carriage returns and tabs are properly escaped, then reconstruct the full
/// text by concatenating all tokens in order. Keys, stray quoted fragments
/// and symbols pass through unchanged.
pub(crate) fn escape_string_values(tokens: &[Token], log: &mut Logger) -> String {
    let mut out = String::new();
    for (idx, tok) in tokens.iter().enumerate() {
        match tok {
            Token::Str {
                raw,
                role: Role::Value,
            } => {
                let interior = &raw[1..raw.len() - 1];
                let escaped = escape_interior(interior);
                if escaped != interior {
                    let context = log.snippet(&escaped);
                    log.log("escape", idx, "escaped raw characters in string value", context);
                }
                out.push('"');
                out.push_str(&escaped);
                out.push('"');
            }
            Token::Str { raw, .. } => out.push_str(raw),
            Token::Symbol(c) => out.push(*c),
        }
    }
    out
}

/// Single-pass escape-state scan over a literal's interior. A backslash
/// shields the next character, so already-escaped sequences survive intact;
/// raw quotes and whitespace controls get their two-character forms. A lone
/// trailing backslash is doubled so it cannot swallow the closing quote.
pub(crate) fn escape_interior(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 8);
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                out.push('\\');
                match chars.next() {
                    Some('\n') => out.push_str("\\n"),
                    Some('\r') => out.push_str("\\r"),
                    Some('\t') => out.push_str("\\t"),
                    Some(n) => out.push(n),
                    None => out.push('\\'),
                }
            }
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}
