use memchr::memchr2;
use std::str::Chars;

#[inline]
pub(crate) fn is_whitespace(c: char) -> bool {
    // Include U+FEFF (BOM) as whitespace-equivalent so it never becomes a symbol token.
    matches!(
        c,
        '\u{0009}' | '\u{000A}' | '\u{000D}' | '\u{0020}' | '\u{FEFF}'
    )
}

#[inline]
pub(crate) fn contains_closer(s: &str) -> bool {
    memchr2(b'}', b']', s.as_bytes()).is_some()
}

#[inline]
pub(crate) fn contains_opener(s: &str) -> bool {
    memchr2(b'{', b'[', s.as_bytes()).is_some()
}

/// One character of a quote-aware pass. `quoted` marks characters that must
/// not be treated as structural: string interiors, the delimiting quotes
/// themselves, and both halves of an escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScanEvent {
    pub ch: char,
    pub quoted: bool,
}

/// Shared quote/escape state machine for the text passes (trailing commas,
/// extra closers, missing closers). Quote state toggles on unescaped `"`;
/// a backslash shields the character that follows it.
pub(crate) struct QuoteAwareScan<'a> {
    chars: Chars<'a>,
    in_string: bool,
    escape_next: bool,
}

impl<'a> QuoteAwareScan<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars(),
            in_string: false,
            escape_next: false,
        }
    }
}

impl Iterator for QuoteAwareScan<'_> {
    type Item = ScanEvent;

    fn next(&mut self) -> Option<ScanEvent> {
        let ch = self.chars.next()?;
        if self.escape_next {
            self.escape_next = false;
            return Some(ScanEvent { ch, quoted: true });
        }
        let quoted = match ch {
            '\\' => {
                self.escape_next = true;
                true
            }
            '"' => {
                self.in_string = !self.in_string;
                true
            }
            _ => self.in_string,
        };
        Some(ScanEvent { ch, quoted })
    }
}
