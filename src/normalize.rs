use crate::repair::Logger;
use crate::scan::{QuoteAwareScan, ScanEvent, contains_closer, is_whitespace};

/// Delete any comma that is followed, after optional whitespace, by a closing
/// brace or bracket. Runs after the escaper, and stays quote-aware anyway so
/// a `,}` inside a string literal can never be mistaken for structure.
pub(crate) fn strip_trailing_commas(text: &str, log: &mut Logger) -> String {
    if !contains_closer(text) {
        return text.to_string();
    }
    let events: Vec<ScanEvent> = QuoteAwareScan::new(text).collect();
    let mut out = String::with_capacity(text.len());
    for (i, ev) in events.iter().enumerate() {
        if ev.ch == ',' && !ev.quoted {
            let mut j = i + 1;
            while j < events.len() && !events[j].quoted && is_whitespace(events[j].ch) {
                j += 1;
            }
            if let Some(next) = events.get(j)
                && !next.quoted
                && matches!(next.ch, '}' | ']')
            {
                log.log_at("normalize", i, "removed trailing comma", text);
                continue;
            }
        }
        out.push(ev.ch);
    }
    out
}
