use crate::normalize::strip_trailing_commas;
use crate::repair::Logger;
use regex::Regex;
use std::sync::LazyLock;

static BARE_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([{,]\s*)([A-Za-z_$][A-Za-z0-9_$]*)\s*:"#).unwrap()
});

static SINGLE_QUOTED_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#":\s*'([^']*)'"#).unwrap());

/// Last-resort textual rewrites, applied only when quote/comma/bracket repair
/// was not enough: quote bare identifiers in key position, convert
/// single-quoted values to double-quoted, then re-strip trailing commas
/// (earlier removals can expose new ones, e.g. `,,}`).
pub(crate) fn aggressive_rewrite(text: &str, log: &mut Logger) -> String {
    let keys_quoted = BARE_KEY.replace_all(text, "${1}\"${2}\":");
    if keys_quoted != text {
        let context = log.snippet(&keys_quoted);
        log.log("fallback", 0, "quoted bare object keys", context);
    }
    let values_requoted = SINGLE_QUOTED_VALUE.replace_all(&keys_quoted, ": \"${1}\"");
    if values_requoted != keys_quoted {
        let context = log.snippet(&values_requoted);
        log.log("fallback", 0, "converted single-quoted values", context);
    }
    strip_trailing_commas(&values_requoted, log)
}
