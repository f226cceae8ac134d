#[derive(Clone, Debug)]
pub struct Options {
    /// Treat string elements of arrays as values and escape their interiors,
    /// in addition to strings in `key: "value"` position. The upstream engine
    /// only repaired the latter, which left broken quotes inside string
    /// arrays untouched; disable to reproduce that behavior exactly.
    pub escape_array_strings: bool,
    /// Run the last-resort textual rewrites (bare-key quoting, single to
    /// double quote conversion) when comma/bracket repair is not enough.
    pub aggressive_fallback: bool,
    /// Enable repair logging. Use `repair_to_string_with_log` to retrieve logs.
    pub logging: bool,
    /// Characters captured on each side of a position when building log
    /// context snippets.
    pub log_context_window: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            escape_array_strings: true,
            aggressive_fallback: true,
            logging: false,
            log_context_window: 10,
        }
    }
}
