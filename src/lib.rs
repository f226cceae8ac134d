//! Multi-pass repair of malformed JSON, tuned for the kind of "almost JSON"
//! a language model produces when asked to emit a file tree full of source
//! code: raw quotes and newlines inside string values, trailing commas,
//! unbalanced brackets, the occasional bare key.
//!
//! The engine is a fixed pipeline of pure text transforms: tokenize, escape
//! string values, strip trailing commas, drop unmatched closers, append
//! missing closers, then a last-resort textual rewrite. The first
//! intermediate text that parses wins and is returned canonicalized
//! (two-space pretty-print). Inputs that survive every stage unparsed fail
//! explicitly; the engine never returns a partially improved string.

mod balance;
pub mod cli;
pub mod error;
mod escape;
mod fallback;
mod normalize;
pub mod options;
mod repair;
mod scan;
mod tokenize;

pub use error::{RepairError, Stage};
pub use options::Options;
pub use repair::RepairLogEntry;

/// Repair a potentially invalid JSON string into canonical pretty-printed
/// JSON. Already-valid input short-circuits and is only reformatted.
pub fn repair_to_string(input: &str, opts: &Options) -> Result<String, RepairError> {
    repair::repair_to_string(input, opts)
}

/// Like [`repair_to_string`], but also returns the repair log. Entries are
/// only collected when `opts.logging` is set.
pub fn repair_to_string_with_log(
    input: &str,
    opts: &Options,
) -> Result<(String, Vec<RepairLogEntry>), RepairError> {
    repair::repair_to_string_with_log(input, opts)
}

/// Repair and then parse into a `serde_json::Value`, for callers that want
/// the structured document (e.g. a file tree) rather than its text.
pub fn repair_to_value(input: &str, opts: &Options) -> Result<serde_json::Value, RepairError> {
    let s = repair_to_string(input, opts)?;
    serde_json::from_str(&s).map_err(|e| RepairError::failed(Stage::Fallback, e))
}

#[cfg(test)]
mod tests;
