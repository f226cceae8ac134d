use crate::balance::{append_missing_closers, remove_extra_closers};
use crate::error::{RepairError, Stage};
use crate::escape::escape_string_values;
use crate::fallback::aggressive_rewrite;
use crate::normalize::strip_trailing_commas;
use crate::options::Options;
use crate::tokenize::tokenize;
use serde_json::Value;

/// One recorded repair action.
///
/// `position` is an offset into the working representation of the stage that
/// made the change: a character index for the text passes, a token ordinal
/// for the escape pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairLogEntry {
    pub stage: &'static str,
    pub position: usize,
    pub message: &'static str,
    pub context: String,
}

#[derive(Default)]
pub(crate) struct Logger {
    enabled: bool,
    window: usize,
    entries: Vec<RepairLogEntry>,
}

impl Logger {
    pub(crate) fn new(opts: &Options) -> Self {
        Self {
            enabled: opts.logging,
            window: opts.log_context_window,
            entries: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn log(
        &mut self,
        stage: &'static str,
        position: usize,
        message: &'static str,
        context: String,
    ) {
        if self.enabled {
            self.entries.push(RepairLogEntry {
                stage,
                position,
                message,
                context,
            });
        }
    }

    /// Record an entry with a context snippet cut from `text` around `position`.
    #[inline]
    pub(crate) fn log_at(
        &mut self,
        stage: &'static str,
        position: usize,
        message: &'static str,
        text: &str,
    ) {
        if !self.enabled {
            return;
        }
        let chars: Vec<char> = text.chars().collect();
        let context = build_context(&chars, position, self.window);
        self.entries.push(RepairLogEntry {
            stage,
            position,
            message,
            context,
        });
    }

    /// Leading snippet of `s`, sized to the context window. Empty when
    /// logging is disabled, so callers can build contexts unconditionally.
    pub(crate) fn snippet(&self, s: &str) -> String {
        if !self.enabled {
            return String::new();
        }
        s.chars().take(self.window * 2).collect()
    }

    fn into_entries(self) -> Vec<RepairLogEntry> {
        self.entries
    }
}

fn build_context(chars: &[char], pos: usize, win: usize) -> String {
    let start = pos.saturating_sub(win);
    let end = (pos + win).min(chars.len());
    chars[start..end.max(start)].iter().collect()
}

/// Parse attempt plus canonicalization: valid text comes back pretty-printed
/// with two-space indentation, anything else returns the parser's error.
fn checkpoint(text: &str) -> Result<String, serde_json::Error> {
    let value: Value = serde_json::from_str(text)?;
    serde_json::to_string_pretty(&value)
}

pub(crate) fn repair_to_string(input: &str, opts: &Options) -> Result<String, RepairError> {
    repair_to_string_with_log(input, opts).map(|(s, _)| s)
}

/// The whole pipeline, in order. Every stage is total; only the parse
/// checkpoints can fail, and a failure there either advances to the next
/// stage or becomes the final `RepairFailed`. There is no partial success.
pub(crate) fn repair_to_string_with_log(
    input: &str,
    opts: &Options,
) -> Result<(String, Vec<RepairLogEntry>), RepairError> {
    if input.is_empty() {
        return Err(RepairError::InputInvalid);
    }
    let mut log = Logger::new(opts);

    // Fast path: the input may already be valid.
    if let Ok(out) = checkpoint(input) {
        return Ok((out, log.into_entries()));
    }

    let trimmed = input.trim();
    let tokens = tokenize(trimmed, opts, &mut log);
    let escaped = escape_string_values(&tokens, &mut log);
    let text = strip_trailing_commas(&escaped, &mut log);
    let text = remove_extra_closers(&text, &mut log);
    let text = append_missing_closers(&text, &mut log);

    match checkpoint(&text) {
        Ok(out) => Ok((out, log.into_entries())),
        Err(_) if opts.aggressive_fallback => {
            let rewritten = aggressive_rewrite(&text, &mut log);
            match checkpoint(&rewritten) {
                Ok(out) => Ok((out, log.into_entries())),
                Err(err) => Err(RepairError::failed(Stage::Fallback, err)),
            }
        }
        Err(err) => Err(RepairError::failed(Stage::Balance, err)),
    }
}
