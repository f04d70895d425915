//! Display-column clipping.
//!
//! [`clip`] extracts the substring of a styled string that occupies the
//! columns `[start, end)` on screen. A wide character straddling either
//! boundary cannot be shown whole, so its visible cells are replaced by a
//! fill character. Styling sequences outside the window are folded into a
//! restoring prefix and a trailing reset, so the result renders exactly
//! like the corresponding slice of the original line.
//!
//! # Example
//! ```
//! use cellwidth::clip;
//!
//! assert_eq!(clip("中文字", 0, 3).unwrap(), "中 ");
//! assert_eq!(clip("ab\x1b[31mcd\x1b[0mef", 1, 5).unwrap(), "b\x1b[31mcd\x1b[0me");
//! ```

use cellwidth_tables::UnicodeVersion;

use crate::error::{Error, Result};
use crate::grapheme::iter_graphemes;
use crate::sequences::{SequenceKind, iter_sequences};
use crate::sgr::{StyleState, is_sgr};
use crate::width::grapheme_width;

/// Options for [`clip_with_options`].
#[derive(Debug, Clone, Copy)]
pub struct ClipOptions {
    /// Replacement for the visible cells of a straddling grapheme;
    /// `None` omits them, shortening the result.
    pub fill: Option<char>,
    /// Splice SGR state: prefix the style active at `start`, suffix a
    /// reset when styling is still active afterwards.
    pub propagate: bool,
    /// Unicode version tables to consult.
    pub version: UnicodeVersion,
}

impl ClipOptions {
    /// Defaults: space fill, SGR propagation on, newest Unicode version.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fill: Some(' '),
            propagate: true,
            version: UnicodeVersion::latest(),
        }
    }

    /// Set the straddle fill character.
    #[must_use]
    pub fn fill(mut self, fill: Option<char>) -> Self {
        self.fill = fill;
        self
    }

    /// Set SGR propagation.
    #[must_use]
    pub fn propagate(mut self, propagate: bool) -> Self {
        self.propagate = propagate;
        self
    }

    /// Set the Unicode version.
    #[must_use]
    pub fn version(mut self, version: UnicodeVersion) -> Self {
        self.version = version;
        self
    }
}

impl Default for ClipOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Clip `text` to the display columns `[start, end)` with defaults.
pub fn clip(text: &str, start: usize, end: usize) -> Result<String> {
    clip_with_options(text, start, end, &ClipOptions::new())
}

/// Clip `text` to the display columns `[start, end)`.
///
/// Sequences in the dropped prefix and suffix are preserved around the
/// kept text, except horizontal movement, which is discarded there;
/// sequences within the window stay in place. Movement sequences inside
/// the window still move the virtual cursor, so content they skip past
/// the window is dropped.
pub fn clip_with_options(
    text: &str,
    start: usize,
    end: usize,
    options: &ClipOptions,
) -> Result<String> {
    if end < start {
        return Err(Error::Range {
            reason: "end precedes start",
            start,
            end,
        });
    }

    let mut column = 0usize;
    let mut style = StyleState::default();
    let mut style_at_start = StyleState::default();
    let mut style_at_end: Option<StyleState> = None;
    let mut entered = start == 0;
    let mut prefix = String::new();
    let mut body = String::new();
    let mut suffix = String::new();

    for span in iter_sequences(text) {
        if !entered && column >= start {
            entered = true;
            style_at_start = style;
        }
        if style_at_end.is_none() && column >= end {
            style_at_end = Some(style);
        }
        let region_body = column >= start && column < end;
        match span.kind {
            Some(SequenceKind::CursorRight(n)) => {
                if region_body {
                    body.push_str(span.text);
                }
                column += n as usize;
            }
            Some(SequenceKind::CursorLeft(n)) => {
                if region_body {
                    body.push_str(span.text);
                }
                column = column.saturating_sub(n as usize);
            }
            Some(_) => {
                let sgr = is_sgr(span.text);
                style = style.updated(span.text);
                if region_body {
                    body.push_str(span.text);
                } else if column < start {
                    // SGR before the window is folded into the restore.
                    if !(sgr && options.propagate) {
                        prefix.push_str(span.text);
                    }
                } else if !(sgr && options.propagate) {
                    suffix.push_str(span.text);
                }
            }
            None => {
                for grapheme in iter_graphemes(span.text) {
                    if !entered && column >= start {
                        entered = true;
                        style_at_start = style;
                    }
                    if style_at_end.is_none() && column >= end {
                        style_at_end = Some(style);
                    }
                    let cells = grapheme_width(grapheme, options.version);
                    if cells == 0 {
                        // Zero-cell content (controls, stray marks) rides
                        // along when it falls inside the window.
                        if start < end && column >= start && column <= end {
                            body.push_str(grapheme);
                        }
                        continue;
                    }
                    let cell_start = column;
                    column += cells;
                    if cell_start >= start && column <= end {
                        body.push_str(grapheme);
                    } else if let Some(fill) = options.fill {
                        let visible = column.min(end).saturating_sub(cell_start.max(start));
                        for _ in 0..visible {
                            body.push(fill);
                        }
                    }
                }
            }
        }
    }
    if !entered {
        style_at_start = style;
    }
    let end_style = style_at_end.unwrap_or(style);

    let mut out = String::with_capacity(prefix.len() + body.len() + suffix.len() + 16);
    out.push_str(&prefix);
    if options.propagate && style_at_start.is_active() {
        out.push_str(&style_at_start.to_sequence());
    }
    out.push_str(&body);
    out.push_str(&suffix);
    if options.propagate && end_style.is_active() {
        out.push_str("\x1b[0m");
    }
    Ok(out)
}
