//! Cell-width measurement with a virtual cursor column.
//!
//! [`width`] measures how many terminal columns a string occupies: wide
//! CJK and emoji count 2 cells, combining marks 0, and embedded escape
//! sequences either move the cursor (CSI cursor left/right), do nothing
//! (styling), or — under the strict policy — fail the measurement
//! (vertical/absolute movement).
//!
//! The legacy signed functions [`wcwidth`] and [`wcswidth`] keep the
//! classic libc contract: -1 on control characters, no sequence
//! recognition. They are a deliberately separate code path.
//!
//! # Example
//! ```
//! use cellwidth::{width, wcswidth};
//!
//! assert_eq!(width("コンニチハ, セカイ!"), 19);
//! assert_eq!(width("\x1b[31mok\x1b[0m"), 2);
//! assert_eq!(wcswidth("abc\x1bdef"), -1);
//! ```

use std::str::FromStr;

use cellwidth_tables::{UnicodeVersion, bisearch, vs16_flips};
use tracing::trace;

use crate::error::{Error, Result};
use crate::grapheme::iter_graphemes;
use crate::sequences::{SequenceKind, iter_sequences};

const VS16: char = '\u{FE0F}';
const ZWJ: char = '\u{200D}';

/// Policy for control characters and escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlCodes {
    /// Track horizontal movement; everything else is silently zero-width.
    #[default]
    Parse,
    /// Like `Parse`, but illegal controls and indeterminate sequences fail.
    Strict,
    /// Exclude all controls and sequences from the measurement.
    Ignore,
}

impl FromStr for ControlCodes {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "parse" => Ok(Self::Parse),
            "strict" => Ok(Self::Strict),
            "ignore" => Ok(Self::Ignore),
            _ => Err(Error::Option {
                what: "control_codes",
                value: s.to_string(),
            }),
        }
    }
}

/// What the measurement reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Measure {
    /// Rightmost column the cursor reaches, relative to the start column.
    #[default]
    Extent,
    /// Sum of printed grapheme widths; cursor movement contributes nothing.
    Printable,
}

impl FromStr for Measure {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "extent" => Ok(Self::Extent),
            "printable" => Ok(Self::Printable),
            _ => Err(Error::Option {
                what: "measure",
                value: s.to_string(),
            }),
        }
    }
}

/// Options for [`width_with_options`].
#[derive(Debug, Clone, Copy)]
pub struct WidthOptions {
    /// Control/sequence policy.
    pub control_codes: ControlCodes,
    /// What to report.
    pub measure: Measure,
    /// Tab stop interval; `None` leaves tabs zero-width.
    pub tabstop: Option<u16>,
    /// Column the measurement starts at; tab stops are relative to zero.
    pub column: usize,
    /// Unicode version tables to consult.
    pub version: UnicodeVersion,
}

impl WidthOptions {
    /// Defaults: parse policy, extent measure, tab stops every 8 columns,
    /// starting at column zero, newest Unicode version.
    #[must_use]
    pub fn new() -> Self {
        Self {
            control_codes: ControlCodes::Parse,
            measure: Measure::Extent,
            tabstop: Some(8),
            column: 0,
            version: UnicodeVersion::latest(),
        }
    }

    /// Set the control/sequence policy.
    #[must_use]
    pub fn control_codes(mut self, policy: ControlCodes) -> Self {
        self.control_codes = policy;
        self
    }

    /// Set what the measurement reports.
    #[must_use]
    pub fn measure(mut self, measure: Measure) -> Self {
        self.measure = measure;
        self
    }

    /// Set the tab stop interval, or `None` to leave tabs zero-width.
    #[must_use]
    pub fn tabstop(mut self, tabstop: Option<u16>) -> Self {
        self.tabstop = tabstop;
        self
    }

    /// Set the starting column.
    #[must_use]
    pub fn column(mut self, column: usize) -> Self {
        self.column = column;
        self
    }

    /// Set the Unicode version.
    #[must_use]
    pub fn version(mut self, version: UnicodeVersion) -> Self {
        self.version = version;
        self
    }
}

impl Default for WidthOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Measure the column width of `text` with default options.
///
/// Uses the parse policy, under which no input fails.
#[must_use]
pub fn width(text: &str) -> usize {
    match width_with_options(text, &WidthOptions::new()) {
        Ok(cells) => cells,
        // Parse policy never errors.
        Err(_) => unreachable!("parse policy is infallible"),
    }
}

/// Measure the column width of `text`.
pub fn width_with_options(text: &str, options: &WidthOptions) -> Result<usize> {
    // Fast path: printable ASCII is one cell per byte under every policy.
    if is_printable_ascii(text) {
        trace!(len = text.len(), "width fast path");
        return Ok(text.len());
    }

    let mut column = options.column;
    let mut max_column = column;
    let mut printable = 0usize;
    let strict = options.control_codes == ControlCodes::Strict;
    let ignore = options.control_codes == ControlCodes::Ignore;

    for span in iter_sequences(text) {
        match span.kind {
            Some(SequenceKind::CursorRight(n)) => {
                if !ignore {
                    column += n as usize;
                    max_column = max_column.max(column);
                }
            }
            Some(SequenceKind::CursorLeft(n)) => {
                if !ignore {
                    column = column.saturating_sub(n as usize);
                }
            }
            Some(SequenceKind::Indeterminate) => {
                if strict {
                    return Err(Error::IndeterminateSequence {
                        sequence: span.text.to_string(),
                    });
                }
            }
            Some(SequenceKind::ZeroWidth) => {}
            None => {
                for grapheme in iter_graphemes(span.text) {
                    let first = grapheme.chars().next().unwrap_or('\0');
                    if is_control(first) {
                        // A cluster starting with a control is all controls
                        // (CR+LF is the only multi-char case).
                        for c in grapheme.chars() {
                            apply_control(c, options, &mut column, &mut printable, strict, ignore)?;
                            max_column = max_column.max(column);
                        }
                        continue;
                    }
                    let cells = grapheme_width(grapheme, options.version);
                    column += cells;
                    printable += cells;
                    max_column = max_column.max(column);
                }
            }
        }
    }

    Ok(match options.measure {
        Measure::Extent => max_column - options.column,
        Measure::Printable => printable,
    })
}

/// Width in cells of one printable grapheme cluster.
#[must_use]
pub fn grapheme_width(grapheme: &str, version: UnicodeVersion) -> usize {
    let mut chars = grapheme.chars();
    let Some(base) = chars.next() else {
        return 0;
    };
    if bisearch(base as u32, version.zero()) {
        return 0;
    }
    let mut cells = if bisearch(base as u32, version.wide()) { 2 } else { 1 };
    if cells == 1
        && version.supports_vs16()
        && vs16_flips(base as u32)
        && chars.next() == Some(VS16)
    {
        cells = 2;
    }
    cells
}

fn is_printable_ascii(text: &str) -> bool {
    text.bytes().all(|b| (0x20..=0x7E).contains(&b))
}

fn is_control(c: char) -> bool {
    let cp = c as u32;
    cp < 0x20 || cp == 0x7F || (0x80..=0x9F).contains(&cp)
}

/// Controls with no cell effect under any policy.
fn is_harmless_control(c: char) -> bool {
    matches!(c, '\0' | '\x07' | '\x0E' | '\x0F' | '\x1b')
}

fn apply_control(
    c: char,
    options: &WidthOptions,
    column: &mut usize,
    printable: &mut usize,
    strict: bool,
    ignore: bool,
) -> Result<()> {
    match c {
        '\x08' => {
            // Backspace, floored at column zero.
            if !ignore {
                *column = column.saturating_sub(1);
            }
        }
        '\t' => {
            if let Some(tabstop) = options.tabstop {
                if tabstop > 0 {
                    let tabstop = tabstop as usize;
                    let advance = tabstop - (*column % tabstop);
                    *column += advance;
                    *printable += advance;
                }
            }
        }
        '\r' => {
            if !ignore {
                *column = 0;
            }
        }
        '\n' | '\x0B' | '\x0C' => {
            if strict {
                return Err(Error::Control {
                    codepoint: c as u32,
                });
            }
        }
        _ if is_harmless_control(c) => {}
        _ => {
            if strict {
                return Err(Error::Control {
                    codepoint: c as u32,
                });
            }
        }
    }
    Ok(())
}

// ── legacy signed API ──

/// Columns of one codepoint under the classic signed contract.
///
/// Returns -1 for C0 and C1 control characters other than NUL, 0 for NUL
/// and zero-cell codepoints, 2 for wide codepoints, and 1 otherwise.
/// Escape sequences are not recognized here; ESC is just a control.
#[must_use]
pub fn wcwidth(c: char) -> i32 {
    wcwidth_with_version(c, UnicodeVersion::latest())
}

/// [`wcwidth`] against a specific Unicode version.
#[must_use]
pub fn wcwidth_with_version(c: char, version: UnicodeVersion) -> i32 {
    let cp = c as u32;
    // Printable ASCII is always a single cell.
    if (0x20..0x7F).contains(&cp) {
        return 1;
    }
    if cp == 0 {
        return 0;
    }
    if cp < 0x20 || (0x7F..0xA0).contains(&cp) {
        return -1;
    }
    if bisearch(cp, version.zero()) {
        return 0;
    }
    if bisearch(cp, version.wide()) { 2 } else { 1 }
}

/// Columns of a string under the classic signed contract.
///
/// Returns -1 as soon as any character measures -1. A zero-width joiner
/// suppresses measurement of itself and the following character; a VS-16
/// after a dual-presentation character widens it by one cell.
#[must_use]
pub fn wcswidth(s: &str) -> i32 {
    wcswidth_with_version(s, UnicodeVersion::latest())
}

/// [`wcswidth`] against a specific Unicode version.
#[must_use]
pub fn wcswidth_with_version(s: &str, version: UnicodeVersion) -> i32 {
    let mut total = 0i32;
    let mut last_measured: Option<char> = None;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == ZWJ {
            chars.next();
            last_measured = None;
            continue;
        }
        if c == VS16 {
            if let Some(base) = last_measured {
                if version.supports_vs16() && vs16_flips(base as u32) {
                    total += 1;
                }
                last_measured = None;
                continue;
            }
        }
        let cells = wcwidth_with_version(c, version);
        if cells < 0 {
            return -1;
        }
        if cells > 0 {
            last_measured = Some(c);
        }
        total += cells;
    }
    total
}
