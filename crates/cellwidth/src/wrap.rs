//! Sequence-aware word wrapping.
//!
//! Reproduces conventional greedy word-wrap semantics — whitespace-run
//! splitting, hyphen break points, whitespace collapse and dropping at
//! line boundaries — while measuring in display cells instead of
//! characters and letting escape sequences travel invisibly with the
//! text they decorate. Stripping all sequences from the wrap of a styled
//! string yields exactly the wrap of the stripped string.
//!
//! # Example
//! ```
//! use cellwidth::{wrap, wrap_with_options, WrapOptions};
//!
//! assert_eq!(wrap("hello world", 5).unwrap(), vec!["hello", "world"]);
//! assert_eq!(wrap("中文字符", 4).unwrap(), vec!["中文", "字符"]);
//! assert_eq!(
//!     wrap("\x1b[31mhello world\x1b[0m", 5).unwrap(),
//!     vec!["\x1b[31mhello\x1b[0m", "\x1b[31mworld\x1b[0m"]
//! );
//! ```

use cellwidth_tables::UnicodeVersion;
use smallvec::SmallVec;
use tracing::trace;

use crate::error::{Error, Result};
use crate::grapheme::iter_graphemes;
use crate::sequences::{extract_sequences, iter_sequences, strip_sequences};
use crate::sgr::propagate_sgr;
use crate::width::{ControlCodes, WidthOptions, grapheme_width, width_with_options};

/// Options for [`wrap_with_options`].
#[derive(Debug, Clone)]
pub struct WrapOptions {
    /// Maximum line width in cells; must be at least 1.
    pub width: usize,
    /// Control/sequence policy used for measurement.
    pub control_codes: ControlCodes,
    /// Tab stop interval used for tab expansion; `None` collapses tabs
    /// to single spaces.
    pub tabstop: Option<u16>,
    /// Prefix of the first line, counted against its width.
    pub initial_indent: String,
    /// Prefix of every later line, counted against its width.
    pub subsequent_indent: String,
    /// Break chunks longer than a whole line.
    pub break_long_words: bool,
    /// Allow breaking after hyphens inside words.
    pub break_on_hyphens: bool,
    /// Break overlong chunks at grapheme boundaries; when off, overlong
    /// chunks go on a line of their own unbroken.
    pub break_on_graphemes: bool,
    /// Drop whitespace at line boundaries.
    pub drop_whitespace: bool,
    /// Run SGR propagation over the finished lines.
    pub propagate: bool,
    /// Unicode version tables to consult.
    pub version: UnicodeVersion,
}

impl WrapOptions {
    /// Defaults matching the conventional wrapper: tab stops every 8
    /// columns, hyphen and long-word breaking on, whitespace dropped,
    /// SGR propagation on.
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            width,
            control_codes: ControlCodes::Parse,
            tabstop: Some(8),
            initial_indent: String::new(),
            subsequent_indent: String::new(),
            break_long_words: true,
            break_on_hyphens: true,
            break_on_graphemes: true,
            drop_whitespace: true,
            propagate: true,
            version: UnicodeVersion::latest(),
        }
    }

    /// Set the control/sequence policy.
    #[must_use]
    pub fn control_codes(mut self, policy: ControlCodes) -> Self {
        self.control_codes = policy;
        self
    }

    /// Set the tab stop interval.
    #[must_use]
    pub fn tabstop(mut self, tabstop: Option<u16>) -> Self {
        self.tabstop = tabstop;
        self
    }

    /// Set the first-line indent.
    #[must_use]
    pub fn initial_indent(mut self, indent: impl Into<String>) -> Self {
        self.initial_indent = indent.into();
        self
    }

    /// Set the indent of every line after the first.
    #[must_use]
    pub fn subsequent_indent(mut self, indent: impl Into<String>) -> Self {
        self.subsequent_indent = indent.into();
        self
    }

    /// Set long-word breaking.
    #[must_use]
    pub fn break_long_words(mut self, on: bool) -> Self {
        self.break_long_words = on;
        self
    }

    /// Set hyphen breaking.
    #[must_use]
    pub fn break_on_hyphens(mut self, on: bool) -> Self {
        self.break_on_hyphens = on;
        self
    }

    /// Set grapheme-boundary breaking of overlong chunks.
    #[must_use]
    pub fn break_on_graphemes(mut self, on: bool) -> Self {
        self.break_on_graphemes = on;
        self
    }

    /// Set whitespace dropping at line boundaries.
    #[must_use]
    pub fn drop_whitespace(mut self, on: bool) -> Self {
        self.drop_whitespace = on;
        self
    }

    /// Set SGR propagation over the finished lines.
    #[must_use]
    pub fn propagate(mut self, on: bool) -> Self {
        self.propagate = on;
        self
    }

    /// Set the Unicode version.
    #[must_use]
    pub fn version(mut self, version: UnicodeVersion) -> Self {
        self.version = version;
        self
    }
}

/// Wrap `text` to lines of at most `width` cells with default options.
pub fn wrap(text: &str, width: usize) -> Result<Vec<String>> {
    wrap_with_options(text, &WrapOptions::new(width))
}

/// Wrap `text` with full options.
pub fn wrap_with_options(text: &str, options: &WrapOptions) -> Result<Vec<String>> {
    if options.width == 0 {
        return Err(Error::Range {
            reason: "wrap width must be at least 1",
            start: 0,
            end: 0,
        });
    }

    let munged = munge_whitespace(text, options.tabstop);
    let mut chunks = split_chunks(&munged, options.break_on_hyphens);
    trace!(chunks = chunks.len(), width = options.width, "wrapping");
    chunks.reverse();

    let mut lines: Vec<String> = Vec::new();
    while !chunks.is_empty() {
        let indent = if lines.is_empty() {
            &options.initial_indent
        } else {
            &options.subsequent_indent
        };
        let line_width = options.width.saturating_sub(measure(indent, options)?);

        // Drop a leading whitespace chunk, handing any sequences riding
        // on it to the chunk that follows.
        if options.drop_whitespace && !lines.is_empty() {
            let stripped = strip_sequences(chunks.last().map_or("", String::as_str));
            if !stripped.is_empty() && stripped.trim().is_empty() {
                let removed = chunks.pop().unwrap_or_default();
                let sequences = extract_sequences(&removed);
                if !sequences.is_empty() {
                    if let Some(next) = chunks.last_mut() {
                        next.insert_str(0, &sequences);
                    }
                }
                if chunks.is_empty() {
                    break;
                }
            }
        }

        let mut cur_line: Vec<String> = Vec::new();
        let mut cur_cells = 0usize;
        while let Some(chunk) = chunks.last() {
            let cells = measure(chunk, options)?;
            if cur_cells + cells <= line_width {
                cur_cells += cells;
                cur_line.push(chunks.pop().unwrap_or_default());
            } else {
                break;
            }
        }

        // A chunk too long for any line.
        if let Some(chunk) = chunks.last() {
            if measure(chunk, options)? > line_width {
                handle_long_word(&mut chunks, &mut cur_line, cur_cells, line_width, options)?;
                while chunks.last().is_some_and(String::is_empty) {
                    chunks.pop();
                }
            }
        }

        // Drop a trailing whitespace chunk, handing its sequences to the
        // chunk before it.
        if options.drop_whitespace {
            if let Some(last) = cur_line.last() {
                let stripped = strip_sequences(last);
                if stripped.trim().is_empty() && (!stripped.is_empty() || last.is_empty()) {
                    let removed = cur_line.pop().unwrap_or_default();
                    let sequences = extract_sequences(&removed);
                    if !sequences.is_empty() {
                        if let Some(prev) = cur_line.last_mut() {
                            prev.push_str(&sequences);
                        } else {
                            cur_line.push(sequences);
                        }
                    }
                }
            }
        }

        if !cur_line.is_empty() {
            lines.push(format!("{indent}{}", cur_line.concat()));
        }
    }

    if options.propagate {
        lines = propagate_sgr(lines);
    }
    Ok(lines)
}

fn measure(text: &str, options: &WrapOptions) -> Result<usize> {
    width_with_options(
        text,
        &WidthOptions::new()
            .control_codes(options.control_codes)
            .tabstop(options.tabstop)
            .version(options.version),
    )
}

/// Expand tabs and collapse every whitespace character to one space,
/// leaving sequences untouched. Tab expansion counts characters the way
/// a plain-text expander would, resetting at CR and LF.
fn munge_whitespace(text: &str, tabstop: Option<u16>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut column = 0usize;
    for span in iter_sequences(text) {
        if span.is_sequence() {
            out.push_str(span.text);
            continue;
        }
        for c in span.text.chars() {
            match c {
                '\t' => match tabstop {
                    Some(tabstop) if tabstop > 0 => {
                        let tabstop = tabstop as usize;
                        let advance = tabstop - column % tabstop;
                        for _ in 0..advance {
                            out.push(' ');
                        }
                        column += advance;
                    }
                    _ => {
                        out.push(' ');
                        column += 1;
                    }
                },
                '\n' | '\r' => {
                    out.push(' ');
                    column = 0;
                }
                '\x0B' | '\x0C' => {
                    out.push(' ');
                    column += 1;
                }
                _ => {
                    out.push(c);
                    column += 1;
                }
            }
        }
    }
    out
}

/// Split munged text into whitespace and word chunks, keeping sequences
/// attached to the text that follows them.
fn split_chunks(text: &str, break_on_hyphens: bool) -> Vec<String> {
    // Byte offset in `text` just past the i-th stripped character.
    let mut char_end: Vec<usize> = Vec::with_capacity(text.len());
    let mut stripped: Vec<char> = Vec::with_capacity(text.len());
    let mut pos = 0usize;
    for span in iter_sequences(text) {
        if span.is_sequence() {
            pos += span.text.len();
        } else {
            for c in span.text.chars() {
                pos += c.len_utf8();
                char_end.push(pos);
                stripped.push(c);
            }
        }
    }

    if stripped.is_empty() {
        if text.is_empty() {
            return Vec::new();
        }
        // Sequences only; keep them as one chunk.
        return vec![text.to_string()];
    }

    let ranges = split_plain(&stripped, break_on_hyphens);
    let total = text.len();
    let mut chunks = Vec::with_capacity(ranges.len());
    for (idx, &(start, end)) in ranges.iter().enumerate() {
        let start_byte = if start == 0 { 0 } else { char_end[start - 1] };
        let end_byte = if idx == ranges.len() - 1 {
            // Trailing sequences ride with the final chunk.
            total
        } else {
            char_end[end - 1]
        };
        chunks.push(text[start_byte..end_byte].to_string());
    }
    chunks
}

// [^\d\W] of the reference splitter: word characters minus digits.
fn is_letter(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

fn is_word(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

fn is_word_punct(c: char) -> bool {
    is_word(c) || matches!(c, '!' | '"' | '\'' | '&' | '.' | ',' | '?')
}

fn hyphen_run(cs: &[char], from: usize) -> usize {
    cs[from..].iter().take_while(|&&c| c == '-').count()
}

/// Partition `cs` into chunk ranges: whitespace runs, em-dash runs
/// between words, and words split after eligible hyphens.
fn split_plain(cs: &[char], break_on_hyphens: bool) -> Vec<(usize, usize)> {
    let n = cs.len();
    let mut out = Vec::new();
    let mut i = 0;
    while i < n {
        if cs[i].is_whitespace() {
            let mut j = i + 1;
            while j < n && cs[j].is_whitespace() {
                j += 1;
            }
            out.push((i, j));
            i = j;
            continue;
        }
        if break_on_hyphens && cs[i] == '-' && i > 0 && is_word_punct(cs[i - 1]) {
            let run = hyphen_run(cs, i);
            if run >= 2 && i + run < n && is_word(cs[i + run]) {
                out.push((i, i + run));
                i += run;
                continue;
            }
        }
        let mut j = i + 1;
        while j < n {
            let c = cs[j];
            if c.is_whitespace() {
                break;
            }
            if break_on_hyphens {
                // Em-dash run ahead ends the word.
                if c == '-' && is_word_punct(cs[j - 1]) {
                    let run = hyphen_run(cs, j);
                    if run >= 2 && j + run < n && is_word(cs[j + run]) {
                        break;
                    }
                }
                // Break after a hyphen inside a hyphenated word.
                if cs[j - 1] == '-' && hyphen_lookbehind(cs, j) && hyphen_lookahead(cs, j) {
                    break;
                }
            }
            j += 1;
        }
        out.push((i, j));
        i = j;
    }
    out
}

/// The hyphen at `j - 1` is preceded by two letters, or by letter,
/// hyphen, letter.
fn hyphen_lookbehind(cs: &[char], j: usize) -> bool {
    (j >= 3 && is_letter(cs[j - 2]) && is_letter(cs[j - 3]))
        || (j >= 4 && is_letter(cs[j - 2]) && cs[j - 3] == '-' && is_letter(cs[j - 4]))
}

/// Position `j` starts letter, optional hyphen, letter.
fn hyphen_lookahead(cs: &[char], j: usize) -> bool {
    let n = cs.len();
    if j >= n || !is_letter(cs[j]) {
        return false;
    }
    (j + 1 < n && is_letter(cs[j + 1]))
        || (j + 2 < n && cs[j + 1] == '-' && is_letter(cs[j + 2]))
}

/// Place as much of an overlong chunk as fits, in the manner of the
/// conventional wrapper: prefer a hyphen break point, otherwise break at
/// grapheme boundaries, forcing one grapheme when nothing else fits.
fn handle_long_word(
    chunks: &mut Vec<String>,
    cur_line: &mut Vec<String>,
    cur_cells: usize,
    line_width: usize,
    options: &WrapOptions,
) -> Result<()> {
    let space_left = if line_width < 1 {
        1
    } else {
        line_width - cur_cells
    };

    if options.break_long_words && options.break_on_graphemes {
        let chunk = chunks.pop().unwrap_or_default();
        let mut split_at = None;
        if options.break_on_hyphens {
            let stripped = strip_sequences(&chunk);
            let stripped_chars: SmallVec<[char; 32]> = stripped.chars().collect();
            if stripped_chars.len() > space_left {
                if let Some(hyphen) = last_hyphen_before(&stripped_chars, space_left) {
                    split_at = Some(stripped_to_original(&chunk, hyphen + 1));
                }
            }
        }
        let mut end = match split_at {
            Some(end) => end,
            None => find_break_position(&chunk, space_left, options.version),
        };
        if end == 0 && cur_line.is_empty() {
            end = first_grapheme_end(&chunk);
        }
        cur_line.push(chunk[..end].to_string());
        chunks.push(chunk[end..].to_string());
    } else if cur_line.is_empty() {
        if let Some(chunk) = chunks.pop() {
            cur_line.push(chunk);
        }
    }
    Ok(())
}

/// Last `-` strictly inside the first `limit` characters with something
/// other than hyphens before it.
fn last_hyphen_before(cs: &[char], limit: usize) -> Option<usize> {
    let limit = limit.min(cs.len());
    let hyphen = cs[..limit].iter().rposition(|&c| c == '-')?;
    (hyphen > 0 && cs[..hyphen].iter().any(|&c| c != '-')).then_some(hyphen)
}

/// Map a stripped character count back to a byte offset in the original
/// chunk, skipping over sequences.
fn stripped_to_original(chunk: &str, stripped_chars: usize) -> usize {
    let mut seen = 0usize;
    let mut pos = 0usize;
    for span in iter_sequences(chunk) {
        if span.is_sequence() {
            pos += span.text.len();
            continue;
        }
        for c in span.text.chars() {
            if seen == stripped_chars {
                return pos;
            }
            seen += 1;
            pos += c.len_utf8();
        }
    }
    pos
}

/// Byte offset of the last grapheme boundary whose prefix fits in
/// `max_cells`, sequences measuring zero.
fn find_break_position(chunk: &str, max_cells: usize, version: UnicodeVersion) -> usize {
    let mut cells = 0usize;
    let mut pos = 0usize;
    for span in iter_sequences(chunk) {
        if span.is_sequence() {
            pos += span.text.len();
            continue;
        }
        for grapheme in iter_graphemes(span.text) {
            let grapheme_cells = grapheme_width(grapheme, version);
            if cells + grapheme_cells > max_cells {
                return pos;
            }
            cells += grapheme_cells;
            pos += grapheme.len();
        }
    }
    pos
}

/// End of the first grapheme, carrying any leading sequences with it.
fn first_grapheme_end(chunk: &str) -> usize {
    let mut pos = 0usize;
    for span in iter_sequences(chunk) {
        if span.is_sequence() {
            pos += span.text.len();
            continue;
        }
        if let Some(grapheme) = iter_graphemes(span.text).next() {
            return pos + grapheme.len();
        }
    }
    chunk.len()
}
