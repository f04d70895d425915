#![allow(clippy::match_same_arms)]

//! Escape/control sequence scanning and classification.
//!
//! The scanner recognizes the longest valid sequence starting at an ESC
//! byte: CSI (parameter, intermediate, final bytes), string sequences
//! (OSC/DCS/APC/PM terminated by BEL or ST), charset designations, and
//! single-byte Fe/Fp escapes. An ESC that starts no valid sequence is a
//! literal zero-effect character and stays inside the surrounding
//! plain-text span.
//!
//! Each recognized sequence is classified by its effect on the cursor
//! column: horizontal movement with a known amount, indeterminate
//! movement (which invalidates column tracking), or zero-width styling.
//!
//! # Example
//! ```
//! use cellwidth::{iter_sequences, SequenceKind};
//!
//! let spans: Vec<_> = iter_sequences("\x1b[31mhi\x1b[0m").collect();
//! assert_eq!(spans.len(), 3);
//! assert!(spans[0].is_sequence());
//! assert_eq!(spans[1].text, "hi");
//! assert_eq!(spans[0].kind, Some(SequenceKind::ZeroWidth));
//! ```

use memchr::memchr;

const ESC: u8 = 0x1B;
const BEL: u8 = 0x07;

/// Cursor-column effect of a recognized sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceKind {
    /// Cursor moves right by the given number of cells.
    CursorRight(u32),
    /// Cursor moves left by the given number of cells.
    CursorLeft(u32),
    /// Absolute/vertical movement, erase, scroll, screen switch, or
    /// restore: the resulting column cannot be tracked.
    Indeterminate,
    /// Styling, mode, charset, or string sequence with no cursor effect.
    ZeroWidth,
}

/// One span of a partitioned input: either plain text or one sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    /// The exact input slice, escapes included.
    pub text: &'a str,
    /// Classification when this span is a sequence, `None` for text.
    pub kind: Option<SequenceKind>,
}

impl Span<'_> {
    /// Whether this span is a recognized sequence.
    #[must_use]
    pub fn is_sequence(&self) -> bool {
        self.kind.is_some()
    }
}

/// Partition `text` into plain-text and sequence spans.
///
/// Concatenating the spans reproduces the input exactly. Plain-text spans
/// are maximal: adjacent unrecognized escapes are merged into them.
pub fn iter_sequences(text: &str) -> SequenceIter<'_> {
    SequenceIter { text, pos: 0 }
}

/// Iterator returned by [`iter_sequences`].
#[derive(Debug, Clone)]
pub struct SequenceIter<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for SequenceIter<'a> {
    type Item = Span<'a>;

    fn next(&mut self) -> Option<Span<'a>> {
        let bytes = self.text.as_bytes();
        if self.pos >= bytes.len() {
            return None;
        }
        let start = self.pos;
        let mut scan = start;
        loop {
            match memchr(ESC, &bytes[scan..]) {
                None => {
                    // No sequence ahead; the rest is one text span.
                    self.pos = bytes.len();
                    return Some(Span {
                        text: &self.text[start..],
                        kind: None,
                    });
                }
                Some(offset) => {
                    let esc = scan + offset;
                    match match_sequence(bytes, esc) {
                        Some(end) if esc == start => {
                            self.pos = end;
                            let seq = &self.text[start..end];
                            return Some(Span {
                                text: seq,
                                kind: Some(classify(seq)),
                            });
                        }
                        Some(_) => {
                            // Sequence begins after pending text.
                            self.pos = esc;
                            return Some(Span {
                                text: &self.text[start..esc],
                                kind: None,
                            });
                        }
                        None => {
                            // Literal ESC; keep scanning within this span.
                            scan = esc + 1;
                        }
                    }
                }
            }
        }
    }
}

/// Concatenation of the plain-text spans of `text`.
#[must_use]
pub fn strip_sequences(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for span in iter_sequences(text) {
        if !span.is_sequence() {
            out.push_str(span.text);
        }
    }
    out
}

/// Concatenation of the sequence spans of `text`.
#[must_use]
pub fn extract_sequences(text: &str) -> String {
    let mut out = String::new();
    for span in iter_sequences(text) {
        if span.is_sequence() {
            out.push_str(span.text);
        }
    }
    out
}

/// Match one sequence starting at `bytes[pos] == ESC`; returns the end
/// offset (exclusive) of the longest valid match, or `None`.
fn match_sequence(bytes: &[u8], pos: usize) -> Option<usize> {
    debug_assert_eq!(bytes[pos], ESC);
    let next = *bytes.get(pos + 1)?;
    match next {
        b'[' => match_csi(bytes, pos + 2),
        b']' | b'P' | b'^' | b'_' => match_string_sequence(bytes, pos + 2),
        b'(' | b')' => {
            // Charset designation: one printable designator byte.
            let designator = *bytes.get(pos + 2)?;
            (0x20..=0x7E).contains(&designator).then_some(pos + 3)
        }
        // Fp subset and flash.
        b'7' | b'8' | b'=' | b'>' | b'g' | b'c' => Some(pos + 2),
        // Remaining single-byte Fe escapes.
        0x40..=0x5F => Some(pos + 2),
        _ => None,
    }
}

/// CSI body: parameter bytes, then intermediate bytes, then a final byte.
/// A truncated CSI (no final byte) is no sequence at all; like any other
/// unmatched escape it stays in the surrounding text span.
fn match_csi(bytes: &[u8], mut pos: usize) -> Option<usize> {
    while bytes.get(pos).is_some_and(|b| (0x30..=0x3F).contains(b)) {
        pos += 1;
    }
    while bytes.get(pos).is_some_and(|b| (0x20..=0x2F).contains(b)) {
        pos += 1;
    }
    let fin = *bytes.get(pos)?;
    (0x40..=0x7E).contains(&fin).then_some(pos + 1)
}

/// String sequence body: anything until BEL or ST (`ESC \`).
fn match_string_sequence(bytes: &[u8], mut pos: usize) -> Option<usize> {
    while pos < bytes.len() {
        match bytes[pos] {
            BEL => return Some(pos + 1),
            ESC if bytes.get(pos + 1) == Some(&b'\\') => return Some(pos + 2),
            _ => pos += 1,
        }
    }
    None
}

/// Classify a sequence already validated by [`match_sequence`].
#[must_use]
pub fn classify(seq: &str) -> SequenceKind {
    let bytes = seq.as_bytes();
    match bytes.get(1) {
        Some(b'[') => classify_csi(&bytes[2..]),
        Some(b'8') | Some(b'c') | Some(b'D') | Some(b'M') => SequenceKind::Indeterminate,
        _ => SequenceKind::ZeroWidth,
    }
}

/// CSI finals that invalidate column tracking: cursor addressing, erase,
/// insert/delete, and scrolling.
const CSI_INDETERMINATE: &[u8] = b"ABHdJKPLMX@STr";

fn classify_csi(body: &[u8]) -> SequenceKind {
    let (fin, params) = match body.split_last() {
        Some((fin, params)) => (*fin, params),
        None => return SequenceKind::ZeroWidth,
    };
    match fin {
        b'C' | b'D' => match plain_count(params) {
            Some(n) => {
                if fin == b'C' {
                    SequenceKind::CursorRight(n)
                } else {
                    SequenceKind::CursorLeft(n)
                }
            }
            None => SequenceKind::ZeroWidth,
        },
        _ if CSI_INDETERMINATE.contains(&fin) && params.iter().all(|b| b.is_ascii_digit() || *b == b';') => {
            SequenceKind::Indeterminate
        }
        b'h' | b'l' => match params {
            b"?1049" | b"?47" => SequenceKind::Indeterminate,
            _ => SequenceKind::ZeroWidth,
        },
        _ => SequenceKind::ZeroWidth,
    }
}

/// Digits-only CSI count; empty means 1. Any other parameter shape makes
/// the sequence unrecognized as a movement.
fn plain_count(params: &[u8]) -> Option<u32> {
    if params.is_empty() {
        return Some(1);
    }
    if !params.iter().all(u8::is_ascii_digit) {
        return None;
    }
    std::str::from_utf8(params).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(text: &str) -> Vec<(String, bool)> {
        iter_sequences(text)
            .map(|s| (s.text.to_string(), s.is_sequence()))
            .collect()
    }

    // ==========================================================================
    // partitioning tests
    // ==========================================================================

    #[test]
    fn plain_text_is_one_span() {
        assert_eq!(spans("hello"), vec![("hello".into(), false)]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert_eq!(spans(""), Vec::<(String, bool)>::new());
    }

    #[test]
    fn sgr_partitions_exactly() {
        assert_eq!(
            spans("\x1b[31mhello\x1b[0m"),
            vec![
                ("\x1b[31m".into(), true),
                ("hello".into(), false),
                ("\x1b[0m".into(), true),
            ]
        );
    }

    #[test]
    fn lone_trailing_escape_merges_into_text() {
        assert_eq!(spans("abc\x1b"), vec![("abc\u{1b}".into(), false)]);
    }

    #[test]
    fn unterminated_csi_merges_into_text() {
        assert_eq!(spans("ab\x1b["), vec![("ab\u{1b}[".into(), false)]);
        assert_eq!(spans("\x1b[31"), vec![("\u{1b}[31".into(), false)]);
        assert_eq!(strip_sequences("\x1b["), "\x1b[");
    }

    #[test]
    fn unterminated_osc_merges_into_text() {
        assert_eq!(
            spans("\x1b]0;title without bell"),
            vec![("\x1b]0;title without bell".into(), false)]
        );
    }

    #[test]
    fn interior_literal_escape_does_not_split() {
        assert_eq!(
            spans("a\x1bz\x1b[1mb"),
            vec![
                ("a\u{1b}z".into(), false),
                ("\x1b[1m".into(), true),
                ("b".into(), false),
            ]
        );
    }

    #[test]
    fn osc_bel_and_st_terminators() {
        assert_eq!(
            spans("\x1b]8;;http://x\x07link\x1b]8;;\x1b\\"),
            vec![
                ("\x1b]8;;http://x\x07".into(), true),
                ("link".into(), false),
                ("\x1b]8;;\x1b\\".into(), true),
            ]
        );
    }

    #[test]
    fn charset_designation_is_a_sequence() {
        assert_eq!(
            spans("\x1b(Bok"),
            vec![("\x1b(B".into(), true), ("ok".into(), false)]
        );
    }

    #[test]
    fn round_trip_concatenation() {
        let text = "pre\x1b[1;34m中\x1b]0;t\x07post\x1b";
        let joined: String = iter_sequences(text).map(|s| s.text).collect();
        assert_eq!(joined, text);
    }

    #[test]
    fn strip_and_extract_partition() {
        let text = "a\x1b[31mb\x1b[0mc";
        assert_eq!(strip_sequences(text), "abc");
        assert_eq!(extract_sequences(text), "\x1b[31m\x1b[0m");
    }

    // ==========================================================================
    // classification tests
    // ==========================================================================

    #[test]
    fn cursor_right_counts() {
        assert_eq!(classify("\x1b[C"), SequenceKind::CursorRight(1));
        assert_eq!(classify("\x1b[5C"), SequenceKind::CursorRight(5));
        assert_eq!(classify("\x1b[0C"), SequenceKind::CursorRight(0));
    }

    #[test]
    fn cursor_left_counts() {
        assert_eq!(classify("\x1b[D"), SequenceKind::CursorLeft(1));
        assert_eq!(classify("\x1b[12D"), SequenceKind::CursorLeft(12));
    }

    #[test]
    fn styling_is_zero_width() {
        for seq in ["\x1b[m", "\x1b[0m", "\x1b[1;31;46m", "\x1b[?25l", "\x1b[?25h", "\x1b(0", "\x1b7", "\x1b="] {
            assert_eq!(classify(seq), SequenceKind::ZeroWidth, "{seq:?}");
        }
    }

    #[test]
    fn movement_without_amount_is_indeterminate() {
        for seq in [
            "\x1b[H", "\x1b[2J", "\x1b[K", "\x1b[1;5H", "\x1b[2A", "\x1b[3B", "\x1b[5d",
            "\x1b[2P", "\x1b[L", "\x1b[M", "\x1b[X", "\x1b[@", "\x1b[S", "\x1b[T",
            "\x1b[1;24r", "\x1b[?1049h", "\x1b[?1049l", "\x1b[?47h", "\x1b8", "\x1bD",
            "\x1bM", "\x1bc",
        ] {
            assert_eq!(classify(seq), SequenceKind::Indeterminate, "{seq:?}");
        }
    }

    #[test]
    fn save_cursor_and_keypad_are_zero_width() {
        assert_eq!(classify("\x1b7"), SequenceKind::ZeroWidth);
        assert_eq!(classify("\x1b>"), SequenceKind::ZeroWidth);
        assert_eq!(classify("\x1bg"), SequenceKind::ZeroWidth);
        assert_eq!(classify("\x1bH"), SequenceKind::ZeroWidth);
    }

    #[test]
    fn odd_params_downgrade_movement_to_zero_width() {
        assert_eq!(classify("\x1b[1;2C"), SequenceKind::ZeroWidth);
        assert_eq!(classify("\x1b[?5D"), SequenceKind::ZeroWidth);
    }
}
