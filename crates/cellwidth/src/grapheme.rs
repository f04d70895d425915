//! Grapheme cluster segmentation.
//!
//! Splits text into user-perceived characters using local boundary rules:
//! CR+LF stays joined, combining marks attach to their base, Hangul
//! conjoining jamo form syllables, regional indicators pair two-by-two
//! into flags, and a zero-width joiner fuses pictographic codepoints into
//! one emoji. Everything else is a cluster of its own.
//!
//! Reverse iteration never rescans from the start of the string: each
//! cluster start is found by a bounded backward scan followed by a short
//! forward confirmation pass.
//!
//! # Example
//! ```
//! use cellwidth::iter_graphemes;
//!
//! let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}";
//! assert_eq!(iter_graphemes(family).count(), 1);
//! assert_eq!(iter_graphemes("cafe\u{301}").count(), 4);
//! ```

use cellwidth_tables::{EXTENDED_PICTOGRAPHIC, GRAPHEME_EXTEND, bisearch};

/// Cap on the backward safe-start scan; matches the longest cluster run
/// worth handling before giving up precision on degenerate input.
const MAX_GRAPHEME_SCAN: usize = 32;

const ZWJ: u32 = 0x200D;

/// Local break class of one codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Cr,
    Lf,
    Extend,
    Zwj,
    Regional,
    HangulL,
    HangulV,
    HangulT,
    HangulLv,
    HangulLvt,
    Pictographic,
    Other,
}

fn classify(cp: u32) -> Class {
    match cp {
        0x0D => Class::Cr,
        0x0A => Class::Lf,
        ZWJ => Class::Zwj,
        0x1F1E6..=0x1F1FF => Class::Regional,
        0x1100..=0x115F | 0xA960..=0xA97C => Class::HangulL,
        0x1160..=0x11A7 | 0xD7B0..=0xD7C6 => Class::HangulV,
        0x11A8..=0x11FF | 0xD7CB..=0xD7FB => Class::HangulT,
        0xAC00..=0xD7A3 => {
            if (cp - 0xAC00) % 28 == 0 {
                Class::HangulLv
            } else {
                Class::HangulLvt
            }
        }
        _ if bisearch(cp, GRAPHEME_EXTEND) => Class::Extend,
        _ if bisearch(cp, EXTENDED_PICTOGRAPHIC) => Class::Pictographic,
        _ => Class::Other,
    }
}

fn is_hangul(class: Class) -> bool {
    matches!(
        class,
        Class::HangulL | Class::HangulV | Class::HangulT | Class::HangulLv | Class::HangulLvt
    )
}

/// Whether `right` continues a Hangul syllable begun by `left`.
fn hangul_links(left: Class, right: Class) -> bool {
    match left {
        Class::HangulL => matches!(
            right,
            Class::HangulL | Class::HangulV | Class::HangulLv | Class::HangulLvt
        ),
        Class::HangulV | Class::HangulLv => {
            matches!(right, Class::HangulV | Class::HangulT)
        }
        Class::HangulT | Class::HangulLvt => matches!(right, Class::HangulT),
        _ => false,
    }
}

/// Byte length of the grapheme cluster starting at `start`.
///
/// `start` must be a char boundary and a cluster boundary; the caller
/// advances cluster by cluster from position 0 (or another known
/// boundary) for this to hold.
fn cluster_len(text: &str, start: usize) -> usize {
    let mut chars = text[start..].char_indices();
    let Some((_, first)) = chars.next() else {
        return 0;
    };
    let mut prev = classify(first as u32);
    let mut end = start + first.len_utf8();
    let mut ri_pairable = prev == Class::Regional;
    let mut after_zwj = false;

    for (offset, c) in chars {
        let class = classify(c as u32);
        let joins = match class {
            Class::Lf => prev == Class::Cr,
            Class::Extend | Class::Zwj => true,
            Class::Regional => {
                // Pair flags two-by-two; a completed pair never extends.
                prev == Class::Regional && std::mem::take(&mut ri_pairable)
            }
            Class::Pictographic => after_zwj,
            _ if is_hangul(class) => hangul_links(prev, class),
            _ => false,
        };
        if !joins {
            break;
        }
        after_zwj = match class {
            Class::Zwj => prev == Class::Pictographic || after_zwj,
            _ => false,
        };
        // Extend marks keep the base class alive for joining decisions.
        if class != Class::Extend && class != Class::Zwj {
            prev = class;
        }
        end = start + offset + c.len_utf8();
    }
    end - start
}

/// Iterate grapheme clusters of `text` front to back.
pub fn iter_graphemes(text: &str) -> Graphemes<'_> {
    Graphemes { text, pos: 0 }
}

/// Iterate grapheme clusters of `text[start..end]` front to back.
///
/// # Panics
/// Panics if `start` or `end` is not a char boundary, like slicing.
pub fn iter_graphemes_between(text: &str, start: usize, end: usize) -> Graphemes<'_> {
    Graphemes {
        text: &text[..end],
        pos: start,
    }
}

/// Iterator returned by [`iter_graphemes`].
#[derive(Debug, Clone)]
pub struct Graphemes<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Graphemes<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.pos >= self.text.len() {
            return None;
        }
        let len = cluster_len(self.text, self.pos);
        let cluster = &self.text[self.pos..self.pos + len];
        self.pos += len;
        Some(cluster)
    }
}

/// Iterate grapheme clusters back to front without rescanning from the
/// start of the string.
pub fn iter_graphemes_reverse(text: &str) -> GraphemesRev<'_> {
    GraphemesRev {
        text,
        end: text.len(),
    }
}

/// Iterator returned by [`iter_graphemes_reverse`].
#[derive(Debug, Clone)]
pub struct GraphemesRev<'a> {
    text: &'a str,
    end: usize,
}

impl<'a> Iterator for GraphemesRev<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.end == 0 {
            return None;
        }
        let start = cluster_start(self.text, self.end);
        let cluster = &self.text[start..self.end];
        self.end = start;
        Some(cluster)
    }
}

/// Start of the grapheme cluster containing the character before `index`.
///
/// `index` is clamped to the string length; an `index` of zero returns
/// zero. Must lie on a char boundary.
#[must_use]
pub fn grapheme_boundary_before(text: &str, index: usize) -> usize {
    if index == 0 || text.is_empty() {
        return 0;
    }
    cluster_start(text, index.min(text.len()))
}

/// Backward scan for the start of the cluster ending at `end`.
fn cluster_start(text: &str, end: usize) -> usize {
    let last_start = prev_char_boundary(text, end);
    let last = text[last_start..].chars().next().unwrap_or('\0');

    // CR+LF joins without any wider context.
    if last == '\n' {
        let before = prev_char_boundary(text, last_start);
        if last_start > 0 && text.as_bytes()[before] == b'\r' {
            return before;
        }
        return last_start;
    }
    // ASCII other than LF always starts its own cluster.
    if last.is_ascii() {
        return last_start;
    }

    // Walk back to a safe start: ASCII always begins a cluster (though it
    // may not end one, so the scan includes it), and the scan is capped to
    // keep degenerate mark runs bounded.
    let mut safe = last_start;
    let mut scanned = 0;
    while safe > 0 && scanned < MAX_GRAPHEME_SCAN {
        let prev = prev_char_boundary(text, safe);
        let c = text[prev..].chars().next().unwrap_or('\0');
        safe = prev;
        if c.is_ascii() {
            break;
        }
        scanned += 1;
    }

    // Confirm forward from the safe start.
    let mut pos = safe;
    while pos < end {
        let len = cluster_len(text, pos);
        if pos + len >= end {
            return pos;
        }
        pos += len;
    }
    pos
}

fn prev_char_boundary(text: &str, index: usize) -> usize {
    let mut i = index.saturating_sub(1);
    while i > 0 && !text.is_char_boundary(i) {
        i -= 1;
    }
    i
}
