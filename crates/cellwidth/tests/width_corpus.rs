//! Cell-width corpus tests.
//!
//! Comprehensive test corpus for width edge cases. This covers:
//! - Basic ASCII (width 1)
//! - CJK Unified Ideographs (width 2)
//! - Fullwidth and halfwidth forms
//! - Combining characters (width 0)
//! - ZWJ sequences and variation selectors
//! - Control characters and cursor movement
//! - Escape sequences (width 0 or movement)
//! - Version-dependent widths
//! - Layout round trips (justify, wrap, clip)

use cellwidth::{
    UnicodeVersion, WidthOptions, center, clip, ljust, rjust, width, width_with_options, wrap,
};

// =============================================================================
// Test Corpus Data Structures
// =============================================================================

/// A width test case with its expected cell count.
#[derive(Debug, Clone)]
struct WidthTestCase {
    input: &'static str,
    description: &'static str,
    expected: usize,
}

impl WidthTestCase {
    const fn new(input: &'static str, description: &'static str, expected: usize) -> Self {
        Self {
            input,
            description,
            expected,
        }
    }
}

fn run(cases: &[WidthTestCase], category: &str) {
    for case in cases {
        let measured = width(case.input);
        assert_eq!(
            measured, case.expected,
            "{category} test {:?} ({}) - expected {}, got {}",
            case.input, case.description, case.expected, measured
        );
    }
}

// =============================================================================
// Category 1: Basic ASCII (width 1 per char)
// =============================================================================

const ASCII_TESTS: &[WidthTestCase] = &[
    WidthTestCase::new("a", "lowercase letter", 1),
    WidthTestCase::new("Z", "uppercase letter", 1),
    WidthTestCase::new("0", "digit", 1),
    WidthTestCase::new(" ", "space", 1),
    WidthTestCase::new("~", "tilde", 1),
    WidthTestCase::new("hello", "word", 5),
    WidthTestCase::new("Hello, World!", "sentence", 13),
    WidthTestCase::new("{}[]()<>", "brackets", 8),
    WidthTestCase::new("", "empty string", 0),
];

#[test]
fn ascii_width_tests() {
    run(ASCII_TESTS, "ASCII");
}

// =============================================================================
// Category 2: CJK (width 2 per char)
// =============================================================================

const CJK_TESTS: &[WidthTestCase] = &[
    WidthTestCase::new("\u{4E00}", "CJK U+4E00 (one)", 2),
    WidthTestCase::new("\u{4E2D}", "CJK U+4E2D (middle/China)", 2),
    WidthTestCase::new("\u{4F60}\u{597D}", "ni hao (hello)", 4),
    WidthTestCase::new("\u{65E5}\u{672C}", "nihon (Japan)", 4),
    WidthTestCase::new("\u{D55C}\u{AE00}", "hangul syllables", 4),
    WidthTestCase::new("\u{30B3}\u{30F3}\u{30CB}\u{30C1}\u{30CF}", "katakana", 10),
    WidthTestCase::new("\u{20000}", "CJK Extension B", 2),
    WidthTestCase::new("\u{1100}", "Hangul leading jamo", 2),
];

#[test]
fn cjk_width_tests() {
    run(CJK_TESTS, "CJK");
}

// =============================================================================
// Category 3: Fullwidth and halfwidth forms
// =============================================================================

const FORM_TESTS: &[WidthTestCase] = &[
    WidthTestCase::new("\u{FF21}", "fullwidth A", 2),
    WidthTestCase::new("\u{FF10}", "fullwidth 0", 2),
    WidthTestCase::new("\u{FF71}", "halfwidth katakana A", 1),
    WidthTestCase::new("\u{FFA0}", "halfwidth hangul filler", 0),
    WidthTestCase::new("\u{3000}", "ideographic space", 2),
];

#[test]
fn form_width_tests() {
    run(FORM_TESTS, "form");
}

// =============================================================================
// Category 4: Combining characters and zero-width codepoints
// =============================================================================

const COMBINING_TESTS: &[WidthTestCase] = &[
    WidthTestCase::new("e\u{0301}", "e + acute", 1),
    WidthTestCase::new("cafe\u{0301}", "word with combining accent", 4),
    WidthTestCase::new("\u{0301}", "orphan combining mark", 0),
    WidthTestCase::new("a\u{0300}\u{0301}\u{0302}", "stacked marks", 1),
    WidthTestCase::new("\u{200B}", "zero width space", 0),
    WidthTestCase::new("\u{FEFF}", "BOM / zero width no-break", 0),
    WidthTestCase::new("\u{1160}", "Hangul jungseong filler", 0),
    WidthTestCase::new("\u{0E01}\u{0E31}", "Thai with vowel sign", 1),
];

#[test]
fn combining_width_tests() {
    run(COMBINING_TESTS, "combining");
}

// =============================================================================
// Category 5: ZWJ sequences and variation selectors
// =============================================================================

const EMOJI_TESTS: &[WidthTestCase] = &[
    WidthTestCase::new("\u{1F600}", "grinning face", 2),
    WidthTestCase::new("\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}", "family ZWJ", 2),
    WidthTestCase::new(
        "\u{1F469}\u{200D}\u{2764}\u{FE0F}\u{200D}\u{1F469}",
        "couple with heart ZWJ",
        2,
    ),
    WidthTestCase::new("\u{2764}", "heart, text presentation", 1),
    WidthTestCase::new("\u{2764}\u{FE0F}", "heart + VS16", 2),
    WidthTestCase::new("\u{1F1FA}\u{1F1F8}", "flag pair", 2),
    WidthTestCase::new("\u{1F44D}\u{1F3FB}", "thumbs up + skin tone", 2),
];

#[test]
fn emoji_width_tests() {
    run(EMOJI_TESTS, "emoji");
}

// =============================================================================
// Category 6: Controls and cursor movement (default parse policy)
// =============================================================================

const CONTROL_TESTS: &[WidthTestCase] = &[
    WidthTestCase::new("a\x08b", "backspace between letters", 1),
    WidthTestCase::new("ab\x08c", "backspace overwrite", 2),
    WidthTestCase::new("\x08a", "backspace at column zero", 1),
    WidthTestCase::new("abcdef\r", "trailing carriage return", 6),
    WidthTestCase::new("abc\rzz", "overwrite after CR", 3),
    WidthTestCase::new("a\x00b", "embedded NUL", 2),
    WidthTestCase::new("a\x07b", "embedded BEL", 2),
    WidthTestCase::new("\t", "tab from column zero", 8),
    WidthTestCase::new("abc\tx", "tab to next stop", 9),
];

#[test]
fn control_width_tests() {
    run(CONTROL_TESTS, "control");
}

// =============================================================================
// Category 7: Escape sequences (default parse policy)
// =============================================================================

const SEQUENCE_TESTS: &[WidthTestCase] = &[
    WidthTestCase::new("\x1b[31mred\x1b[0m", "SGR color", 3),
    WidthTestCase::new("\x1b[1;4;38;5;199mx\x1b[m", "stacked SGR", 1),
    WidthTestCase::new("\x1b]0;window title\x07ab", "OSC title, BEL", 2),
    WidthTestCase::new("\x1b]8;;http://x\x1b\\ab", "OSC hyperlink, ST", 2),
    WidthTestCase::new("\x1bPq#0\x1b\\ab", "DCS payload", 2),
    WidthTestCase::new("ab\x1b[3Cc", "cursor right advances", 6),
    WidthTestCase::new("abc\x1b[2Dzz", "cursor left rewinds", 3),
    WidthTestCase::new("ab\x1b[100D", "cursor left floors at zero", 2),
    WidthTestCase::new("a\x1b[2Jb", "indeterminate swallowed", 2),
    WidthTestCase::new("ab\x1b", "lone trailing escape", 2),
    WidthTestCase::new("\x1b(Bab", "charset designation", 2),
];

#[test]
fn sequence_width_tests() {
    run(SEQUENCE_TESTS, "sequence");
}

// =============================================================================
// Category 8: Version-dependent widths
// =============================================================================

#[test]
fn flag_pairs_widened_in_newer_tables() {
    let old = UnicodeVersion::resolve("14.0.0").unwrap();
    let new = UnicodeVersion::resolve("17.0.0").unwrap();
    let flag = "\u{1F1FA}\u{1F1F8}";
    assert_eq!(
        width_with_options(flag, &WidthOptions::new().version(old)).unwrap(),
        1
    );
    assert_eq!(
        width_with_options(flag, &WidthOptions::new().version(new)).unwrap(),
        2
    );
}

#[test]
fn version_resolution_is_nearest_not_exceeding() {
    assert_eq!(UnicodeVersion::resolve("15.1.0").unwrap().as_str(), "14.0.0");
    assert_eq!(UnicodeVersion::resolve("99").unwrap().as_str(), "17.0.0");
    assert_eq!(UnicodeVersion::resolve("4.1").unwrap().as_str(), "14.0.0");
    assert!(UnicodeVersion::resolve("latest").is_ok());
    assert!(UnicodeVersion::resolve("banana").is_err());
}

// =============================================================================
// Category 9: Layout round trips
// =============================================================================

#[test]
fn justify_pads_by_cells() {
    assert_eq!(ljust("中", 5, " ").unwrap(), "中   ");
    assert_eq!(rjust("中", 5, " ").unwrap(), "   中");
    assert_eq!(center("中", 5, " ").unwrap(), " 中  ");
    assert_eq!(width(&ljust("\x1b[31mhi\x1b[0m", 6, " ").unwrap()), 6);
}

#[test]
fn wrap_lines_fit_their_width() {
    let text = "\u{4E2D}\u{6587} mixed width text \u{30AB}\u{30BF}";
    for target in 2..12 {
        for line in wrap(text, target).unwrap() {
            assert!(
                width(&line) <= target,
                "line {line:?} exceeds {target} cells"
            );
        }
    }
}

#[test]
fn clip_never_widens() {
    let text = "ab\u{4E2D}\x1b[32mcd\u{6587}\x1b[0mef";
    let total = width(text);
    for start in 0..total {
        for end in start..=total {
            let out = clip(text, start, end).unwrap();
            assert!(
                width(&out) <= end - start,
                "clip({start}, {end}) produced {out:?}"
            );
        }
    }
}
