#![forbid(unsafe_code)]

//! Terminal cell-width measurement and sequence-aware text layout.
//!
//! This crate answers "how many columns does this string occupy?" for the
//! full range of text a terminal can receive, and builds layout helpers on
//! that answer:
//! - [`width`] / [`width_with_options`] - cell-width measurement with
//!   control-code policies, tab expansion, and cursor-movement tracking
//! - [`wcwidth`] / [`wcswidth`] - the classic per-character interface with
//!   its historical quirks intact
//! - [`iter_graphemes`] - grapheme cluster segmentation tuned for what
//!   terminals actually join (ZWJ emoji, Hangul jamo, flag pairs)
//! - [`iter_sequences`] / [`SequenceKind`] - escape sequence recognition
//!   and classification
//! - [`StyleState`] / [`propagate_sgr`] - SGR state tracking across lines
//! - [`ljust`], [`rjust`], [`center`], [`wrap`], [`clip`] - layout that
//!   treats escape sequences as invisible
//! - [`UnicodeVersion`] - width tables selectable by Unicode version
//!
//! # Example
//! ```
//! use cellwidth::{center, clip, width, wrap};
//!
//! assert_eq!(width("コンニチハ"), 10);
//! assert_eq!(width("\x1b[31mhello\x1b[0m"), 5);
//!
//! assert_eq!(center("中", 5, " ").unwrap(), " 中  ");
//! assert_eq!(wrap("hello world", 5).unwrap(), vec!["hello", "world"]);
//! assert_eq!(clip("hello world", 0, 5).unwrap(), "hello");
//! ```

pub mod align;
pub mod clip;
pub mod error;
pub mod grapheme;
pub mod sequences;
pub mod sgr;
pub mod width;
pub mod wrap;

pub use align::{center, center_with_options, ljust, ljust_with_options, rjust, rjust_with_options};
pub use cellwidth_tables::{UnicodeVersion, VersionError, list_versions};
pub use clip::{ClipOptions, clip, clip_with_options};
pub use error::{Error, Result};
pub use grapheme::{
    grapheme_boundary_before, iter_graphemes, iter_graphemes_between, iter_graphemes_reverse,
};
pub use sequences::{SequenceKind, Span, extract_sequences, iter_sequences, strip_sequences};
pub use sgr::{Color, SgrAttrs, StyleState, propagate_sgr};
pub use width::{
    ControlCodes, Measure, WidthOptions, wcswidth, wcswidth_with_version, wcwidth,
    wcwidth_with_version, width, width_with_options,
};
pub use wrap::{WrapOptions, wrap, wrap_with_options};
