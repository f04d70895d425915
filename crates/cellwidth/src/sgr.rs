//! SGR (Select Graphic Rendition) style state tracking.
//!
//! Parses styling sequences into a small immutable record, serializes a
//! minimal sequence reproducing a state, and propagates state across line
//! boundaries so every line is independently well-formed.
//!
//! # Example
//! ```
//! use cellwidth::{StyleState, propagate_sgr};
//!
//! let state = StyleState::default().updated("\x1b[1;31m");
//! assert!(state.is_active());
//! assert_eq!(state.to_sequence(), "\x1b[1;31m");
//!
//! let lines = propagate_sgr(["\x1b[4mab".into(), "cd\x1b[0m".into()]);
//! assert_eq!(lines, vec!["\x1b[4mab\x1b[0m", "\x1b[4mcd\x1b[0m"]);
//! ```

use bitflags::bitflags;
use smallvec::SmallVec;

use crate::sequences::iter_sequences;

bitflags! {
    /// The eight boolean SGR attributes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SgrAttrs: u8 {
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const BLINK = 1 << 4;
        const INVERSE = 1 << 5;
        const HIDDEN = 1 << 6;
        const STRIKETHROUGH = 1 << 7;
    }
}

/// Attribute set/clear parameter codes, in serialization order.
const ATTR_CODES: &[(SgrAttrs, u8)] = &[
    (SgrAttrs::BOLD, 1),
    (SgrAttrs::DIM, 2),
    (SgrAttrs::ITALIC, 3),
    (SgrAttrs::UNDERLINE, 4),
    (SgrAttrs::BLINK, 5),
    (SgrAttrs::INVERSE, 7),
    (SgrAttrs::HIDDEN, 8),
    (SgrAttrs::STRIKETHROUGH, 9),
];

/// A color as carried by an SGR parameter list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Basic palette, stored as the original parameter code
    /// (30-37/90-97 for foreground, 40-47/100-107 for background).
    Basic(u8),
    /// 256-color palette index (`38;5;n` / `48;5;n`).
    Indexed(u8),
    /// Direct 24-bit color (`38;2;r;g;b` / `48;2;r;g;b`).
    Rgb(u8, u8, u8),
}

/// Immutable record of active SGR styling.
///
/// Threaded left to right across fragments with [`StyleState::updated`];
/// never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleState {
    /// Active boolean attributes.
    pub attrs: SgrAttrs,
    /// Active foreground color, if any.
    pub foreground: Option<Color>,
    /// Active background color, if any.
    pub background: Option<Color>,
}

impl StyleState {
    /// Whether any attribute or color differs from the default.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.attrs.is_empty() || self.foreground.is_some() || self.background.is_some()
    }

    /// State after applying one SGR sequence (`ESC [ params m`).
    ///
    /// Non-SGR sequences and plain text leave the state unchanged.
    #[must_use]
    pub fn updated(self, sequence: &str) -> Self {
        let Some(params) = sgr_params(sequence) else {
            return self;
        };
        self.apply(&params)
    }

    /// State after scanning all sequences in `text` in order.
    #[must_use]
    pub fn updated_by_text(self, text: &str) -> Self {
        let mut state = self;
        for span in iter_sequences(text) {
            if span.is_sequence() {
                state = state.updated(span.text);
            }
        }
        state
    }

    /// Functional update over a parsed parameter list.
    fn apply(self, params: &[u16]) -> Self {
        let mut state = self;
        let mut i = 0;
        while i < params.len() {
            let code = params[i];
            match code {
                0 => state = Self::default(),
                22 => state.attrs.remove(SgrAttrs::BOLD | SgrAttrs::DIM),
                23 => state.attrs.remove(SgrAttrs::ITALIC),
                24 => state.attrs.remove(SgrAttrs::UNDERLINE),
                25 => state.attrs.remove(SgrAttrs::BLINK),
                27 => state.attrs.remove(SgrAttrs::INVERSE),
                28 => state.attrs.remove(SgrAttrs::HIDDEN),
                29 => state.attrs.remove(SgrAttrs::STRIKETHROUGH),
                1..=9 => {
                    if let Some(&(attr, _)) = ATTR_CODES.iter().find(|&&(_, c)| u16::from(c) == code) {
                        state.attrs.insert(attr);
                    }
                }
                30..=37 | 90..=97 => state.foreground = Some(Color::Basic(code as u8)),
                40..=47 | 100..=107 => state.background = Some(Color::Basic(code as u8)),
                39 => state.foreground = None,
                49 => state.background = None,
                38 | 48 => match parse_extended_color(&params[i + 1..]) {
                    Some((color, consumed)) => {
                        if code == 38 {
                            state.foreground = Some(color);
                        } else {
                            state.background = Some(color);
                        }
                        i += consumed;
                    }
                    // Malformed sub-mode: stop consuming, keep state.
                    None => return state,
                },
                _ => {}
            }
            i += 1;
        }
        state
    }

    /// Minimal SGR sequence reconstructing this state from default, or an
    /// empty string for the default state.
    #[must_use]
    pub fn to_sequence(&self) -> String {
        if !self.is_active() {
            return String::new();
        }
        let mut params: SmallVec<[String; 8]> = SmallVec::new();
        for &(attr, code) in ATTR_CODES {
            if self.attrs.contains(attr) {
                params.push(code.to_string());
            }
        }
        if let Some(color) = self.foreground {
            params.push(color_params(color, 38));
        }
        if let Some(color) = self.background {
            params.push(color_params(color, 48));
        }
        format!("\x1b[{}m", params.join(";"))
    }
}

fn color_params(color: Color, extended_intro: u16) -> String {
    match color {
        Color::Basic(code) => code.to_string(),
        Color::Indexed(n) => format!("{extended_intro};5;{n}"),
        Color::Rgb(r, g, b) => format!("{extended_intro};2;{r};{g};{b}"),
    }
}

/// `38;5;n` / `48;5;n` or `38;2;r;g;b` tails; returns the color and how
/// many parameters beyond the introducer were consumed.
fn parse_extended_color(rest: &[u16]) -> Option<(Color, usize)> {
    match rest.first()? {
        5 => {
            let n = *rest.get(1)?;
            (n <= 255).then_some((Color::Indexed(n as u8), 2))
        }
        2 => {
            let (r, g, b) = (*rest.get(1)?, *rest.get(2)?, *rest.get(3)?);
            (r <= 255 && g <= 255 && b <= 255)
                .then_some((Color::Rgb(r as u8, g as u8, b as u8), 4))
        }
        _ => None,
    }
}

/// Parameter list of an SGR sequence, or `None` when `sequence` is not
/// one. An empty parameter list is the reset, `[0]`.
fn sgr_params(sequence: &str) -> Option<SmallVec<[u16; 8]>> {
    let body = sequence.strip_prefix("\x1b[")?.strip_suffix('m')?;
    if !body.bytes().all(|b| b.is_ascii_digit() || b == b';') {
        return None;
    }
    if body.is_empty() {
        return Some(SmallVec::from_slice(&[0]));
    }
    let mut params = SmallVec::new();
    for piece in body.split(';') {
        // Empty positions default to 0, as terminals do.
        let value: u16 = if piece.is_empty() {
            0
        } else {
            piece.parse().ok()?
        };
        params.push(value);
    }
    Some(params)
}

/// Carry SGR styling across lines so each line stands alone.
///
/// When no line contains a styling sequence the input is returned
/// unchanged. Otherwise each line is prefixed with the sequence restoring
/// the state carried from the previous line's end, and suffixed with a
/// full reset whenever its own end state is still active.
#[must_use]
pub fn propagate_sgr<I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let lines: Vec<String> = lines.into_iter().collect();
    if !lines.iter().any(|line| contains_sgr(line)) {
        return lines;
    }
    let mut out = Vec::with_capacity(lines.len());
    let mut carried = StyleState::default();
    for line in lines {
        let end_state = carried.updated_by_text(&line);
        let mut rendered = String::with_capacity(line.len() + 16);
        if carried.is_active() {
            rendered.push_str(&carried.to_sequence());
        }
        rendered.push_str(&line);
        if end_state.is_active() {
            rendered.push_str("\x1b[0m");
        }
        out.push(rendered);
        carried = end_state;
    }
    out
}

/// Whether a recognized sequence is an SGR sequence.
pub(crate) fn is_sgr(sequence: &str) -> bool {
    sgr_params(sequence).is_some()
}

fn contains_sgr(line: &str) -> bool {
    iter_sequences(line).any(|span| span.is_sequence() && is_sgr(span.text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_of(text: &str) -> StyleState {
        StyleState::default().updated_by_text(text)
    }

    // ==========================================================================
    // update tests
    // ==========================================================================

    #[test]
    fn default_is_inactive() {
        assert!(!StyleState::default().is_active());
        assert_eq!(StyleState::default().to_sequence(), "");
    }

    #[test]
    fn attributes_toggle_on_and_off() {
        let state = state_of("\x1b[1m\x1b[3m");
        assert!(state.attrs.contains(SgrAttrs::BOLD | SgrAttrs::ITALIC));
        let state = StyleState::default().updated_by_text("\x1b[1m\x1b[3m\x1b[23m");
        assert_eq!(state.attrs, SgrAttrs::BOLD);
    }

    #[test]
    fn reset_clears_everything() {
        assert!(!state_of("\x1b[1;31;46m\x1b[0m").is_active());
        // Empty parameter list is the reset.
        assert!(!state_of("\x1b[1;31m\x1b[m").is_active());
    }

    #[test]
    fn code_22_clears_bold_and_dim() {
        let state = state_of("\x1b[1;2;4m\x1b[22m");
        assert_eq!(state.attrs, SgrAttrs::UNDERLINE);
    }

    #[test]
    fn basic_colors() {
        let state = state_of("\x1b[31;42m");
        assert_eq!(state.foreground, Some(Color::Basic(31)));
        assert_eq!(state.background, Some(Color::Basic(42)));
        let state = state_of("\x1b[31;42m\x1b[39;49m");
        assert!(!state.is_active());
    }

    #[test]
    fn bright_colors() {
        assert_eq!(state_of("\x1b[97m").foreground, Some(Color::Basic(97)));
        assert_eq!(state_of("\x1b[100m").background, Some(Color::Basic(100)));
    }

    #[test]
    fn extended_colors() {
        assert_eq!(state_of("\x1b[38;5;196m").foreground, Some(Color::Indexed(196)));
        assert_eq!(
            state_of("\x1b[48;2;10;20;30m").background,
            Some(Color::Rgb(10, 20, 30))
        );
    }

    #[test]
    fn newer_color_replaces_older_regardless_of_encoding() {
        let state = state_of("\x1b[38;5;196m\x1b[34m");
        assert_eq!(state.foreground, Some(Color::Basic(34)));
        let state = state_of("\x1b[34m\x1b[38;2;1;2;3m");
        assert_eq!(state.foreground, Some(Color::Rgb(1, 2, 3)));
    }

    #[test]
    fn malformed_extended_color_leaves_state_unchanged() {
        assert_eq!(state_of("\x1b[38m"), StyleState::default());
        assert_eq!(state_of("\x1b[38;5m"), StyleState::default());
        assert_eq!(state_of("\x1b[38;9;1m"), StyleState::default());
        // Parameters before the malformed tail still apply.
        assert_eq!(state_of("\x1b[1;38;5m").attrs, SgrAttrs::BOLD);
    }

    #[test]
    fn unknown_codes_are_ignored() {
        assert_eq!(state_of("\x1b[73m"), StyleState::default());
        assert_eq!(state_of("\x1b[1;73m").attrs, SgrAttrs::BOLD);
    }

    #[test]
    fn non_sgr_sequences_leave_state_unchanged() {
        assert_eq!(state_of("\x1b[2J\x1b[5C\x1b]0;t\x07"), StyleState::default());
        let state = state_of("\x1b[1m\x1b[2J");
        assert_eq!(state.attrs, SgrAttrs::BOLD);
    }

    // ==========================================================================
    // to_sequence tests
    // ==========================================================================

    #[test]
    fn to_sequence_orders_attrs_then_colors() {
        let state = state_of("\x1b[46m\x1b[31m\x1b[4m\x1b[1m");
        assert_eq!(state.to_sequence(), "\x1b[1;4;31;46m");
    }

    #[test]
    fn to_sequence_round_trips() {
        for text in ["\x1b[1m", "\x1b[38;5;100;48;2;9;8;7m", "\x1b[2;7;9;37;40m"] {
            let state = state_of(text);
            assert_eq!(state_of(&state.to_sequence()), state);
        }
    }

    // ==========================================================================
    // propagate tests
    // ==========================================================================

    #[test]
    fn propagate_without_styling_is_identity() {
        let lines = vec!["plain".to_string(), "text \x1b[5C moved".to_string()];
        assert_eq!(propagate_sgr(lines.clone()), lines);
    }

    #[test]
    fn propagate_carries_and_resets() {
        let lines = vec!["\x1b[31mhello".to_string(), "world\x1b[0m".to_string()];
        assert_eq!(
            propagate_sgr(lines),
            vec!["\x1b[31mhello\x1b[0m", "\x1b[31mworld\x1b[0m"]
        );
    }

    #[test]
    fn propagate_closed_style_does_not_leak() {
        let lines = vec!["\x1b[1mb\x1b[0m plain".to_string(), "next".to_string()];
        assert_eq!(propagate_sgr(lines), vec!["\x1b[1mb\x1b[0m plain", "next"]);
    }

    #[test]
    fn propagate_style_change_mid_stream() {
        let lines = vec![
            "\x1b[31ma".to_string(),
            "b\x1b[44mc".to_string(),
            "d\x1b[0m".to_string(),
        ];
        assert_eq!(
            propagate_sgr(lines),
            vec![
                "\x1b[31ma\x1b[0m",
                "\x1b[31mb\x1b[44mc\x1b[0m",
                "\x1b[31;44md\x1b[0m",
            ]
        );
    }
}
