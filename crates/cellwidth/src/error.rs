//! Error type for the measurement and layout operations.

use cellwidth_tables::VersionError;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by width measurement and layout.
///
/// Every variant is deterministic for identical input; operations fail
/// before producing partial output.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// An option name was not one of the accepted values.
    Option {
        /// Which option was being set.
        what: &'static str,
        /// The rejected value.
        value: String,
    },
    /// A clip or wrap range was invalid.
    Range {
        /// Human description of the violated constraint.
        reason: &'static str,
        /// The offending values as given.
        start: usize,
        /// The offending end (or width) value.
        end: usize,
    },
    /// A fill character did not measure at least one cell.
    Fill {
        /// The rejected fill string.
        fill: String,
    },
    /// Strict mode hit an illegal control character.
    Control {
        /// The offending codepoint.
        codepoint: u32,
    },
    /// Strict mode hit a sequence whose cursor effect is indeterminate.
    IndeterminateSequence {
        /// The offending sequence, escapes included.
        sequence: String,
    },
    /// A Unicode version request could not be resolved.
    Version {
        /// The string that failed to parse.
        input: String,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Option { what, value } => {
                write!(f, "invalid value {value:?} for {what}")
            }
            Self::Range { reason, start, end } => {
                write!(f, "invalid range {start}..{end}: {reason}")
            }
            Self::Fill { fill } => {
                write!(f, "fill string {fill:?} must measure at least one cell")
            }
            Self::Control { codepoint } => {
                write!(f, "illegal control character U+{codepoint:04X}")
            }
            Self::IndeterminateSequence { sequence } => {
                write!(
                    f,
                    "sequence {:?} leaves the cursor column indeterminate",
                    sequence
                )
            }
            Self::Version { input } => {
                write!(f, "unparseable Unicode version string {input:?}")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<VersionError> for Error {
    fn from(err: VersionError) -> Self {
        Self::Version { input: err.input }
    }
}
