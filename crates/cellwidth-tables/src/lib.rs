#![forbid(unsafe_code)]

//! Generated Unicode interval tables and version resolution.
//!
//! This crate carries the static data the measurement engine consumes: per
//! Unicode version, the East Asian Wide/Fullwidth codepoints (2 cells) and
//! the zero-cell codepoints (combining marks, fillers, format controls),
//! plus the Variation Selector-16 dual-presentation bases and the grapheme
//! cluster property ranges. All tables are ordered, disjoint, inclusive
//! `(start, end)` ranges, emitted by `tools/gen_tables.py`.
//!
//! # Example
//! ```
//! use cellwidth_tables::{UnicodeVersion, bisearch};
//!
//! let version = UnicodeVersion::resolve("latest").unwrap();
//! assert!(bisearch('中' as u32, version.wide()));
//! assert!(bisearch(0x0301, version.zero()));
//! ```

mod grapheme_data;
mod vs16;
mod wide;
mod zero;

pub use grapheme_data::{EXTENDED_PICTOGRAPHIC, GRAPHEME_EXTEND};
pub use vs16::VS16_NARROW_TO_WIDE;

/// Supported Unicode versions, ascending.
pub static VERSIONS: &[&str] = &["14.0.0", "17.0.0"];

static WIDE: &[&[(u32, u32)]] = &[wide::WIDE_14_0_0, wide::WIDE_17_0_0];
static ZERO: &[&[(u32, u32)]] = &[zero::ZERO_14_0_0, zero::ZERO_17_0_0];

/// An unresolvable Unicode version request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionError {
    /// The string that failed to parse.
    pub input: String,
}

impl std::fmt::Display for VersionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unparseable Unicode version string {:?}", self.input)
    }
}

impl std::error::Error for VersionError {}

/// A resolved Unicode version: an immutable handle over the WIDE and ZERO
/// tables for that version. Cheap to copy; resolve once and pass by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnicodeVersion {
    index: usize,
}

impl UnicodeVersion {
    /// Resolve a version request against the supported list.
    ///
    /// `"latest"` yields the newest supported version. An exact match is
    /// used when present; otherwise the nearest supported version not
    /// exceeding the request. A request below the earliest supported
    /// version clamps to the earliest. Unparseable input is an error.
    pub fn resolve(spec: &str) -> Result<Self, VersionError> {
        if spec == "latest" {
            return Ok(Self::latest());
        }
        let requested = parse_version(spec).ok_or_else(|| VersionError {
            input: spec.to_string(),
        })?;
        let mut index = 0;
        for (i, candidate) in VERSIONS.iter().enumerate() {
            // Supported entries always parse; emitted by the generator.
            let Some(parsed) = parse_version(candidate) else {
                break;
            };
            if parsed <= requested {
                index = i;
            } else {
                break;
            }
        }
        Ok(Self { index })
    }

    /// The newest supported version.
    #[must_use]
    pub fn latest() -> Self {
        Self {
            index: VERSIONS.len() - 1,
        }
    }

    /// Resolve from the `UNICODE_VERSION` environment variable, falling
    /// back to the newest supported version when it is unset.
    pub fn from_env() -> Result<Self, VersionError> {
        match std::env::var("UNICODE_VERSION") {
            Ok(spec) => Self::resolve(&spec),
            Err(_) => Ok(Self::latest()),
        }
    }

    /// The resolved version string, e.g. `"17.0.0"`.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        VERSIONS[self.index]
    }

    /// WIDE table for this version.
    #[must_use]
    pub fn wide(&self) -> &'static [(u32, u32)] {
        WIDE[self.index]
    }

    /// ZERO table for this version.
    #[must_use]
    pub fn zero(&self) -> &'static [(u32, u32)] {
        ZERO[self.index]
    }

    /// Whether VS-16 dual-presentation flipping applies (version ≥ 9.0.0).
    #[must_use]
    pub fn supports_vs16(&self) -> bool {
        parse_version(self.as_str()) >= parse_version("9.0.0")
    }
}

impl Default for UnicodeVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl std::fmt::Display for UnicodeVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// List the supported version strings, ascending.
#[must_use]
pub fn list_versions() -> &'static [&'static str] {
    VERSIONS
}

/// Parse 1-3 dot-separated unsigned components; `None` on anything else.
fn parse_version(spec: &str) -> Option<(u32, u32, u32)> {
    let mut parts = [0u32; 3];
    let mut count = 0;
    for piece in spec.split('.') {
        if count == 3 || piece.is_empty() {
            return None;
        }
        parts[count] = piece.parse().ok()?;
        count += 1;
    }
    if count == 0 {
        return None;
    }
    Some((parts[0], parts[1], parts[2]))
}

/// Binary search over ordered inclusive ranges.
#[must_use]
pub fn bisearch(cp: u32, table: &[(u32, u32)]) -> bool {
    let mut lo = 0usize;
    let mut hi = table.len();
    while lo < hi {
        let mid = (lo + hi) / 2;
        let (start, end) = table[mid];
        if cp < start {
            hi = mid;
        } else if cp > end {
            lo = mid + 1;
        } else {
            return true;
        }
    }
    false
}

/// Whether a VS-16 after `cp` flips its rendering from narrow to wide.
#[must_use]
pub fn vs16_flips(cp: u32) -> bool {
    bisearch(cp, VS16_NARROW_TO_WIDE)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // bisearch tests
    // ==========================================================================

    #[test]
    fn bisearch_empty_table() {
        assert!(!bisearch(0x41, &[]));
    }

    #[test]
    fn bisearch_hits_and_misses() {
        let table = &[(0x10, 0x1F), (0x30, 0x30), (0x100, 0x1FF)];
        assert!(bisearch(0x10, table));
        assert!(bisearch(0x1F, table));
        assert!(bisearch(0x30, table));
        assert!(bisearch(0x150, table));
        assert!(!bisearch(0x0F, table));
        assert!(!bisearch(0x20, table));
        assert!(!bisearch(0x31, table));
        assert!(!bisearch(0x200, table));
    }

    #[test]
    fn tables_are_ordered_and_disjoint() {
        for version in [UnicodeVersion::resolve("14.0.0").unwrap(), UnicodeVersion::latest()] {
            for table in [version.wide(), version.zero()] {
                let mut prev_end = None;
                for &(start, end) in table {
                    assert!(start <= end);
                    if let Some(prev) = prev_end {
                        assert!(start > prev, "overlap at {start:#x} in {version}");
                    }
                    prev_end = Some(end);
                }
            }
        }
    }

    // ==========================================================================
    // version resolution tests
    // ==========================================================================

    #[test]
    fn resolve_latest() {
        let v = UnicodeVersion::resolve("latest").unwrap();
        assert_eq!(v.as_str(), "17.0.0");
        assert_eq!(v, UnicodeVersion::latest());
    }

    #[test]
    fn resolve_exact() {
        assert_eq!(UnicodeVersion::resolve("14.0.0").unwrap().as_str(), "14.0.0");
        assert_eq!(UnicodeVersion::resolve("17.0.0").unwrap().as_str(), "17.0.0");
    }

    #[test]
    fn resolve_nearest_not_exceeding() {
        assert_eq!(UnicodeVersion::resolve("15.1.0").unwrap().as_str(), "14.0.0");
        assert_eq!(UnicodeVersion::resolve("16").unwrap().as_str(), "14.0.0");
        assert_eq!(UnicodeVersion::resolve("99.0.0").unwrap().as_str(), "17.0.0");
    }

    #[test]
    fn resolve_below_earliest_clamps() {
        assert_eq!(UnicodeVersion::resolve("4.1.0").unwrap().as_str(), "14.0.0");
    }

    #[test]
    fn resolve_short_forms() {
        assert_eq!(UnicodeVersion::resolve("14").unwrap().as_str(), "14.0.0");
        assert_eq!(UnicodeVersion::resolve("14.0").unwrap().as_str(), "14.0.0");
    }

    #[test]
    fn resolve_rejects_garbage() {
        for bad in ["", "spam", "1.2.3.4", "1..2", "4.5.x", "14.0.0 "] {
            assert!(UnicodeVersion::resolve(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn vs16_applies_to_latest() {
        assert!(UnicodeVersion::latest().supports_vs16());
    }

    // ==========================================================================
    // table content spot checks
    // ==========================================================================

    #[test]
    fn wide_contains_cjk_and_kana() {
        let v = UnicodeVersion::latest();
        assert!(bisearch('中' as u32, v.wide()));
        assert!(bisearch('カ' as u32, v.wide()));
        assert!(!bisearch('a' as u32, v.wide()));
    }

    #[test]
    fn zero_contains_marks_and_zwj() {
        let v = UnicodeVersion::latest();
        assert!(bisearch(0x0301, v.zero())); // combining acute
        assert!(bisearch(0x200D, v.zero())); // ZWJ
        assert!(bisearch(0x1160, v.zero())); // jungseong filler
        assert!(!bisearch(0x00AD, v.zero())); // soft hyphen stays 1 cell
    }

    #[test]
    fn vs16_flips_text_default_emoji() {
        assert!(vs16_flips(0x2764)); // heavy black heart
        assert!(!vs16_flips('a' as u32));
    }
}
