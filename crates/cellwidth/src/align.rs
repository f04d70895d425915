//! Cell-based justification.
//!
//! `str::len`-based padding misaligns CJK and emoji; these pad by
//! measured cells instead, with sequences measuring zero.
//!
//! # Example
//! ```
//! use cellwidth::{ljust, center};
//!
//! assert_eq!(ljust("中", 5, " ").unwrap(), "中   ");
//! assert_eq!(center("ab", 5, "-").unwrap(), "-ab--");
//! ```

use crate::error::{Error, Result};
use crate::width::{ControlCodes, WidthOptions, width_with_options};

/// Measured cell widths of the text and the fill under `options`.
///
/// The fill is always measured under the ignore policy and must come out
/// positive.
fn measure(text: &str, fill: &str, options: &WidthOptions) -> Result<(usize, usize)> {
    let fill_cells = width_with_options(
        fill,
        &WidthOptions::new()
            .control_codes(ControlCodes::Ignore)
            .version(options.version),
    )?;
    if fill_cells == 0 {
        return Err(Error::Fill {
            fill: fill.to_string(),
        });
    }
    let text_cells = width_with_options(text, options)?;
    Ok((text_cells, fill_cells))
}

fn repeat_fill(fill: &str, cells_missing: usize, fill_cells: usize) -> String {
    fill.repeat(cells_missing / fill_cells)
}

/// Left-justify `text` to `cells` terminal columns.
pub fn ljust(text: &str, cells: usize, fill: &str) -> Result<String> {
    ljust_with_options(text, cells, fill, &WidthOptions::new())
}

/// [`ljust`] with explicit measurement options.
pub fn ljust_with_options(
    text: &str,
    cells: usize,
    fill: &str,
    options: &WidthOptions,
) -> Result<String> {
    let (text_cells, fill_cells) = measure(text, fill, options)?;
    let pad = repeat_fill(fill, cells.saturating_sub(text_cells), fill_cells);
    Ok(format!("{text}{pad}"))
}

/// Right-justify `text` to `cells` terminal columns.
pub fn rjust(text: &str, cells: usize, fill: &str) -> Result<String> {
    rjust_with_options(text, cells, fill, &WidthOptions::new())
}

/// [`rjust`] with explicit measurement options.
pub fn rjust_with_options(
    text: &str,
    cells: usize,
    fill: &str,
    options: &WidthOptions,
) -> Result<String> {
    let (text_cells, fill_cells) = measure(text, fill, options)?;
    let pad = repeat_fill(fill, cells.saturating_sub(text_cells), fill_cells);
    Ok(format!("{pad}{text}"))
}

/// Center `text` in `cells` terminal columns, extra cell on the right.
pub fn center(text: &str, cells: usize, fill: &str) -> Result<String> {
    center_with_options(text, cells, fill, &WidthOptions::new())
}

/// [`center`] with explicit measurement options.
pub fn center_with_options(
    text: &str,
    cells: usize,
    fill: &str,
    options: &WidthOptions,
) -> Result<String> {
    let (text_cells, fill_cells) = measure(text, fill, options)?;
    let missing = cells.saturating_sub(text_cells);
    let left = repeat_fill(fill, missing / 2, fill_cells);
    let right = repeat_fill(fill, missing - missing / 2, fill_cells);
    Ok(format!("{left}{text}{right}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // justification tests
    // ==========================================================================

    #[test]
    fn ljust_pads_by_cells() {
        assert_eq!(ljust("ab", 5, " ").unwrap(), "ab   ");
        assert_eq!(ljust("中文", 6, ".").unwrap(), "中文..");
    }

    #[test]
    fn rjust_pads_by_cells() {
        assert_eq!(rjust("ab", 5, " ").unwrap(), "   ab");
        assert_eq!(rjust("中", 4, "-").unwrap(), "--中");
    }

    #[test]
    fn center_puts_extra_cell_right() {
        assert_eq!(center("ab", 5, " ").unwrap(), " ab  ");
        assert_eq!(center("ab", 4, " ").unwrap(), " ab ");
    }

    #[test]
    fn no_padding_when_already_wide_enough() {
        assert_eq!(ljust("hello", 3, " ").unwrap(), "hello");
        assert_eq!(center("hello", 5, " ").unwrap(), "hello");
    }

    #[test]
    fn sequences_measure_zero() {
        assert_eq!(ljust("\x1b[1mab\x1b[0m", 4, " ").unwrap(), "\x1b[1mab\x1b[0m  ");
    }

    #[test]
    fn wide_fill_advances_two_cells() {
        // Three missing cells fit one wide fill, leaving one cell short.
        assert_eq!(ljust("a", 4, "中").unwrap(), "a中");
        assert_eq!(rjust("a", 5, "中").unwrap(), "中中a");
    }

    #[test]
    fn zero_width_fill_is_rejected() {
        assert!(matches!(ljust("a", 4, "\u{301}"), Err(Error::Fill { .. })));
        assert!(matches!(center("a", 4, ""), Err(Error::Fill { .. })));
        assert!(matches!(rjust("a", 4, "\x1b[1m"), Err(Error::Fill { .. })));
    }
}
