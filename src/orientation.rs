//! The eight directions a word may run through the grid, with per-direction
//! bounds checks and sweep-skip steps.
//!
//! Coordinates follow the convention `x` = column, `y` = row, with the origin
//! at the top-left corner. "Back" orientations read right-to-left, "up"
//! orientations bottom-to-top.
//!
//! Each orientation provides three pure functions:
//!
//! - [`Orientation::step`] — the i-th cell of a word placed at an origin.
//! - [`Orientation::fits`] — cheap bounds pre-check: can a word of the given
//!   length start at `(x, y)` without leaving the grid?
//! - [`Orientation::skip`] — after a failed `fits` check, the next origin
//!   worth testing. This collapses whole infeasible runs of a row-major sweep
//!   into a single jump; advancing one cell at a time would also be correct,
//!   just slower.

use std::fmt;
use std::str::FromStr;

use crate::errors::PuzzleError;

/// One of the eight directions a word may be placed along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Left to right.
    Horizontal,
    /// Right to left.
    HorizontalBack,
    /// Top to bottom.
    Vertical,
    /// Bottom to top.
    VerticalUp,
    /// Down-right.
    Diagonal,
    /// Down-left.
    DiagonalBack,
    /// Up-right.
    DiagonalUp,
    /// Up-left.
    DiagonalUpBack,
}

/// Every orientation, in sweep order. The default set for generation and the
/// full set used when solving.
pub const ALL_ORIENTATIONS: [Orientation; 8] = [
    Orientation::Horizontal,
    Orientation::HorizontalBack,
    Orientation::Vertical,
    Orientation::VerticalUp,
    Orientation::Diagonal,
    Orientation::DiagonalBack,
    Orientation::DiagonalUp,
    Orientation::DiagonalUpBack,
];

impl Orientation {
    /// The i-th cell of a word placed at origin `(x, y)` along this
    /// orientation.
    ///
    /// Callers must have established via [`Orientation::fits`] that the whole
    /// word stays inside the grid; for the backward/upward orientations the
    /// subtraction would underflow otherwise.
    #[must_use]
    pub fn step(self, x: usize, y: usize, i: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (x + i, y),
            Orientation::HorizontalBack => (x - i, y),
            Orientation::Vertical => (x, y + i),
            Orientation::VerticalUp => (x, y - i),
            Orientation::Diagonal => (x + i, y + i),
            Orientation::DiagonalBack => (x - i, y + i),
            Orientation::DiagonalUp => (x + i, y - i),
            Orientation::DiagonalUpBack => (x - i, y - i),
        }
    }

    /// Whether a word of length `len` starting at `(x, y)` stays inside a
    /// `height` x `width` grid along this orientation.
    #[must_use]
    pub fn fits(self, x: usize, y: usize, height: usize, width: usize, len: usize) -> bool {
        match self {
            Orientation::Horizontal => width >= x + len,
            Orientation::HorizontalBack => x + 1 >= len,
            Orientation::Vertical => height >= y + len,
            Orientation::VerticalUp => y + 1 >= len,
            Orientation::Diagonal => width >= x + len && height >= y + len,
            Orientation::DiagonalBack => x + 1 >= len && height >= y + len,
            Orientation::DiagonalUp => width >= x + len && y + 1 >= len,
            Orientation::DiagonalUpBack => x + 1 >= len && y + 1 >= len,
        }
    }

    /// The next origin worth testing after [`Orientation::fits`] failed at
    /// `(x, y)` for a word of length `len`.
    ///
    /// For `Vertical` the whole remaining column sweep is infeasible, so the
    /// jump lands just past the last row and ends the sweep.
    #[must_use]
    pub fn skip(self, x: usize, y: usize, height: usize, len: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, y + 1),
            Orientation::HorizontalBack => (len - 1, y),
            Orientation::Vertical => (0, height),
            Orientation::VerticalUp => (0, len - 1),
            Orientation::Diagonal => (0, y + 1),
            Orientation::DiagonalBack => (len - 1, if x >= len - 1 { y + 1 } else { y }),
            Orientation::DiagonalUp => (0, if y < len - 1 { len - 1 } else { y + 1 }),
            Orientation::DiagonalUpBack => (len - 1, if x >= len - 1 { y + 1 } else { y }),
        }
    }

    /// Canonical name, as accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::HorizontalBack => "horizontalBack",
            Orientation::Vertical => "vertical",
            Orientation::VerticalUp => "verticalUp",
            Orientation::Diagonal => "diagonal",
            Orientation::DiagonalBack => "diagonalBack",
            Orientation::DiagonalUp => "diagonalUp",
            Orientation::DiagonalUpBack => "diagonalUpBack",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Orientation {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_ORIENTATIONS
            .iter()
            .copied()
            .find(|o| o.name() == s)
            .ok_or_else(|| PuzzleError::UnknownOrientation { name: s.to_string() })
    }
}
