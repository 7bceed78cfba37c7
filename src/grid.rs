//! The puzzle grid: a rectangular field of cells, each either empty or
//! holding a single letter.
//!
//! The empty state is a real sentinel (`None`), never a filler letter, so the
//! placement search can tell "free" from "occupied" exactly. Dimensions are
//! fixed at construction; the generator grows a puzzle by building a fresh,
//! larger grid rather than resizing one in place.

use std::fmt;

use rand::Rng;

use crate::errors::PuzzleError;

/// Letters used to fill blank cells after every word is placed.
pub(crate) const FILLER_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";

/// A `height` x `width` field of optional letters, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Creates a blank grid.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidDimensions`] if either dimension is zero.
    pub fn new(height: usize, width: usize) -> Result<Self, PuzzleError> {
        if height == 0 || width == 0 {
            return Err(PuzzleError::InvalidDimensions { height, width });
        }
        Ok(Grid {
            height,
            width,
            cells: vec![None; height * width],
        })
    }

    /// Builds a grid from explicit rows, mainly useful for tests and callers
    /// that assemble grids by hand.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::EmptyGrid`] for an empty row list and
    /// [`PuzzleError::RaggedRows`] when rows differ in length.
    pub fn from_rows(rows: &[Vec<Option<char>>]) -> Result<Self, PuzzleError> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(PuzzleError::EmptyGrid);
        }
        let mut cells = Vec::with_capacity(rows.len() * width);
        for row in rows {
            if row.len() != width {
                return Err(PuzzleError::RaggedRows {
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Grid {
            height: rows.len(),
            width,
            cells,
        })
    }

    /// Parses the textual form produced by [`Grid::render`]: one row per
    /// line, single-character cells separated by whitespace.
    ///
    /// Only fully-filled grids round-trip — a blank cell renders as a bare
    /// space and is indistinguishable from the separators around it. That is
    /// fine for the solve path, which always reads a finished puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::EmptyGrid`], [`PuzzleError::RaggedRows`], or
    /// [`PuzzleError::InvalidCell`] on malformed input.
    pub fn parse(text: &str) -> Result<Self, PuzzleError> {
        let mut rows: Vec<Vec<Option<char>>> = Vec::new();
        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let mut row = Vec::new();
            for token in line.split_whitespace() {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => row.push(Some(c)),
                    _ => {
                        return Err(PuzzleError::InvalidCell {
                            token: token.to_string(),
                        })
                    }
                }
            }
            rows.push(row);
        }
        Self::from_rows(&rows)
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// The letter at column `x`, row `y`, or `None` for an empty cell.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        assert!(x < self.width && y < self.height, "cell ({x}, {y}) out of bounds");
        self.cells[y * self.width + x]
    }

    /// Writes a letter at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid.
    pub fn set(&mut self, x: usize, y: usize, letter: char) {
        assert!(x < self.width && y < self.height, "cell ({x}, {y}) out of bounds");
        self.cells[y * self.width + x] = Some(letter);
    }

    /// True if no cell holds a letter yet.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Assigns a uniformly random filler letter to every empty cell.
    ///
    /// Exposed for callers that build or mutate grids themselves; the
    /// generator invokes it automatically unless blank-filling is disabled.
    pub fn fill_blanks<R: Rng>(&mut self, rng: &mut R) {
        let letters: Vec<char> = FILLER_LETTERS.chars().collect();
        for cell in &mut self.cells {
            if cell.is_none() {
                *cell = Some(letters[rng.gen_range(0..letters.len())]);
            }
        }
    }

    /// Row-major text rendering: one space-separated character per cell,
    /// empty cells rendered as a space, rows newline-terminated.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.height * (self.width * 2 + 1));
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(self.get(x, y).unwrap_or(' '));
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
