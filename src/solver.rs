//! The inverse operation: given a finished grid and a word list, find where
//! each word sits.
//!
//! The solver reuses the placement search against the filled grid with
//! overlap preference on: in a fully-populated grid the maximal overlap for a
//! present word is its full length, so pruning leaves exactly the true
//! placements. A word counts as found only on a perfect, full-length match —
//! partial matches are never reported. The first candidate in scan order is
//! recorded, so results are deterministic for a given grid.

use crate::grid::Grid;
use crate::orientation::{Orientation, ALL_ORIENTATIONS};
use crate::search;

/// A word located in the grid: its text, origin cell, and direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundWord {
    /// The word as searched for.
    pub word: String,
    /// Origin column of the first letter.
    pub x: usize,
    /// Origin row of the first letter.
    pub y: usize,
    /// Direction the word reads in from the origin.
    pub orientation: Orientation,
}

/// Partition of the searched words into located and missing.
#[derive(Debug, Clone, Default)]
pub struct SolveResult {
    /// Words located in the grid, with resolved origin and orientation.
    pub found: Vec<FoundWord>,
    /// Words with no full-length match anywhere in the grid.
    pub not_found: Vec<String>,
}

/// Locates each of `words` in `grid`, reading along all eight orientations.
#[must_use]
pub fn solve<S: AsRef<str>>(grid: &Grid, words: &[S]) -> SolveResult {
    let mut result = SolveResult::default();
    for word in words {
        let word = word.as_ref();
        let len = word.chars().count();
        let locations = search::find_locations(grid, word, &ALL_ORIENTATIONS, true);
        match locations.first() {
            Some(loc) if loc.overlap == len => result.found.push(FoundWord {
                word: word.to_string(),
                x: loc.x,
                y: loc.y,
                orientation: loc.orientation,
            }),
            _ => result.not_found.push(word.to_string()),
        }
    }
    result
}
