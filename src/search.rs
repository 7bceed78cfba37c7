//! Placement search: per-cell overlap evaluation and the best-location scan.
//!
//! For one word this module enumerates every origin the grid admits, in
//! row-major order per orientation, using each orientation's `fits`/`skip`
//! pair to jump over provably infeasible runs. A running maximum overlap is
//! kept across *all* orientations; once the scan finishes, the admitted
//! candidates are pruned down to the maximal-overlap subset (unless overlap
//! preference is off, in which case every feasible candidate is returned).
//! The caller breaks ties among the survivors, typically at random.

use crate::grid::Grid;
use crate::orientation::Orientation;

/// A candidate placement for one word: origin cell, direction, and how many
/// letters coincide with letters already in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Origin column.
    pub x: usize,
    /// Origin row.
    pub y: usize,
    /// Direction the word runs in from the origin.
    pub orientation: Orientation,
    /// Number of cells that already hold the matching letter.
    pub overlap: usize,
}

/// Counts how many letters of `letters`, placed at `(x, y)` along
/// `orientation`, coincide with letters already in the grid.
///
/// Returns `None` as soon as any cell holds a *different* letter (or lies
/// outside the grid): a conflicting placement is infeasible outright, never
/// reported with a partial count. Empty cells contribute nothing.
pub(crate) fn calc_overlap(
    letters: &[char],
    grid: &Grid,
    x: usize,
    y: usize,
    orientation: Orientation,
) -> Option<usize> {
    let mut overlap = 0;
    for (i, &letter) in letters.iter().enumerate() {
        let (cx, cy) = orientation.step(x, y, i);
        // the sweep's skip steps can overshoot the right edge for backward
        // orientations; such origins are simply infeasible
        if cx >= grid.width() || cy >= grid.height() {
            return None;
        }
        match grid.get(cx, cy) {
            Some(placed) if placed == letter => overlap += 1,
            Some(_) => return None,
            None => {}
        }
    }
    Some(overlap)
}

/// Finds every admissible placement of `word` in `grid` across the allowed
/// orientations.
///
/// With `prefer_overlap` set, only placements achieving the maximal overlap
/// observed anywhere in the scan are returned; otherwise every feasible
/// placement is. The result order is scan order (orientations in the given
/// order, origins row-major); an empty word yields no placements.
#[must_use]
pub fn find_locations(
    grid: &Grid,
    word: &str,
    orientations: &[Orientation],
    prefer_overlap: bool,
) -> Vec<Location> {
    let letters: Vec<char> = word.chars().collect();
    let len = letters.len();
    if len == 0 {
        return Vec::new();
    }
    let (height, width) = (grid.height(), grid.width());

    let mut max_overlap = 0;
    let mut locations = Vec::new();

    for &orientation in orientations {
        let (mut x, mut y) = (0, 0);
        while y < height {
            if orientation.fits(x, y, height, width, len) {
                if let Some(overlap) = calc_overlap(&letters, grid, x, y, orientation) {
                    if overlap >= max_overlap || !prefer_overlap {
                        max_overlap = max_overlap.max(overlap);
                        locations.push(Location { x, y, orientation, overlap });
                    }
                }
                x += 1;
                if x >= width {
                    x = 0;
                    y += 1;
                }
            } else {
                (x, y) = orientation.skip(x, y, height, len);
            }
        }
    }

    if prefer_overlap {
        // earlier candidates may have been admitted while the running
        // maximum was still lower; keep only the final best
        locations.retain(|loc| loc.overlap == max_overlap);
    }
    locations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orientation::ALL_ORIENTATIONS;

    fn grid_from(rows: &[&str]) -> Grid {
        let rows: Vec<Vec<Option<char>>> = rows
            .iter()
            .map(|row| {
                row.chars()
                    .map(|c| if c == '.' { None } else { Some(c) })
                    .collect()
            })
            .collect();
        Grid::from_rows(&rows).unwrap()
    }

    #[test]
    fn test_overlap_counts_matching_cells_only() {
        let grid = grid_from(&[
            "c..",
            ".a.",
            "...",
        ]);
        // "cat" down-right from (0, 0): 'c' and 'a' match, 't' lands on empty
        let overlap = calc_overlap(&['c', 'a', 't'], &grid, 0, 0, Orientation::Diagonal);
        assert_eq!(overlap, Some(2));
    }

    #[test]
    fn test_overlap_on_blank_grid_is_zero() {
        let grid = Grid::new(3, 3).unwrap();
        let overlap = calc_overlap(&['c', 'a', 't'], &grid, 0, 0, Orientation::Horizontal);
        assert_eq!(overlap, Some(0));
    }

    #[test]
    fn test_conflict_is_infeasible_despite_matches_elsewhere() {
        let grid = grid_from(&[
            "cax",
            "...",
            "...",
        ]);
        // two letters match but the 'x' under 't' makes the whole placement
        // infeasible, not a partial score
        let overlap = calc_overlap(&['c', 'a', 't'], &grid, 0, 0, Orientation::Horizontal);
        assert_eq!(overlap, None);
    }

    #[test]
    fn test_overlap_full_word_match() {
        let grid = grid_from(&[
            "cat",
            "...",
            "...",
        ]);
        let overlap = calc_overlap(&['c', 'a', 't'], &grid, 0, 0, Orientation::Horizontal);
        assert_eq!(overlap, Some(3));
    }

    #[test]
    fn test_overlap_backward_orientation() {
        let grid = grid_from(&[
            "tac",
            "...",
            "...",
        ]);
        let overlap = calc_overlap(&['c', 'a', 't'], &grid, 2, 0, Orientation::HorizontalBack);
        assert_eq!(overlap, Some(3));
    }

    #[test]
    fn test_blank_grid_admits_every_horizontal_origin() {
        let grid = Grid::new(3, 3).unwrap();
        let locations = find_locations(&grid, "cat", &[Orientation::Horizontal], true);

        // length-3 word in a 3-wide grid: exactly one origin per row
        assert_eq!(locations.len(), 3);
        assert!(locations.iter().all(|l| l.x == 0 && l.overlap == 0));
        let ys: Vec<usize> = locations.iter().map(|l| l.y).collect();
        assert_eq!(ys, vec![0, 1, 2]);
    }

    #[test]
    fn test_prefer_overlap_prunes_to_best() {
        let grid = grid_from(&[
            "c..",
            "...",
            "...",
        ]);
        let locations = find_locations(&grid, "cat", &ALL_ORIENTATIONS, true);

        // every surviving candidate starts on the placed 'c'
        assert!(!locations.is_empty());
        assert!(locations.iter().all(|l| l.overlap == 1));
        assert!(locations.iter().all(|l| (l.x, l.y) == (0, 0)));
    }

    #[test]
    fn test_no_preference_keeps_all_feasible() {
        let grid = grid_from(&[
            "c..",
            "...",
            "...",
        ]);
        let pruned = find_locations(&grid, "cat", &ALL_ORIENTATIONS, true);
        let all = find_locations(&grid, "cat", &ALL_ORIENTATIONS, false);

        assert!(all.len() > pruned.len());
        // zero-overlap placements survive only without the preference
        assert!(all.iter().any(|l| l.overlap == 0));
    }

    #[test]
    fn test_word_longer_than_grid_has_no_locations() {
        let grid = Grid::new(3, 3).unwrap();
        let locations = find_locations(&grid, "elephant", &ALL_ORIENTATIONS, true);
        assert!(locations.is_empty());
    }

    #[test]
    fn test_empty_word_has_no_locations() {
        let grid = Grid::new(3, 3).unwrap();
        assert!(find_locations(&grid, "", &ALL_ORIENTATIONS, true).is_empty());
    }

    #[test]
    fn test_conflicting_grid_yields_nothing() {
        let grid = grid_from(&[
            "xxx",
            "xxx",
            "xxx",
        ]);
        let locations = find_locations(&grid, "cat", &ALL_ORIENTATIONS, false);
        assert!(locations.is_empty());
    }

    #[test]
    fn test_single_letter_word_on_matching_cell() {
        let grid = grid_from(&[
            "ab",
            "cd",
        ]);
        let locations = find_locations(&grid, "c", &ALL_ORIENTATIONS, true);
        // maximal overlap is 1, achieved only on the 'c' cell; every
        // orientation admits it, so it appears once per orientation
        assert!(!locations.is_empty());
        assert!(locations.iter().all(|l| (l.x, l.y) == (0, 1) && l.overlap == 1));
    }
}
