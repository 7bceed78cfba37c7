//! Puzzle assembly: places every word into a grid, growing the grid until a
//! full placement succeeds, then fills the leftover cells with random
//! letters.
//!
//! Words are placed longest-first — long words are the hardest to fit, and
//! placing them early builds the densest lattice for shorter words to overlap
//! onto. Each attempt starts from a fresh blank grid; if any word ends up
//! with no admissible location the whole attempt is discarded. After
//! `max_attempts` failed attempts both dimensions grow by one and the attempt
//! counter resets, so the search space strictly enlarges until every word
//! fits.
//!
//! A failed single placement is never surfaced to the caller: the only
//! observable outcomes are a finished grid or an error for degenerate input
//! (empty list, empty word, zero dimension) or a tripped growth cap.
//!
//! # Examples
//!
//! ```
//! use wordfind::generator::{self, GenerateOptions};
//! use wordfind::solver;
//!
//! let words = ["rust", "crate", "cargo"];
//! let grid = generator::generate(&words, &GenerateOptions::default())?;
//!
//! let result = solver::solve(&grid, &words);
//! assert!(result.not_found.is_empty());
//! # Ok::<(), wordfind::errors::PuzzleError>(())
//! ```

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::errors::PuzzleError;
use crate::grid::Grid;
use crate::orientation::{Orientation, ALL_ORIENTATIONS};
use crate::search::{self, Location};

/// Fresh-grid attempts per grid size before growing.
pub const DEFAULT_MAX_ATTEMPTS: usize = 3;

/// Knobs for [`generate`]. [`GenerateOptions::default`] gives the standard
/// puzzle: square grid sized to the longest word, all eight orientations,
/// overlap-seeking placement, random filler letters.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Grid height; defaults to the longest word's length. The effective
    /// height is never smaller than the longest word.
    pub height: Option<usize>,
    /// Grid width; same defaulting as `height`.
    pub width: Option<usize>,
    /// Directions words may be placed along.
    pub orientations: Vec<Orientation>,
    /// Assign random letters to unused cells once placement succeeds.
    pub fill_blanks: bool,
    /// Fresh-grid attempts per grid size before growing.
    pub max_attempts: usize,
    /// Prefer placements that overlap letters already in the grid. Turning
    /// this off admits any feasible placement for random selection, giving
    /// sparser, faster-to-build puzzles.
    pub prefer_overlap: bool,
    /// Seed for the random source; `None` draws from entropy. The same seed,
    /// words, and options reproduce the same puzzle.
    pub seed: Option<u64>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions {
            height: None,
            width: None,
            orientations: ALL_ORIENTATIONS.to_vec(),
            fill_blanks: true,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            prefer_overlap: true,
            seed: None,
        }
    }
}

/// Generates a word-search grid containing every word in `words`.
///
/// # Errors
///
/// Returns [`PuzzleError::EmptyWordList`], [`PuzzleError::EmptyWord`],
/// [`PuzzleError::InvalidDimensions`], or [`PuzzleError::NoOrientations`]
/// for degenerate input, and [`PuzzleError::GrowthLimitExceeded`] if the grid
/// grows past its cap without fitting every word.
pub fn generate<S: AsRef<str>>(
    words: &[S],
    options: &GenerateOptions,
) -> Result<Grid, PuzzleError> {
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    generate_with_rng(words, options, &mut rng)
}

/// [`generate`] with an explicit random source, for callers that need
/// deterministic puzzles or share one generator across calls.
/// `options.seed` is ignored here.
pub fn generate_with_rng<S: AsRef<str>, R: Rng>(
    words: &[S],
    options: &GenerateOptions,
    rng: &mut R,
) -> Result<Grid, PuzzleError> {
    if words.is_empty() {
        return Err(PuzzleError::EmptyWordList);
    }
    if let Some(index) = words.iter().position(|w| w.as_ref().is_empty()) {
        return Err(PuzzleError::EmptyWord { index });
    }
    if options.orientations.is_empty() {
        return Err(PuzzleError::NoOrientations);
    }
    if options.height == Some(0) || options.width == Some(0) {
        return Err(PuzzleError::InvalidDimensions {
            height: options.height.unwrap_or(1),
            width: options.width.unwrap_or(1),
        });
    }

    // longest first; ties keep their input order
    let mut sorted: Vec<&str> = words.iter().map(AsRef::as_ref).collect();
    sorted.sort_by_key(|w| std::cmp::Reverse(w.chars().count()));

    let longest = sorted[0].chars().count();
    let mut height = options.height.unwrap_or(longest).max(longest);
    let mut width = options.width.unwrap_or(longest).max(longest);

    // a square with side longest + total letters always has room for every
    // word, so growth past that bound means something is wrong
    let growth_limit: usize = sorted.iter().map(|w| w.chars().count()).sum();
    let max_attempts = options.max_attempts.max(1);

    let mut growth = 0;
    loop {
        for attempt in 1..=max_attempts {
            match fill_puzzle(&sorted, height, width, options, rng)? {
                Some(mut grid) => {
                    debug!(
                        "placed {} words in a {height}x{width} grid on attempt {attempt}",
                        sorted.len()
                    );
                    if options.fill_blanks {
                        grid.fill_blanks(rng);
                    }
                    return Ok(grid);
                }
                None => {
                    debug!("attempt {attempt}/{max_attempts} failed at {height}x{width}");
                }
            }
        }

        growth += 1;
        if growth > growth_limit {
            return Err(PuzzleError::GrowthLimitExceeded { height, width });
        }
        height += 1;
        width += 1;
        debug!("growing grid to {height}x{width}");
    }
}

/// One attempt: a fresh blank grid with every word placed in order, or `None`
/// when some word has no admissible location.
fn fill_puzzle<R: Rng>(
    words: &[&str],
    height: usize,
    width: usize,
    options: &GenerateOptions,
    rng: &mut R,
) -> Result<Option<Grid>, PuzzleError> {
    let mut grid = Grid::new(height, width)?;
    for &word in words {
        if !place_word(&mut grid, word, options, rng) {
            return Ok(None);
        }
    }
    Ok(Some(grid))
}

/// Places one word at a uniformly random choice among its best locations.
fn place_word<R: Rng>(
    grid: &mut Grid,
    word: &str,
    options: &GenerateOptions,
    rng: &mut R,
) -> bool {
    let locations = search::find_locations(grid, word, &options.orientations, options.prefer_overlap);
    if locations.is_empty() {
        return false;
    }
    let chosen = locations[rng.gen_range(0..locations.len())];
    commit_word(grid, word, &chosen);
    true
}

/// Writes the word's letters into the grid along the chosen placement.
fn commit_word(grid: &mut Grid, word: &str, location: &Location) {
    for (i, letter) in word.chars().enumerate() {
        let (x, y) = location.orientation.step(location.x, location.y, i);
        grid.set(x, y, letter);
    }
}
