//! Integration tests for the wordfind puzzle generator and solver.
//!
//! These tests verify the complete pipeline from word list through grid
//! generation to solving the finished puzzle back into placements.

use wordfind::errors::PuzzleError;
use wordfind::generator::{self, GenerateOptions};
use wordfind::grid::Grid;
use wordfind::orientation::{Orientation, ALL_ORIENTATIONS};
use wordfind::search;
use wordfind::solver;
use wordfind::word_list::WordList;

fn seeded(seed: u64) -> GenerateOptions {
    GenerateOptions {
        seed: Some(seed),
        ..GenerateOptions::default()
    }
}

mod round_trip {
    use super::*;

    #[test]
    fn test_generated_puzzle_solves_completely() {
        let words = [
            "alligator", "beaver", "camel", "donkey", "ermine", "ferret", "gerbil", "heron",
            "ibex", "jackal",
        ];
        for seed in 0..5 {
            let grid = generator::generate(&words, &seeded(seed)).unwrap();
            let result = solver::solve(&grid, &words);
            assert!(
                result.not_found.is_empty(),
                "seed {seed}: words not rediscovered: {:?}",
                result.not_found
            );
            assert_eq!(result.found.len(), words.len());
        }
    }

    #[test]
    fn test_found_placements_read_back_exactly() {
        let words = ["stream", "forest", "meadow"];
        let grid = generator::generate(&words, &seeded(21)).unwrap();
        let result = solver::solve(&grid, &words);

        for found in &result.found {
            for (i, letter) in found.word.chars().enumerate() {
                let (x, y) = found.orientation.step(found.x, found.y, i);
                assert_eq!(
                    grid.get(x, y),
                    Some(letter),
                    "{} letter {i} does not match the grid at ({x}, {y})",
                    found.word
                );
            }
        }
    }

    #[test]
    fn test_render_parse_solve_pipeline() {
        // the CLI path: render to text, parse back, then solve
        let words = ["paper", "ink", "quill"];
        let grid = generator::generate(&words, &seeded(13)).unwrap();

        let reparsed = Grid::parse(&grid.render()).unwrap();
        assert_eq!(reparsed, grid);

        let result = solver::solve(&reparsed, &words);
        assert!(result.not_found.is_empty());
    }

    #[test]
    fn test_word_list_to_puzzle() {
        let list = WordList::parse_from_str("Winter\nspring\n# seasons\nSUMMER\nautumn\nspring\n");
        assert_eq!(list.words, vec!["winter", "spring", "summer", "autumn"]);

        let grid = generator::generate(&list.words, &seeded(17)).unwrap();
        let result = solver::solve(&grid, &list.words);
        assert!(result.not_found.is_empty());
    }
}

mod scenarios {
    use super::*;

    #[test]
    fn test_cat_and_car_interlock_on_a_3x3_grid() {
        let options = GenerateOptions {
            height: Some(3),
            width: Some(3),
            fill_blanks: false,
            ..seeded(42)
        };
        let grid = generator::generate(&["cat", "car"], &options).unwrap();

        // with overlap preference the two words must share at least one
        // letter: six letters in fewer than six cells
        let letters: usize = (0..grid.height())
            .flat_map(|y| (0..grid.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| grid.get(x, y).is_some())
            .count();
        assert!(letters < 6, "no overlap in grid:\n{grid}");

        let result = solver::solve(&grid, &["cat", "car"]);
        assert_eq!(result.found.len(), 2);
        assert!(result.not_found.is_empty());
    }

    #[test]
    fn test_undersized_request_grows_to_hold_the_word() {
        let options = GenerateOptions {
            height: Some(1),
            width: Some(1),
            ..seeded(1)
        };
        let grid = generator::generate(&["ab"], &options).unwrap();

        // 1x1 can never hold a two-letter word; the assembler must end up
        // with a grid at least two cells long in some direction
        assert!(grid.height().max(grid.width()) >= 2);
        assert!(solver::solve(&grid, &["ab"]).not_found.is_empty());
    }

    #[test]
    fn test_render_of_partially_filled_grid() {
        let grid = Grid::from_rows(&[
            vec![Some('a'), Some('b')],
            vec![None, Some('d')],
        ])
        .unwrap();
        assert_eq!(grid.render(), "a b \n  d \n");
        // rendering is a pure read: applying it twice yields identical text
        assert_eq!(grid.render(), grid.render());
    }

    #[test]
    fn test_solving_against_unfilled_grid() {
        // blanks stay blank with fill_blanks off, and the solver still finds
        // every word through the empty cells
        let words = ["north", "south", "east", "west"];
        let options = GenerateOptions {
            fill_blanks: false,
            ..seeded(33)
        };
        let grid = generator::generate(&words, &options).unwrap();
        let blanks = (0..grid.height())
            .flat_map(|y| (0..grid.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| grid.get(x, y).is_none())
            .count();
        assert!(blanks > 0, "expected unfilled cells in:\n{grid}");

        let result = solver::solve(&grid, &words);
        assert!(result.not_found.is_empty());
    }

    #[test]
    fn test_filler_letters_do_not_hide_placed_words() {
        // filler letters may create incidental words, but every placed word
        // must still be found with its exact letters
        let words = ["zebra", "quartz", "jigsaw"];
        let grid = generator::generate(&words, &seeded(55)).unwrap();

        let result = solver::solve(&grid, &words);
        assert!(result.not_found.is_empty());
        assert!(solver::solve(&grid, &["xyzzy"]).found.is_empty());
    }
}

mod determinism {
    use super::*;

    #[test]
    fn test_identical_seeds_give_identical_puzzles() {
        let words = ["monday", "tuesday", "friday"];
        let a = generator::generate(&words, &seeded(123)).unwrap();
        let b = generator::generate(&words, &seeded(123)).unwrap();
        assert_eq!(a.render(), b.render());
    }

    #[test]
    fn test_solver_is_deterministic() {
        let words = ["violin", "cello", "oboe"];
        let grid = generator::generate(&words, &seeded(7)).unwrap();

        let first = solver::solve(&grid, &words);
        let second = solver::solve(&grid, &words);
        assert_eq!(first.found, second.found);
        assert_eq!(first.not_found, second.not_found);
    }
}

mod degenerate_input {
    use super::*;

    #[test]
    fn test_empty_word_list() {
        let words: [&str; 0] = [];
        let err = generator::generate(&words, &GenerateOptions::default()).unwrap_err();
        assert!(matches!(err, PuzzleError::EmptyWordList));
        assert_eq!(err.code(), "W001");
    }

    #[test]
    fn test_empty_word_reports_its_index() {
        let err = generator::generate(&["fine", "", "also fine"], &GenerateOptions::default())
            .unwrap_err();
        assert!(matches!(err, PuzzleError::EmptyWord { index: 1 }));
    }

    #[test]
    fn test_errors_format_with_code_and_help() {
        let err = generator::generate(&[] as &[&str], &GenerateOptions::default()).unwrap_err();
        let detailed = err.display_detailed();
        assert!(detailed.contains("W001"));
        assert!(detailed.contains("word list is empty"));
    }
}

mod search_properties {
    use super::*;

    #[test]
    fn test_max_overlap_is_tracked_across_orientations() {
        // "ca" vertically gives "cat" a 2-overlap vertical candidate; the
        // horizontal 1-overlap candidate through 'c' must be pruned away
        let grid = Grid::from_rows(&[
            vec![Some('c'), None, None],
            vec![Some('a'), None, None],
            vec![None, None, None],
        ])
        .unwrap();

        let locations = search::find_locations(&grid, "cat", &ALL_ORIENTATIONS, true);
        assert!(!locations.is_empty());
        assert!(locations.iter().all(|l| l.overlap == 2));
        assert!(locations
            .iter()
            .all(|l| (l.x, l.y, l.orientation) == (0, 0, Orientation::Vertical)));
    }

    #[test]
    fn test_without_preference_low_overlap_candidates_survive() {
        let grid = Grid::from_rows(&[
            vec![Some('c'), None, None],
            vec![Some('a'), None, None],
            vec![None, None, None],
        ])
        .unwrap();

        let locations = search::find_locations(&grid, "cat", &ALL_ORIENTATIONS, false);
        assert!(locations.iter().any(|l| l.overlap == 0));
        assert!(locations.iter().any(|l| l.overlap == 2));
    }
}
