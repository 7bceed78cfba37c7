use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand};

use wordfind::generator::{self, GenerateOptions, DEFAULT_MAX_ATTEMPTS};
use wordfind::grid::Grid;
use wordfind::orientation::Orientation;
use wordfind::solver;
use wordfind::word_list::WordList;

/// Word-search puzzle generator and solver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a puzzle from a word list
    Generate {
        /// Path to the word list file (one word per line, '#' comments)
        words: String,

        /// Grid height (default: longest word's length)
        #[arg(long)]
        height: Option<usize>,

        /// Grid width (default: longest word's length)
        #[arg(long)]
        width: Option<usize>,

        /// Orientations to allow, comma-separated (default: all eight)
        #[arg(short, long, value_delimiter = ',')]
        orientations: Vec<Orientation>,

        /// Leave unused cells blank instead of filling them with random letters
        #[arg(long)]
        no_fill: bool,

        /// Admit any feasible placement instead of preferring letter overlap
        #[arg(long)]
        no_overlap: bool,

        /// Placement attempts per grid size before growing the grid
        #[arg(short = 'a', long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
        max_attempts: usize,

        /// Seed to regenerate a specific puzzle
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Locate each word of a list inside an existing puzzle
    Solve {
        /// Path to the puzzle file, as produced by `generate`
        puzzle: String,

        /// Path to the word list file
        words: String,
    },
}

/// Entry point of the wordfind CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them in a
/// user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    // Set up logging
    let debug_enabled = std::env::var("WORDFIND_DEBUG").is_ok();
    wordfind::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        // Print the error message to stderr, with detailed formatting if it's a PuzzleError
        if let Some(puzzle_err) = e.downcast_ref::<wordfind::errors::PuzzleError>() {
            eprintln!("Error: {}", puzzle_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        // Exit explicitly with a nonzero code so scripts can detect failure
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate {
            words,
            height,
            width,
            orientations,
            no_fill,
            no_overlap,
            max_attempts,
            seed,
        } => {
            let word_list = WordList::load_from_path(&words)?;
            log::info!("loaded {} words from {words}", word_list.words.len());

            let mut options = GenerateOptions {
                height,
                width,
                fill_blanks: !no_fill,
                max_attempts,
                prefer_overlap: !no_overlap,
                seed,
                ..GenerateOptions::default()
            };
            if !orientations.is_empty() {
                options.orientations = orientations;
            }

            let t_generate = Instant::now();
            let grid = generator::generate(&word_list.words, &options)?;
            let generate_secs = t_generate.elapsed().as_secs_f64();

            print!("{grid}");
            eprintln!(
                "Generated a {}x{} puzzle with {} words in {:.3}s.",
                grid.height(),
                grid.width(),
                word_list.words.len(),
                generate_secs
            );
        }

        Command::Solve { puzzle, words } => {
            let grid = Grid::parse(&std::fs::read_to_string(&puzzle)?)?;
            let word_list = WordList::load_from_path(&words)?;

            let t_solve = Instant::now();
            let result = solver::solve(&grid, &word_list.words);
            let solve_secs = t_solve.elapsed().as_secs_f64();

            for found in &result.found {
                println!(
                    "{} at ({}, {}) {}",
                    found.word, found.x, found.y, found.orientation
                );
            }
            for word in &result.not_found {
                println!("{word} not found");
            }

            eprintln!(
                "Found {}/{} words in {:.3}s.",
                result.found.len(),
                word_list.words.len(),
                solve_secs
            );
        }
    }

    Ok(())
}
