//! Error types for puzzle generation and grid parsing, with error codes and
//! helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (W001-W009) for documentation lookup:
//!
//! - W001: `EmptyWordList` (No words were supplied)
//! - W002: `EmptyWord` (A supplied word has zero length)
//! - W003: `InvalidDimensions` (A requested grid dimension is zero)
//! - W004: `NoOrientations` (The allowed-orientation list is empty)
//! - W005: `GrowthLimitExceeded` (Grid growth was capped before every word fit)
//! - W006: `UnknownOrientation` (Orientation name not recognized)
//! - W007: `RaggedRows` (Grid rows have unequal lengths)
//! - W008: `InvalidCell` (Grid cell token is not a single character)
//! - W009: `EmptyGrid` (Grid text contains no rows)
//!
//! # Examples
//!
//! ```
//! use wordfind::errors::PuzzleError;
//!
//! fn check_words(words: &[&str]) -> Result<(), PuzzleError> {
//!     if words.is_empty() {
//!         return Err(PuzzleError::EmptyWordList);
//!     }
//!     Ok(())
//! }
//!
//! match check_words(&[]) {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//!     Ok(_) => println!("Success"),
//! }
//! ```

use std::io;

/// Custom error type for puzzle operations
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("word list is empty")]
    EmptyWordList,

    #[error("word at index {index} is empty")]
    EmptyWord { index: usize },

    #[error("invalid grid dimensions: {height}x{width}")]
    InvalidDimensions { height: usize, width: usize },

    #[error("no orientations allowed")]
    NoOrientations,

    #[error("grid grew to {height}x{width} without fitting every word")]
    GrowthLimitExceeded { height: usize, width: usize },

    #[error("unknown orientation \"{name}\"")]
    UnknownOrientation { name: String },

    #[error("grid rows have unequal lengths (expected {expected}, found {found})")]
    RaggedRows { expected: usize, found: usize },

    #[error("invalid grid cell \"{token}\"")]
    InvalidCell { token: String },

    #[error("grid has no rows")]
    EmptyGrid,
}

impl From<PuzzleError> for io::Error {
    fn from(pe: PuzzleError) -> Self {
        // String version is the least fragile (no Send/Sync bounds issues)
        io::Error::new(io::ErrorKind::InvalidInput, pe.to_string())
    }
}

impl PuzzleError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            PuzzleError::EmptyWordList => "W001",
            PuzzleError::EmptyWord { .. } => "W002",
            PuzzleError::InvalidDimensions { .. } => "W003",
            PuzzleError::NoOrientations => "W004",
            PuzzleError::GrowthLimitExceeded { .. } => "W005",
            PuzzleError::UnknownOrientation { .. } => "W006",
            PuzzleError::RaggedRows { .. } => "W007",
            PuzzleError::InvalidCell { .. } => "W008",
            PuzzleError::EmptyGrid => "W009",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            PuzzleError::EmptyWordList => Some("Provide at least one word to place in the puzzle"),
            PuzzleError::EmptyWord { .. } => Some("Every word must contain at least one letter"),
            PuzzleError::InvalidDimensions { .. } => Some("Both height and width must be at least 1"),
            PuzzleError::NoOrientations => Some("Allow at least one orientation (e.g., 'horizontal')"),
            PuzzleError::GrowthLimitExceeded { .. } => Some("The word list cannot be packed; check for unreasonable words or raise the attempt budget"),
            PuzzleError::UnknownOrientation { .. } => Some("Valid names: horizontal, horizontalBack, vertical, verticalUp, diagonal, diagonalBack, diagonalUp, diagonalUpBack"),
            PuzzleError::RaggedRows { .. } => Some("Every row of the grid text must have the same number of cells"),
            PuzzleError::InvalidCell { .. } => Some("Each cell must be exactly one character, cells separated by spaces"),
            PuzzleError::EmptyGrid => Some("The grid text must contain at least one non-empty row"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
