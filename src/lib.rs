// Reusable library API — shared by the CLI and embedding callers
pub mod errors;
pub mod generator;
pub mod grid;
pub mod log;
pub mod orientation;
pub mod search;
pub mod solver;
pub mod word_list;
