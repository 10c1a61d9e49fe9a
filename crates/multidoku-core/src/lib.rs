//! Variable-size Sudoku engine.
//!
//! Supports 9x9 and 16x16 boards (and 4x4), plus the 6x6 special case with
//! 2x3 sub-blocks. Generation and solving share one backtracking primitive:
//! the generator fills an empty board in shuffled candidate order and then
//! clears a difficulty-calibrated quota of cells, the solver completes a
//! partial board in ascending order so the result is reproducible.
//!
//! ```
//! use multidoku_core::{generate, solve, BoardSize, Difficulty};
//!
//! let size = BoardSize::new(9)?;
//! let puzzle = generate(Difficulty::Easy, size)?;
//! assert!((20..=27).contains(&puzzle.empty_count()));
//!
//! let solution = solve(&puzzle)?;
//! assert!(solution.is_complete());
//! # Ok::<(), multidoku_core::Error>(())
//! ```

mod backfill;
mod error;

pub mod board;
pub mod generator;
pub mod rules;
pub mod solver;

pub use board::{Board, BoardSize, Cell, Symbol};
pub use error::Error;
pub use generator::{generate, removal_quota, Difficulty, Generator};
pub use solver::{solve, Solver};
