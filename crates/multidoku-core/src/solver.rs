//! Deterministic completion of a partially filled board.

use crate::backfill::{self, CandidateOrder};
use crate::board::Board;
use crate::rules;
use crate::Error;

/// Unit struct solver — stateless, all state is per-call.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Complete `board` with the shared backtracking search in ascending
    /// candidate order: the same partial board always yields the same
    /// completion. The input is never mutated; the solved board is returned
    /// as a new value.
    ///
    /// Contradictory givens (a symbol duplicated in its row, column, or
    /// sub-block) and exhausted searches both surface as
    /// [`Error::UnsolvableBoard`]. An already-complete valid board returns
    /// an equal board.
    pub fn solve(&self, board: &Board) -> Result<Board, Error> {
        let mut working = board.clone();
        if rules::has_conflicts(&working) {
            return Err(Error::UnsolvableBoard);
        }
        if backfill::fill(&mut working, &mut CandidateOrder::Sequential) {
            Ok(working)
        } else {
            Err(Error::UnsolvableBoard)
        }
    }
}

/// Solve with a throwaway [`Solver`].
pub fn solve(board: &Board) -> Result<Board, Error> {
    Solver::new().solve(board)
}
