//! Recursive backtracking fill.
//!
//! One routine serves both entry points: the generator runs it with shuffled
//! candidate order to get varied boards, the solver with ascending order for
//! a reproducible completion. Dead ends are plain control flow (`false`),
//! never errors.

use crate::board::{Board, Cell};
use crate::rules;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Candidate trial order for one search invocation.
pub(crate) enum CandidateOrder<'a> {
    /// Ascending alphabet order: deterministic, used by the solver.
    Sequential,
    /// Uniform shuffle per cell: used by the generator.
    Shuffled(&'a mut StdRng),
}

/// Fill every empty cell of `board` with a valid symbol, depth-first over
/// the first empty cell in row-major order. Returns false if no valid
/// completion exists from the current partial state; the board is then
/// unchanged (every trial placement has been undone).
pub(crate) fn fill(board: &mut Board, order: &mut CandidateOrder<'_>) -> bool {
    let (row, col) = match board.first_empty() {
        Some(cell) => cell,
        None => return true,
    };

    let mut candidates = board.size().symbols();
    if let CandidateOrder::Shuffled(rng) = order {
        candidates.shuffle(&mut **rng);
    }

    for symbol in candidates {
        if rules::placement_fits(board, symbol, row, col) {
            board.set_cell_unchecked(row, col, Cell::Filled(symbol));
            if fill(board, order) {
                return true;
            }
            board.set_cell_unchecked(row, col, Cell::Empty);
        }
    }
    false
}
