//! Row, column, and sub-block constraint checks over a [`Board`].
//!
//! All queries here are pure reads of the current board state; calling one
//! twice without a mutation in between returns the same answer.

use crate::board::{Board, Cell, Symbol};
use crate::Error;

/// True if `symbol` already appears anywhere in `row`.
pub fn row_conflict(board: &Board, symbol: Symbol, row: usize) -> Result<bool, Error> {
    bounds(board, row, 0)?;
    Ok(in_row(board, symbol, row))
}

/// True if `symbol` already appears anywhere in `column`.
pub fn column_conflict(board: &Board, symbol: Symbol, column: usize) -> Result<bool, Error> {
    bounds(board, 0, column)?;
    Ok(in_column(board, symbol, column))
}

/// True if `symbol` already appears in the sub-block containing (row, column).
pub fn box_conflict(board: &Board, symbol: Symbol, row: usize, column: usize) -> Result<bool, Error> {
    bounds(board, row, column)?;
    Ok(in_box(board, symbol, row, column))
}

/// True iff placing `symbol` at (row, column) violates no Sudoku rule.
pub fn is_valid(board: &Board, symbol: Symbol, row: usize, column: usize) -> Result<bool, Error> {
    bounds(board, row, column)?;
    Ok(placement_fits(board, symbol, row, column))
}

/// True if any filled cell is duplicated within its row, column, or
/// sub-block. Used to reject contradictory givens before a search starts.
pub fn has_conflicts(board: &Board) -> bool {
    let n = board.size().get();
    for row in 0..n {
        if unit_has_duplicate(board, (0..n).map(|col| (row, col))) {
            return true;
        }
    }
    for col in 0..n {
        if unit_has_duplicate(board, (0..n).map(|row| (row, col))) {
            return true;
        }
    }
    let (box_rows, box_cols) = board.size().box_dims();
    for r0 in (0..n).step_by(box_rows) {
        for c0 in (0..n).step_by(box_cols) {
            let cells = (r0..r0 + box_rows)
                .flat_map(|r| (c0..c0 + box_cols).map(move |c| (r, c)));
            if unit_has_duplicate(board, cells) {
                return true;
            }
        }
    }
    false
}

fn unit_has_duplicate(board: &Board, cells: impl Iterator<Item = (usize, usize)>) -> bool {
    let mut seen = 0u32;
    for (row, col) in cells {
        if let Cell::Filled(symbol) = board.cell_unchecked(row, col) {
            let bit = 1u32 << symbol.value();
            if seen & bit != 0 {
                return true;
            }
            seen |= bit;
        }
    }
    false
}

fn bounds(board: &Board, row: usize, column: usize) -> Result<(), Error> {
    let n = board.size().get();
    if row < n && column < n {
        Ok(())
    } else {
        Err(Error::OutOfRangeCell {
            row,
            column,
            size: n,
        })
    }
}

// Unchecked fast path for the search, whose indices come from the board's
// own row-major scan.
pub(crate) fn placement_fits(board: &Board, symbol: Symbol, row: usize, column: usize) -> bool {
    !in_row(board, symbol, row)
        && !in_column(board, symbol, column)
        && !in_box(board, symbol, row, column)
}

fn in_row(board: &Board, symbol: Symbol, row: usize) -> bool {
    let n = board.size().get();
    (0..n).any(|col| board.cell_unchecked(row, col) == Cell::Filled(symbol))
}

fn in_column(board: &Board, symbol: Symbol, column: usize) -> bool {
    let n = board.size().get();
    (0..n).any(|row| board.cell_unchecked(row, column) == Cell::Filled(symbol))
}

fn in_box(board: &Board, symbol: Symbol, row: usize, column: usize) -> bool {
    let (box_rows, box_cols) = board.size().box_dims();
    let (r0, c0) = board.size().box_origin(row, column);
    (r0..r0 + box_rows).any(|r| {
        (c0..c0 + box_cols).any(|c| board.cell_unchecked(r, c) == Cell::Filled(symbol))
    })
}
