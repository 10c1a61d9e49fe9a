//! Board data model: the grid, its cells, and the symbol alphabet.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A symbol placed on the board. Canonically a small integer in `1..=16`;
/// the glyph form ("1".."9", "10", "A".."F") is presentation only and all
/// comparisons operate on the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Symbol(u8);

impl Symbol {
    /// Largest supported symbol value (the glyph alphabet ends at "F").
    pub const MAX_VALUE: u8 = 16;

    /// Create a symbol from its canonical value.
    pub fn new(value: u8) -> Option<Self> {
        if (1..=Self::MAX_VALUE).contains(&value) {
            Some(Symbol(value))
        } else {
            None
        }
    }

    /// The canonical numeric value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// The display glyph for this symbol.
    pub fn glyph(self) -> &'static str {
        match self.0 {
            1 => "1",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "A",
            12 => "B",
            13 => "C",
            14 => "D",
            15 => "E",
            16 => "F",
            _ => unreachable!("symbol value out of range"),
        }
    }

    /// Parse a glyph back into a symbol. Letter glyphs are accepted in
    /// either case.
    pub fn from_glyph(glyph: &str) -> Option<Self> {
        let value = match glyph {
            "1" => 1,
            "2" => 2,
            "3" => 3,
            "4" => 4,
            "5" => 5,
            "6" => 6,
            "7" => 7,
            "8" => 8,
            "9" => 9,
            "10" => 10,
            "A" | "a" => 11,
            "B" | "b" => 12,
            "C" | "c" => 13,
            "D" | "d" => 14,
            "E" | "e" => 15,
            "F" | "f" => 16,
            _ => return None,
        };
        Some(Symbol(value))
    }
}

impl TryFrom<u8> for Symbol {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Error> {
        Symbol::new(value)
            .ok_or_else(|| Error::InvalidConfiguration(format!("symbol value {} out of range", value)))
    }
}

impl From<Symbol> for u8 {
    fn from(symbol: Symbol) -> u8 {
        symbol.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// A single board cell: empty, or holding a symbol. There is no numeric
/// sentinel; emptiness is its own variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Filled(Symbol),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::Filled(s) => Some(s),
        }
    }
}

/// Validated board dimension. Supported sizes are 6 (with 2x3 sub-blocks)
/// and the perfect squares 4, 9, and 16 (with sqrt(N) x sqrt(N) sub-blocks).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct BoardSize(usize);

impl BoardSize {
    /// Validate a board dimension.
    pub fn new(n: usize) -> Result<Self, Error> {
        let root = (n as f64).sqrt() as usize;
        if n == 6 || (n >= 4 && n <= Symbol::MAX_VALUE as usize && root * root == n) {
            Ok(BoardSize(n))
        } else {
            Err(Error::InvalidConfiguration(format!(
                "unsupported board size {}",
                n
            )))
        }
    }

    /// The dimension N.
    pub fn get(self) -> usize {
        self.0
    }

    /// Total number of cells (N^2).
    pub fn cell_count(self) -> usize {
        self.0 * self.0
    }

    /// Sub-block dimensions as (rows, columns): (2, 3) for the 6x6 special
    /// case, sqrt(N) x sqrt(N) otherwise.
    pub fn box_dims(self) -> (usize, usize) {
        if self.0 == 6 {
            (2, 3)
        } else {
            let root = (self.0 as f64).sqrt() as usize;
            (root, root)
        }
    }

    /// Top-left corner of the sub-block containing (row, col). Boxes are an
    /// equivalence class of cells, not stored anywhere.
    pub fn box_origin(self, row: usize, col: usize) -> (usize, usize) {
        let (box_rows, box_cols) = self.box_dims();
        (row - row % box_rows, col - col % box_cols)
    }

    /// The full alphabet for this size, in ascending canonical order.
    pub fn symbols(self) -> Vec<Symbol> {
        (1..=self.0 as u8).map(Symbol).collect()
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = Error;

    fn try_from(n: usize) -> Result<Self, Error> {
        BoardSize::new(n)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> usize {
        size.0
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

/// A square mutable grid of cells, row-major. Mutated in place by the
/// search (place/clear with undo); the invariant that every filled cell's
/// symbol belongs to the alphabet for this size is enforced by [`Board::place`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: BoardSize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an all-empty board.
    pub fn empty(size: BoardSize) -> Self {
        Board {
            size,
            cells: vec![Cell::Empty; size.cell_count()],
        }
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    fn check_bounds(&self, row: usize, column: usize) -> Result<(), Error> {
        let n = self.size.0;
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

    /// Read a cell.
    pub fn get(&self, row: usize, column: usize) -> Result<Cell, Error> {
        self.check_bounds(row, column)?;
        Ok(self.cell_unchecked(row, column))
    }

    /// Put a symbol in a cell. Rejects symbols outside this board's alphabet.
    pub fn place(&mut self, row: usize, column: usize, symbol: Symbol) -> Result<(), Error> {
        self.check_bounds(row, column)?;
        if symbol.value() as usize > self.size.0 {
            return Err(Error::InvalidConfiguration(format!(
                "symbol {} is not in the alphabet of a {} board",
                symbol, self.size
            )));
        }
        self.set_cell_unchecked(row, column, Cell::Filled(symbol));
        Ok(())
    }

    /// Reset a cell to empty.
    pub fn clear(&mut self, row: usize, column: usize) -> Result<(), Error> {
        self.check_bounds(row, column)?;
        self.set_cell_unchecked(row, column, Cell::Empty);
        Ok(())
    }

    pub(crate) fn cell_unchecked(&self, row: usize, column: usize) -> Cell {
        self.cells[row * self.size.0 + column]
    }

    pub(crate) fn set_cell_unchecked(&mut self, row: usize, column: usize, cell: Cell) {
        self.cells[row * self.size.0 + column] = cell;
    }

    /// First empty cell in row-major order, if any.
    pub fn first_empty(&self) -> Option<(usize, usize)> {
        let n = self.size.0;
        self.cells
            .iter()
            .position(|c| c.is_empty())
            .map(|i| (i / n, i % n))
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    pub fn filled_count(&self) -> usize {
        self.size.cell_count() - self.empty_count()
    }

    /// True when no cell is empty.
    pub fn is_complete(&self) -> bool {
        self.first_empty().is_none()
    }

    /// Parse a board from whitespace-separated glyph tokens. `.` and `0`
    /// both read as the empty cell, so grids written with the conventional
    /// zero sentinel load unchanged.
    pub fn parse(size: BoardSize, input: &str) -> Result<Self, Error> {
        let tokens: Vec<&str> = input.split_whitespace().collect();
        if tokens.len() != size.cell_count() {
            return Err(Error::InvalidConfiguration(format!(
                "expected {} cells for a {} board, got {}",
                size.cell_count(),
                size,
                tokens.len()
            )));
        }
        let mut board = Board::empty(size);
        let n = size.0;
        for (i, token) in tokens.iter().enumerate() {
            if *token == "." || *token == "0" {
                continue;
            }
            let symbol = Symbol::from_glyph(token).ok_or_else(|| {
                Error::InvalidConfiguration(format!("unknown symbol token {:?}", token))
            })?;
            board.place(i / n, i % n, symbol)?;
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size.0;
        let wide = n > 9;
        for row in 0..n {
            for col in 0..n {
                if col > 0 {
                    f.write_str(" ")?;
                }
                let token = match self.cell_unchecked(row, col) {
                    Cell::Empty => ".",
                    Cell::Filled(s) => s.glyph(),
                };
                if wide {
                    write!(f, "{:>2}", token)?;
                } else {
                    f.write_str(token)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_mapping_bidirectional() {
        for value in 1..=16 {
            let symbol = Symbol::new(value).unwrap();
            assert_eq!(Symbol::from_glyph(symbol.glyph()), Some(symbol));
        }
        assert_eq!(Symbol::new(10).unwrap().glyph(), "10");
        assert_eq!(Symbol::from_glyph("A"), Symbol::new(11));
        assert_eq!(Symbol::from_glyph("f"), Symbol::new(16));
        assert_eq!(Symbol::from_glyph("G"), None);
        assert_eq!(Symbol::new(0), None);
        assert_eq!(Symbol::new(17), None);
    }

    #[test]
    fn test_board_size_validation() {
        for n in [4, 6, 9, 16] {
            assert!(BoardSize::new(n).is_ok(), "size {} should be valid", n);
        }
        for n in [0, 1, 2, 3, 5, 7, 8, 10, 12, 15, 25] {
            assert!(BoardSize::new(n).is_err(), "size {} should be rejected", n);
        }
    }

    #[test]
    fn test_box_geometry_6x6() {
        let size = BoardSize::new(6).unwrap();
        assert_eq!(size.box_dims(), (2, 3));
        // (1, 5) lives in the box covering rows 0-1, cols 3-5
        assert_eq!(size.box_origin(1, 5), (0, 3));
        // (2, 0) lives in the box covering rows 2-3, cols 0-2
        assert_eq!(size.box_origin(2, 0), (2, 0));
    }

    #[test]
    fn test_box_geometry_square_sizes() {
        let nine = BoardSize::new(9).unwrap();
        assert_eq!(nine.box_dims(), (3, 3));
        assert_eq!(nine.box_origin(4, 7), (3, 6));
        let sixteen = BoardSize::new(16).unwrap();
        assert_eq!(sixteen.box_dims(), (4, 4));
        assert_eq!(sixteen.box_origin(15, 2), (12, 0));
    }

    #[test]
    fn test_place_get_clear() {
        let size = BoardSize::new(9).unwrap();
        let mut board = Board::empty(size);
        let five = Symbol::new(5).unwrap();

        board.place(3, 4, five).unwrap();
        assert_eq!(board.get(3, 4).unwrap(), Cell::Filled(five));
        assert_eq!(board.filled_count(), 1);

        board.clear(3, 4).unwrap();
        assert_eq!(board.get(3, 4).unwrap(), Cell::Empty);
        assert_eq!(board.empty_count(), 81);
    }

    #[test]
    fn test_out_of_range_access() {
        let size = BoardSize::new(6).unwrap();
        let mut board = Board::empty(size);
        assert_eq!(
            board.get(6, 0),
            Err(Error::OutOfRangeCell {
                row: 6,
                column: 0,
                size: 6
            })
        );
        assert!(board.clear(0, 99).is_err());
    }

    #[test]
    fn test_symbol_outside_alphabet_rejected() {
        let size = BoardSize::new(6).unwrap();
        let mut board = Board::empty(size);
        let seven = Symbol::new(7).unwrap();
        assert!(matches!(
            board.place(0, 0, seven),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_first_empty_row_major() {
        let size = BoardSize::new(4).unwrap();
        let mut board = Board::empty(size);
        assert_eq!(board.first_empty(), Some((0, 0)));
        for col in 0..4 {
            board.place(0, col, Symbol::new(col as u8 + 1).unwrap()).unwrap();
        }
        board.place(1, 0, Symbol::new(3).unwrap()).unwrap();
        assert_eq!(board.first_empty(), Some((1, 1)));
    }

    #[test]
    fn test_parse_display_round_trip() {
        let size = BoardSize::new(6).unwrap();
        let board = Board::parse(
            size,
            "1 2 3 4 5 6\n\
             . . . . . .\n\
             2 . 4 . 6 .\n\
             . . . . . .\n\
             . 1 . 3 . 5\n\
             . . . . . .",
        )
        .unwrap();
        assert_eq!(board.filled_count(), 12);
        let reparsed = Board::parse(size, &board.to_string()).unwrap();
        assert_eq!(reparsed, board);
    }

    #[test]
    fn test_parse_accepts_zero_sentinel() {
        let size = BoardSize::new(4).unwrap();
        let board = Board::parse(size, "0 0 1 2 0 0 3 4 0 0 0 0 0 0 0 0").unwrap();
        assert_eq!(board.empty_count(), 12);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        let size = BoardSize::new(4).unwrap();
        assert!(Board::parse(size, "1 2 3").is_err());
        let tokens = "x ".repeat(16);
        assert!(Board::parse(size, &tokens).is_err());
        // symbol legal globally but outside the 4x4 alphabet
        let tokens = "9 ".repeat(16);
        assert!(Board::parse(size, &tokens).is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let size = BoardSize::new(9).unwrap();
        let mut board = Board::empty(size);
        board.place(0, 0, Symbol::new(5).unwrap()).unwrap();
        board.place(8, 8, Symbol::new(9).unwrap()).unwrap();

        let json = serde_json::to_string(&board).unwrap();
        let restored: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, board);
    }

    #[test]
    fn test_serde_rejects_invalid_values() {
        assert!(serde_json::from_str::<Symbol>("0").is_err());
        assert!(serde_json::from_str::<Symbol>("17").is_err());
        assert!(serde_json::from_str::<BoardSize>("7").is_err());
    }
}
