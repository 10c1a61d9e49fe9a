use std::fmt;

/// Engine error. All variants are recoverable conditions reported to the
/// caller of the generation/solving entry point; none leaves a half-mutated
/// board visible to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Unknown difficulty label, unsupported board size, or an unsupported
    /// (difficulty, size) pair. Rejected before any search begins.
    InvalidConfiguration(String),
    /// The search exhausted every candidate at the root without completing
    /// the board.
    UnsolvableBoard,
    /// A (row, column) access fell outside `[0, size)`.
    OutOfRangeCell {
        row: usize,
        column: usize,
        size: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfiguration(msg) => write!(f, "invalid configuration: {}", msg),
            Error::UnsolvableBoard => write!(f, "board has no valid completion"),
            Error::OutOfRangeCell { row, column, size } => write!(
                f,
                "cell ({}, {}) is out of range for a {}x{} board",
                row, column, size, size
            ),
        }
    }
}

impl std::error::Error for Error {}
