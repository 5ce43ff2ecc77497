//! Error types for board construction, dictionary loading and path checks.
//!
//! Search itself never fails: a missing trie child, a visited cell or a
//! too-short match are ordinary control flow inside the solver.

/// Failure while building a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board must have at least one row and one column")]
    EmptyGrid,
    #[error("row {row} has {actual} tiles, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("invalid tile {text:?} at row {row}, column {col}")]
    InvalidTile { row: usize, col: usize, text: String },
    #[error("expected {expected} tiles for the declared dimensions, found {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("malformed board: {0}")]
    Parse(String),
}

/// A word that cannot be stored in a [`WordTrie`](crate::trie::WordTrie).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("invalid word {0:?}: only letters A-Z are allowed")]
    InvalidWord(String),
}

/// A cell sequence that does not form a simple adjacent path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("path is empty")]
    Empty,
    #[error("cell {0} is outside the board")]
    OutOfBounds(usize),
    #[error("cells {from} and {to} are not adjacent")]
    NotAdjacent { from: usize, to: usize },
    #[error("cell {0} is used more than once")]
    RepeatedCell(usize),
}

/// Crate-level error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
