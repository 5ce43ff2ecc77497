//! Board representation: letter tiles laid out on a rectangular grid.
//!
//! Boards are immutable once built. Cells are addressed either by
//! `(row, col)` or by their row-major linear index `row * cols + col`,
//! which is what the adjacency index and the solver use.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};

const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A single letter tile. The `Q` tile always spells "QU".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tile(u8);

impl Tile {
    /// The digraph tile, shown as "Qu"
    pub const QU: Tile = Tile(b'Q');

    /// Create a tile from a letter (case-insensitive)
    pub fn new(letter: char) -> Option<Self> {
        let letter = letter.to_ascii_uppercase();
        if letter.is_ascii_uppercase() {
            Some(Tile(letter as u8))
        } else {
            None
        }
    }

    /// Parse a board token: a single letter, or "QU" for the digraph tile
    pub fn parse(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("qu") {
            return Some(Self::QU);
        }
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c),
            _ => None,
        }
    }

    /// The letter printed on the tile
    pub fn letter(self) -> char {
        self.0 as char
    }

    /// Alphabet index (A = 0 .. Z = 25)
    pub fn index(self) -> usize {
        (self.0 - b'A') as usize
    }

    pub fn is_qu(self) -> bool {
        self == Self::QU
    }

    /// The characters this tile contributes to a word
    pub fn spelled(self) -> &'static str {
        if self.is_qu() {
            "QU"
        } else {
            let i = self.index();
            &LETTERS[i..i + 1]
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_qu() {
            f.pad("Qu")
        } else {
            f.pad(self.spelled())
        }
    }
}

impl TryFrom<String> for Tile {
    type Error = String;

    fn try_from(token: String) -> std::result::Result<Self, Self::Error> {
        Tile::parse(&token).ok_or_else(|| format!("invalid tile {:?}", token))
    }
}

impl From<Tile> for String {
    fn from(tile: Tile) -> Self {
        tile.spelled().to_string()
    }
}

/// JSON shape of a board: `{"grid": [["A", "T"], ["QU", "O"]]}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    pub grid: Vec<Vec<String>>,
}

/// An immutable rows x cols grid of tiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardConfig", into = "BoardConfig")]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Row-major tiles
    tiles: Vec<Tile>,
}

impl Board {
    /// Build a board from rows of tiles.
    ///
    /// Fails on an empty grid or when the rows differ in length.
    pub fn new(grid: Vec<Vec<Tile>>) -> Result<Self, BoardError> {
        let cols = Self::check_shape(&grid)?;
        let rows = grid.len();
        let tiles = grid.into_iter().flatten().collect();
        Ok(Self { rows, cols, tiles })
    }

    /// Build a board from rows of characters, where 'Q' stands for "Qu"
    pub fn from_chars(grid: &[Vec<char>]) -> Result<Self, BoardError> {
        Self::check_shape(grid)?;
        let mut tiles = Vec::with_capacity(grid.len());
        for (row, line) in grid.iter().enumerate() {
            let mut parsed = Vec::with_capacity(line.len());
            for (col, &c) in line.iter().enumerate() {
                let tile = Tile::new(c).ok_or_else(|| BoardError::InvalidTile {
                    row,
                    col,
                    text: c.to_string(),
                })?;
                parsed.push(tile);
            }
            tiles.push(parsed);
        }
        Self::new(tiles)
    }

    /// Build a board from one string per row, one character per tile
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardError> {
        let grid: Vec<Vec<char>> = rows.iter().map(|r| r.chars().collect()).collect();
        Self::from_chars(&grid)
    }

    /// Build a board from per-cell tokens ("A", "qu", ...)
    pub fn from_tokens<S: AsRef<str>>(grid: &[Vec<S>]) -> Result<Self, BoardError> {
        Self::check_shape(grid)?;
        let mut tiles = Vec::with_capacity(grid.len());
        for (row, line) in grid.iter().enumerate() {
            let mut parsed = Vec::with_capacity(line.len());
            for (col, token) in line.iter().enumerate() {
                let token = token.as_ref();
                let tile = Tile::parse(token).ok_or_else(|| BoardError::InvalidTile {
                    row,
                    col,
                    text: token.to_string(),
                })?;
                parsed.push(tile);
            }
            tiles.push(parsed);
        }
        Self::new(tiles)
    }

    /// Parse the plain-text board format:
    ///
    /// ```text
    /// 4 4
    /// A  T  E  S
    /// Qu I  R  O
    /// ...
    /// ```
    ///
    /// The first two tokens are the row and column counts, followed by
    /// exactly `rows * cols` whitespace-separated tiles.
    pub fn parse(text: &str) -> Result<Self, BoardError> {
        let mut tokens = text.split_whitespace();
        let rows = Self::parse_dimension(tokens.next(), "rows")?;
        let cols = Self::parse_dimension(tokens.next(), "columns")?;
        if rows == 0 || cols == 0 {
            return Err(BoardError::EmptyGrid);
        }

        let expected = rows
            .checked_mul(cols)
            .ok_or_else(|| BoardError::Parse(format!("board size {}x{} is too large", rows, cols)))?;

        let cells: Vec<&str> = tokens.collect();
        if cells.len() != expected {
            return Err(BoardError::DimensionMismatch {
                expected,
                actual: cells.len(),
            });
        }

        let grid: Vec<Vec<&str>> = cells.chunks(cols).map(|c| c.to_vec()).collect();
        Self::from_tokens(&grid)
    }

    /// Load a board from disk. `.json` files use [`BoardConfig`], anything
    /// else the plain-text format.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_str_with_format(&content, is_json_path(path))
    }

    /// Parse board text that is either JSON or the plain-text format
    pub fn from_str_with_format(content: &str, json: bool) -> Result<Self> {
        if json {
            Ok(serde_json::from_str(content)?)
        } else {
            Ok(Self::parse(content)?)
        }
    }

    fn parse_dimension(token: Option<&str>, what: &str) -> Result<usize, BoardError> {
        let token = token.ok_or_else(|| BoardError::Parse(format!("missing {}", what)))?;
        token
            .parse()
            .map_err(|_| BoardError::Parse(format!("invalid {} count {:?}", what, token)))
    }

    /// Validate a grid and return its column count
    fn check_shape<T>(grid: &[Vec<T>]) -> Result<usize, BoardError> {
        let cols = grid.first().map_or(0, |row| row.len());
        if cols == 0 {
            return Err(BoardError::EmptyGrid);
        }
        for (row, line) in grid.iter().enumerate() {
            if line.len() != cols {
                return Err(BoardError::RaggedGrid {
                    row,
                    expected: cols,
                    actual: line.len(),
                });
            }
        }
        Ok(cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false; empty boards are rejected at construction
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Get the tile at a position (bounds-checked)
    pub fn tile(&self, row: usize, col: usize) -> Option<Tile> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.tiles.get(self.index(row, col)).copied()
    }

    /// Get the tile at a linear cell index
    pub fn tile_at(&self, cell: usize) -> Option<Tile> {
        self.tiles.get(cell).copied()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Linear index of `(row, col)`
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// `(row, col)` of a linear index
    pub fn coords(&self, cell: usize) -> (usize, usize) {
        (cell / self.cols, cell % self.cols)
    }

    /// Clone with the tile at `(row, col)` replaced
    pub fn with_tile(&self, row: usize, col: usize, tile: Tile) -> Self {
        let mut board = self.clone();
        if row < self.rows && col < self.cols {
            let cell = self.index(row, col);
            board.tiles[cell] = tile;
        }
        board
    }

    /// Rows of tiles, top to bottom
    pub fn grid(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.cols)
    }
}

fn is_json_path(path: &Path) -> bool {
    path.extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("json"))
}

impl TryFrom<BoardConfig> for Board {
    type Error = BoardError;

    fn try_from(config: BoardConfig) -> Result<Self, Self::Error> {
        Self::from_tokens(&config.grid)
    }
}

impl From<Board> for BoardConfig {
    fn from(board: Board) -> Self {
        Self {
            grid: board
                .grid()
                .map(|row| row.iter().map(|&t| String::from(t)).collect())
                .collect(),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.rows, self.cols)?;
        for row in self.grid() {
            let line: Vec<String> = row.iter().map(|t| format!("{:<2}", t)).collect();
            write!(f, "\n{}", line.join(" ").trim_end())?;
        }
        Ok(())
    }
}
