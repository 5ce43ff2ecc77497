//! Verification of a concrete cell path on a board.
//!
//! Used to check solver output independently of the search: a path is
//! valid when it is non-empty, stays on the board, never repeats a cell and
//! only steps between adjacent cells.

use crate::adjacency::AdjacencyIndex;
use crate::board::Board;
use crate::error::PathError;

/// Spell the word traced by `cells`, expanding the Q tile to "QU"
pub fn spell(board: &Board, adjacency: &AdjacencyIndex, cells: &[usize]) -> Result<String, PathError> {
    if cells.is_empty() {
        return Err(PathError::Empty);
    }

    let mut seen = vec![false; board.len()];
    let mut word = String::with_capacity(cells.len() + 1);

    for (i, &cell) in cells.iter().enumerate() {
        let tile = board.tile_at(cell).ok_or(PathError::OutOfBounds(cell))?;
        if seen[cell] {
            return Err(PathError::RepeatedCell(cell));
        }
        seen[cell] = true;

        if i > 0 {
            let from = cells[i - 1];
            if !adjacency.are_adjacent(from, cell) {
                return Err(PathError::NotAdjacent { from, to: cell });
            }
        }
        word.push_str(tile.spelled());
    }

    Ok(word)
}

/// Whether `cells` is a valid path on `board` spelling exactly `word`
pub fn traces(board: &Board, adjacency: &AdjacencyIndex, cells: &[usize], word: &str) -> bool {
    spell(board, adjacency, cells).map_or(false, |spelled| spelled == word)
}
