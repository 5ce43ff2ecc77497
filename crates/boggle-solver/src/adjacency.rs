//! Precomputed king-move neighbors for every cell of a board shape.

use smallvec::SmallVec;

use crate::board::Board;

/// Offsets of the eight surrounding cells
const DELTAS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Neighbor lists indexed by linear cell index.
///
/// Depends only on the board's dimensions, so one index can serve every
/// board of the same shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyIndex {
    rows: usize,
    cols: usize,
    neighbors: Vec<SmallVec<[usize; 8]>>,
}

impl AdjacencyIndex {
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut neighbors = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                let mut cell = SmallVec::new();
                for (dr, dc) in DELTAS {
                    let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
                    else {
                        continue;
                    };
                    if r < rows && c < cols {
                        cell.push(r * cols + c);
                    }
                }
                neighbors.push(cell);
            }
        }
        Self {
            rows,
            cols,
            neighbors,
        }
    }

    pub fn for_board(board: &Board) -> Self {
        Self::new(board.rows(), board.cols())
    }

    /// Cells one king-move away from `cell` (empty if out of range)
    pub fn neighbors(&self, cell: usize) -> &[usize] {
        self.neighbors.get(cell).map(|n| n.as_slice()).unwrap_or(&[])
    }

    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// Whether this index was built for the board's dimensions
    pub fn fits(&self, board: &Board) -> bool {
        self.rows == board.rows() && self.cols == board.cols()
    }

    /// Number of cells covered
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_edge_and_center_counts() {
        let adj = AdjacencyIndex::new(4, 4);
        assert_eq!(adj.len(), 16);
        assert_eq!(adj.neighbors(0).len(), 3);
        assert_eq!(adj.neighbors(1).len(), 5);
        assert_eq!(adj.neighbors(5).len(), 8);
        assert_eq!(adj.neighbors(15).len(), 3);
        assert_eq!(adj.neighbors(0), &[1, 4, 5]);
    }

    #[test]
    fn test_adjacency_is_symmetric_and_irreflexive() {
        let adj = AdjacencyIndex::new(3, 5);
        for a in 0..adj.len() {
            assert!(!adj.are_adjacent(a, a));
            for &b in adj.neighbors(a) {
                assert!(adj.are_adjacent(b, a), "{} -> {} not mirrored", a, b);
            }
        }
    }

    #[test]
    fn test_single_row_and_single_cell() {
        let adj = AdjacencyIndex::new(1, 3);
        assert_eq!(adj.neighbors(0), &[1]);
        assert_eq!(adj.neighbors(1), &[0, 2]);

        let single = AdjacencyIndex::new(1, 1);
        assert!(single.neighbors(0).is_empty());
        assert!(single.neighbors(5).is_empty());
    }

    #[test]
    fn test_fits_board() {
        let board = Board::from_rows(&["ABC", "DEF"]).unwrap();
        assert!(AdjacencyIndex::for_board(&board).fits(&board));
        assert!(!AdjacencyIndex::new(3, 2).fits(&board));
    }
}
