//! Trie-driven pruning rules for the solver.
//!
//! A branch of the board search survives only while the letters spelled so
//! far are a prefix of some dictionary word. These helpers apply that test
//! one tile at a time, including the mandatory "QU" expansion.

use crate::board::{Board, Tile};
use crate::trie::TrieNode;

/// Shortest word the solver reports by default (strictly longer than 2)
pub const MIN_WORD_LEN: usize = 3;

/// Descend from `node` by the letters `tile` spells.
///
/// The Q tile must descend through 'Q' and then 'U'; a dictionary word
/// with a bare 'Q' can never be matched.
pub fn descend(node: &TrieNode, tile: Tile) -> Option<&TrieNode> {
    let next = node.child_at(tile.index())?;
    if tile.is_qu() {
        next.child('U')
    } else {
        Some(next)
    }
}

/// Whether a path that reached `node` after spelling `len` characters is a
/// word worth reporting
pub fn is_reportable(node: &TrieNode, len: usize, min_word_len: usize) -> bool {
    node.is_terminal() && len >= min_word_len
}

/// Cells whose tile begins at least one dictionary word
pub fn viable_starts(board: &Board, root: &TrieNode) -> Vec<usize> {
    board
        .tiles()
        .iter()
        .enumerate()
        .filter(|(_, &tile)| descend(root, tile).is_some())
        .map(|(cell, _)| cell)
        .collect()
}
