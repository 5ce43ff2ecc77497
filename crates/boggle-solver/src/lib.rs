//! Boggle-style word grid solver.
//!
//! A dictionary is loaded once into a 26-way [`WordTrie`]. Each board is
//! then searched depth-first from every cell, descending the trie one tile
//! at a time so that any branch whose letters are not a dictionary prefix
//! is abandoned immediately.

pub mod adjacency;
pub mod board;
pub mod dice;
pub mod dictionary;
pub mod error;
pub mod path;
pub mod pruning;
pub mod solver;
pub mod trie;

// Re-export main types
pub use adjacency::AdjacencyIndex;
pub use board::{Board, BoardConfig, Tile};
pub use dice::DiceSet;
pub use dictionary::LoadedDictionary;
pub use error::{BoardError, Error, PathError, Result, WordError};
pub use pruning::MIN_WORD_LEN;
pub use solver::{find_all_words, find_word_paths, solve, SolverConfig, SolverResult};
pub use trie::{TrieNode, WordTrie};
