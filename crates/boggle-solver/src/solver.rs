//! Backtracking board search.
//!
//! Every cell is tried as the start of a word. From there the search walks
//! to unvisited neighbors depth-first, descending the trie one tile at a
//! time and abandoning a branch as soon as the trie has no matching child.
//! All per-walk state lives in a `SearchState` that is mutated in place
//! and restored on the way back up, so no state is copied per branch.

use std::collections::{BTreeMap, BTreeSet};
use std::time::Instant;

use log::{debug, trace};
use rayon::prelude::*;

use crate::adjacency::AdjacencyIndex;
use crate::board::Board;
use crate::pruning::{descend, is_reportable, viable_starts, MIN_WORD_LEN};
use crate::trie::{TrieNode, WordTrie};

/// Configuration for the solver
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Shortest word (in spelled characters, "QU" counting as two) to report
    pub min_word_len: usize,
    /// Search start cells on the rayon thread pool
    pub parallel: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            min_word_len: MIN_WORD_LEN,
            parallel: false,
        }
    }
}

/// Result of a full board search
#[derive(Debug, Clone, Default)]
pub struct SolverResult {
    /// Every word found, with one witnessing cell path
    pub found: BTreeMap<String, Vec<usize>>,
    /// Number of cells entered (successful trie descents)
    pub cells_entered: usize,
    /// Time elapsed in milliseconds
    pub time_elapsed_ms: u64,
}

impl SolverResult {
    /// Found words in alphabetical order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.found.keys().map(String::as_str)
    }

    pub fn word_set(&self) -> BTreeSet<String> {
        self.found.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.found.len()
    }

    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }
}

/// Mutable state of one in-flight walk. Owned by exactly one search and
/// fully unwound between start cells.
#[derive(Debug)]
struct SearchState {
    /// Letters spelled so far, with Q expanded to "QU"
    word: String,
    /// Cells on the current path, in order
    cells: Vec<usize>,
    visited: Vec<bool>,
    cells_entered: usize,
}

impl SearchState {
    fn new(board_len: usize) -> Self {
        Self {
            word: String::new(),
            cells: Vec::new(),
            visited: vec![false; board_len],
            cells_entered: 0,
        }
    }
}

/// Destination for words discovered by the walk
trait WordSink {
    fn record(&mut self, word: &str, cells: &[usize]);
}

impl WordSink for BTreeSet<String> {
    fn record(&mut self, word: &str, _cells: &[usize]) {
        if !self.contains(word) {
            self.insert(word.to_string());
        }
    }
}

impl WordSink for BTreeMap<String, Vec<usize>> {
    fn record(&mut self, word: &str, cells: &[usize]) {
        // Keep the first path found for each word
        if !self.contains_key(word) {
            self.insert(word.to_string(), cells.to_vec());
        }
    }
}

/// Read-only inputs shared by every walk
struct Searcher<'a> {
    board: &'a Board,
    adjacency: &'a AdjacencyIndex,
    min_word_len: usize,
}

impl<'a> Searcher<'a> {
    fn visit<S: WordSink>(&self, cell: usize, node: &TrieNode, state: &mut SearchState, sink: &mut S) {
        // Each cell at most once per path
        match state.visited.get(cell) {
            Some(false) => {}
            _ => return,
        }
        let Some(tile) = self.board.tile_at(cell) else {
            return;
        };
        let Some(next) = descend(node, tile) else {
            return;
        };

        let spelled = tile.spelled();
        state.word.push_str(spelled);
        state.cells.push(cell);
        state.visited[cell] = true;
        state.cells_entered += 1;

        if is_reportable(next, state.word.len(), self.min_word_len) {
            trace!("found {} via {:?}", state.word, state.cells);
            sink.record(&state.word, &state.cells);
        }

        if next.has_children() {
            for &neighbor in self.adjacency.neighbors(cell) {
                self.visit(neighbor, next, state, sink);
            }
        }

        state.visited[cell] = false;
        state.cells.pop();
        let len = state.word.len() - spelled.len();
        state.word.truncate(len);
    }

    /// Run one walk per start cell with a single reused state
    fn search_serial<S: WordSink>(&self, trie: &WordTrie, sink: &mut S) -> usize {
        let mut state = SearchState::new(self.board.len());
        for start in viable_starts(self.board, trie.root()) {
            self.visit(start, trie.root(), &mut state, sink);
        }
        state.cells_entered
    }

    /// Run start cells in parallel. Each worker owns its state and partial
    /// result; partials are merged in start-cell order so the outcome
    /// matches the serial search.
    fn search_parallel(&self, trie: &WordTrie) -> (BTreeMap<String, Vec<usize>>, usize) {
        viable_starts(self.board, trie.root())
            .into_par_iter()
            .map(|start| {
                let mut state = SearchState::new(self.board.len());
                let mut found: BTreeMap<String, Vec<usize>> = BTreeMap::new();
                self.visit(start, trie.root(), &mut state, &mut found);
                (found, state.cells_entered)
            })
            .reduce(
                || (BTreeMap::new(), 0),
                |(mut found, entered), (later, more)| {
                    for (word, cells) in later {
                        found.entry(word).or_insert(cells);
                    }
                    (found, entered + more)
                },
            )
    }
}

/// Find every dictionary word of more than two letters that can be traced
/// on `board` as a simple path of adjacent cells.
pub fn find_all_words(board: &Board, adjacency: &AdjacencyIndex, trie: &WordTrie) -> BTreeSet<String> {
    find_words_with_min_len(board, adjacency, trie, MIN_WORD_LEN)
}

/// [`find_all_words`] with a custom minimum word length
pub fn find_words_with_min_len(
    board: &Board,
    adjacency: &AdjacencyIndex,
    trie: &WordTrie,
    min_word_len: usize,
) -> BTreeSet<String> {
    let searcher = Searcher {
        board,
        adjacency,
        min_word_len,
    };
    let mut words = BTreeSet::new();
    searcher.search_serial(trie, &mut words);
    words
}

/// Find every word together with the first cell path that spells it
pub fn find_word_paths(
    board: &Board,
    adjacency: &AdjacencyIndex,
    trie: &WordTrie,
    min_word_len: usize,
) -> BTreeMap<String, Vec<usize>> {
    let searcher = Searcher {
        board,
        adjacency,
        min_word_len,
    };
    let mut found = BTreeMap::new();
    searcher.search_serial(trie, &mut found);
    found
}

/// Search a board end to end: build the adjacency index, run the search
/// (serially or in parallel) and collect statistics.
pub fn solve(board: &Board, trie: &WordTrie, config: &SolverConfig) -> SolverResult {
    let start_time = Instant::now();
    let adjacency = AdjacencyIndex::for_board(board);
    let searcher = Searcher {
        board,
        adjacency: &adjacency,
        min_word_len: config.min_word_len,
    };

    let (found, cells_entered) = if config.parallel {
        searcher.search_parallel(trie)
    } else {
        let mut found: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        let entered = searcher.search_serial(trie, &mut found);
        (found, entered)
    };

    let result = SolverResult {
        found,
        cells_entered,
        time_elapsed_ms: start_time.elapsed().as_millis() as u64,
    };
    debug!(
        "searched {}x{} board: {} words, {} cells entered in {} ms",
        board.rows(),
        board.cols(),
        result.len(),
        result.cells_entered,
        result.time_elapsed_ms
    );
    result
}
