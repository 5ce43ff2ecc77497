//! Search benchmarks
//!
//! Run with: cargo bench

use boggle_solver::{find_all_words, solve, AdjacencyIndex, Board, DiceSet, SolverConfig, WordTrie};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Every 3-5 letter word over a small alphabet: a dense trie that keeps
/// the search busy without an external word list
fn synthetic_dictionary() -> WordTrie {
    let letters = ['A', 'E', 'I', 'O', 'R', 'S', 'T', 'N', 'L'];
    let mut trie = WordTrie::new();
    let mut stack: Vec<String> = letters.iter().map(|c| c.to_string()).collect();
    while let Some(prefix) = stack.pop() {
        if prefix.len() >= 3 {
            // Only keep a fraction to mimic a sparse real dictionary
            let hash = prefix.bytes().fold(7u32, |h, b| h.wrapping_mul(31).wrapping_add(b as u32));
            if hash % 5 == 0 {
                trie.insert(&prefix).expect("synthetic words are A-Z");
            }
        }
        if prefix.len() < 5 {
            for c in letters {
                stack.push(format!("{}{}", prefix, c));
            }
        }
    }
    trie
}

fn bench_search(c: &mut Criterion) {
    let trie = synthetic_dictionary();
    let mut rng = StdRng::seed_from_u64(99);
    let boards = [
        ("classic", Board::roll(DiceSet::Classic, &mut rng)),
        ("big", Board::roll(DiceSet::Big, &mut rng)),
    ];

    let mut group = c.benchmark_group("find_all_words");
    for (name, board) in &boards {
        let adjacency = AdjacencyIndex::for_board(board);
        group.bench_with_input(BenchmarkId::from_parameter(name), board, |b, board| {
            b.iter(|| find_all_words(black_box(board), &adjacency, &trie))
        });
    }
    group.finish();

    let big = &boards[1].1;
    let parallel = SolverConfig {
        parallel: true,
        ..Default::default()
    };
    c.bench_function("solve_parallel_big", |b| {
        b.iter(|| solve(black_box(big), &trie, &parallel))
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
