//! CLI entry point for the Boggle solver.
//!
//! Usage:
//!   boggle-solver solve <board.txt|board.json> --dict <words.txt> [options]
//!   boggle-solver solve --stdin --dict <words.txt> [options]
//!   boggle-solver roll [--dice classic|classic1983|master|big] [options]
//!
//! Solve options:
//!   --min-len <n>   Shortest word to report (default: 3)
//!   --parallel      Search start cells on all cores
//!   --paths         Show the cells used for each word
//!   --json          Print a JSON document instead of a word list
//!
//! Roll options:
//!   --rows <r> --cols <c>   Random board from letter frequencies instead of dice
//!   --seed <n>              Seed for reproducible boards
//!   --json                  Print the board as JSON

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use boggle_solver::{dictionary, solve, Board, DiceSet, SolverConfig, SolverResult, MIN_WORD_LEN};

#[derive(Parser)]
#[command(name = "boggle-solver")]
#[command(about = "Find every dictionary word hidden in a Boggle board")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find all words on a board
    Solve {
        /// Board file: plain text ("rows cols" then tiles) or .json
        #[arg(value_name = "BOARD")]
        board: Option<PathBuf>,

        /// Read the board from stdin instead of a file
        #[arg(long, conflicts_with = "board")]
        stdin: bool,

        /// Treat the stdin board as JSON
        #[arg(long, requires = "stdin")]
        json_input: bool,

        /// Word list, one word per line
        #[arg(long, short = 'd', value_name = "FILE")]
        dict: PathBuf,

        /// Shortest word to report, "QU" counting as two letters
        #[arg(long, default_value_t = MIN_WORD_LEN)]
        min_len: usize,

        /// Search start cells in parallel
        #[arg(long)]
        parallel: bool,

        /// Include the cell path of each word
        #[arg(long)]
        paths: bool,

        /// Print JSON output
        #[arg(long)]
        json: bool,
    },
    /// Generate a random board
    Roll {
        /// Dice set to roll
        #[arg(long, value_enum, default_value_t = DiceArg::Classic)]
        dice: DiceArg,

        /// Rows for a frequency-weighted random board
        #[arg(long, requires = "cols")]
        rows: Option<usize>,

        /// Columns for a frequency-weighted random board
        #[arg(long, requires = "rows")]
        cols: Option<usize>,

        /// Random seed
        #[arg(long)]
        seed: Option<u64>,

        /// Print the board as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DiceArg {
    Classic,
    Classic1983,
    Master,
    Big,
}

impl From<DiceArg> for DiceSet {
    fn from(arg: DiceArg) -> Self {
        match arg {
            DiceArg::Classic => DiceSet::Classic,
            DiceArg::Classic1983 => DiceSet::Classic1983,
            DiceArg::Master => DiceSet::Master,
            DiceArg::Big => DiceSet::Big,
        }
    }
}

/// JSON output for a solved board
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    board: Board,
    count: usize,
    words: Vec<WordOutput>,
    dictionary_size: usize,
    skipped_entries: usize,
    cells_entered: usize,
    time_elapsed_ms: u64,
}

#[derive(Debug, Serialize)]
struct WordOutput {
    word: String,
    /// (row, col) of each cell
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<Vec<(usize, usize)>>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            board,
            stdin,
            json_input,
            dict,
            min_len,
            parallel,
            paths,
            json,
        } => {
            let board = if stdin {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("failed to read board from stdin")?;
                Board::from_str_with_format(&buffer, json_input)
                    .context("invalid board on stdin")?
            } else if let Some(path) = board {
                Board::from_file(&path)
                    .with_context(|| format!("failed to load board {}", path.display()))?
            } else {
                bail!("must provide either a board file or --stdin");
            };

            let loaded = dictionary::load_file(&dict)
                .with_context(|| format!("failed to load dictionary {}", dict.display()))?;

            let config = SolverConfig {
                min_word_len: min_len,
                parallel,
            };
            let result = solve(&board, &loaded.trie, &config);

            if json {
                let output = format_result(board, &result, &loaded, paths);
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                print_words(&board, &result, paths);
            }
        }
        Commands::Roll {
            dice,
            rows,
            cols,
            seed,
            json,
        } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };

            let board = match (rows, cols) {
                (Some(rows), Some(cols)) => Board::random(rows, cols, &mut rng)?,
                _ => Board::roll(dice.into(), &mut rng),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&board)?);
            } else {
                println!("{}", board);
            }
        }
    }

    Ok(())
}

fn format_result(
    board: Board,
    result: &SolverResult,
    loaded: &dictionary::LoadedDictionary,
    paths: bool,
) -> SolveOutput {
    let words = result
        .found
        .iter()
        .map(|(word, cells)| WordOutput {
            word: word.clone(),
            path: paths.then(|| cells.iter().map(|&c| board.coords(c)).collect()),
        })
        .collect();

    SolveOutput {
        count: result.len(),
        words,
        dictionary_size: loaded.trie.len(),
        skipped_entries: loaded.skipped,
        cells_entered: result.cells_entered,
        time_elapsed_ms: result.time_elapsed_ms,
        board,
    }
}

fn print_words(board: &Board, result: &SolverResult, paths: bool) {
    for (word, cells) in &result.found {
        if paths {
            let coords: Vec<String> = cells
                .iter()
                .map(|&c| {
                    let (row, col) = board.coords(c);
                    format!("({},{})", row, col)
                })
                .collect();
            println!("{:<16} {}", word, coords.join(" "));
        } else {
            println!("{}", word);
        }
    }
    eprintln!("{} words found in {} ms", result.len(), result.time_elapsed_ms);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stdin_conflicts_with_board_path() {
        let result = Cli::try_parse_from(["boggle-solver", "solve", "board.txt", "--stdin", "--dict", "words.txt"]);
        assert!(result.is_err());

        let cli = Cli::try_parse_from(["boggle-solver", "solve", "--stdin", "--dict", "words.txt"]).unwrap();
        assert!(matches!(cli.command, Commands::Solve { stdin: true, board: None, .. }));
    }
}
