//! Ghost Solver - CLI
//!
//! Decides Ghost positions from a dictionary: forced winning word or
//! proof that none exists.

use anyhow::Result;
use clap::{Parser, Subcommand};
use ghost_solver::{
    commands::{SolveConfig, analyze_openings, run_benchmark, sample_prefixes, solve_prefix},
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    wordlists::{SAMPLE, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "ghost_solver",
    about = "Ghost word-game solver: forced winning words via trie game-tree search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'sample' (default, embedded) or path to a file (one word per line)
    #[arg(short = 'w', long, global = true, default_value = "sample")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve one starting prefix
    Solve {
        /// Starting prefix (may be empty for the opening position)
        #[arg(default_value = "")]
        prefix: String,

        /// Ask for the second mover's side instead of the first mover's
        #[arg(short, long)]
        second: bool,

        /// Show dictionary and tree statistics
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze every legal opening letter (default)
    Analyze,

    /// Benchmark solver throughput over random starting prefixes
    Benchmark {
        /// Number of random prefixes to query
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Ask for the second mover's side instead of the first mover's
        #[arg(short, long)]
        second: bool,
    },
}

/// Load the dictionary based on the -w flag
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<String>> {
    use ghost_solver::wordlists::loader::load_from_file;

    match wordlist_mode {
        "sample" => Ok(words_from_slice(SAMPLE)),
        path => {
            let words = load_from_file(path)?;
            anyhow::ensure!(!words.is_empty(), "no usable words in {path}");
            Ok(words)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_wordlist(&cli.wordlist)?;

    // Default to the opening overview if no command is given
    let command = cli.command.unwrap_or(Commands::Analyze);

    match command {
        Commands::Solve {
            prefix,
            second,
            verbose,
        } => run_solve_command(&prefix, second, verbose, &words),
        Commands::Analyze => {
            let result = analyze_openings(&words);
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark { count, second } => {
            run_benchmark_command(count, second, &words);
            Ok(())
        }
    }
}

fn run_solve_command(prefix: &str, second: bool, verbose: bool, words: &[String]) -> Result<()> {
    let prefix = prefix.to_lowercase();
    anyhow::ensure!(
        ghost_solver::core::Alphabet::LOWERCASE.spans(&prefix),
        "prefix must contain only letters a-z, got \"{prefix}\""
    );

    let mut config = SolveConfig::new(prefix);
    config.first_mover_is_caller = !second;

    let result = solve_prefix(config, words).map_err(|e| anyhow::anyhow!(e))?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(count: usize, second: bool, words: &[String]) {
    println!("Running benchmark on {count} random prefixes...");

    let prefixes = sample_prefixes(words, count);
    let result = run_benchmark(words, &prefixes, !second);
    print_benchmark_result(&result);
}
