//! Benchmark command
//!
//! Times the solver across many starting prefixes. The tree is built once
//! and shared read-only; every query labels into its own outcome table, so
//! the queries run in parallel.

use crate::core::PrefixTree;
use crate::solver::solve;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_queries: usize,
    pub wins: usize,
    pub no_wins: usize,
    pub prefixes_not_found: usize,
    pub duration: Duration,
    pub queries_per_second: f64,
    /// Winning-word length -> number of queries that produced it
    pub win_length_distribution: FxHashMap<usize, usize>,
}

/// Draw `count` starting prefixes from the dictionary at random
///
/// Each sample is a non-empty prefix of some dictionary word. A sample may
/// still be unreachable in the built tree when insertion pruned it away
/// below a shorter word; the benchmark counts those as not-found queries.
#[must_use]
pub fn sample_prefixes(words: &[String], count: usize) -> Vec<String> {
    if words.is_empty() {
        return Vec::new();
    }

    let mut rng = rand::rng();
    (0..count)
        .map(|_| {
            let word = &words[rng.random_range(0..words.len())];
            let len = rng.random_range(1..=word.len());
            word[..len].to_string()
        })
        .collect()
}

/// Run the solver over a set of starting prefixes
#[must_use]
pub fn run_benchmark(
    words: &[String],
    prefixes: &[String],
    first_mover_is_caller: bool,
) -> BenchmarkResult {
    let tree = PrefixTree::build(words);

    let pb = ProgressBar::new(prefixes.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let outcomes: Vec<_> = prefixes
        .par_iter()
        .map(|prefix| {
            let outcome = solve(&tree, prefix, first_mover_is_caller);
            pb.inc(1);
            outcome
        })
        .collect();
    let duration = start.elapsed();
    pb.finish_and_clear();

    let mut wins = 0;
    let mut no_wins = 0;
    let mut prefixes_not_found = 0;
    let mut win_length_distribution: FxHashMap<usize, usize> = FxHashMap::default();

    for outcome in outcomes {
        match outcome {
            Ok(solution) => match solution.winning_word() {
                Some(word) => {
                    wins += 1;
                    *win_length_distribution.entry(word.len()).or_insert(0) += 1;
                }
                None => no_wins += 1,
            },
            Err(_) => prefixes_not_found += 1,
        }
    }

    let total_queries = prefixes.len();
    BenchmarkResult {
        total_queries,
        wins,
        no_wins,
        prefixes_not_found,
        duration,
        queries_per_second: total_queries as f64 / duration.as_secs_f64(),
        win_length_distribution,
    }
}
