//! Prefix solving command
//!
//! Answers one query: from this starting prefix, does the caller's side
//! force a win, and with which word?

use crate::core::PrefixTree;
use crate::solver::{Solution, solve};

/// Configuration for a single query
pub struct SolveConfig {
    pub prefix: String,
    pub first_mover_is_caller: bool,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(prefix: String) -> Self {
        Self {
            prefix,
            first_mover_is_caller: true,
        }
    }
}

/// Result of a single query
pub struct SolveResult {
    pub prefix: String,
    pub first_mover_is_caller: bool,
    pub solution: Solution,
    pub dictionary_size: usize,
    pub tree_nodes: usize,
}

/// Build a tree from the dictionary and run one query
///
/// # Errors
///
/// Returns an error if the prefix is not reachable in the dictionary.
pub fn solve_prefix(config: SolveConfig, words: &[String]) -> Result<SolveResult, String> {
    let tree = PrefixTree::build(words);
    let solution =
        solve(&tree, &config.prefix, config.first_mover_is_caller).map_err(|e| e.to_string())?;

    Ok(SolveResult {
        prefix: config.prefix,
        first_mover_is_caller: config.first_mover_is_caller,
        solution,
        dictionary_size: words.len(),
        tree_nodes: tree.node_count(),
    })
}
