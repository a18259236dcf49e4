//! Ghost Solver
//!
//! Decides the two-player word game Ghost: players alternately append one
//! letter to a shared prefix, and whoever completes a dictionary word
//! loses. The solver builds a prefix tree over the dictionary, labels the
//! game-theoretic winner of every position in one depth-first pass, and
//! extracts one forced winning word when the queried side has one.
//!
//! # Quick Start
//!
//! ```rust
//! use ghost_solver::core::PrefixTree;
//! use ghost_solver::solver::solve;
//!
//! let tree = PrefixTree::build(["hote", "lone", "bone"]);
//!
//! // Does the first mover force a win from the prefix "h"?
//! let solution = solve(&tree, "h", true).unwrap();
//! assert_eq!(solution.winning_word(), Some("hote"));
//! ```

// Core domain types
pub mod core;

// Game-tree solving
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
