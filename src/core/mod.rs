//! Core domain types for Ghost
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod alphabet;
mod trie;

pub use alphabet::Alphabet;
pub use trie::{NodeId, PrefixError, PrefixTree, PrefixView};
