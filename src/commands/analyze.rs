//! Opening analysis command
//!
//! Labels the whole dictionary tree once and reports, for every legal
//! opening letter, which side owns the forced win after that letter is
//! placed by the first mover.

use crate::core::{NodeId, PrefixTree};
use crate::solver::{Player, extract_win, label_outcomes};
use rustc_hash::FxHashMap;

/// Outcome of one opening letter
pub struct OpeningReport {
    pub letter: char,
    /// Number of dictionary words starting with this letter
    pub word_count: usize,
    /// Whether the first mover still forces a win after opening with it
    pub first_mover_wins: bool,
    /// One winning word through this opening, when the first mover wins
    pub winning_word: Option<String>,
}

/// Result of analyzing every legal opening
pub struct AnalysisResult {
    pub dictionary_size: usize,
    pub openings: Vec<OpeningReport>,
    pub winning_openings: usize,
}

/// Analyze all opening letters of a dictionary
#[must_use]
pub fn analyze_openings(words: &[String]) -> AnalysisResult {
    let tree = PrefixTree::build(words);
    let table = label_outcomes(&tree, NodeId::ROOT, Player::First);

    let mut starts: FxHashMap<char, usize> = FxHashMap::default();
    for word in words {
        if let Some(first) = word.chars().next() {
            *starts.entry(first).or_insert(0) += 1;
        }
    }

    let openings: Vec<OpeningReport> = tree
        .children(NodeId::ROOT)
        .map(|(slot, child)| {
            let letter = tree.alphabet().letter_at(slot) as char;
            // The first mover placed this letter, so the subtree label says
            // directly whether they kept their win.
            let first_mover_wins = table.winner(child) == Some(Player::First);
            let winning_word = if first_mover_wins {
                extract_win(&tree, &table, child, Player::First)
                    .map(|suffix| format!("{letter}{suffix}"))
            } else {
                None
            };

            OpeningReport {
                letter,
                word_count: starts.get(&letter).copied().unwrap_or(0),
                first_mover_wins,
                winning_word,
            }
        })
        .collect();

    let winning_openings = openings.iter().filter(|o| o.first_mover_wins).count();

    AnalysisResult {
        dictionary_size: words.len(),
        openings,
        winning_openings,
    }
}
