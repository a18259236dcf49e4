//! One-shot Ghost query
//!
//! Composes prefix re-rooting, outcome labeling and winning-line
//! extraction into the single entry point callers use.

use super::extract::extract_win;
use super::labeling::label_outcomes;
use super::outcome::Player;
use crate::core::{PrefixError, PrefixTree};

/// Answer to a Ghost query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Solution {
    /// The queried player forces a win; one complete word realizing it,
    /// starting prefix included.
    WinningWord(String),
    /// Optimal opposition wins; there is no forced winning word.
    NoForcedWin,
}

impl Solution {
    /// The winning word, if the query found one
    #[must_use]
    pub fn winning_word(&self) -> Option<&str> {
        match self {
            Self::WinningWord(word) => Some(word),
            Self::NoForcedWin => None,
        }
    }

    /// Whether the queried player forces a win
    #[inline]
    #[must_use]
    pub const fn is_win(&self) -> bool {
        matches!(self, Self::WinningWord(_))
    }
}

/// Decide the game from `prefix` for the caller's side
///
/// `first_mover_is_caller` states which identity the caller holds: the
/// player who placed (or will place) the very first letter of the game, or
/// their opponent. The prefix letters are assumed to have been placed
/// alternately starting with the first mover, so prefix parity decides who
/// is on move at the query position.
///
/// Labels the subtree under `prefix` and, if the labels favor the caller,
/// extracts one winning word (`prefix` + forced continuation). The labeling
/// writes only into a table private to this call, so concurrent queries
/// over one shared tree are sound.
///
/// # Errors
/// Returns [`PrefixError::PrefixNotFound`] if `prefix` is not reachable in
/// the dictionary or traversal passes through a completed word.
pub fn solve(
    tree: &PrefixTree,
    prefix: &str,
    first_mover_is_caller: bool,
) -> Result<Solution, PrefixError> {
    let view = tree.view_from_prefix(prefix)?;
    let mover = if view.first_mover_is_next() {
        Player::First
    } else {
        Player::Second
    };
    let caller = if first_mover_is_caller {
        Player::First
    } else {
        Player::Second
    };

    let table = label_outcomes(tree, view.root(), mover);
    if table.winner(view.root()) != Some(caller) {
        return Ok(Solution::NoForcedWin);
    }

    // A winning label without an extractable line happens only at a
    // childless root (empty dictionary, or the prefix spelling a complete
    // word): no letter is ever placed, so there is no word to report.
    Ok(match extract_win(tree, &table, view.root(), caller) {
        Some(suffix) => Solution::WinningWord(format!("{}{suffix}", view.prefix())),
        None => Solution::NoForcedWin,
    })
}
