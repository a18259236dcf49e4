//! Outcome labeling pass
//!
//! One depth-first walk assigns a winner to every node reachable from the
//! chosen root, assuming both players play optimally:
//!
//! 1. A word-end node means the *previous* letter completed a word, so the
//!    player who would move next wins the position.
//! 2. Children are labeled recursively with the opposite mover.
//! 3. If any child is labeled for the current mover, the mover steers into
//!    it and wins here too.
//! 4. Otherwise every continuation (or the lack of one) favors the
//!    opponent, and the opponent wins here.

use super::outcome::{OutcomeTable, Player};
use crate::core::{NodeId, PrefixTree};

/// Label the winner of every node reachable from `root`
///
/// `mover` is the player about to place the next letter at `root`.
/// Postcondition: every reachable node is resolved; unreachable arena
/// slots stay `None`.
#[must_use]
pub fn label_outcomes(tree: &PrefixTree, root: NodeId, mover: Player) -> OutcomeTable {
    let mut table = OutcomeTable::for_tree(tree);
    label_node(tree, &mut table, root, mover);
    table
}

fn label_node(tree: &PrefixTree, table: &mut OutcomeTable, node: NodeId, mover: Player) {
    // A completed word cost the previous mover the game.
    if tree.is_word_end(node) {
        table.set_winner(node, mover);
    }

    for (_, child) in tree.children(node) {
        label_node(tree, table, child, mover.opponent());
        if table.winner(child) == Some(mover) {
            // The mover can pick this letter and force their win.
            table.set_winner(node, mover);
        }
    }

    // No forcing move anywhere below: optimal opposition wins.
    if table.winner(node).is_none() {
        table.set_winner(node, mover.opponent());
    }
}
