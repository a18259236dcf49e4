//! Winning-line extraction
//!
//! Walks a labeled tree and reads off one concrete sequence of letters that
//! realizes a forced win. Policy: at every node, take the first letter in
//! alphabetical order whose subtree is provably non-losing for the winner,
//! preferring any child that already sits at a forced-win word end as an
//! immediate fallback. The result is lexicographically biased, not the
//! shortest winning line.

use super::outcome::{OutcomeTable, Player};
use crate::core::{NodeId, PrefixTree};

/// Extract one winning letter sequence below `root` for `winner`
///
/// `table` must come from a labeling pass covering `root`. Children whose
/// label favors the opponent are skipped; a word-end child labeled for the
/// winner is remembered as a single-letter fallback; the first non-word-end
/// eligible child that yields a continuation is committed to immediately.
///
/// Returns `None` only when `root` has no eligible continuation at all,
/// which for a node labeled in `winner`'s favor can only be the childless
/// non-word-end root of an empty dictionary.
#[must_use]
pub fn extract_win(
    tree: &PrefixTree,
    table: &OutcomeTable,
    root: NodeId,
    winner: Player,
) -> Option<String> {
    let alphabet = tree.alphabet();
    let mut fallback = None;

    for (slot, child) in tree.children(root) {
        if table.winner(child) != Some(winner) {
            continue;
        }

        if tree.is_word_end(child) {
            // An immediate win: whoever is on move at the child just lost.
            fallback.get_or_insert(slot);
            continue;
        }

        if let Some(suffix) = extract_win(tree, table, child, winner) {
            return Some(format!("{}{suffix}", alphabet.letter_at(slot) as char));
        }
    }

    fallback.map(|slot| (alphabet.letter_at(slot) as char).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::label_outcomes;

    fn labeled(words: &[&str]) -> (PrefixTree, OutcomeTable) {
        let tree = PrefixTree::build(words);
        let table = label_outcomes(&tree, NodeId::ROOT, Player::First);
        (tree, table)
    }

    #[test]
    fn single_even_word_is_spelled_out() {
        let (tree, table) = labeled(&["cart"]);
        assert_eq!(table.winner(NodeId::ROOT), Some(Player::First));
        assert_eq!(
            extract_win(&tree, &table, NodeId::ROOT, Player::First),
            Some("cart".to_string())
        );
    }

    #[test]
    fn prefers_first_alphabetical_winning_branch() {
        // Both words win for the first mover; 'b' sorts before 'd'.
        let (tree, table) = labeled(&["ad", "ab"]);
        assert_eq!(
            extract_win(&tree, &table, NodeId::ROOT, Player::First),
            Some("ab".to_string())
        );
    }

    #[test]
    fn skips_branches_labeled_for_the_opponent() {
        // "bed" is odd: the first mover would complete it, so the 'b'
        // opening is labeled for the second mover and must be skipped even
        // though it sorts before 'c'.
        let (tree, table) = labeled(&["bed", "cart"]);
        let word = extract_win(&tree, &table, NodeId::ROOT, Player::First).unwrap();
        assert_eq!(word, "cart");
    }

    #[test]
    fn word_end_fallback_is_used_at_the_last_level() {
        let (tree, table) = labeled(&["ab"]);
        // Below "a" the only eligible child is the word end "ab".
        let a = tree.view_from_prefix("a").unwrap().root();
        assert_eq!(
            extract_win(&tree, &table, a, Player::First),
            Some("b".to_string())
        );
    }

    #[test]
    fn empty_tree_has_no_line_for_either_player() {
        let tree = PrefixTree::build(std::iter::empty::<&str>());
        let table = label_outcomes(&tree, NodeId::ROOT, Player::First);
        assert_eq!(extract_win(&tree, &table, NodeId::ROOT, Player::First), None);
        assert_eq!(extract_win(&tree, &table, NodeId::ROOT, Player::Second), None);
    }

    #[test]
    fn extraction_never_empty_below_labeled_winning_nodes() {
        let (tree, table) = labeled(&["hote", "lone", "bone", "horsewewew", "horseew"]);

        let mut stack = vec![NodeId::ROOT];
        while let Some(node) = stack.pop() {
            let winner = table.winner(node).unwrap();
            if !tree.is_word_end(node) {
                assert!(
                    extract_win(&tree, &table, node, winner).is_some(),
                    "no line extracted from a winning interior node"
                );
            }
            stack.extend(tree.children(node).map(|(_, id)| id));
        }
    }

    #[test]
    fn extracted_line_replays_through_winning_labels() {
        let (tree, table) = labeled(&["hote", "lone", "bone", "horsewewew", "horseew"]);
        let winner = table.winner(NodeId::ROOT).unwrap();
        let line = extract_win(&tree, &table, NodeId::ROOT, winner).unwrap();

        // Every node along the line stays labeled for the same winner.
        let mut node = NodeId::ROOT;
        for letter in line.bytes() {
            let slot = tree.alphabet().index_of(letter);
            node = tree.child_in_slot(node, slot).expect("line leaves the tree");
            assert_eq!(table.winner(node), Some(winner));
        }
        assert!(tree.is_word_end(node), "line does not end at a word");
    }
}
