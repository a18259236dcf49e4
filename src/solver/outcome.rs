//! Player identity and per-node outcome storage
//!
//! Outcome labels live in a side table keyed by arena index rather than in
//! the nodes themselves. That keeps the tree immutable once built, lets the
//! labeling pass be redone for a different starting mover, and makes
//! parallel queries over a shared tree sound (each query owns its table).

use crate::core::{NodeId, PrefixTree};

/// Absolute player identity over the whole game
///
/// `First` is the player who places the very first letter of the game, at
/// the empty prefix. Prefix parity decides which of the two is on move at
/// any deeper position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    First,
    Second,
}

impl Player {
    /// The other player
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

/// Winner labels for every arena slot of one tree
///
/// A slot holds `None` until the labeling pass resolves it. After
/// [`label_outcomes`](super::label_outcomes) every node reachable from the
/// labeled root is `Some`.
#[derive(Debug, Clone)]
pub struct OutcomeTable {
    winners: Vec<Option<Player>>,
}

impl OutcomeTable {
    /// Create an unresolved table sized to a tree's arena
    #[must_use]
    pub fn for_tree(tree: &PrefixTree) -> Self {
        Self {
            winners: vec![None; tree.node_count()],
        }
    }

    /// The labeled winner at `node`, or `None` if unresolved
    #[inline]
    #[must_use]
    pub fn winner(&self, node: NodeId) -> Option<Player> {
        self.winners[node.index()]
    }

    /// Label `node` with its winner
    #[inline]
    pub fn set_winner(&mut self, node: NodeId, winner: Player) {
        self.winners[node.index()] = Some(winner);
    }
}
