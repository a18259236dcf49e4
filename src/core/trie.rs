//! Prefix tree over a Ghost dictionary
//!
//! The tree is an arena of nodes addressed by index. Each node holds a
//! fixed-width table of optional child ids, one slot per alphabet letter,
//! plus a word-end marker. Because Ghost ends the moment a word is
//! completed, insertion prunes everything below a word end: a node with
//! `is_word_end` set never has children.

use super::Alphabet;
use std::fmt;

/// Index of a node in the tree arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The arena slot of the root node (the empty prefix)
    pub const ROOT: Self = Self(0);

    /// Arena index of this node
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One prefix position reachable from the dictionary
#[derive(Debug, PartialEq, Eq)]
struct Node {
    children: Box<[Option<NodeId>]>,
    is_word_end: bool,
}

impl Node {
    fn new(base: usize) -> Self {
        Self {
            children: vec![None; base].into_boxed_slice(),
            is_word_end: false,
        }
    }
}

/// Error type for prefix traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefixError {
    /// The starting prefix is not a reachable letter sequence: a required
    /// child is absent, or the walk runs through a completed word.
    PrefixNotFound(String),
}

impl fmt::Display for PrefixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PrefixNotFound(prefix) => {
                write!(f, "no dictionary word starts with \"{prefix}\", or the game already ended inside it")
            }
        }
    }
}

impl std::error::Error for PrefixError {}

/// Prefix tree over a Ghost dictionary
///
/// Built once from a sanitized word list, then queried read-only. The
/// arena owns every node; views borrow into it.
#[derive(Debug, PartialEq, Eq)]
pub struct PrefixTree {
    alphabet: Alphabet,
    nodes: Vec<Node>,
}

impl PrefixTree {
    /// Create an empty tree over the given alphabet
    #[must_use]
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            nodes: vec![Node::new(alphabet.base())],
        }
    }

    /// Build a tree over the lowercase alphabet from a word list
    ///
    /// The caller supplies already-lowercased, alphabet-restricted words
    /// (see `wordlists::loader` for sanitation).
    ///
    /// # Examples
    /// ```
    /// use ghost_solver::core::PrefixTree;
    ///
    /// let tree = PrefixTree::build(["cat", "cart"]);
    /// assert!(tree.view_from_prefix("ca").is_ok());
    /// ```
    #[must_use]
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build_with(Alphabet::LOWERCASE, words)
    }

    /// Build a tree over a custom alphabet from a word list
    #[must_use]
    pub fn build_with<I, S>(alphabet: Alphabet, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = Self::new(alphabet);
        for word in words {
            tree.insert(word.as_ref());
        }
        tree
    }

    /// The alphabet this tree indexes children by
    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Total number of arena slots, including nodes detached by pruning
    ///
    /// Suitable for sizing per-node side tables.
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the prefix ending at `node` is itself a dictionary word
    #[inline]
    #[must_use]
    pub fn is_word_end(&self, node: NodeId) -> bool {
        self.nodes[node.index()].is_word_end
    }

    /// The child of `node` in a given letter slot, if present
    #[inline]
    #[must_use]
    pub fn child_in_slot(&self, node: NodeId, slot: usize) -> Option<NodeId> {
        self.nodes[node.index()].children[slot]
    }

    /// Iterate the existing children of `node` in increasing letter order
    pub fn children(&self, node: NodeId) -> impl Iterator<Item = (usize, NodeId)> + '_ {
        self.nodes[node.index()]
            .children
            .iter()
            .enumerate()
            .filter_map(|(slot, child)| child.map(|id| (slot, id)))
    }

    /// Insert one word, pruning everything below its final letter
    ///
    /// Walks from the root one letter at a time. If the walk reaches a node
    /// that already completes a word, the rest of `word` is discarded: play
    /// ends there, so the longer word is unreachable. The final node is
    /// marked as a word end and its children are cleared, keeping the
    /// invariant that word-end nodes are leaves. Nodes detached by the
    /// clear stay in the arena; the whole tree is dropped together.
    ///
    /// O(len) time and space.
    ///
    /// # Panics
    /// Panics if `word` contains a byte outside the configured alphabet
    /// (caller contract violation, surfaced by the slot bounds check).
    pub fn insert(&mut self, word: &str) {
        let mut current = NodeId::ROOT;

        for letter in word.bytes() {
            if self.nodes[current.index()].is_word_end {
                break;
            }

            let slot = self.alphabet.index_of(letter);
            current = match self.nodes[current.index()].children[slot] {
                Some(child) => child,
                None => {
                    let child = self.push_node();
                    self.nodes[current.index()].children[slot] = Some(child);
                    child
                }
            };
        }

        let node = &mut self.nodes[current.index()];
        node.is_word_end = true;
        node.children.fill(None);
    }

    /// Re-root at the node reached by consuming `prefix`
    ///
    /// Returns a non-owning view whose mover parity accounts for the
    /// letters already consumed: an odd-length prefix flips whose turn is
    /// next. O(len of prefix).
    ///
    /// # Errors
    /// Returns [`PrefixError::PrefixNotFound`] if the walk passes through a
    /// completed word or a required child is absent.
    ///
    /// # Panics
    /// Panics if `prefix` contains a byte outside the configured alphabet.
    pub fn view_from_prefix(&self, prefix: &str) -> Result<PrefixView<'_>, PrefixError> {
        let mut current = NodeId::ROOT;

        for letter in prefix.bytes() {
            let node = &self.nodes[current.index()];
            let slot = self.alphabet.index_of(letter);

            if node.is_word_end {
                return Err(PrefixError::PrefixNotFound(prefix.to_string()));
            }
            current = node.children[slot]
                .ok_or_else(|| PrefixError::PrefixNotFound(prefix.to_string()))?;
        }

        Ok(PrefixView {
            tree: self,
            root: current,
            first_mover_is_next: prefix.len() % 2 == 0,
            prefix: prefix.to_string(),
        })
    }

    fn push_node(&mut self) -> NodeId {
        let id = NodeId(u32::try_from(self.nodes.len()).expect("arena exceeds u32 indices"));
        self.nodes.push(Node::new(self.alphabet.base()));
        id
    }
}

/// Non-owning cursor over a subtree of a [`PrefixTree`]
///
/// Re-rooting never copies nodes; the tree must outlive the view.
#[derive(Debug, PartialEq, Eq)]
pub struct PrefixView<'a> {
    tree: &'a PrefixTree,
    root: NodeId,
    first_mover_is_next: bool,
    prefix: String,
}

impl<'a> PrefixView<'a> {
    /// The tree this view borrows from
    #[inline]
    #[must_use]
    pub const fn tree(&self) -> &'a PrefixTree {
        self.tree
    }

    /// The node the view is rooted at
    #[inline]
    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// Whether the whole-game first mover places the next letter here
    #[inline]
    #[must_use]
    pub const fn first_mover_is_next(&self) -> bool {
        self.first_mover_is_next
    }

    /// The literal prefix consumed to reach this root
    #[inline]
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Walk every node reachable from the root, checking the word-end
    /// pruning invariant.
    fn assert_word_ends_are_leaves(tree: &PrefixTree) {
        let mut stack = vec![NodeId::ROOT];
        while let Some(node) = stack.pop() {
            let child_count = tree.children(node).count();
            if tree.is_word_end(node) {
                assert_eq!(child_count, 0, "word-end node has children");
            }
            stack.extend(tree.children(node).map(|(_, id)| id));
        }
    }

    #[test]
    fn insert_builds_path() {
        let tree = PrefixTree::build(["cat"]);
        let a = Alphabet::LOWERCASE;

        let c = tree.child_in_slot(NodeId::ROOT, a.index_of(b'c')).unwrap();
        let ca = tree.child_in_slot(c, a.index_of(b'a')).unwrap();
        let cat = tree.child_in_slot(ca, a.index_of(b't')).unwrap();

        assert!(!tree.is_word_end(ca));
        assert!(tree.is_word_end(cat));
    }

    #[test]
    fn longer_word_pruned_below_shorter() {
        // "horse" finishes the game, so "horsewewew" adds nothing below it.
        let mut tree = PrefixTree::new(Alphabet::LOWERCASE);
        tree.insert("horse");
        tree.insert("horsewewew");

        let view = tree.view_from_prefix("horse").unwrap();
        assert!(tree.is_word_end(view.root()));
        assert_eq!(tree.children(view.root()).count(), 0);
        assert_word_ends_are_leaves(&tree);
    }

    #[test]
    fn shorter_word_prunes_existing_subtree() {
        // Insertion order reversed: the later, shorter word cuts the branch.
        let mut tree = PrefixTree::new(Alphabet::LOWERCASE);
        tree.insert("horsewewew");
        tree.insert("horse");

        let view = tree.view_from_prefix("horse").unwrap();
        assert!(tree.is_word_end(view.root()));
        assert_eq!(tree.children(view.root()).count(), 0);
        assert_word_ends_are_leaves(&tree);

        // The pruned continuation is no longer reachable.
        assert_eq!(
            tree.view_from_prefix("horsew"),
            Err(PrefixError::PrefixNotFound("horsew".to_string()))
        );
    }

    #[test]
    fn pruning_invariant_over_mixed_dictionary() {
        let tree = PrefixTree::build(["hote", "lone", "bone", "horsewewew", "horseew"]);
        assert_word_ends_are_leaves(&tree);
    }

    #[test]
    fn shared_prefixes_share_nodes() {
        let tree = PrefixTree::build(["bone", "bond"]);
        let bon = tree.view_from_prefix("bon").unwrap();
        assert_eq!(tree.children(bon.root()).count(), 2);
    }

    #[test]
    fn view_parity_flips_on_odd_prefix() {
        let tree = PrefixTree::build(["ghost"]);

        assert!(tree.view_from_prefix("").unwrap().first_mover_is_next());
        assert!(!tree.view_from_prefix("g").unwrap().first_mover_is_next());
        assert!(tree.view_from_prefix("gh").unwrap().first_mover_is_next());
        assert!(!tree.view_from_prefix("gho").unwrap().first_mover_is_next());
    }

    #[test]
    fn view_records_accumulated_prefix() {
        let tree = PrefixTree::build(["ghost"]);
        let view = tree.view_from_prefix("gho").unwrap();
        assert_eq!(view.prefix(), "gho");
    }

    #[test]
    fn missing_prefix_is_an_error() {
        let tree = PrefixTree::build(["cat"]);
        assert_eq!(
            tree.view_from_prefix("dog"),
            Err(PrefixError::PrefixNotFound("dog".to_string()))
        );
    }

    #[test]
    fn empty_tree_rejects_nonempty_prefix() {
        let tree = PrefixTree::new(Alphabet::LOWERCASE);
        assert!(tree.view_from_prefix("a").is_err());
        assert!(tree.view_from_prefix("").is_ok());
    }

    #[test]
    fn empty_prefix_roots_at_arena_root() {
        let tree = PrefixTree::build(["cat"]);
        let view = tree.view_from_prefix("").unwrap();
        assert_eq!(view.root(), NodeId::ROOT);
    }
}
