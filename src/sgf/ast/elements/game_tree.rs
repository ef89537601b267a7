//! GameTree element
//!
//!     A game tree is a parenthesized main line followed by its variations:
//!
//!         (;B[pd];W[dd](;B[pq])(;B[dp]))
//!
//!     Here the tree's sequence is `;B[pd];W[dd]` and it has two children, each a game tree of its
//!     own. Every `(...)` block that directly follows the last node of a sequence is a child of
//!     that tree, in source order. The first child is conventionally the main continuation.
//!
//!     A game tree always has at least one node: the grammar requires it and the parser only
//!     builds trees from matched node sequences.

use super::super::traits::AstNode;
use super::node::Node;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GameTree {
    sequence: Vec<Node>,
    children: Vec<GameTree>,
}

impl GameTree {
    pub(crate) fn new(sequence: Vec<Node>, children: Vec<GameTree>) -> Self {
        debug_assert!(!sequence.is_empty(), "a game tree needs at least one node");
        Self { sequence, children }
    }

    /// The main line nodes of this tree, before any branching.
    pub fn sequence(&self) -> &[Node] {
        &self.sequence
    }

    /// Variations following the sequence, in source order.
    pub fn children(&self) -> &[GameTree] {
        &self.children
    }

    /// The first node of the sequence (the root node for a root game tree).
    pub fn root_node(&self) -> &Node {
        &self.sequence[0]
    }

    /// Total number of nodes in this tree and all its variations.
    pub fn node_count(&self) -> usize {
        self.sequence.len()
            + self
                .children
                .iter()
                .map(GameTree::node_count)
                .sum::<usize>()
    }

    /// Nesting depth: 1 for a tree without variations.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(GameTree::depth)
            .max()
            .unwrap_or(0)
    }
}

impl AstNode for GameTree {
    fn node_type(&self) -> &'static str {
        "GameTree"
    }

    fn display_label(&self) -> String {
        let mut label = plural(self.sequence.len(), "node");
        if !self.children.is_empty() {
            label.push_str(", ");
            label.push_str(&plural(self.children.len(), "variation"));
        }
        label
    }
}

pub(crate) fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sgf::ast::Property;

    fn leaf(id: &str, value: &str) -> GameTree {
        GameTree::new(
            vec![Node::new(vec![Property::from_strs(id, &[value])])],
            vec![],
        )
    }

    #[test]
    fn test_counts_and_depth() {
        let nested = GameTree::new(
            vec![Node::new(vec![Property::from_strs("W", &["dd"])])],
            vec![leaf("B", "aa")],
        );
        let tree = GameTree::new(
            vec![
                Node::new(vec![Property::from_strs("GM", &["1"])]),
                Node::new(vec![Property::from_strs("B", &["pd"])]),
            ],
            vec![nested, leaf("W", "pp")],
        );

        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.root_node().get("GM").and_then(Property::value), Some("1"));
        assert_eq!(tree.display_label(), "2 nodes, 2 variations");
    }

    #[test]
    fn test_label_without_variations() {
        assert_eq!(leaf("B", "aa").display_label(), "1 node");
    }
}
