//! AST Snapshot - a normalized intermediate representation of the parsed tree
//!
//! The snapshot captures the tree structure with node types, labels, attributes, and children,
//! so that each inspection format only has to deal with presentation and not with walking
//! Collection/GameTree/Node/Property separately.
//!
//! In a snapshot a GameTree's children are its sequence nodes followed by its variations, which
//! is the order they appear in the source.

use super::elements::{Collection, GameTree, Node, Property};
use super::traits::AstNode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A snapshot of an AST node in a normalized, serializable form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AstSnapshot {
    /// The type of node (e.g., "GameTree", "Node")
    pub node_type: String,

    /// The primary label of the node
    pub label: String,

    /// Additional attributes specific to the node type
    pub attributes: BTreeMap<String, String>,

    /// Child nodes in the tree
    pub children: Vec<AstSnapshot>,
}

impl AstSnapshot {
    pub fn new(node_type: String, label: String) -> Self {
        Self {
            node_type,
            label,
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: String, value: String) -> Self {
        self.attributes.insert(key, value);
        self
    }

    pub fn with_children(mut self, children: Vec<AstSnapshot>) -> Self {
        self.children.extend(children);
        self
    }
}

/// What to include when building a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotOptions {
    /// Include property values in property labels (`B[pq]` instead of `B`)
    pub show_values: bool,
}

impl Default for SnapshotOptions {
    fn default() -> Self {
        Self { show_values: true }
    }
}

// ============================================================================
// Snapshot Building Functions
// ============================================================================

/// Build the snapshot of a whole collection.
pub fn snapshot_from_collection(collection: &Collection, options: SnapshotOptions) -> AstSnapshot {
    AstSnapshot::new(
        collection.node_type().to_string(),
        collection.display_label(),
    )
    .with_attribute("trees".to_string(), collection.len().to_string())
    .with_children(
        collection
            .iter()
            .map(|tree| build_game_tree_snapshot(tree, options))
            .collect(),
    )
}

fn build_game_tree_snapshot(tree: &GameTree, options: SnapshotOptions) -> AstSnapshot {
    let nodes = tree
        .sequence()
        .iter()
        .map(|node| build_node_snapshot(node, options));
    let variations = tree
        .children()
        .iter()
        .map(|child| build_game_tree_snapshot(child, options));

    AstSnapshot::new(tree.node_type().to_string(), tree.display_label())
        .with_attribute("nodes".to_string(), tree.sequence().len().to_string())
        .with_attribute("variations".to_string(), tree.children().len().to_string())
        .with_children(nodes.chain(variations).collect())
}

fn build_node_snapshot(node: &Node, options: SnapshotOptions) -> AstSnapshot {
    AstSnapshot::new(node.node_type().to_string(), node.display_label()).with_children(
        node.properties()
            .iter()
            .map(|property| build_property_snapshot(property, options))
            .collect(),
    )
}

fn build_property_snapshot(property: &Property, options: SnapshotOptions) -> AstSnapshot {
    let label = if options.show_values {
        property.display_label()
    } else {
        property.identifier().to_string()
    };
    AstSnapshot::new(property.node_type().to_string(), label)
        .with_attribute("identifier".to_string(), property.identifier().to_string())
        .with_attribute("values".to_string(), property.values().len().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sgf::parsing::parse_collection;

    #[test]
    fn test_snapshot_orders_nodes_before_variations() {
        let collection = parse_collection("(;GM[1];B[pd](;W[dd])(;W[dp]))").unwrap();
        let snapshot = snapshot_from_collection(&collection, SnapshotOptions::default());

        assert_eq!(snapshot.node_type, "Collection");
        assert_eq!(snapshot.children.len(), 1);

        let tree = &snapshot.children[0];
        let kinds: Vec<_> = tree.children.iter().map(|c| c.node_type.as_str()).collect();
        assert_eq!(kinds, ["Node", "Node", "GameTree", "GameTree"]);
        assert_eq!(tree.attributes["variations"], "2");
        assert_eq!(tree.children[3].children[0].children[0].label, "W[dp]");
    }

    #[test]
    fn test_snapshot_without_values() {
        let collection = parse_collection("(;AB[dd][pp])").unwrap();
        let snapshot = snapshot_from_collection(
            &collection,
            SnapshotOptions { show_values: false },
        );
        let property = &snapshot.children[0].children[0].children[0];
        assert_eq!(property.label, "AB");
        assert_eq!(property.attributes["values"], "2");
    }
}
