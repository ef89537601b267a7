//! Fluent assertion API for parsed collections

use crate::sgf::ast::{Collection, GameTree, Node, Property};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a collection
pub fn assert_collection(collection: &Collection) -> CollectionAssertion<'_> {
    CollectionAssertion { collection }
}

fn summarize_properties(properties: &[Property]) -> String {
    properties
        .iter()
        .map(Property::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// Collection
// ============================================================================

pub struct CollectionAssertion<'a> {
    collection: &'a Collection,
}

impl<'a> CollectionAssertion<'a> {
    /// Assert the number of root game trees
    pub fn tree_count(self, expected: usize) -> Self {
        let actual = self.collection.len();
        assert_eq!(
            actual, expected,
            "Expected {} game trees, found {}",
            expected, actual
        );
        self
    }

    /// Assert on a specific root game tree by index
    pub fn tree<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(GameTreeAssertion<'a>),
    {
        let trees = self.collection.trees();
        assert!(
            index < trees.len(),
            "Tree index {} out of bounds (collection has {} trees)",
            index,
            trees.len()
        );
        assertion(GameTreeAssertion {
            tree: &trees[index],
            context: format!("trees[{}]", index),
        });
        self
    }
}

// ============================================================================
// GameTree
// ============================================================================

pub struct GameTreeAssertion<'a> {
    tree: &'a GameTree,
    context: String,
}

impl<'a> GameTreeAssertion<'a> {
    /// Assert the number of nodes in the tree's own sequence
    pub fn node_count(self, expected: usize) -> Self {
        let actual = self.tree.sequence().len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} nodes in sequence, found {}",
            self.context, expected, actual
        );
        self
    }

    /// Assert the number of variations (child game trees)
    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.tree.children().len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} children, found {}",
            self.context, expected, actual
        );
        self
    }

    /// Assert the tree has no variations
    pub fn is_leaf(self) -> Self {
        self.child_count(0)
    }

    /// Assert on a node of the sequence by index
    pub fn node<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let sequence = self.tree.sequence();
        assert!(
            index < sequence.len(),
            "{}: Node index {} out of bounds (sequence has {} nodes)",
            self.context,
            index,
            sequence.len()
        );
        assertion(NodeAssertion {
            node: &sequence[index],
            context: format!("{}.sequence[{}]", self.context, index),
        });
        self
    }

    /// Assert on a child game tree by index
    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(GameTreeAssertion<'a>),
    {
        let children = self.tree.children();
        assert!(
            index < children.len(),
            "{}: Child index {} out of bounds (tree has {} children)",
            self.context,
            index,
            children.len()
        );
        assertion(GameTreeAssertion {
            tree: &children[index],
            context: format!("{}.children[{}]", self.context, index),
        });
        self
    }
}

// ============================================================================
// Node
// ============================================================================

pub struct NodeAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    /// Assert the number of properties
    pub fn property_count(self, expected: usize) -> Self {
        let actual = self.node.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} properties, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize_properties(self.node.properties())
        );
        self
    }

    /// Assert the property at `index` has exactly this identifier and these values
    pub fn property(self, index: usize, identifier: &str, values: &[&str]) -> Self {
        let properties = self.node.properties();
        assert!(
            index < properties.len(),
            "{}: Property index {} out of bounds (node is [{}])",
            self.context,
            index,
            summarize_properties(properties)
        );
        let actual = &properties[index];
        assert_eq!(
            actual,
            &Property::from_strs(identifier, values),
            "{}.properties[{}]: unexpected property",
            self.context,
            index
        );
        self
    }

    /// Assert the node carries a property with this identifier
    pub fn has(self, identifier: &str) -> Self {
        assert!(
            self.node.get(identifier).is_some(),
            "{}: Expected a {} property, node is [{}]",
            self.context,
            identifier,
            summarize_properties(self.node.properties())
        );
        self
    }
}
