//! Node element
//!
//!     A node is one step of the game record: a `;` followed by its properties.
//!
//!         ;B[pq]C[A good move]
//!
//!     Properties keep source order. A node may carry the same identifier more than once; each
//!     occurrence stays a separate property.

use super::super::traits::AstNode;
use super::property::Property;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Node {
    properties: Vec<Property>,
}

impl Node {
    pub fn new(properties: Vec<Property>) -> Self {
        Self { properties }
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// The first property with the given identifier.
    pub fn get(&self, identifier: &str) -> Option<&Property> {
        self.properties
            .iter()
            .find(|property| property.identifier() == identifier)
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }
}

impl AstNode for Node {
    fn node_type(&self) -> &'static str {
        "Node"
    }

    fn display_label(&self) -> String {
        self.properties
            .iter()
            .map(Property::identifier)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_returns_first_occurrence() {
        let node = Node::new(vec![
            Property::from_strs("B", &["pq"]),
            Property::from_strs("B", &["dd"]),
        ]);
        assert_eq!(node.len(), 2);
        assert_eq!(node.get("B").and_then(Property::value), Some("pq"));
        assert!(node.get("W").is_none());
    }

    #[test]
    fn test_display_label_lists_identifiers() {
        let node = Node::new(vec![
            Property::from_strs("GM", &["1"]),
            Property::from_strs("SZ", &["19"]),
        ]);
        assert_eq!(node.display_label(), "GM SZ");
    }
}
