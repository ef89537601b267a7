//! Node parsing
//!
//!     A node sequence captured by the tree boundary matcher, e.g. `;GM[1]SZ[19];B[pq]`, is
//!     re-scanned with the node matcher; each node body is then re-scanned with the property
//!     matcher. Both scans run left to right, so nodes and properties keep source order and
//!     repeated identifiers stay separate.

use super::property::parse_property;
use crate::sgf::ast::{Node, Property};
use crate::sgf::lexing::{Cursor, Matcher};

/// Parse a node sequence into its nodes, in order.
pub fn parse_properties(sequence: &str) -> Vec<Node> {
    let mut cursor = Cursor::new(sequence);
    let mut nodes = Vec::new();
    while let Some(found) = cursor.next_match(Matcher::Node) {
        let body = found.text().strip_prefix(';').unwrap_or(found.text());
        let node = Node::new(parse_properties_text(body));
        tracing::trace!(offset = found.start(), properties = node.len(), "node");
        nodes.push(node);
    }
    nodes
}

/// Parse the properties within one node body (the text after its `;`).
pub fn parse_properties_text(body: &str) -> Vec<Property> {
    let mut cursor = Cursor::new(body);
    let mut properties = Vec::new();
    while let Some(found) = cursor.next_match(Matcher::Property) {
        properties.extend(parse_property(found.text()));
    }
    properties
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_move() {
        let nodes = parse_properties(";B[pq]");
        assert_eq!(nodes, vec![Node::new(vec![Property::from_strs("B", &["pq"])])]);
    }

    #[test]
    fn test_two_letter_identifier() {
        let nodes = parse_properties(";GM[1]");
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].properties(), [Property::from_strs("GM", &["1"])]);
    }

    #[test]
    fn test_duplicates_are_not_merged() {
        assert_eq!(
            parse_properties_text("GM[1]\nB[pq]\tB[pq]"),
            vec![
                Property::from_strs("GM", &["1"]),
                Property::from_strs("B", &["pq"]),
                Property::from_strs("B", &["pq"]),
            ]
        );
    }

    #[test]
    fn test_multi_value_property() {
        let properties = parse_properties_text("TB[as][bs][cq][cr][ds][ep]");
        assert_eq!(properties.len(), 1);
        assert_eq!(properties[0].values().len(), 6);
    }

    #[test]
    fn test_ten_nodes_in_order() {
        let nodes = parse_properties(
            ";B[pq];W[dd];B[pc];W[eq];B[cp];W[cm];B[do];W[hq];B[qn];W[cj]",
        );
        assert_eq!(nodes.len(), 10);
        assert_eq!(nodes[0], Node::new(vec![Property::from_strs("B", &["pq"])]));
        assert_eq!(nodes[9], Node::new(vec![Property::from_strs("W", &["cj"])]));
    }

    #[test]
    fn test_value_groups_split_across_lines() {
        let nodes = parse_properties(";AB[aa]AW[ja][oa]\n[pa][db][eb]");
        assert_eq!(nodes.len(), 1);
        let properties = nodes[0].properties();
        assert_eq!(properties.len(), 2);
        assert_eq!(properties[1].identifier(), "AW");
        assert_eq!(properties[1].values(), ["ja", "oa", "pa", "db", "eb"]);
    }

    #[test]
    fn test_semicolon_inside_value_does_not_split_node() {
        let nodes = parse_properties(";C[one; two];B[aa]");
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].get("C").and_then(Property::value), Some("one; two"));
    }
}
