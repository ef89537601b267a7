//! Collection element
//!
//!     The root of a parse: the ordered game trees found in one source. An SGF file usually
//!     holds a single game, but several root trees may follow each other:
//!
//!         (;GM[1];B[pd])(;GM[1];B[dd])
//!
//!     A collection always holds at least one game tree; sources without any are rejected by
//!     the parser with [ParseError::EmptyCollection](crate::sgf::parsing::ParseError).

use super::super::traits::AstNode;
use super::game_tree::{plural, GameTree};
use crate::sgf::parsing::{parse_collection, ParseError};
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Collection {
    trees: Vec<GameTree>,
}

impl Collection {
    /// Returns `None` when `trees` is empty.
    pub(crate) fn new(trees: Vec<GameTree>) -> Option<Self> {
        if trees.is_empty() {
            None
        } else {
            Some(Self { trees })
        }
    }

    pub fn trees(&self) -> &[GameTree] {
        &self.trees
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GameTree> {
        self.trees.iter()
    }

    pub fn len(&self) -> usize {
        self.trees.len()
    }

    /// Always false for a parsed collection.
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    pub fn first(&self) -> &GameTree {
        &self.trees[0]
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a GameTree;
    type IntoIter = std::slice::Iter<'a, GameTree>;

    fn into_iter(self) -> Self::IntoIter {
        self.trees.iter()
    }
}

impl FromStr for Collection {
    type Err = ParseError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        parse_collection(source)
    }
}

impl AstNode for Collection {
    fn node_type(&self) -> &'static str {
        "Collection"
    }

    fn display_label(&self) -> String {
        plural(self.trees.len(), "game tree")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_trees_are_rejected() {
        assert!(Collection::new(vec![]).is_none());
    }

    #[test]
    fn test_from_str() {
        let collection: Collection = "(;GM[1])(;GM[1])".parse().unwrap();
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.display_label(), "2 game trees");
        assert_eq!((&collection).into_iter().count(), 2);
    }
}
