//! Collection Assembler
//!
//!     The assembler builds nested GameTrees from a single left-to-right scan over tree
//!     boundaries. There is no recursive descent: every boundary match is one step of a fold.
//!
//! Boundaries
//!
//!     A boundary is `(`, a node sequence, and the paren that follows it:
//!
//!         (;GM[1];B[pd](;W[dd])(;W[dp]))
//!         ^^^^^^^^^^^^^(                   boundary 1: ";GM[1];B[pd]", trailing `(`
//!                      ^^^^^^^)            boundary 2: ";W[dd]", trailing `)`
//!                              ^^^^^^^)    boundary 3: ";W[dp]", trailing `)`
//!
//!     The scan resumes right after the node sequence, so a trailing `(` starts the next
//!     boundary. Whatever lies between one sequence and the next boundary (the gap) is only
//!     inspected for parens outside values. Each `)` closes the innermost open entry; each `(`
//!     belongs to a tree that did not match and opens a placeholder, so its own `)` later
//!     closes nothing real, even when that `)` sits in a later gap.
//!
//! The Fold
//!
//!     The fold state ([TreeFold]) is an explicit value threaded through the scan:
//!
//!         open        stack of trees (and placeholders) whose `)` has not been seen yet
//!         roots       closed trees with nothing enclosing them, in order
//!         continues   whether the previous boundary ended in `(`
//!
//!     Each step first replays the gap's parens, then opens a tree for the new sequence. A closed
//!     tree becomes the last child of the nearest tree below it on the stack, or a root when
//!     there is none. With `continues` set, the new tree is the first child of the
//!     tree just opened; otherwise it follows the trees closed before it. Either way any run of
//!     `(...)` blocks after a sequence ends up as that tree's children, in source order, for any
//!     number of siblings and any depth.
//!
//!     Trees still open at the end of the input are closed implicitly, so truncated input gives
//!     the trees parsed so far.

use super::node::parse_properties;
use crate::sgf::ast::{GameTree, Node};
use crate::sgf::lexing::{Cursor, Matcher};

/// One tree boundary found by the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary<'a> {
    /// Text between the previous node sequence (or the input start) and this boundary's `(`
    pub gap: &'a str,
    /// The node sequence text, starting with `;`
    pub sequence: &'a str,
    /// `(` or `)`
    pub trailing: char,
    /// Byte offset of this boundary's `(`
    pub offset: usize,
}

/// Iterator over the tree boundaries of a source, left to right.
pub struct BoundaryScan<'a> {
    cursor: Cursor<'a>,
}

impl<'a> BoundaryScan<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// The text after the last node sequence returned so far.
    pub fn remainder(&self) -> &'a str {
        self.cursor.rest()
    }
}

impl<'a> Iterator for BoundaryScan<'a> {
    type Item = Boundary<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let found = self.cursor.peek(Matcher::TreeBoundary)?;
        let sequence = found.group(1)?;
        let trailing = found.group(2)?.text.chars().next()?;
        let gap = &self.cursor.input()[self.cursor.offset()..found.start()];
        self.cursor.advance_to(sequence.end);
        Some(Boundary {
            gap,
            sequence: sequence.text,
            trailing,
            offset: found.start(),
        })
    }
}

#[derive(Debug)]
struct OpenTree {
    sequence: Vec<Node>,
    children: Vec<GameTree>,
}

/// An entry of the open stack.
#[derive(Debug)]
enum Open {
    Tree(OpenTree),
    /// A `(` whose tree did not match. Its `)` pops it without closing a real tree.
    Skipped,
}

/// Fold state of the assembler.
#[derive(Debug, Default)]
pub struct TreeFold {
    open: Vec<Open>,
    roots: Vec<GameTree>,
    continues: bool,
}

impl TreeFold {
    /// Apply one boundary: replay the gap's parens, then open the boundary's tree.
    pub fn step(self, boundary: Boundary<'_>) -> Self {
        if boundary.gap.chars().any(|c| !c.is_whitespace() && c != ')') {
            tracing::warn!(
                offset = boundary.offset,
                skipped = boundary.gap.trim(),
                "skipping text that is not a game tree"
            );
        }
        self.replay(boundary.gap)
            .open(parse_properties(boundary.sequence), boundary.trailing)
    }

    fn open(mut self, sequence: Vec<Node>, trailing: char) -> Self {
        tracing::debug!(
            depth = self.open.len(),
            nodes = sequence.len(),
            nested = self.continues,
            trailing = %trailing,
            "game tree"
        );
        self.open.push(Open::Tree(OpenTree {
            sequence,
            children: Vec::new(),
        }));
        self.continues = trailing == '(';
        self
    }

    /// Apply the parens of text lying outside any matched tree.
    fn replay(mut self, text: &str) -> Self {
        for paren in parens_outside_values(text) {
            if paren == '(' {
                self.open.push(Open::Skipped);
            } else {
                self.close_innermost();
            }
        }
        self
    }

    /// Pop the innermost open entry. A closed tree becomes the last child of the nearest
    /// enclosing tree, or a root when nothing encloses it.
    fn close_innermost(&mut self) {
        let Some(Open::Tree(done)) = self.open.pop() else {
            return;
        };
        let tree = GameTree::new(done.sequence, done.children);
        let parent = self.open.iter_mut().rev().find_map(|entry| match entry {
            Open::Tree(parent) => Some(parent),
            Open::Skipped => None,
        });
        match parent {
            Some(parent) => parent.children.push(tree),
            None => self.roots.push(tree),
        }
    }

    /// Replay the trailing text, then close any tree left open.
    pub fn finish(self, trailing: &str) -> Vec<GameTree> {
        let mut fold = self.replay(trailing);
        let unclosed = fold
            .open
            .iter()
            .filter(|entry| matches!(entry, Open::Tree(_)))
            .count();
        if unclosed > 0 {
            tracing::warn!(unclosed, "input ended inside a game tree; closing it implicitly");
        }
        while !fold.open.is_empty() {
            fold.close_innermost();
        }
        fold.roots
    }
}

/// The `(` and `)` of `text` that lie outside bracketed values, in order.
///
/// A `]` right after a backslash does not end a value, as in the value matcher.
fn parens_outside_values(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars()
        .scan((false, false), |(in_value, after_backslash), c| {
            let paren = if *in_value {
                if c == ']' && !*after_backslash {
                    *in_value = false;
                }
                None
            } else {
                match c {
                    '[' => {
                        *in_value = true;
                        None
                    }
                    '(' | ')' => Some(c),
                    _ => None,
                }
            };
            *after_backslash = c == '\\';
            Some(paren)
        })
        .flatten()
}

/// Scan `source` and fold its tree boundaries into root GameTrees.
pub fn assemble(source: &str) -> Vec<GameTree> {
    let mut scan = BoundaryScan::new(source);
    let fold = scan.by_ref().fold(TreeFold::default(), TreeFold::step);
    fold.finish(scan.remainder())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sgf::ast::Property;

    fn first_value(tree: &GameTree) -> String {
        let property = &tree.sequence()[0].properties()[0];
        format!("{}{}", property.identifier(), property.values()[0])
    }

    #[test]
    fn test_scan_resumes_at_trailing_open_paren() {
        let boundaries: Vec<_> = BoundaryScan::new("(;P[1](;Q[2]))").collect();
        assert_eq!(boundaries.len(), 2);
        assert_eq!(boundaries[0].sequence, ";P[1]");
        assert_eq!(boundaries[0].trailing, '(');
        assert_eq!(boundaries[1].gap, "");
        assert_eq!(boundaries[1].sequence, ";Q[2]");
        assert_eq!(boundaries[1].trailing, ')');
    }

    #[test]
    fn test_single_child() {
        let trees = assemble("(;P[1](;Q[2]))");
        assert_eq!(trees.len(), 1);
        assert_eq!(trees[0].sequence().len(), 1);
        assert_eq!(trees[0].children().len(), 1);
        let child = &trees[0].children()[0];
        assert_eq!(child.sequence(), [Node::new(vec![Property::from_strs("Q", &["2"])])]);
        assert!(child.children().is_empty());
    }

    #[test]
    fn test_flat_sequence() {
        let trees = assemble("(;P[1];Q[2])");
        assert_eq!(trees.len(), 1);
        assert_eq!(trees[0].sequence().len(), 2);
        assert!(trees[0].children().is_empty());
    }

    #[test]
    fn test_sibling_root_trees() {
        let trees = assemble("(;A[1])\n(;B[2])\n(;C[3])");
        let labels: Vec<_> = trees.iter().map(first_value).collect();
        assert_eq!(labels, ["A1", "B2", "C3"]);
    }

    #[test]
    fn test_three_sibling_variations() {
        let trees = assemble("(;R[0](;A[1])(;B[2])(;C[3]))");
        assert_eq!(trees.len(), 1);
        let labels: Vec<_> = trees[0].children().iter().map(first_value).collect();
        assert_eq!(labels, ["A1", "B2", "C3"]);
        assert!(trees[0].children().iter().all(|c| c.children().is_empty()));
    }

    #[test]
    fn test_deep_nesting_then_sibling() {
        let trees = assemble("(;R[0](;A[1](;A[2](;A[3])))(;B[1]))");
        assert_eq!(trees.len(), 1);
        let root = &trees[0];
        assert_eq!(root.children().len(), 2);
        assert_eq!(root.depth(), 4);
        assert_eq!(first_value(&root.children()[1]), "B1");
        let a3 = &root.children()[0].children()[0].children()[0];
        assert_eq!(first_value(a3), "A3");
    }

    #[test]
    fn test_unclosed_trees_are_closed_at_end() {
        let trees = assemble("(;R[0](;A[1](;A[2]);B[oops");
        assert_eq!(trees.len(), 1);
        assert_eq!(trees[0].children().len(), 1);
        assert_eq!(trees[0].children()[0].children().len(), 1);
    }

    #[test]
    fn test_unparsable_variation_is_skipped() {
        let trees = assemble("(;R[0](;)(;B[1]))(;S[0])");
        assert_eq!(trees.len(), 2);
        assert_eq!(trees[0].children().len(), 1);
        assert_eq!(first_value(&trees[0].children()[0]), "B1");
        assert_eq!(first_value(&trees[1]), "S0");
    }

    #[test]
    fn test_no_trees() {
        assert!(assemble("").is_empty());
        assert!(assemble("just text").is_empty());
    }

    #[test]
    fn test_variation_with_empty_node_keeps_siblings_together() {
        let trees = assemble("(;R[0](;(;Y[2]))(;Z[3]))");
        assert_eq!(trees.len(), 1);
        let labels: Vec<_> = trees[0].children().iter().map(first_value).collect();
        assert_eq!(labels, ["Y2", "Z3"]);
    }

    #[test]
    fn test_skipped_open_paren_at_end_of_input() {
        let trees = assemble("(;R[0](;A[1])(;");
        assert_eq!(trees.len(), 1);
        assert_eq!(trees[0].children().len(), 1);
    }

    #[test]
    fn test_parens_outside_values() {
        let parens = |text: &str| parens_outside_values(text).collect::<String>();
        assert_eq!(parens(" ) )\n"), "))");
        assert_eq!(parens("(;)"), "()");
        assert_eq!(parens("[a)b] )"), ")");
        assert_eq!(parens(r"[a\])] )"), ")");
        assert_eq!(parens(r"[a\\])] )"), ")");
    }
}
