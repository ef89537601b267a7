//! Matcher Pattern Definitions
//!
//! The patterns are composed bottom-up: the property pattern embeds the value pattern, the node
//! pattern embeds the property pattern, and the tree boundary pattern embeds the node pattern.
//!
//! # Values
//!
//! A value runs from `[` to the first `]` whose preceding character is not a backslash. Only
//! that one preceding character counts: `[a\\]b]` is the single value `a\\]b`. Backslashes
//! are kept verbatim in the captured text, decoding them is left to whoever interprets the
//! value.

use once_cell::sync::Lazy;
use regex::Regex;

/// Value content: backslash runs are always followed by a character, so the content never
/// ends in `\` and a `]` can only appear right after one.
const VALUE_CONTENT: &str = r"(?:[^\\\]]|\\+[^\\])*";


/// Property identifiers as found in the wild: one or more letters.
const IDENTIFIER: &str = r"[A-Za-z]+";

/// A bracketed value, without capture groups. Used to compose the larger patterns.
fn value_pattern() -> String {
    format!(r"\[{VALUE_CONTENT}\]")
}

fn property_pattern() -> String {
    format!(r"{IDENTIFIER}(?:\s*{})+", value_pattern())
}

fn node_pattern() -> String {
    format!(r";(?:\s*{})+", property_pattern())
}

/// Leading whitespace, then a value. Group 1 is the value content without brackets.
static VALUE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"\s*\[({VALUE_CONTENT})\]")).unwrap());

/// Identifier and values. Group 1 is the leading letter run, group 2 the value groups.
static PROPERTY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"({IDENTIFIER})((?:\s*{})+)", value_pattern())).unwrap()
});

/// A single node, including its leading `;`.
static NODE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(&node_pattern()).unwrap());

/// Group 1 is the node sequence, group 2 the paren that follows it.
static TREE_BOUNDARY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\(\s*((?:\s*{})+)\s*([()])", node_pattern())).unwrap()
});

/// The grammar levels the cursor can match at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    Value,
    Property,
    Node,
    TreeBoundary,
}

impl Matcher {
    /// The compiled regex for this grammar level.
    pub fn regex(self) -> &'static Regex {
        match self {
            Matcher::Value => &VALUE_REGEX,
            Matcher::Property => &PROPERTY_REGEX,
            Matcher::Node => &NODE_REGEX,
            Matcher::TreeBoundary => &TREE_BOUNDARY_REGEX,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Matcher::Value => "value",
            Matcher::Property => "property",
            Matcher::Node => "node",
            Matcher::TreeBoundary => "tree-boundary",
        }
    }
}
