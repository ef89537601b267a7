//! Treeviz formatter for parsed collections
//!
//! Treeviz is a visual representation of the parsed tree with one line per element, which makes
//! long game records quick to scan. Nesting is shown with box drawing connectors, 2 columns per
//! level.
//!
//! So the format is :
//! <prefix><connector> <icon> <label> (label truncated to the configured width)
//!
//! Example:
//!
//! ⧉ 1 game tree
//! └─ ⑂ 2 nodes, 2 variations
//!   ├─ ● GM SZ
//!   │ ├─ ◦ GM[1]
//!   │ └─ ◦ SZ[19]
//!   ├─ ● B
//!   │ └─ ◦ B[pd]
//!   ├─ ⑂ 1 node
//!   ...
//!
//! Icons
//!     Collection: ⧉
//!     GameTree: ⑂
//!     Node: ●
//!     Property: ◦

use super::registry::{FormatError, Formatter};
use crate::sgf::ast::{snapshot_from_collection, AstSnapshot, Collection, SnapshotOptions};

pub const DEFAULT_MAX_LABEL_CHARS: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

/// Get the icon for a node type
fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Collection" => "⧉",
        "GameTree" => "⑂",
        "Node" => "●",
        "Property" => "◦",
        _ => "○",
    }
}

/// Build treeviz output from an AstSnapshot
fn format_snapshot(
    snapshot: &AstSnapshot,
    prefix: &str,
    is_last: bool,
    max_label_chars: usize,
    output: &mut String,
) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        get_icon(&snapshot.node_type),
        truncate(&snapshot.label, max_label_chars)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    format_children(&snapshot.children, &child_prefix, max_label_chars, output);
}

fn format_children(
    children: &[AstSnapshot],
    prefix: &str,
    max_label_chars: usize,
    output: &mut String,
) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i + 1 == children.len();
        format_snapshot(child, prefix, is_last, max_label_chars, output);
    }
}

pub fn to_treeviz_str(collection: &Collection) -> String {
    to_treeviz_str_with_options(
        collection,
        SnapshotOptions::default(),
        DEFAULT_MAX_LABEL_CHARS,
    )
}

pub fn to_treeviz_str_with_options(
    collection: &Collection,
    options: SnapshotOptions,
    max_label_chars: usize,
) -> String {
    let snapshot = snapshot_from_collection(collection, options);
    let mut output = format!(
        "{} {}\n",
        get_icon(&snapshot.node_type),
        truncate(&snapshot.label, max_label_chars)
    );
    format_children(&snapshot.children, "", max_label_chars, &mut output);
    output
}

/// Formatter implementation for treeviz format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreevizFormatter {
    pub options: SnapshotOptions,
    pub max_label_chars: usize,
}

impl Default for TreevizFormatter {
    fn default() -> Self {
        Self {
            options: SnapshotOptions::default(),
            max_label_chars: DEFAULT_MAX_LABEL_CHARS,
        }
    }
}

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, collection: &Collection) -> Result<String, FormatError> {
        Ok(to_treeviz_str_with_options(
            collection,
            self.options,
            self.max_label_chars,
        ))
    }

    fn description(&self) -> &str {
        "Visual tree representation with indentation and Unicode icons"
    }
}
