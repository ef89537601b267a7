//! Testing utilities for parser assertions
//!
//!     Tests follow two rules:
//!
//!         1. Prefer the curated sample files in `tests/fixtures/` (via [fixture]) over SGF
//!            strings made up inside a test. Short inline strings are fine for the lexical
//!            level (a value, a property), but whole games belong in fixtures so they can be
//!            checked once against real SGF editors.
//!         2. Check parsed trees with the fluent assertions (via [assert_collection]) instead of
//!            digging through accessors by hand; failures then report which tree, node and
//!            property was wrong.
//!
//!     Example:
//!
//!     ```rust,ignore
//!     use sgf::sgf::parsing::parse_collection;
//!     use sgf::sgf::testing::{assert_collection, fixture};
//!
//!     let collection = parse_collection(&fixture("variations.sgf")).unwrap();
//!     assert_collection(&collection).tree_count(1).tree(0, |tree| {
//!         tree.node_count(2).child_count(3).node(0, |node| {
//!             node.property(0, "GM", &["1"]);
//!         });
//!     });
//!     ```

mod ast_assertions;

pub use ast_assertions::{assert_collection, CollectionAssertion, GameTreeAssertion, NodeAssertion};

use std::path::PathBuf;

/// Absolute path of a file relative to the crate root.
pub fn workspace_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

/// Source text of a curated sample from `tests/fixtures/`.
///
/// Panics if the fixture does not exist: a missing fixture is a broken test.
pub fn fixture(name: &str) -> String {
    let path = workspace_path("tests/fixtures").join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}
