//! Parsing module for SGF
//!
//!     This module turns SGF source text into a [Collection]. Data flows strictly upward
//!     through four stages, each one built on the one before:
//!
//!         1. Identifier splitting: cut a property match into identifier and value text.
//!            See [identifier](identifier) module.
//!         2. Value lists: collect the raw bracketed values of a property.
//!            See [values](values) module.
//!         3. Properties and nodes: re-scan a node sequence into Nodes and Properties.
//!            See [property](property) and [node](node) modules.
//!         4. Assembling: scan tree boundaries left to right and fold them into nested
//!            GameTrees. See [assembler](assembler) module.
//!
//! Error Handling
//!
//!     Parsing is lenient. Text that no matcher accepts is skipped and the parse keeps what it
//!     could match: trailing garbage or a truncated file yields the trees that were complete
//!     (or implicitly closed) up to that point. The only parse failure is a source without a
//!     single game tree, since a Collection cannot be empty.
//!
//!     Values are never interpreted, so unknown identifiers or values that do not fit the
//!     property's type are accepted as raw text.

pub mod assembler;
pub mod error;
pub mod identifier;
pub mod node;
pub mod property;
pub mod values;

pub use assembler::assemble;
pub use error::ParseError;
pub use identifier::{split_identifier, IdentifierSplit};
pub use node::{parse_properties, parse_properties_text};
pub use property::parse_property;
pub use values::parse_values;

use crate::sgf::ast::Collection;

/// Parse SGF source text into a [Collection].
///
/// # Example
///
/// ```rust,ignore
/// use sgf::sgf::parsing::parse_collection;
///
/// let collection = parse_collection("(;GM[1];B[pq])")?;
/// assert_eq!(collection.first().sequence().len(), 2);
/// ```
pub fn parse_collection(source: &str) -> Result<Collection, ParseError> {
    let trees = assemble(source);
    let tree_count = trees.len();
    let collection = Collection::new(trees).ok_or(ParseError::EmptyCollection)?;
    tracing::debug!(trees = tree_count, bytes = source.len(), "parsed collection");
    Ok(collection)
}
