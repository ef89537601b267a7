//! AST definitions for SGF
//!
//!     The parsed tree mirrors the SGF grammar exactly, one type per grammar rule:
//!
//!         Collection = GameTree { GameTree }
//!         GameTree   = "(" Sequence { GameTree } ")"
//!         Sequence   = Node { Node }
//!         Node       = ";" { Property }
//!         Property   = PropIdent PropValue { PropValue }
//!
//!     Ownership is a strict tree: a Collection owns its GameTrees, which own their Nodes and
//!     child GameTrees, which own Properties, which own their raw values. There are no back
//!     references and nothing is shared.
//!
//! Read Only
//!
//!     The tree is built once by the parser and never changed afterwards. Fields are private and
//!     only exposed through borrowing accessors, so consumers (board rendering, navigation,
//!     coordinate decoding) cannot alter what was parsed.
//!
//! Raw Values
//!
//!     Property values are stored as the exact text between the brackets. Escapes are not
//!     decoded and composed values (`a:b`) are not split; see [Property](elements::Property).

pub mod elements;
pub mod snapshot;
pub mod traits;

pub use elements::{Collection, GameTree, Node, Property};
pub use snapshot::{snapshot_from_collection, AstSnapshot, SnapshotOptions};
pub use traits::AstNode;
