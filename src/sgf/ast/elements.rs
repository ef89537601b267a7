//! Element types of the parsed tree.
//!
//!     Leaves first:
//!         - [Property](property::Property): identifier plus ordered raw values.
//!         - [Node](node::Node): ordered properties of one `;` step.
//!         - [GameTree](game_tree::GameTree): main line sequence plus variations.
//!         - [Collection](collection::Collection): the root game trees of one source.
//!
//!     Order is significant everywhere: it is the move order of the game record, so every
//!     list keeps insertion order and nothing is merged or sorted.

pub mod collection;
pub mod game_tree;
pub mod node;
pub mod property;

pub use collection::Collection;
pub use game_tree::GameTree;
pub use node::Node;
pub use property::Property;
