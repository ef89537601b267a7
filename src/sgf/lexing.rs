//! Lexing for SGF source text
//!
//!     SGF has no separate token stream worth building: every grammar element is delimited by a
//!     single character (`(`, `)`, `;`, `[`, `]`), so the parser works directly on the source
//!     text with a small set of regex matchers, one per grammar level:
//!
//!         Value         `[` ... `]`            a single bracketed property value
//!         Property      `ID[..][..]`           identifier followed by one or more values
//!         Node          `;ID[..]ID[..]`        semicolon followed by one or more properties
//!         TreeBoundary  `(;..;..` + `(`|`)`    tree start, node sequence, and the next paren
//!
//!     Each matcher is built out of the one below it, so a match at a higher level is always
//!     re-scannable with the lower level matchers (a node match only contains properties, a
//!     property match only contains an identifier and values).
//!
//!     Matching is driven by an explicit [Cursor]: it holds the input and a byte offset, and
//!     every match returns its own text, captures and end offset. No match state is kept
//!     anywhere else, so independent parses never interfere with each other.

pub mod cursor;
pub mod matchers;

pub use cursor::{Capture, Cursor, Match};
pub use matchers::Matcher;
