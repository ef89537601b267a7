//! Parse errors

use thiserror::Error;

/// Errors that can occur while parsing SGF source text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No game tree could be matched anywhere in the source
    #[error("no game tree found: expected `(` followed by at least one node such as `(;GM[1])`")]
    EmptyCollection,
}
