//! Property value lists
//!
//!     Values are collected by repeatedly matching a bracketed value from the cursor, in order.
//!     Characters between bracket groups are skipped, so `[a] [b]`, `[a]\n[b]` and `[a][b]` all
//!     give `["a", "b"]`.

use crate::sgf::lexing::{Cursor, Matcher};

/// Collect the raw values of a property's value text, in source order.
pub fn parse_values(remainder: &str) -> Vec<String> {
    let mut cursor = Cursor::new(remainder);
    let mut values = Vec::new();
    while let Some(found) = cursor.next_match(Matcher::Value) {
        let content = found.group(1).map(|c| c.text).unwrap_or_default();
        values.push(content.to_string());
    }
    values
}
