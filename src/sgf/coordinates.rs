//! Board coordinate letters
//!
//!     Point and Move values are pairs of letters, column first: `a`..`z` are 0 to 25 and
//!     `A`..`Z` continue with 26 to 51 for boards larger than 26 lines.
//!
//!     The parser never calls this: values stay raw text in the tree. It is the starting point
//!     for a board coordinate layer on top of the parsed tree.

/// Offset of a coordinate letter, or `None` for anything that is not an ASCII letter.
pub fn decode_letter(letter: char) -> Option<u8> {
    match letter {
        'a'..='z' => Some(letter as u8 - b'a'),
        'A'..='Z' => Some(letter as u8 - b'A' + 26),
        _ => None,
    }
}
