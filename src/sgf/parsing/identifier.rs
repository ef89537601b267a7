//! Property identifier splitting
//!
//!     A property match is the identifier run immediately followed by its values, e.g.
//!     `AW[ja][oa]`. The identifier is one or two characters long, decided by the second
//!     character of the run alone:
//!
//!         second char in B..=Y   two-character identifier     `AW[ja]`  -> `AW`
//!         anything else          one-character identifier     `B[pq]`   -> `B`
//!
//!     The range is exclusive of both `A` and `Z`: `AZ[..]` splits as `A`. Longer runs keep only
//!     their first one or two characters (`ABC[..]` -> `AB`), and lowercase-style identifiers from
//!     old files keep only their first letter (`AddBlack[..]` -> `A`).
//!
//!     The remainder always starts at the first `[` so the value list parser sees bracket groups
//!     only.

/// The two halves of a property match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentifierSplit<'a> {
    pub identifier: &'a str,
    /// Text from the first `[` on (empty if there is none)
    pub remainder: &'a str,
}

pub fn split_identifier(text: &str) -> IdentifierSplit<'_> {
    let text = text.trim_start();
    let first_end = text.chars().next().map_or(0, char::len_utf8);
    let identifier_end = match text[first_end..].chars().next() {
        Some('B'..='Y') => first_end + 1,
        _ => first_end,
    };

    let remainder_start = text.find('[').unwrap_or(text.len());
    IdentifierSplit {
        identifier: &text[..identifier_end.min(remainder_start)],
        remainder: &text[remainder_start..],
    }
}
