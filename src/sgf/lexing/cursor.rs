//! Explicit scan position over SGF source text.
//!
//! A [Cursor] pairs the input with a byte offset. Searching never moves the cursor by itself:
//! callers either [peek](Cursor::peek) and then [advance_to](Cursor::advance_to) an offset of
//! their choosing, or use [next_match](Cursor::next_match) which advances past the match.

use super::matchers::Matcher;

/// A captured span of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capture<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

/// A successful match: the whole matched span plus its capture groups.
///
/// Offsets are relative to the full cursor input, not to the position the search started at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<'a> {
    pub whole: Capture<'a>,
    groups: Vec<Option<Capture<'a>>>,
}

impl<'a> Match<'a> {
    /// Capture group by regex index (1-based; 0 is the whole match).
    pub fn group(&self, index: usize) -> Option<Capture<'a>> {
        if index == 0 {
            return Some(self.whole);
        }
        self.groups.get(index - 1).copied().flatten()
    }

    pub fn text(&self) -> &'a str {
        self.whole.text
    }

    pub fn start(&self) -> usize {
        self.whole.start
    }

    pub fn end(&self) -> usize {
        self.whole.end
    }
}

#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, offset: 0 }
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The unscanned part of the input.
    pub fn rest(&self) -> &'a str {
        &self.input[self.offset..]
    }

    pub fn is_at_end(&self) -> bool {
        self.offset >= self.input.len()
    }

    /// Find the next match at or after the current offset without moving the cursor.
    pub fn peek(&self, matcher: Matcher) -> Option<Match<'a>> {
        if self.offset > self.input.len() {
            return None;
        }
        let caps = matcher.regex().captures_at(self.input, self.offset)?;
        let to_capture = |m: regex::Match<'a>| Capture {
            text: m.as_str(),
            start: m.start(),
            end: m.end(),
        };
        let whole = caps.get(0).map(to_capture)?;
        let groups = (1..caps.len())
            .map(|i| caps.get(i).map(to_capture))
            .collect();
        Some(Match { whole, groups })
    }

    /// Move the cursor forward. Offsets behind the current position are ignored.
    ///
    /// The offset must lie on a char boundary; offsets taken from a [Match] always do.
    pub fn advance_to(&mut self, offset: usize) {
        if offset > self.offset {
            self.offset = offset.min(self.input.len());
        }
    }

    /// Find the next match and advance the cursor to its end.
    pub fn next_match(&mut self, matcher: Matcher) -> Option<Match<'a>> {
        let found = self.peek(matcher)?;
        tracing::trace!(
            matcher = matcher.name(),
            start = found.start(),
            end = found.end(),
            "match"
        );
        self.advance_to(found.end());
        Some(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_match_advances_past_match() {
        let mut cursor = Cursor::new("[a] [b]");
        let first = cursor.next_match(Matcher::Value).unwrap();
        assert_eq!(first.group(1).unwrap().text, "a");
        assert_eq!(cursor.offset(), 3);
        assert_eq!(cursor.rest(), " [b]");

        let second = cursor.next_match(Matcher::Value).unwrap();
        assert_eq!(second.group(1).unwrap().text, "b");
        assert!(cursor.is_at_end());
        assert!(cursor.next_match(Matcher::Value).is_none());
    }

    #[test]
    fn test_peek_does_not_move() {
        let cursor = Cursor::new("xx[a]");
        let found = cursor.peek(Matcher::Value).unwrap();
        assert_eq!(found.start(), 2);
        assert_eq!(found.end(), 5);
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_offsets_are_absolute() {
        let mut cursor = Cursor::new("(;A[1])(;B[2])");
        cursor.advance_to(7);
        let found = cursor.peek(Matcher::TreeBoundary).unwrap();
        let sequence = found.group(1).unwrap();
        assert_eq!(sequence.text, ";B[2]");
        assert_eq!(sequence.start, 8);
        assert_eq!(found.group(2).unwrap().text, ")");
        assert!(found.group(3).is_none());
    }

    #[test]
    fn test_advance_never_moves_backwards() {
        let mut cursor = Cursor::new("abcdef");
        cursor.advance_to(4);
        cursor.advance_to(2);
        assert_eq!(cursor.offset(), 4);
        cursor.advance_to(100);
        assert_eq!(cursor.offset(), 6);
    }
}
