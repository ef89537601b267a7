//! Property parsing: identifier split plus value list.

use super::identifier::split_identifier;
use super::values::parse_values;
use crate::sgf::ast::Property;

/// Parse the text of one property match, e.g. `TB[as][bs]`.
///
/// Returns `None` when the text has no identifier or no value.
pub fn parse_property(text: &str) -> Option<Property> {
    let split = split_identifier(text);
    if split.identifier.is_empty() {
        return None;
    }
    let values = parse_values(split.remainder);
    if values.is_empty() {
        return None;
    }
    Some(Property::new(split.identifier, values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_property() {
        assert_eq!(
            parse_property("TB[as][bs]"),
            Some(Property::from_strs("TB", &["as", "bs"]))
        );
    }

    #[test]
    fn test_missing_parts() {
        assert_eq!(parse_property("[as]"), None);
        assert_eq!(parse_property("TB"), None);
    }
}
