//! Property element
//!
//!     A property is an identifier followed by one or more bracketed values:
//!
//!         AB[dd][pd][dp]
//!
//!     Identifiers are one or two uppercase letters (see
//!     [split_identifier](crate::sgf::parsing::split_identifier) for the exact rule). Values are
//!     kept as raw text: brackets stripped, escapes such as `\]` preserved verbatim, composed
//!     values such as `dd:pp` left whole.
//!
//!     The identifier vocabulary is not validated: unknown identifiers parse like any other.

use super::super::traits::AstNode;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Property {
    identifier: String,
    values: Vec<String>,
}

impl Property {
    pub fn new(identifier: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            identifier: identifier.into(),
            values,
        }
    }

    /// Convenience for building expected properties from string literals.
    pub fn from_strs(identifier: &str, values: &[&str]) -> Self {
        Self::new(identifier, values.iter().map(|v| v.to_string()).collect())
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// The first value, which is the only one for most properties.
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier)?;
        for value in &self.values {
            write!(f, "[{}]", value)?;
        }
        Ok(())
    }
}

impl AstNode for Property {
    fn node_type(&self) -> &'static str {
        "Property"
    }

    fn display_label(&self) -> String {
        self.to_string()
    }
}
