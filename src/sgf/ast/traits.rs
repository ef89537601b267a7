//! AST traits - Common interface for uniform node access

/// Uniform access to the bits of information every element exposes to formatters.
pub trait AstNode {
    /// The element kind, e.g. "GameTree" or "Property"
    fn node_type(&self) -> &'static str;

    /// A short human readable summary of the element
    fn display_label(&self) -> String;
}
