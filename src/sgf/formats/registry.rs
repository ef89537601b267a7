//! Format registry for collection output
//!
//! Each format implements the `Formatter` trait and is registered with `FormatRegistry` under
//! its name.

use crate::sgf::ast::{Collection, SnapshotOptions};
use crate::sgf::config::InspectConfig;
use std::collections::HashMap;
use thiserror::Error;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Trait for collection formatters
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "treeviz", "json")
    fn name(&self) -> &str;

    fn serialize(&self, collection: &Collection) -> Result<String, FormatError>;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }
}

pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter
    ///
    /// If a formatter with the same name already exists, it will be replaced.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Serialize a collection using the specified format
    pub fn serialize(&self, collection: &Collection, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(collection)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with default formatters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(super::TreevizFormatter::default());
        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);
        registry
    }

    /// Default formatters, with treeviz tuned by the inspect configuration.
    pub fn from_config(config: &InspectConfig) -> Self {
        let mut registry = Self::with_defaults();
        registry.register(super::TreevizFormatter {
            options: SnapshotOptions {
                show_values: config.show_values,
            },
            max_label_chars: config.max_label_chars,
        });
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sgf::parsing::parse_collection;

    // Test formatter
    struct TestFormatter;
    impl Formatter for TestFormatter {
        fn name(&self) -> &str {
            "test"
        }
        fn serialize(&self, _collection: &Collection) -> Result<String, FormatError> {
            Ok("test output".to_string())
        }
        fn description(&self) -> &str {
            "Test formatter"
        }
    }

    #[test]
    fn test_registry_register() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormatter);

        assert!(registry.has("test"));
        assert_eq!(registry.list_formats(), vec!["test"]);
        assert_eq!(registry.get("test").unwrap().description(), "Test formatter");
    }

    #[test]
    fn test_defaults() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(registry.list_formats(), vec!["json", "treeviz", "yaml"]);
    }

    #[test]
    fn test_unknown_format() {
        let registry = FormatRegistry::with_defaults();
        let collection = parse_collection("(;GM[1])").unwrap();
        assert_eq!(
            registry.serialize(&collection, "sgf"),
            Err(FormatError::FormatNotFound("sgf".to_string()))
        );
    }

    #[test]
    fn test_from_config_hides_values() {
        let config = InspectConfig {
            format: "treeviz".to_string(),
            max_label_chars: 30,
            show_values: false,
        };
        let registry = FormatRegistry::from_config(&config);
        let collection = parse_collection("(;GM[1])").unwrap();
        let output = registry.serialize(&collection, "treeviz").unwrap();
        assert!(output.ends_with("└─ ◦ GM\n"), "{output}");
    }
}
