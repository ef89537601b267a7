//! JSON and YAML renderings of the Collection model.
//!
//! Field names follow the model: `trees`, `sequence`, `children`, `properties`, `identifier`,
//! `values`.

use super::registry::{FormatError, Formatter};
use crate::sgf::ast::Collection;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, collection: &Collection) -> Result<String, FormatError> {
        serde_json::to_string_pretty(collection)
            .map(|mut json| {
                json.push('\n');
                json
            })
            .map_err(|e| FormatError::Serialization(e.to_string()))
    }

    fn description(&self) -> &str {
        "Pretty printed JSON of the parsed collection"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, collection: &Collection) -> Result<String, FormatError> {
        serde_yaml::to_string(collection).map_err(|e| FormatError::Serialization(e.to_string()))
    }

    fn description(&self) -> &str {
        "YAML of the parsed collection"
    }
}
