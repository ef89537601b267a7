//! Output formats for inspecting a parsed collection
//!
//! These render the parsed tree for humans and tools; none of them writes SGF back.
//! - treeviz: one line per element, indented tree with icons
//! - json / yaml: the Collection model through serde

pub mod registry;
pub mod serialized;
pub mod treeviz;

pub use registry::{FormatError, FormatRegistry, Formatter};
pub use serialized::{JsonFormatter, YamlFormatter};
pub use treeviz::{to_treeviz_str, to_treeviz_str_with_options, TreevizFormatter};
