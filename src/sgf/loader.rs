//! Document loading utilities
//!
//! This module provides [`DocumentLoader`] - a thin shim for getting SGF source text from a
//! file or a string and handing it to the parser. It's used by the command line tool and by
//! tests.
//!
//! Read failures (missing file, permission denied, text that is not UTF-8) are returned as the
//! underlying `std::io::Error`, unchanged; there are no retries.
//!
//! # Example
//!
//! ```rust,ignore
//! use sgf::sgf::loader::DocumentLoader;
//!
//! let collection = DocumentLoader::from_path("game.sgf")?.parse()?;
//! let collection = DocumentLoader::from_string("(;GM[1];B[pq])").parse()?;
//! ```

use crate::sgf::ast::Collection;
use crate::sgf::parsing::{parse_collection, ParseError};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Error that can occur when loading documents
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

pub struct DocumentLoader {
    source: String,
}

impl DocumentLoader {
    /// Load from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), bytes = source.len(), "loaded sgf source");
        Ok(Self::from_string(source))
    }

    /// Load from a string. A leading byte order mark is dropped.
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        let mut source = source.into();
        if source.starts_with('\u{feff}') {
            source.drain(..'\u{feff}'.len_utf8());
        }
        DocumentLoader { source }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Parse the source into a [Collection]
    pub fn parse(&self) -> Result<Collection, LoaderError> {
        Ok(parse_collection(&self.source)?)
    }
}
