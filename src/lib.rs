//! # sgf
//!
//! A parser for the Smart Game Format (SGF), the nested, bracket-delimited format used to record
//! Go (and other board game) histories.
//!
//! File Layout
//!
//!     src/sgf
//!       ├── lexing       Regex matchers for values, properties, nodes and tree boundaries
//!       ├── parsing      Property/node parsing and the collection assembler
//!       ├── ast          The parsed tree: Collection > GameTree > Node > Property
//!       ├── loader       Reading SGF text from files or strings
//!       ├── formats      Inspection output (treeviz, json, yaml)
//!       └── config       Layered configuration for the command line tool
//!
//! For testing guidelines, see the [testing module](sgf::testing).

pub mod sgf;
