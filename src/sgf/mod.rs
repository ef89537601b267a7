//! Main module for sgf library functionality

pub mod ast;
pub mod config;
pub mod coordinates;
pub mod formats;
pub mod lexing;
pub mod loader;
pub mod parsing;
pub mod testing;
