//! Shared types for the gridbot language.
//!
//! This crate defines the command tree, the condition and direction
//! vocabulary, normalized source lines, and the parse error type shared by
//! the parser and the execution engine.

mod error;
mod line;
pub mod ast;

pub use error::ParseError;
pub use line::SourceLine;

/// Result type for the parsing pipeline.
pub type Result<T> = std::result::Result<T, ParseError>;
