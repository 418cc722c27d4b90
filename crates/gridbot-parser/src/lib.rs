//! gridbot parser: source text to a command tree.
//!
//! The pipeline is two stages: [`normalize`] turns raw text into an ordered
//! sequence of indent-tagged lines, and [`parse`] matches block openers to
//! closers by indentation equality to build the nested command tree.
//! Parsing is pure and all-or-nothing: a malformed program yields a
//! [`gridbot_types::ParseError`] and no tree at all.

pub mod condition;
pub mod normalize;
mod parser;

pub use normalize::normalize;
pub use parser::parse;
