//! Normalized source lines.

use serde::{Deserialize, Serialize};

/// One surviving line of a program after normalization: trimmed text, the
/// leading-whitespace count of the original physical line, and the 1-based
/// physical line number for error reporting.
///
/// Indentation is the unit of block structure in this language (openers and
/// closers are matched by indent equality, and body membership is indent
/// strictly greater than the opener's), so the indent recorded here must be
/// the original line's, even when lines are re-collected into nested bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLine {
    pub text: String,
    pub indent: usize,
    pub line: u32,
}

impl SourceLine {
    pub fn new(text: impl Into<String>, indent: usize, line: u32) -> Self {
        Self {
            text: text.into(),
            indent,
            line,
        }
    }
}
