//! Parse errors.
//!
//! Parsing is all-or-nothing: the first error aborts the whole parse and no
//! partial tree is ever returned. The host is expected to surface the
//! message and refuse to run. Errors are serializable so a shell can render
//! them without parsing free-form strings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A parse failure, pointing at the 1-based source line of the opener that
/// caused it.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ParseError {
    /// A block opener with no closer at the same indentation anywhere after
    /// it.
    #[error("line {line}: '{opener}' has no matching '{closer}' at the same indentation")]
    UnmatchedBlock {
        /// The opener keyword as written (`нц пока`, `нц`, `нц для`, `если`).
        opener: String,
        /// The closer keyword that was expected (`кц`, `кц при`, `все`).
        closer: String,
        line: u32,
    },

    /// A counted-loop header that does not fit the fixed token grammar
    /// `нц для <var> от <int> до <int> [шаг <int>]`.
    #[error("line {line}: malformed counted loop header: {reason}")]
    MalformedForHeader { reason: String, line: u32 },
}

impl ParseError {
    /// The 1-based source line the error points at.
    pub fn line(&self) -> u32 {
        match self {
            ParseError::UnmatchedBlock { line, .. } => *line,
            ParseError::MalformedForHeader { line, .. } => *line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_line_and_keywords() {
        let err = ParseError::UnmatchedBlock {
            opener: "нц пока".into(),
            closer: "кц".into(),
            line: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("line 3"));
        assert!(msg.contains("нц пока"));
        assert!(msg.contains("кц"));
    }

    #[test]
    fn line_accessor_covers_all_variants() {
        let unmatched = ParseError::UnmatchedBlock {
            opener: "если".into(),
            closer: "все".into(),
            line: 7,
        };
        assert_eq!(unmatched.line(), 7);

        let malformed = ParseError::MalformedForHeader {
            reason: "expected 'от'".into(),
            line: 12,
        };
        assert_eq!(malformed.line(), 12);
    }

    #[test]
    fn json_round_trip() {
        let err = ParseError::MalformedForHeader {
            reason: "step must be a positive integer".into(),
            line: 5,
        };
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("MalformedForHeader"));
        let back: ParseError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }
}
