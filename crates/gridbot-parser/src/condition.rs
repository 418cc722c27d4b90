//! Condition phrase resolution.
//!
//! The eight adjacency phrases are resolved by exact match at parse time.
//! Anything else is carried through verbatim as [`Condition::Unknown`] and
//! will evaluate to `false` at every runtime check; an unrecognized phrase
//! is not a parse error.

use gridbot_types::ast::Condition;

/// Resolve a condition phrase to its internal identifier.
pub fn resolve(text: &str) -> Condition {
    match text.trim() {
        "справа свободно" => Condition::RightFree,
        "справа стена" => Condition::RightWall,
        "слева свободно" => Condition::LeftFree,
        "слева стена" => Condition::LeftWall,
        "сверху свободно" => Condition::TopFree,
        "сверху стена" => Condition::TopWall,
        "снизу свободно" => Condition::BottomFree,
        "снизу стена" => Condition::BottomWall,
        other => Condition::Unknown(other.to_string()),
    }
}
