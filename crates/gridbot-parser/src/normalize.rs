//! Source normalization: raw program text to indent-tagged lines.

use gridbot_types::SourceLine;

/// Lines whose trimmed text starts with this marker are comments.
pub const COMMENT_MARKER: char = '|';

/// Normalize raw program text into the line sequence the block parser
/// consumes.
///
/// Blank lines and comment lines are dropped. Each surviving line keeps its
/// trimmed text, the leading-whitespace count of the original physical line,
/// and its 1-based line number. Pure function, no side effects.
pub fn normalize(source: &str) -> Vec<SourceLine> {
    let mut lines = Vec::new();
    for (idx, raw) in source.lines().enumerate() {
        let text = raw.trim();
        if text.is_empty() || text.starts_with(COMMENT_MARKER) {
            continue;
        }
        let indent = raw.chars().take_while(|c| c.is_whitespace()).count();
        lines.push(SourceLine::new(text, indent, idx as u32 + 1));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_comment_lines_are_dropped() {
        let lines = normalize("вправо\n\n   \n| заметка\nзакрасить\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "вправо");
        assert_eq!(lines[1].text, "закрасить");
    }

    #[test]
    fn indented_comments_are_dropped_too() {
        let lines = normalize("вправо\n    | заметка\nзакрасить");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn indent_counts_leading_whitespace_characters() {
        let lines = normalize("нц\n  вправо\n\tвлево\nкц");
        assert_eq!(lines[0].indent, 0);
        assert_eq!(lines[1].indent, 2);
        // A tab is one whitespace character, not a column width.
        assert_eq!(lines[2].indent, 1);
    }

    #[test]
    fn line_numbers_are_physical_and_one_based() {
        let lines = normalize("\n| заголовок\nвправо\n\nзакрасить");
        assert_eq!(lines[0].line, 3);
        assert_eq!(lines[1].line, 5);
    }

    #[test]
    fn crlf_endings_are_trimmed() {
        let lines = normalize("вправо\r\n  закрасить\r\n");
        assert_eq!(lines[0].text, "вправо");
        assert_eq!(lines[1].text, "закрасить");
        assert_eq!(lines[1].indent, 2);
    }

    #[test]
    fn empty_source_yields_no_lines() {
        assert!(normalize("").is_empty());
        assert!(normalize("\n\n| только комментарии\n").is_empty());
    }
}
