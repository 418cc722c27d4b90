//! Indentation-driven block parser.
//!
//! There is no block grammar: the closer of an opener at indentation `d` is
//! the first following line with indentation exactly `d` and the expected
//! closer keyword, and the opener's body is every line strictly between them
//! with indentation strictly greater than `d`. Collected body lines keep
//! their original indents and are re-fed through the same parsing loop, so
//! loops and conditionals nest arbitrarily.
//!
//! Lines at equal-or-lower indent inside a block's span that are neither the
//! matched closer nor an `иначе` marker are dead: they belong to no body and
//! are silently dropped. Lines that match no keyword at all are skipped the
//! same way.

use crate::condition::resolve;
use crate::normalize::normalize;
use gridbot_types::ast::{
    Command, Conditional, Direction, DoWhileLoop, ForLoop, Program, WhileLoop,
};
use gridbot_types::{ParseError, Result, SourceLine};

const KW_UP: &str = "вверх";
const KW_DOWN: &str = "вниз";
const KW_LEFT: &str = "влево";
const KW_RIGHT: &str = "вправо";
const KW_MARK: &str = "закрасить";
const KW_LOOP: &str = "нц";
const KW_WHILE_PREFIX: &str = "нц пока";
const KW_FOR_PREFIX: &str = "нц для";
const KW_END_LOOP: &str = "кц";
const KW_END_LOOP_COND: &str = "кц при";
const KW_IF_PREFIX: &str = "если";
const KW_THEN: &str = "то";
const KW_ELSE: &str = "иначе";
const KW_END_IF: &str = "все";
const KW_STEP: &str = "шаг";

/// Parse a complete program.
///
/// All-or-nothing: the first unmatched block or malformed loop header aborts
/// the parse and no partial tree is returned.
pub fn parse(source: &str) -> Result<Program> {
    let lines = normalize(source);
    let commands = parse_block(&lines)?;
    Ok(Program::new(commands))
}

/// Parse one flat line sequence into a command list, recursing into each
/// opener's collected body.
fn parse_block(lines: &[SourceLine]) -> Result<Vec<Command>> {
    let mut commands = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        let text = lines[i].text.as_str();
        if let Some(direction) = primitive_direction(text) {
            commands.push(Command::Move(direction));
        } else if text == KW_MARK {
            commands.push(Command::Mark);
        } else if text.starts_with(KW_WHILE_PREFIX) {
            let (command, end) = parse_while(lines, i)?;
            commands.push(command);
            i = end;
        } else if text == KW_LOOP {
            let (command, end) = parse_do_while(lines, i)?;
            commands.push(command);
            i = end;
        } else if text.starts_with(KW_FOR_PREFIX) {
            let (command, end) = parse_for(lines, i)?;
            commands.push(command);
            i = end;
        } else if text.starts_with(KW_IF_PREFIX) {
            let (command, end) = parse_if(lines, i)?;
            commands.push(command);
            i = end;
        }
        // Anything else is dead text and is skipped.
        i += 1;
    }
    Ok(commands)
}

fn primitive_direction(text: &str) -> Option<Direction> {
    match text {
        KW_UP => Some(Direction::Up),
        KW_DOWN => Some(Direction::Down),
        KW_LEFT => Some(Direction::Left),
        KW_RIGHT => Some(Direction::Right),
        _ => None,
    }
}

// ─────────────────────────────────────────────────────────────────────
// Block matching
// ─────────────────────────────────────────────────────────────────────

/// Find the closer for the opener at `opener_idx`: the first following line
/// whose indentation equals the opener's and whose text satisfies `matches`.
fn find_closer<F>(lines: &[SourceLine], opener_idx: usize, matches: F) -> Option<usize>
where
    F: Fn(&str) -> bool,
{
    let indent = lines[opener_idx].indent;
    lines[opener_idx + 1..]
        .iter()
        .position(|line| line.indent == indent && matches(&line.text))
        .map(|offset| opener_idx + 1 + offset)
}

/// Collect the body of a block: every line strictly between `from` and `to`
/// with indentation strictly greater than `indent`, original indents kept.
fn collect_body(lines: &[SourceLine], from: usize, to: usize, indent: usize) -> Vec<SourceLine> {
    lines[from + 1..to]
        .iter()
        .filter(|line| line.indent > indent)
        .cloned()
        .collect()
}

fn unmatched(opener: &str, closer: &str, line: &SourceLine) -> ParseError {
    ParseError::UnmatchedBlock {
        opener: opener.to_string(),
        closer: closer.to_string(),
        line: line.line,
    }
}

// ─────────────────────────────────────────────────────────────────────
// Compound constructs
// ─────────────────────────────────────────────────────────────────────

/// `нц пока <условие>` … `кц`
fn parse_while(lines: &[SourceLine], opener_idx: usize) -> Result<(Command, usize)> {
    let opener = &lines[opener_idx];
    let end = find_closer(lines, opener_idx, |t| t == KW_END_LOOP)
        .ok_or_else(|| unmatched(KW_WHILE_PREFIX, KW_END_LOOP, opener))?;

    let phrase = opener
        .text
        .strip_prefix(KW_WHILE_PREFIX)
        .unwrap_or_default()
        .trim();
    let body = parse_block(&collect_body(lines, opener_idx, end, opener.indent))?;
    Ok((Command::While(WhileLoop::new(resolve(phrase), body)), end))
}

/// `нц` … `кц при <условие>` (or bare `кц`)
fn parse_do_while(lines: &[SourceLine], opener_idx: usize) -> Result<(Command, usize)> {
    let opener = &lines[opener_idx];
    let end = find_closer(lines, opener_idx, |t| {
        t == KW_END_LOOP || t.starts_with(KW_END_LOOP_COND)
    })
    .ok_or_else(|| unmatched(KW_LOOP, KW_END_LOOP_COND, opener))?;

    let condition = match lines[end].text.strip_prefix(KW_END_LOOP_COND) {
        Some(rest) => resolve(rest),
        // A bare `кц` closer carries no post-condition. An absent phrase
        // never resolves, so the loop runs exactly one pass.
        None => resolve(""),
    };
    let body = parse_block(&collect_body(lines, opener_idx, end, opener.indent))?;
    Ok((Command::DoWhile(DoWhileLoop::new(condition, body)), end))
}

/// `нц для <имя> от <число> до <число> [шаг <число>]` … `кц`
fn parse_for(lines: &[SourceLine], opener_idx: usize) -> Result<(Command, usize)> {
    let opener = &lines[opener_idx];
    let (var, start, end_val, step) = parse_for_header(opener)?;
    let end = find_closer(lines, opener_idx, |t| t == KW_END_LOOP)
        .ok_or_else(|| unmatched(KW_FOR_PREFIX, KW_END_LOOP, opener))?;

    let body = parse_block(&collect_body(lines, opener_idx, end, opener.indent))?;
    Ok((
        Command::For(ForLoop::new(var, start, end_val, step, body)),
        end,
    ))
}

/// Split a counted-loop header into `(var, start, end, step)`.
///
/// The token grammar is fixed: exactly
/// `нц для <имя> от <число> до <число>`, optionally followed by
/// `шаг <число>` with a strictly positive step.
fn parse_for_header(opener: &SourceLine) -> Result<(String, i64, i64, i64)> {
    let malformed = |reason: &str| ParseError::MalformedForHeader {
        reason: reason.to_string(),
        line: opener.line,
    };

    let tokens: Vec<&str> = opener.text.split_whitespace().collect();
    if tokens.len() != 7 && tokens.len() != 9 {
        return Err(malformed(
            "expected 'нц для <имя> от <число> до <число> [шаг <число>]'",
        ));
    }
    if tokens[1] != "для" || tokens[3] != "от" || tokens[5] != "до" {
        return Err(malformed(
            "expected 'нц для <имя> от <число> до <число> [шаг <число>]'",
        ));
    }

    let var = tokens[2].to_string();
    let start: i64 = tokens[4]
        .parse()
        .map_err(|_| malformed("loop bounds must be integer literals"))?;
    let end: i64 = tokens[6]
        .parse()
        .map_err(|_| malformed("loop bounds must be integer literals"))?;

    let step = if tokens.len() == 9 {
        if tokens[7] != KW_STEP {
            return Err(malformed("expected 'шаг' before the step value"));
        }
        let step: i64 = tokens[8]
            .parse()
            .map_err(|_| malformed("step must be an integer literal"))?;
        if step <= 0 {
            return Err(malformed("step must be a positive integer"));
        }
        step
    } else {
        1
    };

    Ok((var, start, end, step))
}

/// `если <условие> то` … [`иначе` …] `все`
fn parse_if(lines: &[SourceLine], opener_idx: usize) -> Result<(Command, usize)> {
    let opener = &lines[opener_idx];
    let end = find_closer(lines, opener_idx, |t| t == KW_END_IF)
        .ok_or_else(|| unmatched(KW_IF_PREFIX, KW_END_IF, opener))?;

    // An `иначе` sibling splits the span in two; one at deeper indent
    // belongs to a nested conditional and is not a split point here.
    let else_idx = lines[opener_idx + 1..end]
        .iter()
        .position(|line| line.indent == opener.indent && line.text == KW_ELSE)
        .map(|offset| opener_idx + 1 + offset);

    let phrase = opener
        .text
        .strip_prefix(KW_IF_PREFIX)
        .unwrap_or_default()
        .trim();
    let phrase = phrase.strip_suffix(KW_THEN).map_or(phrase, str::trim);

    let then_end = else_idx.unwrap_or(end);
    let then_body = parse_block(&collect_body(lines, opener_idx, then_end, opener.indent))?;
    let else_body = match else_idx {
        Some(else_at) => parse_block(&collect_body(lines, else_at, end, opener.indent))?,
        None => Vec::new(),
    };

    Ok((
        Command::If(Conditional::new(resolve(phrase), then_body, else_body)),
        end,
    ))
}
