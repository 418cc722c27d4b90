//! Edge cases of indentation matching: dead lines, stray markers, odd
//! indents, and the leniencies inherited from the language's observed
//! behavior.

use gridbot_parser::parse;
use gridbot_types::ast::*;

fn parse_ok(source: &str) -> Program {
    parse(source).unwrap_or_else(|e| panic!("unexpected parse error: {e}"))
}

// ─────────────────────────────────────────────────────────────────────
// Dead lines
// ─────────────────────────────────────────────────────────────────────

#[test]
fn equal_indent_lines_inside_a_block_are_dead() {
    // `закрасить` sits between opener and closer at the opener's indent:
    // it is neither body content (needs strictly greater indent) nor a
    // sibling (the span is consumed up to the closer). It is dropped.
    let program = parse_ok("нц пока справа свободно\n  вправо\nзакрасить\nкц");
    assert_eq!(program.len(), 1);
    match &program.commands[0] {
        Command::While(node) => {
            assert_eq!(node.body, vec![Command::Move(Direction::Right)]);
        }
        other => panic!("expected while, got {other:?}"),
    }
}

#[test]
fn unknown_statements_are_skipped() {
    let program = parse_ok("прыгнуть\nвправо\nвзлететь");
    assert_eq!(program.commands, vec![Command::Move(Direction::Right)]);
}

#[test]
fn stray_closers_are_skipped() {
    // Closers with no opener are unknown statements, not errors.
    let program = parse_ok("кц\nвсе\nзакрасить");
    assert_eq!(program.commands, vec![Command::Mark]);
}

#[test]
fn stray_else_is_skipped() {
    let program = parse_ok("иначе\nвправо");
    assert_eq!(program.commands, vec![Command::Move(Direction::Right)]);
}

// ─────────────────────────────────────────────────────────────────────
// Else placement
// ─────────────────────────────────────────────────────────────────────

#[test]
fn deeper_else_belongs_to_the_nested_conditional() {
    let program = parse_ok(
        "если справа стена то\n  если снизу стена то\n    закрасить\n  иначе\n    вниз\n  все\nвсе",
    );
    let outer = match &program.commands[0] {
        Command::If(node) => node,
        other => panic!("expected if, got {other:?}"),
    };
    // The indented `иначе` splits the inner conditional, not the outer one.
    assert!(outer.else_body.is_empty());
    let inner = match &outer.then_body[0] {
        Command::If(node) => node,
        other => panic!("expected nested if, got {other:?}"),
    };
    assert_eq!(inner.then_body, vec![Command::Mark]);
    assert_eq!(inner.else_body, vec![Command::Move(Direction::Down)]);
}

// ─────────────────────────────────────────────────────────────────────
// Header leniencies
// ─────────────────────────────────────────────────────────────────────

#[test]
fn if_header_without_trailing_then_still_parses() {
    // A missing `то` is not an error; the phrase resolves as written.
    let program = parse_ok("если справа стена\n  закрасить\nвсе");
    match &program.commands[0] {
        Command::If(node) => assert_eq!(node.condition, Condition::RightWall),
        other => panic!("expected if, got {other:?}"),
    }
}

#[test]
fn while_condition_may_be_garbage() {
    let program = parse_ok("нц пока\n  вправо\nкц");
    match &program.commands[0] {
        Command::While(node) => {
            assert_eq!(node.condition, Condition::Unknown(String::new()));
        }
        other => panic!("expected while, got {other:?}"),
    }
}

// ─────────────────────────────────────────────────────────────────────
// Indentation oddities
// ─────────────────────────────────────────────────────────────────────

#[test]
fn uneven_body_indents_all_collect() {
    // Body membership is `indent > opener indent`, not a fixed width.
    let program = parse_ok("нц пока справа свободно\n    вправо\n  закрасить\nкц");
    match &program.commands[0] {
        Command::While(node) => {
            assert_eq!(
                node.body,
                vec![Command::Move(Direction::Right), Command::Mark]
            );
        }
        other => panic!("expected while, got {other:?}"),
    }
}

#[test]
fn whole_program_may_be_indented() {
    let program = parse_ok("  нц пока справа свободно\n    вправо\n  кц");
    assert_eq!(program.len(), 1);
}

#[test]
fn sibling_blocks_at_the_same_indent() {
    // The first `кц` at the opener's indent closes the first loop; the
    // second loop opens fresh after it.
    let program = parse_ok("нц\n  вправо\nкц\nнц\n  вниз\nкц");
    assert_eq!(program.len(), 2);
    assert!(matches!(program.commands[0], Command::DoWhile(_)));
    assert!(matches!(program.commands[1], Command::DoWhile(_)));
}

#[test]
fn conditional_closer_never_closes_a_while() {
    // A pre-test loop needs a plain `кц`; a `кц при …` line is not its
    // closer, so the scan runs off the end of the file.
    let err = parse("нц пока справа свободно\n  вправо\nкц при снизу стена");
    assert!(err.is_err());
}
