//! Command-tree types for the gridbot language.
//!
//! Every compound node exclusively owns its body and embeds its own
//! resumption state (cursors, branch choice, pass flags). The engine never
//! keeps loop progress on a call stack: progress lives in the nodes
//! themselves, which is what lets a program be driven one primitive action
//! per `step()` call through arbitrary nesting.

use serde::{Deserialize, Serialize};
use std::fmt;

// ══════════════════════════════════════════════════════════════════════════════
// Directions
// ══════════════════════════════════════════════════════════════════════════════

/// The four movement directions of the robot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// The source keyword that moves the robot in this direction.
    pub fn keyword(self) -> &'static str {
        match self {
            Direction::Up => "вверх",
            Direction::Right => "вправо",
            Direction::Down => "вниз",
            Direction::Left => "влево",
        }
    }

    /// Offset of a single step as `(dx, dy)`. The y axis grows downward.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Conditions
// ══════════════════════════════════════════════════════════════════════════════

/// An adjacency probe, resolved from its source phrase at parse time and
/// evaluated against the grid at every check.
///
/// `*Free` is true iff the neighbor cell exists within the grid and is not a
/// wall; the matching `*Wall` is its exact negation, so the grid edge counts
/// as a wall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    RightFree,
    RightWall,
    LeftFree,
    LeftWall,
    TopFree,
    TopWall,
    BottomFree,
    BottomWall,
    /// A phrase the resolver did not recognize, carried verbatim.
    /// Evaluates to `false` at every check.
    Unknown(String),
}

impl Condition {
    /// Stable identifier for host display: `"right_free"`, `"top_wall"`, …
    /// Unknown phrases are their own identifier.
    pub fn id(&self) -> &str {
        match self {
            Condition::RightFree => "right_free",
            Condition::RightWall => "right_wall",
            Condition::LeftFree => "left_free",
            Condition::LeftWall => "left_wall",
            Condition::TopFree => "top_free",
            Condition::TopWall => "top_wall",
            Condition::BottomFree => "bottom_free",
            Condition::BottomWall => "bottom_wall",
            Condition::Unknown(phrase) => phrase,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Commands
// ══════════════════════════════════════════════════════════════════════════════

/// A single node of the command tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Move one cell in the given direction.
    Move(Direction),
    /// Paint the current cell.
    Mark,
    /// `нц пока <condition> … кц` — pre-test loop.
    While(WhileLoop),
    /// `нц … кц при <condition>` — post-test loop, body runs at least once.
    DoWhile(DoWhileLoop),
    /// `нц для <var> от <start> до <end> [шаг <step>] … кц` — counted loop.
    For(ForLoop),
    /// `если <condition> то … [иначе …] все` — conditional.
    If(Conditional),
}

impl Command {
    /// Stable kind name for host info panels.
    pub fn kind(&self) -> &'static str {
        match self {
            Command::Move(_) => "move",
            Command::Mark => "mark",
            Command::While(_) => "while",
            Command::DoWhile(_) => "do-while",
            Command::For(_) => "for",
            Command::If(_) => "if",
        }
    }
}

/// Pre-test loop: the condition is consulted before every body pass, and on
/// every engine call while the loop is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhileLoop {
    pub condition: Condition,
    pub body: Vec<Command>,
    /// Index of the next body command to execute.
    pub cursor: usize,
}

impl WhileLoop {
    pub fn new(condition: Condition, body: Vec<Command>) -> Self {
        Self {
            condition,
            body,
            cursor: 0,
        }
    }
}

/// Post-test loop: the body runs at least once; the condition is consulted
/// only after a completed pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoWhileLoop {
    pub condition: Condition,
    pub body: Vec<Command>,
    pub cursor: usize,
    /// True while a body pass is owed or in flight; cleared at each pass
    /// boundary, which is the only point the condition is consulted.
    pub first_pass: bool,
}

impl DoWhileLoop {
    pub fn new(condition: Condition, body: Vec<Command>) -> Self {
        Self {
            condition,
            body,
            cursor: 0,
            first_pass: true,
        }
    }
}

/// Counted loop over the inclusive range `start..=end`, advancing by `step`
/// (strictly positive, default 1) after each full body pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForLoop {
    /// The counter name as written in the source. It is display-only: no
    /// expression ever reads it.
    pub var: String,
    pub start: i64,
    pub end: i64,
    pub step: i64,
    /// Counter value for the pass in flight.
    pub current: i64,
    pub body: Vec<Command>,
    pub cursor: usize,
}

impl ForLoop {
    pub fn new(var: String, start: i64, end: i64, step: i64, body: Vec<Command>) -> Self {
        Self {
            var,
            start,
            end,
            step,
            current: start,
            body,
            cursor: 0,
        }
    }
}

/// The branch a conditional committed to when its condition was evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Branch {
    Then,
    Else,
}

/// Conditional with an optional else body. `branch` is `None` both before
/// the condition has been evaluated (`decided == false`) and when the
/// condition was false with no else body present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conditional {
    pub condition: Condition,
    pub then_body: Vec<Command>,
    /// Empty when the source has no `иначе` section.
    pub else_body: Vec<Command>,
    pub branch: Option<Branch>,
    pub decided: bool,
    pub then_cursor: usize,
    pub else_cursor: usize,
}

impl Conditional {
    pub fn new(condition: Condition, then_body: Vec<Command>, else_body: Vec<Command>) -> Self {
        Self {
            condition,
            then_body,
            else_body,
            branch: None,
            decided: false,
            then_cursor: 0,
            else_cursor: 0,
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Program
// ══════════════════════════════════════════════════════════════════════════════

/// A fully parsed program: the ordered top-level command list.
///
/// The program counter lives in the engine, not here. Because compound nodes
/// mutate in place while executing, a `Program` belongs to exactly one engine
/// run; re-running requires re-parsing (or a run that ended in completion,
/// after which every node has reset its own state).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Program {
    pub commands: Vec<Command>,
}

impl Program {
    pub fn new(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    /// Number of top-level commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
