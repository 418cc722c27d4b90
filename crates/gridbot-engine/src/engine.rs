//! The stepwise interpreter.
//!
//! One [`Engine::step`] call performs exactly one unit of progress: a
//! primitive action against the grid, or internal progress through a loop
//! or conditional header. Loop and conditional progress is recorded inside
//! the command nodes themselves rather than on a call stack, so the engine
//! resumes correctly across independently-invoked calls at any nesting
//! depth and any cadence.

use crate::error::Fault;
use crate::grid::GridWorld;
use gridbot_types::ast::{
    Branch, Command, Conditional, DoWhileLoop, ForLoop, Program, WhileLoop,
};

/// Outcome of a single [`Engine::step`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum StepResult {
    /// Progress was made; call again.
    Continue,
    /// The program has run to its end. Further calls keep returning
    /// `Completed` without touching the grid.
    Completed,
    /// A fatal fault. The run is over; the grid keeps its last valid state.
    Fault(Fault),
}

/// What a command reports to whoever is driving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Advance {
    /// The command has fully completed; the driver may move past it.
    Complete,
    /// The command made internal progress and must be driven again.
    InProgress,
}

/// Executes one [`Program`] against one [`GridWorld`].
///
/// The engine owns both for the duration of the run: compound nodes mutate
/// in place as they execute, and the grid has a single writer. A `Program`
/// therefore belongs to one run; see [`Engine::reset`] for the narrow
/// exception.
pub struct Engine {
    program: Program,
    grid: GridWorld,
    pc: usize,
    running: bool,
}

impl Engine {
    pub fn new(program: Program, grid: GridWorld) -> Self {
        Self {
            program,
            grid,
            pc: 0,
            running: true,
        }
    }

    /// Advance the run by one unit of progress.
    pub fn step(&mut self) -> StepResult {
        if self.pc >= self.program.len() {
            self.running = false;
            return StepResult::Completed;
        }
        match step_command(&mut self.program.commands[self.pc], &mut self.grid) {
            Ok(Advance::Complete) => {
                self.pc += 1;
                StepResult::Continue
            }
            Ok(Advance::InProgress) => StepResult::Continue,
            Err(fault) => {
                self.running = false;
                StepResult::Fault(fault)
            }
        }
    }

    /// Re-arm a fresh run over the same program.
    ///
    /// Sound only while node state is pristine: before the first step, or
    /// after a run that reached [`StepResult::Completed`] (every compound
    /// node resets its own fields on completion). After a fault or an
    /// abandoned run the resumption state is stale and the host must
    /// re-parse instead.
    pub fn reset(&mut self) {
        self.pc = 0;
        self.running = true;
    }

    // ── Host read accessors ──────────────────────────────────────────────

    /// The grid, for rendering between steps.
    pub fn grid(&self) -> &GridWorld {
        &self.grid
    }

    /// Consume the engine and recover the grid.
    pub fn into_grid(self) -> GridWorld {
        self.grid
    }

    /// Index of the top-level command currently being driven.
    pub fn program_counter(&self) -> usize {
        self.pc
    }

    /// Number of top-level commands in the program.
    pub fn program_len(&self) -> usize {
        self.program.len()
    }

    /// False once the run has completed or faulted.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Kind name of the command the program counter rests on, for host
    /// info panels. `None` once the program is exhausted.
    pub fn current_command_kind(&self) -> Option<&'static str> {
        self.program.commands.get(self.pc).map(Command::kind)
    }
}

// ══════════════════════════════════════════════════════════════════════════
// Per-node steppers
// ══════════════════════════════════════════════════════════════════════════

/// Drive one unit of progress through a command.
fn step_command(command: &mut Command, grid: &mut GridWorld) -> Result<Advance, Fault> {
    match command {
        Command::Move(direction) => {
            grid.move_robot(*direction)?;
            Ok(Advance::Complete)
        }
        Command::Mark => {
            grid.mark();
            Ok(Advance::Complete)
        }
        Command::While(node) => step_while(node, grid),
        Command::DoWhile(node) => step_do_while(node, grid),
        Command::For(node) => step_for(node, grid),
        Command::If(node) => step_if(node, grid),
    }
}

/// Drive one step of a body, advancing `cursor` past completed children.
/// Returns true when a full pass just finished (the cursor wrapped to 0).
/// An empty body counts as an instantly finished pass.
fn step_body(body: &mut [Command], cursor: &mut usize, grid: &mut GridWorld) -> Result<bool, Fault> {
    if body.is_empty() {
        return Ok(true);
    }
    if let Advance::Complete = step_command(&mut body[*cursor], grid)? {
        *cursor += 1;
        if *cursor == body.len() {
            *cursor = 0;
            return Ok(true);
        }
    }
    Ok(false)
}

/// Pre-test loop: the condition is consulted on every call, so the loop can
/// also end mid-pass. Only the loop's own cursor is reset on completion.
fn step_while(node: &mut WhileLoop, grid: &mut GridWorld) -> Result<Advance, Fault> {
    if !grid.check(&node.condition) {
        node.cursor = 0;
        return Ok(Advance::Complete);
    }
    step_body(&mut node.body, &mut node.cursor, grid)?;
    Ok(Advance::InProgress)
}

/// Post-test loop: the body runs before the condition is ever consulted,
/// and the condition is only consulted at pass boundaries.
///
/// `first_pass` stays true while a pass is owed or in flight; the cursor
/// alone cannot tell a boundary from a compound child resting at index 0.
fn step_do_while(node: &mut DoWhileLoop, grid: &mut GridWorld) -> Result<Advance, Fault> {
    if !node.first_pass {
        if !grid.check(&node.condition) {
            node.first_pass = true;
            return Ok(Advance::Complete);
        }
        node.first_pass = true;
    }
    if step_body(&mut node.body, &mut node.cursor, grid)? {
        node.first_pass = false;
    }
    Ok(Advance::InProgress)
}

/// Counted loop: the counter advances by `step` after each full pass and
/// the loop completes once it exceeds `end`. Completion re-arms the counter
/// so the loop runs again when nested inside another loop.
fn step_for(node: &mut ForLoop, grid: &mut GridWorld) -> Result<Advance, Fault> {
    if node.current > node.end {
        node.current = node.start;
        node.cursor = 0;
        return Ok(Advance::Complete);
    }
    if step_body(&mut node.body, &mut node.cursor, grid)? {
        node.current += node.step;
    }
    Ok(Advance::InProgress)
}

/// Conditional: the branch is chosen on the first visit and driven like a
/// loop body; exhausting it (or having no branch to run) resets the node
/// and completes.
fn step_if(node: &mut Conditional, grid: &mut GridWorld) -> Result<Advance, Fault> {
    if !node.decided {
        node.branch = if grid.check(&node.condition) {
            Some(Branch::Then)
        } else if !node.else_body.is_empty() {
            Some(Branch::Else)
        } else {
            None
        };
        node.decided = true;
    }
    let finished = match node.branch {
        Some(Branch::Then) => step_body(&mut node.then_body, &mut node.then_cursor, grid)?,
        Some(Branch::Else) => step_body(&mut node.else_body, &mut node.else_cursor, grid)?,
        None => true,
    };
    if finished {
        node.then_cursor = 0;
        node.else_cursor = 0;
        node.branch = None;
        node.decided = false;
        return Ok(Advance::Complete);
    }
    Ok(Advance::InProgress)
}
