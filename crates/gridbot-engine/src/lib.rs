//! gridbot execution engine: the grid world and the stepwise interpreter.
//!
//! The engine is single-threaded and externally paced. It starts no timers
//! and never blocks: every [`Engine::step`] call does a small bounded
//! amount of work and returns, so a host can drive it from a periodic
//! timer or a manual step trigger without ever stalling, and the engine
//! cannot tell the difference. During a run the engine is the grid's only
//! writer; hosts read snapshots between steps.

mod engine;
mod error;
mod grid;

pub use engine::{Engine, StepResult};
pub use error::Fault;
pub use grid::{Cell, GridError, GridWorld, MAX_GRID_SIZE, MIN_GRID_SIZE};
