//! Runtime fault types.

use gridbot_types::ast::Direction;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A fatal runtime condition. A fault halts the whole run: the failed
/// action is not applied, and the grid keeps its last valid state. There is
/// no retry and no per-statement recovery; the host reports the fault and
/// the program must be fixed and re-parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum Fault {
    /// The target cell of a move is a wall or lies outside the grid.
    #[error("robot cannot move {direction}: the target cell is a wall or the grid edge")]
    Blocked { direction: Direction },
}
