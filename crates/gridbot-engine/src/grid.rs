//! The grid world: cell states, robot position and facing.
//!
//! One `GridWorld` lives for a whole session. The engine mutates it through
//! the execution surface (`move_robot`, `mark`); the host edits it between
//! runs through the editing surface (`clear`, `resize`, `toggle_wall`,
//! `place_robot`) and renders it through the read accessors.

use crate::error::Fault;
use gridbot_types::ast::{Condition, Direction};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest supported grid side.
pub const MIN_GRID_SIZE: usize = 5;
/// Largest supported grid side.
pub const MAX_GRID_SIZE: usize = 30;

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Wall,
    Marked,
}

/// Host-side world-editing errors. These are never raised during program
/// execution — a running program can only fault (see [`Fault`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid side {0} is outside the supported range {min}..={max}", min = MIN_GRID_SIZE, max = MAX_GRID_SIZE)]
    SizeOutOfRange(usize),
    #[error("cell ({x}, {y}) is outside the {size}x{size} grid")]
    OutOfBounds { x: usize, y: usize, size: usize },
    #[error("the robot cannot be placed on a wall cell")]
    RobotOnWall,
}

/// A square grid of cells plus the robot's position and facing.
///
/// Coordinates are `(x, y)` with the origin at the top-left corner and the
/// y axis growing downward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridWorld {
    size: usize,
    /// Row-major: the cell at `(x, y)` is `cells[y * size + x]`.
    cells: Vec<Cell>,
    robot: (usize, usize),
    facing: Direction,
}

impl GridWorld {
    /// Create an empty world of the given side, robot at the origin facing
    /// right.
    pub fn new(size: usize) -> Result<Self, GridError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
            return Err(GridError::SizeOutOfRange(size));
        }
        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
            robot: (0, 0),
            facing: Direction::Right,
        })
    }

    // ══════════════════════════════════════════════════════════════════════
    // Read accessors (renderer surface)
    // ══════════════════════════════════════════════════════════════════════

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The cell at `(x, y)`, or `None` outside the grid.
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        if x < self.size && y < self.size {
            Some(self.cells[y * self.size + x])
        } else {
            None
        }
    }

    /// The robot's `(x, y)` position.
    pub fn robot_position(&self) -> (usize, usize) {
        self.robot
    }

    /// The direction of the robot's last move.
    pub fn robot_facing(&self) -> Direction {
        self.facing
    }

    // ══════════════════════════════════════════════════════════════════════
    // Host editing surface (between runs)
    // ══════════════════════════════════════════════════════════════════════

    /// Empty every cell and return the robot to the origin facing right.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
        self.robot = (0, 0);
        self.facing = Direction::Right;
    }

    /// Change the grid side. Clears the world as a side effect.
    pub fn resize(&mut self, size: usize) -> Result<(), GridError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
            return Err(GridError::SizeOutOfRange(size));
        }
        self.size = size;
        self.cells = vec![Cell::Empty; size * size];
        self.robot = (0, 0);
        self.facing = Direction::Right;
        Ok(())
    }

    /// Flip a cell between `Empty` and `Wall`. Marked cells keep their
    /// state.
    pub fn toggle_wall(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        let idx = self.index_checked(x, y)?;
        self.cells[idx] = match self.cells[idx] {
            Cell::Empty => Cell::Wall,
            Cell::Wall => Cell::Empty,
            Cell::Marked => Cell::Marked,
        };
        Ok(())
    }

    /// Move the robot to `(x, y)`. Wall cells are refused.
    pub fn place_robot(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        let idx = self.index_checked(x, y)?;
        if self.cells[idx] == Cell::Wall {
            return Err(GridError::RobotOnWall);
        }
        self.robot = (x, y);
        Ok(())
    }

    // ══════════════════════════════════════════════════════════════════════
    // Execution surface (engine only, during a run)
    // ══════════════════════════════════════════════════════════════════════

    /// Move the robot one cell. A target outside the grid or on a wall is a
    /// [`Fault::Blocked`] and leaves everything unchanged, including the
    /// facing.
    pub fn move_robot(&mut self, direction: Direction) -> Result<(), Fault> {
        let (dx, dy) = direction.delta();
        let x = self.robot.0 as i32 + dx;
        let y = self.robot.1 as i32 + dy;
        if !self.open(x, y) {
            return Err(Fault::Blocked { direction });
        }
        self.robot = (x as usize, y as usize);
        self.facing = direction;
        Ok(())
    }

    /// Paint the robot's cell. Already-marked cells stay marked; a wall
    /// under the robot stays a wall.
    pub fn mark(&mut self) {
        let idx = self.robot.1 * self.size + self.robot.0;
        if self.cells[idx] == Cell::Empty {
            self.cells[idx] = Cell::Marked;
        }
    }

    /// Evaluate an adjacency condition at the robot's position. `*Free` is
    /// true iff the neighbor exists and is not a wall; `*Wall` is the exact
    /// negation, so the grid edge counts as a wall. Unknown phrases are
    /// always false.
    pub fn check(&self, condition: &Condition) -> bool {
        let (x, y) = (self.robot.0 as i32, self.robot.1 as i32);
        match condition {
            Condition::RightFree => self.open(x + 1, y),
            Condition::RightWall => !self.open(x + 1, y),
            Condition::LeftFree => self.open(x - 1, y),
            Condition::LeftWall => !self.open(x - 1, y),
            Condition::TopFree => self.open(x, y - 1),
            Condition::TopWall => !self.open(x, y - 1),
            Condition::BottomFree => self.open(x, y + 1),
            Condition::BottomWall => !self.open(x, y + 1),
            Condition::Unknown(_) => false,
        }
    }

    // ══════════════════════════════════════════════════════════════════════
    // Internals
    // ══════════════════════════════════════════════════════════════════════

    /// True iff the cell exists within the grid and is not a wall.
    fn open(&self, x: i32, y: i32) -> bool {
        x >= 0
            && y >= 0
            && (x as usize) < self.size
            && (y as usize) < self.size
            && self.cells[y as usize * self.size + x as usize] != Cell::Wall
    }

    fn index_checked(&self, x: usize, y: usize) -> Result<usize, GridError> {
        if x < self.size && y < self.size {
            Ok(y * self.size + x)
        } else {
            Err(GridError::OutOfBounds {
                x,
                y,
                size: self.size,
            })
        }
    }
}
