//! Field files: a text description of the starting world.
//!
//! One row per line: `.` is an empty cell, `#` a wall, `@` the robot start
//! (at most one; without it the robot stays at the origin). The grid is
//! square — the side is the row count and every row must have exactly that
//! many glyphs.

use anyhow::{bail, ensure, Result};
use gridbot_engine::GridWorld;

pub fn load(text: &str) -> Result<GridWorld> {
    let rows: Vec<&str> = text
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect();
    let size = rows.len();
    let mut world = GridWorld::new(size)?;

    let mut robot = None;
    for (y, row) in rows.iter().enumerate() {
        let glyphs: Vec<char> = row.chars().collect();
        ensure!(
            glyphs.len() == size,
            "row {} has {} cells, expected {size}",
            y + 1,
            glyphs.len()
        );
        for (x, glyph) in glyphs.iter().enumerate() {
            match glyph {
                '.' => {}
                '#' => world.toggle_wall(x, y)?,
                '@' => {
                    ensure!(robot.is_none(), "more than one '@' robot marker");
                    robot = Some((x, y));
                }
                other => bail!("unknown glyph '{other}' at row {}, column {}", y + 1, x + 1),
            }
        }
    }

    if let Some((x, y)) = robot {
        world.place_robot(x, y)?;
    }
    Ok(world)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridbot_engine::Cell;

    #[test]
    fn walls_and_robot_load() {
        let world = load(".....\n.###.\n.....\n..@..\n.....").unwrap();
        assert_eq!(world.size(), 5);
        assert_eq!(world.robot_position(), (2, 3));
        assert_eq!(world.cell(1, 1), Some(Cell::Wall));
        assert_eq!(world.cell(3, 1), Some(Cell::Wall));
        assert_eq!(world.cell(0, 0), Some(Cell::Empty));
    }

    #[test]
    fn missing_robot_marker_defaults_to_origin() {
        let world = load(".....\n.....\n.....\n.....\n.....").unwrap();
        assert_eq!(world.robot_position(), (0, 0));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert!(load(".....\n...\n.....\n.....\n.....").is_err());
    }

    #[test]
    fn duplicate_robot_markers_are_rejected() {
        assert!(load("@....\n....@\n.....\n.....\n.....").is_err());
    }

    #[test]
    fn unknown_glyphs_are_rejected() {
        assert!(load(".....\n..x..\n.....\n.....\n.....").is_err());
    }

    #[test]
    fn too_small_fields_are_rejected() {
        assert!(load("..\n..").is_err());
    }
}
