//! gridbot command-line host.
//!
//! A thin stand-in for a graphical shell: it loads a program (and
//! optionally a field file), parses it, and drives the engine flat out or
//! at one of the fixed animation intervals, rendering the grid as text.
//! The engine itself knows nothing about pacing; the interval only decides
//! how often this host calls `step()`.

use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use gridbot_engine::{Cell, Engine, GridWorld, StepResult};
use gridbot_types::ast::Direction;

mod field;

#[derive(Parser)]
#[command(name = "gridbot")]
#[command(about = "Stepwise interpreter for the gridbot teaching language", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a program and run it against a grid
    Run {
        /// Program source file
        program: PathBuf,
        /// Field file: '.' empty, '#' wall, '@' robot start
        #[arg(short, long)]
        field: Option<PathBuf>,
        /// Grid side when no field file is given
        #[arg(short, long, default_value_t = 15)]
        size: usize,
        /// Animate at a fixed interval instead of running flat out
        #[arg(long, value_enum)]
        speed: Option<Speed>,
        /// Abort after this many steps
        #[arg(long, default_value_t = 1_000_000)]
        max_steps: u64,
        /// Print the final grid as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Parse a program and print the command tree without running it
    Parse {
        /// Program source file
        program: PathBuf,
        /// Print the tree as JSON
        #[arg(long)]
        json: bool,
    },
}

/// The fixed animation interval presets, slowest to fastest.
#[derive(Clone, Copy, ValueEnum)]
enum Speed {
    Slowest,
    Slow,
    Normal,
    Fast,
    Fastest,
}

impl Speed {
    fn interval(self) -> Duration {
        let ms = match self {
            Speed::Slowest => 1000,
            Speed::Slow => 500,
            Speed::Normal => 250,
            Speed::Fast => 100,
            Speed::Fastest => 50,
        };
        Duration::from_millis(ms)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    match Cli::parse().command {
        Commands::Run {
            program,
            field,
            size,
            speed,
            max_steps,
            json,
        } => run(&program, field.as_deref(), size, speed, max_steps, json),
        Commands::Parse { program, json } => parse_only(&program, json),
    }
}

fn read_program(path: &Path) -> Result<gridbot_types::ast::Program> {
    let source =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let program = gridbot_parser::parse(&source)?;
    log::debug!(
        "parsed {}: {} top-level commands",
        path.display(),
        program.len()
    );
    Ok(program)
}

fn run(
    program_path: &Path,
    field_path: Option<&Path>,
    size: usize,
    speed: Option<Speed>,
    max_steps: u64,
    json: bool,
) -> Result<()> {
    let program = read_program(program_path)?;
    if program.is_empty() {
        bail!("no commands recognized in {}", program_path.display());
    }

    let world = match field_path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            field::load(&text).with_context(|| format!("loading field {}", path.display()))?
        }
        None => GridWorld::new(size)?,
    };

    let mut engine = Engine::new(program, world);
    let mut steps: u64 = 0;
    loop {
        match engine.step() {
            StepResult::Continue => {
                steps += 1;
                log::debug!(
                    "step {steps}: pc={} next={:?}",
                    engine.program_counter(),
                    engine.current_command_kind()
                );
                if steps >= max_steps {
                    bail!("aborted after {max_steps} steps; the program may not terminate");
                }
                if let Some(speed) = speed {
                    println!("{}", render(engine.grid()));
                    thread::sleep(speed.interval());
                }
            }
            StepResult::Completed => break,
            StepResult::Fault(fault) => {
                eprintln!("{}", render(engine.grid()));
                bail!("execution fault: {fault}");
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(engine.grid())?);
    } else {
        println!("{}", render(engine.grid()));
        let (x, y) = engine.grid().robot_position();
        println!(
            "done in {steps} steps; robot at ({x}, {y}) facing {}",
            engine.grid().robot_facing()
        );
    }
    Ok(())
}

fn parse_only(program_path: &Path, json: bool) -> Result<()> {
    let program = read_program(program_path)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&program)?);
    } else {
        println!("{program:#?}");
    }
    Ok(())
}

/// Render the grid as one glyph per cell, the robot drawn as an arrow in
/// its facing direction.
fn render(world: &GridWorld) -> String {
    let robot = world.robot_position();
    let mut out = String::with_capacity(world.size() * (world.size() + 1));
    for y in 0..world.size() {
        for x in 0..world.size() {
            let glyph = if (x, y) == robot {
                match world.robot_facing() {
                    Direction::Up => '^',
                    Direction::Right => '>',
                    Direction::Down => 'v',
                    Direction::Left => '<',
                }
            } else {
                match world.cell(x, y) {
                    Some(Cell::Wall) => '#',
                    Some(Cell::Marked) => '*',
                    _ => '.',
                }
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out.pop();
    out
}
