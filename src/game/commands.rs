//! Input commands and the events they produce
//!
//! Input handlers never mutate the park directly; they build a
//! `Command` and hand it to `Park::apply`, which reports user-visible
//! side effects as `GameEvent`s.

use anyhow::{bail, Context, Result};

use super::types::{GridPos, RideId, RideKind};

/// A single input-originated mutation of the park
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the player one cardinal step
    Move { dx: i32, dy: i32 },
    /// Arm a ride kind for the next placement click
    SelectRide(RideKind),
    /// Place a ride of the given kind at a cell
    PlaceRide { kind: RideKind, cell: GridPos },
}

/// A user-visible side effect of a committed command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The player reached an unvisited ride
    RideVisited { name: &'static str },
    /// The player picked up an item; `score` is the new total
    ItemCollected { reward: u32, score: u32 },
    /// A ride was appended to the park
    RidePlaced {
        id: RideId,
        kind: RideKind,
        cell: GridPos,
    },
}

/// Parse a move script like "RRDDU" into move commands
///
/// Accepts U/D/L/R in either case; whitespace is ignored.
pub fn parse_moves(script: &str) -> Result<Vec<Command>> {
    let mut commands = Vec::new();
    for ch in script.chars() {
        if ch.is_whitespace() {
            continue;
        }
        let (dx, dy) = match ch.to_ascii_uppercase() {
            'U' => (0, -1),
            'D' => (0, 1),
            'L' => (-1, 0),
            'R' => (1, 0),
            other => bail!("unknown move '{}' (expected U, D, L or R)", other),
        };
        commands.push(Command::Move { dx, dy });
    }
    Ok(commands)
}

/// Parse a placement spec like "carousel:3,3"
pub fn parse_placement(spec: &str) -> Result<(RideKind, GridPos)> {
    let (kind_str, cell_str) = spec
        .split_once(':')
        .with_context(|| format!("placement '{}' missing ':' (expected kind:x,y)", spec))?;
    let kind = RideKind::parse(kind_str)
        .with_context(|| format!("unknown ride kind '{}'", kind_str))?;
    let (x_str, y_str) = cell_str
        .split_once(',')
        .with_context(|| format!("placement '{}' missing ',' (expected kind:x,y)", spec))?;
    let x = x_str
        .trim()
        .parse::<i32>()
        .with_context(|| format!("bad x coordinate '{}'", x_str))?;
    let y = y_str
        .trim()
        .parse::<i32>()
        .with_context(|| format!("bad y coordinate '{}'", y_str))?;
    Ok((kind, GridPos::new(x, y)))
}
