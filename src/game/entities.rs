//! Entity records for the theme park
//!
//! Player, items, obstacles, rides, and visitors - plain data,
//! standalone implementations.

use super::types::{
    GridPos, Rgb, RideId, RideKind, COLOR_ITEM, COLOR_OBSTACLE, COLOR_PLAYER, PLAYER_SIZE,
};

/// The player avatar
#[derive(Debug, Clone)]
pub struct Player {
    pub cell: GridPos,
    pub color: Rgb,
    /// Rendered sprite size in pixels
    pub size: f32,
    /// Non-negative, monotonically non-decreasing
    pub score: u32,
}

impl Player {
    pub fn new(cell: GridPos) -> Self {
        Self {
            cell,
            color: COLOR_PLAYER,
            size: PLAYER_SIZE,
            score: 0,
        }
    }
}

/// A collectible item
#[derive(Debug, Clone)]
pub struct Item {
    pub cell: GridPos,
    pub color: Rgb,
    /// One-way: false -> true
    pub collected: bool,
}

impl Item {
    pub fn new(cell: GridPos) -> Self {
        Self {
            cell,
            color: COLOR_ITEM,
            collected: false,
        }
    }
}

/// An impassable obstacle; immutable after creation
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub cell: GridPos,
    pub color: Rgb,
}

impl Obstacle {
    pub fn new(cell: GridPos) -> Self {
        Self {
            cell,
            color: COLOR_OBSTACLE,
        }
    }
}

/// A placed ride attraction
#[derive(Debug, Clone)]
pub struct Ride {
    pub id: RideId,
    pub cell: GridPos,
    pub kind: RideKind,
    /// One-way: false -> true, set the first time the player reaches it
    pub visited: bool,
}

impl Ride {
    pub fn new(id: RideId, cell: GridPos, kind: RideKind) -> Self {
        Self {
            id,
            cell,
            kind,
            visited: false,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.display_name()
    }
}

/// A park visitor. The collection is never populated or moved; it is
/// carried and rendered for completeness.
#[derive(Debug, Clone)]
pub struct Visitor {
    pub cell: GridPos,
}

impl Visitor {
    #[allow(dead_code)]
    pub fn new(cell: GridPos) -> Self {
        Self { cell }
    }
}
