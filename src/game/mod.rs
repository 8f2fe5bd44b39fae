//! Standalone game logic module
//!
//! This module contains all the core theme park game logic that can run
//! independently of the Bevy game engine. It can be driven and tested
//! via console without needing to boot up the full game.

mod commands;
mod entities;
mod grid;
mod park;
mod types;

// Re-export public types for external use
// These may not be used within this crate but are part of the public API
#[allow(unused_imports)]
pub use commands::{parse_moves, parse_placement, Command, GameEvent};
#[allow(unused_imports)]
pub use entities::{Item, Obstacle, Player, Ride, Visitor};
#[allow(unused_imports)]
pub use grid::Grid;
#[allow(unused_imports)]
pub use types::{
    GridPos, Rgb, RideId, RideKind, CANVAS_HEIGHT, CANVAS_WIDTH, CELL_SIZE, COLOR_ITEM,
    COLOR_OBSTACLE, COLOR_PLAYER, COLOR_VISITOR, ITEM_REWARD, PLAYER_SIZE,
};
pub use park::Park;
