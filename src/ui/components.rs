//! UI components and resources for linking Bevy entities to game state

use bevy::prelude::*;
use std::collections::HashMap;

use crate::game::{GameEvent, GridPos, Park, RideId, RideKind};

/// Resource wrapper for the game state
#[derive(Resource)]
pub struct ParkResource(pub Park);

impl Default for ParkResource {
    fn default() -> Self {
        Self(Park::create_default_park())
    }
}

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Marker for background grid lines
#[derive(Component)]
pub struct GridLine;

/// Marker for the player avatar visual
#[derive(Component)]
pub struct PlayerVisual;

/// Links a Bevy entity to an item by its index in the park's item list
#[derive(Component)]
pub struct ItemLink(pub usize);

/// Resource to track Bevy entities mapped to placed rides
#[derive(Resource, Default)]
pub struct EntityMappings {
    pub rides: HashMap<RideId, Entity>,
}

/// Resource tracking which grid cell the cursor is over, if any
#[derive(Resource, Default)]
pub struct HoverState {
    pub cell: Option<GridPos>,
}

/// Marker for ghost/preview entities
#[derive(Component)]
pub struct GhostPreview;

/// Marker for ride toolbar buttons
#[derive(Component)]
pub struct RideButton(pub RideKind);

/// Marker for HUD text elements
#[derive(Component)]
pub enum HudText {
    /// The "Score: {n}" line
    Score,
    /// The ride-reached notification line
    Notice,
}

/// A game event forwarded from the input systems to the HUD
#[derive(Message)]
pub struct GameNotice(pub GameEvent);
