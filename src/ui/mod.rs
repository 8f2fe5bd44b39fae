//! UI module that visualizes the game state using Bevy
//!
//! This module is purely for visualization and input - all game logic
//! is in the `game` module. The UI reads state from `Park` and renders
//! it with Bevy's 2D graphics.

mod components;
mod input;
mod placement;
pub mod spawner;
mod sync;
mod world;

use bevy::prelude::*;

pub use components::{EntityMappings, ParkResource};

use components::{GameNotice, HoverState};
use input::handle_input;
use placement::{
    handle_placement_click, handle_ride_buttons, handle_ride_keyboard, setup_toolbar,
    update_button_borders, update_cursor_cell, update_ghost_preview,
};
use spawner::spawn_initial_visuals;
use sync::{sync_items, sync_player, sync_rides, update_hud_text};
use world::setup_world;

/// Plugin to register all UI systems
pub struct ThemeParkUiPlugin;

impl Plugin for ThemeParkUiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ParkResource>()
            .init_resource::<EntityMappings>()
            .init_resource::<HoverState>()
            .add_message::<GameNotice>()
            .add_systems(
                Startup,
                (
                    setup_world,
                    spawn_initial_visuals.after(setup_world),
                    setup_toolbar,
                ),
            )
            .add_systems(
                Update,
                (
                    handle_input,
                    handle_ride_buttons,
                    handle_ride_keyboard,
                    update_cursor_cell,
                    update_ghost_preview,
                    handle_placement_click.after(update_cursor_cell),
                    sync_player,
                    sync_items,
                    sync_rides,
                    update_hud_text,
                    update_button_borders,
                ),
            );
    }
}
