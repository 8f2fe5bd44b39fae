//! Systems for syncing Bevy entities with game state
//!
//! Every frame the whole park state is read back: the player visual
//! follows the player cell, collected items disappear, and any ride
//! without a visual gets one. No dirty tracking; the state is small.

use bevy::prelude::*;

use super::components::{
    EntityMappings, GameNotice, HudText, ItemLink, ParkResource, PlayerVisual,
};
use super::spawner::{player_world_pos, spawn_ride_visual, Z_PLAYER};
use crate::game::GameEvent;

/// System to keep the player visual on the player's cell
pub fn sync_player(
    park: Res<ParkResource>,
    mut player_query: Query<&mut Transform, With<PlayerVisual>>,
) {
    let position = player_world_pos(&park.0.grid, &park.0.player);
    for mut transform in player_query.iter_mut() {
        transform.translation = position.extend(Z_PLAYER);
    }
}

/// System to hide collected items
pub fn sync_items(
    park: Res<ParkResource>,
    mut item_query: Query<(&ItemLink, &mut Visibility)>,
) {
    for (link, mut visibility) in item_query.iter_mut() {
        if let Some(item) = park.0.items.get(link.0) {
            *visibility = if item.collected {
                Visibility::Hidden
            } else {
                Visibility::Inherited
            };
        }
    }
}

/// System to spawn visuals for rides that don't have one yet
pub fn sync_rides(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    park: Res<ParkResource>,
    mut mappings: ResMut<EntityMappings>,
) {
    for ride in &park.0.rides {
        if !mappings.rides.contains_key(&ride.id) {
            spawn_ride_visual(
                &mut commands,
                &mut meshes,
                &mut materials,
                &park.0.grid,
                ride,
                &mut mappings,
            );
        }
    }
}

/// System to update the HUD score and notice lines
pub fn update_hud_text(
    park: Res<ParkResource>,
    mut notices: MessageReader<GameNotice>,
    mut text_query: Query<(&HudText, &mut Text)>,
) {
    let mut latest_notice = None;
    for GameNotice(event) in notices.read() {
        if let GameEvent::RideVisited { name } = event {
            bevy::log::info!("Player reached the {}", name);
            latest_notice = Some(format!("You have reached the {}!", name));
        }
    }

    for (hud, mut text) in text_query.iter_mut() {
        match hud {
            HudText::Score => {
                **text = format!("Score: {}", park.0.player.score);
            }
            HudText::Notice => {
                if let Some(notice) = &latest_notice {
                    **text = notice.clone();
                }
            }
        }
    }
}
