//! Ride selection and placement systems
//!
//! A toolbar button (or digit key) arms a ride kind; the next click on
//! the play surface places a ride of that kind at the clicked cell.

use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;

use super::components::{
    EntityMappings, GameNotice, GhostPreview, HoverState, HudText, MainCamera, ParkResource,
    RideButton,
};
use super::spawner::{cell_to_world, spawn_ride_visual, world_to_pixel, Z_GHOST};
use crate::game::{Command, GameEvent, RideKind};

/// Toolbar button base color per ride kind
fn button_color(kind: RideKind) -> Color {
    match kind {
        RideKind::FerrisWheel => Color::srgb(0.7, 0.3, 0.3),
        RideKind::Carousel => Color::srgb(0.7, 0.6, 0.2),
        RideKind::RollerCoaster => Color::srgb(0.3, 0.4, 0.7),
    }
}

/// System to setup the HUD and the ride toolbar
pub fn setup_toolbar(mut commands: Commands) {
    // Status panel at top-left of screen
    commands
        .spawn((
            Node {
                width: Val::Auto,
                height: Val::Auto,
                position_type: PositionType::Absolute,
                top: Val::Px(10.0),
                left: Val::Px(10.0),
                padding: UiRect::all(Val::Px(10.0)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(5.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Score: 0"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.2, 1.0, 0.2)),
                HudText::Score,
            ));

            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 1.0, 0.5)),
                HudText::Notice,
            ));
        });

    // Ride toolbar at bottom of screen
    commands
        .spawn((Node {
            width: Val::Percent(100.0),
            height: Val::Auto,
            position_type: PositionType::Absolute,
            bottom: Val::Px(20.0),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            column_gap: Val::Px(10.0),
            ..default()
        },))
        .with_children(|parent| {
            spawn_ride_button(parent, RideKind::FerrisWheel, "Ferris Wheel [1]");
            spawn_ride_button(parent, RideKind::Carousel, "Carousel [2]");
            spawn_ride_button(parent, RideKind::RollerCoaster, "Roller Coaster [3]");
        });
}

fn spawn_ride_button(parent: &mut ChildSpawnerCommands, kind: RideKind, text: &str) {
    parent
        .spawn((
            RideButton(kind),
            Button,
            Node {
                padding: UiRect::all(Val::Px(10.0)),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BorderColor::all(Color::WHITE),
            BackgroundColor(button_color(kind)),
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(text),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

/// System to handle ride toolbar button clicks
pub fn handle_ride_buttons(
    mut park: ResMut<ParkResource>,
    mut interaction_query: Query<
        (&Interaction, &RideButton, &mut BorderColor),
        Changed<Interaction>,
    >,
) {
    for (interaction, button, mut border_color) in interaction_query.iter_mut() {
        match *interaction {
            Interaction::Pressed => {
                park.0.apply(Command::SelectRide(button.0));
            }
            Interaction::Hovered => {
                *border_color = BorderColor::all(Color::srgb(1.0, 1.0, 0.0));
            }
            Interaction::None => {
                *border_color = BorderColor::all(if park.0.selected_ride == Some(button.0) {
                    Color::srgb(0.0, 1.0, 0.0)
                } else {
                    Color::WHITE
                });
            }
        }
    }
}

/// System to handle keyboard shortcuts for ride selection
pub fn handle_ride_keyboard(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut park: ResMut<ParkResource>,
) {
    if keyboard.just_pressed(KeyCode::Digit1) {
        park.0.apply(Command::SelectRide(RideKind::FerrisWheel));
    }
    if keyboard.just_pressed(KeyCode::Digit2) {
        park.0.apply(Command::SelectRide(RideKind::Carousel));
    }
    if keyboard.just_pressed(KeyCode::Digit3) {
        park.0.apply(Command::SelectRide(RideKind::RollerCoaster));
    }
}

/// System to track which grid cell the cursor is over
pub fn update_cursor_cell(
    windows: Query<&Window>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    park: Res<ParkResource>,
    mut hover: ResMut<HoverState>,
) {
    let Ok(window) = windows.single() else {
        return;
    };

    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    let Some(cursor_position) = window.cursor_position() else {
        hover.cell = None;
        return;
    };

    let Ok(world_position) = camera.viewport_to_world_2d(camera_transform, cursor_position) else {
        hover.cell = None;
        return;
    };

    let grid = &park.0.grid;
    let (px, py) = world_to_pixel(grid, world_position);
    let cell = grid.cell_at_pixel(px, py);

    hover.cell = if grid.contains(cell) { Some(cell) } else { None };
}

/// System to update the ghost highlight on the placement target cell
pub fn update_ghost_preview(
    mut commands: Commands,
    park: Res<ParkResource>,
    hover: Res<HoverState>,
    ghost_query: Query<Entity, With<GhostPreview>>,
) {
    // Remove old ghost entities
    for entity in ghost_query.iter() {
        commands.entity(entity).despawn();
    }

    // Only show the highlight while a placement is pending
    if park.0.selected_ride.is_none() {
        return;
    }
    let Some(cell) = hover.cell else {
        return;
    };

    let center = cell_to_world(&park.0.grid, cell);
    let cell_size = park.0.grid.cell_size;

    commands.spawn((
        GhostPreview,
        Sprite {
            color: Color::srgba(1.0, 1.0, 1.0, 0.5),
            custom_size: Some(Vec2::splat(cell_size)),
            ..default()
        },
        Transform::from_translation(center.extend(Z_GHOST)),
    ));
}

/// System to handle placement clicks
pub fn handle_placement_click(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut park: ResMut<ParkResource>,
    hover: Res<HoverState>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut mappings: ResMut<EntityMappings>,
    mut notices: MessageWriter<GameNotice>,
    // Check if mouse is over UI
    interaction_query: Query<&Interaction, With<Button>>,
) {
    // Don't place if clicking on UI
    for interaction in interaction_query.iter() {
        if *interaction == Interaction::Pressed || *interaction == Interaction::Hovered {
            return;
        }
    }

    if !mouse_button.just_pressed(MouseButton::Left) {
        return;
    }

    let Some(kind) = park.0.selected_ride else {
        return;
    };
    let Some(cell) = hover.cell else {
        return;
    };

    for event in park.0.apply(Command::PlaceRide { kind, cell }) {
        if let GameEvent::RidePlaced { id, kind, cell } = event {
            if let Some(ride) = park.0.rides.iter().find(|ride| ride.id == id) {
                spawn_ride_visual(
                    &mut commands,
                    &mut meshes,
                    &mut materials,
                    &park.0.grid,
                    ride,
                    &mut mappings,
                );
            }
            bevy::log::info!(
                "Placed a {} at ({}, {})",
                kind.display_name(),
                cell.x,
                cell.y
            );
        }
        notices.write(GameNotice(event));
    }
}

/// Update button border colors to show the current selection
pub fn update_button_borders(
    park: Res<ParkResource>,
    mut button_query: Query<(&RideButton, &mut BorderColor)>,
) {
    if !park.is_changed() {
        return;
    }

    for (button, mut border_color) in button_query.iter_mut() {
        *border_color = BorderColor::all(if park.0.selected_ride == Some(button.0) {
            Color::srgb(0.0, 1.0, 0.0)
        } else {
            Color::WHITE
        });
    }
}
