//! World setup systems for the camera and background grid

use bevy::prelude::*;

use super::components::{GridLine, MainCamera, ParkResource};
use super::spawner::Z_GRID;

/// Color of the background grid lines
const GRID_LINE_COLOR: Color = Color::srgb(0.8, 0.8, 0.8);

/// System to setup the camera and the background grid lattice
pub fn setup_world(mut commands: Commands, park: Res<ParkResource>) {
    let grid = &park.0.grid;

    // A 2D camera centered on the play surface
    commands.spawn((MainCamera, Camera2d));

    // Vertical lines, one per cell boundary
    for col in 0..=grid.cols() {
        let x = col as f32 * grid.cell_size - grid.width / 2.0;
        commands.spawn((
            GridLine,
            Sprite {
                color: GRID_LINE_COLOR,
                custom_size: Some(Vec2::new(1.0, grid.height)),
                ..default()
            },
            Transform::from_xyz(x, 0.0, Z_GRID),
        ));
    }

    // Horizontal lines
    for row in 0..=grid.rows() {
        let y = grid.height / 2.0 - row as f32 * grid.cell_size;
        commands.spawn((
            GridLine,
            Sprite {
                color: GRID_LINE_COLOR,
                custom_size: Some(Vec2::new(grid.width, 1.0)),
                ..default()
            },
            Transform::from_xyz(0.0, y, Z_GRID),
        ));
    }
}
