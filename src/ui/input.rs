//! Input handling systems

use bevy::prelude::*;

use super::components::{GameNotice, ParkResource};
use crate::game::Command;

/// Handle keyboard input: arrow keys move the player one cell,
/// Escape exits
pub fn handle_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut park: ResMut<ParkResource>,
    mut notices: MessageWriter<GameNotice>,
    mut exit: MessageWriter<AppExit>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }

    let step = if keyboard.just_pressed(KeyCode::ArrowUp) {
        Some((0, -1))
    } else if keyboard.just_pressed(KeyCode::ArrowDown) {
        Some((0, 1))
    } else if keyboard.just_pressed(KeyCode::ArrowLeft) {
        Some((-1, 0))
    } else if keyboard.just_pressed(KeyCode::ArrowRight) {
        Some((1, 0))
    } else {
        None
    };

    if let Some((dx, dy)) = step {
        for event in park.0.apply(Command::Move { dx, dy }) {
            notices.write(GameNotice(event));
        }
    }
}
