//! Keyboard capture for one rendered frame.

use macroquad::prelude::{KeyCode, is_key_pressed};
use muncher_app::app_loop::AppCommand;
use muncher_core::Direction;

const STEER_KEYS: [(KeyCode, Direction); 4] = [
    (KeyCode::Up, Direction::Up),
    (KeyCode::Down, Direction::Down),
    (KeyCode::Left, Direction::Left),
    (KeyCode::Right, Direction::Right),
];

pub fn capture_frame_input() -> Vec<AppCommand> {
    let mut commands = Vec::new();

    for (key, direction) in STEER_KEYS {
        if is_key_pressed(key) {
            commands.push(AppCommand::Steer(direction));
        }
    }
    if is_key_pressed(KeyCode::Space) {
        commands.push(AppCommand::StartPauseResume);
    }
    if is_key_pressed(KeyCode::R) {
        commands.push(AppCommand::Restart);
    }

    commands
}
