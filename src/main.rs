//! Umbral Grove - Entry Point
//!
//! Controls:
//! - WASD / arrows: Move
//! - Mouse: Aim, left button fires
//! - R: Reload
//! - Tab: Toggle auto-aim
//! - Escape: Pause/Unpause

use bevy::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Umbral Grove".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))
        // Our game plugin
        .add_plugins(umbral_grove::UmbralGrovePlugin)
        .run();
}
