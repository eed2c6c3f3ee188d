//! Player plugin - registers movement, aiming, and camera systems.

use bevy::prelude::*;

use super::movement;

/// Player plugin - handles movement, aiming, and the follow camera.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        movement::setup_movement_systems(app);
    }
}
