//! Item plugin - registers pickup systems.

use bevy::prelude::*;

use super::systems;

/// Item plugin - loot drops and pickups.
pub struct ItemPlugin;

impl Plugin for ItemPlugin {
    fn build(&self, app: &mut App) {
        systems::setup_item_systems(app);
    }
}
