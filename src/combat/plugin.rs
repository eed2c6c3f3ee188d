//! Combat plugin - weapon handling, bullets, and collision resolution.

use bevy::prelude::*;

use super::data::{load_weapon_definitions, WeaponRegistry};
use super::systems;
use crate::core::GameState;

/// Combat plugin - handles all combat systems.
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WeaponRegistry>()
            .add_systems(OnEnter(GameState::Loading), load_weapon_definitions);

        systems::setup_combat_systems(app);
    }
}
