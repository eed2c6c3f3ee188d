//! Umbral Grove - a 2D top-down survival action game in Bevy.
//!
//! Survive the haunted grove until the time limit runs out, mowing down
//! tentacles and eyebats while the Elder stirs at half-time.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, global events, geometry, the seedable RNG
//! - **Session**: Run lifecycle, clock, score, debug cheats
//! - **Player**: 8-way movement, aiming, buffs, follow camera
//! - **Combat**: Weapon state machine, bullets, collision arbitration
//! - **Enemies**: Archetypes, per-kind AI, spawn director, data files
//! - **Items**: Loot drops, pickups, timed boosts
//! - **UI**: HUD and menu screens

pub mod combat;
pub mod core;
pub mod enemies;
pub mod items;
pub mod player;
pub mod session;
pub mod ui;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct UmbralGrovePlugin;

impl Plugin for UmbralGrovePlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)
            // Session lifecycle
            .add_plugins(session::SessionPlugin)
            // Player systems
            .add_plugins(player::PlayerPlugin)
            // Combat systems
            .add_plugins(combat::CombatPlugin)
            // Enemy systems
            .add_plugins(enemies::EnemyPlugin)
            // Item systems
            .add_plugins(items::ItemPlugin)
            // UI systems
            .add_plugins(ui::UiPlugin);
    }
}
