//! Combat module - weapons, bullets, health, and collision arbitration.

mod components;
mod data;
mod plugin;
mod systems;

pub use components::*;
pub use data::{WeaponRegistry, WeaponSpec};
pub use plugin::CombatPlugin;
pub use systems::{first_hit, spawn_bullet, CombatSet, EnemyTarget, HitSurface};
