//! Enemies module - archetypes, per-kind AI, data, and the spawn director.

mod ai;
mod components;
pub mod data;
mod director;
mod plugin;

pub use components::*;
pub use data::EnemyRegistry;
pub use director::{spawn_interval, SpawnDirector, SpawnOrder};
pub use plugin::{spawn_enemy, EnemyPlugin};
