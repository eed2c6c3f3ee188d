//! Core game module - states, events, geometry, and the shared RNG.
//!
//! This module provides the foundation that all other game systems build upon.

mod error;
mod events;
pub mod geometry;
mod plugin;
mod rng;
mod states;

pub use error::DataLoadError;
pub use events::*;
pub use plugin::CorePlugin;
pub use rng::GameRng;
pub use states::*;
