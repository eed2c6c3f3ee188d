//! Session module - run lifecycle, clock, score, and debug cheats.

mod config;
mod debug;
mod plugin;

pub use config::SessionConfig;
pub use plugin::{
    final_score, setup_session, LastSessionReport, SessionClock, SessionPlugin, SessionScoped,
    SessionStats,
};

pub use debug::setup_debug_systems;
