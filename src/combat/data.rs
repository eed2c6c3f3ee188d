//! Weapon definitions loaded from RON files.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::core::DataLoadError;

/// Immutable stats for one weapon archetype.
#[derive(Deserialize, Clone, Debug)]
pub struct WeaponSpec {
    pub name: String,
    /// Damage per pellet
    pub damage: i32,
    /// Pellets per trigger pull
    pub projectile_count: u32,
    /// Seconds between shots
    pub fire_delay: f32,
    /// Seconds for a full reload
    pub reload_time: f32,
    pub max_ammo: u32,
    pub bullet_speed: f32,
    pub bullet_radius: f32,
}

/// Resource holding all loaded weapon definitions, keyed by file stem.
#[derive(Resource)]
pub struct WeaponRegistry {
    specs: HashMap<String, WeaponSpec>,
}

impl Default for WeaponRegistry {
    fn default() -> Self {
        let mut specs = HashMap::new();
        specs.insert("revolver".to_string(), Self::builtin_revolver());
        specs.insert("scattergun".to_string(), Self::builtin_scattergun());
        Self { specs }
    }
}

impl WeaponRegistry {
    /// Get a weapon spec by identifier, falling back to the revolver so a
    /// bad config name never aborts a session.
    pub fn get(&self, id: &str) -> WeaponSpec {
        if let Some(spec) = self.specs.get(id) {
            return spec.clone();
        }
        warn!("Unknown weapon id '{id}', falling back to revolver");
        Self::builtin_revolver()
    }

    pub fn builtin_revolver() -> WeaponSpec {
        WeaponSpec {
            name: "Revolver".to_string(),
            damage: 10,
            projectile_count: 1,
            fire_delay: 0.35,
            reload_time: 1.5,
            max_ammo: 6,
            bullet_speed: 600.0,
            bullet_radius: 4.0,
        }
    }

    pub fn builtin_scattergun() -> WeaponSpec {
        WeaponSpec {
            name: "Scattergun".to_string(),
            damage: 5,
            projectile_count: 5,
            fire_delay: 0.8,
            reload_time: 2.2,
            max_ammo: 4,
            bullet_speed: 520.0,
            bullet_radius: 3.0,
        }
    }
}

fn load_spec(path: &Path) -> Result<WeaponSpec, DataLoadError> {
    let display = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
        path: display.clone(),
        details: e.to_string(),
    })?;
    ron::from_str(&contents).map_err(|e| DataLoadError::ParseError {
        path: display,
        details: e.to_string(),
    })
}

/// Load weapon definitions from `assets/data/weapons/`, overriding the
/// compiled-in defaults. Missing directory or bad files leave the defaults
/// in place.
pub fn load_weapon_definitions(mut registry: ResMut<WeaponRegistry>) {
    let dir = Path::new("assets/data/weapons");

    let Ok(entries) = fs::read_dir(dir) else {
        warn!("Weapon definitions directory not found: {dir:?}, using built-in defaults");
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "ron") {
            let id = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("unknown")
                .to_string();

            match load_spec(&path) {
                Ok(spec) => {
                    info!("Loaded weapon definition: {} ({})", spec.name, id);
                    registry.specs.insert(id, spec);
                }
                Err(e) => error!("{e}"),
            }
        }
    }
}
