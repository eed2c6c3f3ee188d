//! Enemy data loading from RON files.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::components::{EnemyKind, EnemyStats};
use crate::core::DataLoadError;

/// Enemy definition loaded from a RON file.
#[derive(Deserialize, Clone, Debug)]
pub struct EnemyDefinition {
    pub name: String,
    pub max_health: i32,
    pub contact_damage: i32,
    pub move_speed: f32,
    pub can_shoot: bool,
}

impl EnemyDefinition {
    /// Convert to the EnemyStats component.
    pub fn to_stats(&self) -> EnemyStats {
        EnemyStats {
            max_health: self.max_health,
            contact_damage: self.contact_damage,
            move_speed: self.move_speed,
            can_shoot: self.can_shoot,
        }
    }

    /// Compiled-in fallback used when a data file is missing or garbled.
    pub fn builtin(kind: EnemyKind) -> Self {
        match kind {
            EnemyKind::Tree => Self {
                name: "Gnarled Tree".to_string(),
                max_health: 40,
                contact_damage: 5,
                move_speed: 0.0,
                can_shoot: false,
            },
            EnemyKind::Tentacle => Self {
                name: "Tentacle".to_string(),
                max_health: 30,
                contact_damage: 10,
                move_speed: 80.0,
                can_shoot: false,
            },
            EnemyKind::Eyebat => Self {
                name: "Eyebat".to_string(),
                max_health: 20,
                contact_damage: 5,
                move_speed: 110.0,
                can_shoot: true,
            },
            EnemyKind::Elder => Self {
                name: "The Elder".to_string(),
                max_health: 600,
                contact_damage: 25,
                move_speed: 40.0,
                can_shoot: true,
            },
        }
    }
}

/// Resource holding the definition for each enemy archetype.
#[derive(Resource)]
pub struct EnemyRegistry {
    definitions: HashMap<EnemyKind, EnemyDefinition>,
}

impl Default for EnemyRegistry {
    fn default() -> Self {
        let kinds = [
            EnemyKind::Tree,
            EnemyKind::Tentacle,
            EnemyKind::Eyebat,
            EnemyKind::Elder,
        ];
        Self {
            definitions: kinds
                .into_iter()
                .map(|k| (k, EnemyDefinition::builtin(k)))
                .collect(),
        }
    }
}

impl EnemyRegistry {
    /// Get the definition for an archetype. Every kind always has one
    /// because the registry starts from the compiled-in defaults.
    pub fn get(&self, kind: EnemyKind) -> &EnemyDefinition {
        self.definitions
            .get(&kind)
            .unwrap_or_else(|| unreachable!("registry seeded with all kinds"))
    }
}

fn load_definition(path: &Path) -> Result<EnemyDefinition, DataLoadError> {
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

/// Load enemy definitions from `assets/data/enemies/`, overriding the
/// compiled-in defaults per archetype.
pub fn load_enemy_definitions(mut registry: ResMut<EnemyRegistry>) {
    let dir = Path::new("assets/data/enemies");

    let Ok(entries) = fs::read_dir(dir) else {
        warn!("Enemy definitions directory not found: {dir:?}, using built-in defaults");
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.extension().is_some_and(|ext| ext == "ron") {
            continue;
        }

        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
        let Some(kind) = EnemyKind::from_id(stem) else {
            warn!("Ignoring enemy data file with unknown archetype: {path:?}");
            continue;
        };

        match load_definition(&path) {
            Ok(definition) => {
                info!("Loaded enemy definition: {} ({stem})", definition.name);
                registry.definitions.insert(kind, definition);
            }
            Err(e) => error!("{e}"),
        }
    }

    info!("Enemy registry ready ({} archetypes)", registry.definitions.len());
}
