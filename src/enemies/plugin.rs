//! Enemy plugin - registers data loading, AI, and spawning systems.

use bevy::prelude::*;

use super::ai;
use super::components::*;
use super::data::{load_enemy_definitions, EnemyRegistry};
use super::director::{SpawnDirector, SpawnOrder};
use crate::combat::{CombatSet, ContactCooldown, Health};
use crate::core::{GameRng, GameState};
use crate::player::Player;
use crate::session::SessionScoped;

/// System set for enemy behavior and spawning.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnemySet;

/// Enemy plugin - handles enemy spawning and per-archetype AI.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EnemyRegistry>()
            .add_systems(OnEnter(GameState::Loading), load_enemy_definitions)
            .configure_sets(
                Update,
                EnemySet
                    .before(CombatSet::Resolve)
                    .run_if(in_state(GameState::InGame)),
            )
            .add_systems(
                Update,
                (
                    ai::tentacle_seek,
                    ai::eyebat_ai,
                    ai::elder_ai,
                    spawn_wave,
                )
                    .chain()
                    .in_set(EnemySet),
            );
    }
}

/// Turn one spawn order into a live enemy entity.
pub fn spawn_enemy(commands: &mut Commands, registry: &EnemyRegistry, order: SpawnOrder) {
    let stats = registry.get(order.kind).to_stats();
    let half = order.kind.half_extent();
    let color = match order.kind {
        EnemyKind::Tree => Color::srgb(0.25, 0.4, 0.2),
        EnemyKind::Tentacle => Color::srgb(0.55, 0.2, 0.5),
        EnemyKind::Eyebat => Color::srgb(0.75, 0.6, 0.15),
        EnemyKind::Elder => Color::srgb(0.7, 0.15, 0.15),
    };

    let mut entity = commands.spawn((
        Enemy,
        order.kind,
        Health::new(stats.max_health),
        ContactCooldown::default(),
        stats,
        Sprite {
            color,
            custom_size: Some(half * 2.0),
            ..default()
        },
        Transform::from_translation(order.position.extend(1.0)),
        SessionScoped,
    ));

    match order.kind {
        EnemyKind::Eyebat => {
            entity.insert(ShotClock::new(EYEBAT_SHOT_PERIOD));
        }
        EnemyKind::Elder => {
            entity.insert(ElderState::default());
            info!("The Elder has appeared");
        }
        _ => {}
    }
}

/// Advance the spawn director and realize the spawns it ordered.
fn spawn_wave(
    mut commands: Commands,
    time: Res<Time>,
    registry: Res<EnemyRegistry>,
    mut director: ResMut<SpawnDirector>,
    mut rng: ResMut<GameRng>,
    player_query: Query<&Transform, With<Player>>,
) {
    let Ok(player_transform) = player_query.get_single() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();

    for order in director.advance(time.delta_secs(), player_pos, &mut rng.0) {
        spawn_enemy(&mut commands, &registry, order);
    }
}
