//! Pickup systems - loot drops, aging, bobbing, and collection.

use bevy::prelude::*;
use rand::Rng;

use super::components::*;
use crate::combat::{Health, Weapon};
use crate::core::geometry::aabb_overlap;
use crate::core::{GameRng, GameState, ItemPickupEvent, KillEvent};
use crate::player::{ActiveBuffs, Player, PLAYER_HALF_EXTENT};
use crate::session::{SessionScoped, SessionStats};

/// Chance that a dead enemy drops a bonus item next to its experience drop.
const BONUS_DROP_CHANCE: f64 = 0.3;

/// How far the bonus drop can scatter from the corpse, per axis.
const BONUS_DROP_SCATTER: f32 = 30.0;

/// Bobbing amplitude of the item sprite, in world units.
const BOB_AMPLITUDE: f32 = 4.0;
const BOB_FREQUENCY: f32 = 3.0;

/// Marker for the visual child that bobs; the root entity keeps the true
/// pickup position.
#[derive(Component)]
struct ItemSprite;

/// Configure item systems.
pub fn setup_item_systems(app: &mut App) {
    app.add_systems(
        Update,
        (spawn_drops, age_items, bob_items, collect_items)
            .chain()
            .run_if(in_state(GameState::InGame)),
    );
}

/// Spawn one pickup at a position.
pub fn spawn_item(commands: &mut Commands, kind: ItemKind, position: Vec2) {
    commands
        .spawn((
            Item::new(kind),
            Transform::from_translation(position.extend(2.0)),
            Visibility::default(),
            SessionScoped,
        ))
        .with_children(|parent| {
            parent.spawn((
                ItemSprite,
                Sprite {
                    color: kind.color(),
                    custom_size: Some(ITEM_HALF_EXTENT * 2.0),
                    ..default()
                },
                Transform::default(),
            ));
        });
}

/// Drop loot where enemies died: always an experience shard, and with a
/// 30% roll one bonus item scattered nearby.
fn spawn_drops(
    mut commands: Commands,
    mut kills: EventReader<KillEvent>,
    mut rng: ResMut<GameRng>,
) {
    for kill in kills.read() {
        spawn_item(&mut commands, ItemKind::Experience, kill.position);

        if rng.0.gen_bool(BONUS_DROP_CHANCE) {
            let offset = Vec2::new(
                rng.0.gen_range(-BONUS_DROP_SCATTER..BONUS_DROP_SCATTER),
                rng.0.gen_range(-BONUS_DROP_SCATTER..BONUS_DROP_SCATTER),
            );
            let kind = ItemKind::random_bonus(&mut rng.0);
            spawn_item(&mut commands, kind, kill.position + offset);
        }
    }
}

/// Age items and remove the expired ones.
fn age_items(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Item)>,
) {
    for (entity, mut item) in query.iter_mut() {
        if item.tick(time.delta_secs()) {
            commands.entity(entity).despawn_recursive();
        }
    }
}

/// Float the item sprites up and down; the pickup position itself stays
/// put so collection is unaffected.
fn bob_items(
    item_query: Query<(&Item, &Children)>,
    mut sprite_query: Query<&mut Transform, With<ItemSprite>>,
) {
    for (item, children) in item_query.iter() {
        for child in children.iter() {
            if let Ok(mut transform) = sprite_query.get_mut(*child) {
                transform.translation.y = (item.float_phase * BOB_FREQUENCY).sin() * BOB_AMPLITUDE;
            }
        }
    }
}

/// Collect items the player overlaps and apply their effects.
fn collect_items(
    mut commands: Commands,
    item_query: Query<(Entity, &Transform, &Item)>,
    mut player_query: Query<
        (&Transform, &mut Health, &mut Weapon, &mut ActiveBuffs),
        With<Player>,
    >,
    mut stats: ResMut<SessionStats>,
    mut pickups: EventWriter<ItemPickupEvent>,
) {
    let Ok((player_transform, mut health, mut weapon, mut buffs)) = player_query.get_single_mut()
    else {
        return;
    };
    let player_center = player_transform.translation.truncate();

    for (entity, transform, item) in item_query.iter() {
        let center = transform.translation.truncate();
        if !aabb_overlap(center, ITEM_HALF_EXTENT, player_center, PLAYER_HALF_EXTENT) {
            continue;
        }

        match item.kind {
            ItemKind::Health => health.heal(HEALTH_PICKUP_AMOUNT),
            ItemKind::Ammo => weapon.restock(),
            ItemKind::SpeedBoost => buffs.apply_speed(),
            ItemKind::DamageBoost => buffs.apply_damage(),
            ItemKind::Experience => stats.experience += 1,
        }

        pickups.send(ItemPickupEvent { kind: item.kind });
        commands.entity(entity).despawn_recursive();
    }
}
