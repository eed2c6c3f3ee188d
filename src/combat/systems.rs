//! Combat systems - firing, bullet motion, collision resolution.

use bevy::prelude::*;

use super::components::*;
use crate::core::geometry::{aabb_overlap, circle_contains};
use crate::core::{GameState, KillEvent};
use crate::enemies::{Enemy, EnemyKind, EnemyStats, ElderState};
use crate::player::{ActiveBuffs, AimTarget, Player, PLAYER_HALF_EXTENT};
use crate::session::SessionScoped;

/// Distance from the player's center to the weapon muzzle, along the aim
/// line. Independent of movement: firing while running aims the same way.
const MUZZLE_OFFSET: f32 = 24.0;

/// Seconds an enemy must wait between contact-damage applications.
const CONTACT_DAMAGE_DELAY: f32 = 0.5;

/// System set ordering for combat.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CombatSet {
    /// Weapon timers and fire attempts
    Fire,
    /// Bullet integration and expiry
    Move,
    /// Collision arbitration and damage
    Resolve,
}

/// Configure combat systems.
pub fn setup_combat_systems(app: &mut App) {
    app.configure_sets(
        Update,
        (CombatSet::Fire, CombatSet::Move, CombatSet::Resolve)
            .chain()
            .run_if(in_state(GameState::InGame)),
    )
    .add_systems(
        Update,
        (tick_weapons, request_reload, fire_weapon).in_set(CombatSet::Fire),
    )
    .add_systems(Update, move_bullets.in_set(CombatSet::Move))
    .add_systems(
        Update,
        (player_bullet_hits, enemy_bullet_hits, contact_damage).in_set(CombatSet::Resolve),
    );
}

/// Spawn one bullet entity with its placeholder sprite.
pub fn spawn_bullet(
    commands: &mut Commands,
    position: Vec2,
    velocity: Vec2,
    damage: i32,
    radius: f32,
    faction: Faction,
) {
    let color = match faction {
        Faction::Player => Color::srgb(0.95, 0.85, 0.4),
        Faction::Enemy => Color::srgb(0.9, 0.3, 0.25),
    };
    commands.spawn((
        Bullet {
            velocity,
            damage,
            radius,
        },
        faction,
        Sprite {
            color,
            custom_size: Some(Vec2::splat(radius * 2.0)),
            ..default()
        },
        Transform::from_translation(position.extend(5.0)),
        SessionScoped,
    ));
}

/// Advance weapon cooldown and reload timers.
fn tick_weapons(time: Res<Time>, mut query: Query<&mut Weapon>) {
    for mut weapon in query.iter_mut() {
        weapon.tick(time.delta_secs());
    }
}

/// Manual reload on R.
fn request_reload(keyboard: Res<ButtonInput<KeyCode>>, mut query: Query<&mut Weapon>) {
    if keyboard.just_pressed(KeyCode::KeyR) {
        for mut weapon in query.iter_mut() {
            weapon.start_reload();
        }
    }
}

/// While the fire button is held, attempt to fire and fan out the pellets.
///
/// Rejected attempts (reloading, cooldown, empty magazine) are silent; the
/// empty-magazine case has already auto-started the reload inside
/// `Weapon::try_fire`.
fn fire_weapon(
    mut commands: Commands,
    mouse: Res<ButtonInput<MouseButton>>,
    aim: Res<AimTarget>,
    mut query: Query<(&Transform, &mut Weapon, &ActiveBuffs), With<Player>>,
) {
    if !mouse.pressed(MouseButton::Left) {
        return;
    }
    let Ok((transform, mut weapon, buffs)) = query.get_single_mut() else {
        return;
    };

    let origin = transform.translation.truncate();
    let aim_vector = aim.point - origin;

    if weapon.try_fire().is_err() {
        return;
    }

    let damage = weapon.spec.damage * buffs.damage_multiplier();
    let muzzle = origin + aim_vector.try_normalize().unwrap_or(Vec2::X) * MUZZLE_OFFSET;
    for direction in spread_directions(aim_vector, weapon.spec.projectile_count, SPREAD_STEP_DEG) {
        spawn_bullet(
            &mut commands,
            muzzle,
            direction * weapon.spec.bullet_speed,
            damage,
            weapon.spec.bullet_radius,
            Faction::Player,
        );
    }
}

/// Integrate bullet positions and despawn the ones that strayed out of
/// bounds.
fn move_bullets(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Transform, &Bullet)>,
) {
    let dt = time.delta_secs();
    for (entity, mut transform, bullet) in query.iter_mut() {
        transform.translation += (bullet.velocity * dt).extend(0.0);
        if bullet_out_of_bounds(transform.translation.truncate()) {
            commands.entity(entity).despawn_recursive();
        }
    }
}

/// Which surface of an enemy a bullet struck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitSurface {
    /// Absorbed by the Elder's shield; no body damage
    Shield,
    /// Regular body hit
    Body,
}

/// One enemy as seen by the bullet arbiter.
#[derive(Debug, Clone, Copy)]
pub struct EnemyTarget {
    pub entity: Entity,
    pub center: Vec2,
    pub half: Vec2,
    /// Present only on shield bearers with radius still above zero
    pub shield_radius: Option<f32>,
}

/// Find the first enemy (in list order) this bullet hits, if any.
///
/// The shield test runs before the body test for shielded targets, and a
/// shield hit absorbs the bullet outright. At most one target is hit per
/// bullet; callers must stop scanning after the first.
pub fn first_hit(
    bullet_center: Vec2,
    bullet_half: Vec2,
    targets: &[EnemyTarget],
) -> Option<(Entity, HitSurface)> {
    for target in targets {
        if let Some(radius) = target.shield_radius {
            if circle_contains(target.center, radius, bullet_center) {
                return Some((target.entity, HitSurface::Shield));
            }
        }
        if aabb_overlap(bullet_center, bullet_half, target.center, target.half) {
            return Some((target.entity, HitSurface::Body));
        }
    }
    None
}

/// Resolve player bullets against the enemy population.
fn player_bullet_hits(
    mut commands: Commands,
    bullet_query: Query<(Entity, &Transform, &Bullet, &Faction)>,
    mut enemy_query: Query<
        (Entity, &Transform, &EnemyKind, &mut Health, Option<&ElderState>),
        With<Enemy>,
    >,
    mut kills: EventWriter<KillEvent>,
) {
    // Stable target list so "first enemy in order" is deterministic
    let targets: Vec<EnemyTarget> = enemy_query
        .iter()
        .map(|(entity, transform, kind, _, elder)| EnemyTarget {
            entity,
            center: transform.translation.truncate(),
            half: kind.half_extent(),
            shield_radius: elder
                .map(|e| e.shield_radius)
                .filter(|radius| *radius > 0.0),
        })
        .collect();

    for (bullet_entity, bullet_transform, bullet, faction) in bullet_query.iter() {
        if *faction != Faction::Player {
            continue;
        }
        let center = bullet_transform.translation.truncate();
        let Some((hit_entity, surface)) =
            first_hit(center, Vec2::splat(bullet.radius), &targets)
        else {
            continue;
        };

        // The bullet is consumed either way; only body hits damage
        commands.entity(bullet_entity).despawn_recursive();
        if surface == HitSurface::Shield {
            continue;
        }

        if let Ok((entity, transform, kind, mut health, _)) = enemy_query.get_mut(hit_entity) {
            if health.take_damage(bullet.damage) {
                kills.send(KillEvent {
                    kind: *kind,
                    position: transform.translation.truncate(),
                });
                commands.entity(entity).despawn_recursive();
            }
        }
    }
}

/// Resolve enemy bullets against the player.
fn enemy_bullet_hits(
    mut commands: Commands,
    bullet_query: Query<(Entity, &Transform, &Bullet, &Faction)>,
    mut player_query: Query<(&Transform, &mut Health), With<Player>>,
) {
    let Ok((player_transform, mut health)) = player_query.get_single_mut() else {
        return;
    };
    let player_center = player_transform.translation.truncate();

    for (entity, transform, bullet, faction) in bullet_query.iter() {
        if *faction != Faction::Enemy {
            continue;
        }
        let center = transform.translation.truncate();
        if aabb_overlap(
            center,
            Vec2::splat(bullet.radius),
            player_center,
            PLAYER_HALF_EXTENT,
        ) {
            health.take_damage(bullet.damage);
            commands.entity(entity).despawn_recursive();
        }
    }
}

/// Apply contact damage from enemies overlapping the player, throttled
/// per enemy so overlap doesn't drain health every frame.
fn contact_damage(
    time: Res<Time>,
    mut enemy_query: Query<
        (&Transform, &EnemyKind, &EnemyStats, &mut ContactCooldown),
        With<Enemy>,
    >,
    mut player_query: Query<(&Transform, &mut Health), With<Player>>,
) {
    let Ok((player_transform, mut health)) = player_query.get_single_mut() else {
        return;
    };
    let player_center = player_transform.translation.truncate();
    let dt = time.delta_secs();

    for (transform, kind, stats, mut cooldown) in enemy_query.iter_mut() {
        cooldown.tick(dt);
        if !cooldown.ready() {
            continue;
        }
        let center = transform.translation.truncate();
        if aabb_overlap(center, kind.half_extent(), player_center, PLAYER_HALF_EXTENT) {
            health.take_damage(stats.contact_damage);
            cooldown.trigger(CONTACT_DAMAGE_DELAY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(id: u32, center: Vec2, half: f32, shield: Option<f32>) -> EnemyTarget {
        EnemyTarget {
            entity: Entity::from_raw(id),
            center,
            half: Vec2::splat(half),
            shield_radius: shield,
        }
    }

    #[test]
    fn bullet_hits_only_the_first_overlapping_enemy() {
        // Both enemies overlap the bullet; list order decides
        let targets = [
            target(1, Vec2::new(5.0, 0.0), 20.0, None),
            target(2, Vec2::new(-5.0, 0.0), 20.0, None),
        ];
        let hit = first_hit(Vec2::ZERO, Vec2::splat(4.0), &targets);
        assert_eq!(hit, Some((Entity::from_raw(1), HitSurface::Body)));
    }

    #[test]
    fn no_hit_when_nothing_overlaps() {
        let targets = [target(1, Vec2::new(500.0, 0.0), 10.0, None)];
        assert_eq!(first_hit(Vec2::ZERO, Vec2::splat(4.0), &targets), None);
    }

    #[test]
    fn shield_absorbs_bullets_inside_its_radius() {
        // Bullet is well outside the body box but inside the shield
        let targets = [target(1, Vec2::ZERO, 48.0, Some(400.0))];
        let hit = first_hit(Vec2::new(300.0, 0.0), Vec2::splat(4.0), &targets);
        assert_eq!(hit, Some((Entity::from_raw(1), HitSurface::Shield)));
    }

    #[test]
    fn shield_supersedes_the_body_while_up() {
        // Bullet overlaps the body box, but the shield is still up:
        // all-or-nothing absorption means the body is never reached
        let targets = [target(1, Vec2::ZERO, 48.0, Some(400.0))];
        let hit = first_hit(Vec2::new(10.0, 0.0), Vec2::splat(4.0), &targets);
        assert_eq!(hit, Some((Entity::from_raw(1), HitSurface::Shield)));
    }

    #[test]
    fn decayed_shield_exposes_the_body() {
        let targets = [target(1, Vec2::ZERO, 48.0, None)];
        let hit = first_hit(Vec2::new(10.0, 0.0), Vec2::splat(4.0), &targets);
        assert_eq!(hit, Some((Entity::from_raw(1), HitSurface::Body)));
    }
}
