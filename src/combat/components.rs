//! Combat-related components.

use bevy::prelude::*;

use super::data::WeaponSpec;

/// Distance from the world origin beyond which a bullet expires.
pub const BULLET_BOUND: f32 = 2000.0;

/// Angular step between pellets of a multi-projectile shot, in degrees.
pub const SPREAD_STEP_DEG: f32 = 10.0;

/// Component for entities that can take damage.
///
/// Health never goes negative; once it reaches zero the entity counts as
/// dead and further damage is a no-op, so death effects fire exactly once.
#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: i32,
    pub maximum: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self {
            current: max,
            maximum: max,
        }
    }

    /// Apply damage. Returns true when this call is the one that killed
    /// the entity; damage applied after death changes nothing.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        if self.is_dead() {
            return false;
        }
        self.current = (self.current - amount).max(0);
        self.is_dead()
    }

    pub fn heal(&mut self, amount: i32) {
        if !self.is_dead() {
            self.current = (self.current + amount).min(self.maximum);
        }
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }

    pub fn fraction(&self) -> f32 {
        self.current as f32 / self.maximum as f32
    }
}

/// Who fired a bullet. Player bullets hit enemies, enemy bullets hit the
/// player; friendly fire does not exist.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Faction {
    Player,
    Enemy,
}

/// A straight-line projectile. Purely kinematic: moved every frame by its
/// velocity and removed on first collision or once out of bounds.
#[derive(Component, Debug, Clone)]
pub struct Bullet {
    pub velocity: Vec2,
    pub damage: i32,
    pub radius: f32,
}

/// True once a bullet has strayed past the world-origin threshold on
/// either axis.
pub fn bullet_out_of_bounds(position: Vec2) -> bool {
    position.x.abs() > BULLET_BOUND || position.y.abs() > BULLET_BOUND
}

/// Reason a fire attempt was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireBlocked {
    /// A reload is in progress
    Reloading,
    /// The per-shot delay has not elapsed
    Cooldown,
    /// The magazine is empty (a reload was auto-started)
    NoAmmo,
}

/// The player's weapon: ammo and reload state machine.
///
/// `Idle -> fire (instant) -> [auto-reload at 0 ammo] -> Reloading -> Idle`
#[derive(Component, Debug, Clone)]
pub struct Weapon {
    pub spec: WeaponSpec,
    pub ammo: u32,
    pub reloading: bool,
    reload_elapsed: f32,
    cooldown_remaining: f32,
    /// Debug affordance; never set by gameplay systems.
    pub infinite_ammo: bool,
}

impl Weapon {
    pub fn new(spec: WeaponSpec) -> Self {
        Self {
            ammo: spec.max_ammo,
            spec,
            reloading: false,
            reload_elapsed: 0.0,
            cooldown_remaining: 0.0,
            infinite_ammo: false,
        }
    }

    /// Attempt to fire one shot. On success the magazine is decremented
    /// and the per-shot cooldown restarts; the caller spawns the bullets.
    /// Running the magazine dry auto-starts the reload, as does attempting
    /// to fire on an empty magazine.
    pub fn try_fire(&mut self) -> Result<(), FireBlocked> {
        if self.reloading {
            return Err(FireBlocked::Reloading);
        }
        if self.cooldown_remaining > 0.0 {
            return Err(FireBlocked::Cooldown);
        }
        if self.ammo == 0 {
            self.start_reload();
            return Err(FireBlocked::NoAmmo);
        }
        if !self.infinite_ammo {
            self.ammo -= 1;
        }
        self.cooldown_remaining = self.spec.fire_delay;
        if self.ammo == 0 {
            self.start_reload();
        }
        Ok(())
    }

    /// Begin reloading. No-op while already reloading or with a full
    /// magazine.
    pub fn start_reload(&mut self) {
        if self.reloading || self.ammo == self.spec.max_ammo {
            return;
        }
        self.reloading = true;
        self.reload_elapsed = 0.0;
    }

    /// Advance the cooldown and reload timers.
    pub fn tick(&mut self, dt: f32) {
        if self.cooldown_remaining > 0.0 {
            self.cooldown_remaining = (self.cooldown_remaining - dt).max(0.0);
        }
        if self.reloading {
            self.reload_elapsed += dt;
            if self.reload_elapsed >= self.spec.reload_time {
                self.ammo = self.spec.max_ammo;
                self.reloading = false;
            }
        }
    }

    /// Refill the magazine immediately (ammo pickup).
    pub fn restock(&mut self) {
        self.ammo = self.spec.max_ammo;
        self.reloading = false;
    }
}

/// Per-enemy cooldown preventing contact damage from draining the player
/// every frame while bodies overlap.
#[derive(Component, Debug, Default)]
pub struct ContactCooldown {
    pub remaining: f32,
}

impl ContactCooldown {
    pub fn ready(&self) -> bool {
        self.remaining <= 0.0
    }

    pub fn trigger(&mut self, delay: f32) {
        self.remaining = delay;
    }

    pub fn tick(&mut self, dt: f32) {
        if self.remaining > 0.0 {
            self.remaining -= dt;
        }
    }
}

/// Directions for a fan of `count` pellets spread symmetrically around the
/// aim line in `step_deg` increments. A zero-length aim vector degrades to
/// +X instead of dividing by zero.
pub fn spread_directions(aim: Vec2, count: u32, step_deg: f32) -> Vec<Vec2> {
    let base = match aim.try_normalize() {
        Some(dir) => dir.to_angle(),
        None => 0.0,
    };
    let step = step_deg.to_radians();
    let half = (count.saturating_sub(1)) as f32 / 2.0;
    (0..count)
        .map(|i| Vec2::from_angle(base + (i as f32 - half) * step))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::data::WeaponRegistry;

    fn test_weapon() -> Weapon {
        Weapon::new(WeaponRegistry::builtin_revolver())
    }

    #[test]
    fn ammo_stays_in_bounds_under_any_sequence() {
        let mut weapon = test_weapon();
        let max = weapon.spec.max_ammo;
        for i in 0..200 {
            let _ = weapon.try_fire();
            weapon.tick(0.1 * (i % 7) as f32);
            if i % 13 == 0 {
                weapon.start_reload();
            }
            assert!(weapon.ammo <= max);
        }
    }

    #[test]
    fn reload_completes_after_exact_duration() {
        let mut weapon = test_weapon();
        weapon.try_fire().unwrap();
        weapon.start_reload();
        assert!(weapon.reloading);
        weapon.tick(weapon.spec.reload_time);
        assert!(!weapon.reloading);
        assert_eq!(weapon.ammo, weapon.spec.max_ammo);
    }

    #[test]
    fn firing_is_rejected_while_reloading() {
        let mut weapon = test_weapon();
        weapon.try_fire().unwrap();
        weapon.start_reload();
        let ammo_before = weapon.ammo;
        assert_eq!(weapon.try_fire(), Err(FireBlocked::Reloading));
        assert_eq!(weapon.ammo, ammo_before);
    }

    #[test]
    fn firing_is_rejected_during_cooldown() {
        let mut weapon = test_weapon();
        weapon.try_fire().unwrap();
        assert_eq!(weapon.try_fire(), Err(FireBlocked::Cooldown));
        weapon.tick(weapon.spec.fire_delay);
        assert!(weapon.try_fire().is_ok());
    }

    #[test]
    fn empty_magazine_auto_starts_reload() {
        let mut weapon = test_weapon();
        for _ in 0..weapon.spec.max_ammo {
            weapon.tick(weapon.spec.fire_delay);
            weapon.try_fire().unwrap();
        }
        // The last successful shot drained the magazine
        assert_eq!(weapon.ammo, 0);
        assert!(weapon.reloading);
    }

    #[test]
    fn reload_on_full_magazine_is_a_noop() {
        let mut weapon = test_weapon();
        weapon.start_reload();
        assert!(!weapon.reloading);
    }

    #[test]
    fn bullet_expires_past_world_bound() {
        let mut position = Vec2::ZERO;
        let velocity = Vec2::new(600.0, 0.0);
        for _ in 0..3 {
            position += velocity * 1.0;
        }
        assert!(!bullet_out_of_bounds(position));
        position += velocity * 1.0;
        assert!(bullet_out_of_bounds(position));
    }

    #[test]
    fn health_death_is_idempotent() {
        let mut health = Health::new(30);
        assert!(health.take_damage(50));
        assert_eq!(health.current, 0);
        assert!(!health.take_damage(10));
        assert_eq!(health.current, 0);
    }

    #[test]
    fn heal_clamps_to_maximum() {
        let mut health = Health::new(100);
        health.take_damage(10);
        health.heal(999);
        assert_eq!(health.current, 100);
    }

    #[test]
    fn spread_fan_is_symmetric_around_aim() {
        let dirs = spread_directions(Vec2::Y, 3, SPREAD_STEP_DEG);
        assert_eq!(dirs.len(), 3);
        // Middle pellet flies straight along the aim line
        assert!(dirs[1].abs_diff_eq(Vec2::Y, 1e-5));
        // Outer pellets mirror each other across the aim line
        assert!((dirs[0].x + dirs[2].x).abs() < 1e-5);
        assert!((dirs[0].y - dirs[2].y).abs() < 1e-5);
    }

    #[test]
    fn zero_aim_vector_falls_back_to_plus_x() {
        let dirs = spread_directions(Vec2::ZERO, 1, SPREAD_STEP_DEG);
        assert!(dirs[0].abs_diff_eq(Vec2::X, 1e-5));
    }
}
