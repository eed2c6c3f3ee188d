//! Spawn director: time-driven spawn pacing and placement.
//!
//! The director is a plain resource advanced once per frame. It never
//! touches entities itself; it emits `SpawnOrder`s that a thin system in
//! the plugin turns into spawned enemies. That split keeps the pacing
//! rules testable without a running app.

use bevy::prelude::*;
use rand::Rng;

use super::components::EnemyKind;
use crate::core::geometry::clamp_to_world;
use crate::core::geometry::WORLD_HALF_EXTENT;

/// Interval between tentacle spawns at t = 0.
pub const BASE_SPAWN_INTERVAL: f32 = 3.0;

/// Floor the interval ramps down to by the end of the session.
pub const MIN_SPAWN_INTERVAL: f32 = 0.5;

/// Stationary trees seeded across the world when a session starts.
pub const INITIAL_TREE_COUNT: usize = 20;

/// Spawn distance band around the player, per archetype.
const TENTACLE_RING: (f32, f32) = (400.0, 700.0);
const EYEBAT_RING: (f32, f32) = (500.0, 900.0);
const ELDER_RING: (f32, f32) = (600.0, 800.0);

/// An enemy the director wants spawned this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnOrder {
    pub kind: EnemyKind,
    pub position: Vec2,
}

/// Spawn interval ramp: starts at `BASE_SPAWN_INTERVAL`, shrinks linearly
/// with elapsed time, and clamps at `MIN_SPAWN_INTERVAL` once the time
/// limit is reached. Non-increasing in `t`.
pub fn spawn_interval(t: f32, time_limit: f32) -> f32 {
    let progress = (t / time_limit).min(1.0);
    BASE_SPAWN_INTERVAL - (BASE_SPAWN_INTERVAL - MIN_SPAWN_INTERVAL) * progress
}

/// Drives when and where enemies appear over the course of a session.
#[derive(Resource, Debug)]
pub struct SpawnDirector {
    elapsed: f32,
    time_limit: f32,
    tentacle_timer: f32,
    eyebat_timer: f32,
    boss_spawned: bool,
}

impl SpawnDirector {
    pub fn new(time_limit: f32) -> Self {
        Self {
            elapsed: 0.0,
            time_limit,
            tentacle_timer: BASE_SPAWN_INTERVAL,
            eyebat_timer: 2.0 * BASE_SPAWN_INTERVAL,
            boss_spawned: false,
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Jump the pacing clock forward (debug time skip).
    pub fn skip(&mut self, secs: f32) {
        self.elapsed += secs;
    }

    /// Advance the director by one frame and collect the spawns due.
    ///
    /// Tentacles spawn every `spawn_interval(t)`; eyebats every twice
    /// that, and only after a quarter of the session has passed; the boss
    /// spawns exactly once, the first frame `t` reaches half the limit.
    pub fn advance(&mut self, dt: f32, player_pos: Vec2, rng: &mut impl Rng) -> Vec<SpawnOrder> {
        self.elapsed += dt;
        let mut orders = Vec::new();

        let interval = spawn_interval(self.elapsed, self.time_limit);

        self.tentacle_timer -= dt;
        while self.tentacle_timer <= 0.0 {
            self.tentacle_timer += interval;
            orders.push(SpawnOrder {
                kind: EnemyKind::Tentacle,
                position: annulus_position(player_pos, TENTACLE_RING, rng),
            });
        }

        if self.elapsed >= self.time_limit / 4.0 {
            self.eyebat_timer -= dt;
            while self.eyebat_timer <= 0.0 {
                self.eyebat_timer += 2.0 * interval;
                orders.push(SpawnOrder {
                    kind: EnemyKind::Eyebat,
                    position: annulus_position(player_pos, EYEBAT_RING, rng),
                });
            }
        }

        if !self.boss_spawned && self.elapsed >= self.time_limit / 2.0 {
            self.boss_spawned = true;
            orders.push(SpawnOrder {
                kind: EnemyKind::Elder,
                position: annulus_position(player_pos, ELDER_RING, rng),
            });
        }

        orders
    }

    /// Force the boss out now (debug hook). Still at most once per session.
    pub fn force_boss(&mut self, player_pos: Vec2, rng: &mut impl Rng) -> Option<SpawnOrder> {
        if self.boss_spawned {
            return None;
        }
        self.boss_spawned = true;
        Some(SpawnOrder {
            kind: EnemyKind::Elder,
            position: annulus_position(player_pos, ELDER_RING, rng),
        })
    }

    /// Initial world seeding: stationary trees scattered over the whole
    /// world rectangle.
    pub fn seed_world(rng: &mut impl Rng) -> Vec<SpawnOrder> {
        (0..INITIAL_TREE_COUNT)
            .map(|_| SpawnOrder {
                kind: EnemyKind::Tree,
                position: Vec2::new(
                    rng.gen_range(-WORLD_HALF_EXTENT..WORLD_HALF_EXTENT),
                    rng.gen_range(-WORLD_HALF_EXTENT..WORLD_HALF_EXTENT),
                ),
            })
            .collect()
    }
}

/// Random point in an annulus around the player, clamped into the world.
fn annulus_position(player_pos: Vec2, (min_r, max_r): (f32, f32), rng: &mut impl Rng) -> Vec2 {
    let angle = rng.gen_range(0.0..std::f32::consts::TAU);
    let radius = rng.gen_range(min_r..max_r);
    clamp_to_world(player_pos + Vec2::from_angle(angle) * radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const LIMIT: f32 = 300.0;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn spawn_interval_is_non_increasing_and_clamped() {
        let mut previous = spawn_interval(0.0, LIMIT);
        assert_eq!(previous, BASE_SPAWN_INTERVAL);
        let mut t = 0.0;
        while t <= LIMIT * 1.5 {
            let current = spawn_interval(t, LIMIT);
            assert!(current <= previous);
            previous = current;
            t += 5.0;
        }
        assert_eq!(spawn_interval(LIMIT, LIMIT), MIN_SPAWN_INTERVAL);
        assert_eq!(spawn_interval(LIMIT * 3.0, LIMIT), MIN_SPAWN_INTERVAL);
    }

    #[test]
    fn boss_spawns_exactly_once_after_half_time() {
        let mut director = SpawnDirector::new(LIMIT);
        let mut rng = rng();
        let mut elders = 0;
        let dt = 0.25;
        let mut t = 0.0;
        while t < LIMIT {
            for order in director.advance(dt, Vec2::ZERO, &mut rng) {
                if order.kind == EnemyKind::Elder {
                    elders += 1;
                    assert!(t + dt >= LIMIT / 2.0, "boss appeared before half-time");
                }
            }
            t += dt;
        }
        assert_eq!(elders, 1);
    }

    #[test]
    fn eyebats_wait_for_the_first_quarter() {
        let mut director = SpawnDirector::new(LIMIT);
        let mut rng = rng();
        let dt = 0.5;
        let mut t = 0.0;
        while t < LIMIT / 4.0 - dt {
            for order in director.advance(dt, Vec2::ZERO, &mut rng) {
                assert_ne!(order.kind, EnemyKind::Eyebat);
            }
            t += dt;
        }
        // Past the gate they do start appearing
        let mut seen = false;
        while t < LIMIT / 2.0 {
            seen |= director
                .advance(dt, Vec2::ZERO, &mut rng)
                .iter()
                .any(|o| o.kind == EnemyKind::Eyebat);
            t += dt;
        }
        assert!(seen);
    }

    #[test]
    fn forced_boss_respects_the_once_per_session_rule() {
        let mut director = SpawnDirector::new(LIMIT);
        let mut rng = rng();
        assert!(director.force_boss(Vec2::ZERO, &mut rng).is_some());
        assert!(director.force_boss(Vec2::ZERO, &mut rng).is_none());
        // The timed path must not spawn a second one either
        let mut t = 0.0;
        while t < LIMIT {
            for order in director.advance(1.0, Vec2::ZERO, &mut rng) {
                assert_ne!(order.kind, EnemyKind::Elder);
            }
            t += 1.0;
        }
    }

    #[test]
    fn annulus_spawns_stay_inside_the_world() {
        let mut rng = rng();
        // Player parked in a corner so raw annulus points fall outside
        let corner = Vec2::splat(WORLD_HALF_EXTENT);
        for _ in 0..100 {
            let p = annulus_position(corner, EYEBAT_RING, &mut rng);
            assert!(p.x.abs() <= WORLD_HALF_EXTENT);
            assert!(p.y.abs() <= WORLD_HALF_EXTENT);
        }
    }

    #[test]
    fn world_seeding_places_the_full_tree_count() {
        let mut rng = rng();
        let orders = SpawnDirector::seed_world(&mut rng);
        assert_eq!(orders.len(), INITIAL_TREE_COUNT);
        assert!(orders.iter().all(|o| o.kind == EnemyKind::Tree));
    }
}
