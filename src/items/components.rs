//! Pickup-related components.

use bevy::prelude::*;
use rand::Rng;

/// Seconds a dropped item stays in the world before vanishing.
pub const ITEM_LIFETIME: f32 = 15.0;

/// Collision half-extents of a pickup.
pub const ITEM_HALF_EXTENT: Vec2 = Vec2::splat(10.0);

/// Health restored by a health pickup.
pub const HEALTH_PICKUP_AMOUNT: i32 = 25;

/// The kinds of pickups enemies can drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Health,
    Ammo,
    SpeedBoost,
    DamageBoost,
    /// Dropped by every dead enemy; feeds the run's experience counter
    Experience,
}

impl ItemKind {
    /// Roll the bonus drop: any kind except Experience, uniformly.
    pub fn random_bonus(rng: &mut impl Rng) -> Self {
        match rng.gen_range(0..4) {
            0 => Self::Health,
            1 => Self::Ammo,
            2 => Self::SpeedBoost,
            _ => Self::DamageBoost,
        }
    }

    pub fn color(self) -> Color {
        match self {
            Self::Health => Color::srgb(0.3, 0.85, 0.35),
            Self::Ammo => Color::srgb(0.6, 0.6, 0.65),
            Self::SpeedBoost => Color::srgb(0.3, 0.6, 0.9),
            Self::DamageBoost => Color::srgb(0.9, 0.5, 0.2),
            Self::Experience => Color::srgb(0.7, 0.9, 1.0),
        }
    }
}

/// A transient pickup lying in the world.
#[derive(Component, Debug)]
pub struct Item {
    pub kind: ItemKind,
    pub remaining_lifetime: f32,
    pub float_phase: f32,
}

impl Item {
    pub fn new(kind: ItemKind) -> Self {
        Self {
            kind,
            remaining_lifetime: ITEM_LIFETIME,
            float_phase: 0.0,
        }
    }

    /// Age the item; true once it has expired.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining_lifetime -= dt;
        self.float_phase += dt;
        self.remaining_lifetime <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn items_expire_after_their_lifetime() {
        let mut item = Item::new(ItemKind::Health);
        let mut elapsed = 0.0;
        while elapsed < ITEM_LIFETIME - 0.5 {
            assert!(!item.tick(0.5));
            elapsed += 0.5;
        }
        assert!(item.tick(0.5));
    }

    #[test]
    fn bonus_roll_never_yields_experience() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            assert_ne!(ItemKind::random_bonus(&mut rng), ItemKind::Experience);
        }
    }
}
