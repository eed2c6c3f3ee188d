//! 2D overlap tests used by the collision systems.
//!
//! Everything in the simulation collides through axis-aligned boxes, except
//! the Elder's shield which is a circle test that supersedes the body box.

use bevy::prelude::*;

/// Half-extent of the playable world on each axis (world is centered on
/// the origin). Spawn positions are clamped into this rectangle.
pub const WORLD_HALF_EXTENT: f32 = 1500.0;

/// Overlap test between two axis-aligned boxes given by center and
/// half-extents.
pub fn aabb_overlap(center_a: Vec2, half_a: Vec2, center_b: Vec2, half_b: Vec2) -> bool {
    (center_a.x - center_b.x).abs() <= half_a.x + half_b.x
        && (center_a.y - center_b.y).abs() <= half_a.y + half_b.y
}

/// True when `point` lies inside or on the circle.
pub fn circle_contains(center: Vec2, radius: f32, point: Vec2) -> bool {
    center.distance_squared(point) <= radius * radius
}

/// Clamp a position into the world rectangle.
pub fn clamp_to_world(position: Vec2) -> Vec2 {
    position.clamp(
        Vec2::splat(-WORLD_HALF_EXTENT),
        Vec2::splat(WORLD_HALF_EXTENT),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aabb_overlap_detects_touching_boxes() {
        let half = Vec2::splat(10.0);
        assert!(aabb_overlap(Vec2::ZERO, half, Vec2::new(20.0, 0.0), half));
        assert!(!aabb_overlap(Vec2::ZERO, half, Vec2::new(21.0, 0.0), half));
    }

    #[test]
    fn aabb_overlap_requires_both_axes() {
        let half = Vec2::splat(5.0);
        assert!(!aabb_overlap(Vec2::ZERO, half, Vec2::new(8.0, 30.0), half));
    }

    #[test]
    fn circle_contains_boundary_point() {
        assert!(circle_contains(Vec2::ZERO, 5.0, Vec2::new(5.0, 0.0)));
        assert!(!circle_contains(Vec2::ZERO, 5.0, Vec2::new(5.01, 0.0)));
    }

    #[test]
    fn clamp_keeps_interior_points() {
        let p = Vec2::new(123.0, -456.0);
        assert_eq!(clamp_to_world(p), p);
        let far = Vec2::new(99_999.0, -99_999.0);
        assert_eq!(
            clamp_to_world(far),
            Vec2::new(WORLD_HALF_EXTENT, -WORLD_HALF_EXTENT)
        );
    }
}
