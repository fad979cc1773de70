//! Collision and bounds checks for the projectile
//!
//! The target is tested as a vertical slab: a hit needs the projectile's
//! center within `radius + width/2` of the target's center line along x, at
//! or below the target's top.

use super::target::TargetBody;
use crate::Vector2;

/// Result of a projectile/target check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Contact point (projectile center at the hit tick)
    pub point: Vector2,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vector2::ZERO,
        }
    }
}

/// How far from the target's center line along x a hit is accepted
#[inline]
pub fn hit_tolerance(projectile_radius: f64, target: &TargetBody) -> f64 {
    projectile_radius + target.width() / 2.0
}

/// Check the projectile against the target's slab
pub fn projectile_target_collision(
    pos: Vector2,
    projectile_radius: f64,
    target: &TargetBody,
) -> CollisionResult {
    if (pos.x - target.position_x()).abs() < hit_tolerance(projectile_radius, target) && pos.y <= target.height() {
        return CollisionResult {
            hit: true,
            point: pos,
        };
    }

    CollisionResult::miss()
}

/// Below ground level
#[inline]
pub fn projectile_grounded(pos: Vector2) -> bool {
    pos.y < 0.0
}

/// Beyond the target's center line without having hit it
#[inline]
pub fn projectile_past_target(pos: Vector2, target: &TargetBody) -> bool {
    pos.x > target.position_x()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::GRAVITY;
    use crate::sim::TargetGeometry;

    fn target() -> TargetBody {
        TargetBody::at(10.0, TargetGeometry::default(), GRAVITY)
    }

    #[test]
    fn test_hit_inside_tolerance() {
        let result = projectile_target_collision(Vector2::new(9.75, 1.0), 0.05, &target());
        assert!(result.hit);
        assert_eq!(result.point, Vector2::new(9.75, 1.0));
    }

    #[test]
    fn test_tolerance_edge_is_exclusive() {
        // Exactly radius + width/2 away does not count
        let result = projectile_target_collision(Vector2::new(9.5, 1.0), 0.25, &target());
        assert!(!result.hit);
    }

    #[test]
    fn test_above_target_misses() {
        let result = projectile_target_collision(Vector2::new(10.0, 2.01), 0.05, &target());
        assert!(!result.hit);
        // Top edge itself is inclusive
        let result = projectile_target_collision(Vector2::new(10.0, 2.0), 0.05, &target());
        assert!(result.hit);
    }

    #[test]
    fn test_bounds() {
        let target = target();
        assert!(projectile_grounded(Vector2::new(3.0, -0.001)));
        assert!(!projectile_grounded(Vector2::new(3.0, 0.0)));
        assert!(projectile_past_target(Vector2::new(10.01, 5.0), &target));
        assert!(!projectile_past_target(Vector2::new(10.0, 5.0), &target));
        assert!((hit_tolerance(0.05, &target) - 0.3).abs() < 1e-12);
    }
}
