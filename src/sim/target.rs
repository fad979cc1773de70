//! The standing target and its pivot
//!
//! The target is a box resting on the ground, centered on `position_x`. It
//! rotates about its far bottom edge, so that edge is the pivot and the
//! target's own weight supplies the restoring torque.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::Vector2;
use crate::consts::*;

/// Fixed size and mass of the target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetGeometry {
    pub width: f64,
    pub height: f64,
    pub mass: f64,
}

impl Default for TargetGeometry {
    fn default() -> Self {
        Self {
            width: TARGET_WIDTH,
            height: TARGET_HEIGHT,
            mass: TARGET_MASS,
        }
    }
}

/// A toppleable rigid box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetBody {
    position_x: f64,
    geometry: TargetGeometry,
    gravity: f64,
    /// Derived from position_x; refreshed only by `place_at`
    pivot: Vector2,
    restoring_torque: f64,
    toppled: bool,
}

impl TargetBody {
    /// Place a target at a known x position
    pub fn at(position_x: f64, geometry: TargetGeometry, gravity: f64) -> Self {
        let mut target = Self {
            position_x,
            geometry,
            gravity,
            pivot: Vector2::ZERO,
            restoring_torque: 0.0,
            toppled: false,
        };
        target.place_at(position_x);
        target
    }

    /// Place a target uniformly at random in `[min_x, max_x)`
    ///
    /// An empty or non-finite range collapses to `min_x`, or to the default
    /// spawn minimum when `min_x` itself is not finite.
    pub fn spawn<R: Rng>(
        min_x: f64,
        max_x: f64,
        geometry: TargetGeometry,
        gravity: f64,
        rng: &mut R,
    ) -> Self {
        let position_x = if min_x.is_finite() && max_x.is_finite() && min_x < max_x {
            rng.random_range(min_x..max_x)
        } else {
            let fallback = if min_x.is_finite() { min_x } else { SPAWN_MIN_X };
            log::warn!("Unusable spawn range [{min_x}, {max_x}), placing target at {fallback}");
            fallback
        };
        Self::at(position_x, geometry, gravity)
    }

    /// Move the target, refreshing pivot and restoring torque
    pub fn place_at(&mut self, position_x: f64) {
        self.position_x = position_x;
        let half_width = self.geometry.width / 2.0;
        self.pivot = Vector2::new(position_x + half_width, 0.0);
        self.restoring_torque = self.geometry.mass * self.gravity * half_width;
    }

    pub fn position_x(&self) -> f64 {
        self.position_x
    }

    pub fn geometry(&self) -> &TargetGeometry {
        &self.geometry
    }

    pub fn width(&self) -> f64 {
        self.geometry.width
    }

    pub fn height(&self) -> f64 {
        self.geometry.height
    }

    /// Bottom edge the target rotates about when toppling
    pub fn pivot(&self) -> Vector2 {
        self.pivot
    }

    /// Torque from the target's weight about the pivot (N·m)
    pub fn restoring_torque_magnitude(&self) -> f64 {
        self.restoring_torque
    }

    /// Mark the target as knocked over (presentation only)
    pub fn topple(&mut self) {
        self.toppled = true;
    }

    pub fn is_toppled(&self) -> bool {
        self.toppled
    }

    /// Box corners, counter-clockwise from bottom-left
    ///
    /// A toppled target is rotated by `TOPPLE_ROTATION` about the pivot and
    /// lies on the ground beyond it.
    pub fn outline(&self) -> [Vector2; 4] {
        let half_width = self.geometry.width / 2.0;
        let left = self.position_x - half_width;
        let right = self.position_x + half_width;
        let top = self.geometry.height;
        let corners = [
            Vector2::new(left, 0.0),
            Vector2::new(right, 0.0),
            Vector2::new(right, top),
            Vector2::new(left, top),
        ];

        if !self.toppled {
            return corners;
        }

        let rotation = Vector2::from_angle(TOPPLE_ROTATION);
        corners.map(|corner| self.pivot + rotation.rotate(corner - self.pivot))
    }
}

/// Seeded RNG for target placement
pub fn seeded_rng(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}
