//! Impulse, torque and the topple decision
//!
//! The projectile's momentum is delivered over one contact duration `dt`,
//! giving an average force `F = p / dt`. That force acts at the contact
//! point; its torque about the target's pivot is compared against the
//! restoring torque of the target's weight.

use serde::{Deserialize, Serialize};

use crate::{Vector2, cross_2d};

/// How the lever arm vector is constructed from pivot and contact point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeverArmConvention {
    /// `pivot - contact`: the full vector from contact point to pivot
    #[default]
    ContactToPivot,
    /// `(pivot.x - contact.x, contact.y)`: horizontal part from the contact
    /// toward the pivot, vertical part the absolute contact height
    AbsoluteHeight,
}

impl LeverArmConvention {
    pub fn lever_arm(self, pivot: Vector2, contact: Vector2) -> Vector2 {
        match self {
            LeverArmConvention::ContactToPivot => pivot - contact,
            LeverArmConvention::AbsoluteHeight => Vector2::new(pivot.x - contact.x, contact.y),
        }
    }
}

/// State of the projectile on the tick it struck the target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactTick {
    pub time: f64,
    pub position: Vector2,
    pub momentum: Vector2,
}

/// Everything computed for one impact
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactRecord {
    /// Flight time at contact (s)
    pub time: f64,
    pub contact_point: Vector2,
    pub momentum: Vector2,
    pub applied_force: Vector2,
    /// Vector used in the torque product
    pub lever_arm: Vector2,
    /// Pivot to contact point, for drawing
    pub pivot_to_contact: Vector2,
    /// Signed z-component of `applied_force × lever_arm`
    pub applied_torque: f64,
    pub applied_torque_magnitude: f64,
    pub restoring_torque_magnitude: f64,
    pub toppled: bool,
}

impl ImpactRecord {
    /// Height of the contact point above ground
    pub fn impact_height(&self) -> f64 {
        self.contact_point.y
    }

    /// Applied torque over restoring torque; above 1.0 topples
    pub fn torque_ratio(&self) -> f64 {
        self.applied_torque_magnitude / self.restoring_torque_magnitude.abs()
    }
}

/// Converts an impact tick into torques and a topple decision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactEvaluator {
    /// Contact duration (s), must be positive
    pub dt: f64,
    pub convention: LeverArmConvention,
}

impl ImpactEvaluator {
    pub fn new(dt: f64, convention: LeverArmConvention) -> Self {
        Self { dt, convention }
    }

    pub fn evaluate(
        &self,
        tick: &ImpactTick,
        pivot: Vector2,
        restoring_torque_magnitude: f64,
    ) -> ImpactRecord {
        let applied_force = tick.momentum / self.dt;
        let lever_arm = self.convention.lever_arm(pivot, tick.position);
        let applied_torque = cross_2d(applied_force, lever_arm);
        let applied_torque_magnitude = applied_torque.abs();
        let toppled = applied_torque_magnitude > restoring_torque_magnitude.abs();

        log::debug!(
            "Impact at t={:.2}s height={:.3}m: momentum=({:.4}, {:.4}) torque={:.3} restoring={:.3} toppled={}",
            tick.time,
            tick.position.y,
            tick.momentum.x,
            tick.momentum.y,
            applied_torque,
            restoring_torque_magnitude,
            toppled
        );

        ImpactRecord {
            time: tick.time,
            contact_point: tick.position,
            momentum: tick.momentum,
            applied_force,
            lever_arm,
            pivot_to_contact: tick.position - pivot,
            applied_torque,
            applied_torque_magnitude,
            restoring_torque_magnitude,
            toppled,
        }
    }
}
