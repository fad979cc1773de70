//! Projectile kinematics under constant gravity
//!
//! Closed-form: every quantity is a pure function of elapsed time, so the
//! projectile carries no per-tick state of its own. No drag.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::{Vector2, direction};

/// Mass and size shared by every launch in a session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileBody {
    pub mass: f64,
    pub radius: f64,
}

impl Default for ProjectileBody {
    fn default() -> Self {
        Self {
            mass: PROJECTILE_MASS,
            radius: PROJECTILE_RADIUS,
        }
    }
}

/// Input-layer launch command
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Launch {
    /// Radians from +x, counter-clockwise
    pub angle: f64,
    /// Initial speed (m/s)
    pub speed: f64,
}

impl Launch {
    pub fn new(angle: f64, speed: f64) -> Self {
        Self { angle, speed }
    }

    pub fn from_degrees(angle_deg: f64, speed: f64) -> Self {
        Self::new(angle_deg.to_radians(), speed)
    }

    /// Finite inputs with non-negative speed
    pub fn is_valid(&self) -> bool {
        self.angle.is_finite() && self.speed.is_finite() && self.speed >= 0.0
    }
}

/// Everything needed to fly one attempt
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileParams {
    pub mass: f64,
    pub radius: f64,
    pub angle: f64,
    pub speed: f64,
}

impl ProjectileParams {
    pub fn new(body: ProjectileBody, launch: Launch) -> Self {
        Self {
            mass: body.mass,
            radius: body.radius,
            angle: launch.angle,
            speed: launch.speed,
        }
    }

    pub fn launch(&self) -> Launch {
        Launch::new(self.angle, self.speed)
    }
}

/// A launched body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    params: ProjectileParams,
    origin: Vector2,
    gravity: f64,
    /// Launch velocity, cached from angle and speed
    v0: Vector2,
}

impl Projectile {
    pub fn new(params: ProjectileParams, origin: Vector2, gravity: f64) -> Self {
        Self {
            params,
            origin,
            gravity,
            v0: direction(params.angle) * params.speed,
        }
    }

    pub fn params(&self) -> &ProjectileParams {
        &self.params
    }

    pub fn radius(&self) -> f64 {
        self.params.radius
    }

    /// Position after `t` seconds of flight
    pub fn position_at(&self, t: f64) -> Vector2 {
        Vector2::new(
            self.origin.x + self.v0.x * t,
            self.origin.y + self.v0.y * t - 0.5 * self.gravity * t * t,
        )
    }

    pub fn velocity_at(&self, t: f64) -> Vector2 {
        Vector2::new(self.v0.x, self.v0.y - self.gravity * t)
    }

    /// Linear momentum after `t` seconds; horizontal part is constant
    pub fn momentum_at(&self, t: f64) -> Vector2 {
        let m = self.params.mass;
        Vector2::new(m * self.v0.x, m * self.v0.y - m * self.gravity * t)
    }

    /// Time of peak height (zero when launched level or downward)
    pub fn apex_time(&self) -> f64 {
        (self.v0.y / self.gravity).max(0.0)
    }

    /// Peak height above the launch origin
    pub fn apex_height(&self) -> f64 {
        let vy = self.v0.y.max(0.0);
        vy * vy / (2.0 * self.gravity)
    }
}
