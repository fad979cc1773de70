//! Topple Sim - projectile versus standing target
//!
//! Core modules:
//! - `sim`: Deterministic simulation (trajectory, collision, impact torque)
//! - `sink`: Presentation seam receiving trajectory samples and outcomes
//! - `config`: Data-driven physical constants with JSON load/save

pub mod config;
pub mod sim;
pub mod sink;

pub use config::{ConfigError, SimConfig};
pub use sim::{AttemptOutcome, ImpactRecord, Launch, Session, SessionError, SimulationRun};
pub use sink::{AttemptSink, LogSink, RecordingSink};

use glam::DVec2;

/// 2D vector type used throughout the simulation (double precision)
pub type Vector2 = DVec2;

/// Simulation configuration constants
pub mod consts {
    /// Gravitational acceleration (m/s²)
    pub const GRAVITY: f64 = 9.81;
    /// Fixed simulation timestep, also the impact contact duration (s)
    pub const SIM_DT: f64 = 0.01;
    /// Hard cap on ticks per flight
    pub const MAX_FLIGHT_TICKS: u64 = 100_000;

    /// Target spawn range along x (m), upper bound exclusive
    pub const SPAWN_MIN_X: f64 = 5.0;
    pub const SPAWN_MAX_X: f64 = 20.0;

    /// Target defaults
    pub const TARGET_WIDTH: f64 = 0.5;
    pub const TARGET_HEIGHT: f64 = 2.0;
    pub const TARGET_MASS: f64 = 100.0;

    /// Projectile defaults
    pub const PROJECTILE_MASS: f64 = 0.1;
    pub const PROJECTILE_RADIUS: f64 = 0.05;

    /// Rotation applied to a toppled target about its pivot (radians, 270°)
    pub const TOPPLE_ROTATION: f64 = 3.0 * std::f64::consts::FRAC_PI_2;
}

/// Z-component of the 3D cross product of two planar vectors
#[inline]
pub fn cross_2d(a: Vector2, b: Vector2) -> f64 {
    a.perp_dot(b)
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vector2, b: Vector2) -> f64 {
    (b - a).length()
}

/// Unit direction for a launch angle measured from +x (radians)
#[inline]
pub fn direction(theta: f64) -> Vector2 {
    let (sin, cos) = theta.sin_cos();
    Vector2::new(cos, sin)
}
