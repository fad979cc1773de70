//! Simulation configuration
//!
//! Physical constants for one session. Every field has a default, so a JSON
//! file only needs to carry the values it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Vector2;
use crate::consts::*;
use crate::sim::{LeverArmConvention, ProjectileBody, TargetGeometry};

/// Reasons a configuration is rejected
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be positive and finite, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("spawn range [{min}, {max}) is empty or not finite")]
    EmptySpawnRange { min: f64, max: f64 },
    #[error("launch origin must be finite, got ({x}, {y})")]
    NonFiniteOrigin { x: f64, y: f64 },
    #[error("max_flight_ticks must be at least 1")]
    NoFlightTicks,
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Physical constants and tuning for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Gravitational acceleration (m/s², positive = downward)
    pub gravity: f64,
    /// Tick length and impact contact duration (s)
    pub dt: f64,
    /// Flight is cut off after this many ticks
    pub max_flight_ticks: u64,

    // === Target placement ===
    /// Lower bound of the spawn range (inclusive)
    pub spawn_min_x: f64,
    /// Upper bound of the spawn range (exclusive)
    pub spawn_max_x: f64,

    // === Bodies ===
    pub target: TargetGeometry,
    pub projectile: ProjectileBody,
    /// Where every launch starts
    pub launch_origin: Vector2,

    /// How the impact lever arm is built
    pub lever_arm: LeverArmConvention,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            dt: SIM_DT,
            max_flight_ticks: MAX_FLIGHT_TICKS,

            spawn_min_x: SPAWN_MIN_X,
            spawn_max_x: SPAWN_MAX_X,

            target: TargetGeometry::default(),
            projectile: ProjectileBody::default(),
            launch_origin: Vector2::ZERO,

            lever_arm: LeverArmConvention::default(),
        }
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

impl SimConfig {
    /// Check every constant the physics divides by or scales with
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("gravity", self.gravity)?;
        require_positive("dt", self.dt)?;
        require_positive("target.width", self.target.width)?;
        require_positive("target.height", self.target.height)?;
        require_positive("target.mass", self.target.mass)?;
        require_positive("projectile.mass", self.projectile.mass)?;
        require_positive("projectile.radius", self.projectile.radius)?;

        if self.max_flight_ticks == 0 {
            return Err(ConfigError::NoFlightTicks);
        }

        let (min, max) = (self.spawn_min_x, self.spawn_max_x);
        if !(min.is_finite() && max.is_finite() && min < max) {
            return Err(ConfigError::EmptySpawnRange { min, max });
        }

        if !self.launch_origin.is_finite() {
            return Err(ConfigError::NonFiniteOrigin {
                x: self.launch_origin.x,
                y: self.launch_origin.y,
            });
        }

        Ok(())
    }

    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json_string()?)?;
        log::info!("Config saved to {}", path.display());
        Ok(())
    }
}
