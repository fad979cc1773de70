//! A game session: one target, attempts until it falls
//!
//! The target is placed once when the session starts. Each attempt is
//! independent; the only thing carried between attempts is the target
//! itself and whether it has been toppled.

use thiserror::Error;

use super::projectile::{Launch, ProjectileParams};
use super::run::{AttemptOutcome, SimulationRun};
use super::target::{TargetBody, seeded_rng};
use crate::config::{ConfigError, SimConfig};
use crate::sink::AttemptSink;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("target already toppled after {attempts} attempts")]
    TargetToppled { attempts: u32 },
    #[error("invalid launch: angle={angle} rad, speed={speed} m/s")]
    InvalidLaunch { angle: f64, speed: f64 },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, Clone)]
pub struct Session {
    config: SimConfig,
    run: SimulationRun,
    target: TargetBody,
    attempts: u32,
}

impl Session {
    /// Validate `config` and spawn the target from `seed`
    pub fn new(config: SimConfig, seed: u64) -> Result<Self, SessionError> {
        config.validate()?;
        let mut rng = seeded_rng(seed);
        let target = TargetBody::spawn(
            config.spawn_min_x,
            config.spawn_max_x,
            config.target,
            config.gravity,
            &mut rng,
        );
        log::info!(
            "Session seed {seed}: target at x={:.3} (restoring torque {:.2} N·m)",
            target.position_x(),
            target.restoring_torque_magnitude()
        );
        Ok(Self::assemble(config, target))
    }

    /// Start with an already placed target
    pub fn with_target(config: SimConfig, target: TargetBody) -> Result<Self, SessionError> {
        config.validate()?;
        Ok(Self::assemble(config, target))
    }

    fn assemble(config: SimConfig, target: TargetBody) -> Self {
        Self {
            run: SimulationRun::new(&config),
            config,
            target,
            attempts: 0,
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn target(&self) -> &TargetBody {
        &self.target
    }

    pub fn run(&self) -> &SimulationRun {
        &self.run
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// No further attempts once the target is down
    pub fn is_over(&self) -> bool {
        self.target.is_toppled()
    }

    /// Launch parameters for this session's projectile
    pub fn params(&self, launch: Launch) -> ProjectileParams {
        ProjectileParams::new(self.config.projectile, launch)
    }

    /// Fly one launch; a toppling outcome ends the session
    pub fn attempt<S: AttemptSink + ?Sized>(
        &mut self,
        launch: Launch,
        sink: &mut S,
    ) -> Result<AttemptOutcome, SessionError> {
        if self.is_over() {
            return Err(SessionError::TargetToppled {
                attempts: self.attempts,
            });
        }
        if !launch.is_valid() {
            return Err(SessionError::InvalidLaunch {
                angle: launch.angle,
                speed: launch.speed,
            });
        }

        self.attempts += 1;
        let params = self.params(launch);
        let outcome = self.run.attempt_with_sink(&self.target, params, sink);
        if outcome.is_toppled() {
            self.target.topple();
            log::info!("Target toppled on attempt {}", self.attempts);
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::TargetGeometry;
    use crate::sink::RecordingSink;

    fn session_at(x: f64, config: SimConfig) -> Session {
        let target = TargetBody::at(x, config.target, config.gravity);
        Session::with_target(config, target).unwrap()
    }

    #[test]
    fn test_seeded_sessions_match() {
        let a = Session::new(SimConfig::default(), 7).unwrap();
        let b = Session::new(SimConfig::default(), 7).unwrap();
        assert_eq!(a.target(), b.target());
        assert!(a.target().position_x() >= 5.0 && a.target().position_x() < 20.0);
        assert_eq!(a.attempts(), 0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SimConfig {
            gravity: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            Session::new(config, 1),
            Err(SessionError::Config(ConfigError::NotPositive { field: "gravity", .. }))
        ));
    }

    #[test]
    fn test_misses_and_hits_keep_session_open() {
        let mut session = session_at(10.0, SimConfig::default());
        let mut sink = RecordingSink::default();

        let outcome = session.attempt(Launch::from_degrees(5.0, 2.0), &mut sink).unwrap();
        assert!(!outcome.is_hit());
        let outcome = session.attempt(Launch::from_degrees(45.0, 10.5), &mut sink).unwrap();
        assert!(outcome.is_hit() && !outcome.is_toppled());

        assert!(!session.is_over());
        assert_eq!(session.attempts(), 2);
        assert_eq!(sink.outcomes.len(), 2);
    }

    #[test]
    fn test_topple_ends_session() {
        let mut config = SimConfig::default();
        config.projectile.mass = 1.0;
        let mut session = session_at(10.0, config);
        let mut sink = RecordingSink::default();

        let outcome = session.attempt(Launch::from_degrees(45.0, 10.5), &mut sink).unwrap();
        assert!(outcome.is_toppled());
        assert!(session.is_over());
        assert!(session.target().is_toppled());

        let err = session
            .attempt(Launch::from_degrees(45.0, 10.5), &mut sink)
            .unwrap_err();
        assert!(matches!(err, SessionError::TargetToppled { attempts: 1 }));
        assert_eq!(sink.outcomes.len(), 1);
    }

    #[test]
    fn test_invalid_launch_not_counted() {
        let mut session = session_at(10.0, SimConfig::default());
        let mut sink = RecordingSink::default();
        let err = session.attempt(Launch::new(0.5, -3.0), &mut sink).unwrap_err();
        assert!(matches!(err, SessionError::InvalidLaunch { .. }));
        assert_eq!(session.attempts(), 0);
        assert!(sink.launches.is_empty());
    }

    #[test]
    fn test_session_uses_config_geometry() {
        let config = SimConfig {
            target: TargetGeometry {
                mass: 10.0,
                ..Default::default()
            },
            ..Default::default()
        };
        let session = session_at(10.0, config);
        assert_eq!(session.config().target.mass, 10.0);
        assert!((session.target().restoring_torque_magnitude() - 24.525).abs() < 1e-9);
        // 68.75 N·m now beats the lighter target
        let outcome = session.run().attempt(session.target(), session.params(Launch::from_degrees(45.0, 10.5)));
        assert!(outcome.is_toppled());
    }
}
