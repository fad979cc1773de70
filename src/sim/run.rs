//! One attempt, end to end
//!
//! Builds a fresh projectile for the launch, flies it against the target,
//! evaluates the impact if there was one, and reports the outcome.

use serde::{Deserialize, Serialize};

use super::impact::{ImpactEvaluator, ImpactRecord, LeverArmConvention};
use super::projectile::{Projectile, ProjectileParams};
use super::target::TargetBody;
use super::trajectory::{Flight, FlightPhase, MissReason, TrajectorySample};
use crate::Vector2;
use crate::config::SimConfig;
use crate::sink::AttemptSink;

/// Result of one launch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AttemptOutcome {
    /// Never touched the target; `last` is the terminal sample
    Missed {
        reason: MissReason,
        last: TrajectorySample,
    },
    /// Struck the target without enough torque to topple it
    Hit(ImpactRecord),
    /// Struck the target and knocked it over
    Toppled(ImpactRecord),
}

impl AttemptOutcome {
    pub fn impact(&self) -> Option<&ImpactRecord> {
        match self {
            AttemptOutcome::Hit(record) | AttemptOutcome::Toppled(record) => Some(record),
            AttemptOutcome::Missed { .. } => None,
        }
    }

    pub fn is_toppled(&self) -> bool {
        matches!(self, AttemptOutcome::Toppled(_))
    }

    /// Touched the target, toppled or not
    pub fn is_hit(&self) -> bool {
        self.impact().is_some()
    }

    /// Player-facing summary line
    pub fn message(&self) -> &'static str {
        match self {
            AttemptOutcome::Toppled(_) => "The target has been toppled!",
            AttemptOutcome::Hit(_) => "The target has been hit but not toppled!",
            AttemptOutcome::Missed { .. } => "The target has been missed! Try again!",
        }
    }
}

/// Stateless attempt runner built from a config
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationRun {
    gravity: f64,
    dt: f64,
    max_flight_ticks: u64,
    origin: Vector2,
    evaluator: ImpactEvaluator,
}

impl SimulationRun {
    /// Assumes `config` has been validated
    pub fn new(config: &SimConfig) -> Self {
        Self {
            gravity: config.gravity,
            dt: config.dt,
            max_flight_ticks: config.max_flight_ticks,
            origin: config.launch_origin,
            evaluator: ImpactEvaluator::new(config.dt, config.lever_arm),
        }
    }

    pub fn lever_arm(&self) -> LeverArmConvention {
        self.evaluator.convention
    }

    /// Lazy trajectory for one launch, starting at t = 0
    pub fn flight<'a>(&self, target: &'a TargetBody, params: ProjectileParams) -> Flight<'a> {
        let projectile = Projectile::new(params, self.origin, self.gravity);
        Flight::new(projectile, target, self.dt, self.max_flight_ticks)
    }

    /// Fly one launch to completion
    pub fn attempt(&self, target: &TargetBody, params: ProjectileParams) -> AttemptOutcome {
        let mut flight = self.flight(target, params);
        self.finish(&mut flight)
    }

    /// Fly one launch, reporting every sample and the outcome to `sink`
    pub fn attempt_with_sink<S: AttemptSink + ?Sized>(
        &self,
        target: &TargetBody,
        params: ProjectileParams,
        sink: &mut S,
    ) -> AttemptOutcome {
        sink.on_launch(&params);
        let mut flight = self.flight(target, params);
        for sample in flight.by_ref() {
            sink.on_sample(&sample);
        }
        let outcome = self.finish(&mut flight);
        sink.on_outcome(&outcome);
        outcome
    }

    /// Outcome of a flight that has ended, `None` while it is still airborne
    pub fn outcome(&self, flight: &Flight<'_>) -> Option<AttemptOutcome> {
        let target = flight.target();
        match flight.phase() {
            FlightPhase::Impact(tick) => {
                let record = self
                    .evaluator
                    .evaluate(&tick, target.pivot(), target.restoring_torque_magnitude());
                if record.toppled {
                    Some(AttemptOutcome::Toppled(record))
                } else {
                    Some(AttemptOutcome::Hit(record))
                }
            }
            FlightPhase::Missed(reason) => Some(AttemptOutcome::Missed {
                reason,
                last: flight.last_sample(),
            }),
            FlightPhase::Flying => None,
        }
    }

    /// Fly out whatever is left of `flight` and report its outcome
    pub fn finish(&self, flight: &mut Flight<'_>) -> AttemptOutcome {
        loop {
            if let Some(outcome) = self.outcome(flight) {
                return outcome;
            }
            // Every tick either ends the flight or counts toward the tick cap
            flight.next();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::GRAVITY;
    use crate::sim::{Launch, ProjectileBody, TargetGeometry};
    use crate::sink::RecordingSink;

    fn target(x: f64) -> TargetBody {
        TargetBody::at(x, TargetGeometry::default(), GRAVITY)
    }

    fn params(angle_deg: f64, speed: f64) -> ProjectileParams {
        ProjectileParams::new(ProjectileBody::default(), Launch::from_degrees(angle_deg, speed))
    }

    #[test]
    fn test_lob_hits_without_toppling() {
        let run = SimulationRun::new(&SimConfig::default());
        let outcome = run.attempt(&target(10.0), params(45.0, 10.5));
        let AttemptOutcome::Hit(record) = outcome else {
            panic!("expected hit, got {outcome:?}");
        };
        assert!((record.applied_torque_magnitude - 68.7512).abs() < 1e-3);
        assert!(record.applied_torque < 0.0);
        assert!((record.restoring_torque_magnitude - 245.25).abs() < 1e-9);
        assert!((record.impact_height() - 1.30878).abs() < 1e-4);
        assert!(!record.toppled);
        assert_eq!(outcome.message(), "The target has been hit but not toppled!");
    }

    #[test]
    fn test_heavy_projectile_topples() {
        let run = SimulationRun::new(&SimConfig::default());
        let heavy = ProjectileParams {
            mass: 1.0,
            ..params(45.0, 10.5)
        };
        let outcome = run.attempt(&target(10.0), heavy);
        assert!(outcome.is_toppled());
        let record = outcome.impact().unwrap();
        assert!((record.applied_torque_magnitude - 687.512).abs() < 1e-2);
        assert!(record.torque_ratio() > 1.0);
    }

    #[test]
    fn test_absolute_height_lever_arm() {
        let config = SimConfig {
            lever_arm: LeverArmConvention::AbsoluteHeight,
            ..Default::default()
        };
        let run = SimulationRun::new(&config);
        let outcome = run.attempt(&target(10.0), params(45.0, 10.5));
        assert_eq!(run.lever_arm(), LeverArmConvention::AbsoluteHeight);
        let record = outcome.impact().unwrap();
        assert!((record.applied_torque - 125.593).abs() < 1e-2);
        assert!(!outcome.is_toppled());
    }

    #[test]
    fn test_miss_reasons() {
        let run = SimulationRun::new(&SimConfig::default());

        let outcome = run.attempt(&target(10.0), params(5.0, 2.0));
        assert!(matches!(outcome, AttemptOutcome::Missed { reason: MissReason::Grounded, .. }));
        assert!(!outcome.is_hit());

        let outcome = run.attempt(&target(10.0), params(45.0, 14.0));
        let AttemptOutcome::Missed { reason, last } = outcome else {
            panic!("expected miss, got {outcome:?}");
        };
        assert_eq!(reason, MissReason::PastTarget);
        assert!(last.position.x > 10.0);
        assert!(last.position.y > 2.0);
    }

    #[test]
    fn test_outcome_waits_for_flight_to_end() {
        let run = SimulationRun::new(&SimConfig::default());
        let target = target(10.0);
        let mut flight = run.flight(&target, params(45.0, 10.5));
        flight.next();
        flight.next();
        assert_eq!(flight.last_sample().tick, 1);
        assert_eq!(run.outcome(&flight), None);

        let outcome = run.finish(&mut flight);
        assert!(matches!(outcome, AttemptOutcome::Hit(_)));
        assert_eq!(outcome, run.attempt(&target, params(45.0, 10.5)));
        assert_eq!(run.outcome(&flight), Some(outcome));
    }

    #[test]
    fn test_repeat_attempt_is_identical() {
        let run = SimulationRun::new(&SimConfig::default());
        let target = target(12.3);
        for (angle, speed) in [(45.0, 10.5), (30.0, 12.0), (60.0, 11.0), (5.0, 2.0)] {
            let first = run.attempt(&target, params(angle, speed));
            let second = run.attempt(&target, params(angle, speed));
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_sink_sees_every_sample() {
        let run = SimulationRun::new(&SimConfig::default());
        let target = target(10.0);
        let mut sink = RecordingSink::default();
        let outcome = run.attempt_with_sink(&target, params(45.0, 10.5), &mut sink);

        let direct: Vec<_> = run.flight(&target, params(45.0, 10.5)).collect();
        assert_eq!(sink.samples, direct);
        assert_eq!(sink.outcomes, vec![outcome]);
        assert_eq!(sink.launches.len(), 1);
        assert_eq!(sink.samples.last().map(|s| s.tick), Some(131));
    }
}
