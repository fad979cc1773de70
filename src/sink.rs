//! Presentation seam
//!
//! Hosts (console, renderer, recorder) receive an attempt through
//! `AttemptSink`: the launch, every trajectory sample as it is produced, and
//! the final outcome. Nothing here feeds back into the physics.

use crate::sim::{AttemptOutcome, ProjectileParams, TrajectorySample};

/// Receives one attempt as it happens
pub trait AttemptSink {
    /// A new attempt is starting; any trail from the last one is stale
    fn on_launch(&mut self, _params: &ProjectileParams) {}

    fn on_sample(&mut self, _sample: &TrajectorySample) {}

    fn on_outcome(&mut self, outcome: &AttemptOutcome);
}

/// Reports attempts through the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl AttemptSink for LogSink {
    fn on_launch(&mut self, params: &ProjectileParams) {
        log::info!(
            "Launch: angle={:.1}° speed={:.2} m/s",
            params.angle.to_degrees(),
            params.speed
        );
    }

    fn on_sample(&mut self, sample: &TrajectorySample) {
        log::trace!(
            "t={:.2} x={:.3} y={:.3}",
            sample.time,
            sample.position.x,
            sample.position.y
        );
    }

    fn on_outcome(&mut self, outcome: &AttemptOutcome) {
        if let Some(record) = outcome.impact() {
            log::info!("Height of the impact point: {:.3} m", record.impact_height());
            log::info!(
                "Momentum at impact: ({:.4}, {:.4}) kg·m/s",
                record.momentum.x,
                record.momentum.y
            );
            log::info!("Applied torque: {:.3} N·m", record.applied_torque);
            log::info!(
                "Restoring torque magnitude: {:.3} N·m",
                record.restoring_torque_magnitude
            );
        } else if let AttemptOutcome::Missed { reason, last } = outcome {
            log::info!(
                "Missed ({:?}) at t={:.2}s, x={:.3} m",
                reason,
                last.time,
                last.position.x
            );
        }
        log::info!("{}", outcome.message());
    }
}

/// Keeps everything it is given
///
/// `samples` holds the trail of the latest attempt only, mirroring how a
/// trail is cleared on relaunch; `outcomes` accumulates across attempts.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub launches: Vec<ProjectileParams>,
    pub samples: Vec<TrajectorySample>,
    pub outcomes: Vec<AttemptOutcome>,
}

impl RecordingSink {
    pub fn last_outcome(&self) -> Option<&AttemptOutcome> {
        self.outcomes.last()
    }
}

impl AttemptSink for RecordingSink {
    fn on_launch(&mut self, params: &ProjectileParams) {
        self.launches.push(*params);
        self.samples.clear();
    }

    fn on_sample(&mut self, sample: &TrajectorySample) {
        self.samples.push(*sample);
    }

    fn on_outcome(&mut self, outcome: &AttemptOutcome) {
        self.outcomes.push(*outcome);
    }
}
