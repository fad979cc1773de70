//! Fixed timestep flight
//!
//! A `Flight` advances one attempt tick by tick. It is an iterator over
//! trajectory samples: the launch sample at t = 0, then one per tick, ending
//! with the tick that reached a terminal phase. The samples are for display;
//! the outcome comes from `Flight::phase`.

use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use super::collision::{projectile_grounded, projectile_past_target, projectile_target_collision};
use super::impact::ImpactTick;
use super::projectile::Projectile;
use super::target::TargetBody;
use crate::Vector2;

/// Why a flight ended without touching the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissReason {
    /// Dropped below ground level
    Grounded,
    /// Crossed the target's center line above it
    PastTarget,
}

/// Where a flight is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlightPhase {
    Flying,
    Impact(ImpactTick),
    Missed(MissReason),
}

impl FlightPhase {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, FlightPhase::Flying)
    }
}

/// One point on the trail
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySample {
    pub tick: u64,
    pub time: f64,
    pub position: Vector2,
}

/// One attempt in flight
#[derive(Debug, Clone)]
pub struct Flight<'a> {
    projectile: Projectile,
    target: &'a TargetBody,
    dt: f64,
    max_ticks: u64,
    ticks: u64,
    phase: FlightPhase,
    /// Launch sample already handed out
    launched: bool,
    last: TrajectorySample,
}

impl<'a> Flight<'a> {
    pub fn new(projectile: Projectile, target: &'a TargetBody, dt: f64, max_ticks: u64) -> Self {
        let last = TrajectorySample {
            tick: 0,
            time: 0.0,
            position: projectile.position_at(0.0),
        };
        Self {
            projectile,
            target,
            dt,
            max_ticks,
            ticks: 0,
            phase: FlightPhase::Flying,
            launched: false,
            last,
        }
    }

    pub fn phase(&self) -> FlightPhase {
        self.phase
    }

    pub fn target(&self) -> &TargetBody {
        self.target
    }

    /// Most recent sample (the launch sample before the first tick)
    pub fn last_sample(&self) -> TrajectorySample {
        self.last
    }

    /// Simulated time so far
    pub fn elapsed(&self) -> f64 {
        self.ticks as f64 * self.dt
    }

    /// Advance one tick and classify the new position
    ///
    /// Impact is checked before ground and past-target, so a tick that
    /// satisfies several conditions counts as a hit.
    fn step(&mut self) -> TrajectorySample {
        self.ticks += 1;
        // Multiply rather than accumulate so tick n is exactly n * dt
        let t = self.ticks as f64 * self.dt;
        let position = self.projectile.position_at(t);

        let collision = projectile_target_collision(position, self.projectile.radius(), self.target);
        self.phase = if collision.hit {
            FlightPhase::Impact(ImpactTick {
                time: t,
                position: collision.point,
                momentum: self.projectile.momentum_at(t),
            })
        } else if projectile_grounded(position) {
            FlightPhase::Missed(MissReason::Grounded)
        } else if projectile_past_target(position, self.target) {
            FlightPhase::Missed(MissReason::PastTarget)
        } else if self.ticks >= self.max_ticks {
            log::warn!("Flight cut off after {} ticks at ({:.3}, {:.3})", self.ticks, position.x, position.y);
            FlightPhase::Missed(MissReason::Grounded)
        } else {
            FlightPhase::Flying
        };

        self.last = TrajectorySample {
            tick: self.ticks,
            time: t,
            position,
        };
        log::trace!("tick {} t={:.2} pos=({:.3}, {:.3})", self.ticks, t, position.x, position.y);

        if self.phase.is_terminal() {
            log::debug!("Flight ended after {} ticks: {:?}", self.ticks, self.phase);
        }

        self.last
    }

    /// Drain the remaining samples and return the terminal phase
    pub fn run_to_end(&mut self) -> FlightPhase {
        for _ in self.by_ref() {}
        self.phase
    }
}

impl Iterator for Flight<'_> {
    type Item = TrajectorySample;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.launched {
            self.launched = true;
            return Some(self.last);
        }
        if self.phase.is_terminal() {
            return None;
        }
        Some(self.step())
    }
}

impl FusedIterator for Flight<'_> {}
