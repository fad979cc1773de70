//! Deterministic simulation module
//!
//! All physics and decision logic lives here. This module must be pure and
//! deterministic:
//! - Fixed timestep only
//! - Seeded RNG only (target placement)
//! - No rendering or platform dependencies

pub mod collision;
pub mod impact;
pub mod projectile;
pub mod run;
pub mod session;
pub mod target;
pub mod trajectory;

pub use collision::{CollisionResult, hit_tolerance, projectile_target_collision};
pub use impact::{ImpactEvaluator, ImpactRecord, ImpactTick, LeverArmConvention};
pub use projectile::{Launch, Projectile, ProjectileBody, ProjectileParams};
pub use run::{AttemptOutcome, SimulationRun};
pub use session::{Session, SessionError};
pub use target::{TargetBody, TargetGeometry, seeded_rng};
pub use trajectory::{Flight, FlightPhase, MissReason, TrajectorySample};
