//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (pickups by index, regions by priority)
//! - No rendering or platform dependencies

pub mod collision;
pub mod hazard;
pub mod pickup;
pub mod projectile;
pub mod region;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, attenuate, reflect_velocity, resolve};
pub use hazard::Hazard;
pub use pickup::{Pickup, PickupTracker, Progression, ScoreDelta};
pub use projectile::{Flight, Projectile};
pub use region::{Axis, Region, RegionClassifier, RegionHit, RegionKind, Restitution};
pub use snapshot::RenderSnapshot;
pub use state::{
    Emitter, GameEvent, GamePhase, GameState, SessionSummary, TerminationReason,
};
pub use tick::{Command, FixedStep, apply, tick};
