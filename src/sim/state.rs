//! Session context and core simulation types
//!
//! Everything the simulation mutates lives in one [`GameState`] owned by the
//! loop and passed explicitly to each component.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::hazard::Hazard;
use super::pickup::{PickupTracker, Progression};
use super::projectile::Projectile;
use super::region::{RegionClassifier, RegionKind};
use crate::consts::{EMITTER_MAX_ANGLE, EMITTER_MIN_ANGLE, PICKUP_FIELD_MAX, PICKUP_FIELD_MIN};
use crate::settings::Settings;

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminationReason {
    /// Player asked to quit
    Quit,
    /// Projectile touched the hazard
    HazardContact,
    /// Every pickup in the pool was collected
    PickupPoolExhausted,
}

impl TerminationReason {
    /// Line printed before the final score
    pub fn message(&self) -> Option<&'static str> {
        match self {
            TerminationReason::Quit => None,
            TerminationReason::HazardContact => Some("The projectile hit the hazard. Game over!"),
            TerminationReason::PickupPoolExhausted => Some("All pickups collected!"),
        }
    }
}

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No projectile in flight
    Idle,
    /// Projectile launched and moving
    Flying,
    /// Session over; ticks are ignored
    Terminated(TerminationReason),
}

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Fired { power: f32, angle: f32 },
    Bounced { region: RegionKind },
    PickupCollected { index: usize },
    LevelUp { level: u32 },
    CameToRest,
    Terminated { reason: TerminationReason },
}

/// Final numbers reported when the session ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub score: u32,
    pub level: u32,
}

impl std::fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "score: {}", self.score)?;
        write!(f, "level: {}", self.level)
    }
}

/// The cannon the projectile is fired from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Emitter {
    /// World position of the barrel pivot; also the projectile's launch point
    pub base: Vec2,
    /// Barrel angle in degrees, kept within [EMITTER_MIN_ANGLE, EMITTER_MAX_ANGLE]
    pub angle: f32,
    /// Power-meter value (unclamped)
    pub power: f32,
}

impl Emitter {
    pub fn new(base: Vec2, angle: f32, power: f32) -> Self {
        Self {
            base,
            angle: angle.clamp(EMITTER_MIN_ANGLE, EMITTER_MAX_ANGLE),
            power,
        }
    }

    pub fn rotate(&mut self, delta: f32) {
        self.angle = (self.angle + delta).clamp(EMITTER_MIN_ANGLE, EMITTER_MAX_ANGLE);
    }

    pub fn adjust_power(&mut self, delta: f32) {
        self.power += delta;
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    pub phase: GamePhase,
    pub emitter: Emitter,
    pub projectile: Projectile,
    pub regions: RegionClassifier,
    pub pickups: PickupTracker,
    pub progression: Progression,
    pub hazard: Hazard,
    /// Simulation tick counter
    pub time_ticks: u64,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Start a session from the given settings
    pub fn new(settings: Settings) -> Self {
        let mut rng = Pcg32::seed_from_u64(settings.seed);
        let pickups = PickupTracker::generate(
            &mut rng,
            settings.pickup_capacity,
            PICKUP_FIELD_MIN,
            PICKUP_FIELD_MAX,
            settings.pickup_radius + settings.projectile_radius,
        );

        log::info!(
            "Session started: seed={}, pickups={}, quota={}",
            settings.seed,
            settings.pickup_capacity,
            settings.initial_quota
        );

        Self {
            phase: GamePhase::Idle,
            emitter: Emitter::new(
                settings.emitter_base,
                settings.initial_angle,
                settings.initial_power,
            ),
            projectile: Projectile::new(),
            regions: RegionClassifier::default_layout(settings.emitter_base.y),
            pickups,
            progression: Progression::new(settings.initial_quota, settings.quota_increment),
            hazard: Hazard::new(
                settings.hazard_min,
                settings.hazard_max,
                settings.hazard_step,
                settings.hazard_offset,
                settings.hazard_radius,
            ),
            time_ticks: 0,
            events: Vec::new(),
            settings,
        }
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self.phase, GamePhase::Terminated(_))
    }

    pub fn termination_reason(&self) -> Option<TerminationReason> {
        match self.phase {
            GamePhase::Terminated(reason) => Some(reason),
            _ => None,
        }
    }

    /// Launch the projectile with the current power and angle
    pub fn fire(&mut self) {
        if self.is_terminated() {
            return;
        }
        let (power, angle) = (self.emitter.power, self.emitter.angle);
        self.projectile.reset(power, angle);
        self.phase = GamePhase::Flying;
        self.push_event(GameEvent::Fired { power, angle });
        log::info!("Fired: power={:.2}, angle={:.1}°", power, angle);
    }

    pub fn rotate_emitter(&mut self, delta: f32) {
        if !self.is_terminated() {
            self.emitter.rotate(delta);
        }
    }

    pub fn adjust_power(&mut self, delta: f32) {
        if !self.is_terminated() {
            self.emitter.adjust_power(delta);
        }
    }

    /// End the session by request and report the final numbers
    pub fn quit(&mut self) -> SessionSummary {
        self.terminate(TerminationReason::Quit);
        self.summary()
    }

    /// Move to the terminal phase. The first reason sticks.
    pub fn terminate(&mut self, reason: TerminationReason) {
        if self.is_terminated() {
            return;
        }
        self.phase = GamePhase::Terminated(reason);
        self.projectile.flying = false;
        self.push_event(GameEvent::Terminated { reason });
        log::info!(
            "Session ended ({:?}): score={}, level={}",
            reason,
            self.progression.score,
            self.progression.level
        );
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            score: self.progression.score,
            level: self.progression.level,
        }
    }

    /// Projectile world position
    pub fn projectile_position(&self) -> Vec2 {
        self.projectile
            .position(self.emitter.base, self.settings.gravity)
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
