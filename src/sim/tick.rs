//! Simulation tick
//!
//! Core game loop that advances the session by one step. Order within a tick
//! matters: the pickup check sees the candidate position before any bounce is
//! committed, and the hazard moves after the projectile.

use super::collision;
use super::state::{GameEvent, GamePhase, GameState, SessionSummary, TerminationReason};
use crate::Settings;
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

/// Discrete commands delivered between ticks by the input layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Rotate the emitter by this many degrees (result is clamped)
    RotateEmitter(f32),
    /// Add to the power meter
    AdjustPower(f32),
    Fire,
    Quit,
}

impl Command {
    /// Parse the text form used by the headless driver:
    /// `rotate [deg]`, `power [delta]`, `fire`, `quit`.
    ///
    /// Without an argument, or with a bare `+`/`-`, rotate and power move by
    /// the configured step, as a single key press would.
    pub fn parse(line: &str, settings: &Settings) -> Option<Self> {
        let mut words = line.split_whitespace();
        let verb = words.next()?.to_lowercase();
        let command = match verb.as_str() {
            "rotate" | "r" => {
                Command::RotateEmitter(step_or_value(words.next(), settings.rotate_step)?)
            }
            "power" | "p" => {
                Command::AdjustPower(step_or_value(words.next(), settings.power_step)?)
            }
            "fire" | "f" => Command::Fire,
            "quit" | "q" => Command::Quit,
            _ => return None,
        };
        if words.next().is_some() {
            return None;
        }
        Some(command)
    }
}

/// Explicit numeric delta, or one step in the signed direction
fn step_or_value(arg: Option<&str>, step: f32) -> Option<f32> {
    match arg {
        None | Some("+") => Some(step),
        Some("-") => Some(-step),
        Some(value) => value.parse().ok(),
    }
}

/// Apply one input command. Returns the final summary when the command ends
/// the session.
pub fn apply(state: &mut GameState, command: Command) -> Option<SessionSummary> {
    match command {
        Command::RotateEmitter(delta) => state.rotate_emitter(delta),
        Command::AdjustPower(delta) => state.adjust_power(delta),
        Command::Fire => state.fire(),
        Command::Quit => return Some(state.quit()),
    }
    None
}

/// Advance the session by `dt` seconds of projectile time
pub fn tick(state: &mut GameState, dt: f32) {
    if state.is_terminated() {
        return;
    }
    state.time_ticks += 1;

    let gravity = state.settings.gravity;
    let base = state.emitter.base;

    let mut contact_point = None;
    if state.phase == GamePhase::Flying {
        match state.projectile.advance(dt, gravity, base) {
            Some(flight) => {
                let hit = state.regions.classify(flight.position);

                // Scoring uses the pre-bounce candidate position
                let delta = state.pickups.check(flight.position, &mut state.progression);
                if let Some(index) = delta.collected {
                    log::debug!("Pickup {} collected, score={}", index, state.progression.score);
                    state.push_event(GameEvent::PickupCollected { index });
                }
                if let Some(level) = delta.level_up {
                    log::info!(
                        "Level {} reached, next quota {}",
                        level,
                        state.progression.quota
                    );
                    state.push_event(GameEvent::LevelUp { level });
                }

                let result = collision::resolve(state.projectile.origin, &flight, hit);
                if let Some(region) = result.region {
                    log::debug!(
                        "Bounce on {:?} at ({:.3}, {:.3}), v=({:.3}, {:.3})",
                        region,
                        flight.position.x,
                        flight.position.y,
                        result.new_velocity.x,
                        result.new_velocity.y
                    );
                    state
                        .projectile
                        .commit_bounce(result.new_origin, result.new_velocity);
                    state.push_event(GameEvent::Bounced { region });
                }

                if delta.exhausted {
                    state.terminate(TerminationReason::PickupPoolExhausted);
                    return;
                }

                if state.projectile.settle_if_resting(result.new_velocity) {
                    log::debug!("Projectile at rest");
                    state.phase = GamePhase::Idle;
                    state.push_event(GameEvent::CameToRest);
                } else {
                    contact_point = Some(flight.position);
                }
            }
            None => state.phase = GamePhase::Idle,
        }
    }

    state.hazard.update();
    if let Some(point) = contact_point {
        if state
            .hazard
            .check_contact(point, state.settings.projectile_radius)
        {
            state.terminate(TerminationReason::HazardContact);
        }
    }
}

/// Fixed-step accumulator that turns variable frame times into whole ticks
#[derive(Debug, Clone)]
pub struct FixedStep {
    accumulator: f32,
    dt: f32,
    max_substeps: u32,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(SIM_DT)
    }
}

impl FixedStep {
    pub fn new(dt: f32) -> Self {
        Self {
            accumulator: 0.0,
            dt,
            max_substeps: MAX_SUBSTEPS,
        }
    }

    /// Run as many ticks as `frame_dt` covers. Returns the number of ticks run.
    pub fn advance(&mut self, state: &mut GameState, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= self.dt && substeps < self.max_substeps {
            tick(state, self.dt);
            self.accumulator -= self.dt;
            substeps += 1;
            if state.is_terminated() {
                self.accumulator = 0.0;
                break;
            }
        }
        substeps
    }

    /// Leftover time not yet simulated
    pub fn pending(&self) -> f32 {
        self.accumulator
    }
}
