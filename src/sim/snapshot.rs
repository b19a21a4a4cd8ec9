//! Read-only view of a session for the rendering layer
//!
//! Copied out after each tick so the renderer never touches simulation state.

use glam::Vec2;
use serde::Serialize;

use super::pickup::Pickup;
use super::state::{GamePhase, GameState};

/// Everything a frame needs to draw the scene and HUD
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub phase: GamePhase,
    pub projectile_pos: Vec2,
    /// Cosmetic spin in degrees
    pub projectile_spin: f32,
    pub pickups: Vec<Pickup>,
    pub hazard_pos: Vec2,
    pub emitter_base: Vec2,
    /// Degrees
    pub emitter_angle: f32,
    pub power: f32,
    pub score: u32,
    pub level: u32,
    pub quota: u32,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            phase: state.phase,
            projectile_pos: state.projectile_position(),
            projectile_spin: state.projectile.spin,
            pickups: state.pickups.pickups().to_vec(),
            hazard_pos: state.hazard.world_position(),
            emitter_base: state.emitter.base,
            emitter_angle: state.emitter.angle,
            power: state.emitter.power,
            score: state.progression.score,
            level: state.progression.level,
            quota: state.progression.quota,
        }
    }

    /// Pickups still on the field
    pub fn active_pickups(&self) -> impl Iterator<Item = &Pickup> {
        self.pickups.iter().filter(|p| p.active)
    }

    /// HUD line, e.g. `Score: 3  Level: 1  Power: 8.0`
    pub fn hud_text(&self) -> String {
        format!(
            "Score: {}  Level: {}  Power: {:.1}",
            self.score, self.level, self.power
        )
    }
}
