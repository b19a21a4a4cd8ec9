//! Game tuning and preferences
//!
//! Loaded from an optional JSON file. Missing fields take their defaults, and
//! an unreadable file falls back to the defaults entirely.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Physics ===
    /// Vertical acceleration (negative is down)
    pub gravity: f32,
    /// Seconds advanced per simulation tick
    pub tick_dt: f32,

    // === Emitter ===
    /// Emitter base position; the ground plane sits at its height
    pub emitter_base: Vec2,
    /// Starting emitter angle (degrees)
    pub initial_angle: f32,
    /// Starting power-meter value
    pub initial_power: f32,
    /// Degrees per rotate key press
    pub rotate_step: f32,
    /// Power change per key press
    pub power_step: f32,

    // === Radii ===
    pub projectile_radius: f32,
    pub pickup_radius: f32,
    pub hazard_radius: f32,

    // === Pickups & progression ===
    /// Pickups generated at session start; collecting all of them ends the run
    pub pickup_capacity: usize,
    /// Pickups needed for the first level-up
    pub initial_quota: u32,
    /// Added to the quota after every level-up
    pub quota_increment: u32,
    /// Seed for pickup placement
    pub seed: u64,

    // === Hazard ===
    pub hazard_min: f32,
    pub hazard_max: f32,
    pub hazard_step: f32,
    pub hazard_offset: Vec2,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            tick_dt: SIM_DT,

            emitter_base: EMITTER_BASE,
            initial_angle: DEFAULT_ANGLE,
            initial_power: DEFAULT_POWER,
            rotate_step: ROTATE_STEP,
            power_step: POWER_STEP,

            projectile_radius: PROJECTILE_RADIUS,
            pickup_radius: PICKUP_RADIUS,
            hazard_radius: HAZARD_RADIUS,

            pickup_capacity: PICKUP_CAPACITY,
            initial_quota: INITIAL_QUOTA,
            quota_increment: QUOTA_INCREMENT,
            seed: DEFAULT_SEED,

            hazard_min: HAZARD_MIN,
            hazard_max: HAZARD_MAX,
            hazard_step: HAZARD_STEP,
            hazard_offset: HAZARD_OFFSET,
        }
    }
}

impl Settings {
    /// Environment variable consulted by the native driver for a settings path
    pub const PATH_ENV: &'static str = "CANNON_ARC_SETTINGS";

    /// Parse settings from a JSON document
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str::<Settings>(json) {
            Ok(settings) => Some(settings.sanitized()),
            Err(err) => {
                log::warn!("Invalid settings JSON: {}", err);
                None
            }
        }
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => {
                if let Some(settings) = Self::from_json(&json) {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
            }
            Err(err) => {
                log::warn!("Could not read settings {}: {}", path.display(), err);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Serialize to pretty JSON (for writing a starter settings file)
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Replace values the simulation cannot run with
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !(self.tick_dt > 0.0) {
            log::warn!("tick_dt must be positive, using {}", defaults.tick_dt);
            self.tick_dt = defaults.tick_dt;
        }
        for (name, value, fallback) in [
            ("projectile_radius", &mut self.projectile_radius, defaults.projectile_radius),
            ("pickup_radius", &mut self.pickup_radius, defaults.pickup_radius),
            ("hazard_radius", &mut self.hazard_radius, defaults.hazard_radius),
        ] {
            if !(*value > 0.0) {
                log::warn!("{} must be positive, using {}", name, fallback);
                *value = fallback;
            }
        }
        if self.pickup_capacity == 0 {
            log::warn!("pickup_capacity must be nonzero, using {}", defaults.pickup_capacity);
            self.pickup_capacity = defaults.pickup_capacity;
        }
        if self.initial_quota == 0 {
            log::warn!("initial_quota must be nonzero, using {}", defaults.initial_quota);
            self.initial_quota = defaults.initial_quota;
        }
        if self.hazard_min > self.hazard_max {
            log::warn!(
                "hazard bounds inverted ({} > {}), swapping",
                self.hazard_min,
                self.hazard_max
            );
            std::mem::swap(&mut self.hazard_min, &mut self.hazard_max);
        }
        if self.hazard_step < 0.0 {
            log::warn!(
                "hazard_step must not be negative, using {}",
                -self.hazard_step
            );
            self.hazard_step = -self.hazard_step;
        }

        self
    }
}
