//! Cannon Arc - a 2D cannon and bouncing-projectile game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, region collisions, pickups, hazard)
//! - `settings`: Data-driven tuning loaded from JSON
//!
//! Windowing, input binding and rendering live outside this crate. They read
//! [`sim::RenderSnapshot`] after each tick and feed [`sim::Command`]s back in.

pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Nominal simulation timestep (500 Hz). Small enough that a bouncing
    /// projectile's hop decays below REST_EPSILON on every surface.
    pub const SIM_DT: f32 = 0.002;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 16;
    /// Longest frame the accumulator will accept (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Vertical acceleration (units/s², negative is down)
    pub const GRAVITY: f32 = -10.0;
    /// Both velocity components below this means the projectile is at rest
    pub const REST_EPSILON: f32 = 0.01;

    /// Emitter defaults
    pub const EMITTER_BASE: Vec2 = Vec2::new(-3.5, 0.0);
    pub const EMITTER_MIN_ANGLE: f32 = 3.0;
    pub const EMITTER_MAX_ANGLE: f32 = 177.0;
    pub const DEFAULT_ANGLE: f32 = 45.0;
    pub const DEFAULT_POWER: f32 = 8.0;
    /// Degrees per rotate command from a single key press
    pub const ROTATE_STEP: f32 = 3.0;
    /// Power change per key press
    pub const POWER_STEP: f32 = 0.5;

    /// Collision radii
    pub const PROJECTILE_RADIUS: f32 = 0.3;
    pub const PICKUP_RADIUS: f32 = 0.1;
    pub const HAZARD_RADIUS: f32 = 0.25;

    /// Cosmetic spin of the projectile while flying (degrees per tick)
    pub const SPIN_PER_TICK: f32 = 1.0;

    /// Ground plane height above the emitter base that counts as contact
    pub const GROUND_THRESHOLD: f32 = 0.005;

    /// Pickup pool and level progression
    pub const PICKUP_CAPACITY: usize = 30;
    pub const INITIAL_QUOTA: u32 = 6;
    pub const QUOTA_INCREMENT: u32 = 12;
    /// Rectangle pickups are scattered in (world space)
    pub const PICKUP_FIELD_MIN: Vec2 = Vec2::new(-2.5, 0.8);
    pub const PICKUP_FIELD_MAX: Vec2 = Vec2::new(5.5, 4.0);

    /// Hazard oscillation (scalar along x, inside a box at HAZARD_OFFSET)
    pub const HAZARD_MIN: f32 = -2.5;
    pub const HAZARD_MAX: f32 = 0.5;
    pub const HAZARD_STEP: f32 = 0.01;
    pub const HAZARD_OFFSET: Vec2 = Vec2::new(1.0, 3.0);

    /// Default run seed for pickup placement
    pub const DEFAULT_SEED: u64 = 0x00C0_FFEE;
}

/// Unit direction vector for an angle in degrees (0° = +x, 90° = +y)
#[inline]
pub fn direction_from_degrees(degrees: f32) -> Vec2 {
    let rad = degrees.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}

/// Wrap an angle in degrees to [0, 360)
#[inline]
pub fn wrap_degrees(degrees: f32) -> f32 {
    degrees.rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_degrees() {
        let right = direction_from_degrees(0.0);
        assert!((right.x - 1.0).abs() < 1e-6);
        assert!(right.y.abs() < 1e-6);

        let up = direction_from_degrees(90.0);
        assert!(up.x.abs() < 1e-6);
        assert!((up.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_wrap_degrees() {
        assert!((wrap_degrees(361.0) - 1.0).abs() < 1e-4);
        assert!((wrap_degrees(-90.0) - 270.0).abs() < 1e-4);
        assert_eq!(wrap_degrees(0.0), 0.0);
    }
}
