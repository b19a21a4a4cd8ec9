//! Projectile kinematics
//!
//! The projectile follows a closed-form parabola from its last committed
//! origin. Position is never integrated step by step: each tick recomputes the
//! displacement from the launch (or bounce) velocity and the time elapsed since.

use glam::Vec2;

use crate::consts::{REST_EPSILON, SPIN_PER_TICK};
use crate::{direction_from_degrees, wrap_degrees};

/// Candidate motion for one tick, before any collision is applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flight {
    /// Absolute candidate position (emitter base + origin + displacement)
    pub position: Vec2,
    /// Displacement from the current origin
    pub displacement: Vec2,
    /// Instantaneous velocity at the current elapsed time
    pub velocity: Vec2,
}

/// Kinematic state of the launched object
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    /// Last committed collision point, relative to the emitter base
    pub origin: Vec2,
    /// Velocity at the start of the current parabolic segment
    pub launch_velocity: Vec2,
    /// Seconds since the last launch or bounce
    pub elapsed: f32,
    pub flying: bool,
    /// Cosmetic rotation (degrees), advanced while flying
    pub spin: f32,
}

impl Default for Projectile {
    fn default() -> Self {
        Self {
            origin: Vec2::ZERO,
            launch_velocity: Vec2::ZERO,
            elapsed: 0.0,
            flying: false,
            spin: 0.0,
        }
    }
}

impl Projectile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Launch from the emitter base with the given power and angle
    pub fn reset(&mut self, power: f32, angle_degrees: f32) {
        self.launch_velocity = direction_from_degrees(angle_degrees) * power;
        self.elapsed = 0.0;
        self.origin = Vec2::ZERO;
        self.flying = true;
    }

    /// Displacement from the origin after `elapsed` seconds
    #[inline]
    pub fn displacement(&self, gravity: f32) -> Vec2 {
        let t = self.elapsed;
        Vec2::new(
            self.launch_velocity.x * t,
            self.launch_velocity.y * t + 0.5 * gravity * t * t,
        )
    }

    /// Instantaneous velocity (no horizontal acceleration)
    #[inline]
    pub fn velocity(&self, gravity: f32) -> Vec2 {
        Vec2::new(
            self.launch_velocity.x,
            self.launch_velocity.y + gravity * self.elapsed,
        )
    }

    /// Current absolute position
    pub fn position(&self, base: Vec2, gravity: f32) -> Vec2 {
        base + self.origin + self.displacement(gravity)
    }

    /// Advance time and compute this tick's candidate motion.
    ///
    /// Returns `None` when the projectile is not flying; a resting projectile
    /// stays put until the next [`Projectile::reset`].
    pub fn advance(&mut self, dt: f32, gravity: f32, base: Vec2) -> Option<Flight> {
        if !self.flying {
            return None;
        }

        self.elapsed += dt;
        self.spin = wrap_degrees(self.spin + SPIN_PER_TICK);

        let displacement = self.displacement(gravity);
        Some(Flight {
            position: base + self.origin + displacement,
            displacement,
            velocity: self.velocity(gravity),
        })
    }

    /// Start a fresh parabolic segment at `new_origin` with `new_velocity`
    pub fn commit_bounce(&mut self, new_origin: Vec2, new_velocity: Vec2) {
        self.origin = new_origin;
        self.launch_velocity = new_velocity;
        self.elapsed = 0.0;
    }

    /// Stop flying if both velocity components are below the rest threshold.
    /// Returns true when the projectile came to rest.
    pub fn settle_if_resting(&mut self, velocity: Vec2) -> bool {
        if self.flying && velocity.x.abs() < REST_EPSILON && velocity.y.abs() < REST_EPSILON {
            self.flying = false;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const G: f32 = -10.0;

    #[test]
    fn test_reset_decomposes_power() {
        let mut p = Projectile::new();
        p.origin = Vec2::new(3.0, 1.0);
        p.elapsed = 2.0;
        p.reset(8.0, 20.0);

        assert!((p.launch_velocity.x - 7.5175).abs() < 1e-3);
        assert!((p.launch_velocity.y - 2.7362).abs() < 1e-3);
        assert_eq!(p.elapsed, 0.0);
        assert_eq!(p.origin, Vec2::ZERO);
        assert!(p.flying);
    }

    #[test]
    fn test_advance_not_flying() {
        let mut p = Projectile::new();
        assert!(p.advance(1.0 / 60.0, G, Vec2::ZERO).is_none());
        assert_eq!(p.elapsed, 0.0);
    }

    #[test]
    fn test_advance_parabola() {
        let mut p = Projectile::new();
        p.reset(10.0, 90.0);
        let base = Vec2::new(-3.5, 0.0);

        let flight = p.advance(0.5, G, base).unwrap();
        // uy*t + 0.5*g*t^2 = 5 - 1.25
        assert!((flight.displacement.y - 3.75).abs() < 1e-4);
        assert!((flight.position.y - 3.75).abs() < 1e-4);
        assert!((flight.position.x - base.x).abs() < 1e-4);
        // vy = uy + g*t
        assert!((flight.velocity.y - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_commit_bounce_starts_new_segment() {
        let mut p = Projectile::new();
        p.reset(8.0, 45.0);
        p.advance(0.3, G, Vec2::ZERO);
        p.commit_bounce(Vec2::new(1.0, 0.0), Vec2::new(2.0, 3.0));

        assert_eq!(p.elapsed, 0.0);
        assert_eq!(p.displacement(G), Vec2::ZERO);
        assert_eq!(p.position(Vec2::ZERO, G), Vec2::new(1.0, 0.0));
        assert_eq!(p.velocity(G), Vec2::new(2.0, 3.0));
    }

    #[test]
    fn test_rest_condition_needs_both_components() {
        let mut p = Projectile::new();
        p.reset(1.0, 45.0);

        assert!(!p.settle_if_resting(Vec2::new(0.005, 0.5)));
        assert!(p.flying);
        assert!(!p.settle_if_resting(Vec2::new(0.5, 0.005)));
        assert!(p.settle_if_resting(Vec2::new(0.005, -0.005)));
        assert!(!p.flying);
        assert!(p.advance(1.0 / 60.0, G, Vec2::ZERO).is_none());
    }

    #[test]
    fn test_spin_advances_only_while_flying() {
        let mut p = Projectile::new();
        p.advance(0.1, G, Vec2::ZERO);
        assert_eq!(p.spin, 0.0);

        p.reset(5.0, 60.0);
        p.advance(0.1, G, Vec2::ZERO);
        p.advance(0.1, G, Vec2::ZERO);
        assert!((p.spin - 2.0 * SPIN_PER_TICK).abs() < 1e-5);
    }

    proptest! {
        #[test]
        fn prop_fire_sets_launch_velocity(power in 0.01f32..50.0, angle in 0.0f32..=180.0) {
            let mut p = Projectile::new();
            p.reset(power, angle);
            let rad = angle.to_radians();
            prop_assert!((p.launch_velocity.x - power * rad.cos()).abs() < 1e-3);
            prop_assert!((p.launch_velocity.y - power * rad.sin()).abs() < 1e-3);
            prop_assert_eq!(p.elapsed, 0.0);
        }

        #[test]
        fn prop_height_follows_parabola(
            power in 0.5f32..20.0,
            angle in 3.0f32..177.0,
            ticks in 1usize..120,
        ) {
            let dt = 1.0 / 60.0;
            let mut p = Projectile::new();
            p.reset(power, angle);
            let mut last = None;
            for _ in 0..ticks {
                last = p.advance(dt, G, Vec2::ZERO);
            }
            let flight = last.unwrap();
            let t = p.elapsed;
            let expected = p.launch_velocity.y * t + 0.5 * G * t * t;
            prop_assert!((flight.displacement.y - expected).abs() < 1e-3);
        }
    }
}
