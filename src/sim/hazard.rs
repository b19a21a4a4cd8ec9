//! Oscillating hazard
//!
//! Moves back and forth along x inside a box at a fixed offset. The bound test
//! runs on the current position before the step is applied, so the hazard can
//! end up one step past a bound before it turns around.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    /// Scalar position along x, relative to `offset`
    pub position: f32,
    /// +1.0 or -1.0
    pub direction: f32,
    /// Distance moved per tick
    pub step: f32,
    pub min: f32,
    pub max: f32,
    /// World-space origin of the oscillation box
    pub offset: Vec2,
    pub radius: f32,
}

impl Hazard {
    /// Hazard at position 0 moving in the +x direction
    pub fn new(min: f32, max: f32, step: f32, offset: Vec2, radius: f32) -> Self {
        Self {
            position: 0.0,
            direction: 1.0,
            step,
            min,
            max,
            offset,
            radius,
        }
    }

    /// Advance one tick. Returns true if the direction flipped.
    pub fn update(&mut self) -> bool {
        let flipped = self.position > self.max || self.position < self.min;
        if flipped {
            self.direction = -self.direction;
        }
        self.position += self.step * self.direction;
        flipped
    }

    /// Center of the hazard in world space
    pub fn world_position(&self) -> Vec2 {
        self.offset + Vec2::new(self.position, 0.0)
    }

    /// Whether a projectile of `projectile_radius` at `position` touches the hazard
    pub fn check_contact(&self, position: Vec2, projectile_radius: f32) -> bool {
        self.world_position().distance(position) <= self.radius + projectile_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> Hazard {
        Hazard::new(-2.5, 0.5, 0.01, Vec2::ZERO, 0.25)
    }

    #[test]
    fn test_moves_by_step() {
        let mut h = reference();
        assert!(!h.update());
        assert!((h.position - 0.01).abs() < 1e-6);
        assert_eq!(h.direction, 1.0);
    }

    #[test]
    fn test_flips_past_upper_bound_with_overshoot() {
        let mut h = reference();
        let mut before = Vec::new();
        let mut flip_at = None;
        for i in 0..200 {
            before.push(h.position);
            if h.update() {
                flip_at = Some(i);
                break;
            }
        }
        let tick = flip_at.expect("hazard never turned around");

        // The turn comes on the first tick that starts above 0.5, never earlier
        let first_past = before
            .iter()
            .position(|&p| p > 0.5)
            .expect("hazard never passed the bound");
        assert_eq!(tick, first_past);
        assert_eq!(tick, 51);
        assert!(before[tick - 1] <= 0.5);
        assert!(before[tick] > 0.5 && before[tick] <= 0.5 + 0.01 + 1e-4);
        assert_eq!(h.direction, -1.0);
        assert!((h.position - (before[tick] - 0.01)).abs() < 1e-6);
    }

    #[test]
    fn test_ping_pong_stays_near_bounds() {
        let mut h = reference();
        let mut flips = 0;
        for _ in 0..2000 {
            if h.update() {
                flips += 1;
            }
            assert!(h.position >= -2.5 - 0.02 && h.position <= 0.5 + 0.02);
        }
        assert!(flips >= 3);
    }

    #[test]
    fn test_contact_radius() {
        let h = Hazard::new(-2.5, 0.5, 0.01, Vec2::new(1.0, 3.0), 0.25);
        assert_eq!(h.world_position(), Vec2::new(1.0, 3.0));
        assert!(h.check_contact(Vec2::new(1.5, 3.0), 0.3));
        assert!(!h.check_contact(Vec2::new(1.6, 3.0), 0.3));
    }
}
