//! Collision response against static regions
//!
//! A collision is an instantaneous event: reflect one velocity component,
//! attenuate both by the region's restitution pair, and commit the candidate
//! point as the origin of the next parabolic segment. There is no penetration
//! correction; the committed origin is wherever the candidate landed.

use glam::Vec2;

use super::projectile::Flight;
use super::region::{Axis, RegionHit, RegionKind, Restitution};

/// Result of a collision check
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub collided: bool,
    /// Region that was entered (if any)
    pub region: Option<RegionKind>,
    /// Origin for the next segment, relative to the emitter base
    pub new_origin: Vec2,
    /// Launch velocity for the next segment
    pub new_velocity: Vec2,
}

impl CollisionResult {
    /// No collision: origin and velocity carry on unchanged
    pub fn miss(origin: Vec2, velocity: Vec2) -> Self {
        Self {
            collided: false,
            region: None,
            new_origin: origin,
            new_velocity: velocity,
        }
    }
}

/// Flip the velocity component normal to the surface
#[inline]
pub fn reflect_velocity(velocity: Vec2, axis: Axis) -> Vec2 {
    match axis {
        Axis::InvertY => Vec2::new(velocity.x, -velocity.y),
        Axis::InvertX => Vec2::new(-velocity.x, velocity.y),
    }
}

/// Divide each component by its coefficient.
///
/// Both components are attenuated no matter which one was reflected.
#[inline]
pub fn attenuate(velocity: Vec2, restitution: Restitution) -> Vec2 {
    Vec2::new(velocity.x / restitution.ex, velocity.y / restitution.ey)
}

/// Resolve this tick's candidate motion against the classified region.
///
/// `origin` is the projectile's current origin; on a hit the displacement at
/// the time of impact is folded into it.
pub fn resolve(origin: Vec2, flight: &Flight, hit: Option<RegionHit>) -> CollisionResult {
    let Some(hit) = hit else {
        return CollisionResult::miss(origin, flight.velocity);
    };

    let reflected = reflect_velocity(flight.velocity, hit.axis);
    CollisionResult {
        collided: true,
        region: Some(hit.kind),
        new_origin: origin + flight.displacement,
        new_velocity: attenuate(reflected, hit.restitution),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight(displacement: Vec2, velocity: Vec2) -> Flight {
        Flight {
            position: displacement,
            displacement,
            velocity,
        }
    }

    #[test]
    fn test_reflect_velocity() {
        let v = Vec2::new(3.0, -4.0);
        assert_eq!(reflect_velocity(v, Axis::InvertY), Vec2::new(3.0, 4.0));
        assert_eq!(reflect_velocity(v, Axis::InvertX), Vec2::new(-3.0, -4.0));
    }

    #[test]
    fn test_miss_keeps_origin() {
        let f = flight(Vec2::new(1.0, 2.0), Vec2::new(5.0, -1.0));
        let result = resolve(Vec2::new(0.5, 0.0), &f, None);
        assert!(!result.collided);
        assert_eq!(result.region, None);
        assert_eq!(result.new_origin, Vec2::new(0.5, 0.0));
        assert_eq!(result.new_velocity, Vec2::new(5.0, -1.0));
    }

    #[test]
    fn test_ground_bounce_divides_both_axes() {
        let hit = RegionHit {
            kind: RegionKind::Ground,
            restitution: Restitution::new(1.2, 1.5),
            axis: Axis::InvertY,
        };
        let f = flight(Vec2::new(4.0, -0.01), Vec2::new(6.0, -3.0));
        let result = resolve(Vec2::new(1.0, 0.0), &f, Some(hit));

        assert!(result.collided);
        assert_eq!(result.region, Some(RegionKind::Ground));
        assert_eq!(result.new_origin, Vec2::new(5.0, -0.01));
        assert!((result.new_velocity.x - 5.0).abs() < 1e-5);
        assert!((result.new_velocity.y - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_side_face_reflects_x_and_still_damps_y() {
        let hit = RegionHit {
            kind: RegionKind::RoughGroundSide,
            restitution: Restitution::new(1.6, 1.4),
            axis: Axis::InvertX,
        };
        let f = flight(Vec2::new(6.6, 0.3), Vec2::new(3.2, 1.4));
        let result = resolve(Vec2::ZERO, &f, Some(hit));

        assert!((result.new_velocity.x - (-2.0)).abs() < 1e-5);
        assert!((result.new_velocity.y - 1.0).abs() < 1e-5);
    }
}
