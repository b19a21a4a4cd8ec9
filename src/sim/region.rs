//! Static obstacle regions
//!
//! Each region is an axis-aligned box, expressed relative to its own offset,
//! carrying the restitution pair used when the projectile enters it. Regions
//! are tested in a fixed order and the first match wins, so the order of the
//! list decides ties at shared boundaries.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::GROUND_THRESHOLD;

/// Identity of a region in the default layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionKind {
    Ground,
    LeftPlatform,
    RightPlatform,
    RoughGroundTop,
    RoughGroundSide,
}

/// Which velocity component is reflected on entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    /// Horizontal surface: `vy *= -1`
    InvertY,
    /// Vertical surface: `vx *= -1`
    InvertX,
}

/// Per-axis velocity divisors applied on collision
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Restitution {
    pub ex: f32,
    pub ey: f32,
}

impl Restitution {
    pub const fn new(ex: f32, ey: f32) -> Self {
        Self { ex, ey }
    }
}

/// An obstacle footprint
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub kind: RegionKind,
    /// Region-local origin in world space
    pub offset: Vec2,
    /// Exclusive lower bounds, relative to `offset`
    pub min: Vec2,
    /// Exclusive upper bounds, relative to `offset`
    pub max: Vec2,
    pub restitution: Restitution,
    pub axis: Axis,
}

impl Region {
    /// Whether a world-space point lies strictly inside the region
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        let local = point - self.offset;
        local.x > self.min.x && local.x < self.max.x && local.y > self.min.y && local.y < self.max.y
    }

    /// The region's response, as returned by the classifier
    pub fn hit(&self) -> RegionHit {
        RegionHit {
            kind: self.kind,
            restitution: self.restitution,
            axis: self.axis,
        }
    }
}

/// Classification result for a matched region
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionHit {
    pub kind: RegionKind,
    pub restitution: Restitution,
    pub axis: Axis,
}

/// Ordered region list evaluated by first match
#[derive(Debug, Clone)]
pub struct RegionClassifier {
    regions: Vec<Region>,
}

impl RegionClassifier {
    pub fn new(regions: Vec<Region>) -> Self {
        Self { regions }
    }

    /// The standard scene for an emitter standing on the ground at `ground_y`.
    ///
    /// Priority: ground, left platform, right platform, rough ground top,
    /// rough ground side.
    pub fn default_layout(ground_y: f32) -> Self {
        let ground = Vec2::new(0.0, ground_y);
        Self::new(vec![
            Region {
                kind: RegionKind::Ground,
                offset: ground,
                min: Vec2::new(f32::NEG_INFINITY, f32::NEG_INFINITY),
                max: Vec2::new(f32::INFINITY, GROUND_THRESHOLD),
                restitution: Restitution::new(1.2, 1.5),
                axis: Axis::InvertY,
            },
            Region {
                kind: RegionKind::LeftPlatform,
                offset: ground + Vec2::new(1.5, 0.0),
                min: Vec2::new(-0.4, f32::NEG_INFINITY),
                max: Vec2::new(0.4, 1.5),
                restitution: Restitution::new(1.1, 1.3),
                axis: Axis::InvertY,
            },
            Region {
                kind: RegionKind::RightPlatform,
                offset: ground + Vec2::new(3.0, 0.0),
                min: Vec2::new(-0.4, f32::NEG_INFINITY),
                max: Vec2::new(0.4, 2.5),
                restitution: Restitution::new(1.3, 1.2),
                axis: Axis::InvertY,
            },
            Region {
                kind: RegionKind::RoughGroundTop,
                offset: ground + Vec2::new(5.0, 0.0),
                min: Vec2::new(-0.7, f32::NEG_INFINITY),
                max: Vec2::new(0.7, 0.6),
                restitution: Restitution::new(1.8, 2.2),
                axis: Axis::InvertY,
            },
            Region {
                kind: RegionKind::RoughGroundSide,
                offset: ground + Vec2::new(5.0, 0.0),
                min: Vec2::new(-0.9, f32::NEG_INFINITY),
                max: Vec2::new(-0.7, 0.6),
                restitution: Restitution::new(1.6, 1.4),
                axis: Axis::InvertX,
            },
        ])
    }

    /// First region containing `position`, or `None` for free flight
    pub fn classify(&self, position: Vec2) -> Option<RegionHit> {
        self.regions
            .iter()
            .find(|region| region.contains(position))
            .map(Region::hit)
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn get(&self, kind: RegionKind) -> Option<&Region> {
        self.regions.iter().find(|r| r.kind == kind)
    }
}
