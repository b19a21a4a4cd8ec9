//! Collectible pickups and score/level progression

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// A collectible point object
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pickup {
    pub pos: Vec2,
    /// Once false, never true again
    pub active: bool,
}

impl Pickup {
    pub fn new(pos: Vec2) -> Self {
        Self { pos, active: true }
    }
}

/// Score and level for the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progression {
    /// Never decreases
    pub score: u32,
    /// Starts at 1
    pub level: u32,
    /// Pickups required for the next level-up
    pub quota: u32,
    /// Added to the quota after each level-up
    pub quota_increment: u32,
}

impl Progression {
    pub fn new(quota: u32, quota_increment: u32) -> Self {
        Self {
            score: 0,
            level: 1,
            quota,
            quota_increment,
        }
    }

    /// Add one point. Returns true if this point completed the current quota.
    pub fn award_point(&mut self) -> bool {
        self.score += 1;
        if self.quota > 0 && self.score.is_multiple_of(self.quota) {
            self.level += 1;
            self.quota += self.quota_increment;
            return true;
        }
        false
    }
}

/// Outcome of a single pickup check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreDelta {
    /// Index of the pickup collected this tick
    pub collected: Option<usize>,
    /// Level reached if this pickup triggered a level-up
    pub level_up: Option<u32>,
    /// The pool has been fully collected
    pub exhausted: bool,
}

/// Owns the pickup pool and applies collection rules
#[derive(Debug, Clone)]
pub struct PickupTracker {
    pickups: Vec<Pickup>,
    capacity: usize,
    collected: usize,
    /// Pickup radius + projectile radius
    collect_radius: f32,
}

impl PickupTracker {
    pub fn new(pickups: Vec<Pickup>, capacity: usize, collect_radius: f32) -> Self {
        Self {
            pickups,
            capacity,
            collected: 0,
            collect_radius,
        }
    }

    /// Scatter `capacity` pickups uniformly inside `[min, max)`
    pub fn generate(
        rng: &mut Pcg32,
        capacity: usize,
        min: Vec2,
        max: Vec2,
        collect_radius: f32,
    ) -> Self {
        let pickups = (0..capacity)
            .map(|_| {
                Pickup::new(Vec2::new(
                    rng.random_range(min.x..max.x),
                    rng.random_range(min.y..max.y),
                ))
            })
            .collect();
        Self::new(pickups, capacity, collect_radius)
    }

    /// Collect at most one pickup near `position`.
    ///
    /// Active pickups are scanned in index order; the first one within the
    /// collect radius is deactivated and scores a point.
    pub fn check(&mut self, position: Vec2, progression: &mut Progression) -> ScoreDelta {
        let radius = self.collect_radius;
        let Some((index, pickup)) = self
            .pickups
            .iter_mut()
            .enumerate()
            .find(|(_, p)| p.active && p.pos.distance(position) <= radius)
        else {
            return ScoreDelta::default();
        };

        pickup.active = false;
        self.collected += 1;

        let level_up = progression.award_point().then_some(progression.level);
        ScoreDelta {
            collected: Some(index),
            level_up,
            exhausted: self.is_exhausted(),
        }
    }

    /// Every pickup the pool can hold has been collected
    pub fn is_exhausted(&self) -> bool {
        self.collected >= self.capacity
    }

    pub fn pickups(&self) -> &[Pickup] {
        &self.pickups
    }

    pub fn active_count(&self) -> usize {
        self.pickups.iter().filter(|p| p.active).count()
    }

    pub fn collected(&self) -> usize {
        self.collected
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    const REACH: f32 = 0.1 + 0.3;

    #[test]
    fn test_collect_within_reach() {
        let mut tracker = PickupTracker::new(
            vec![Pickup::new(Vec2::ZERO), Pickup::new(Vec2::new(5.0, 5.0))],
            30,
            REACH,
        );
        let mut prog = Progression::new(6, 12);

        let delta = tracker.check(Vec2::new(0.25, 0.25), &mut prog);
        assert_eq!(delta.collected, Some(0));
        assert_eq!(prog.score, 1);
        assert!(!tracker.pickups()[0].active);
        assert!(tracker.pickups()[1].active);
    }

    #[test]
    fn test_out_of_reach_collects_nothing() {
        let mut tracker = PickupTracker::new(vec![Pickup::new(Vec2::ZERO)], 30, REACH);
        let mut prog = Progression::new(6, 12);

        let delta = tracker.check(Vec2::new(0.3, 0.3), &mut prog);
        assert_eq!(delta, ScoreDelta::default());
        assert_eq!(prog.score, 0);
    }

    #[test]
    fn test_one_pickup_per_check_lowest_index_first() {
        let mut tracker = PickupTracker::new(
            vec![
                Pickup::new(Vec2::new(0.1, 0.0)),
                Pickup::new(Vec2::new(-0.1, 0.0)),
            ],
            30,
            REACH,
        );
        let mut prog = Progression::new(6, 12);

        assert_eq!(tracker.check(Vec2::ZERO, &mut prog).collected, Some(0));
        assert_eq!(prog.score, 1);
        assert!(tracker.pickups()[1].active);

        assert_eq!(tracker.check(Vec2::ZERO, &mut prog).collected, Some(1));
        assert_eq!(prog.score, 2);
    }

    #[test]
    fn test_level_up_on_quota() {
        let mut prog = Progression::new(6, 12);
        for _ in 0..5 {
            assert!(!prog.award_point());
        }
        assert!(prog.award_point());
        assert_eq!(prog.score, 6);
        assert_eq!(prog.level, 2);
        assert_eq!(prog.quota, 18);

        // Next level-up when the score is a multiple of the new quota
        for _ in 7..18 {
            assert!(!prog.award_point());
        }
        assert!(prog.award_point());
        assert_eq!(prog.level, 3);
        assert_eq!(prog.quota, 30);
    }

    #[test]
    fn test_exhaustion_at_capacity() {
        let mut tracker = PickupTracker::new(
            vec![Pickup::new(Vec2::ZERO), Pickup::new(Vec2::new(2.0, 0.0))],
            2,
            REACH,
        );
        let mut prog = Progression::new(6, 12);

        assert!(!tracker.check(Vec2::ZERO, &mut prog).exhausted);
        let delta = tracker.check(Vec2::new(2.0, 0.0), &mut prog);
        assert!(delta.exhausted);
        assert!(tracker.is_exhausted());
        assert_eq!(tracker.active_count(), 0);
    }

    #[test]
    fn test_generate_is_seeded_and_in_bounds() {
        let min = Vec2::new(-1.0, 0.5);
        let max = Vec2::new(2.0, 3.0);
        let a = PickupTracker::generate(&mut Pcg32::seed_from_u64(42), 20, min, max, REACH);
        let b = PickupTracker::generate(&mut Pcg32::seed_from_u64(42), 20, min, max, REACH);

        assert_eq!(a.pickups(), b.pickups());
        assert_eq!(a.pickups().len(), 20);
        assert_eq!(a.capacity(), 20);
        for p in a.pickups() {
            assert!(p.active);
            assert!(p.pos.x >= min.x && p.pos.x < max.x);
            assert!(p.pos.y >= min.y && p.pos.y < max.y);
        }
    }

    proptest! {
        #[test]
        fn prop_repeated_checks_never_recollect(
            x in -3.0f32..3.0,
            y in -3.0f32..3.0,
            repeats in 1usize..10,
        ) {
            let mut tracker = PickupTracker::new(vec![Pickup::new(Vec2::ZERO)], 30, REACH);
            let mut prog = Progression::new(6, 12);
            let pos = Vec2::new(x, y);

            let first = tracker.check(pos, &mut prog);
            let score_after_first = prog.score;
            for _ in 0..repeats {
                let delta = tracker.check(pos, &mut prog);
                prop_assert_eq!(delta.collected, None);
            }
            prop_assert_eq!(prog.score, score_after_first);
            prop_assert_eq!(first.collected.is_some(), score_after_first == 1);
        }
    }
}
