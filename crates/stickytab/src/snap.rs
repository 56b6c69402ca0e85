//! The snap grid and its velocity-aware destination selector.

use stickytab_animation::FlingProjection;

/// The fixed ordered set of legal resting coordinates, one per tab,
/// evenly spaced from 0 to the maximum travel distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapGrid {
    count: usize,
    step: f32,
}

impl SnapGrid {
    pub fn new(count: usize, step: f32) -> Self {
        Self {
            count: count.max(1),
            step: step.max(0.0),
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn points(&self) -> Vec<f32> {
        (0..self.count).map(|i| i as f32 * self.step).collect()
    }

    pub fn max_travel(&self) -> f32 {
        (self.count - 1) as f32 * self.step
    }

    pub fn position_of(&self, index: usize) -> f32 {
        index.min(self.count - 1) as f32 * self.step
    }

    /// Index of the grid point a committed position sits on.
    pub fn index_of(&self, position: f32) -> usize {
        if self.step <= 0.0 {
            return 0;
        }
        let index = (position / self.step).round().max(0.0) as usize;
        index.min(self.count - 1)
    }

    /// Grid point nearest to `position`, ignoring velocity.
    pub fn nearest(&self, position: f32) -> f32 {
        self.position_of(self.index_of(position.clamp(0.0, self.max_travel())))
    }

    /// Velocity-aware destination: project the release position forward by
    /// the decelerating fling distance, clamp into the grid span, then take
    /// the nearest grid point. An exact midpoint resolves in the direction
    /// of travel, so a fast flick can carry selection past the nearest tab.
    pub fn select(&self, release: f32, velocity: f32, projection: &FlingProjection) -> f32 {
        if self.step <= 0.0 || self.count < 2 {
            return 0.0;
        }
        let projected = projection
            .project(release, velocity)
            .clamp(0.0, self.max_travel());
        let raw = projected / self.step;
        let index = if velocity < 0.0 {
            (raw - 0.5).ceil()
        } else {
            (raw + 0.5).floor()
        };
        let index = (index.max(0.0) as usize).min(self.count - 1);
        self.position_of(index)
    }
}

#[cfg(test)]
#[path = "tests/snap_tests.rs"]
mod tests;
