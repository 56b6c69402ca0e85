//! Decelerating fling projection.
//!
//! The snap-point selector needs to know where a released gesture would
//! naturally coast to. This uses the Android Scroller deceleration model:
//! only the total projected travel matters here, the settle itself is
//! animated with a spring, so no position-over-time sampling is kept.

/// Tension curve inflection point of the scroller model.
const INFLECTION: f32 = 0.35;

/// Earth's gravity in SI units (m/s²).
const GRAVITY_EARTH: f32 = 9.80665;
/// Inches per meter (for density conversion).
const INCHES_PER_METER: f32 = 39.37;
/// Deceleration rate constant, (ln(0.78) / ln(0.9)).abs().
const DECELERATION_RATE: f32 = 2.358_201_6;

/// Physical deceleration for a density and friction pairing.
fn compute_deceleration(friction: f32, density: f32) -> f32 {
    GRAVITY_EARTH * INCHES_PER_METER * density * 160.0 * friction
}

/// Projects where a fling released at a given velocity comes to rest.
#[derive(Debug, Clone, Copy)]
pub struct FlingProjection {
    friction: f32,
    physical_coefficient: f32,
}

impl FlingProjection {
    /// Default friction value (matches the Android default).
    pub const DEFAULT_FRICTION: f32 = 0.015;

    /// `friction` is the scroll friction coefficient (higher = faster
    /// deceleration), `density` the screen density factor (1.0 = mdpi).
    pub fn new(friction: f32, density: f32) -> Self {
        Self {
            friction,
            physical_coefficient: compute_deceleration(0.84, density),
        }
    }

    /// Default friction for the given density.
    pub fn with_density(density: f32) -> Self {
        Self::new(Self::DEFAULT_FRICTION, density)
    }

    fn spline_deceleration(&self, velocity: f32) -> f64 {
        (INFLECTION as f64 * velocity.abs() as f64
            / (self.friction * self.physical_coefficient) as f64)
            .ln()
    }

    /// Total unsigned travel distance for a release velocity in px/s.
    pub fn distance(&self, velocity: f32) -> f32 {
        if velocity == 0.0 {
            return 0.0;
        }
        let l = self.spline_deceleration(velocity);
        let decel_minus_one = DECELERATION_RATE as f64 - 1.0;
        self.friction
            * self.physical_coefficient
            * (DECELERATION_RATE as f64 / decel_minus_one * l).exp() as f32
    }

    /// Fling duration in milliseconds for a release velocity.
    pub fn duration_millis(&self, velocity: f32) -> i64 {
        if velocity == 0.0 {
            return 0;
        }
        let l = self.spline_deceleration(velocity);
        let decel_minus_one = DECELERATION_RATE as f64 - 1.0;
        (1000.0 * (l / decel_minus_one).exp()) as i64
    }

    /// Signed resting position for a fling starting at `value` with
    /// `velocity` px/s.
    pub fn project(&self, value: f32, velocity: f32) -> f32 {
        value + self.distance(velocity) * velocity.signum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_velocity_goes_nowhere() {
        let projection = FlingProjection::with_density(2.0);
        assert_eq!(projection.distance(0.0), 0.0);
        assert_eq!(projection.project(42.0, 0.0), 42.0);
    }

    #[test]
    fn faster_flings_travel_further_and_longer() {
        let projection = FlingProjection::with_density(2.0);
        let slow = projection.distance(1000.0);
        let fast = projection.distance(5000.0);
        assert!(slow > 0.0);
        assert!(fast > slow, "expected {fast} > {slow}");
        assert!(projection.duration_millis(5000.0) > projection.duration_millis(1000.0));
    }

    #[test]
    fn projection_is_signed() {
        let projection = FlingProjection::with_density(1.0);
        let forward = projection.project(100.0, 3000.0);
        let backward = projection.project(100.0, -3000.0);
        assert!(forward > 100.0);
        assert!(backward < 100.0);
        assert!((forward - 100.0 + (backward - 100.0)).abs() < 1e-3);
    }

    #[test]
    fn higher_friction_shortens_travel() {
        let loose = FlingProjection::new(0.015, 2.0);
        let tight = FlingProjection::new(0.15, 2.0);
        assert!(tight.distance(5000.0) < loose.distance(5000.0));
    }
}
