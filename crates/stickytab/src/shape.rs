//! The deformable capsule outline.
//!
//! A pure function of the deformation signal: no hidden state, rebuilt
//! every frame. `progress` in [-1, 1] stretches the body horizontally
//! toward the head (positive) or tail (negative) while shrinking it
//! vertically; the vertical offset tilts the stretched edge and skews the
//! long-edge curvature so the body appears to lean.

use stickytab_animation::interpolate;
use stickytab_graphics::{Path, Point};

/// Smallest body thickness the vertical shrink may reach, in logical px.
pub const MIN_BODY_HEIGHT: f32 = 20.0;

/// Long-edge control-point offset divisors: the control point sits at
/// width/3 from the stretched (head) corner and width/7 from the anchored
/// (tail) corner, which is what gives the drip-like taper.
const HEAD_CONTROL_DIVISOR: f32 = 3.0;
const TAIL_CONTROL_DIVISOR: f32 = 7.0;

/// Static shape parameters; the dynamic inputs arrive per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TabShape {
    width: f32,
    height: f32,
    head_radius: f32,
    tail_radius: f32,
    horizontal_resistance: f32,
    vertical_resistance: f32,
}

impl TabShape {
    /// Inputs are defensively normalized: resistances clamped into their
    /// domains and radii against the body thickness, so degenerate
    /// configurations never produce inverted curve parameters.
    pub fn new(
        width: f32,
        height: f32,
        head_radius: f32,
        tail_radius: f32,
        horizontal_resistance: f32,
        vertical_resistance: f32,
    ) -> Self {
        let max_radius = (height / 2.0).min(width / 2.0).max(0.0);
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
            head_radius: head_radius.clamp(0.0, max_radius),
            tail_radius: tail_radius.clamp(0.0, max_radius),
            horizontal_resistance: horizontal_resistance.max(1.0),
            vertical_resistance: vertical_resistance.clamp(f32::EPSILON, 1.0),
        }
    }

    pub fn head_radius(&self) -> f32 {
        self.head_radius
    }

    pub fn tail_radius(&self) -> f32 {
        self.tail_radius
    }

    /// Maximum vertical perturbation the shape will accept at full stretch.
    pub fn max_vertical_offset(&self) -> f32 {
        self.height * self.normalized_shrink() / 2.0
    }

    fn normalized_shrink(&self) -> f32 {
        let clamped = self
            .vertical_resistance
            .clamp((MIN_BODY_HEIGHT / self.height).min(1.0), 1.0);
        (1.0 - clamped) / 2.0
    }

    /// Generate the closed outline for the given deformation signal and
    /// vertical perturbation.
    pub fn outline(&self, progress: f32, vertical_offset: f32) -> Path {
        let progress = progress.clamp(-1.0, 1.0);
        let (width, height) = (self.width, self.height);
        let h = self.horizontal_resistance;
        let shrink = self.normalized_shrink();

        let fx = interpolate(progress, &[-1.0, 0.0, 1.0], &[h, 1.0, h]);
        let fy = interpolate(progress, &[-1.0, 0.0, 1.0], &[shrink, 0.0, shrink]);

        let max_dy = height * shrink / 2.0;
        let dy = vertical_offset.clamp(-max_dy, max_dy);
        let min_height = height * (1.0 - 2.0 * fy);
        let progress_y = if max_dy > 0.0 {
            interpolate(dy, &[-max_dy, 0.0, max_dy], &[-1.0, 0.0, 1.0])
        } else {
            0.0
        };

        // Four anchor corners of the deformed body. The stretched edge
        // carries the shrink insets and the tilt; the anchored edge keeps
        // the full body height.
        let stretching_head = progress >= 0.0;
        let top_inset = (fy * height + dy).clamp(0.0, height - min_height);
        let bottom_inset = (height * (1.0 - fy) + dy).clamp(min_height, height);
        let (p1, p2, p3, p4) = if stretching_head {
            (
                Point::new(0.0, 0.0),
                Point::new(width * fx, top_inset),
                Point::new(width * fx, bottom_inset),
                Point::new(0.0, height),
            )
        } else {
            (
                Point::new(-(fx - 1.0) * width, top_inset),
                Point::new(width, 0.0),
                Point::new(width, height),
                Point::new(-(fx - 1.0) * width, bottom_inset),
            )
        };

        let head_base = width / HEAD_CONTROL_DIVISOR;
        let tail_base = width / TAIL_CONTROL_DIVISOR;
        let head_ctrl = interpolate(progress, &[-1.0, 0.0, 1.0], &[tail_base, 0.0, head_base]);
        let tail_ctrl = interpolate(progress, &[-1.0, 0.0, 1.0], &[head_base, 0.0, tail_base]);
        let top_skew = interpolate(progress_y, &[-1.0, 0.0, 1.0], &[1.3, 1.0, 1.5]);
        let bottom_skew = interpolate(progress_y, &[-1.0, 0.0, 1.0], &[1.5, 1.0, 1.3]);

        // Corner radii shrink toward half the local body thickness on the
        // stretched side, so the radius never exceeds the thickness.
        let head_radius = interpolate(
            progress,
            &[-1.0, 0.0, 1.0],
            &[self.head_radius, self.head_radius, min_height / 2.0],
        );
        let tail_radius = interpolate(
            progress,
            &[-1.0, 0.0, 1.0],
            &[min_height / 2.0, self.tail_radius, self.tail_radius],
        );

        let mut path = Path::begin(Point::new(p1.x + tail_radius, p1.y));
        path.cubic_to(
            Point::new(p1.x + tail_radius + tail_ctrl * top_skew, p1.y),
            Point::new(p2.x - head_radius - head_ctrl * bottom_skew, p2.y),
            Point::new(p2.x - head_radius, p2.y),
        );
        path.quad_to(p2, Point::new(p2.x, p2.y + head_radius));
        path.line_to(Point::new(p3.x, p3.y - head_radius));
        path.quad_to(p3, Point::new(p3.x - head_radius, p3.y));
        path.cubic_to(
            Point::new(p3.x - head_radius - head_ctrl * bottom_skew, p3.y),
            Point::new(p4.x + tail_radius + tail_ctrl * top_skew, p4.y),
            Point::new(p4.x + tail_radius, p4.y),
        );
        path.quad_to(p4, Point::new(p4.x, p4.y - tail_radius));
        path.line_to(Point::new(p1.x, p1.y + tail_radius));
        path.quad_to(p1, Point::new(p1.x + tail_radius, p1.y));
        path.close();
        path
    }
}

#[cfg(test)]
#[path = "tests/shape_tests.rs"]
mod tests;
