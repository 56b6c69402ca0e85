//! Closed vector outlines built from line, quadratic and cubic segments.
//!
//! The shape generator rebuilds one of these every frame; the render layer
//! consumes either the segment list directly or the SVG path data string.

use crate::geometry::Point;
use std::fmt::Write;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    /// Quadratic bezier with one control point.
    QuadTo { ctrl: Point, to: Point },
    /// Cubic bezier with two control points.
    CubicTo { c1: Point, c2: Point, to: Point },
    Close,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// Start a new path at `start`.
    pub fn begin(start: Point) -> Self {
        Self {
            segments: vec![PathSegment::MoveTo(start)],
        }
    }

    pub fn line_to(&mut self, to: Point) -> &mut Self {
        self.segments.push(PathSegment::LineTo(to));
        self
    }

    pub fn quad_to(&mut self, ctrl: Point, to: Point) -> &mut Self {
        self.segments.push(PathSegment::QuadTo { ctrl, to });
        self
    }

    pub fn cubic_to(&mut self, c1: Point, c2: Point, to: Point) -> &mut Self {
        self.segments.push(PathSegment::CubicTo { c1, c2, to });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.segments.push(PathSegment::Close);
        self
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Every on-curve and control point of the path, in order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.segments.iter().flat_map(|segment| {
            let points: Vec<Point> = match *segment {
                PathSegment::MoveTo(p) | PathSegment::LineTo(p) => vec![p],
                PathSegment::QuadTo { ctrl, to } => vec![ctrl, to],
                PathSegment::CubicTo { c1, c2, to } => vec![c1, c2, to],
                PathSegment::Close => vec![],
            };
            points
        })
    }

    /// Serialize to SVG path data (`d` attribute syntax).
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            if !out.is_empty() {
                out.push(' ');
            }
            match *segment {
                PathSegment::MoveTo(p) => {
                    let _ = write!(out, "M{} {}", fmt(p.x), fmt(p.y));
                }
                PathSegment::LineTo(p) => {
                    let _ = write!(out, "L{} {}", fmt(p.x), fmt(p.y));
                }
                PathSegment::QuadTo { ctrl, to } => {
                    let _ = write!(
                        out,
                        "Q{} {} {} {}",
                        fmt(ctrl.x),
                        fmt(ctrl.y),
                        fmt(to.x),
                        fmt(to.y)
                    );
                }
                PathSegment::CubicTo { c1, c2, to } => {
                    let _ = write!(
                        out,
                        "C{} {} {} {} {} {}",
                        fmt(c1.x),
                        fmt(c1.y),
                        fmt(c2.x),
                        fmt(c2.y),
                        fmt(to.x),
                        fmt(to.y)
                    );
                }
                PathSegment::Close => out.push('Z'),
            }
        }
        out
    }
}

/// Trim trailing zeros so `20.0` serializes as `20`, matching hand-written
/// path data.
fn fmt(value: f32) -> String {
    if value == value.trunc() && value.abs() < 1e7 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_round_rect_fragment() {
        let mut path = Path::begin(Point::new(20.0, 0.0));
        path.cubic_to(
            Point::new(30.0, 0.0),
            Point::new(60.0, 0.0),
            Point::new(70.0, 0.0),
        );
        path.quad_to(Point::new(90.0, 0.0), Point::new(90.0, 20.0));
        path.line_to(Point::new(90.0, 40.0));
        path.close();

        assert_eq!(
            path.to_svg(),
            "M20 0 C30 0 60 0 70 0 Q90 0 90 20 L90 40 Z"
        );
    }

    #[test]
    fn fractional_coordinates_keep_precision() {
        let mut path = Path::begin(Point::new(0.5, 0.0));
        path.line_to(Point::new(1.25, -2.5));
        assert_eq!(path.to_svg(), "M0.5 0 L1.25 -2.5");
    }

    #[test]
    fn points_walks_control_points_in_order() {
        let mut path = Path::begin(Point::ZERO);
        path.quad_to(Point::new(1.0, 0.0), Point::new(1.0, 1.0));
        path.close();
        let points: Vec<Point> = path.points().collect();
        assert_eq!(
            points,
            vec![Point::ZERO, Point::new(1.0, 0.0), Point::new(1.0, 1.0)]
        );
    }
}
