//! Line and Bézier curve values derived from a path's drawing commands.

use crate::builder::OutlineBuilder;
use crate::geometry_utilities::types::*;
use crate::geometry_utilities::{clamp_progress, evaluate_cubic_bezier, evaluate_linear_bezier, evaluate_quadratic_bezier};
use arrayvec::ArrayVec;

/// A single segment of an outline.
///
/// Curves are free standing values. Consecutive curves of a sub path share their end and
/// start points only because the decomposer produced them that way.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Curve {
    Linear {
        start: OutlinePoint,
        end: OutlinePoint,
    },
    Quadratic {
        start: OutlinePoint,
        end: OutlinePoint,
        control: OutlinePoint,
    },
    Cubic {
        start: OutlinePoint,
        end: OutlinePoint,
        control1: OutlinePoint,
        control2: OutlinePoint,
    },
}

impl Curve {
    pub fn linear(start: OutlinePoint, end: OutlinePoint) -> Curve {
        Curve::Linear { start, end }
    }

    pub fn quadratic(start: OutlinePoint, end: OutlinePoint, control: OutlinePoint) -> Curve {
        Curve::Quadratic { start, end, control }
    }

    pub fn cubic(start: OutlinePoint, end: OutlinePoint, control1: OutlinePoint, control2: OutlinePoint) -> Curve {
        Curve::Cubic {
            start,
            end,
            control1,
            control2,
        }
    }

    pub fn start(&self) -> OutlinePoint {
        match *self {
            Curve::Linear { start, .. } | Curve::Quadratic { start, .. } | Curve::Cubic { start, .. } => start,
        }
    }

    pub fn end(&self) -> OutlinePoint {
        match *self {
            Curve::Linear { end, .. } | Curve::Quadratic { end, .. } | Curve::Cubic { end, .. } => end,
        }
    }

    /// Polynomial degree: 1 for lines, 2 for quadratics, 3 for cubics.
    pub fn degree(&self) -> usize {
        match self {
            Curve::Linear { .. } => 1,
            Curve::Quadratic { .. } => 2,
            Curve::Cubic { .. } => 3,
        }
    }

    /// Control points in order from the start point to the end point.
    pub fn control_points(&self) -> ArrayVec<OutlinePoint, 2> {
        let mut points = ArrayVec::new();
        match *self {
            Curve::Linear { .. } => {}
            Curve::Quadratic { control, .. } => points.push(control),
            Curve::Cubic { control1, control2, .. } => {
                points.push(control1);
                points.push(control2);
            }
        }
        points
    }

    /// Evaluates the curve. `progress` is clamped to `[0, 1]`, NaN is treated as `0`.
    pub fn point_at(&self, progress: f32) -> OutlinePoint {
        let t = clamp_progress(progress);
        match *self {
            Curve::Linear { start, end } => evaluate_linear_bezier(start, end, t),
            Curve::Quadratic { start, end, control } => evaluate_quadratic_bezier(start, control, end, t),
            Curve::Cubic {
                start,
                end,
                control1,
                control2,
            } => evaluate_cubic_bezier(start, control1, control2, end, t),
        }
    }

    /// `count` evenly spaced evaluations from start to end, with their progress.
    ///
    /// A single sample sits at the start of the curve.
    pub fn samples(&self, count: usize) -> impl Iterator<Item = (f32, OutlinePoint)> {
        let curve = *self;
        (0..count).map(move |i| {
            let t = if count > 1 { i as f32 / (count - 1) as f32 } else { 0.0 };
            (t, curve.point_at(t))
        })
    }

    /// Returns the curve with every point mapped through `transform`.
    pub fn transformed(&self, transform: &OutlineTransform) -> Curve {
        let map = |p: OutlinePoint| transform.transform_point(p);
        match *self {
            Curve::Linear { start, end } => Curve::linear(map(start), map(end)),
            Curve::Quadratic { start, end, control } => Curve::quadratic(map(start), map(end), map(control)),
            Curve::Cubic {
                start,
                end,
                control1,
                control2,
            } => Curve::cubic(map(start), map(end), map(control1), map(control2)),
        }
    }

    /// Emits the curve into `builder`, moving to the start first unless the builder
    /// already sits there.
    pub fn append_to(&self, builder: &mut OutlineBuilder) {
        if builder.current_point() != Some(self.start()) {
            builder.move_to(self.start());
        }

        match *self {
            Curve::Linear { end, .. } => builder.line_to(end),
            Curve::Quadratic { end, control, .. } => builder.quadratic_bezier_to(control, end),
            Curve::Cubic {
                end,
                control1,
                control2,
                ..
            } => builder.cubic_bezier_to(control1, control2, end),
        }
    }
}
