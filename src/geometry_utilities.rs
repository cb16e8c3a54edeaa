use types::*;

pub mod types {
    /// Coordinate space of glyph outlines and SVG path data.
    pub struct OutlineSpace;
    pub type OutlinePoint = euclid::Point2D<f32, OutlineSpace>;
    pub type OutlineVector = euclid::Vector2D<f32, OutlineSpace>;
    pub type OutlineRect = euclid::Rect<f32, OutlineSpace>;
    pub type OutlineSize = euclid::Size2D<f32, OutlineSpace>;
    pub type OutlineTransform = euclid::Transform2D<f32, OutlineSpace, OutlineSpace>;
}

/// Clamps a curve parameter to `[0, 1]`. NaN maps to `0`.
pub fn clamp_progress(t: f32) -> f32 {
    // f32::max returns the other operand when one of them is NaN
    t.max(0.0).min(1.0)
}

pub fn evaluate_linear_bezier<U>(p0: euclid::Point2D<f32, U>, p1: euclid::Point2D<f32, U>, t: f32) -> euclid::Point2D<f32, U> {
    let p0 = p0.to_untyped().to_vector();
    let p1 = p1.to_untyped().to_vector();
    let t1 = 1.0 - t;
    (p0 * t1 + p1 * t).to_point().cast_unit()
}

pub fn evaluate_quadratic_bezier<U>(
    p0: euclid::Point2D<f32, U>,
    p1: euclid::Point2D<f32, U>,
    p2: euclid::Point2D<f32, U>,
    t: f32,
) -> euclid::Point2D<f32, U> {
    let p0 = p0.to_untyped().to_vector();
    let p1 = p1.to_untyped().to_vector();
    let p2 = p2.to_untyped().to_vector();
    let t1 = 1.0 - t;
    (p0 * (t1 * t1) + p1 * (2.0 * t1 * t) + p2 * (t * t)).to_point().cast_unit()
}

pub fn evaluate_cubic_bezier<U>(
    p0: euclid::Point2D<f32, U>,
    p1: euclid::Point2D<f32, U>,
    p2: euclid::Point2D<f32, U>,
    p3: euclid::Point2D<f32, U>,
    t: f32,
) -> euclid::Point2D<f32, U> {
    let p0 = p0.to_untyped().to_vector();
    let p1 = p1.to_untyped().to_vector();
    let p2 = p2.to_untyped().to_vector();
    let p3 = p3.to_untyped().to_vector();
    let t1 = 1.0 - t;
    let t2 = t1 * t1;
    let t3 = t1 * t1 * t1;
    (p0 * t3 + p1 * (3.0 * t2 * t) + p2 * (3.0 * t1 * t * t) + p3 * (t * t * t))
        .to_point()
        .cast_unit()
}

/// Reflects `control` through `center`.
pub fn reflect_point(control: OutlinePoint, center: OutlinePoint) -> OutlinePoint {
    center + (center - control)
}
