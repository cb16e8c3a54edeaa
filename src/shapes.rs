//! Ready made outlines, approximated with cubic Bézier curves.

use crate::geometry_utilities::types::*;
use crate::path::Path;
use lyon::math::{point, vector, Angle, Point, Vector};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BorderRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_left: f32,
    pub bottom_right: f32,
}

impl BorderRadii {
    pub fn new_uniform(radius: f32) -> BorderRadii {
        BorderRadii {
            top_left: radius,
            top_right: radius,
            bottom_left: radius,
            bottom_right: radius,
        }
    }
}

/// Emits the cubic approximation of `arc`, starting a new sub path if `path` has none yet.
fn add_arc(path: &mut Path, arc: &lyon::geom::Arc<f32>, start_sub_path: bool) {
    if start_sub_path {
        path.move_to(arc.from().cast_unit());
    } else {
        path.line_to(arc.from().cast_unit());
    }
    arc.for_each_cubic_bezier(&mut |bezier| {
        path.cubic_bezier_to(bezier.ctrl1.cast_unit(), bezier.ctrl2.cast_unit(), bezier.to.cast_unit());
    });
}

/// Circle around `center`, made of four quarter arcs.
pub fn circle(center: OutlinePoint, radius: f32) -> Path {
    let mut path = Path::new();
    add_arc(&mut path, &lyon::geom::Arc::circle(center.to_untyped(), radius), true);
    path.close();
    path
}

/// Ellipse inscribed in the rectangle from the origin to `(width, height)`.
pub fn ellipse(width: f32, height: f32) -> Path {
    let arc = lyon::geom::Arc {
        center: point(width * 0.5, height * 0.5),
        radii: vector(width * 0.5, height * 0.5),
        start_angle: Angle::zero(),
        sweep_angle: Angle::two_pi(),
        x_rotation: Angle::zero(),
    };
    let mut path = Path::new();
    add_arc(&mut path, &arc, true);
    path.close();
    path
}

/// Rectangle with rounded corners.
///
/// Radii are clamped so neighbouring corners never overlap. A corner with a zero radius
/// is sharp.
pub fn rounded_rect(rect: &OutlineRect, mut radii: BorderRadii) -> Path {
    fn clamp(r1: &mut f32, r2: &mut f32, max: f32) {
        if *r1 + *r2 > max {
            let delta = (*r1 + *r2 - max) * 0.5;
            *r1 -= delta;
            *r2 -= delta;
        }
    }

    let min_wh = rect.width().min(rect.height());
    radii.bottom_left = radii.bottom_left.max(0.0).min(min_wh);
    radii.bottom_right = radii.bottom_right.max(0.0).min(min_wh);
    radii.top_left = radii.top_left.max(0.0).min(min_wh);
    radii.top_right = radii.top_right.max(0.0).min(min_wh);

    clamp(&mut radii.bottom_left, &mut radii.bottom_right, rect.width());
    clamp(&mut radii.top_left, &mut radii.top_right, rect.width());
    clamp(&mut radii.top_left, &mut radii.bottom_left, rect.height());
    clamp(&mut radii.top_right, &mut radii.bottom_right, rect.height());

    fn corner_arc(corner: Point, radius: f32, start_angle: Angle, offset: Vector) -> lyon::geom::Arc<f32> {
        lyon::geom::Arc {
            center: corner + offset * radius,
            radii: vector(radius, radius),
            start_angle,
            sweep_angle: Angle::frac_pi_2(),
            x_rotation: Angle::zero(),
        }
    }

    let rect = rect.to_untyped();
    let corners = [
        (point(rect.min_x(), rect.min_y()), radii.top_left, Angle::degrees(180.0), vector(1.0, 1.0)),
        (point(rect.max_x(), rect.min_y()), radii.top_right, Angle::degrees(270.0), vector(-1.0, 1.0)),
        (point(rect.max_x(), rect.max_y()), radii.bottom_right, Angle::degrees(0.0), vector(-1.0, -1.0)),
        (point(rect.min_x(), rect.max_y()), radii.bottom_left, Angle::degrees(90.0), vector(1.0, -1.0)),
    ];

    let mut path = Path::new();
    for (i, &(corner, radius, start_angle, offset)) in corners.iter().enumerate() {
        if radius > 0.0 {
            add_arc(&mut path, &corner_arc(corner, radius, start_angle, offset), i == 0);
        } else if i == 0 {
            path.move_to(corner.cast_unit());
        } else {
            path.line_to(corner.cast_unit());
        }
    }
    path.close();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::Curve;
    use euclid::{point2, size2};

    fn assert_close(a: OutlinePoint, b: OutlinePoint) {
        assert!((a - b).length() < 1e-3, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_circle() {
        let path = circle(point2(5.0, 5.0), 2.0);
        let curves: Vec<Curve> = path.iter_curves().collect();
        // Four quarter arcs plus the closing line
        assert_eq!(curves.iter().filter(|c| c.degree() == 3).count(), 4);
        for curve in &curves {
            for i in 0..=8 {
                let p = curve.point_at(i as f32 / 8.0);
                let distance = (p - point2(5.0, 5.0)).length();
                assert!((distance - 2.0).abs() < 0.01, "{:?} is {} from the center", p, distance);
            }
        }
        let last = curves[curves.len() - 1];
        assert_close(last.start(), last.end());
    }

    #[test]
    fn test_ellipse_bounds() {
        let path = ellipse(20.0, 10.0);
        for curve in path.iter_curves() {
            for i in 0..=8 {
                let p = curve.point_at(i as f32 / 8.0);
                assert!(p.x >= -1e-3 && p.x <= 20.001 && p.y >= -1e-3 && p.y <= 10.001, "{:?}", p);
            }
        }
        assert_close(path.endpoints()[0], point2(20.0, 5.0));
    }

    #[test]
    fn test_sharp_rect() {
        let rect = OutlineRect::new(point2(0.0, 0.0), size2(10.0, 5.0));
        let path = rounded_rect(&rect, BorderRadii::new_uniform(0.0));
        assert_eq!(
            path.points(),
            vec![point2(0.0, 0.0), point2(10.0, 0.0), point2(10.0, 5.0), point2(0.0, 5.0)]
        );
        assert_eq!(path.iter_curves().count(), 4);
    }

    #[test]
    fn test_rounded_rect_radii_are_clamped() {
        let rect = OutlineRect::new(point2(0.0, 0.0), size2(10.0, 4.0));
        let path = rounded_rect(&rect, BorderRadii::new_uniform(100.0));
        for p in path.points() {
            assert!(p.x >= -1e-3 && p.x <= 10.001 && p.y >= -1e-3 && p.y <= 4.001, "{:?}", p);
        }
        // Consecutive curves stay connected
        let curves: Vec<Curve> = path.iter_curves().collect();
        for pair in curves.windows(2) {
            assert_eq!(pair[0].end(), pair[1].start());
        }
    }
}
