//! Affine transforms on control points.
//!
//! These return new control points and leave the shape alone, so a drag can
//! preview a transform from the same starting shape on every pointer move and
//! commit only on release.

use glam::ivec2;

use crate::shape::{Geometry, Shape};
use crate::types::{Angle, Pixel};

/// Shift by `delta`. Round kinds move only their centre.
pub fn translate(shape: &Shape, delta: Pixel) -> Vec<Pixel> {
    let mut points = shape.control_points().to_vec();
    if shape.kind().is_round() {
        if let Some(center) = points.first_mut() {
            *center += delta;
        }
    } else {
        for p in &mut points {
            *p += delta;
        }
    }
    points
}

/// Rotate about the shape's centre, truncating toward zero.
///
/// Round kinds are returned unchanged: their offset is axis-aligned by
/// construction, so there is nothing to rotate.
pub fn rotate(shape: &Shape, angle: impl Into<Angle>) -> Vec<Pixel> {
    let mut points = shape.control_points().to_vec();
    if shape.kind().is_round() {
        return points;
    }

    let (sin, cos) = angle.into().radians().sin_cos();
    let c = shape.center().as_dvec2();
    for p in &mut points {
        let d = (*p).as_dvec2() - c;
        let x = c.x + d.x * cos - d.y * sin;
        let y = c.y + d.x * sin + d.y * cos;
        *p = ivec2(x as i32, y as i32);
    }
    points
}

/// Scale by `factor`, rounding to the nearest pixel.
///
/// Round kinds scale their offset (the radii); other kinds scale every point
/// about the shape's centre.
pub fn scale(shape: &Shape, factor: f64) -> Vec<Pixel> {
    let mut points = shape.control_points().to_vec();
    if shape.kind().is_round() {
        if let Some(offset) = points.get_mut(1) {
            *offset = scaled(*offset, factor);
        }
    } else {
        let c = shape.center();
        for p in &mut points {
            *p = c + scaled(*p - c, factor);
        }
    }
    points
}

fn scaled(v: Pixel, factor: f64) -> Pixel {
    (v.as_dvec2() * factor).round().as_ivec2()
}
