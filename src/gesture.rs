//! Control points from pointer gestures.
//!
//! A drawing tool sees a press point and the current drag point; these helpers
//! turn that pair into control points for the corresponding [`ShapeKind`](crate::ShapeKind).
//! All coordinates are canvas pixels, y down.

use glam::ivec2;

use crate::types::Pixel;

pub use crate::defaults::{ZOOM_IN, ZOOM_OUT};

/// Segment from the press point to the pointer.
pub fn segment(press: Pixel, pos: Pixel) -> Vec<Pixel> {
    vec![press, pos]
}

/// Isosceles triangle inscribed in the drag box, apex on the press row.
pub fn triangle(press: Pixel, pos: Pixel) -> Vec<Pixel> {
    vec![
        pos,
        ivec2((press.x + pos.x) / 2, press.y),
        ivec2(press.x, pos.y),
    ]
}

/// Axis-aligned rectangle spanning the drag box, starting at the press corner.
pub fn rectangle(press: Pixel, pos: Pixel) -> Vec<Pixel> {
    vec![press, ivec2(press.x, pos.y), pos, ivec2(pos.x, press.y)]
}

/// Ellipse inscribed in the drag box, as `(center, offset)`.
pub fn ellipse(press: Pixel, pos: Pixel) -> Vec<Pixel> {
    vec![halve(pos + press), halve(pos - press)]
}

/// Circle inscribed in the square the drag box is shrunk to.
///
/// The longer side of the drag box is cut down to the shorter one, keeping the
/// direction of the drag.
pub fn circle(press: Pixel, pos: Pixel) -> Vec<Pixel> {
    let d = pos - press;
    let side = d.x.abs().min(d.y.abs());
    let sign = |v: i32| if v < 0 { -1 } else { 1 };
    let corner = press + ivec2(side * sign(d.x), side * sign(d.y));
    ellipse(press, corner)
}

/// Halve each component, rounding halves up.
fn halve(v: Pixel) -> Pixel {
    ivec2((v.x + 1).div_euclid(2), (v.y + 1).div_euclid(2))
}
