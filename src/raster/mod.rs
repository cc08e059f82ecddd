//! Scan-conversion algorithms.
//!
//! Each function maps control points to the ordered pixel sequence that
//! approximates the outline. All of them are pure and run in time proportional
//! to their output, since they sit on the pointer-drag path.

mod bspline;
mod conic;
mod line;

pub use bspline::bspline;
pub use conic::{circle, ellipse};
pub use line::{polygon, segment};

use crate::shape::{Geometry, ShapeKind};
use crate::types::Pixel;

/// Rasterize `points` with the algorithm for `kind`.
pub fn rasterize(kind: ShapeKind, points: &[Pixel]) -> Vec<Pixel> {
    kind.scan_convert(points)
}

/// Render pixel sequences compactly for assertions.
#[cfg(test)]
pub(crate) fn fmt_pixels(pixels: &[Pixel]) -> String {
    pixels
        .iter()
        .map(|p| format!("({},{})", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}
