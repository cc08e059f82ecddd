//! Rectangular clipping.
//!
//! Only segments are clipped. Every other kind passes its control points
//! through unchanged.
//!
//! # Outcodes
//!
//! Each endpoint is classified against the four half-planes of the rectangle:
//!
//! - Bit 0 (value 1): left of `left`
//! - Bit 1 (value 2): right of `right`
//! - Bit 2 (value 4): below `bottom` (y greater, screen coordinates)
//! - Bit 3 (value 8): above `top`
//!
//! A segment whose endpoints share a set bit lies wholly outside.

use glam::{IVec2, ivec2};

use crate::shape::{Geometry, Shape};
use crate::types::{ClipRect, Pixel};

/// Region of a point relative to a [`ClipRect`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Outcode {
    value: u8,
}

impl Outcode {
    const LEFT: u8 = 1;
    const RIGHT: u8 = 2;
    const BELOW: u8 = 4;
    const ABOVE: u8 = 8;

    fn of(p: Pixel, rect: ClipRect) -> Self {
        let mut value = 0;
        if p.y < rect.top {
            value |= Self::ABOVE;
        }
        if p.y > rect.bottom {
            value |= Self::BELOW;
        }
        if p.x > rect.right {
            value |= Self::RIGHT;
        }
        if p.x < rect.left {
            value |= Self::LEFT;
        }
        Outcode { value }
    }

    fn is_inside(self) -> bool {
        self.value == 0
    }

    fn shares_side(self, other: Outcode) -> bool {
        self.value & other.value != 0
    }

    fn has(self, bit: u8) -> bool {
        self.value & bit != 0
    }
}

/// Clip `shape`'s control points to the rectangle spanned by two corners.
pub fn clip(shape: &Shape, corner_a: Pixel, corner_b: Pixel) -> Vec<Pixel> {
    let rect = ClipRect::from_corners(corner_a, corner_b);
    shape.kind().clip(shape.control_points(), rect)
}

/// Cohen-Sutherland on a single segment.
///
/// Intersections use the integer line equation with truncating division. When
/// the segment turns out to be wholly outside, the endpoints computed so far are
/// returned as-is; callers should expect a degenerate result there.
///
/// Every intersection lies between the two current endpoints, so each pass
/// shortens the segment and the loop ends without a pass limit.
pub fn cohen_sutherland(start: Pixel, end: Pixel, rect: ClipRect) -> [Pixel; 2] {
    let (mut p1, mut p2) = (start.as_i64vec2(), end.as_i64vec2());
    let mut code1 = Outcode::of(start, rect);
    let mut code2 = Outcode::of(end, rect);

    let (l, r) = (i64::from(rect.left), i64::from(rect.right));
    let (t, b) = (i64::from(rect.top), i64::from(rect.bottom));

    while !(code1.is_inside() && code2.is_inside()) {
        if code1.shares_side(code2) {
            crate::log::debug!(?p1, ?p2, "segment outside clip rect");
            break;
        }

        let code = if code1.is_inside() { code2 } else { code1 };
        let d = p2 - p1;
        // The chosen endpoint is outside a side the other endpoint is not, so
        // the divisor on that axis is never zero.
        let hit = if code.has(Outcode::LEFT) {
            glam::i64vec2(l, p1.y + d.y * (l - p1.x) / d.x)
        } else if code.has(Outcode::RIGHT) {
            glam::i64vec2(r, p1.y + d.y * (r - p1.x) / d.x)
        } else if code.has(Outcode::BELOW) {
            glam::i64vec2(p1.x + d.x * (b - p1.y) / d.y, b)
        } else {
            glam::i64vec2(p1.x + d.x * (t - p1.y) / d.y, t)
        };

        if code == code1 {
            p1 = hit;
            code1 = Outcode::of(narrow(p1), rect);
        } else {
            p2 = hit;
            code2 = Outcode::of(narrow(p2), rect);
        }
    }

    [narrow(p1), narrow(p2)]
}

fn narrow(p: glam::I64Vec2) -> IVec2 {
    ivec2(p.x as i32, p.y as i32)
}
