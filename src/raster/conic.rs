//! Midpoint circle and ellipse.
//!
//! Both take `(center, offset)`, where the offset is a vector from the centre
//! whose components encode the radii.

use glam::{IVec2, Vec2Swizzles, ivec2};

use crate::types::Pixel;

fn push_octants(pixels: &mut Vec<Pixel>, c: Pixel, x: i32, y: i32) {
    pixels.extend([
        ivec2(c.x + x, c.y + y),
        ivec2(c.x - x, c.y + y),
        ivec2(c.x - x, c.y - y),
        ivec2(c.x + x, c.y - y),
        ivec2(c.x + y, c.y + x),
        ivec2(c.x - y, c.y + x),
        ivec2(c.x - y, c.y - x),
        ivec2(c.x + y, c.y - x),
    ]);
}

fn push_quadrants(pixels: &mut Vec<Pixel>, c: Pixel, x: i32, y: i32) {
    pixels.extend([
        ivec2(c.x + x, c.y + y),
        ivec2(c.x - x, c.y + y),
        ivec2(c.x - x, c.y - y),
        ivec2(c.x + x, c.y - y),
    ]);
}

/// Midpoint circle with radius `min(|offset.x|, |offset.y|)`.
///
/// No clamping: a zero radius emits the centre for every octant.
pub fn circle(center: Pixel, offset: Pixel) -> Vec<Pixel> {
    let r = offset.x.abs().min(offset.y.abs());
    let mut pixels = Vec::new();

    let (mut x, mut y) = (0, r);
    let mut p = 1 - r;
    push_octants(&mut pixels, center, x, y);
    while x < y {
        if p < 0 {
            p += 2 * x + 3;
        } else {
            y -= 1;
            p += 2 * (x - y) + 5;
        }
        x += 1;
        push_octants(&mut pixels, center, x, y);
    }
    pixels
}

/// Two-region midpoint ellipse with radii `max(|offset.x|, 1)` and
/// `max(|offset.y|, 1)`.
///
/// Tall ellipses are drawn as their transpose and swapped back, so the
/// stepping below always has `rx >= ry`.
pub fn ellipse(center: Pixel, offset: Pixel) -> Vec<Pixel> {
    let rx = offset.x.abs().max(1);
    let ry = offset.y.abs().max(1);
    if rx < ry {
        let mut pixels = ellipse(center.yx(), offset.yx());
        for p in &mut pixels {
            *p = p.yx();
        }
        return pixels;
    }
    wide_ellipse(center, i64::from(rx), i64::from(ry))
}

fn wide_ellipse(center: IVec2, rx: i64, ry: i64) -> Vec<Pixel> {
    let rx2 = rx * rx;
    let ry2 = ry * ry;
    let mut pixels = Vec::new();
    let emit = |pixels: &mut Vec<Pixel>, x: i64, y: i64| {
        push_quadrants(pixels, center, x as i32, y as i32);
    };

    // Region 1: |slope| < 1, step x.
    let (mut x, mut y) = (0i64, ry);
    let mut p = ry2 - rx2 * ry + rx2;
    emit(&mut pixels, x, y);
    while ry2 * x <= rx2 * y {
        if p < 0 {
            p += ry2 * (3 + 2 * x);
        } else {
            p += ry2 * (3 + 2 * x) + rx2 * (2 - 2 * y);
            y -= 1;
        }
        x += 1;
        emit(&mut pixels, x, y);
    }

    // Region 2: |slope| >= 1, step y down past the axis.
    let (fx, fy) = (x as f64 + 0.5, y as f64 - 1.0);
    let mut p = (ry2 as f64 * fx * fx + rx2 as f64 * fy * fy - (rx2 * ry2) as f64) as i64;
    while y >= 0 {
        if p < 0 {
            p += ry2 * (2 + 2 * x) + rx2 * (3 - 2 * y);
            x += 1;
        } else {
            p += rx2 * (3 - 2 * y);
        }
        y -= 1;
        emit(&mut pixels, x, y);
    }
    pixels
}
