use glam::ivec2;

use crate::types::Pixel;

/// Bresenham line from `start` toward `end`.
///
/// The terminal endpoint is never emitted, so coincident endpoints produce
/// nothing. Polygon edges rely on this: each vertex is emitted once, as the
/// start of the edge leaving it.
pub fn segment(start: Pixel, end: Pixel) -> Vec<Pixel> {
    let (mut x, mut y) = (start.x, start.y);
    let dx = (end.x - x).abs();
    let dy = (end.y - y).abs();
    let sx = if x < end.x { 1 } else { -1 };
    let sy = if y < end.y { 1 } else { -1 };
    let mut err = (if dx > dy { dx } else { -dy }) / 2;

    let mut pixels = Vec::with_capacity(dx.max(dy) as usize);
    while x != end.x || y != end.y {
        pixels.push(ivec2(x, y));
        let e = err;
        if e > -dx {
            err -= dy;
            x += sx;
        }
        if e < dy {
            err += dx;
            y += sy;
        }
    }
    pixels
}

/// Closed outline through `vertices`, edges concatenated in order.
pub fn polygon(vertices: &[Pixel]) -> Vec<Pixel> {
    let n = vertices.len();
    let mut pixels = Vec::new();
    for i in 0..n {
        pixels.extend(segment(vertices[i], vertices[(i + 1) % n]));
    }
    pixels
}
