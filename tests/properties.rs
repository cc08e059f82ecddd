//! Behavioural properties of the rasterizers and transforms, checked over
//! small hand-picked families of inputs.

use std::collections::HashSet;

use glam::{IVec2, ivec2};
use pixsketch::{Angle, Shape, ShapeKind, Style, clip, rasterize, rotate, scale, translate};

fn set(pixels: &[IVec2]) -> HashSet<IVec2> {
    pixels.iter().copied().collect()
}

fn shape(kind: ShapeKind, points: &[IVec2]) -> Shape {
    Shape::new(kind, points.to_vec(), Style::default())
}

fn endpoints() -> Vec<(IVec2, IVec2)> {
    let coords = [-7, -2, 0, 3, 11];
    let mut pairs = Vec::new();
    for &x0 in &coords {
        for &y0 in &coords {
            for &x1 in &coords {
                for &y1 in &coords {
                    pairs.push((ivec2(x0, y0), ivec2(x1, y1)));
                }
            }
        }
    }
    pairs
}

#[test]
fn segment_never_contains_its_end() {
    for (p0, p1) in endpoints() {
        let pixels = rasterize(ShapeKind::SEGMENT, &[p0, p1]);
        if p0 == p1 {
            assert!(pixels.is_empty());
        } else {
            assert_eq!(pixels.first(), Some(&p0));
            assert!(!pixels.contains(&p1), "{p0} -> {p1} emitted its end");
        }
    }
}

#[test]
fn segment_reversal_covers_the_same_number_of_pixels() {
    // Tie-breaking differs by direction, so only the closed pixel counts agree.
    for (p0, p1) in endpoints() {
        if p0 == p1 {
            continue;
        }
        let mut forward = set(&rasterize(ShapeKind::SEGMENT, &[p0, p1]));
        forward.insert(p1);
        let mut backward = set(&rasterize(ShapeKind::SEGMENT, &[p1, p0]));
        backward.insert(p0);
        assert_eq!(forward.len(), backward.len(), "{p0} <-> {p1}");
    }
}

#[test]
fn convex_polygons_start_an_edge_at_every_vertex() {
    let polygons: [&[IVec2]; 3] = [
        &[ivec2(0, 0), ivec2(10, 0), ivec2(5, 8)],
        &[ivec2(0, 0), ivec2(0, 6), ivec2(9, 6), ivec2(9, 0)],
        &[ivec2(3, 0), ivec2(9, 2), ivec2(11, 8), ivec2(4, 12), ivec2(-1, 6)],
    ];
    for vertices in polygons {
        let pixels = rasterize(ShapeKind::POLYGON, vertices);
        let mut offset = 0;
        for (i, &v) in vertices.iter().enumerate() {
            let next = vertices[(i + 1) % vertices.len()];
            let edge = rasterize(ShapeKind::SEGMENT, &[v, next]);
            assert_eq!(pixels[offset], v);
            assert_eq!(&pixels[offset..offset + edge.len()], edge.as_slice());
            offset += edge.len();
        }
        assert_eq!(offset, pixels.len());
    }
}

#[test]
fn circle_radius_five_is_eightfold_symmetric() {
    let pixels = set(&rasterize(ShapeKind::CIRCLE, &[ivec2(0, 0), ivec2(5, 0)]));
    // min(|5|, |0|) is zero: the offset must carry both radii.
    assert_eq!(pixels, set(&[ivec2(0, 0)]));

    let pixels = set(&rasterize(ShapeKind::CIRCLE, &[ivec2(0, 0), ivec2(5, 5)]));
    for p in &pixels {
        let d2 = p.length_squared();
        assert!((16..36).contains(&d2), "{p} at squared distance {d2}");
        for q in [ivec2(-p.x, p.y), ivec2(p.x, -p.y), ivec2(p.y, p.x), ivec2(-p.y, -p.x)] {
            assert!(pixels.contains(&q), "{p} lacks mirror {q}");
        }
    }
    assert!(pixels.iter().filter(|p| p.length_squared() == 25).count() >= 4);
}

#[test]
fn tall_ellipse_matches_swapped_wide_ellipse() {
    for (rx, ry) in [(2, 9), (1, 4), (5, 6), (3, 30)] {
        let center = ivec2(7, -3);
        let tall = set(&rasterize(ShapeKind::ELLIPSE, &[center, ivec2(rx, ry)]));
        let wide: HashSet<IVec2> = rasterize(ShapeKind::ELLIPSE, &[ivec2(-3, 7), ivec2(ry, rx)])
            .into_iter()
            .map(|p| ivec2(p.y, p.x))
            .collect();
        assert_eq!(tall, wide, "rx={rx} ry={ry}");
    }
}

#[test]
fn collinear_bspline_is_collinear() {
    let control = [ivec2(0, 0), ivec2(40, 20), ivec2(80, 40), ivec2(120, 60)];
    let pixels = rasterize(ShapeKind::BSPLINE, &control);
    assert!(!pixels.is_empty());
    for p in pixels {
        // Truncation of x = 2t, y = t can lose at most a pixel on each axis.
        assert!((p.x - 2 * p.y).abs() <= 2, "{p} strays from y = x / 2");
    }
}

#[test]
fn translation_commutes_with_rasterization() {
    let delta = ivec2(13, -6);
    let cases: [(ShapeKind, &[IVec2]); 3] = [
        (ShapeKind::SEGMENT, &[ivec2(-4, 2), ivec2(9, 7)]),
        (ShapeKind::POLYGON, &[ivec2(0, 0), ivec2(8, 1), ivec2(3, 9)]),
        (ShapeKind::POLYGON, &[ivec2(0, 0), ivec2(0, 5), ivec2(5, 5), ivec2(5, 0)]),
    ];
    for (kind, points) in cases {
        let original = shape(kind, points);
        let moved = shape(kind, &translate(&original, delta));
        let shifted: Vec<IVec2> = original.raster().iter().map(|&p| p + delta).collect();
        assert_eq!(moved.raster(), shifted.as_slice());
    }
}

#[test]
fn unit_scale_and_zero_rotation_are_identity() {
    let cases: [(ShapeKind, &[IVec2]); 5] = [
        (ShapeKind::SEGMENT, &[ivec2(-4, 2), ivec2(9, 7)]),
        (ShapeKind::POLYGON, &[ivec2(0, 0), ivec2(8, 1), ivec2(3, 9)]),
        (ShapeKind::CIRCLE, &[ivec2(10, 10), ivec2(4, 4)]),
        (ShapeKind::ELLIPSE, &[ivec2(10, 10), ivec2(-6, 2)]),
        (ShapeKind::BSPLINE, &[ivec2(0, 0), ivec2(5, 9), ivec2(12, 3), ivec2(20, 20)]),
    ];
    for (kind, points) in cases {
        let s = shape(kind, points);
        assert_eq!(scale(&s, 1.0), points, "{kind:?}");
        assert_eq!(rotate(&s, Angle::ZERO), points, "{kind:?}");
    }
}

#[test]
fn clipping_diagonal_lands_in_the_box() {
    let seg = shape(ShapeKind::SEGMENT, &[ivec2(-10, -10), ivec2(10, 10)]);
    let clipped = clip(&seg, ivec2(0, 0), ivec2(5, 5));
    assert_eq!(clipped.len(), 2);
    for p in clipped {
        assert!((0..=5).contains(&p.x) && (0..=5).contains(&p.y), "{p}");
    }
}

#[test]
fn hit_test_near_and_far() {
    let small = shape(ShapeKind::CIRCLE, &[ivec2(50, 50), ivec2(5, 5)]);
    // Every pixel is about 5 away from the centre; none strictly inside.
    let inside = small.raster().iter().any(|p| (*p - ivec2(50, 50)).length_squared() < 25);
    assert_eq!(small.hit_test(ivec2(50, 50)), inside);

    let big = shape(ShapeKind::CIRCLE, &[ivec2(50, 50), ivec2(30, 30)]);
    assert!(!big.hit_test(ivec2(50, 50)));
    assert!(big.hit_test(ivec2(80, 50)));
    assert!(big.hit_test(ivec2(50, 22)));
    assert!(!big.hit_test(ivec2(300, 300)));
}
