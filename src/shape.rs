//! Shape kinds and the [`Shape`] entity.
//!
//! Each kind is a unit type implementing [`Geometry`]; [`ShapeKind`] closes over
//! them and dispatches statically, so adding a kind means adding a variant and
//! letting the compiler point at every match that needs it.

use enum_dispatch::enum_dispatch;
use glam::IVec2;

use crate::clip::cohen_sutherland;
use crate::defaults::HIT_RADIUS_SQ;
use crate::errors::ShapeError;
use crate::raster;
use crate::types::{ClipRect, Pixel, Style};

/// Per-kind behaviour
#[enum_dispatch]
pub trait Geometry {
    /// Human-readable kind name
    fn name(&self) -> &'static str;

    /// Number of control points this kind requires, if fixed
    fn arity(&self) -> Option<usize> {
        None
    }

    /// Whether control points are `(center, offset)` rather than positions.
    /// Round kinds ignore rotation and scale their offset instead of their points.
    fn is_round(&self) -> bool {
        false
    }

    /// Map control points to raster pixels
    fn scan_convert(&self, points: &[Pixel]) -> Vec<Pixel>;

    /// Control points after clipping to `rect`. Identity unless overridden.
    fn clip(&self, points: &[Pixel], _rect: ClipRect) -> Vec<Pixel> {
        points.to_vec()
    }
}

/// Straight segment `(start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment;

/// Closed polygon through its vertices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Polygon;

/// Circle `(center, offset)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Circle;

/// Axis-aligned ellipse `(center, offset)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ellipse;

/// Uniform cubic B-spline over its control points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BSplineCurve;

// Fixed-arity kinds read missing slots as the origin, so a caller that breaks
// the arity contract gets a degenerate raster instead of a panic.
fn slot(points: &[Pixel], i: usize) -> Pixel {
    points.get(i).copied().unwrap_or(IVec2::ZERO)
}

impl Geometry for Segment {
    fn name(&self) -> &'static str {
        "segment"
    }

    fn arity(&self) -> Option<usize> {
        Some(2)
    }

    fn scan_convert(&self, points: &[Pixel]) -> Vec<Pixel> {
        raster::segment(slot(points, 0), slot(points, 1))
    }

    fn clip(&self, points: &[Pixel], rect: ClipRect) -> Vec<Pixel> {
        cohen_sutherland(slot(points, 0), slot(points, 1), rect).to_vec()
    }
}

impl Geometry for Polygon {
    fn name(&self) -> &'static str {
        "polygon"
    }

    fn scan_convert(&self, points: &[Pixel]) -> Vec<Pixel> {
        raster::polygon(points)
    }
}

impl Geometry for Circle {
    fn name(&self) -> &'static str {
        "circle"
    }

    fn arity(&self) -> Option<usize> {
        Some(2)
    }

    fn is_round(&self) -> bool {
        true
    }

    fn scan_convert(&self, points: &[Pixel]) -> Vec<Pixel> {
        raster::circle(slot(points, 0), slot(points, 1))
    }
}

impl Geometry for Ellipse {
    fn name(&self) -> &'static str {
        "ellipse"
    }

    fn arity(&self) -> Option<usize> {
        Some(2)
    }

    fn is_round(&self) -> bool {
        true
    }

    fn scan_convert(&self, points: &[Pixel]) -> Vec<Pixel> {
        raster::ellipse(slot(points, 0), slot(points, 1))
    }
}

impl Geometry for BSplineCurve {
    fn name(&self) -> &'static str {
        "bspline"
    }

    fn scan_convert(&self, points: &[Pixel]) -> Vec<Pixel> {
        raster::bspline(points)
    }
}

/// The closed set of shape kinds
#[enum_dispatch(Geometry)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Segment(Segment),
    Polygon(Polygon),
    Circle(Circle),
    Ellipse(Ellipse),
    BSplineCurve(BSplineCurve),
}

impl ShapeKind {
    pub const SEGMENT: ShapeKind = ShapeKind::Segment(Segment);
    pub const POLYGON: ShapeKind = ShapeKind::Polygon(Polygon);
    pub const CIRCLE: ShapeKind = ShapeKind::Circle(Circle);
    pub const ELLIPSE: ShapeKind = ShapeKind::Ellipse(Ellipse);
    pub const BSPLINE: ShapeKind = ShapeKind::BSplineCurve(BSplineCurve);

    /// Validate `points` against this kind's fixed arity.
    pub fn check_arity(&self, points: &[Pixel]) -> Result<(), ShapeError> {
        match self.arity() {
            Some(expected) if expected != points.len() => Err(ShapeError::Arity {
                kind: self.name(),
                expected,
                got: points.len(),
            }),
            _ => Ok(()),
        }
    }
}

/// A drawable shape with its rasterization kept in sync.
///
/// `center` and `raster` are recomputed eagerly on every control-point update
/// and never written otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    kind: ShapeKind,
    style: Style,
    points: Vec<Pixel>,
    center: Pixel,
    raster: Vec<Pixel>,
}

impl Shape {
    /// Create a shape and rasterize `points` right away.
    pub fn new(kind: ShapeKind, points: Vec<Pixel>, style: Style) -> Self {
        let mut shape = Shape {
            kind,
            style,
            points: Vec::new(),
            center: IVec2::ZERO,
            raster: Vec::new(),
        };
        shape.set_control_points(points);
        shape
    }

    /// Like [`Shape::new`], but rejects control points of the wrong arity.
    pub fn try_new(kind: ShapeKind, points: Vec<Pixel>, style: Style) -> Result<Self, ShapeError> {
        kind.check_arity(&points)?;
        Ok(Self::new(kind, points, style))
    }

    /// Replace the control points, then refresh the centre and raster.
    ///
    /// An empty point list leaves the previous centre in place.
    pub fn set_control_points(&mut self, points: Vec<Pixel>) {
        if let Some(center) = centroid(&points) {
            self.center = center;
        }
        self.raster = raster::rasterize(self.kind, &points);
        self.points = points;
        crate::log::debug!(
            kind = self.kind.name(),
            points = self.points.len(),
            pixels = self.raster.len(),
            "re-rasterized shape"
        );
    }

    /// Kind fixed at creation.
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Display style.
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Mutable display style; does not affect the raster.
    pub fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    /// Current control points.
    pub fn control_points(&self) -> &[Pixel] {
        &self.points
    }

    /// Truncated centroid of the control points.
    pub fn center(&self) -> Pixel {
        self.center
    }

    /// Pixels rasterized from the current control points.
    pub fn raster(&self) -> &[Pixel] {
        &self.raster
    }

    /// Whether `query` lies within the hit radius of any raster pixel.
    pub fn hit_test(&self, query: Pixel) -> bool {
        self.raster.iter().any(|p| {
            let d = (*p - query).as_i64vec2();
            d.length_squared() < HIT_RADIUS_SQ
        })
    }
}

/// Component-wise sum divided by the count, truncating toward zero.
fn centroid(points: &[Pixel]) -> Option<Pixel> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(glam::I64Vec2::ZERO, |acc, p| acc + p.as_i64vec2());
    let avg = sum / points.len() as i64;
    Some(avg.as_ivec2())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::ivec2;

    #[test]
    fn centroid_truncates_toward_zero() {
        let shape = Shape::new(
            ShapeKind::POLYGON,
            vec![ivec2(0, 0), ivec2(0, 3), ivec2(4, 3), ivec2(5, 0)],
            Style::default(),
        );
        // (9 / 4, 6 / 4)
        assert_eq!(shape.center(), ivec2(2, 1));

        let negative = Shape::new(ShapeKind::SEGMENT, vec![ivec2(-3, 0), ivec2(0, -1)], Style::default());
        assert_eq!(negative.center(), ivec2(-1, 0));
    }

    #[test]
    fn empty_points_keep_previous_center() {
        let mut curve = Shape::new(
            ShapeKind::BSPLINE,
            vec![ivec2(10, 10), ivec2(20, 10)],
            Style::default(),
        );
        assert_eq!(curve.center(), ivec2(15, 10));
        curve.set_control_points(Vec::new());
        assert_eq!(curve.center(), ivec2(15, 10));
        assert!(curve.raster().is_empty());
        assert!(curve.control_points().is_empty());
    }

    #[test]
    fn raster_follows_control_points() {
        let mut seg = Shape::new(ShapeKind::SEGMENT, vec![ivec2(0, 0), ivec2(0, 0)], Style::default());
        assert!(seg.raster().is_empty());
        seg.set_control_points(vec![ivec2(0, 0), ivec2(3, 0)]);
        assert_eq!(seg.raster(), &[ivec2(0, 0), ivec2(1, 0), ivec2(2, 0)]);
        assert_eq!(seg.raster(), raster::rasterize(ShapeKind::SEGMENT, seg.control_points()).as_slice());
    }

    #[test]
    fn hit_radius_is_strict() {
        let seg = Shape::new(ShapeKind::SEGMENT, vec![ivec2(0, 0), ivec2(1, 0)], Style::default());
        assert!(seg.hit_test(ivec2(0, 4)));
        assert!(seg.hit_test(ivec2(3, 3)));
        assert!(!seg.hit_test(ivec2(0, 5)));
        assert!(!seg.hit_test(ivec2(-4, 3)));
    }

    #[test]
    fn kinds_report_roundness_and_arity() {
        assert!(ShapeKind::CIRCLE.is_round());
        assert!(ShapeKind::ELLIPSE.is_round());
        assert!(!ShapeKind::SEGMENT.is_round());
        assert!(!ShapeKind::POLYGON.is_round());
        assert!(!ShapeKind::BSPLINE.is_round());

        assert_eq!(ShapeKind::SEGMENT.arity(), Some(2));
        assert_eq!(ShapeKind::POLYGON.arity(), None);
        assert_eq!(ShapeKind::BSPLINE.name(), "bspline");
    }

    #[test]
    fn try_new_rejects_wrong_arity() {
        let err = Shape::try_new(ShapeKind::CIRCLE, vec![ivec2(1, 1)], Style::default()).unwrap_err();
        assert_eq!(
            err,
            ShapeError::Arity {
                kind: "circle",
                expected: 2,
                got: 1
            }
        );
        assert_eq!(err.to_string(), "circle takes exactly 2 control points, got 1");

        assert!(Shape::try_new(ShapeKind::POLYGON, Vec::new(), Style::default()).is_ok());
    }

    #[test]
    fn short_round_shape_does_not_panic() {
        let circle = Shape::new(ShapeKind::CIRCLE, vec![ivec2(5, 5)], Style::default());
        assert!(circle.raster().iter().all(|&p| p == ivec2(5, 5)));
    }
}
