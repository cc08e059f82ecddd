//! Tunable constants shared by the algorithms and the reference plotter.

/// A query point selects a shape when some raster pixel lies strictly closer
/// than this squared distance (radius 5).
pub const HIT_RADIUS_SQ: i64 = 25;

/// Degree of the B-spline basis.
pub const BSPLINE_DEGREE: usize = 3;

/// Parameter increment between B-spline samples.
pub const BSPLINE_STEP: f64 = 0.001;

/// Stroke width of a fresh [`Style`](crate::Style).
pub const STROKE_WIDTH: u32 = 3;

/// Scale factor applied by one zoom-in gesture.
pub const ZOOM_IN: f64 = 1.1;

/// Scale factor applied by one zoom-out gesture.
pub const ZOOM_OUT: f64 = 0.9;
