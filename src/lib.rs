//! Scan conversion and control-point transforms for an interactive sketching surface.
//!
//! A [`Shape`] owns a kind tag, a [`Style`], its control points, and the pixel set
//! those control points rasterize to. Transforms ([`translate`], [`rotate`],
//! [`scale`]) and [`clip`] never touch the shape: they return a fresh control-point
//! vector that the caller commits with [`Shape::set_control_points`] whenever it
//! wants the raster refreshed (e.g. on pointer release rather than every drag).
//!
//! ```
//! use glam::ivec2;
//! use pixsketch::{Shape, ShapeKind, Style, translate};
//!
//! let mut seg = Shape::new(ShapeKind::SEGMENT, vec![ivec2(0, 0), ivec2(3, 1)], Style::default());
//! assert_eq!(seg.raster(), &[ivec2(0, 0), ivec2(1, 0), ivec2(2, 1)]);
//!
//! let moved = translate(&seg, ivec2(10, 0));
//! seg.set_control_points(moved);
//! assert_eq!(seg.raster()[0], ivec2(10, 0));
//! ```

pub mod clip;
pub mod defaults;
pub mod errors;
pub mod gesture;
pub mod log;
pub mod raster;
pub mod render;
pub mod scene;
pub mod shape;
pub mod transform;
pub mod types;

pub use clip::clip;
pub use errors::{RenderError, SceneError, ShapeError};
pub use raster::rasterize;
pub use render::Plotter;
pub use scene::Scene;
pub use shape::{BSplineCurve, Circle, Ellipse, Geometry, Polygon, Segment, Shape, ShapeKind};
pub use transform::{rotate, scale, translate};
pub use types::{Angle, ClipRect, Color, Pixel, Style};

/// Create a shape and rasterize its initial control points.
pub fn create_shape(kind: ShapeKind, points: Vec<Pixel>, style: Style) -> Shape {
    Shape::new(kind, points, style)
}
