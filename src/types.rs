//! Value types shared across the engine.
//!
//! Control points and raster pixels share one representation, [`Pixel`]: both
//! live on the same integer lattice so transforms can feed straight back into
//! scan conversion.

use std::fmt;

use glam::{DVec2, IVec2};

use crate::defaults;

/// An integer lattice point (control point or raster pixel).
pub type Pixel = IVec2;

/// Opaque RGB colour carried for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Colour from its 8-bit channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Display colour and stroke width. No algorithm looks at this.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Style {
    color: Color,
    width: u32,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            color: Color::BLACK,
            width: defaults::STROKE_WIDTH,
        }
    }
}

impl Style {
    /// Width is clamped to at least one pixel.
    pub fn new(color: Color, width: u32) -> Self {
        Style {
            color,
            width: width.max(1),
        }
    }

    /// Stroke colour.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Stroke width in pixels, at least one.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grow the stroke by one pixel.
    pub fn widen(&mut self) {
        self.width = self.width.saturating_add(1);
    }

    /// Shrink the stroke by one pixel, never below one.
    pub fn narrow(&mut self) {
        if self.width > 1 {
            self.width -= 1;
        }
    }
}

/// Axis-aligned clip rectangle with inclusive bounds.
///
/// Screen convention: `top <= bottom`, y grows downward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClipRect {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl ClipRect {
    /// Normalise two arbitrary opposite corners.
    pub fn from_corners(a: Pixel, b: Pixel) -> Self {
        ClipRect {
            left: a.x.min(b.x),
            right: a.x.max(b.x),
            top: a.y.min(b.y),
            bottom: a.y.max(b.y),
        }
    }

    /// Whether `p` lies inside or on the border.
    pub fn contains(&self, p: Pixel) -> bool {
        (self.left..=self.right).contains(&p.x) && (self.top..=self.bottom).contains(&p.y)
    }
}

/// Signed rotation angle in radians.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Angle(pub f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    /// Angle swept from `center→from` to `center→to`, via the normalised cross
    /// product. The result lies in `[-π/2, π/2]`; a zero-length arm gives zero.
    pub fn between(center: Pixel, from: Pixel, to: Pixel) -> Self {
        let a: DVec2 = (from - center).as_dvec2();
        let b: DVec2 = (to - center).as_dvec2();
        let norms = a.length() * b.length();
        if norms == 0.0 {
            return Angle::ZERO;
        }
        // Rounding can push the ratio a hair past ±1.
        Angle((a.perp_dot(b) / norms).clamp(-1.0, 1.0).asin())
    }

    /// Raw value in radians.
    #[inline]
    pub fn radians(self) -> f64 {
        self.0
    }
}

impl From<f64> for Angle {
    fn from(radians: f64) -> Self {
        Angle(radians)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}rad", self.0)
    }
}
