//! Reference plotter: paints shape rasters into an RGB image.
//!
//! Each raster pixel becomes a `width × width` square in the shape's colour,
//! the way a square-capped pen plots a point. Pixels falling outside the image
//! are dropped.

use std::path::Path;

use image::{Rgb, RgbImage, imageops};

use crate::errors::RenderError;
use crate::shape::Shape;
use crate::types::{Color, Pixel};

fn rgb(color: Color) -> Rgb<u8> {
    Rgb([color.r, color.g, color.b])
}

/// Load an image to draw underneath the shapes.
pub fn load_underlay(path: impl AsRef<Path>) -> Result<RgbImage, RenderError> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|source| RenderError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(img.to_rgb8())
}

/// An image under construction.
#[derive(Debug, Clone)]
pub struct Plotter {
    image: RgbImage,
}

impl Plotter {
    /// Blank white canvas.
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        Self::with_background(width, height, Color::WHITE)
    }

    /// Canvas filled with `background`.
    pub fn with_background(width: u32, height: u32, background: Color) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyCanvas { width, height });
        }
        Ok(Self {
            image: RgbImage::from_pixel(width, height, rgb(background)),
        })
    }

    /// Composite `underlay` centred on the canvas. Call before plotting shapes.
    pub fn underlay(&mut self, underlay: &RgbImage) -> &mut Self {
        let x = (i64::from(self.image.width()) - i64::from(underlay.width())) / 2;
        let y = (i64::from(self.image.height()) - i64::from(underlay.height())) / 2;
        imageops::overlay(&mut self.image, underlay, x, y);
        self
    }

    /// Plot one shape's raster with its style.
    pub fn plot(&mut self, shape: &Shape) -> &mut Self {
        let style = shape.style();
        let color = rgb(style.color());
        let width = style.width() as i32;
        // Square centred on the pixel; even widths lean toward the origin.
        let lo = -(width / 2);
        for &p in shape.raster() {
            for dy in lo..lo + width {
                for dx in lo..lo + width {
                    self.put(p + Pixel::new(dx, dy), color);
                }
            }
        }
        self
    }

    /// Plot every shape in order.
    pub fn plot_all<'a>(&mut self, shapes: impl IntoIterator<Item = &'a Shape>) -> &mut Self {
        for shape in shapes {
            self.plot(shape);
        }
        self
    }

    fn put(&mut self, p: Pixel, color: Rgb<u8>) {
        let (Ok(x), Ok(y)) = (u32::try_from(p.x), u32::try_from(p.y)) else {
            return;
        };
        if let Some(px) = self.image.get_pixel_mut_checked(x, y) {
            *px = color;
        }
    }

    /// The canvas so far.
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Finish plotting and take the canvas.
    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Write the canvas; the format follows the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let path = path.as_ref();
        self.image.save(path).map_err(|source| RenderError::Save {
            path: path.to_path_buf(),
            source,
        })?;
        crate::log::debug!(path = %path.display(), "saved canvas");
        Ok(())
    }
}
