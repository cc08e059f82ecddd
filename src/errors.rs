//! Error types with diagnostics using miette
//!
//! Geometry never fails: degenerate input is handled by policy inside the
//! algorithms. These cover the edges where a collaborator asks for validation
//! or touches the filesystem.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Shape Errors
// ============================================================================

/// Control points that do not fit the shape kind
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("{kind} takes exactly {expected} control points, got {got}")]
    #[diagnostic(
        code(pixsketch::shape::arity),
        help("segments take (start, end); circles and ellipses take (center, offset)")
    )]
    Arity {
        kind: &'static str,
        expected: usize,
        got: usize,
    },
}

// ============================================================================
// Scene Errors
// ============================================================================

/// Errors from editing a [`Scene`](crate::Scene)
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    #[error("no shape at index {index}")]
    #[diagnostic(
        code(pixsketch::scene::no_such_shape),
        help("the scene holds {len} shapes")
    )]
    NoSuchShape { index: usize, len: usize },
}

// ============================================================================
// Render Errors
// ============================================================================

/// Errors from loading or saving raster images
#[derive(Error, Diagnostic, Debug)]
pub enum RenderError {
    #[error("failed to load underlay {path}")]
    #[diagnostic(code(pixsketch::render::load))]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to save image to {path}")]
    #[diagnostic(
        code(pixsketch::render::save),
        help("the format is chosen from the extension: png, bmp, jpg")
    )]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("canvas has zero area ({width}x{height})")]
    #[diagnostic(code(pixsketch::render::empty_canvas))]
    EmptyCanvas { width: u32, height: u32 },
}
