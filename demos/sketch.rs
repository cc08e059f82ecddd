//! Replays a short drawing session and writes the canvas to an image.
//!
//! Run with: RUST_LOG=info cargo run --example sketch --features tracing -- out.png

use glam::ivec2;
use pixsketch::gesture::{self, ZOOM_IN};
use pixsketch::{Angle, Color, Plotter, Scene, Shape, ShapeKind, Style, rotate, scale, translate};
use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let out = std::env::args().nth(1).unwrap_or_else(|| "sketch.png".to_string());
    let mut scene = Scene::new();
    let blue = Style::new(Color::rgb(30, 60, 200), 2);

    scene.push(Shape::new(
        ShapeKind::POLYGON,
        gesture::rectangle(ivec2(40, 40), ivec2(200, 140)),
        Style::default(),
    ));
    scene.push(Shape::new(
        ShapeKind::POLYGON,
        gesture::triangle(ivec2(260, 40), ivec2(380, 160)),
        blue,
    ));
    scene.push(Shape::new(
        ShapeKind::CIRCLE,
        gesture::circle(ivec2(60, 200), ivec2(160, 330)),
        blue,
    ));
    scene.push(Shape::new(
        ShapeKind::ELLIPSE,
        gesture::ellipse(ivec2(220, 220), ivec2(380, 300)),
        Style::default(),
    ));
    scene.push(Shape::new(
        ShapeKind::BSPLINE,
        vec![ivec2(20, 380), ivec2(120, 300), ivec2(220, 460), ivec2(320, 340), ivec2(400, 420)],
        Style::new(Color::rgb(200, 40, 40), 3),
    ));
    scene.push(Shape::new(
        ShapeKind::SEGMENT,
        gesture::segment(ivec2(0, 250), ivec2(420, 180)),
        Style::new(Color::BLACK, 1),
    ));

    // Drag the triangle, then twist it by the angle between press and release.
    if let Some(idx) = scene.pick(ivec2(380, 160)) {
        if let Some(tri) = scene.get_mut(idx) {
            let moved = translate(tri, ivec2(-10, 20));
            tri.set_control_points(moved);
            let angle = Angle::between(tri.center(), ivec2(370, 180), ivec2(340, 200));
            let turned = rotate(tri, angle);
            tri.set_control_points(turned);
        }
    }

    // Zoom into the ellipse.
    if let Some(idx) = scene.pick(ivec2(380, 260)) {
        if let Some(ellipse) = scene.get_mut(idx) {
            let grown = scale(ellipse, ZOOM_IN);
            ellipse.set_control_points(grown);
        }
    }

    scene.clip_all(ivec2(10, 10), ivec2(410, 470));

    let mut plotter = Plotter::new(420, 480)?;
    plotter.plot_all(&scene);
    plotter.save(&out)?;
    tracing::info!(shapes = scene.len(), path = %out, "wrote canvas");
    Ok(())
}
