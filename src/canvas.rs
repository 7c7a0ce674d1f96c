//! Raster canvas backed by tiny-skia.
//!
//! [`Canvas`] is the drawing capability the renderer paints onto: filled
//! circles, filled polygons and stroked line segments, each alpha-blended
//! (source over) onto whatever was painted before.
//!
//! Coordinates are integer pixel positions. A pixel `(x, y)` is addressed by
//! its center, so shapes are shifted by half a pixel before rasterizing.

use image::{Rgba, RgbaImage};
use palette::Srgba;
use resvg::tiny_skia::{FillRule, LineCap, Paint, PathBuilder, Pixmap, Stroke, Transform};
use tracing::debug;

use crate::error::Error;
use crate::icon::IconImage;
use crate::layer::Point;

// ============================================================================
// Capability probe
// ============================================================================

/// Checks that the raster backend can allocate a surface.
///
/// Run once before any rendering so a broken backend fails the whole run
/// up front instead of after some icons were written.
pub fn probe() -> Result<(), Error> {
    match Pixmap::new(1, 1) {
        Some(_) => {
            debug!("raster canvas backend available");
            Ok(())
        }
        None => Err(Error::MissingCapability {
            reason: "tiny-skia could not allocate a drawing surface".into(),
        }),
    }
}

// ============================================================================
// Canvas
// ============================================================================

/// A square, initially transparent drawing surface.
pub struct Canvas {
    pixmap: Pixmap,
    transform: Transform,
}

impl Canvas {
    /// Creates a transparent `size x size` canvas.
    ///
    /// Fails with [`Error::InvalidSize`] for a zero size or one too large to
    /// allocate.
    pub fn new(size: u32) -> Result<Self, Error> {
        let pixmap = Pixmap::new(size, size).ok_or(Error::InvalidSize(size))?;
        Ok(Self {
            pixmap,
            transform: Transform::from_translate(0.5, 0.5),
        })
    }

    /// Edge length in pixels.
    pub fn size(&self) -> u32 {
        self.pixmap.width()
    }

    /// Fills a circle. A non-positive radius draws nothing.
    pub fn fill_circle(&mut self, center: Point, radius: f32, color: Srgba<u8>) {
        let Some(path) = PathBuilder::from_circle(center.x as f32, center.y as f32, radius) else {
            return;
        };
        self.pixmap.fill_path(
            &path,
            &paint(color),
            FillRule::Winding,
            self.transform,
            None,
        );
    }

    /// Fills a closed polygon through `points`.
    ///
    /// Fewer than three points, or a degenerate outline, draws nothing.
    pub fn fill_polygon(&mut self, points: &[Point], color: Srgba<u8>) {
        let [first, rest @ ..] = points else {
            return;
        };
        if rest.len() < 2 {
            return;
        }

        let mut pb = PathBuilder::new();
        pb.move_to(first.x as f32, first.y as f32);
        for p in rest {
            pb.line_to(p.x as f32, p.y as f32);
        }
        pb.close();

        let Some(path) = pb.finish() else {
            return;
        };
        self.pixmap.fill_path(
            &path,
            &paint(color),
            FillRule::Winding,
            self.transform,
            None,
        );
    }

    /// Strokes a straight segment from `from` to `to`.
    ///
    /// Ends use square caps so both end pixels are covered. The stroke is
    /// expanded to an outline and filled, which keeps one-pixel strokes on
    /// the regular coverage path instead of tiny-skia's hairline rasterizer.
    pub fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Srgba<u8>) {
        let mut pb = PathBuilder::new();
        pb.move_to(from.x as f32, from.y as f32);
        pb.line_to(to.x as f32, to.y as f32);
        let Some(path) = pb.finish() else {
            return;
        };

        let stroke = Stroke {
            width,
            line_cap: LineCap::Square,
            ..Stroke::default()
        };
        let Some(outline) = path.stroke(&stroke, 1.0) else {
            return;
        };
        self.pixmap.fill_path(
            &outline,
            &paint(color),
            FillRule::Winding,
            self.transform,
            None,
        );
    }

    /// Consumes the canvas and returns the composed image.
    pub fn into_image(self) -> IconImage {
        IconImage::new(pixmap_to_rgba_image(&self.pixmap))
    }
}

fn paint(color: Srgba<u8>) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.red, color.green, color.blue, color.alpha);
    paint.anti_alias = true;
    paint
}

/// Converts a tiny-skia Pixmap (premultiplied) to a straight-alpha RgbaImage.
fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let width = pixmap.width();
    let mut img = RgbaImage::new(width, pixmap.height());

    for (i, pixel) in pixmap.pixels().iter().enumerate() {
        let c = pixel.demultiply();
        let (x, y) = (i as u32 % width, i as u32 / width);
        img.put_pixel(x, y, Rgba([c.red(), c.green(), c.blue(), c.alpha()]));
    }

    img
}
