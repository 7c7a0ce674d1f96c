//! Shield polygon layer.
//!
//! The shield is a six-point silhouette with a pointed bottom, sitting above
//! the clock center and overlapping the hour hand. Vertex heights are fixed
//! fractions of the shield height, walked counter-clockwise from the top.

use palette::Srgba;

use super::{LayerEffect, Point, scaled};
use crate::canvas::Canvas;

/// Shield width as a fraction of the background radius.
pub const WIDTH: f64 = 0.45;

/// Shield height as a fraction of the background radius.
pub const HEIGHT: f64 = 0.7;

/// Distance from the clock center up to the shield top, as a fraction of the
/// background radius.
pub const TOP_OFFSET: f64 = 0.55;

/// Which column a vertex sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Left,
    Center,
    Right,
}

/// Outline of the shield: column and fractional height for each vertex.
const OUTLINE: [(Column, f64); 6] = [
    (Column::Center, 0.0),
    (Column::Left, 0.15),
    (Column::Left, 0.65),
    (Column::Center, 1.0),
    (Column::Right, 0.65),
    (Column::Right, 0.15),
];

/// The filled shield polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shield {
    pub vertices: [Point; 6],
    pub width: u32,
    pub height: u32,
    pub color: Srgba<u8>,
}

impl Shield {
    /// Lays out the shield for a clock centered at `center` with a
    /// background disk of `radius`.
    pub fn new(center: Point, radius: u32, color: Srgba<u8>) -> Self {
        let width = scaled(radius, WIDTH);
        let height = scaled(radius, HEIGHT);
        let top = center.y - scaled(radius, TOP_OFFSET) as i32;
        let half = (width / 2) as i32;

        let vertices = OUTLINE.map(|(column, fraction)| {
            let x = match column {
                Column::Left => center.x - half,
                Column::Center => center.x,
                Column::Right => center.x + half,
            };
            Point::new(x, top + scaled(height, fraction) as i32)
        });

        Self {
            vertices,
            width,
            height,
            color,
        }
    }

    /// Topmost vertex (the shield's peak).
    pub fn top(&self) -> Point {
        self.vertices[0]
    }

    /// Bottom tip of the shield.
    pub fn tip(&self) -> Point {
        self.vertices[3]
    }
}

impl LayerEffect for Shield {
    fn paint(&self, canvas: &mut Canvas) {
        canvas.fill_polygon(&self.vertices, self.color);
    }
}
