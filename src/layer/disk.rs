//! Filled disk layers: background, clock face and center dot.

use palette::Srgba;

use super::{LayerEffect, Point, scaled};
use crate::canvas::Canvas;

/// Background disk radius as a fraction of the icon size.
pub const BACKGROUND_RADIUS: f64 = 0.45;

/// Clock face radius as a fraction of the background radius.
pub const FACE_RADIUS: f64 = 0.75;

/// Center dot radius as a fraction of the icon size (at least one pixel).
pub const DOT_RADIUS: f64 = 0.03;

/// A filled circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disk {
    pub center: Point,
    pub radius: u32,
    pub color: Srgba<u8>,
}

impl Disk {
    pub fn new(center: Point, radius: u32, color: Srgba<u8>) -> Self {
        Self {
            center,
            radius,
            color,
        }
    }

    /// Radius of the background disk for an icon of `size` pixels.
    pub fn background_radius(size: u32) -> u32 {
        scaled(size, BACKGROUND_RADIUS)
    }

    /// Radius of the clock face drawn over a background disk of `radius`.
    pub fn face_radius(radius: u32) -> u32 {
        scaled(radius, FACE_RADIUS)
    }

    /// Radius of the center dot for an icon of `size` pixels.
    pub fn dot_radius(size: u32) -> u32 {
        scaled(size, DOT_RADIUS).max(1)
    }

    /// Returns true if `p` lies within the disk outline.
    pub fn contains(&self, p: Point) -> bool {
        let dx = i64::from(p.x - self.center.x);
        let dy = i64::from(p.y - self.center.y);
        let r = i64::from(self.radius);
        dx * dx + dy * dy <= r * r
    }
}

impl LayerEffect for Disk {
    fn paint(&self, canvas: &mut Canvas) {
        canvas.fill_circle(self.center, self.radius as f32, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radii_truncate_like_integer_layout() {
        assert_eq!(Disk::background_radius(16), 7);
        assert_eq!(Disk::background_radius(48), 21);
        assert_eq!(Disk::background_radius(128), 57);

        assert_eq!(Disk::face_radius(57), 42);
        assert_eq!(Disk::face_radius(7), 5);
    }

    #[test]
    fn dot_radius_never_below_one_pixel() {
        assert_eq!(Disk::dot_radius(16), 1);
        assert_eq!(Disk::dot_radius(48), 1);
        assert_eq!(Disk::dot_radius(128), 3);
        assert_eq!(Disk::dot_radius(1), 1);
    }

    #[test]
    fn contains_checks_euclidean_distance() {
        let disk = Disk::new(Point::new(10, 10), 5, Srgba::new(0, 0, 0, 255));
        assert!(disk.contains(Point::new(10, 10)));
        assert!(disk.contains(Point::new(13, 14)));
        assert!(!disk.contains(Point::new(14, 14)));
        assert!(!disk.contains(Point::new(0, 0)));
    }
}
