//! Clock hand layers.

use palette::Srgba;

use super::{LayerEffect, Point, scaled};
use crate::canvas::Canvas;

/// Hour hand length as a fraction of the background radius.
pub const HOUR_LENGTH: f64 = 0.4;

/// Minute hand length as a fraction of the background radius.
pub const MINUTE_LENGTH: f64 = 0.5;

/// Hour hand stroke width as a fraction of the icon size.
pub const HOUR_WIDTH: f64 = 0.03;

/// Minute hand stroke width as a fraction of the icon size.
pub const MINUTE_WIDTH: f64 = 0.02;

/// A straight stroked segment from the clock center outwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hand {
    pub from: Point,
    pub to: Point,
    pub width: u32,
    pub color: Srgba<u8>,
}

impl Hand {
    /// Hour hand: points straight up from `center`.
    pub fn hour(center: Point, size: u32, radius: u32, color: Srgba<u8>) -> Self {
        let length = scaled(radius, HOUR_LENGTH) as i32;
        Self {
            from: center,
            to: center.offset(0, -length),
            width: stroke_width(size, HOUR_WIDTH),
            color,
        }
    }

    /// Minute hand: points straight right from `center`.
    pub fn minute(center: Point, size: u32, radius: u32, color: Srgba<u8>) -> Self {
        let length = scaled(radius, MINUTE_LENGTH) as i32;
        Self {
            from: center,
            to: center.offset(length, 0),
            width: stroke_width(size, MINUTE_WIDTH),
            color,
        }
    }

    /// Length in pixels. Hands are always axis-aligned.
    pub fn length(&self) -> u32 {
        self.from.x.abs_diff(self.to.x) + self.from.y.abs_diff(self.to.y)
    }
}

fn stroke_width(size: u32, factor: f64) -> u32 {
    scaled(size, factor).max(1)
}

impl LayerEffect for Hand {
    fn paint(&self, canvas: &mut Canvas) {
        canvas.stroke_line(self.from, self.to, self.width as f32, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blue() -> Srgba<u8> {
        Srgba::new(102, 126, 234, 255)
    }

    #[test]
    fn hour_hand_points_up() {
        let hand = Hand::hour(Point::new(64, 64), 128, 57, blue());
        assert_eq!(hand.from, Point::new(64, 64));
        assert_eq!(hand.to, Point::new(64, 42));
        assert_eq!(hand.length(), 22);
        assert_eq!(hand.width, 3);
    }

    #[test]
    fn minute_hand_points_right() {
        let hand = Hand::minute(Point::new(64, 64), 128, 57, blue());
        assert_eq!(hand.to, Point::new(92, 64));
        assert_eq!(hand.length(), 28);
        assert_eq!(hand.width, 2);
    }

    #[test]
    fn small_icons_keep_one_pixel_hands() {
        let hour = Hand::hour(Point::new(8, 8), 16, 7, blue());
        let minute = Hand::minute(Point::new(8, 8), 16, 7, blue());
        assert_eq!(hour.width, 1);
        assert_eq!(minute.width, 1);
        assert_eq!(hour.to, Point::new(8, 6));
        assert_eq!(minute.to, Point::new(11, 8));
    }
}
