//! Icon geometry and the layers it is painted from.
//!
//! Every layer is derived from the icon size alone through fixed
//! proportionality constants. [`IconLayout`] computes all of them for one size
//! and paints them bottom to top onto a [`Canvas`]; later layers are blended
//! over earlier ones.
//!
//! # Layer Order
//!
//! ```text
//! 1. Background disk   opaque blue, radius 0.45 * size
//! 2. Clock face        translucent white, 0.75 * background radius
//! 3. Hour hand         blue stroke, straight up
//! 4. Minute hand       blue stroke, straight right
//! 5. Shield            translucent purple polygon above the center
//! 6. Center dot        opaque blue, on top of everything
//! ```

pub mod disk;
pub mod hand;
pub mod shield;

pub use disk::Disk;
pub use hand::Hand;
pub use shield::Shield;

use palette::{Srgb, WithAlpha};
use tracing::{debug, debug_span};

use crate::canvas::Canvas;

// ============================================================================
// Palette
// ============================================================================

/// Clock blue (`#667eea`), used opaque for the disk, hands and dot.
pub const CLOCK_BLUE: Srgb<u8> = Srgb::new(102, 126, 234);

/// Clock face white.
pub const FACE_WHITE: Srgb<u8> = Srgb::new(255, 255, 255);

/// Shield purple (`#764ba2`).
pub const SHIELD_PURPLE: Srgb<u8> = Srgb::new(118, 75, 162);

/// Opacity of the clock face over the background disk.
pub const FACE_ALPHA: u8 = 230;

/// Opacity of the shield.
pub const SHIELD_ALPHA: u8 = 204;

// ============================================================================
// Geometry
// ============================================================================

/// An integer pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this point moved by `(dx, dy)`.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Scales a pixel length by `factor`, truncating toward zero.
pub(crate) fn scaled(value: u32, factor: f64) -> u32 {
    (f64::from(value) * factor) as u32
}

// ============================================================================
// Layer Traits
// ============================================================================

/// A primitive that knows how to paint itself onto a canvas.
pub trait LayerEffect {
    fn paint(&self, canvas: &mut Canvas);
}

/// Identifies one layer of the icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Background,
    Face,
    HourHand,
    MinuteHand,
    Shield,
    CenterDot,
}

impl LayerKind {
    /// Paint order, bottom first.
    pub const ORDER: [LayerKind; 6] = [
        LayerKind::Background,
        LayerKind::Face,
        LayerKind::HourHand,
        LayerKind::MinuteHand,
        LayerKind::Shield,
        LayerKind::CenterDot,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LayerKind::Background => "background",
            LayerKind::Face => "face",
            LayerKind::HourHand => "hour-hand",
            LayerKind::MinuteHand => "minute-hand",
            LayerKind::Shield => "shield",
            LayerKind::CenterDot => "center-dot",
        }
    }
}

// ============================================================================
// IconLayout
// ============================================================================

/// All primitive coordinates for an icon of a given size.
///
/// Pure function of `size`: the same size always yields the same layout.
#[derive(Debug, Clone, PartialEq)]
pub struct IconLayout {
    pub size: u32,
    pub center: Point,
    pub background: Disk,
    pub face: Disk,
    pub hour_hand: Hand,
    pub minute_hand: Hand,
    pub shield: Shield,
    pub center_dot: Disk,
}

impl IconLayout {
    /// Computes the layout for a `size x size` icon.
    pub fn for_size(size: u32) -> Self {
        let c = (size / 2) as i32;
        let center = Point::new(c, c);
        let radius = Disk::background_radius(size);
        let blue = CLOCK_BLUE.with_alpha(u8::MAX);

        let layout = Self {
            size,
            center,
            background: Disk::new(center, radius, blue),
            face: Disk::new(
                center,
                Disk::face_radius(radius),
                FACE_WHITE.with_alpha(FACE_ALPHA),
            ),
            hour_hand: Hand::hour(center, size, radius, blue),
            minute_hand: Hand::minute(center, size, radius, blue),
            shield: Shield::new(center, radius, SHIELD_PURPLE.with_alpha(SHIELD_ALPHA)),
            center_dot: Disk::new(center, Disk::dot_radius(size), blue),
        };

        debug!(
            size,
            radius,
            face = layout.face.radius,
            dot = layout.center_dot.radius,
            "computed icon layout"
        );
        layout
    }

    /// Radius of the background disk.
    pub fn radius(&self) -> u32 {
        self.background.radius
    }

    /// Returns the primitive for `kind`.
    pub fn layer(&self, kind: LayerKind) -> &dyn LayerEffect {
        match kind {
            LayerKind::Background => &self.background,
            LayerKind::Face => &self.face,
            LayerKind::HourHand => &self.hour_hand,
            LayerKind::MinuteHand => &self.minute_hand,
            LayerKind::Shield => &self.shield,
            LayerKind::CenterDot => &self.center_dot,
        }
    }

    /// Paints every layer onto `canvas` in [`LayerKind::ORDER`].
    pub fn paint(&self, canvas: &mut Canvas) {
        let _span = debug_span!("paint", size = self.size).entered();
        for kind in LayerKind::ORDER {
            debug!(layer = kind.name(), "painting layer");
            self.layer(kind).paint(canvas);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use palette::Srgba;

    #[test]
    fn layout_is_centered() {
        let layout = IconLayout::for_size(128);
        assert_eq!(layout.center, Point::new(64, 64));
        assert_eq!(layout.background.center, layout.center);
        assert_eq!(layout.face.center, layout.center);
        assert_eq!(layout.center_dot.center, layout.center);
        assert_eq!(layout.hour_hand.from, layout.center);
        assert_eq!(layout.minute_hand.from, layout.center);
    }

    #[test]
    fn layout_uses_design_constants() {
        let layout = IconLayout::for_size(128);
        assert_eq!(layout.radius(), 57);
        assert_eq!(layout.face.radius, 42);
        assert_eq!(layout.center_dot.radius, 3);
        assert_eq!(layout.hour_hand.length(), 22);
        assert_eq!(layout.minute_hand.length(), 28);
    }

    #[test]
    fn layout_colors() {
        let layout = IconLayout::for_size(48);
        assert_eq!(layout.background.color, Srgba::new(102, 126, 234, 255));
        assert_eq!(layout.face.color, Srgba::new(255, 255, 255, 230));
        assert_eq!(layout.hour_hand.color, layout.background.color);
        assert_eq!(layout.minute_hand.color, layout.background.color);
        assert_eq!(layout.shield.color, Srgba::new(118, 75, 162, 204));
        assert_eq!(layout.center_dot.color, layout.background.color);
    }

    #[test]
    fn layout_is_deterministic() {
        assert_eq!(IconLayout::for_size(48), IconLayout::for_size(48));
        assert_ne!(IconLayout::for_size(48), IconLayout::for_size(49));
    }

    #[test]
    fn every_primitive_stays_inside_background_disk() {
        for size in [16, 32, 48, 64, 128, 256] {
            let layout = IconLayout::for_size(size);
            let disk = &layout.background;
            assert!(disk.contains(layout.hour_hand.to), "size {size}");
            assert!(disk.contains(layout.minute_hand.to), "size {size}");
            for v in layout.shield.vertices {
                assert!(disk.contains(v), "size {size}: shield vertex {v:?}");
            }
            assert!(layout.face.radius <= disk.radius);
        }
    }

    #[test]
    fn shield_sits_above_center() {
        let layout = IconLayout::for_size(128);
        assert!(layout.shield.top().y < layout.center.y);
        assert!(layout.shield.tip().y > layout.center.y);
    }

    #[test]
    fn paint_order_ends_with_center_dot() {
        assert_eq!(LayerKind::ORDER[0], LayerKind::Background);
        assert_eq!(LayerKind::ORDER[5], LayerKind::CenterDot);
        assert_eq!(LayerKind::Shield.name(), "shield");
    }

    #[test]
    fn scaled_truncates() {
        assert_eq!(scaled(16, 0.45), 7);
        assert_eq!(scaled(7, 0.7), 4);
        assert_eq!(scaled(0, 0.45), 0);
    }
}
