//! The icon renderer.

use tracing::debug;

use crate::canvas::Canvas;
use crate::error::Error;
use crate::icon::{IconImage, IconSpec};
use crate::layer::IconLayout;

// ============================================================================
// IconRenderer
// ============================================================================

/// Renders the clock-and-shield icon at any size.
///
/// Rendering is a pure function of the size: each call lays out the
/// primitives, paints them onto a fresh transparent canvas and returns the
/// composed image. Nothing is cached or shared between calls.
///
/// # Example
///
/// ```
/// use site_timer_icons::IconRenderer;
///
/// let icon = IconRenderer::new().render(48).unwrap();
/// assert_eq!(icon.size(), 48);
///
/// // Corners are transparent, the center dot is opaque.
/// assert_eq!(icon.pixel(0, 0)[3], 0);
/// assert_eq!(icon.pixel(24, 24)[3], 255);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct IconRenderer;

impl IconRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Renders a `size x size` icon.
    ///
    /// Returns [`Error::InvalidSize`] if `size` is zero or too large for the
    /// canvas to allocate.
    pub fn render(&self, size: u32) -> Result<IconImage, Error> {
        let mut canvas = Canvas::new(size)?;
        IconLayout::for_size(size).paint(&mut canvas);
        debug!(size = canvas.size(), "rendered icon");
        Ok(canvas.into_image())
    }

    /// Renders the icon described by `spec`.
    pub fn render_spec(&self, spec: IconSpec) -> Result<IconImage, Error> {
        self.render(spec.size)
    }
}

// ============================================================================
// Tests
// ============================================================================
