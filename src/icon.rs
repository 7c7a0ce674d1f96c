//! Rendered icon types.
//!
//! An [`IconImage`] is the in-memory result of one render call: a square RGBA
//! buffer whose edge length is the requested icon size.

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::error::WriteError;

/// A 2D size in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizePx {
    pub width: u32,
    pub height: u32,
}

impl SizePx {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns true if width equals height.
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

/// The request for a single icon: its edge length in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconSpec {
    pub size: u32,
}

impl IconSpec {
    pub fn new(size: u32) -> Self {
        Self { size }
    }

    /// File name used for this icon inside the output directory.
    pub fn file_name(&self) -> String {
        format!("icon{}.png", self.size)
    }
}

/// A fully composed icon.
///
/// Colors are stored straight (not premultiplied), so fully transparent
/// pixels are always `[0, 0, 0, 0]`.
#[derive(Debug, Clone, PartialEq)]
pub struct IconImage {
    /// The image data in RGBA format.
    pub data: RgbaImage,
}

impl IconImage {
    pub fn new(data: RgbaImage) -> Self {
        Self { data }
    }

    /// Returns the pixel dimensions of the image.
    pub fn dimensions(&self) -> SizePx {
        SizePx::new(self.data.width(), self.data.height())
    }

    /// Edge length of the (square) icon.
    pub fn size(&self) -> u32 {
        self.data.width()
    }

    /// Returns the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.data.get_pixel(x, y)
    }

    /// Encodes the icon as PNG bytes.
    pub fn to_png(&self) -> Result<Vec<u8>, WriteError> {
        let mut buf = Cursor::new(Vec::new());
        self.data.write_to(&mut buf, ImageFormat::Png)?;
        Ok(buf.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_px_is_square() {
        assert!(SizePx::new(100, 100).is_square());
        assert!(!SizePx::new(100, 200).is_square());
    }

    #[test]
    fn spec_file_name() {
        assert_eq!(IconSpec::new(16).file_name(), "icon16.png");
        assert_eq!(IconSpec::new(128).file_name(), "icon128.png");
    }

    #[test]
    fn png_encoding_preserves_alpha() {
        let mut data = RgbaImage::new(4, 4);
        data.put_pixel(1, 2, Rgba([10, 20, 30, 40]));
        let icon = IconImage::new(data);

        let bytes = icon.to_png().unwrap();
        assert_eq!(&bytes[..8], &[137, 80, 78, 71, 13, 10, 26, 10]);

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (4, 4));
        assert_eq!(decoded.get_pixel(1, 2).0, [10, 20, 30, 40]);
        assert_eq!(decoded.get_pixel(0, 0).0, [0, 0, 0, 0]);
    }
}
