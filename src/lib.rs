//! site-timer-icons: procedural icons for the Site Timer & Blocker extension
//!
//! The icon is a clock (blue disk, translucent white face, two hands and a
//! center dot) with a translucent purple shield over its upper half. Every
//! coordinate is derived from the icon's edge length, so any size can be
//! rendered; the extension ships 16, 48 and 128 pixel PNGs.
//!
//! # Example
//!
//! ```
//! use site_timer_icons::{IconLayout, IconRenderer};
//!
//! // Inspect the geometry without rasterizing
//! let layout = IconLayout::for_size(128);
//! assert_eq!(layout.radius(), 57);
//!
//! // Render to an in-memory RGBA image
//! let icon = IconRenderer::new().render(128).unwrap();
//! assert_eq!(icon.pixel(64, 64).0, [102, 126, 234, 255]);
//! ```
//!
//! # Writing Files
//!
//! [`Generator`] renders each size from a [`GeneratorConfig`] and writes
//! `icon<size>.png` into an existing output directory:
//!
//! ```no_run
//! use site_timer_icons::{Generator, GeneratorConfig};
//!
//! let written = Generator::new(GeneratorConfig::default()).run()?;
//! assert_eq!(written.len(), 3);
//! # Ok::<(), site_timer_icons::Error>(())
//! ```

mod canvas;
mod config;
mod error;
mod generator;
mod icon;
mod layer;
mod manifest;
mod renderer;

pub use canvas::{Canvas, probe};
pub use config::{DEFAULT_OUTPUT_DIR, DEFAULT_SIZES, GeneratorConfig};
pub use error::{Error, INSTALL_HINT, Result, WriteError};
pub use generator::{GeneratedIcon, Generator, Probe, write_icon};
pub use icon::{IconImage, IconSpec, SizePx};
pub use layer::{
    CLOCK_BLUE, Disk, FACE_ALPHA, FACE_WHITE, Hand, IconLayout, LayerEffect, LayerKind, Point,
    SHIELD_ALPHA, SHIELD_PURPLE, Shield,
};
pub use manifest::IconManifest;
pub use renderer::IconRenderer;
