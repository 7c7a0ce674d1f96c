//! Renders every configured size and writes it to disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, info_span};

use crate::canvas;
use crate::config::GeneratorConfig;
use crate::error::{Error, Result, WriteError};
use crate::icon::{IconImage, IconSpec};
use crate::manifest::IconManifest;
use crate::renderer::IconRenderer;

/// Startup check for the drawing backend.
pub type Probe = fn() -> Result<()>;

/// One icon file written by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub spec: IconSpec,
    pub path: PathBuf,
    /// Size of the encoded PNG in bytes.
    pub bytes: usize,
}

// ============================================================================
// Generator
// ============================================================================

/// Drives a generation run: probe the canvas once, then render and write
/// each configured size in order.
///
/// The first failure stops the run. Files already written stay as they are;
/// a failed write never touches another size's file.
///
/// # Example
///
/// ```no_run
/// use site_timer_icons::{Generator, GeneratorConfig};
///
/// let generator = Generator::new(GeneratorConfig::default());
/// for icon in generator.run()? {
///     println!("Created {}", icon.path.display());
/// }
/// # Ok::<(), site_timer_icons::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
    renderer: IconRenderer,
    probe: Probe,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            renderer: IconRenderer::new(),
            probe: canvas::probe,
        }
    }

    /// Replaces the canvas capability probe.
    pub fn with_probe(mut self, probe: Probe) -> Self {
        self.probe = probe;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Manifest entries for the configured sizes.
    pub fn manifest(&self) -> IconManifest {
        IconManifest::from_config(&self.config)
    }

    /// Generates all icons.
    pub fn run(&self) -> Result<Vec<GeneratedIcon>> {
        self.run_with(|_| {})
    }

    /// Generates all icons, calling `on_written` after each file lands.
    pub fn run_with(
        &self,
        mut on_written: impl FnMut(&GeneratedIcon),
    ) -> Result<Vec<GeneratedIcon>> {
        (self.probe)()?;

        let dir = self.config.output_dir();
        let _run = info_span!("generate", dir = %dir.display()).entered();

        let mut written = Vec::with_capacity(self.config.sizes.len());
        for spec in self.config.specs() {
            let _span = info_span!("icon", size = spec.size).entered();

            let icon = self.renderer.render_spec(spec)?;
            let path = self.config.path_for(spec);
            let bytes = write_icon(&icon, &path)?;
            info!(path = %path.display(), bytes, "wrote icon");

            let generated = GeneratedIcon { spec, path, bytes };
            on_written(&generated);
            written.push(generated);
        }

        Ok(written)
    }
}

/// Encodes `icon` as PNG and writes it to `path`.
///
/// The whole file is encoded in memory first, so an encoding failure leaves
/// the filesystem untouched. The parent directory must already exist.
pub fn write_icon(icon: &IconImage, path: &Path) -> Result<usize> {
    let wrap = |source: WriteError| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let png = icon.to_png().map_err(wrap)?;
    fs::write(path, &png).map_err(|e| wrap(e.into()))?;
    Ok(png.len())
}

// ============================================================================
// Tests
// ============================================================================
