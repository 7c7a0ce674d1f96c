//! Generator settings.
//!
//! A [`GeneratorConfig`] names the icon sizes to produce and the directory
//! they are written to. The defaults are the extension's shipped set: 16, 48
//! and 128 pixel icons in `icons/`.
//!
//! # Example
//!
//! ```
//! use site_timer_icons::GeneratorConfig;
//!
//! let config = GeneratorConfig::default().with_sizes([32, 64]);
//! assert_eq!(config.sizes, vec![32, 64]);
//! assert_eq!(config.output_dir.to_str(), Some("icons"));
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::icon::IconSpec;

/// Icon sizes written by default, smallest first.
pub const DEFAULT_SIZES: [u32; 3] = [16, 48, 128];

/// Directory icons are written to, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "icons";

/// What to generate and where.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Edge lengths to render, in the order they are written.
    #[serde(default = "default_sizes")]
    pub sizes: Vec<u32>,

    /// Existing directory the PNG files are written into.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            sizes: default_sizes(),
            output_dir: default_output_dir(),
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the size list.
    pub fn with_sizes(mut self, sizes: impl IntoIterator<Item = u32>) -> Self {
        self.sizes = sizes.into_iter().collect();
        self
    }

    /// Sets the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// One spec per configured size.
    pub fn specs(&self) -> impl Iterator<Item = IconSpec> + '_ {
        self.sizes.iter().copied().map(IconSpec::new)
    }

    /// Path the icon for `spec` is written to.
    pub fn path_for(&self, spec: IconSpec) -> PathBuf {
        self.output_dir.join(spec.file_name())
    }

    /// Directory the icons are written into.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

fn default_sizes() -> Vec<u32> {
    DEFAULT_SIZES.to_vec()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}
