//! Extension manifest snippet for the generated icons.
//!
//! Browser extension manifests reference icons by size:
//!
//! ```json
//! {
//!   "icons": {
//!     "16": "icons/icon16.png",
//!     "48": "icons/icon48.png",
//!     "128": "icons/icon128.png"
//!   }
//! }
//! ```
//!
//! [`IconManifest`] produces that object for whatever sizes were generated.

use std::collections::BTreeMap;
use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

use crate::config::GeneratorConfig;
use crate::error::Error;

/// The `"icons"` section of an extension manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct IconManifest {
    /// Size (as a decimal string) to icon path, using `/` separators.
    pub icons: BTreeMap<String, String>,
}

impl IconManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the manifest entries for every size in `config`.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        let mut manifest = Self::new();
        for spec in config.specs() {
            manifest.insert(spec.size, manifest_path(&config.path_for(spec)));
        }
        manifest
    }

    /// Adds or replaces the icon for `size`.
    pub fn insert(&mut self, size: u32, path: impl Into<String>) {
        self.icons.insert(size.to_string(), path.into());
    }

    /// Number of icon entries.
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Joins `path` with `/`, whatever the host separator.
///
/// A rooted path keeps one leading `/`; drive prefixes are dropped.
fn manifest_path(path: &Path) -> String {
    let mut rooted = false;
    let mut parts = Vec::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) => {}
            Component::RootDir => rooted = true,
            other => parts.push(other.as_os_str().to_string_lossy()),
        }
    }

    let joined = parts.join("/");
    if rooted { format!("/{joined}") } else { joined }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_for_default_config() {
        let manifest = IconManifest::from_config(&GeneratorConfig::default());
        assert_eq!(manifest.len(), 3);
        assert_eq!(manifest.icons["16"], "icons/icon16.png");
        assert_eq!(manifest.icons["48"], "icons/icon48.png");
        assert_eq!(manifest.icons["128"], "icons/icon128.png");
    }

    #[test]
    fn manifest_json_format() {
        let manifest = IconManifest::from_config(&GeneratorConfig::default());
        let json = manifest.to_json_pretty().unwrap();

        assert!(json.contains("\"icons\""));
        assert!(json.contains("\"128\": \"icons/icon128.png\""));

        let restored = IconManifest::from_json(&json).unwrap();
        assert_eq!(restored, manifest);
    }

    #[test]
    fn nested_output_dir_uses_forward_slashes() {
        let config = GeneratorConfig::default()
            .with_sizes([32])
            .with_output_dir("assets/icons");
        let manifest = IconManifest::from_config(&config);
        assert_eq!(manifest.icons["32"], "assets/icons/icon32.png");
    }

    #[test]
    fn absolute_output_dir_has_single_leading_slash() {
        let config = GeneratorConfig::default()
            .with_sizes([16])
            .with_output_dir("/tmp/ext/icons");
        let manifest = IconManifest::from_config(&config);
        assert_eq!(manifest.icons["16"], "/tmp/ext/icons/icon16.png");
    }

    #[test]
    fn current_dir_components_are_kept_relative() {
        assert_eq!(manifest_path(Path::new("./icons/icon48.png")), "./icons/icon48.png");
        assert_eq!(manifest_path(Path::new("/")), "/");
    }

    #[test]
    fn invalid_json_is_a_manifest_error() {
        assert!(matches!(
            IconManifest::from_json("{\"icons\": 3}"),
            Err(Error::Manifest(_))
        ));
    }

    #[test]
    fn empty_manifest() {
        let manifest = IconManifest::new();
        assert!(manifest.is_empty());
        assert_eq!(manifest.to_json_pretty().unwrap(), "{\n  \"icons\": {}\n}");
    }
}
