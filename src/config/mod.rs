//! View configuration.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::aggregate::SubKeyNaming;
use crate::schema::DiscoveryPolicy;

/// Settings of a road-map view. Every field has a default, so a config file
/// only needs the keys it changes.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    /// Dimension selected when the view opens.
    pub default_dimension: String,
    /// Feature property that holds the evaluation bundle.
    pub bundle_property: String,
    pub discovery: DiscoveryPolicy,
    pub sub_key_naming: SubKeyNaming,
    pub default_weight: f64,
    pub emphasized_weight: f64,
    /// Whether clicking a road requests an annotation form.
    pub annotations: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            default_dimension: "gw".to_string(),
            bundle_property: "eemi_grade".to_string(),
            discovery: DiscoveryPolicy::SampleFirst,
            sub_key_naming: SubKeyNaming::Merge,
            default_weight: 5.0,
            emphasized_weight: 8.0,
            annotations: true,
        }
    }
}

impl ViewConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("[config] Invalid view configuration")
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("[config] Failed to read {}", path.display()))?;
        Self::from_json_str(&text)
            .with_context(|| format!("[config] Failed to load {}", path.display()))
    }
}
