// src/config.rs

//! Defines the configuration structure for the colormap generator.
//!
//! The generator takes an explicit `GeneratorConfig` rather than reading
//! module-level flags; the binary runs with the defaults below, and
//! embedders can deserialize a config from JSON.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for one generation pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)] // Apply default values for any field missing in a config file.
pub struct GeneratorConfig {
    /// Whether to write the mesh output file at all.
    pub extract_mesh: bool,
    /// Preserve formatting whitespace in generated literals. Off by
    /// default, producing maximally compact output.
    pub pretty: bool,
    /// Candidate names for the mesh output, in emission order.
    pub mesh_colors: Vec<String>,
    /// Directory the output files are written into.
    pub out_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            extract_mesh: true,
            pretty: false,
            mesh_colors: vec!["viridis".to_string(), "inferno".to_string()],
            out_dir: PathBuf::from("."),
        }
    }
}

impl GeneratorConfig {
    /// Deserializes a configuration from a JSON document. Missing fields
    /// take their defaults.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).map_err(Into::into)
    }
}
