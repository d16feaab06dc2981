//! Editor configuration.
//!
//! Loaded from a JSON file; every field is optional and falls back to the
//! default used by the canvas renderer.

use anyhow::{Context, Result};
use camino::Utf8Path;
use serde::{Deserialize, Serialize};

/// Hit tolerances used when mapping pointer clicks to targets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Distance from a terminal centre that still counts as clicking it.
    /// Terminals are drawn with radius 5 and a 10 px hit stroke.
    pub terminal_hit_radius: f32,
    /// Width of the clickable band around a wire.
    pub wire_hit_width: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            terminal_hit_radius: 10.0,
            wire_hit_width: 15.0,
        }
    }
}

impl EditorConfig {
    /// Read a config from a JSON file.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let text =
            std::fs::read_to_string(path).with_context(|| format!("Read config {}", path))?;
        Self::from_json(&text).with_context(|| format!("Failed to parse config {}", path))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        if !(config.terminal_hit_radius >= 0.0 && config.wire_hit_width >= 0.0) {
            anyhow::bail!(
                "hit tolerances must be non-negative (terminal_hit_radius={}, wire_hit_width={})",
                config.terminal_hit_radius,
                config.wire_hit_width
            );
        }
        Ok(config)
    }
}
