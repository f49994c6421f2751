use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::stitching::StitcherConfig;

/// Read a JSON stitcher config. Fields that are left out take their
/// defaults.
pub fn load_config(path: &Path) -> Result<StitcherConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read stitcher config from {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse stitcher config in {}", path.display()))
}

pub fn save_config(path: &Path, config: &StitcherConfig) -> Result<()> {
    let serialized = serde_json::to_string_pretty(config)?;
    fs::write(path, serialized)
        .with_context(|| format!("Failed to write stitcher config to {}", path.display()))
}
