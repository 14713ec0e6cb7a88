//! Configuration types

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default include-guard marker
pub const DEFAULT_GUARD_MARKER: &str = "#pragma once";

/// Merge configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Line prefix that starts a file's body; also emitted once at the top of the output
    pub guard_marker: String,

    /// Opening region marker, followed by the file label
    pub region_begin: String,

    /// Closing region marker, followed by the file label
    pub region_end: String,

    /// Text written before the guard marker (omitted when empty)
    pub initial_text: String,

    /// Maximum include nesting depth (0 = unlimited)
    pub max_depth: usize,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            guard_marker: DEFAULT_GUARD_MARKER.into(),
            region_begin: "#pragma region".into(),
            region_end: "#pragma endregion //".into(),
            initial_text: String::new(),
            max_depth: 256,
        }
    }
}

impl MergeConfig {
    /// Load configuration from YAML file
    pub fn load_yaml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: MergeConfig =
            serde_yaml::from_str(&content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from JSON file
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: MergeConfig =
            serde_json::from_str(&content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, picking the format from the file extension
    pub fn load(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::load_yaml(path),
            _ => Self::load_json(path),
        }
    }

    /// Reject configurations the merger cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.guard_marker.trim().is_empty() {
            return Err(Error::Config("guard_marker must not be empty".into()));
        }
        Ok(())
    }
}
