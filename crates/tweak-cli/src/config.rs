//! YAML parameter files.
//!
//! A config file holds one parameter document; any key it leaves out keeps
//! its default. Command-line flags are applied on top afterwards.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Parses a parameter document.
pub fn from_yaml_str<T: DeserializeOwned>(text: &str) -> Result<T> {
    serde_yaml::from_str(text).context("Invalid parameter YAML")
}

/// Loads parameters from `path`, or defaults when there is no file.
pub fn load_params<T>(path: Option<&Path>) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let Some(path) = path else {
        return Ok(T::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    debug!(path = %path.display(), "loading parameters");
    from_yaml_str(&text).with_context(|| format!("Failed to parse config: {}", path.display()))
}
