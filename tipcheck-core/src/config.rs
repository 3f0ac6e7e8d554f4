//! Configuration loading from tipcheck.toml.

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::Path};

use crate::error::{IoResultExt, TipcheckError};

/// Name of the optional configuration file at the scanned root.
pub const CONFIG_FILE: &str = "tipcheck.toml";

/// Main configuration structure for tipcheck.toml.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TipcheckConfig {
    /// Path of the tooltip definitions module, relative to the root.
    pub definitions: Option<String>,
    /// Module specifier content files import tooltips from.
    pub import_specifier: Option<String>,
    /// Name suffix that marks an export as a tooltip.
    pub suffix: Option<String>,
    /// Content file extension, without the dot.
    pub extension: Option<String>,
    /// Extra directory names to skip when walking the tree.
    pub exclude: Option<Vec<String>>,
    /// Whether to ask git for the tracked file list first.
    pub use_git: Option<bool>,
    /// Output configuration.
    pub output: Option<OutputConfig>,
}

/// Output format configuration.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Output format: "plain" or "json".
    pub format: Option<String>,
}

impl TipcheckConfig {
    /// Whether the config asks for JSON output.
    pub fn wants_json(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .is_some_and(|f| f.eq_ignore_ascii_case("json"))
    }
}

/// Loads configuration from tipcheck.toml if it exists.
pub fn load_config(root: &Path) -> Result<Option<TipcheckConfig>> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path).with_path(&path)?;
    let cfg = toml::from_str(&content)
        .map_err(|e| TipcheckError::config(&path, e.to_string()))?;
    Ok(Some(cfg))
}
