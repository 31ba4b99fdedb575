use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Console configuration. Every key is optional in the TOML file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub library_name: String,
    pub report_summary: String,
    pub library_snapshot: PathBuf,
    pub report_snapshot: PathBuf,
    /// Start the menu from the sample catalog rather than an empty library.
    pub seed_sample_data: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            library_name: "City Library".into(),
            report_summary: "City Library circulation".into(),
            library_snapshot: PathBuf::from("library.ser"),
            report_snapshot: PathBuf::from("library_report.ser"),
            seed_sample_data: true,
        }
    }
}

impl CliConfig {
    /// Load from a TOML file, or use defaults when no file is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        tracing::info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
