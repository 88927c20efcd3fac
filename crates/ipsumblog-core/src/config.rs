//! Generator configuration loading and management.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::entry::Profile;
use crate::lorem::ParagraphBounds;

/// Generator configuration, optionally loaded from a YAML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    /// Output directory for entry files
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// File extension for entry files
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Maximum concurrent writes
    #[serde(default = "default_max_in_flight")]
    pub max_in_flight: usize,

    /// Synthesis profile
    #[serde(default)]
    pub profile: Profile,

    /// Paragraph size limits
    #[serde(default)]
    pub bounds: ParagraphBounds,
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("source")
}
fn default_extension() -> String {
    "md".to_string()
}
fn default_max_in_flight() -> usize {
    64
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
            extension: default_extension(),
            max_in_flight: default_max_in_flight(),
            profile: Profile::default(),
            bounds: ParagraphBounds::default(),
        }
    }
}

impl BlogConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.bounds.validate().context("Invalid paragraph bounds")?;
        if self.max_in_flight == 0 {
            anyhow::bail!("max_in_flight must be at least 1");
        }
        Ok(())
    }
}
