//! Workspace configuration for HotelCheck

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for a hotel inspection workspace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Path to a catalog JSON file replacing the bundled checklist
    /// (relative to the workspace root)
    #[serde(default)]
    pub catalog_path: Option<String>,

    /// Reporter name used when `report` is run without `--reporter`
    #[serde(default)]
    pub default_reporter: Option<String>,

    /// Database file name inside the data directory
    #[serde(default = "default_db_file")]
    pub db_file: String,
}

fn default_db_file() -> String {
    "hotelcheck.db".to_string()
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            default_reporter: None,
            db_file: default_db_file(),
        }
    }
}

impl WorkspaceConfig {
    /// Load configuration from the workspace or return defaults
    pub fn load_or_default(root: &Path) -> Result<Self> {
        let config_path = root.join(".hotelcheck").join("config.toml");

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let config: WorkspaceConfig = toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the workspace
    pub fn save(&self, root: &Path) -> Result<()> {
        let data_dir = root.join(".hotelcheck");
        std::fs::create_dir_all(&data_dir)?;

        let config_path = data_dir.join("config.toml");
        let content =
            toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        std::fs::write(&config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }
}
