//! Inspection workspace
//!
//! A workspace is a directory a hotel runs its inspections from. All
//! mutable state lives in a `.hotelcheck/` data directory inside it:
//! the issue database and the workspace configuration. The checklist
//! catalog itself is read-only: bundled with the binary, or replaced
//! by a JSON file the config points at.

mod config;

pub use config::WorkspaceConfig;

use crate::catalog::Catalog;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// A directory holding inspection state
pub struct Workspace {
    root: PathBuf,
    config: WorkspaceConfig,
}

impl Workspace {
    /// Open a workspace at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let root = path
            .as_ref()
            .canonicalize()
            .with_context(|| format!("Failed to open workspace at {:?}", path.as_ref()))?;

        let config = WorkspaceConfig::load_or_default(&root)?;

        Ok(Self { root, config })
    }

    /// Get the workspace root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the path to the .hotelcheck data directory
    pub fn data_dir(&self) -> PathBuf {
        self.root.join(".hotelcheck")
    }

    /// Initialize the data directory if it doesn't exist
    pub fn init_data_dir(&self) -> Result<PathBuf> {
        let data_dir = self.data_dir();
        if !data_dir.exists() {
            std::fs::create_dir_all(&data_dir)
                .with_context(|| format!("Failed to create {:?}", data_dir))?;
        }
        Ok(data_dir)
    }

    /// Path to the issue database
    pub fn db_path(&self) -> PathBuf {
        self.data_dir().join(&self.config.db_file)
    }

    /// Whether this workspace has been initialized
    pub fn is_initialized(&self) -> bool {
        self.data_dir().exists()
    }

    /// Load the checklist catalog for this workspace
    ///
    /// Uses the config's `catalog_path` override when set, otherwise
    /// the bundled catalog.
    pub fn load_catalog(&self) -> Result<Catalog> {
        match self.config.catalog_path {
            Some(ref rel) => Catalog::load_file(self.root.join(rel)),
            None => Catalog::bundled(),
        }
    }

    /// Get the workspace configuration
    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_and_init() {
        let dir = tempfile::tempdir().unwrap();
        let ws = Workspace::open(dir.path()).unwrap();

        assert!(!ws.is_initialized());
        ws.init_data_dir().unwrap();
        assert!(ws.is_initialized());
        assert!(ws.db_path().ends_with(".hotelcheck/hotelcheck.db"));
    }

    #[test]
    fn test_load_catalog_defaults_to_bundled() {
        let dir = tempfile::tempdir().unwrap();
        let ws = Workspace::open(dir.path()).unwrap();

        let catalog = ws.load_catalog().unwrap();
        assert_eq!(catalog.item_count(), 46);
    }

    #[test]
    fn test_catalog_override_file() {
        let dir = tempfile::tempdir().unwrap();

        let custom = r#"{
            "categories": [{
                "categoryId": 1,
                "categoryName": "Motel Annex",
                "sections": [{
                    "sectionId": 101,
                    "sectionName": "Rooms",
                    "items": [{ "itemId": 2001, "description": "Beds made" }]
                }],
                "createdAt": "2025-04-12T12:00:00Z",
                "updatedAt": "2025-04-12T12:00:00Z"
            }]
        }"#;
        std::fs::write(dir.path().join("custom-catalog.json"), custom).unwrap();

        let mut config = WorkspaceConfig::default();
        config.catalog_path = Some("custom-catalog.json".to_string());
        config.save(dir.path()).unwrap();

        let ws = Workspace::open(dir.path()).unwrap();
        let catalog = ws.load_catalog().unwrap();
        assert_eq!(catalog.item_count(), 1);
        assert!(catalog.find_item(2001).is_some());
        assert!(catalog.find_item(1001).is_none());
    }
}
