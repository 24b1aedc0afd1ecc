//! Checklist catalog
//!
//! This module provides the static inspection taxonomy:
//! - Three nesting levels: Category → Section → Item
//! - Context lookup of a single item by its id
//! - Aggregate counts over the whole taxonomy
//!
//! The catalog is constructed once and read-only for the lifetime of
//! the process. Item ids are globally unique across all categories and
//! sections; loading rejects a catalog that violates this.

mod data;

pub use data::BUNDLED_CATALOG;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// A single checkable inspection point
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub item_id: u32,
    pub description: String,
}

/// A group of related items within a category
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistSection {
    pub section_id: u32,
    pub section_name: String,
    pub items: Vec<ChecklistItem>,
}

/// A broad inspection area
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistCategory {
    pub category_id: u32,
    pub category_name: String,
    pub sections: Vec<ChecklistSection>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A catalog that failed the uniqueness invariant on load
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate item id {item_id} in catalog")]
    DuplicateItemId { item_id: u32 },
}

/// Full context of one item: the item plus its section and category
#[derive(Debug, Clone, Copy)]
pub struct ItemContext<'a> {
    pub item: &'a ChecklistItem,
    pub section: &'a ChecklistSection,
    pub category: &'a ChecklistCategory,
}

// Raw deserialization target; `Catalog` adds the index on top.
#[derive(Deserialize)]
struct CatalogData {
    categories: Vec<ChecklistCategory>,
}

/// The static Category → Section → Item taxonomy
#[derive(Debug)]
pub struct Catalog {
    categories: Vec<ChecklistCategory>,
    // item_id -> (category idx, section idx, item idx), built at load
    // so per-lookup scans are unnecessary
    index: HashMap<u32, (usize, usize, usize)>,
}

impl Catalog {
    /// Build a catalog from already-parsed categories
    ///
    /// Fails if any item id appears more than once anywhere in the
    /// taxonomy.
    pub fn new(categories: Vec<ChecklistCategory>) -> Result<Self, CatalogError> {
        let mut index = HashMap::new();

        for (ci, category) in categories.iter().enumerate() {
            for (si, section) in category.sections.iter().enumerate() {
                for (ii, item) in section.items.iter().enumerate() {
                    if index.insert(item.item_id, (ci, si, ii)).is_some() {
                        return Err(CatalogError::DuplicateItemId {
                            item_id: item.item_id,
                        });
                    }
                }
            }
        }

        Ok(Self { categories, index })
    }

    /// Parse a catalog from its JSON representation
    pub fn from_json(json: &str) -> Result<Self> {
        let data: CatalogData =
            serde_json::from_str(json).context("Failed to parse catalog JSON")?;
        Ok(Self::new(data.categories)?)
    }

    /// Load the catalog bundled with the binary
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// Load a catalog from a JSON file on disk
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read catalog file: {:?}", path.as_ref()))?;
        Self::from_json(&content)
    }

    /// Look up one item and its surrounding section and category
    ///
    /// Returns `None` when no item anywhere in the catalog has that id.
    pub fn find_item(&self, item_id: u32) -> Option<ItemContext<'_>> {
        let &(ci, si, ii) = self.index.get(&item_id)?;
        let category = &self.categories[ci];
        let section = &category.sections[si];
        let item = &section.items[ii];
        Some(ItemContext {
            item,
            section,
            category,
        })
    }

    /// All categories in declared order
    pub fn categories(&self) -> &[ChecklistCategory] {
        &self.categories
    }

    /// Number of categories
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Number of sections across all categories
    pub fn section_count(&self) -> usize {
        self.categories.iter().map(|c| c.sections.len()).sum()
    }

    /// Number of items across all categories and sections
    pub fn item_count(&self) -> usize {
        self.categories
            .iter()
            .flat_map(|c| &c.sections)
            .map(|s| s.items.len())
            .sum()
    }

    /// All item ids in declared order
    pub fn item_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.categories
            .iter()
            .flat_map(|c| &c.sections)
            .flat_map(|s| &s.items)
            .map(|i| i.item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = Catalog::bundled().unwrap();
        assert_eq!(catalog.category_count(), 8);
        assert_eq!(catalog.section_count(), 21);
        assert_eq!(catalog.item_count(), 46);
    }

    #[test]
    fn test_find_item_returns_full_context() {
        let catalog = Catalog::bundled().unwrap();

        let ctx = catalog.find_item(1001).unwrap();
        assert_eq!(ctx.item.item_id, 1001);
        assert_eq!(ctx.section.section_id, 101);
        assert_eq!(ctx.category.category_id, 1);
        assert_eq!(ctx.category.category_name, "Front Desk and Reception");

        let ctx = catalog.find_item(1043).unwrap();
        assert_eq!(ctx.section.section_name, "Emergency Preparedness");
        assert_eq!(ctx.category.category_id, 8);
    }

    #[test]
    fn test_every_item_id_resolves_to_itself() {
        let catalog = Catalog::bundled().unwrap();
        let ids: Vec<u32> = catalog.item_ids().collect();
        assert_eq!(ids.len(), 46);

        for id in ids {
            let ctx = catalog.find_item(id).unwrap();
            assert_eq!(ctx.item.item_id, id);
        }
    }

    #[test]
    fn test_find_item_absent_is_none() {
        let catalog = Catalog::bundled().unwrap();
        assert!(catalog.find_item(999).is_none());
        assert!(catalog.find_item(1047).is_none());
        assert!(catalog.find_item(0).is_none());
    }

    #[test]
    fn test_duplicate_item_id_rejected() {
        let json = r#"{
            "categories": [{
                "categoryId": 1,
                "categoryName": "Test",
                "sections": [
                    {
                        "sectionId": 101,
                        "sectionName": "A",
                        "items": [{ "itemId": 1001, "description": "first" }]
                    },
                    {
                        "sectionId": 102,
                        "sectionName": "B",
                        "items": [{ "itemId": 1001, "description": "duplicate" }]
                    }
                ],
                "createdAt": "2025-04-12T12:00:00Z",
                "updatedAt": "2025-04-12T12:00:00Z"
            }]
        }"#;

        let err = Catalog::from_json(json).unwrap_err();
        assert!(err.to_string().contains("duplicate item id 1001"));
    }

    #[test]
    fn test_declared_order_preserved() {
        let catalog = Catalog::bundled().unwrap();
        let first = &catalog.categories()[0];
        assert_eq!(first.category_id, 1);
        assert_eq!(first.sections[0].section_id, 101);
        assert_eq!(first.sections[0].items[0].item_id, 1001);
    }
}
