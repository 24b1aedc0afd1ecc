//! In-memory issue store
//!
//! Reference implementation of [`IssueStore`](super::IssueStore),
//! used by tests and ad-hoc tooling. The vector is kept newest-first
//! so list operations read straight off it.

use super::IssueStore;
use crate::issue::Issue;
use anyhow::Result;

/// Issue store backed by a plain vector
#[derive(Debug, Default)]
pub struct MemoryStore {
    // Newest-first
    issues: Vec<Issue>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl IssueStore for MemoryStore {
    fn insert(&mut self, issue: &Issue) -> Result<()> {
        self.issues.insert(0, issue.clone());
        Ok(())
    }

    fn get(&self, id: &str) -> Result<Option<Issue>> {
        Ok(self.issues.iter().find(|i| i.id == id).cloned())
    }

    fn list_by_item(&self, item_id: u32) -> Result<Vec<Issue>> {
        let mut matched: Vec<Issue> = self
            .issues
            .iter()
            .filter(|i| i.item_id == item_id)
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matched)
    }

    fn list_all(&self) -> Result<Vec<Issue>> {
        let mut all = self.issues.clone();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    fn update(&mut self, issue: &Issue) -> Result<()> {
        if let Some(slot) = self.issues.iter_mut().find(|i| i.id == issue.id) {
            *slot = issue.clone();
        }
        Ok(())
    }

    fn count(&self) -> Result<usize> {
        Ok(self.issues.len())
    }
}
