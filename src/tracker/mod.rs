//! Issue tracker
//!
//! Owns the mutable collection of issue records behind an injected
//! storage seam, and drives the status state machine:
//! - New issues always start `open`
//! - Every transition advances `updated_at`
//! - Transitioning into `resolved` stamps `resolved_at`; transitioning
//!   back out leaves it in place
//!
//! Issues are never deleted. The tracker knows nothing about the
//! catalog beyond the opaque item id it stores; referential integrity
//! is the caller's responsibility.

mod memory;

pub use memory::MemoryStore;

use crate::issue::{Issue, IssueDraft, Status};
use anyhow::Result;
use chrono::Utc;

/// Storage seam for issue records
///
/// List operations return newest-first (`created_at` descending).
/// `update` replaces a record in place; it must not reorder the
/// collection.
pub trait IssueStore {
    /// Persist a freshly created issue
    fn insert(&mut self, issue: &Issue) -> Result<()>;

    /// Fetch one issue by id; `None` when the id is unknown
    fn get(&self, id: &str) -> Result<Option<Issue>>;

    /// All issues for one checklist item, newest first
    fn list_by_item(&self, item_id: u32) -> Result<Vec<Issue>>;

    /// All issues, newest first
    fn list_all(&self) -> Result<Vec<Issue>>;

    /// Replace an existing issue, keyed by its id
    fn update(&mut self, issue: &Issue) -> Result<()>;

    /// Total number of stored issues
    fn count(&self) -> Result<usize>;
}

/// Issue tracker over an injected store
pub struct IssueTracker<S: IssueStore> {
    store: S,
}

impl<S: IssueStore> IssueTracker<S> {
    /// Create a tracker over the given store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Report a new issue
    ///
    /// Validates the draft, then stores a fresh issue with a generated
    /// id, `status = open`, and `created_at == updated_at`.
    pub fn report(&mut self, draft: IssueDraft) -> Result<Issue> {
        draft.validate()?;

        let issue = draft.into_issue(Utc::now());
        tracing::debug!(id = %issue.id, item_id = issue.item_id, "reporting issue");

        self.store.insert(&issue)?;
        Ok(issue)
    }

    /// Fetch one issue by id
    pub fn issue(&self, id: &str) -> Result<Option<Issue>> {
        self.store.get(id)
    }

    /// All issues reported against one checklist item, newest first
    ///
    /// An item with no issues yields an empty list, not an error.
    pub fn issues_for_item(&self, item_id: u32) -> Result<Vec<Issue>> {
        self.store.list_by_item(item_id)
    }

    /// All issues, newest first
    pub fn all_issues(&self) -> Result<Vec<Issue>> {
        self.store.list_all()
    }

    /// Move an issue to a new status
    ///
    /// Returns `Ok(None)` without mutating anything when the id is
    /// unknown. Any status may move to any other status.
    pub fn set_status(&mut self, id: &str, status: Status) -> Result<Option<Issue>> {
        let Some(mut issue) = self.store.get(id)? else {
            tracing::debug!(id, "status change for unknown issue");
            return Ok(None);
        };

        let now = Utc::now();
        issue.status = status;
        issue.updated_at = now;
        if status == Status::Resolved {
            issue.resolved_at = Some(now);
        }

        self.store.update(&issue)?;
        tracing::debug!(id, %status, "issue status changed");
        Ok(Some(issue))
    }

    /// Access the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::{Severity, StatusGroup};
    use chrono::{Duration, Utc};

    fn draft(item_id: u32, title: &str) -> IssueDraft {
        IssueDraft {
            item_id,
            title: title.to_string(),
            description: Some("test issue".to_string()),
            severity: Severity::Low,
            reported_by: "Inspector".to_string(),
            assigned_to: None,
        }
    }

    fn tracker() -> IssueTracker<MemoryStore> {
        IssueTracker::new(MemoryStore::new())
    }

    #[test]
    fn test_report_creates_open_issue() {
        let mut tracker = tracker();
        let issue = tracker.report(draft(1001, "Scratched counter")).unwrap();

        assert_eq!(issue.status, Status::Open);
        assert_eq!(issue.created_at, issue.updated_at);
        assert!(issue.resolved_at.is_none());

        let listed = tracker.issues_for_item(1001).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, issue.id);
    }

    #[test]
    fn test_report_rejects_invalid_draft() {
        let mut tracker = tracker();
        assert!(tracker.report(draft(1001, "")).is_err());
        assert_eq!(tracker.store().count().unwrap(), 0);
    }

    #[test]
    fn test_issues_for_item_filters_and_sorts() {
        let mut tracker = tracker();
        let base = Utc::now();

        // Insert with explicit timestamps so the ordering is unambiguous.
        for (offset, item_id, title) in [(0, 1001, "t1"), (1, 1002, "other"), (2, 1001, "t2"), (3, 1001, "t3")] {
            let issue = draft(item_id, title).into_issue(base + Duration::seconds(offset));
            tracker.store.insert(&issue).unwrap();
        }

        let listed = tracker.issues_for_item(1001).unwrap();
        let titles: Vec<&str> = listed.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["t3", "t2", "t1"]);

        assert!(tracker.issues_for_item(1046).unwrap().is_empty());
    }

    #[test]
    fn test_resolve_stamps_resolved_at() {
        let mut tracker = tracker();
        let issue = tracker.report(draft(1019, "Bathroom sink leaking")).unwrap();

        let updated = tracker
            .set_status(&issue.id, Status::Resolved)
            .unwrap()
            .unwrap();

        assert_eq!(updated.status, Status::Resolved);
        let resolved_at = updated.resolved_at.unwrap();
        assert!(resolved_at >= updated.created_at);

        // Untouched fields survive the transition.
        assert_eq!(updated.title, issue.title);
        assert_eq!(updated.severity, issue.severity);
        assert_eq!(updated.reported_by, issue.reported_by);
        assert_eq!(updated.created_at, issue.created_at);
    }

    #[test]
    fn test_resolved_at_sticky_after_reopen() {
        let mut tracker = tracker();
        let issue = tracker.report(draft(1043, "Missing inspection tag")).unwrap();

        let resolved = tracker
            .set_status(&issue.id, Status::Resolved)
            .unwrap()
            .unwrap();
        let first_resolved_at = resolved.resolved_at.unwrap();

        let reopened = tracker.set_status(&issue.id, Status::Open).unwrap().unwrap();
        assert_eq!(reopened.status, Status::Open);
        assert_eq!(reopened.resolved_at, Some(first_resolved_at));
    }

    #[test]
    fn test_set_status_unknown_id_is_none() {
        let mut tracker = tracker();
        tracker.report(draft(1001, "Existing issue")).unwrap();

        let before = tracker.all_issues().unwrap();
        let result = tracker.set_status("nonexistent-id", Status::Closed).unwrap();
        assert!(result.is_none());

        // Collection untouched: same count, same contents.
        let after = tracker.all_issues().unwrap();
        assert_eq!(before.len(), after.len());
        for (a, b) in before.iter().zip(after.iter()) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.status, b.status);
            assert_eq!(a.updated_at, b.updated_at);
        }
    }

    #[test]
    fn test_set_status_idempotent_target() {
        let mut tracker = tracker();
        let issue = tracker.report(draft(1001, "Clutter behind desk")).unwrap();

        let first = tracker.set_status(&issue.id, Status::Open).unwrap().unwrap();
        let second = tracker.set_status(&issue.id, Status::Open).unwrap().unwrap();

        assert_eq!(first.status, Status::Open);
        assert_eq!(second.status, Status::Open);
        assert!(second.updated_at >= first.updated_at);
        assert!(second.resolved_at.is_none());
    }

    #[test]
    fn test_closed_issues_fall_in_resolved_group() {
        let mut tracker = tracker();
        let a = tracker.report(draft(1001, "a")).unwrap();
        let b = tracker.report(draft(1001, "b")).unwrap();
        tracker.report(draft(1001, "c")).unwrap();

        tracker.set_status(&a.id, Status::Resolved).unwrap();
        tracker.set_status(&b.id, Status::Closed).unwrap();

        let issues = tracker.issues_for_item(1001).unwrap();
        let resolved = crate::issue::filter_by_group(&issues, StatusGroup::Resolved);
        assert_eq!(resolved.len(), 2);
        assert!(resolved.iter().all(|i| i.status == Status::Resolved || i.status == Status::Closed));
    }
}
