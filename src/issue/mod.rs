//! Issue model for inspection defects
//!
//! An issue is one reported defect tied to a checklist item. It carries:
//! - A severity rank (low, medium, high, critical)
//! - A lifecycle status (open, in-progress, resolved, closed)
//! - Reporter/assignee attribution and timestamps

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Severity level of a reported issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Low: cosmetic, no guest impact
    Low,
    /// Medium: noticeable, fix on next round
    Medium,
    /// High: guest-facing, fix promptly
    High,
    /// Critical: safety or compliance risk, immediate attention
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            "critical" => Ok(Severity::Critical),
            other => Err(format!("unknown severity: {}", other)),
        }
    }
}

/// Lifecycle status of an issue
///
/// Any status may move to any other status: a closed issue can be
/// reopened, a resolved one pushed back to open. Nothing is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// Reported, nobody working on it yet
    Open,
    /// Someone is working on it
    InProgress,
    /// Work done, awaiting verification
    Resolved,
    /// Verified done or won't fix
    Closed,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Open => write!(f, "open"),
            Status::InProgress => write!(f, "in-progress"),
            Status::Resolved => write!(f, "resolved"),
            Status::Closed => write!(f, "closed"),
        }
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(Status::Open),
            "in-progress" => Ok(Status::InProgress),
            "resolved" => Ok(Status::Resolved),
            "closed" => Ok(Status::Closed),
            other => Err(format!("unknown status: {}", other)),
        }
    }
}

/// User-facing filter buckets for issue lists
///
/// `Resolved` deliberately merges `resolved` and `closed` issues into
/// one bucket, matching how inspectors review finished work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusGroup {
    All,
    Open,
    InProgress,
    Resolved,
}

impl StatusGroup {
    /// Check whether a status falls into this bucket
    pub fn matches(&self, status: Status) -> bool {
        match self {
            StatusGroup::All => true,
            StatusGroup::Open => status == Status::Open,
            StatusGroup::InProgress => status == Status::InProgress,
            StatusGroup::Resolved => status == Status::Resolved || status == Status::Closed,
        }
    }
}

impl std::fmt::Display for StatusGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusGroup::All => write!(f, "all"),
            StatusGroup::Open => write!(f, "open"),
            StatusGroup::InProgress => write!(f, "in-progress"),
            StatusGroup::Resolved => write!(f, "resolved"),
        }
    }
}

impl FromStr for StatusGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StatusGroup::All),
            "open" => Ok(StatusGroup::Open),
            "in-progress" => Ok(StatusGroup::InProgress),
            "resolved" => Ok(StatusGroup::Resolved),
            other => Err(format!("unknown status group: {}", other)),
        }
    }
}

/// Filter issues down to one status group, preserving input order
pub fn filter_by_group(issues: &[Issue], group: StatusGroup) -> Vec<Issue> {
    issues
        .iter()
        .filter(|issue| group.matches(issue.status))
        .cloned()
        .collect()
}

/// One reported defect tied to a checklist item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Unique identifier (UUID v4)
    pub id: String,
    /// Checklist item this issue was reported against
    pub item_id: u32,
    /// Short summary, required non-empty
    pub title: String,
    /// Longer free-form description
    pub description: Option<String>,
    /// Impact rank
    pub severity: Severity,
    /// Current lifecycle status
    pub status: Status,
    /// Who reported it, required non-empty
    pub reported_by: String,
    /// Who it is assigned to, if anyone
    pub assigned_to: Option<String>,
    /// Set at creation, never changes afterwards
    pub created_at: DateTime<Utc>,
    /// Set at creation, advanced on every mutation
    pub updated_at: DateTime<Utc>,
    /// Stamped whenever the issue transitions into `resolved`.
    /// Sticky: transitioning back out does not clear it.
    pub resolved_at: Option<DateTime<Utc>>,
}

/// Caller input for creating an issue
///
/// Carries no status field: every issue starts life as `open`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueDraft {
    pub item_id: u32,
    pub title: String,
    pub description: Option<String>,
    pub severity: Severity,
    pub reported_by: String,
    pub assigned_to: Option<String>,
}

/// Rejected caller input on issue creation
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("issue title must not be empty")]
    EmptyTitle,
    #[error("issue reporter must not be empty")]
    EmptyReporter,
}

impl IssueDraft {
    /// Validate the draft before it becomes an issue
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.reported_by.trim().is_empty() {
            return Err(ValidationError::EmptyReporter);
        }
        Ok(())
    }

    /// Turn a validated draft into a fresh `open` issue
    pub fn into_issue(self, now: DateTime<Utc>) -> Issue {
        Issue {
            id: uuid::Uuid::new_v4().to_string(),
            item_id: self.item_id,
            title: self.title,
            description: self.description,
            severity: self.severity,
            status: Status::Open,
            reported_by: self.reported_by,
            assigned_to: self.assigned_to,
            created_at: now,
            updated_at: now,
            resolved_at: None,
        }
    }
}
