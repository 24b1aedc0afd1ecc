//! SQLite storage layer for HotelCheck
//!
//! This module handles persistent storage of reported issues. The
//! [`Database`] implements [`IssueStore`](crate::tracker::IssueStore),
//! so the tracker runs unchanged on top of either this or the
//! in-memory store.
//!
//! Each store operation is a single SQL statement keyed by issue id,
//! so operations are independently atomic: a concurrent reader never
//! observes a partial write.

mod schema;

pub use schema::SCHEMA;

use crate::issue::{Issue, Severity, Status};
use crate::tracker::IssueStore;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// Database connection wrapper
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create a database at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path.as_ref())
            .with_context(|| format!("Failed to open database at {:?}", path.as_ref()))?;

        let db = Self { conn };
        db.initialize()?;

        Ok(db)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("Failed to open in-memory database")?;

        let db = Self { conn };
        db.initialize()?;

        Ok(db)
    }

    /// Initialize the database schema
    fn initialize(&self) -> Result<()> {
        self.conn
            .execute_batch(SCHEMA)
            .context("Failed to initialize database schema")?;
        Ok(())
    }

    /// Get database statistics
    pub fn stats(&self) -> Result<DatabaseStats> {
        let count_where = |clause: &str| -> Result<usize> {
            let sql = format!("SELECT COUNT(*) FROM issues{}", clause);
            let count: i64 = self.conn.query_row(&sql, [], |row| row.get(0))?;
            Ok(count as usize)
        };

        Ok(DatabaseStats {
            total: count_where("")?,
            open: count_where(" WHERE status = 'open'")?,
            in_progress: count_where(" WHERE status = 'in-progress'")?,
            resolved: count_where(" WHERE status = 'resolved'")?,
            closed: count_where(" WHERE status = 'closed'")?,
        })
    }
}

impl IssueStore for Database {
    fn insert(&mut self, issue: &Issue) -> Result<()> {
        self.conn
            .execute(
                r#"
                INSERT INTO issues (
                    id, item_id, title, description, severity, status,
                    reported_by, assigned_to, created_at, updated_at, resolved_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
                "#,
                params![
                    issue.id,
                    issue.item_id,
                    issue.title,
                    issue.description,
                    issue.severity.to_string(),
                    issue.status.to_string(),
                    issue.reported_by,
                    issue.assigned_to,
                    issue.created_at.to_rfc3339(),
                    issue.updated_at.to_rfc3339(),
                    issue.resolved_at.map(|t| t.to_rfc3339()),
                ],
            )
            .context("Failed to insert issue")?;

        Ok(())
    }

    fn get(&self, id: &str) -> Result<Option<Issue>> {
        let result = self
            .conn
            .query_row(
                r#"
                SELECT id, item_id, title, description, severity, status,
                       reported_by, assigned_to, created_at, updated_at, resolved_at
                FROM issues WHERE id = ?1
                "#,
                params![id],
                map_issue_row,
            )
            .optional()
            .context("Failed to get issue")?;

        result.map(IssueRow::into_issue).transpose()
    }

    fn list_by_item(&self, item_id: u32) -> Result<Vec<Issue>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, item_id, title, description, severity, status,
                   reported_by, assigned_to, created_at, updated_at, resolved_at
            FROM issues WHERE item_id = ?1
            ORDER BY created_at DESC
            "#,
        )?;

        let rows = stmt.query_map(params![item_id], map_issue_row)?;

        let mut issues = Vec::new();
        for row in rows {
            issues.push(row?.into_issue()?);
        }

        Ok(issues)
    }

    fn list_all(&self) -> Result<Vec<Issue>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, item_id, title, description, severity, status,
                   reported_by, assigned_to, created_at, updated_at, resolved_at
            FROM issues
            ORDER BY created_at DESC
            "#,
        )?;

        let rows = stmt.query_map([], map_issue_row)?;

        let mut issues = Vec::new();
        for row in rows {
            issues.push(row?.into_issue()?);
        }

        Ok(issues)
    }

    fn update(&mut self, issue: &Issue) -> Result<()> {
        // Single keyed statement; no concurrent writer can observe a
        // half-applied transition.
        self.conn
            .execute(
                r#"
                UPDATE issues SET
                    status = ?1,
                    severity = ?2,
                    assigned_to = ?3,
                    updated_at = ?4,
                    resolved_at = ?5
                WHERE id = ?6
                "#,
                params![
                    issue.status.to_string(),
                    issue.severity.to_string(),
                    issue.assigned_to,
                    issue.updated_at.to_rfc3339(),
                    issue.resolved_at.map(|t| t.to_rfc3339()),
                    issue.id,
                ],
            )
            .context("Failed to update issue")?;

        Ok(())
    }

    fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM issues", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

/// Database statistics
#[derive(Debug, Clone, serde::Serialize)]
pub struct DatabaseStats {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub closed: usize,
}

// Internal row type for database mapping

struct IssueRow {
    id: String,
    item_id: i64,
    title: String,
    description: Option<String>,
    severity: String,
    status: String,
    reported_by: String,
    assigned_to: Option<String>,
    created_at: String,
    updated_at: String,
    resolved_at: Option<String>,
}

fn map_issue_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<IssueRow> {
    Ok(IssueRow {
        id: row.get(0)?,
        item_id: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        severity: row.get(4)?,
        status: row.get(5)?,
        reported_by: row.get(6)?,
        assigned_to: row.get(7)?,
        created_at: row.get(8)?,
        updated_at: row.get(9)?,
        resolved_at: row.get(10)?,
    })
}

impl IssueRow {
    fn into_issue(self) -> Result<Issue> {
        let severity: Severity = self
            .severity
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))?;
        let status: Status = self
            .status
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))?;

        Ok(Issue {
            id: self.id,
            item_id: self.item_id as u32,
            title: self.title,
            description: self.description,
            severity,
            status,
            reported_by: self.reported_by,
            assigned_to: self.assigned_to,
            created_at: parse_timestamp(&self.created_at)?,
            updated_at: parse_timestamp(&self.updated_at)?,
            resolved_at: self.resolved_at.as_deref().map(parse_timestamp).transpose()?,
        })
    }
}

fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(s)
        .with_context(|| format!("Invalid timestamp in database: {}", s))?;
    Ok(parsed.with_timezone(&Utc))
}
