//! Database schema definition

/// SQL schema for the HotelCheck database
pub const SCHEMA: &str = r#"
-- Reported inspection issues
CREATE TABLE IF NOT EXISTS issues (
    id TEXT PRIMARY KEY,
    item_id INTEGER NOT NULL,
    title TEXT NOT NULL,
    description TEXT,
    severity TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'open',
    reported_by TEXT NOT NULL,
    assigned_to TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    resolved_at TEXT
);

CREATE INDEX IF NOT EXISTS idx_issues_item ON issues(item_id);
CREATE INDEX IF NOT EXISTS idx_issues_status ON issues(status);
CREATE INDEX IF NOT EXISTS idx_issues_created ON issues(created_at);
"#;
