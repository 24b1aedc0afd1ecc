//! HotelCheck - Hotel inspection checklist and issue tracking tool
//!
//! This library provides the core functionality for walking a hotel
//! inspection checklist, reporting issues against checklist items, and
//! tracking those issues through their lifecycle.

pub mod catalog;
pub mod cli;
pub mod issue;
pub mod storage;
pub mod tracker;
pub mod workspace;

/// Re-export commonly used types
pub use catalog::{Catalog, ItemContext};
pub use issue::{Issue, IssueDraft, Severity, Status, StatusGroup};
pub use storage::Database;
pub use tracker::{IssueStore, IssueTracker, MemoryStore};
pub use workspace::Workspace;

/// Application-wide error type
pub use anyhow::Result;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "hotelcheck";
